use anyhow::{Context, Result};

use super::Renderer;
use crate::view::DashboardView;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, view: &DashboardView) -> Result<String> {
        let mut out =
            serde_json::to_string_pretty(view).context("Failed to serialize dashboard view")?;
        out.push('\n');
        Ok(out)
    }
}
