//! Render service
//!
//! Composes the view once, hands it to the selected back end and writes the
//! document to a file or returns it for stdout.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::{dashboard::Dashboard, render::Format, view::DashboardView};

/// Configuration for a render operation
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub format: Format,
    pub color: bool,
    pub output: Option<PathBuf>,
}

/// Result of a render operation
#[derive(Debug)]
pub struct RenderResult {
    /// Rendered document, `None` when it was written to a file
    pub document: Option<String>,
    pub rendered_at: DateTime<Local>,
}

pub struct RenderService;

impl RenderService {
    /// Render the dashboard using the host clock for the footer
    pub fn render(dashboard: &Dashboard, config: &RenderConfig) -> Result<RenderResult> {
        Self::render_at(dashboard, config, Local::now())
    }

    pub fn render_at(
        dashboard: &Dashboard,
        config: &RenderConfig,
        now: DateTime<Local>,
    ) -> Result<RenderResult> {
        let view = DashboardView::compose(dashboard, now);
        debug!(
            "Composed {} stat card(s) and {} service card(s)",
            view.stats.len(),
            view.services.len()
        );

        let document = config.format.renderer(config.color).render(&view)?;

        match &config.output {
            Some(path) => {
                std::fs::write(path, &document)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!("Wrote {} dashboard to {}", config.format, path.display());
                Ok(RenderResult {
                    document: None,
                    rendered_at: view.rendered_at,
                })
            }
            None => Ok(RenderResult {
                document: Some(document),
                rendered_at: view.rendered_at,
            }),
        }
    }
}
