//! Output back ends for a composed [`DashboardView`]

use anyhow::Result;
use std::fmt;

use crate::view::DashboardView;

mod html;
mod json;
mod text;

#[cfg(test)]
mod tests;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use text::TextRenderer;

/// Turns a view tree into a document
pub trait Renderer {
    fn render(&self, view: &DashboardView) -> Result<String>;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Coloured terminal output
    #[default]
    Text,
    /// Standalone animated HTML page
    Html,
    /// View tree as JSON
    Json,
}

impl Format {
    /// Pick the back end; `color` only affects text output
    pub fn renderer(self, color: bool) -> Box<dyn Renderer> {
        match self {
            Format::Text => Box::new(TextRenderer::new(color)),
            Format::Html => Box::new(HtmlRenderer),
            Format::Json => Box::new(JsonRenderer),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Text => "text",
            Format::Html => "html",
            Format::Json => "json",
        };
        f.write_str(name)
    }
}

/// Split a `from-<color> to-<color>` gradient token into its two stops
pub(crate) fn gradient_stops(token: &str) -> (Option<&str>, Option<&str>) {
    let mut from = None;
    let mut to = None;
    for part in token.split_whitespace() {
        if let Some(color) = part.strip_prefix("from-") {
            from = Some(color);
        } else if let Some(color) = part.strip_prefix("to-") {
            to = Some(color);
        }
    }
    (from, to)
}
