use anyhow::Result;
use colored::{Color, Colorize};
use std::fmt::Write;

use super::{gradient_stops, Renderer};
use crate::constants::labels;
use crate::status::ServiceStatus;
use crate::view::{DashboardView, ServiceCardView, StatCardView};

const BAR_WIDTH: usize = 30;
const RULE_WIDTH: usize = 48;

/// Terminal renderer
pub struct TextRenderer {
    color: bool,
}

impl TextRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn write_stat(&self, out: &mut String, card: &StatCardView) -> std::fmt::Result {
        let accent = gradient_stops(&card.color)
            .0
            .map(terminal_color)
            .unwrap_or(Color::White);
        writeln!(
            out,
            "  {} {:<22}{}",
            self.paint(card.icon.glyph(), accent),
            card.title,
            self.bold(&card.value)
        )
    }

    fn write_service(&self, out: &mut String, card: &ServiceCardView) -> std::fmt::Result {
        let color = status_color(card.status);
        let badge = format!("{} {}", card.style.icon.glyph(), card.style.label);

        writeln!(out, "{}", self.dim(&"─".repeat(RULE_WIDTH)))?;
        writeln!(
            out,
            "{} {}{}",
            self.paint(card.icon.glyph(), color),
            self.bold(&format!("{:<32}", card.name)),
            self.paint(&badge, color)
        )?;
        writeln!(
            out,
            "  {:<32}{}",
            labels::SERVICE_STATE,
            self.paint(&card.uptime_label, color)
        )?;
        writeln!(out, "  {}", self.paint(&bar(card.fill_percent), color))?;
        writeln!(
            out,
            "  {} {} {} {} {} {}",
            card.response_time.icon.glyph(),
            card.response_time.label,
            self.bold(&format!("{:<8}", card.response_time.value)),
            card.requests.icon.glyph(),
            card.requests.label,
            self.bold(&card.requests.value)
        )
    }

    fn write_dashboard(&self, out: &mut String, view: &DashboardView) -> std::fmt::Result {
        writeln!(
            out,
            "{} {}",
            self.bold(&view.header.title),
            self.paint(&view.header.highlight, Color::Blue)
        )?;
        writeln!(out, "{}", view.header.subtitle)?;
        writeln!(out)?;

        for card in &view.stats {
            self.write_stat(out, card)?;
        }
        writeln!(out)?;

        for card in &view.services {
            self.write_service(out, card)?;
        }
        writeln!(out, "{}", self.dim(&"─".repeat(RULE_WIDTH)))?;
        writeln!(out)?;
        writeln!(out, "{}", self.dim(&view.footer.text))
    }
}

impl Renderer for TextRenderer {
    fn render(&self, view: &DashboardView) -> Result<String> {
        let mut out = String::new();
        self.write_dashboard(&mut out, view)?;
        Ok(out)
    }
}

fn status_color(status: ServiceStatus) -> Color {
    match status {
        ServiceStatus::Operational => Color::Green,
        ServiceStatus::Down => Color::Red,
        ServiceStatus::Slow => Color::Yellow,
    }
}

/// Map a palette token such as `emerald-500` to the closest ANSI colour
fn terminal_color(token: &str) -> Color {
    let hue = token.split('-').next().unwrap_or(token);
    match hue {
        "emerald" | "green" | "lime" | "teal" => Color::Green,
        "red" | "rose" => Color::Red,
        "amber" | "orange" | "yellow" => Color::Yellow,
        "blue" | "indigo" | "sky" => Color::Blue,
        "purple" | "pink" | "violet" | "fuchsia" => Color::Magenta,
        "cyan" => Color::Cyan,
        _ => Color::White,
    }
}

/// Fixed-width uptime bar
fn bar(fill_percent: f64) -> String {
    let filled = ((fill_percent.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled)
    )
}
