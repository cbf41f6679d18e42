use anyhow::Result;
use std::fmt::Write;
use tracing::warn;

use super::{gradient_stops, Renderer};
use crate::constants::labels;
use crate::icon::Icon;
use crate::view::{Animation, DashboardView, MetricTile, ServiceCardView, StatCardView};

const STYLESHEET: &str = r#"
* { box-sizing: border-box; margin: 0; }
body { min-height: 100vh; font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
  background: linear-gradient(to bottom right, #f8fafc, #eff6ff, #eef2ff); color: #1f2937; }
.container { max-width: 1200px; margin: 0 auto; padding: 2rem 1rem; }
header { text-align: center; margin-bottom: 3rem; }
h1 { font-size: 2.25rem; font-weight: 700; margin-bottom: 1rem; }
.highlight { margin-left: .5rem; background: linear-gradient(to right, #2563eb, #9333ea);
  -webkit-background-clip: text; background-clip: text; color: transparent; }
.subtitle { color: #4b5563; font-size: 1.125rem; }
.grid { display: grid; grid-template-columns: 1fr; }
.stats { gap: 1.5rem; margin-bottom: 3rem; }
.services { gap: 2rem; }
@media (min-width: 768px) { .stats { grid-template-columns: repeat(3, 1fr); }
  .services { grid-template-columns: repeat(2, 1fr); } }
@media (min-width: 1024px) { .services { grid-template-columns: repeat(3, 1fr); } }
.stat, .card { background: #fff; border: 1px solid #f3f4f6; transition: all .3s; }
.stat { padding: 1.5rem; border-radius: .75rem; box-shadow: 0 4px 6px -1px rgba(0,0,0,.1);
  display: flex; align-items: center; justify-content: space-between; }
.stat:hover { transform: scale(1.05); box-shadow: 0 10px 15px -3px rgba(0,0,0,.1); }
.stat-title { font-size: .875rem; color: #4b5563; margin-bottom: .25rem; }
.stat-value { font-size: 1.5rem; font-weight: 700; }
.bubble { padding: .75rem; border-radius: 9999px; color: #fff; }
.card { border-radius: 1rem; overflow: hidden; padding: 1.5rem;
  box-shadow: 0 10px 15px -3px rgba(0,0,0,.1); }
.card:hover { transform: translateY(-5px) scale(1.02); box-shadow: 0 25px 50px -12px rgba(0,0,0,.25); }
.card-head { display: flex; align-items: center; justify-content: space-between; margin-bottom: 1rem; }
.service-icon { padding: .75rem; border-radius: .75rem; font-size: 1.5rem; }
.badge { display: flex; align-items: center; gap: .5rem; padding: .25rem .75rem;
  border-radius: 9999px; font-size: .875rem; font-weight: 500; }
h3 { font-size: 1.25rem; font-weight: 600; margin-bottom: 1.5rem; }
.state { margin-bottom: 1.5rem; }
.state-row { display: flex; justify-content: space-between; align-items: center;
  margin-bottom: .5rem; font-size: .875rem; }
.state-label { color: #4b5563; }
.uptime { font-weight: 500; }
.track { width: 100%; height: .5rem; background: #e5e7eb; border-radius: 9999px; }
.fill { height: .5rem; border-radius: 9999px; }
.metrics { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1rem; }
.metric { text-align: center; padding: .75rem; background: #f9fafb; border-radius: .5rem; }
.metric-label { display: flex; align-items: center; justify-content: center; gap: .5rem;
  margin-bottom: .25rem; font-size: .75rem; color: #4b5563; }
.metric-value { font-size: 1.125rem; font-weight: 700; }
.icon-zap { color: #3b82f6; }
.icon-trending-up { color: #a855f7; }
footer { text-align: center; margin-top: 3rem; color: #6b7280; font-size: .875rem; }
@keyframes drop { from { opacity: 0; transform: translateY(-20px); } }
@keyframes rise { from { opacity: 0; transform: translateY(20px); } }
@keyframes pop { from { opacity: 0; transform: scale(.9); } }
@keyframes fade { from { opacity: 0; } }
@keyframes grow { from { width: 0; } }
"#;

/// Standalone HTML page renderer
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, view: &DashboardView) -> Result<String> {
        let mut out = String::new();
        write_page(&mut out, view)?;
        Ok(out)
    }
}

fn write_page(out: &mut String, view: &DashboardView) -> std::fmt::Result {
    let header = &view.header;

    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"es\">")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(
        out,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"
    )?;
    writeln!(
        out,
        "<title>{} {}</title>",
        escape(&header.title),
        escape(&header.highlight)
    )?;
    writeln!(out, "<style>{}</style>", STYLESHEET)?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<div class=\"container\">")?;

    writeln!(out, "<header style=\"{}\">", animation("drop", &header.enter))?;
    writeln!(
        out,
        "<h1>{}<span class=\"highlight\">{}</span></h1>",
        escape(&header.title),
        escape(&header.highlight)
    )?;
    writeln!(out, "<p class=\"subtitle\">{}</p>", escape(&header.subtitle))?;
    writeln!(out, "</header>")?;

    writeln!(out, "<section class=\"grid stats\">")?;
    for card in &view.stats {
        write_stat(out, card)?;
    }
    writeln!(out, "</section>")?;

    writeln!(out, "<section class=\"grid services\">")?;
    for card in &view.services {
        write_service(out, card)?;
    }
    writeln!(out, "</section>")?;

    writeln!(
        out,
        "<footer style=\"{}\"><p>{}</p></footer>",
        animation("fade", &view.footer.enter),
        escape(&view.footer.text)
    )?;
    writeln!(out, "</div>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

fn write_stat(out: &mut String, card: &StatCardView) -> std::fmt::Result {
    writeln!(
        out,
        "<div class=\"stat\" style=\"{}\">",
        animation("pop", &card.enter)
    )?;
    writeln!(
        out,
        "<div><p class=\"stat-title\">{}</p><p class=\"stat-value\">{}</p></div>",
        escape(&card.title),
        escape(&card.value)
    )?;
    writeln!(
        out,
        "<div class=\"bubble {}\" style=\"background: {}\">{}</div>",
        escape(&card.color),
        gradient_css(&card.color),
        icon(card.icon)
    )?;
    writeln!(out, "</div>")
}

fn write_service(out: &mut String, card: &ServiceCardView) -> std::fmt::Result {
    let style = &card.style;
    let tint = format!(
        "color: {}; background: {}",
        palette_or_default(style.color.trim_start_matches("text-")),
        palette_or_default(style.background.trim_start_matches("bg-"))
    );

    writeln!(
        out,
        "<article class=\"card status-{}\" data-key=\"{}\" style=\"{}\">",
        card.status,
        escape(&card.key),
        animation("rise", &card.enter)
    )?;

    writeln!(out, "<div class=\"card-head\">")?;
    writeln!(
        out,
        "<div class=\"service-icon\" style=\"{}\">{}</div>",
        tint,
        icon(card.icon)
    )?;
    writeln!(
        out,
        "<div class=\"badge {} {}\" style=\"{}\">{}<span>{}</span></div>",
        style.background,
        style.color,
        tint,
        icon(style.icon),
        escape(style.label)
    )?;
    writeln!(out, "</div>")?;

    writeln!(out, "<h3>{}</h3>", escape(&card.name))?;

    writeln!(out, "<div class=\"state\">")?;
    writeln!(
        out,
        "<div class=\"state-row\"><span class=\"state-label\">{}</span><span class=\"uptime\" style=\"color: {}\">{}</span></div>",
        labels::SERVICE_STATE,
        palette_or_default(style.color.trim_start_matches("text-")),
        escape(&card.uptime_label)
    )?;
    writeln!(
        out,
        "<div class=\"track\"><div class=\"fill\" style=\"width: {}%; background: {}; {}\"></div></div>",
        card.fill_percent,
        gradient_css(style.gradient),
        animation("grow", &card.bar)
    )?;
    writeln!(out, "</div>")?;

    writeln!(out, "<div class=\"metrics\">")?;
    write_metric(out, &card.response_time)?;
    write_metric(out, &card.requests)?;
    writeln!(out, "</div>")?;

    writeln!(out, "</article>")
}

fn write_metric(out: &mut String, tile: &MetricTile) -> std::fmt::Result {
    writeln!(
        out,
        "<div class=\"metric\"><div class=\"metric-label\">{}<span>{}</span></div><span class=\"metric-value\">{}</span></div>",
        icon(tile.icon),
        escape(tile.label),
        escape(&tile.value)
    )
}

fn icon(icon: Icon) -> String {
    format!(
        "<span class=\"icon icon-{}\" aria-hidden=\"true\">{}</span>",
        icon.name(),
        icon.glyph()
    )
}

/// CSS `animation` shorthand with backwards fill
fn animation(name: &str, timing: &Animation) -> String {
    format!(
        "animation: {} {:.2}s ease-out {:.2}s backwards",
        name, timing.duration, timing.delay
    )
}

fn gradient_css(token: &str) -> String {
    let (from, to) = gradient_stops(token);
    let from = from.map(palette_or_default).unwrap_or(FALLBACK_COLOR);
    let to = to.map(palette_or_default).unwrap_or(from);
    format!("linear-gradient(to right, {}, {})", from, to)
}

const FALLBACK_COLOR: &str = "#6b7280";

fn palette_or_default(token: &str) -> &'static str {
    palette(token).unwrap_or_else(|| {
        warn!("Unknown colour token '{}', using gray", token);
        FALLBACK_COLOR
    })
}

/// Hex values for the colour tokens the dashboard uses
fn palette(token: &str) -> Option<&'static str> {
    let hex = match token {
        "emerald-50" => "#ecfdf5",
        "emerald-500" => "#10b981",
        "emerald-600" => "#059669",
        "green-500" => "#22c55e",
        "green-600" => "#16a34a",
        "red-50" => "#fef2f2",
        "red-500" => "#ef4444",
        "red-600" => "#dc2626",
        "rose-600" => "#e11d48",
        "amber-50" => "#fffbeb",
        "amber-500" => "#f59e0b",
        "amber-600" => "#d97706",
        "orange-600" => "#ea580c",
        "blue-500" => "#3b82f6",
        "blue-600" => "#2563eb",
        "indigo-600" => "#4f46e5",
        "purple-500" => "#a855f7",
        "purple-600" => "#9333ea",
        "pink-600" => "#db2777",
        "gray-500" => "#6b7280",
        _ => return None,
    };
    Some(hex)
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
