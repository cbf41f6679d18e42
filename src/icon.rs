use serde::{Deserialize, Serialize};
use std::fmt;

/// Glyphs the dashboard can show next to cards and badges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Server,
    Database,
    Globe,
    Activity,
    AlertCircle,
    CheckCircle,
    Clock,
    TrendingUp,
    Users,
    Zap,
}

impl Icon {
    /// Kebab-case name, used as a CSS hook in HTML output
    pub fn name(self) -> &'static str {
        match self {
            Icon::Server => "server",
            Icon::Database => "database",
            Icon::Globe => "globe",
            Icon::Activity => "activity",
            Icon::AlertCircle => "alert-circle",
            Icon::CheckCircle => "check-circle",
            Icon::Clock => "clock",
            Icon::TrendingUp => "trending-up",
            Icon::Users => "users",
            Icon::Zap => "zap",
        }
    }

    /// Single-character glyph for terminal output
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Server => "▣",
            Icon::Database => "⛁",
            Icon::Globe => "◍",
            Icon::Activity => "∿",
            Icon::AlertCircle => "⚠",
            Icon::CheckCircle => "✔",
            Icon::Clock => "◷",
            Icon::TrendingUp => "↗",
            Icon::Users => "☺",
            Icon::Zap => "⚡",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
