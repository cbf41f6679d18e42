//! Service status and its visual styling
//!
//! The status set is closed: every variant maps to exactly one style, and
//! unrecognised spellings are rejected when text is parsed into a status.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::icon::Icon;


/// Health of a monitored service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ServiceStatus {
    Operational,
    Down,
    Slow,
}

/// Colour tokens, badge icon and label for a status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusStyle {
    /// Foreground colour class
    pub color: &'static str,
    /// Badge background class
    pub background: &'static str,
    /// Gradient used for the uptime bar
    pub gradient: &'static str,
    pub icon: Icon,
    /// Localized badge text
    pub label: &'static str,
}

impl ServiceStatus {
    pub const ALL: [ServiceStatus; 3] = [
        ServiceStatus::Operational,
        ServiceStatus::Down,
        ServiceStatus::Slow,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ServiceStatus::Operational => "operational",
            ServiceStatus::Down => "down",
            ServiceStatus::Slow => "slow",
        }
    }

    pub fn style(self) -> StatusStyle {
        match self {
            ServiceStatus::Operational => StatusStyle {
                color: "text-emerald-600",
                background: "bg-emerald-50",
                gradient: "from-emerald-500 to-green-600",
                icon: Icon::CheckCircle,
                label: "Operativo",
            },
            ServiceStatus::Down => StatusStyle {
                color: "text-red-600",
                background: "bg-red-50",
                gradient: "from-red-500 to-rose-600",
                icon: Icon::AlertCircle,
                label: "Caído",
            },
            ServiceStatus::Slow => StatusStyle {
                color: "text-amber-600",
                background: "bg-amber-50",
                gradient: "from-amber-500 to-orange-600",
                icon: Icon::Clock,
                label: "Lento",
            },
        }
    }
}

impl FromStr for ServiceStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "operational" => Ok(ServiceStatus::Operational),
            "down" => Ok(ServiceStatus::Down),
            "slow" => Ok(ServiceStatus::Slow),
            other => bail!(
                "Unknown service status '{}' (expected one of: operational, down, slow)",
                other
            ),
        }
    }
}

impl TryFrom<String> for ServiceStatus {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
