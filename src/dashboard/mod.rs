//! Dashboard definition: header copy, stat cards and monitored services
//!
//! All values are display literals. The only field interpreted numerically
//! is the service uptime, which drives the width of the uptime bar.

use anyhow::{bail, Context, Result};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::icon::Icon;
use crate::status::ServiceStatus;


/// Uptime percentage in `[0, 100]`
///
/// Stored numerically; the `"99.9%"` form is derived on display. Accepts
/// either a number or a percent string when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(into = "f64")]
pub struct Uptime(f64);

impl Uptime {
    pub fn new(percent: f64) -> Result<Self> {
        if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
            bail!("Uptime must be between 0 and 100, got {}", percent);
        }
        Ok(Self(percent))
    }

    /// Parse `"99.9%"` or `"99.9"`
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
        let percent: f64 = number
            .parse()
            .with_context(|| format!("Invalid uptime '{}'", text))?;
        Self::new(percent)
    }

    pub fn percent(self) -> f64 {
        self.0
    }
}

struct UptimeVisitor;

impl<'de> Visitor<'de> for UptimeVisitor {
    type Value = Uptime;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an uptime percentage (a number or a percent string such as \"99.9%\")")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Uptime, E> {
        Uptime::new(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Uptime, E> {
        self.visit_f64(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Uptime, E> {
        self.visit_f64(v as f64)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Uptime, E> {
        Uptime::parse(v).map_err(|e| E::custom(format!("{:#}", e)))
    }
}

impl<'de> Deserialize<'de> for Uptime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(UptimeVisitor)
    }
}

impl From<Uptime> for f64 {
    fn from(uptime: Uptime) -> f64 {
        uptime.0
    }
}

impl fmt::Display for Uptime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Unique key of the service card
    pub id: String,
    pub name: String,
    pub status: ServiceStatus,
    pub uptime: Uptime,
    /// Display string, not interpreted
    pub response_time: String,
    /// Display string, not interpreted
    pub requests: String,
    pub icon: Icon,
}

/// Aggregate tile shown above the service grid
///
/// Values are independent of the service list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub icon: Icon,
    /// Gradient classes for the icon bubble
    pub color: String,
}

/// Missing fields fall back to the built-in copy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Header {
    pub title: String,
    /// Suffix rendered with the accent gradient
    pub highlight: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    #[serde(default)]
    pub header: Header,

    #[serde(default = "default_stats")]
    pub stats: Vec<StatCard>,

    #[serde(default = "default_services")]
    pub services: Vec<ServiceRecord>,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            title: "Dashboard de Monitoreo".to_string(),
            highlight: "TI".to_string(),
            subtitle: "Monitoreo en tiempo real del estado de servicios críticos".to_string(),
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self {
            header: Header::default(),
            stats: default_stats(),
            services: default_services(),
        }
    }
}

fn stat(title: &str, value: &str, icon: Icon, color: &str) -> StatCard {
    StatCard {
        title: title.to_string(),
        value: value.to_string(),
        icon,
        color: color.to_string(),
    }
}

fn default_stats() -> Vec<StatCard> {
    vec![
        stat(
            "Servicios Activos",
            "3/3",
            Icon::Activity,
            "from-emerald-500 to-green-600",
        ),
        stat(
            "Tiempo Promedio",
            "64ms",
            Icon::Zap,
            "from-blue-500 to-indigo-600",
        ),
        stat(
            "Usuarios Activos",
            "1.2K",
            Icon::Users,
            "from-purple-500 to-pink-600",
        ),
    ]
}

fn service(
    id: &str,
    name: &str,
    status: ServiceStatus,
    uptime: f64,
    response_time: &str,
    requests: &str,
    icon: Icon,
) -> ServiceRecord {
    ServiceRecord {
        id: id.to_string(),
        name: name.to_string(),
        status,
        uptime: Uptime(uptime),
        response_time: response_time.to_string(),
        requests: requests.to_string(),
        icon,
    }
}

fn default_services() -> Vec<ServiceRecord> {
    vec![
        service(
            "api-gateway",
            "API Gateway",
            ServiceStatus::Operational,
            99.9,
            "45ms",
            "2.3M",
            Icon::Server,
        ),
        service(
            "database",
            "Base de Datos",
            ServiceStatus::Slow,
            99.5,
            "120ms",
            "1.8M",
            Icon::Database,
        ),
        service(
            "frontend",
            "Frontend Web",
            ServiceStatus::Operational,
            100.0,
            "28ms",
            "5.2M",
            Icon::Globe,
        ),
    ]
}

impl Dashboard {
    /// Parse a dashboard definition; missing sections fall back to the built-in ones
    pub fn from_toml(content: &str) -> Result<Self> {
        let dashboard: Dashboard =
            toml::from_str(content).context("Failed to parse dashboard definition")?;
        dashboard.validate()?;
        Ok(dashboard)
    }

    /// Service ids must be non-empty and unique, since cards are keyed by them
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for service in &self.services {
            if service.id.trim().is_empty() {
                bail!("Service '{}' has an empty id", service.name);
            }
            if !seen.insert(service.id.as_str()) {
                bail!("Duplicate service id '{}'", service.id);
            }
        }
        Ok(())
    }
}
