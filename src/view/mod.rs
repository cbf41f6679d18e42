//! Render-ready view tree
//!
//! Composition turns a [`Dashboard`] into cards carrying everything a back
//! end needs: resolved status styles, bar fill, labels and animation timing.
//! It runs once per render; the footer clock is captured at that moment.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::constants::{animation, labels, TIME_FORMAT};
use crate::dashboard::{Dashboard, Header, ServiceRecord, StatCard};
use crate::icon::Icon;
use crate::status::{ServiceStatus, StatusStyle};

#[cfg(test)]
mod tests;

/// Entrance animation timing, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Animation {
    pub delay: f64,
    pub duration: f64,
}

impl Animation {
    fn immediate(duration: f64) -> Self {
        Self {
            delay: 0.0,
            duration,
        }
    }

    fn staggered(index: usize, step: f64, duration: f64) -> Self {
        // Rounded to centiseconds so 3 * 0.1 prints as 0.3
        let delay = (index as f64 * step * 100.0).round() / 100.0;
        Self { delay, duration }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HeaderView {
    pub title: String,
    pub highlight: String,
    pub subtitle: String,
    pub enter: Animation,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatCardView {
    pub title: String,
    pub value: String,
    pub icon: Icon,
    pub color: String,
    pub enter: Animation,
}

/// A metric tile inside a service card
#[derive(Debug, Clone, Serialize)]
pub struct MetricTile {
    pub label: &'static str,
    pub value: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceCardView {
    /// Stable key, the service id
    pub key: String,
    pub name: String,
    pub icon: Icon,
    pub status: ServiceStatus,
    pub style: StatusStyle,
    /// e.g. `"99.9% uptime"`
    pub uptime_label: String,
    /// Uptime bar width in percent
    pub fill_percent: f64,
    pub response_time: MetricTile,
    pub requests: MetricTile,
    pub enter: Animation,
    pub bar: Animation,
}

#[derive(Debug, Clone, Serialize)]
pub struct FooterView {
    /// Local time of day, `HH:MM:SS`
    pub timestamp: String,
    pub text: String,
    pub enter: Animation,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub header: HeaderView,
    pub stats: Vec<StatCardView>,
    pub services: Vec<ServiceCardView>,
    pub footer: FooterView,
    #[serde(skip)]
    pub rendered_at: DateTime<Local>,
}

impl From<&Header> for HeaderView {
    fn from(header: &Header) -> Self {
        Self {
            title: header.title.clone(),
            highlight: header.highlight.clone(),
            subtitle: header.subtitle.clone(),
            enter: Animation::immediate(animation::HEADER_DURATION),
        }
    }
}

impl From<&StatCard> for StatCardView {
    fn from(card: &StatCard) -> Self {
        Self {
            title: card.title.clone(),
            value: card.value.clone(),
            icon: card.icon,
            color: card.color.clone(),
            enter: Animation::immediate(animation::STAT_DURATION),
        }
    }
}

impl ServiceCardView {
    /// `index` only affects animation staggering
    pub fn new(service: &ServiceRecord, index: usize) -> Self {
        Self {
            key: service.id.clone(),
            name: service.name.clone(),
            icon: service.icon,
            status: service.status,
            style: service.status.style(),
            uptime_label: format!("{} uptime", service.uptime),
            fill_percent: service.uptime.percent(),
            response_time: MetricTile {
                label: labels::RESPONSE_TIME,
                value: service.response_time.clone(),
                icon: Icon::Zap,
            },
            requests: MetricTile {
                label: labels::REQUESTS,
                value: service.requests.clone(),
                icon: Icon::TrendingUp,
            },
            enter: Animation::staggered(index, animation::CARD_STAGGER, animation::CARD_DURATION),
            bar: Animation::staggered(index, animation::BAR_STAGGER, animation::BAR_DURATION),
        }
    }
}

impl FooterView {
    pub fn at(now: &DateTime<Local>) -> Self {
        let timestamp = now.format(TIME_FORMAT).to_string();
        Self {
            text: format!("{}: {}", labels::LAST_UPDATE, timestamp),
            timestamp,
            enter: Animation {
                delay: animation::FOOTER_DELAY,
                duration: animation::FOOTER_DURATION,
            },
        }
    }
}

impl DashboardView {
    pub fn compose(dashboard: &Dashboard, now: DateTime<Local>) -> Self {
        Self {
            header: HeaderView::from(&dashboard.header),
            stats: dashboard.stats.iter().map(StatCardView::from).collect(),
            services: dashboard
                .services
                .iter()
                .enumerate()
                .map(|(index, service)| ServiceCardView::new(service, index))
                .collect(),
            footer: FooterView::at(&now),
            rendered_at: now,
        }
    }

    /// Compose using the host clock
    pub fn now(dashboard: &Dashboard) -> Self {
        Self::compose(dashboard, Local::now())
    }
}
