use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::constants;
use crate::dashboard::Dashboard;


/// Where the dashboard definition came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Builtin,
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub dashboard: Dashboard,
    pub source: Source,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dashboard: Dashboard::default(),
            source: Source::Builtin,
        }
    }
}

impl Config {
    /// Load the dashboard definition.
    ///
    /// An explicit path must exist. Without one, the per-user
    /// `statusboard/dashboard.toml` is used when present, otherwise the
    /// built-in dashboard.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::from_file(&path);
            }
            debug!("No dashboard file at {}", path.display());
        }

        info!("Using built-in dashboard");
        Ok(Config::default())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        info!("Loading dashboard from {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dashboard file {}", path.display()))?;
        let dashboard = Dashboard::from_toml(&content)
            .with_context(|| format!("Invalid dashboard file {}", path.display()))?;

        Ok(Self {
            dashboard,
            source: Source::File(path.to_path_buf()),
        })
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| {
            dir.join(constants::config::DIR_NAME)
                .join(constants::config::FILE_NAME)
        })
    }
}
