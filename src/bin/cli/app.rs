use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};

use lango_lib::config::LangoConfig;

/// Shared application state for CLI commands
pub struct App {
    pub config: LangoConfig,
    /// Where the config was read from, `None` when running on defaults
    pub config_path: Option<PathBuf>,
}

impl App {
    /// Load the config named on the command line, or the default file if present
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = config_path {
            let config = LangoConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            return Ok(Self {
                config,
                config_path: Some(path.to_path_buf()),
            });
        }

        let path = LangoConfig::default_path().context("Failed to locate config directory")?;
        let config = LangoConfig::load_or_default(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?;
        let config_path = path.exists().then_some(path);

        Ok(Self {
            config,
            config_path,
        })
    }

    /// The `--now` override, or the current time
    pub fn now(now: Option<DateTime<Utc>>) -> DateTime<Utc> {
        now.unwrap_or_else(Utc::now)
    }

    /// The `--today` override, or the current UTC date
    pub fn today(today: Option<NaiveDate>) -> NaiveDate {
        today.unwrap_or_else(|| Utc::now().date_naive())
    }
}

/// Read a JSON file into `T`
pub fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}
