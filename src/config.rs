//! Scheduler configuration
//!
//! Read from `config.toml` in the platform config directory, e.g.
//! `~/.config/lango/config.toml` on Linux:
//!
//! ```toml
//! [scheduling]
//! horizon_days = 7
//! lesson_duration_minutes = 30
//! preferred_hour = 19
//! all_day_events = "discard"
//!
//! [scheduling.active_hours]
//! start_hour = 6
//! end_hour = 22
//!
//! [difficulty]
//! min_signal = 3
//! min_decisive = 5
//! promote_rate = 0.8
//! demote_rate = 0.3
//!
//! [progress]
//! streak_lookback_days = 30
//! session_minutes_cap = 120
//! ```
//!
//! Every key is optional.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::{ActiveHours, AllDayPolicy, SlotRequest, DEFAULT_HORIZON_DAYS};
use crate::practice::DifficultyPolicy;
use crate::progress::{self, PracticeSession, DEFAULT_LOOKBACK_DAYS, SESSION_MINUTES_CAP};

const APP_DIR: &str = "lango";
const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error("Config directory not found")]
    ConfigDirNotFound,
}

impl From<ConfigError> for String {
    fn from(err: ConfigError) -> Self {
        err.to_string()
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Lesson slot search settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulingConfig {
    pub horizon_days: u32,
    pub lesson_duration_minutes: u32,
    /// Only offer slots starting at this hour (UTC) when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_hour: Option<u32>,
    pub all_day_events: AllDayPolicy,
    pub active_hours: ActiveHours,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
            lesson_duration_minutes: 30,
            preferred_hour: None,
            all_day_events: AllDayPolicy::default(),
            active_hours: ActiveHours::default(),
        }
    }
}

impl SchedulingConfig {
    /// Slot search for a lesson of `duration_minutes` starting from `now`
    pub fn slot_request(&self, duration_minutes: u32, now: DateTime<Utc>) -> SlotRequest {
        SlotRequest::new(Duration::minutes(i64::from(duration_minutes)), now)
            .with_horizon_days(self.horizon_days)
            .with_active_hours(self.active_hours)
            .with_preferred_hour(self.preferred_hour)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    pub streak_lookback_days: u32,
    pub session_minutes_cap: u32,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            streak_lookback_days: DEFAULT_LOOKBACK_DAYS,
            session_minutes_cap: SESSION_MINUTES_CAP,
        }
    }
}

impl ProgressConfig {
    /// Total practice minutes, each session capped at `session_minutes_cap`
    pub fn practice_minutes(&self, sessions: &[PracticeSession]) -> u32 {
        progress::practice_minutes(sessions, self.session_minutes_cap)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LangoConfig {
    pub scheduling: SchedulingConfig,
    pub difficulty: DifficultyPolicy,
    pub progress: ProgressConfig,
}

impl LangoConfig {
    /// Default location of the config file
    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR).join(CONFIG_FILE))
            .ok_or(ConfigError::ConfigDirNotFound)
    }

    /// Read and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Like [`LangoConfig::load`], but a missing file yields the defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn validate(&self) -> Result<()> {
        let scheduling = &self.scheduling;
        scheduling
            .active_hours
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("scheduling.active_hours: {}", e)))?;
        if let Some(hour) = scheduling.preferred_hour {
            if hour > 23 {
                return Err(ConfigError::Invalid(format!(
                    "scheduling.preferred_hour must be 0-23, got {}",
                    hour
                )));
            }
            if !scheduling.active_hours.contains(hour) {
                log::warn!(
                    "Preferred hour {} is outside active hours; no slots will be found",
                    hour
                );
            }
        }
        if scheduling.lesson_duration_minutes == 0 {
            return Err(ConfigError::Invalid(
                "scheduling.lesson_duration_minutes must be positive".to_string(),
            ));
        }

        let difficulty = &self.difficulty;
        let rate_in_range = |rate: f64| (0.0..=1.0).contains(&rate);
        if !rate_in_range(difficulty.promote_rate) || !rate_in_range(difficulty.demote_rate) {
            return Err(ConfigError::Invalid(
                "difficulty rates must be between 0 and 1".to_string(),
            ));
        }
        if difficulty.demote_rate >= difficulty.promote_rate {
            return Err(ConfigError::Invalid(format!(
                "difficulty.demote_rate ({}) must be below promote_rate ({})",
                difficulty.demote_rate, difficulty.promote_rate
            )));
        }
        if difficulty.min_decisive < difficulty.min_signal {
            return Err(ConfigError::Invalid(
                "difficulty.min_decisive must not be below min_signal".to_string(),
            ));
        }

        if self.progress.streak_lookback_days == 0 {
            return Err(ConfigError::Invalid(
                "progress.streak_lookback_days must be positive".to_string(),
            ));
        }

        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
