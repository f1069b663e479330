//! Data models for vocabulary review scheduling

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{InvalidInput, Result};

/// Lowest ease factor an item can reach
pub const MIN_EASE_FACTOR: f64 = 1.3;

/// Ease factor of an item that has never been reviewed
pub const DEFAULT_EASE_FACTOR: f64 = 2.5;

/// Recall quality on the SM-2 scale (0-5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Quality(pub(super) u8);

impl Quality {
    pub const BLACKOUT: Quality = Quality(0);
    pub const PERFECT: Quality = Quality(5);

    pub fn new(value: i32) -> Result<Self> {
        match u8::try_from(value) {
            Ok(q) if q <= 5 => Ok(Self(q)),
            _ => Err(InvalidInput::QualityOutOfRange(value)),
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Ratings of 3 and above count as a successful recall
    pub fn is_recalled(self) -> bool {
        self.0 >= 3
    }
}

impl TryFrom<i32> for Quality {
    type Error = InvalidInput;

    fn try_from(value: i32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Quality> for i32 {
    fn from(quality: Quality) -> Self {
        i32::from(quality.0)
    }
}

/// Spaced repetition state for one (learner, vocabulary item) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewState {
    /// Consecutive successful recalls
    #[serde(default)]
    pub repetitions: u32,
    /// SM-2 ease factor (default 2.5, never below 1.3)
    #[serde(default = "default_ease_factor")]
    pub ease_factor: f64,
    /// Current interval in days
    #[serde(default = "default_interval_days")]
    pub interval_days: u32,
    /// When the item is next due
    pub next_review_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reviewed: Option<DateTime<Utc>>,
}

fn default_ease_factor() -> f64 {
    DEFAULT_EASE_FACTOR
}

fn default_interval_days() -> u32 {
    1
}

impl ReviewState {
    /// State for an item the learner has not reviewed yet; due immediately
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            repetitions: 0,
            ease_factor: DEFAULT_EASE_FACTOR,
            interval_days: 1,
            next_review_date: now,
            last_reviewed: None,
        }
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        now >= self.next_review_date
    }

    pub fn mastery(&self) -> MasteryLevel {
        MasteryLevel::from_repetitions(self.repetitions)
    }
}

/// Output of one scheduling step, before it is stamped with a review time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSchedule {
    pub repetitions: u32,
    pub ease_factor: f64,
    pub interval_days: u32,
}

impl ReviewSchedule {
    /// Turn the schedule into the state to persist for a review made at `now`
    pub fn into_state(self, now: DateTime<Utc>) -> Result<ReviewState> {
        let next_review_date = now
            .checked_add_signed(Duration::days(i64::from(self.interval_days)))
            .ok_or(InvalidInput::TimestampOutOfRange)?;

        Ok(ReviewState {
            repetitions: self.repetitions,
            ease_factor: self.ease_factor,
            interval_days: self.interval_days,
            next_review_date,
            last_reviewed: Some(now),
        })
    }
}

/// Coarse progress bucket derived from the repetition count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MasteryLevel {
    /// No successful recall yet
    New,
    /// One or two consecutive recalls
    Learning,
    /// Three or four consecutive recalls
    Reviewing,
    /// Five or more consecutive recalls
    Mastered,
}

impl MasteryLevel {
    pub fn from_repetitions(repetitions: u32) -> Self {
        match repetitions {
            0 => Self::New,
            1..=2 => Self::Learning,
            3..=4 => Self::Reviewing,
            _ => Self::Mastered,
        }
    }
}
