//! Data models for learner progress

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Days on which the learner finished at least one practice session
pub type ActivityLog = BTreeSet<NaiveDate>;

/// A conversation practice session, open until `ended_at` is set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeSession {
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub ended_at: Option<DateTime<Utc>>,
}

impl PracticeSession {
    pub fn new(started_at: DateTime<Utc>, ended_at: Option<DateTime<Utc>>) -> Self {
        Self {
            started_at,
            ended_at,
        }
    }

    /// Elapsed time of a finished session
    pub fn duration(&self) -> Option<Duration> {
        self.ended_at.map(|end| end - self.started_at)
    }
}

/// One bar of the seven-day activity chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyActivity {
    pub date: NaiveDate,
    /// Short weekday name, e.g. "Mon"
    pub day_label: String,
    pub reviews: u32,
    pub sessions: u32,
}

/// How many items sit in each mastery bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasteryStats {
    pub new: u32,
    pub learning: u32,
    pub reviewing: u32,
    pub mastered: u32,
}

impl MasteryStats {
    pub fn total(&self) -> u32 {
        self.new + self.learning + self.reviewing + self.mastered
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryMastery {
    pub name: String,
    pub mastered: u32,
    pub total: u32,
    /// Rounded share of mastered items, 0 for an empty category
    pub percent: u32,
}
