//! Data models for calendar availability

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::interval::{overlaps, TimeInterval};
use crate::errors::Result;

/// Commitments that a new lesson must not collide with.
///
/// Built per call from the caller's current snapshot; order and overlap
/// between entries do not matter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BusyCalendar {
    intervals: Vec<TimeInterval>,
}

impl BusyCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_intervals(intervals: Vec<TimeInterval>) -> Self {
        Self { intervals }
    }

    pub fn push(&mut self, interval: TimeInterval) {
        self.intervals.push(interval);
    }

    pub fn intervals(&self) -> &[TimeInterval] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Check whether a candidate interval collides with any commitment
    pub fn conflicts_with(&self, candidate: &TimeInterval) -> bool {
        self.intervals.iter().any(|busy| overlaps(busy, candidate))
    }
}

impl FromIterator<TimeInterval> for BusyCalendar {
    fn from_iter<I: IntoIterator<Item = TimeInterval>>(iter: I) -> Self {
        Self {
            intervals: iter.into_iter().collect(),
        }
    }
}

impl Extend<TimeInterval> for BusyCalendar {
    fn extend<I: IntoIterator<Item = TimeInterval>>(&mut self, iter: I) {
        self.intervals.extend(iter);
    }
}

/// A lesson already booked by the learner
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledLesson {
    pub scheduled_time: DateTime<Utc>,
    #[serde(default = "default_lesson_duration")]
    pub duration_minutes: u32,
    #[serde(default)]
    pub completed: bool,
    /// Identifier of the mirrored calendar event, if one was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_event_id: Option<String>,
}

fn default_lesson_duration() -> u32 {
    30
}

impl ScheduledLesson {
    pub fn new(scheduled_time: DateTime<Utc>, duration_minutes: u32) -> Self {
        Self {
            scheduled_time,
            duration_minutes,
            completed: false,
            calendar_event_id: None,
        }
    }

    /// The time span this lesson occupies
    pub fn interval(&self) -> Result<TimeInterval> {
        TimeInterval::starting_at(
            self.scheduled_time,
            Duration::minutes(i64::from(self.duration_minutes)),
        )
    }
}

/// One boundary of a calendar event.
///
/// Timed events carry `dateTime`; all-day events carry only `date`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTime {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl EventTime {
    pub fn timed(date_time: DateTime<FixedOffset>) -> Self {
        Self {
            date_time: Some(date_time),
            date: None,
        }
    }

    pub fn all_day(date: NaiveDate) -> Self {
        Self {
            date_time: None,
            date: Some(date),
        }
    }
}

/// An event as reported by the external calendar
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub start: EventTime,
    #[serde(default)]
    pub end: EventTime,
}

impl CalendarEvent {
    pub fn new(start: EventTime, end: EventTime) -> Self {
        Self {
            id: None,
            summary: None,
            start,
            end,
        }
    }

    pub fn is_all_day(&self) -> bool {
        self.start.date_time.is_none() && self.start.date.is_some()
    }
}

/// What to do with all-day calendar entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllDayPolicy {
    /// Ignore all-day entries (holidays, birthdays and similar markers)
    #[default]
    Discard,
    /// Block the whole day, midnight to midnight UTC
    Expand,
}
