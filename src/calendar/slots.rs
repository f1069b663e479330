//! Free slot search
//!
//! Candidates are scanned at whole hours, starting with the first full hour
//! strictly after the horizon start. The scan is bounded by
//! `horizon_days * 24` steps, which keeps it predictable without merging the
//! busy intervals first.

use chrono::{DateTime, Duration, Timelike, Utc};
use serde::{Deserialize, Serialize};

use super::interval::TimeInterval;
use super::models::BusyCalendar;
use crate::errors::{InvalidInput, Result};

/// Days ahead searched when no horizon is configured
pub const DEFAULT_HORIZON_DAYS: u32 = 7;

/// Hours of the day (inclusive on both ends) in which lessons may start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveHours {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl Default for ActiveHours {
    fn default() -> Self {
        Self {
            start_hour: 6,
            end_hour: 22,
        }
    }
}

impl ActiveHours {
    pub fn new(start_hour: u32, end_hour: u32) -> Result<Self> {
        let hours = Self {
            start_hour,
            end_hour,
        };
        hours.validate()?;
        Ok(hours)
    }

    pub fn validate(&self) -> Result<()> {
        check_hour(self.start_hour)?;
        check_hour(self.end_hour)?;
        if self.start_hour > self.end_hour {
            return Err(InvalidInput::InvertedActiveHours {
                start: self.start_hour,
                end: self.end_hour,
            });
        }
        Ok(())
    }

    pub fn contains(&self, hour: u32) -> bool {
        (self.start_hour..=self.end_hour).contains(&hour)
    }
}

fn check_hour(hour: u32) -> Result<()> {
    if hour > 23 {
        return Err(InvalidInput::HourOutOfRange(hour));
    }
    Ok(())
}

/// Parameters of a slot search
#[derive(Debug, Clone, PartialEq)]
pub struct SlotRequest {
    /// Length of the lesson to place
    pub duration: Duration,
    /// Search starts at the first full hour after this instant
    pub horizon_start: DateTime<Utc>,
    /// Number of days after `horizon_start` to search
    pub horizon_days: u32,
    pub active_hours: ActiveHours,
    /// When set, only candidates at exactly this hour are considered
    pub preferred_hour: Option<u32>,
}

impl SlotRequest {
    pub fn new(duration: Duration, horizon_start: DateTime<Utc>) -> Self {
        Self {
            duration,
            horizon_start,
            horizon_days: DEFAULT_HORIZON_DAYS,
            active_hours: ActiveHours::default(),
            preferred_hour: None,
        }
    }

    /// Builder method to set the number of days searched
    pub fn with_horizon_days(mut self, horizon_days: u32) -> Self {
        self.horizon_days = horizon_days;
        self
    }

    /// Builder method to set the active hours window
    pub fn with_active_hours(mut self, active_hours: ActiveHours) -> Self {
        self.active_hours = active_hours;
        self
    }

    /// Builder method to restrict candidates to one hour of the day
    pub fn with_preferred_hour(mut self, preferred_hour: Option<u32>) -> Self {
        self.preferred_hour = preferred_hour;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.duration <= Duration::zero() {
            return Err(InvalidInput::NonPositiveDuration);
        }
        self.active_hours.validate()?;
        if let Some(hour) = self.preferred_hour {
            check_hour(hour)?;
        }
        Ok(())
    }

    fn accepts_hour(&self, hour: u32) -> bool {
        self.active_hours.contains(hour) && self.preferred_hour.map_or(true, |p| p == hour)
    }
}

/// Find the earliest hour-aligned start where a lesson fits.
///
/// Returns `Ok(None)` when the horizon holds no free slot; the caller decides
/// how to fall back (usually manual scheduling). A preferred hour outside the
/// active hours never matches.
pub fn find_slot(request: &SlotRequest, busy: &BusyCalendar) -> Result<Option<DateTime<Utc>>> {
    request.validate()?;

    let horizon_end = request
        .horizon_start
        .checked_add_signed(Duration::days(i64::from(request.horizon_days)))
        .ok_or(InvalidInput::TimestampOutOfRange)?;

    let mut candidate = next_full_hour(request.horizon_start)?;
    while candidate < horizon_end {
        if request.accepts_hour(candidate.hour()) {
            let slot = TimeInterval::starting_at(candidate, request.duration)?;
            if !busy.conflicts_with(&slot) {
                return Ok(Some(candidate));
            }
        }

        candidate = match candidate.checked_add_signed(Duration::hours(1)) {
            Some(next) => next,
            None => break,
        };
    }

    Ok(None)
}

fn next_full_hour(instant: DateTime<Utc>) -> Result<DateTime<Utc>> {
    instant
        .with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .and_then(|t| t.checked_add_signed(Duration::hours(1)))
        .ok_or(InvalidInput::TimestampOutOfRange)
}
