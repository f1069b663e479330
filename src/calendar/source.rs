//! External calendar contract and availability lookup
//!
//! The calendar client itself lives outside this crate. Callers construct it
//! once, hold it for the life of the process and pass it in by reference.

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::events::search_window;
use super::interval::TimeInterval;
use super::models::{BusyCalendar, CalendarEvent, ScheduledLesson};
use super::slots::find_slot;
use crate::config::SchedulingConfig;
use crate::errors::InvalidInput;

/// Why the external calendar could not supply events
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalendarError {
    #[error("Calendar is not connected")]
    NotConfigured,

    #[error("Calendar service unavailable: {0}")]
    Unavailable(String),

    #[error("Calendar credentials were rejected")]
    Unauthorized,

    #[error("Malformed calendar response: {0}")]
    MalformedResponse(String),
}

impl From<CalendarError> for String {
    fn from(err: CalendarError) -> Self {
        err.to_string()
    }
}

/// Anything that can list the learner's calendar events in a window
pub trait CalendarSource: Send + Sync {
    fn events(&self, window: &TimeInterval) -> Result<Vec<CalendarEvent>, CalendarError>;
}

/// Failure of an availability lookup
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SlotSearchError {
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
}

impl From<SlotSearchError> for String {
    fn from(err: SlotSearchError) -> Self {
        err.to_string()
    }
}

/// Find the next free lesson start, taking both the external calendar and
/// the learner's pending lessons into account.
pub fn find_available_slot(
    source: &dyn CalendarSource,
    lessons: &[ScheduledLesson],
    config: &SchedulingConfig,
    duration_minutes: u32,
    now: DateTime<Utc>,
) -> Result<Option<DateTime<Utc>>, SlotSearchError> {
    let request = config.slot_request(duration_minutes, now);
    if config.horizon_days == 0 {
        return find_slot(&request, &BusyCalendar::new()).map_err(SlotSearchError::from);
    }
    let window =
        search_window(now, config.horizon_days).ok_or(InvalidInput::TimestampOutOfRange)?;

    let events = source.events(&window).map_err(|e| {
        log::warn!("Failed to fetch calendar events: {}", e);
        e
    })?;
    log::debug!("Fetched {} calendar events", events.len());

    let busy = BusyCalendar::from_events(&events, config.all_day_events).with_lessons(lessons);

    let slot = find_slot(&request, &busy)?;
    match slot {
        Some(start) => log::info!("Found lesson slot at {}", start),
        None => log::info!(
            "No free {}-minute slot in the next {} days",
            duration_minutes,
            config.horizon_days
        ),
    }
    Ok(slot)
}
