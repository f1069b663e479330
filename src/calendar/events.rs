//! Conversion of external calendar data into busy intervals

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use super::interval::TimeInterval;
use super::models::{AllDayPolicy, BusyCalendar, CalendarEvent, ScheduledLesson};

impl BusyCalendar {
    /// Build a busy calendar from external events.
    ///
    /// Events with missing or inverted bounds are skipped.
    pub fn from_events(events: &[CalendarEvent], policy: AllDayPolicy) -> Self {
        let mut calendar = BusyCalendar::new();
        for event in events {
            match event_interval(event, policy) {
                Some(interval) => calendar.push(interval),
                None if event.is_all_day() && policy == AllDayPolicy::Discard => {
                    log::debug!("Ignoring all-day event {:?}", event.summary);
                }
                None => {
                    log::warn!(
                        "Skipping calendar event {:?} with unusable bounds",
                        event.id.as_deref().or(event.summary.as_deref())
                    );
                }
            }
        }
        calendar
    }

    /// Add the lessons that are still pending
    pub fn add_lessons(&mut self, lessons: &[ScheduledLesson]) {
        for lesson in lessons.iter().filter(|l| !l.completed) {
            match lesson.interval() {
                Ok(interval) => self.push(interval),
                Err(e) => log::warn!(
                    "Skipping lesson at {} as busy time: {}",
                    lesson.scheduled_time,
                    e
                ),
            }
        }
    }

    /// Builder form of [`BusyCalendar::add_lessons`]
    pub fn with_lessons(mut self, lessons: &[ScheduledLesson]) -> Self {
        self.add_lessons(lessons);
        self
    }
}

fn event_interval(event: &CalendarEvent, policy: AllDayPolicy) -> Option<TimeInterval> {
    if let (Some(start), Some(end)) = (event.start.date_time, event.end.date_time) {
        return TimeInterval::new(start.with_timezone(&Utc), end.with_timezone(&Utc)).ok();
    }

    if policy == AllDayPolicy::Expand {
        let start_date = event.start.date?;
        // All-day end dates are exclusive; a missing end covers one day
        let end_date = match event.end.date {
            Some(date) => date,
            None => start_date.succ_opt()?,
        };
        return TimeInterval::new(midnight(start_date)?, midnight(end_date)?).ok();
    }

    None
}

fn midnight(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0).map(|naive| Utc.from_utc_datetime(&naive))
}

/// The default window searched for availability
pub fn search_window(now: DateTime<Utc>, horizon_days: u32) -> Option<TimeInterval> {
    let end = now.checked_add_signed(Duration::days(i64::from(horizon_days)))?;
    TimeInterval::new(now, end).ok()
}
