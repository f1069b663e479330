//! End-to-end checks of the scheduling cores through the public API.

use std::fs;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Timelike, Utc};
use tempfile::TempDir;

use lango_lib::calendar::{
    find_available_slot, find_slot, BusyCalendar, CalendarError, CalendarEvent, CalendarSource,
    EventTime, ScheduledLesson, SlotRequest, SlotSearchError, TimeInterval,
};
use lango_lib::config::LangoConfig;
use lango_lib::practice::{
    adjust_difficulty, DifficultyChange, DifficultyTier, SessionPerformance,
};
use lango_lib::progress::{activity_dates, compute_streak, ActivityLog, DEFAULT_LOOKBACK_DAYS};
use lango_lib::review::{schedule_review, Quality, ReviewState, MIN_EASE_FACTOR};

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

fn state(repetitions: u32, ease_factor: f64, interval_days: u32) -> ReviewState {
    ReviewState {
        repetitions,
        ease_factor,
        interval_days,
        ..ReviewState::new(utc(2024, 1, 1, 0, 0))
    }
}

#[test]
fn test_successful_reviews_advance_repetitions() {
    for q in 3..=5 {
        for prior in [state(0, 2.5, 1), state(4, 1.3, 30), state(9, 2.9, 200)] {
            let next = schedule_review(Quality::new(q).unwrap(), &prior);
            assert_eq!(next.repetitions, prior.repetitions + 1);
            assert!(next.ease_factor >= MIN_EASE_FACTOR);
            assert!(next.interval_days >= 1);
        }
    }
}

#[test]
fn test_failed_reviews_reset_schedule() {
    for q in 0..3 {
        for prior in [state(0, 2.5, 1), state(7, 1.3, 90), state(3, 2.2, 15)] {
            let next = schedule_review(Quality::new(q).unwrap(), &prior);
            assert_eq!(next.repetitions, 0);
            assert_eq!(next.interval_days, 1);
            assert!(next.ease_factor >= MIN_EASE_FACTOR);
        }
    }
}

#[test]
fn test_first_and_second_review_intervals() {
    let first = schedule_review(Quality::new(4).unwrap(), &state(0, 2.5, 1));
    assert_eq!(first.repetitions, 1);
    assert_eq!(first.interval_days, 1);

    for ease in [1.3, 2.0, 2.5, 3.1] {
        let second = schedule_review(Quality::new(3).unwrap(), &state(1, ease, 1));
        assert_eq!(second.interval_days, 6);
    }
}

#[test]
fn test_review_sequence_grows_interval() {
    let mut now = utc(2024, 1, 1, 9, 0);
    let mut item = ReviewState::new(now);
    let mut intervals = Vec::new();

    for _ in 0..4 {
        item = schedule_review(Quality::PERFECT, &item).into_state(now).unwrap();
        intervals.push(item.interval_days);
        now = item.next_review_date;
    }

    // ease 2.6, 2.7, 2.8, 2.9
    assert_eq!(intervals, vec![1, 6, 17, 49]);
    assert_eq!(item.repetitions, 4);
    assert!(!item.is_due(now - Duration::seconds(1)));
    assert!(item.is_due(now));
}

#[test]
fn test_empty_calendar_slot_is_next_active_hour() {
    let busy = BusyCalendar::new();
    let cases = [
        (utc(2024, 3, 4, 10, 0), utc(2024, 3, 4, 11, 0)),
        (utc(2024, 3, 4, 10, 59), utc(2024, 3, 4, 11, 0)),
        (utc(2024, 3, 4, 22, 0), utc(2024, 3, 5, 6, 0)),
        (utc(2024, 3, 4, 2, 30), utc(2024, 3, 4, 6, 0)),
    ];

    for (start, expected) in cases {
        let request = SlotRequest::new(Duration::minutes(30), start);
        let slot = find_slot(&request, &busy).unwrap().unwrap();
        assert_eq!(slot, expected, "search from {}", start);
        assert_eq!(slot.minute(), 0);
        assert!((6..=22).contains(&slot.hour()));
    }
}

#[test]
fn test_fully_busy_horizon_has_no_slot() {
    let start = utc(2024, 3, 4, 10, 0);
    let busy: BusyCalendar = [TimeInterval::new(start, start + Duration::days(8)).unwrap()]
        .into_iter()
        .collect();

    let request = SlotRequest::new(Duration::minutes(30), start);
    assert_eq!(find_slot(&request, &busy), Ok(None));
}

#[test]
fn test_preferred_hour_outside_active_hours() {
    let start = utc(2024, 3, 4, 10, 0);
    let calendars = [
        BusyCalendar::new(),
        [TimeInterval::new(start, start + Duration::hours(5)).unwrap()]
            .into_iter()
            .collect(),
    ];

    for busy in &calendars {
        for hour in [0, 3, 5, 23] {
            let request =
                SlotRequest::new(Duration::minutes(30), start).with_preferred_hour(Some(hour));
            assert_eq!(find_slot(&request, busy), Ok(None));
        }
    }
}

#[test]
fn test_short_sessions_never_change_difficulty() {
    for tier in [
        DifficultyTier::Beginner,
        DifficultyTier::Intermediate,
        DifficultyTier::Advanced,
    ] {
        let decision = adjust_difficulty(&SessionPerformance::new(1, 1), tier);
        assert_eq!(decision.tier, tier);
        assert_eq!(decision.change, DifficultyChange::None);
    }
}

#[test]
fn test_strong_session_respects_ceiling() {
    let strong = SessionPerformance::new(0, 8);

    let decision = adjust_difficulty(&strong, DifficultyTier::from_level(1).unwrap());
    assert_eq!(decision.tier.level(), 2);
    assert_eq!(decision.change, DifficultyChange::Increase);

    let decision = adjust_difficulty(&strong, DifficultyTier::from_level(3).unwrap());
    assert_eq!(decision.tier.level(), 3);
    assert_eq!(decision.change, DifficultyChange::None);
}

#[test]
fn test_streak_from_session_end_times() {
    let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    let ended = [
        utc(2024, 3, 10, 18, 0),
        utc(2024, 3, 9, 7, 30),
        utc(2024, 3, 8, 21, 0),
        utc(2024, 3, 6, 20, 0),
        utc(2024, 3, 5, 20, 0),
    ];

    let log = activity_dates(ended);
    assert_eq!(compute_streak(&log, today, DEFAULT_LOOKBACK_DAYS), Ok(3));
    assert_eq!(
        compute_streak(&ActivityLog::new(), today, DEFAULT_LOOKBACK_DAYS),
        Ok(0)
    );
}

struct StaticCalendar(Result<Vec<CalendarEvent>, CalendarError>);

impl CalendarSource for StaticCalendar {
    fn events(&self, _window: &TimeInterval) -> Result<Vec<CalendarEvent>, CalendarError> {
        self.0.clone()
    }
}

#[test]
fn test_configured_slot_search() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[scheduling]\npreferred_hour = 19\n\n[scheduling.active_hours]\nstart_hour = 8\nend_hour = 21\n",
    )
    .unwrap();
    let config = LangoConfig::load(&path).unwrap();

    let now = utc(2024, 3, 4, 9, 12);
    let meeting = CalendarEvent::new(
        EventTime::timed(utc(2024, 3, 4, 18, 30).into()),
        EventTime::timed(utc(2024, 3, 4, 19, 15).into()),
    );
    let lessons = [ScheduledLesson::new(utc(2024, 3, 5, 19, 0), 30)];
    let source = StaticCalendar(Ok(vec![meeting]));

    let slot = find_available_slot(&source, &lessons, &config.scheduling, 30, now).unwrap();
    assert_eq!(slot, Some(utc(2024, 3, 6, 19, 0)));
}

#[test]
fn test_calendar_failure_is_reported() {
    let config = LangoConfig::default();
    let source = StaticCalendar(Err(CalendarError::Unauthorized));

    let result = find_available_slot(&source, &[], &config.scheduling, 30, utc(2024, 3, 4, 9, 0));
    assert_eq!(
        result,
        Err(SlotSearchError::Calendar(CalendarError::Unauthorized))
    );
}
