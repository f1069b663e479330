//! Daily practice streaks
//!
//! A streak counts consecutive active days ending today. Today itself may
//! still be empty without breaking the streak, since the day is not over.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

use super::models::ActivityLog;
use crate::errors::{InvalidInput, Result};

/// How far back `compute_streak` looks by default
pub const DEFAULT_LOOKBACK_DAYS: u32 = 30;

/// Count consecutive active days ending at `today`, looking back at most
/// `lookback_days` days (today included).
pub fn compute_streak(
    log: &ActivityLog,
    today: NaiveDate,
    lookback_days: u32,
) -> Result<u32> {
    if lookback_days == 0 {
        return Err(InvalidInput::ZeroLookback);
    }

    let mut streak = 0u32;
    for offset in 0..lookback_days {
        let Some(check_date) = today.checked_sub_signed(Duration::days(i64::from(offset))) else {
            break;
        };

        if log.contains(&check_date) {
            streak += 1;
        } else if offset > 0 {
            break;
        }
    }

    Ok(streak)
}

/// Longest run of consecutive active days anywhere in the log
pub fn longest_streak(log: &ActivityLog) -> u32 {
    let mut longest = 0u32;
    let mut current = 0u32;
    let mut previous: Option<NaiveDate> = None;

    for &date in log {
        current = match previous {
            Some(prev) if prev.succ_opt() == Some(date) => current + 1,
            _ => 1,
        };
        longest = longest.max(current);
        previous = Some(date);
    }

    longest
}

/// Activity days from session end timestamps, taking the UTC calendar date
pub fn activity_dates<I>(ended_at: I) -> ActivityLog
where
    I: IntoIterator<Item = DateTime<Utc>>,
{
    ended_at.into_iter().map(|ts| ts.date_naive()).collect()
}

/// Activity days from end timestamps already shifted into the learner's zone
pub fn activity_dates_local<I>(ended_at: I) -> ActivityLog
where
    I: IntoIterator<Item = NaiveDateTime>,
{
    ended_at.into_iter().map(|ts| ts.date()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn log(days: &[u32]) -> ActivityLog {
        days.iter().map(|&d| day(d)).collect()
    }

    #[test]
    fn test_empty_log_has_no_streak() {
        assert_eq!(compute_streak(&ActivityLog::new(), day(15), 30), Ok(0));
        assert_eq!(longest_streak(&ActivityLog::new()), 0);
    }

    #[test]
    fn test_streak_including_today() {
        assert_eq!(compute_streak(&log(&[13, 14, 15]), day(15), 30), Ok(3));
    }

    #[test]
    fn test_streak_stops_at_gap() {
        assert_eq!(compute_streak(&log(&[11, 13, 14, 15]), day(15), 30), Ok(3));
    }

    #[test]
    fn test_today_missing_does_not_break_streak() {
        assert_eq!(compute_streak(&log(&[12, 13, 14]), day(15), 30), Ok(3));
    }

    #[test]
    fn test_yesterday_missing_breaks_streak() {
        assert_eq!(compute_streak(&log(&[12, 13]), day(15), 30), Ok(0));
        assert_eq!(compute_streak(&log(&[12, 13, 15]), day(15), 30), Ok(1));
    }

    #[test]
    fn test_future_days_ignored() {
        assert_eq!(compute_streak(&log(&[16, 17]), day(15), 30), Ok(0));
    }

    #[test]
    fn test_lookback_caps_streak() {
        let every_day: ActivityLog = (1..=15).map(day).collect();
        assert_eq!(compute_streak(&every_day, day(15), 30), Ok(15));
        assert_eq!(compute_streak(&every_day, day(15), 5), Ok(5));
        assert_eq!(compute_streak(&every_day, day(15), 1), Ok(1));
    }

    #[test]
    fn test_lookback_of_one_without_today() {
        assert_eq!(compute_streak(&log(&[14]), day(15), 1), Ok(0));
    }

    #[test]
    fn test_zero_lookback_rejected() {
        assert_eq!(
            compute_streak(&log(&[15]), day(15), 0),
            Err(InvalidInput::ZeroLookback)
        );
    }

    #[test]
    fn test_streak_at_minimum_date() {
        let first = NaiveDate::MIN;
        let log: ActivityLog = [first].into_iter().collect();
        assert_eq!(compute_streak(&log, first, 30), Ok(1));
    }

    #[test]
    fn test_longest_streak() {
        assert_eq!(longest_streak(&log(&[1, 2, 3, 5, 6, 10])), 3);
        assert_eq!(longest_streak(&log(&[4])), 1);
        assert_eq!(longest_streak(&log(&[1, 3, 5, 6, 7, 8])), 4);
    }

    #[test]
    fn test_longest_streak_across_month_boundary() {
        let log: ActivityLog = [
            NaiveDate::from_ymd_opt(2024, 2, 28).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        ]
        .into_iter()
        .collect();
        assert_eq!(longest_streak(&log), 3);
    }

    #[test]
    fn test_activity_dates_deduplicate() {
        let ended = [
            Utc.with_ymd_and_hms(2024, 3, 14, 8, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 14, 21, 30, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 15, 0, 5, 0).unwrap(),
        ];
        assert_eq!(activity_dates(ended), log(&[14, 15]));
    }

    #[test]
    fn test_activity_dates_local() {
        let ended = [
            day(14).and_hms_opt(23, 50, 0).unwrap(),
            day(15).and_hms_opt(0, 10, 0).unwrap(),
        ];
        let dates = activity_dates_local(ended);
        assert_eq!(dates, log(&[14, 15]));
        assert_eq!(compute_streak(&dates, day(15), DEFAULT_LOOKBACK_DAYS), Ok(2));
    }
}
