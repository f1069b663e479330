//! Dashboard statistics derived from reviews and practice sessions

use chrono::{DateTime, Duration, NaiveDate, Utc};

use super::models::{CategoryMastery, DailyActivity, MasteryStats, PracticeSession};
use crate::errors::{InvalidInput, Result};
use crate::review::{MasteryLevel, ReviewState};

/// Longest stretch of a single session that counts as practice time
pub const SESSION_MINUTES_CAP: u32 = 120;

/// Total practice minutes over finished sessions.
///
/// Each session contributes at most `cap_minutes`, so a session left open
/// overnight does not inflate the total. Sessions that ended before they
/// started are ignored.
pub fn practice_minutes(sessions: &[PracticeSession], cap_minutes: u32) -> u32 {
    let cap = Duration::minutes(i64::from(cap_minutes));
    let total_seconds: i64 = sessions
        .iter()
        .filter_map(PracticeSession::duration)
        .filter(|elapsed| *elapsed > Duration::zero())
        .map(|elapsed| elapsed.min(cap).num_seconds())
        .sum();

    // halves go to the even minute
    let minutes = (total_seconds as f64 / 60.0).round_ties_even();
    minutes as u32
}

/// Review and session counts for each of the seven days ending `today`,
/// oldest first.
pub fn weekly_activity(
    review_times: &[DateTime<Utc>],
    session_end_times: &[DateTime<Utc>],
    today: NaiveDate,
) -> Result<[DailyActivity; 7]> {
    let count_on = |times: &[DateTime<Utc>], date: NaiveDate| {
        times.iter().filter(|ts| ts.date_naive() == date).count() as u32
    };

    let mut days = Vec::with_capacity(7);
    for offset in (0..7).rev() {
        let date = today
            .checked_sub_signed(Duration::days(offset))
            .ok_or(InvalidInput::TimestampOutOfRange)?;
        days.push(DailyActivity {
            date,
            day_label: date.format("%a").to_string(),
            reviews: count_on(review_times, date),
            sessions: count_on(session_end_times, date),
        });
    }

    days.try_into()
        .map_err(|_: Vec<DailyActivity>| InvalidInput::TimestampOutOfRange)
}

pub fn mastery_stats<'a, I>(states: I) -> MasteryStats
where
    I: IntoIterator<Item = &'a ReviewState>,
{
    let mut stats = MasteryStats::default();
    for state in states {
        match state.mastery() {
            MasteryLevel::New => stats.new += 1,
            MasteryLevel::Learning => stats.learning += 1,
            MasteryLevel::Reviewing => stats.reviewing += 1,
            MasteryLevel::Mastered => stats.mastered += 1,
        }
    }
    stats
}

/// Mastery summary for one vocabulary category, given the repetition count
/// of each of its items
pub fn category_mastery(name: impl Into<String>, repetitions: &[u32]) -> CategoryMastery {
    let total = repetitions.len() as u32;
    let mastered = repetitions
        .iter()
        .filter(|&&reps| MasteryLevel::from_repetitions(reps) == MasteryLevel::Mastered)
        .count() as u32;
    let percent = if total == 0 {
        0
    } else {
        (f64::from(mastered) * 100.0 / f64::from(total)).round_ties_even() as u32
    };

    CategoryMastery {
        name: name.into(),
        mastered,
        total,
        percent,
    }
}

/// Mean messages per completed session, rounded to one decimal place
pub fn average_messages_per_session(total_messages: u32, completed_sessions: u32) -> f64 {
    if completed_sessions == 0 {
        return 0.0;
    }
    let mean = f64::from(total_messages) / f64::from(completed_sessions);
    (mean * 10.0).round_ties_even() / 10.0
}
