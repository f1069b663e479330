//! SM-2 Spaced Repetition Algorithm
//!
//! Variant of the SuperMemo 2 algorithm used for vocabulary reviews. The ease
//! factor is updated on every review, failed recalls included, and a failure
//! restarts the schedule from a one-day interval.
//!
//! Grades run from 0 to 5. Anything below 3 counts as a miss: 0 means the
//! word was gone entirely, 1 that the translation looked familiar once shown,
//! 2 that it felt obvious in hindsight. A 3 is a slow, effortful recall, a 4
//! a recall after a short pause, and a 5 an instant one.

use chrono::{DateTime, Utc};

use super::models::{Quality, ReviewSchedule, ReviewState, MIN_EASE_FACTOR};
use crate::errors::{InvalidInput, Result};

/// Calculate the next repetition count, ease factor and interval
pub fn schedule_review(quality: Quality, prior: &ReviewState) -> ReviewSchedule {
    // EF' = EF + (0.1 - (5-q) * (0.08 + (5-q) * 0.02))
    let miss = f64::from(5 - quality.value());
    let ease_factor =
        (prior.ease_factor + (0.1 - miss * (0.08 + miss * 0.02))).max(MIN_EASE_FACTOR);

    if !quality.is_recalled() {
        return ReviewSchedule {
            repetitions: 0,
            ease_factor,
            interval_days: 1,
        };
    }

    let repetitions = prior.repetitions.saturating_add(1);
    let interval_days = match repetitions {
        1 => 1,
        2 => 6,
        // halves go to the even neighbour; float to int casts saturate
        _ => (f64::from(prior.interval_days) * ease_factor).round_ties_even() as u32,
    };

    ReviewSchedule {
        repetitions,
        ease_factor,
        interval_days: interval_days.max(1),
    }
}

/// Validate a raw rating, schedule the item and stamp it as reviewed at `now`
pub fn review_item(quality: i32, prior: &ReviewState, now: DateTime<Utc>) -> Result<ReviewState> {
    let quality = Quality::new(quality)?;
    schedule_review(quality, prior).into_state(now)
}

/// Next interval in days behind each of the four review buttons, in
/// Again, Hard, Good, Easy order
pub fn preview_intervals(prior: &ReviewState) -> [u32; 4] {
    // Again, Hard, Good, Easy map to SM-2 qualities 1, 3, 4, 5
    [1, 3, 4, 5].map(|q| schedule_review(Quality(q), prior).interval_days)
}

/// Grade behind a review button press, numbered 1 (Again) to 4 (Easy)
pub fn ui_rating_to_quality(rating: i32) -> Result<Quality> {
    let quality = match rating {
        1 => 1, // Again: a miss, the word looked familiar
        2 => 3, // Hard
        3 => 4, // Good
        4 => 5, // Easy
        _ => return Err(InvalidInput::RatingOutOfRange(rating)),
    };
    Ok(Quality(quality))
}

/// Format an interval in days to a human-readable string
pub fn format_interval(days: u32) -> String {
    match days {
        0 => "now".to_string(),
        1..=6 => format!("{}d", days),
        7..=29 => format!("{}w", days / 7),
        30..=364 => format!("{}mo", days / 30),
        _ => format!("{}y", days / 365),
    }
}
