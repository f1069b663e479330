//! Learner progress tracking
//!
//! This module provides:
//! - Daily practice streaks (current and longest)
//! - Practice time, weekly activity and mastery statistics

pub mod models;
pub mod stats;
pub mod streak;

pub use models::*;
pub use stats::{
    average_messages_per_session, category_mastery, mastery_stats, practice_minutes,
    weekly_activity, SESSION_MINUTES_CAP,
};
pub use streak::{
    activity_dates, activity_dates_local, compute_streak, longest_streak, DEFAULT_LOOKBACK_DAYS,
};
