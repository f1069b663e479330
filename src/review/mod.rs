//! Spaced repetition for vocabulary reviews
//!
//! This module provides:
//! - Per-item review state owned by the caller's store
//! - SM-2 scheduling of the next review
//! - Rating helpers and mastery buckets for progress views

pub mod algorithm;
pub mod models;

pub use algorithm::{
    format_interval, preview_intervals, review_item, schedule_review, ui_rating_to_quality,
};
pub use models::*;
