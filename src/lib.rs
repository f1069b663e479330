//! Scheduling core of an adaptive language learning app.
//!
//! Everything here is a pure computation over caller-supplied data: the
//! surrounding application owns persistence, the calendar client and the
//! AI tutor, and passes them in.

pub mod calendar;
pub mod config;
pub mod errors;
pub mod practice;
pub mod progress;
pub mod review;

pub use calendar::{find_available_slot, find_slot, overlaps, BusyCalendar, TimeInterval};
pub use config::LangoConfig;
pub use errors::InvalidInput;
pub use practice::{adjust_difficulty, DifficultyTier, SessionPerformance};
pub use progress::{compute_streak, ActivityLog};
pub use review::{review_item, schedule_review, Quality, ReviewState};
