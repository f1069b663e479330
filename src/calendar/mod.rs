//! Lesson booking against a busy calendar
//!
//! This module provides:
//! - Half-open time intervals and the overlap test
//! - Conversion of external calendar events into busy time
//! - Hour-granularity free slot search
//! - The injected calendar collaborator contract

pub mod events;
pub mod interval;
pub mod models;
pub mod slots;
pub mod source;

pub use interval::{overlaps, TimeInterval};
pub use models::*;
pub use slots::{find_slot, ActiveHours, SlotRequest, DEFAULT_HORIZON_DAYS};
pub use source::{find_available_slot, CalendarError, CalendarSource, SlotSearchError};
