//! Half-open time intervals
//!
//! Intervals are `[start, end)`: an event ending at 10:00 does not conflict
//! with one starting at 10:00.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{InvalidInput, Result};

/// A half-open span of time with `start < end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "IntervalBounds")]
pub struct TimeInterval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

/// Unvalidated wire form, checked on deserialization
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntervalBounds {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TryFrom<IntervalBounds> for TimeInterval {
    type Error = InvalidInput;

    fn try_from(bounds: IntervalBounds) -> Result<Self> {
        Self::new(bounds.start, bounds.end)
    }
}

impl TimeInterval {
    /// Create an interval, rejecting empty or inverted bounds
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if start >= end {
            return Err(InvalidInput::EmptyInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Create the interval `[start, start + duration)`
    pub fn starting_at(start: DateTime<Utc>, duration: Duration) -> Result<Self> {
        if duration <= Duration::zero() {
            return Err(InvalidInput::NonPositiveDuration);
        }
        let end = start
            .checked_add_signed(duration)
            .ok_or(InvalidInput::TimestampOutOfRange)?;
        Self::new(start, end)
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        overlaps(self, other)
    }
}

/// Whether two intervals share any instant
pub fn overlaps(a: &TimeInterval, b: &TimeInterval) -> bool {
    !(a.end <= b.start || b.end <= a.start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 4, hour, minute, 0).unwrap()
    }

    fn interval(from: (u32, u32), to: (u32, u32)) -> TimeInterval {
        TimeInterval::new(at(from.0, from.1), at(to.0, to.1)).unwrap()
    }

    #[test]
    fn test_touching_intervals_do_not_overlap() {
        let morning = interval((9, 0), (10, 0));
        let late_morning = interval((10, 0), (11, 0));

        assert!(!overlaps(&morning, &late_morning));
        assert!(!overlaps(&late_morning, &morning));
    }

    #[test]
    fn test_partial_and_nested_overlap() {
        let meeting = interval((9, 0), (10, 0));

        assert!(overlaps(&meeting, &interval((9, 30), (10, 30))));
        assert!(overlaps(&meeting, &interval((8, 30), (9, 1))));
        assert!(overlaps(&meeting, &interval((9, 15), (9, 45))));
        assert!(overlaps(&interval((8, 0), (12, 0)), &meeting));
        assert!(meeting.overlaps(&meeting));
    }

    #[test]
    fn test_disjoint_intervals() {
        assert!(!interval((9, 0), (10, 0)).overlaps(&interval((14, 0), (15, 0))));
    }

    #[test]
    fn test_rejects_empty_and_inverted() {
        assert_eq!(
            TimeInterval::new(at(9, 0), at(9, 0)),
            Err(InvalidInput::EmptyInterval {
                start: at(9, 0),
                end: at(9, 0)
            })
        );
        assert!(TimeInterval::new(at(10, 0), at(9, 0)).is_err());
    }

    #[test]
    fn test_starting_at() {
        let slot = TimeInterval::starting_at(at(9, 0), Duration::minutes(30)).unwrap();
        assert_eq!(slot.end(), at(9, 30));
        assert_eq!(slot.duration(), Duration::minutes(30));

        assert_eq!(
            TimeInterval::starting_at(at(9, 0), Duration::zero()),
            Err(InvalidInput::NonPositiveDuration)
        );
        assert_eq!(
            TimeInterval::starting_at(at(9, 0), Duration::minutes(-5)),
            Err(InvalidInput::NonPositiveDuration)
        );
    }

    #[test]
    fn test_deserialize_validates_bounds() {
        let ok: TimeInterval = serde_json::from_str(
            r#"{"start":"2024-03-04T09:00:00Z","end":"2024-03-04T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(ok.start(), at(9, 0));

        let inverted = serde_json::from_str::<TimeInterval>(
            r#"{"start":"2024-03-04T10:00:00Z","end":"2024-03-04T09:00:00Z"}"#,
        );
        assert!(inverted.is_err());
    }
}
