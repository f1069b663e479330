//! Classification of tutor replies
//!
//! The tutor is instructed to prefix corrections with `[CORRECTION]` and to
//! acknowledge good answers with `[GOOD]`. A reply may carry both.

use serde::{Deserialize, Serialize};

use super::models::SessionPerformance;

pub const CORRECTION_MARKER: &str = "[CORRECTION]";
pub const SUCCESS_MARKER: &str = "[GOOD]";

/// Performance markers found in one tutor reply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseSignal {
    pub has_correction: bool,
    pub has_success: bool,
}

pub fn analyze_response(text: &str) -> ResponseSignal {
    ResponseSignal {
        has_correction: text.contains(CORRECTION_MARKER),
        has_success: text.contains(SUCCESS_MARKER),
    }
}

impl SessionPerformance {
    /// Fold one reply's markers into the session counters
    pub fn record(&mut self, signal: ResponseSignal) {
        if signal.has_correction {
            self.corrections = self.corrections.saturating_add(1);
        }
        if signal.has_success {
            self.successes = self.successes.saturating_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_response() {
        assert_eq!(
            analyze_response("[CORRECTION] Se dice \"tengo hambre\"."),
            ResponseSignal {
                has_correction: true,
                has_success: false
            }
        );
        assert_eq!(
            analyze_response("¡Muy bien! [GOOD] ¿Y tu familia?"),
            ResponseSignal {
                has_correction: false,
                has_success: true
            }
        );
        assert_eq!(analyze_response("¿Qué te gusta comer?"), ResponseSignal::default());
    }

    #[test]
    fn test_markers_are_case_sensitive() {
        assert_eq!(analyze_response("[good] [correction]"), ResponseSignal::default());
    }

    #[test]
    fn test_record_counts_each_marker() {
        let mut performance = SessionPerformance::default();

        performance.record(analyze_response("[GOOD] bien"));
        performance.record(analyze_response("[CORRECTION] casi. [GOOD] el resto"));
        performance.record(analyze_response("sin marcas"));

        assert_eq!(performance, SessionPerformance::new(1, 2));
        assert_eq!(performance.total(), 3);
    }

    #[test]
    fn test_performance_score() {
        assert_eq!(SessionPerformance::default().performance_score(), None);

        let score = SessionPerformance::new(1, 3).performance_score().unwrap();
        assert!((score - 75.0).abs() < 1e-9);
    }
}
