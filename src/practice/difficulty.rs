//! End-of-session difficulty adaptation
//!
//! Two counts gate a decision: below `min_signal` responses nothing is
//! judged, and a tier only moves once `min_decisive` responses were seen.
//! The gap between them keeps short sessions from bouncing the learner
//! between tiers.

use serde::{Deserialize, Serialize};

use super::models::{DifficultyChange, DifficultyDecision, DifficultyTier, SessionPerformance};

/// Thresholds of the difficulty controller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyPolicy {
    /// Fewer responses than this yield no decision
    pub min_signal: u32,
    /// Responses required before the tier may move
    pub min_decisive: u32,
    /// Success rate at or above which the tier goes up
    pub promote_rate: f64,
    /// Success rate at or below which the tier goes down
    pub demote_rate: f64,
}

impl Default for DifficultyPolicy {
    fn default() -> Self {
        Self {
            min_signal: 3,
            min_decisive: 5,
            promote_rate: 0.8,
            demote_rate: 0.3,
        }
    }
}

impl DifficultyPolicy {
    /// Decide whether the session warrants a tier change
    pub fn decide(
        &self,
        session: &SessionPerformance,
        current: DifficultyTier,
    ) -> DifficultyDecision {
        let total = session.total();
        if total < self.min_signal {
            return DifficultyDecision::hold(current);
        }
        let Some(rate) = session.success_rate() else {
            return DifficultyDecision::hold(current);
        };
        if total < self.min_decisive {
            return DifficultyDecision::hold(current);
        }

        // a strong session never demotes, even at the ceiling
        let moved = if rate >= self.promote_rate {
            current
                .harder()
                .map(|tier| (tier, DifficultyChange::Increase))
        } else if rate <= self.demote_rate {
            current
                .easier()
                .map(|tier| (tier, DifficultyChange::Decrease))
        } else {
            None
        };

        match moved {
            Some((tier, change)) => DifficultyDecision { tier, change },
            None => DifficultyDecision::hold(current),
        }
    }
}

/// Decide a tier change with the default thresholds
pub fn adjust_difficulty(
    session: &SessionPerformance,
    current: DifficultyTier,
) -> DifficultyDecision {
    DifficultyPolicy::default().decide(session, current)
}
