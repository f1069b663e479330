//! Data models for conversational practice

use serde::{Deserialize, Serialize};

use crate::errors::{InvalidInput, Result};

/// Running counters for one practice session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPerformance {
    /// Tutor replies that corrected the learner
    pub corrections: u32,
    /// Tutor replies that acknowledged a good answer
    pub successes: u32,
}

impl SessionPerformance {
    pub fn new(corrections: u32, successes: u32) -> Self {
        Self {
            corrections,
            successes,
        }
    }

    pub fn total(&self) -> u32 {
        self.corrections.saturating_add(self.successes)
    }

    /// Share of successes, or `None` before any signal was recorded
    pub fn success_rate(&self) -> Option<f64> {
        match self.total() {
            0 => None,
            total => Some(f64::from(self.successes) / f64::from(total)),
        }
    }

    /// Success rate as a percentage, as shown on the session page
    pub fn performance_score(&self) -> Option<f64> {
        self.success_rate().map(|rate| rate * 100.0)
    }
}

/// Coarse proficiency level controlling conversation complexity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum DifficultyTier {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyTier {
    pub fn from_level(level: i32) -> Result<Self> {
        match level {
            1 => Ok(Self::Beginner),
            2 => Ok(Self::Intermediate),
            3 => Ok(Self::Advanced),
            _ => Err(InvalidInput::DifficultyOutOfRange(level)),
        }
    }

    /// Stored integer level (1-3)
    pub fn level(self) -> i32 {
        match self {
            Self::Beginner => 1,
            Self::Intermediate => 2,
            Self::Advanced => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// Next tier up, `None` at the ceiling
    pub fn harder(self) -> Option<Self> {
        match self {
            Self::Beginner => Some(Self::Intermediate),
            Self::Intermediate => Some(Self::Advanced),
            Self::Advanced => None,
        }
    }

    /// Next tier down, `None` at the floor
    pub fn easier(self) -> Option<Self> {
        match self {
            Self::Beginner => None,
            Self::Intermediate => Some(Self::Beginner),
            Self::Advanced => Some(Self::Intermediate),
        }
    }

    /// How the tutor should pitch its replies at this tier
    pub fn guidelines(self) -> TierGuidelines {
        match self {
            Self::Beginner => TierGuidelines {
                level_name: "Beginner",
                target_language_ratio: "30%",
                sentence_complexity: "simple, short sentences",
                vocabulary_scope: "basic vocabulary only",
                grammar_focus: "present tense, simple questions",
                correction_style: "always translate and explain in English",
                response_length: "short responses (1-2 sentences)",
            },
            Self::Intermediate => TierGuidelines {
                level_name: "Intermediate",
                target_language_ratio: "60%",
                sentence_complexity: "compound sentences with connectors",
                vocabulary_scope: "expand beyond lesson vocabulary",
                grammar_focus: "past tense, future tense, subjunctive basics",
                correction_style: "correct in the target language with brief English explanation",
                response_length: "medium responses (2-3 sentences)",
            },
            Self::Advanced => TierGuidelines {
                level_name: "Advanced",
                target_language_ratio: "85%",
                sentence_complexity: "complex sentences, idiomatic expressions",
                vocabulary_scope: "advanced vocabulary, slang, regional variations",
                grammar_focus: "all tenses, subjunctive, conditional",
                correction_style: "correct entirely in the target language",
                response_length: "longer, more elaborate responses",
            },
        }
    }
}

impl TryFrom<i32> for DifficultyTier {
    type Error = InvalidInput;

    fn try_from(level: i32) -> Result<Self> {
        Self::from_level(level)
    }
}

impl From<DifficultyTier> for i32 {
    fn from(tier: DifficultyTier) -> Self {
        tier.level()
    }
}

impl std::fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Teaching parameters for a difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierGuidelines {
    pub level_name: &'static str,
    /// Approximate share of the reply written in the target language
    pub target_language_ratio: &'static str,
    pub sentence_complexity: &'static str,
    pub vocabulary_scope: &'static str,
    pub grammar_focus: &'static str,
    pub correction_style: &'static str,
    pub response_length: &'static str,
}

/// Direction of a tier change
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DifficultyChange {
    Increase,
    Decrease,
    #[default]
    None,
}

/// Outcome of the end-of-session difficulty review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyDecision {
    pub tier: DifficultyTier,
    pub change: DifficultyChange,
}

impl DifficultyDecision {
    pub fn hold(tier: DifficultyTier) -> Self {
        Self {
            tier,
            change: DifficultyChange::None,
        }
    }

    pub fn is_change(&self) -> bool {
        self.change != DifficultyChange::None
    }
}
