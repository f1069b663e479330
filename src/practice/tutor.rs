//! Conversational tutor contract
//!
//! The AI client is constructed once by the caller and injected here, so
//! tests can substitute a scripted tutor.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::analysis::{analyze_response, ResponseSignal};
use super::models::{DifficultyTier, SessionPerformance};

/// Lesson words and verbs offered to the tutor, in order of importance
const MAX_PROMPT_WORDS: usize = 10;
const MAX_PROMPT_VERBS: usize = 5;

/// Why the tutor could not produce a reply
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TutorError {
    #[error("Tutor is not configured")]
    NotConfigured,

    #[error("Tutor service unavailable: {0}")]
    Unavailable(String),

    #[error("Tutor credentials were rejected")]
    Unauthorized,

    #[error("Malformed tutor response: {0}")]
    MalformedResponse(String),
}

impl From<TutorError> for String {
    fn from(err: TutorError) -> Self {
        err.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One message of the conversation so far
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// A lesson word with its translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyHint {
    pub word: String,
    pub translation: String,
}

/// Lesson context handed to the tutor alongside the conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorPrompt {
    pub topic: String,
    #[serde(default)]
    pub vocabulary: Vec<VocabularyHint>,
    #[serde(default)]
    pub verbs: Vec<String>,
    #[serde(default)]
    pub tier: DifficultyTier,
}

impl TutorPrompt {
    pub fn new(topic: impl Into<String>, tier: DifficultyTier) -> Self {
        Self {
            topic: topic.into(),
            vocabulary: Vec::new(),
            verbs: Vec::new(),
            tier,
        }
    }

    /// "palabra (word), ..." for the first lesson words
    pub fn vocabulary_list(&self) -> String {
        self.vocabulary
            .iter()
            .take(MAX_PROMPT_WORDS)
            .map(|v| format!("{} ({})", v.word, v.translation))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn verb_list(&self) -> String {
        self.verbs
            .iter()
            .take(MAX_PROMPT_VERBS)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Prefix shown before the opening message of a session
    pub fn level_indicator(&self) -> String {
        format!("[Your level: {}] ", self.tier.name())
    }
}

/// Anything that can continue a tutoring conversation
pub trait TutorClient: Send + Sync {
    fn reply(&self, prompt: &TutorPrompt, history: &[ChatTurn]) -> Result<String, TutorError>;
}

/// A tutor reply with its classified markers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorReply {
    pub text: String,
    pub signal: ResponseSignal,
}

/// Ask the tutor for its next message and count the markers it carries.
///
/// The session counters are only touched when a reply was produced.
pub fn record_exchange(
    client: &dyn TutorClient,
    prompt: &TutorPrompt,
    history: &[ChatTurn],
    performance: &mut SessionPerformance,
) -> Result<TutorReply, TutorError> {
    let text = client.reply(prompt, history).map_err(|e| {
        log::warn!("Tutor reply failed for topic {}: {}", prompt.topic, e);
        e
    })?;

    if text.trim().is_empty() {
        return Err(TutorError::MalformedResponse("empty reply".to_string()));
    }

    let signal = analyze_response(&text);
    performance.record(signal);
    log::debug!(
        "Tutor reply recorded: correction={}, success={}, totals={}/{}",
        signal.has_correction,
        signal.has_success,
        performance.corrections,
        performance.successes
    );

    Ok(TutorReply { text, signal })
}
