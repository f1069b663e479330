//! Conversational practice and difficulty adaptation
//!
//! This module provides:
//! - Session performance counters fed by tutor reply markers
//! - Difficulty tiers and their teaching guidelines
//! - The end-of-session difficulty controller
//! - The injected tutor collaborator contract
//! - Tutor instructions and opening greetings per lesson

pub mod analysis;
pub mod difficulty;
pub mod models;
pub mod prompts;
pub mod tutor;

pub use analysis::{analyze_response, ResponseSignal};
pub use difficulty::{adjust_difficulty, DifficultyPolicy};
pub use models::*;
pub use tutor::{record_exchange, ChatTurn, TutorClient, TutorError, TutorPrompt, TutorReply};
