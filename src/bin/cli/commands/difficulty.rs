use anyhow::{Context, Result};

use lango_lib::practice::{DifficultyChange, DifficultyTier, SessionPerformance};

use crate::app::App;
use crate::OutputFormat;

pub fn run(
    app: &App,
    corrections: u32,
    successes: u32,
    tier: i32,
    format: &OutputFormat,
) -> Result<()> {
    let current = DifficultyTier::from_level(tier).context("Invalid difficulty tier")?;
    let session = SessionPerformance::new(corrections, successes);
    let decision = app.config.difficulty.decide(&session, current);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "previousTier": current,
                "decision": decision,
                "performanceScore": session.performance_score(),
                "guidelines": decision.tier.guidelines(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            match session.performance_score() {
                Some(score) => println!(
                    "Session: {} corrections, {} successes ({:.0}%)",
                    corrections, successes, score
                ),
                None => println!("Session: no feedback recorded"),
            }

            match decision.change {
                DifficultyChange::Increase => println!("Level up: {} -> {}", current, decision.tier),
                DifficultyChange::Decrease => {
                    println!("Level down: {} -> {}", current, decision.tier)
                }
                DifficultyChange::None => println!("Staying at {}", decision.tier),
            }

            let guidelines = decision.tier.guidelines();
            println!();
            println!("  Target language:  {}", guidelines.target_language_ratio);
            println!("  Sentences:        {}", guidelines.sentence_complexity);
            println!("  Vocabulary:       {}", guidelines.vocabulary_scope);
            println!("  Grammar:          {}", guidelines.grammar_focus);
            println!("  Corrections:      {}", guidelines.correction_style);
            println!("  Replies:          {}", guidelines.response_length);
        }
    }

    Ok(())
}
