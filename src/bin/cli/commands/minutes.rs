use std::path::Path;

use anyhow::Result;

use lango_lib::progress::PracticeSession;

use crate::app::{read_json, App};
use crate::OutputFormat;

pub fn run(app: &App, file: &Path, format: &OutputFormat) -> Result<()> {
    let sessions: Vec<PracticeSession> = read_json(file)?;
    let minutes = app.config.progress.practice_minutes(&sessions);
    let finished = sessions.iter().filter(|s| s.ended_at.is_some()).count();

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "practiceMinutes": minutes,
                "completedSessions": finished,
                "sessionMinutesCap": app.config.progress.session_minutes_cap,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Practice time:      {} min", minutes);
            println!("Completed sessions: {}", finished);
        }
    }

    Ok(())
}
