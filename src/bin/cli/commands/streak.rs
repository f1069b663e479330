use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};

use lango_lib::progress::{compute_streak, longest_streak, ActivityLog};

use crate::app::App;
use crate::OutputFormat;

/// Parse one line as a plain date or an RFC 3339 timestamp (UTC date taken)
fn parse_activity_line(line: &str) -> Result<NaiveDate> {
    if let Ok(date) = line.parse::<NaiveDate>() {
        return Ok(date);
    }
    let ts: DateTime<Utc> = line
        .parse()
        .with_context(|| format!("Not a date or timestamp: '{}'", line))?;
    Ok(ts.date_naive())
}

fn read_activity_log(path: &Path) -> Result<ActivityLog> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(parse_activity_line)
        .collect()
}

pub fn run(
    app: &App,
    file: &Path,
    today: NaiveDate,
    lookback: Option<u32>,
    format: &OutputFormat,
) -> Result<()> {
    let log = read_activity_log(file)?;
    let lookback = lookback.unwrap_or(app.config.progress.streak_lookback_days);
    let current = compute_streak(&log, today, lookback).context("Invalid streak lookback")?;
    let longest = longest_streak(&log);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "today": today,
                "currentStreak": current,
                "longestStreak": longest,
                "activeDays": log.len(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let days = |n: u32| if n == 1 { "day" } else { "days" };
            println!("Current streak: {} {}", current, days(current));
            println!("Longest streak: {} {}", longest, days(longest));
            println!("Active days:    {}", log.len());
        }
    }

    Ok(())
}
