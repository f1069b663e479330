use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};

use lango_lib::calendar::{
    find_available_slot, CalendarError, CalendarEvent, CalendarSource, ScheduledLesson,
    TimeInterval,
};

use crate::app::{read_json, App};
use crate::OutputFormat;

/// Calendar events exported to a JSON file
struct FileCalendar {
    path: Option<PathBuf>,
}

impl CalendarSource for FileCalendar {
    fn events(&self, _window: &TimeInterval) -> Result<Vec<CalendarEvent>, CalendarError> {
        let Some(path) = &self.path else {
            return Ok(Vec::new());
        };
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CalendarError::Unavailable(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&contents)
            .map_err(|e| CalendarError::MalformedResponse(format!("{}: {}", path.display(), e)))
    }
}

pub fn run(
    app: &App,
    events: Option<PathBuf>,
    lessons: Option<&Path>,
    duration: Option<u32>,
    preferred_hour: Option<u32>,
    now: DateTime<Utc>,
    format: &OutputFormat,
) -> Result<()> {
    let mut scheduling = app.config.scheduling.clone();
    if preferred_hour.is_some() {
        scheduling.preferred_hour = preferred_hour;
    }
    let duration = duration.unwrap_or(scheduling.lesson_duration_minutes);
    if duration == 0 {
        bail!("Lesson duration must be positive");
    }

    let lessons: Vec<ScheduledLesson> = match lessons {
        Some(path) => read_json(path)?,
        None => Vec::new(),
    };
    let source = FileCalendar { path: events };

    let slot = find_available_slot(&source, &lessons, &scheduling, duration, now)
        .context("Slot search failed")?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "slot": slot,
                "durationMinutes": duration,
                "horizonDays": scheduling.horizon_days,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => match slot {
            Some(start) => println!("Next free slot: {} ({} min)", start.to_rfc3339(), duration),
            None => println!(
                "No free {}-minute slot in the next {} days.",
                duration, scheduling.horizon_days
            ),
        },
    }

    Ok(())
}
