use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use lango_lib::review::{
    format_interval, preview_intervals, schedule_review, ui_rating_to_quality, Quality,
    ReviewState,
};

use crate::OutputFormat;

/// Scheduling fields of the item before this review
pub struct PriorState {
    pub repetitions: u32,
    pub ease_factor: f64,
    pub interval_days: u32,
}

pub fn run(
    value: i32,
    is_rating: bool,
    prior: PriorState,
    now: DateTime<Utc>,
    format: &OutputFormat,
) -> Result<()> {
    let quality = if is_rating {
        ui_rating_to_quality(value).context("Invalid button rating")?
    } else {
        Quality::new(value).context("Invalid recall quality")?
    };

    let prior = ReviewState {
        repetitions: prior.repetitions,
        ease_factor: prior.ease_factor,
        interval_days: prior.interval_days,
        ..ReviewState::new(now)
    };
    let next = schedule_review(quality, &prior)
        .into_state(now)
        .context("Next review date out of range")?;
    let preview = preview_intervals(&next);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "quality": quality.value(),
                "state": next,
                "mastery": next.mastery(),
                "preview": {
                    "again": preview[0],
                    "hard": preview[1],
                    "good": preview[2],
                    "easy": preview[3],
                },
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Quality:      {}", quality.value());
            println!("Repetitions:  {}", next.repetitions);
            println!("Ease factor:  {:.2}", next.ease_factor);
            println!("Interval:     {}", format_interval(next.interval_days));
            println!("Next review:  {}", next.next_review_date.to_rfc3339());
            println!("Mastery:      {:?}", next.mastery());
            println!();
            println!(
                "Next time: Again {} | Hard {} | Good {} | Easy {}",
                format_interval(preview[0]),
                format_interval(preview[1]),
                format_interval(preview[2]),
                format_interval(preview[3]),
            );
        }
    }

    Ok(())
}
