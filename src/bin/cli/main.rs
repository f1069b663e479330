mod app;
mod commands;

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "lango-cli", about = "Lango lesson scheduling CLI", version)]
struct Cli {
    /// Config file (default: <config dir>/lango/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Schedule the next review of a vocabulary item
    Review {
        /// Recall quality 0-5, or a button rating 1-4 with --rating
        quality: i32,
        /// Interpret the value as an Again/Hard/Good/Easy button (1-4)
        #[arg(long)]
        rating: bool,
        /// Prior consecutive successful recalls
        #[arg(long, default_value = "0")]
        repetitions: u32,
        /// Prior ease factor
        #[arg(long, default_value = "2.5")]
        ease_factor: f64,
        /// Prior interval in days
        #[arg(long, default_value = "1")]
        interval: u32,
        /// Review time (RFC 3339, default: now)
        #[arg(long)]
        now: Option<DateTime<Utc>>,
    },

    /// Find the next free lesson slot
    Slot {
        /// JSON file with calendar events
        #[arg(long)]
        events: Option<PathBuf>,
        /// JSON file with already scheduled lessons
        #[arg(long)]
        lessons: Option<PathBuf>,
        /// Lesson length in minutes (default: from config)
        #[arg(long)]
        duration: Option<u32>,
        /// Only accept slots starting at this UTC hour
        #[arg(long)]
        preferred_hour: Option<u32>,
        /// Search start (RFC 3339, default: now)
        #[arg(long)]
        now: Option<DateTime<Utc>>,
    },

    /// Decide a difficulty change after a practice session
    Difficulty {
        /// Tutor replies that corrected the learner
        #[arg(long, default_value = "0")]
        corrections: u32,
        /// Tutor replies that acknowledged a good answer
        #[arg(long, default_value = "0")]
        successes: u32,
        /// Current tier (1 beginner, 2 intermediate, 3 advanced)
        #[arg(long, default_value = "1")]
        tier: i32,
    },

    /// Compute the practice streak from session end times
    Streak {
        /// File with one date (YYYY-MM-DD) or RFC 3339 timestamp per line
        file: PathBuf,
        /// Reference day (default: today, UTC)
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Days to look back (default: from config)
        #[arg(long)]
        lookback: Option<u32>,
    },

    /// Total practice time over a JSON file of sessions
    Minutes {
        /// JSON array of {"startedAt", "endedAt"} sessions
        file: PathBuf,
    },

    /// Print the effective configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let app = app::App::new(cli.config.as_deref())?;

    match cli.command {
        Command::Review {
            quality,
            rating,
            repetitions,
            ease_factor,
            interval,
            now,
        } => {
            let prior = commands::review::PriorState {
                repetitions,
                ease_factor,
                interval_days: interval,
            };
            commands::review::run(quality, rating, prior, app::App::now(now), &cli.format)?;
        }
        Command::Slot {
            events,
            lessons,
            duration,
            preferred_hour,
            now,
        } => {
            commands::slot::run(
                &app,
                events,
                lessons.as_deref(),
                duration,
                preferred_hour,
                app::App::now(now),
                &cli.format,
            )?;
        }
        Command::Difficulty {
            corrections,
            successes,
            tier,
        } => {
            commands::difficulty::run(&app, corrections, successes, tier, &cli.format)?;
        }
        Command::Streak {
            file,
            today,
            lookback,
        } => {
            commands::streak::run(&app, &file, app::App::today(today), lookback, &cli.format)?;
        }
        Command::Minutes { file } => {
            commands::minutes::run(&app, &file, &cli.format)?;
        }
        Command::Config => {
            commands::config::run(&app, &cli.format)?;
        }
    }

    Ok(())
}
