use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use battmon::core::parse_timestamp;
use battmon::tasks::LevelResponse;
use battmon::ui::cli::drivers::InquireDriver;
use battmon::ui::cli::wizard::prompt_choice;
use battmon::ui::types::build::build_task;
use battmon::ui::types::choices::{FixtureParameters, SourceChoice, TaskChoice, UIChoice};

#[derive(Parser, Debug)]
#[command(name = "battmon")]
#[command(version, about = "Battery level estimation from OCR readings of a gauge display", long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a configured task once and print the response
    Estimate {
        /// Task configuration (JSON)
        #[arg(short, long)]
        config: PathBuf,

        /// Use the bundled fixture instead of the configured source
        #[arg(short, long)]
        debug: bool,

        /// Evaluate as of this instant instead of the current time
        #[arg(long, value_parser = parse_now)]
        now: Option<DateTime<Utc>>,
    },

    /// Build a configuration interactively, then run it
    Wizard {
        /// Write the resulting configuration here
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Print the JSON schema of the task configuration
    Schema,
}

fn parse_now(raw: &str) -> Result<DateTime<Utc>, String> {
    parse_timestamp(raw).ok_or_else(|| format!("not an ISO-8601 timestamp: {raw}"))
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::Estimate { config, debug, now } => {
            let mut choice = load_config(&config)?;
            if debug {
                log::info!("debug mode: using the bundled fixture");
                choice = choice.with_source(SourceChoice::Fixture(FixtureParameters::default()));
            }
            run(choice, now.unwrap_or_else(Utc::now))
        }
        Commands::Wizard { save } => {
            let choice: TaskChoice = prompt_choice(&InquireDriver)?;
            if let Some(path) = save {
                let json = serde_json::to_string_pretty(&choice)?;
                fs::write(&path, json)
                    .with_context(|| format!("Failed to save config to: {}", path.display()))?;
                log::info!("configuration saved to {}", path.display());
            }
            run(choice, Utc::now())
        }
        Commands::Schema => {
            println!("{}", serde_json::to_string_pretty(&TaskChoice::schema())?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(path: &Path) -> Result<TaskChoice> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid config: {}", path.display()))
}

fn run(choice: TaskChoice, now: DateTime<Utc>) -> Result<ExitCode> {
    let task = build_task(choice).context("Failed to build task")?;
    let outcome = task.run(now);
    if let Ok(report) = &outcome {
        log::debug!(
            "{} of {} reading(s) usable in {} .. {}",
            report.usable,
            report.fetched,
            report.window.start,
            report.window.end
        );
    }

    let response = LevelResponse::from_outcome(&outcome);
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
