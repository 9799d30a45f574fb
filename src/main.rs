mod terminal;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use csvtoics_core::arguments::is_help_request;
use csvtoics_core::{Outcome, Pipeline, RunConfiguration, Settings};
use owo_colors::OwoColorize;
use terminal::TerminalProgress;

const AFTER_HELP: &str = "\
Paths left out (or given as \"\") fall back to csv_file / ics_dir in the
config file, then to the built-in defaults.

Every file directly inside ICS_DIR is deleted before conversion.

.CSV file format:
  Title,Description,StartDate,EndDate,Location

  Example:
  \"Event Title\",\"Event Description\",\"01-01-2022 12:00 PM\",\"01-01-2022 1:00 PM\",\"Event Location\"";

#[derive(Parser)]
#[command(name = "csvtoics")]
#[command(about = "Convert a .CSV file of events into one .ICS file per event")]
#[command(disable_help_flag = true, after_long_help = AFTER_HELP)]
struct Cli {
    /// .CSV file path
    #[arg(allow_hyphen_values = true)]
    csv_file: Option<String>,

    /// .ICS destination directory
    #[arg(allow_hyphen_values = true)]
    ics_dir: Option<String>,

    /// Ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    rest: Vec<String>,
}

fn main() -> Result<()> {
    let raw: Vec<String> = std::env::args().skip(1).collect();

    if is_help_request(&raw) {
        Cli::command().print_long_help()?;
        return Ok(());
    }

    let cli = Cli::parse();
    let settings = Settings::load().context("Failed to load settings")?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&settings.log_level))
        .init();
    log::debug!("Loaded settings: {:?}", settings);

    let paths = [cli.csv_file.unwrap_or_default(), cli.ics_dir.unwrap_or_default()];
    let config = RunConfiguration::resolve_with(&settings, Some(paths.as_slice()));
    let mut progress = TerminalProgress::new();

    // Failures have already been printed by `progress`
    let outcome = match Pipeline::with_settings(&settings, &mut progress).run(config) {
        Ok(outcome) => outcome,
        Err(e) => {
            log::debug!("Conversion failed: {:?}", e);
            std::process::exit(1);
        }
    };

    match outcome {
        Outcome::Invalid { .. } => std::process::exit(1),
        Outcome::Cancelled => println!("Nothing was changed."),
        Outcome::Converted { cleared, written } => println!(
            "{}",
            format!(
                "{} removed, {} written",
                pluralize("old file", cleared),
                pluralize(".ics file", written)
            )
            .dimmed()
        ),
    }

    Ok(())
}

fn pluralize(noun: &str, count: usize) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
