// ABOUTME: Fitness tracker CLI - prints training summaries for sensor packages
// ABOUTME: Reads built-in samples or a JSON package file and renders text or JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Summaries for the built-in sample packages
//! fitness-tracker
//!
//! # Summaries for packages from a file, as JSON
//! fitness-tracker --input packages.json --format json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use fitness_tracker::config::TrackerConfig;
use fitness_tracker::errors::{AppResult, ErrorResponse};
use fitness_tracker::formatters::OutputFormat;
use fitness_tracker::logging::LoggingConfig;
use fitness_tracker::runner;
use tracing::error;

#[derive(Parser)]
#[command(
    name = "fitness-tracker",
    version,
    about = "Training summaries from fitness tracker sensor packages",
    long_about = "Computes distance, mean speed and calories burned for running (RUN), \
                  sports walking (WLK) and swimming (SWM) sensor packages."
)]
struct Cli {
    /// JSON file with sensor packages (defaults to the built-in samples)
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,

    /// Output format (overrides `TRACKER_OUTPUT_FORMAT`)
    #[arg(long, short = 'f', value_enum)]
    format: Option<FormatArg>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.verbose();
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error.code = ?e.code, "{}", e.message);
            let exit_code = e.code.exit_code();
            let body = serde_json::to_string(&ErrorResponse::from(e))
                .unwrap_or_else(|_| format!("Error: exit code {exit_code}"));
            eprintln!("{body}");
            ExitCode::from(exit_code)
        }
    }
}

fn run(cli: Cli) -> AppResult<String> {
    let config = TrackerConfig::from_env()?.with_overrides(cli.format.map(Into::into), cli.input);
    runner::run(&config)
}
