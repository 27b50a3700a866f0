// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tillsyn - BFS 2024:1 accessibility compliance checker.
//!
//! Reads extracted space records (JSON array), runs the turning-circle
//! feasibility check and the twenty-rule catalogue over every space,
//! and prints a compliance report.
//!
//! Exit codes: 0 when every space passes or is partial, 1 when any
//! space fails or errors, 2 on an input or I/O problem.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tillsyn_pipeline::{
    evaluate_spaces, evaluate_spaces_parallel, parse_spaces, render_json, render_text, BatchReport,
};

/// Built-in demonstration floor plan covering the main rule families.
const DEMO_SPACES: &str = include_str!("demo_spaces.json");

#[derive(Parser, Debug)]
#[command(name = "tillsyn", version, about = "BFS 2024:1 accessibility compliance checker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check extracted space records against the rule catalogue
    Check {
        /// JSON file containing an array of space records
        input: PathBuf,
        /// Evaluate spaces on all cores
        #[arg(long)]
        parallel: bool,
        /// Write the full report as JSON to this file
        #[arg(long, value_name = "FILE")]
        json: Option<PathBuf>,
        /// Only print failing spaces and rules
        #[arg(long)]
        failures_only: bool,
    },
    /// Evaluate the built-in demonstration floor plan
    Demo {
        /// Only print failing spaces and rules
        #[arg(long)]
        failures_only: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()))
        .init();

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Check {
            input,
            parallel,
            json,
            failures_only,
        } => {
            let content = std::fs::read_to_string(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let spaces = parse_spaces(&content)
                .with_context(|| format!("Failed to parse {}", input.display()))?;

            let report = if parallel {
                evaluate_spaces_parallel(&spaces)
            } else {
                evaluate_spaces(&spaces)
            };

            if let Some(path) = json {
                write_json(&report, &path)?;
            }
            print!("{}", render_text(&report, failures_only));
            Ok(report.is_acceptable())
        }
        Commands::Demo { failures_only } => {
            let spaces = parse_spaces(DEMO_SPACES).context("Built-in demo data is invalid")?;
            let report = evaluate_spaces(&spaces);
            print!("{}", render_text(&report, failures_only));
            Ok(report.is_acceptable())
        }
    }
}

fn write_json(report: &BatchReport, path: &PathBuf) -> Result<()> {
    let json = render_json(report)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "Wrote JSON report");
    Ok(())
}
