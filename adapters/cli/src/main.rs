#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that drives a Mars Rover mission.
//!
//! The final program state is written to stdout as JSON. Configuration and
//! collision failures are written to stderr as JSON and exit with status 1.

mod mission;

use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use mars_rover_core::config::ProgramConfiguration;
use mars_rover_system_program::{begin, run_batch};
use serde::Serialize;

/// Drive a rover across a wrapping planet.
#[derive(Debug, Parser)]
#[command(name = "mars-rover", version)]
struct Cli {
    /// Mission file (TOML, or JSON when the extension is `.json`).
    /// Defaults to a 5x4 planet with the rover at (4, 0) facing west.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Print single-line JSON instead of pretty-printed JSON.
    #[arg(long)]
    compact: bool,

    /// Commands to execute, e.g. `BFL` or `backward forward left`.
    /// Defaults to `B F L`.
    commands: Vec<String>,
}

/// Entry point for the Mars Rover command-line interface.
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(&Cli::parse()) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => mission::load(path)?,
        None => ProgramConfiguration::default(),
    };
    let batch = mission::command_batch(&cli.commands)?;
    log::info!("running {} command(s)", batch.len());

    match run_batch(&batch, begin(&config)) {
        Ok(state) => {
            println!("{}", render(&state, cli.compact)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            log::debug!("mission aborted: {error}");
            eprintln!("{}", render(&error, cli.compact)?);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn render<T: Serialize>(value: &T, compact: bool) -> Result<String> {
    let rendered = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    rendered.context("failed to serialize mission report")
}
