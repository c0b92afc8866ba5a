//! scorekeeper - score keeper command-line driver
//!
//! Feeds encoded records to a [`scorekeeper::ScoreKeeper`] from several
//! threads and prints the per-label averages.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod completion;
mod error;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{DemoArgs, RunArgs};
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "scorekeeper")]
#[command(about = "Concurrent score keeper - submit timed actions, report averages")]
#[command(version)]
#[command(long_about = "
scorekeeper accepts JSON records such as {\"action\":\"jump\", \"time\":100}
from many threads at once and reports the average time per action.

Stats are printed to stdout as a JSON array; rejected records and
diagnostics go to stderr.
")]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Keeper configuration file (JSON)
    #[arg(long, global = true, env = "SCOREKEEPER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a fixed set of actions from several threads and print stats
    Demo(DemoArgs),

    /// Submit records read line by line and print the final stats
    Run(RunArgs),

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(log_level).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => Ok(()),
        Err(e) => {
            output::print_error_human(&e);

            let exit_code = match e.downcast_ref::<CliError>() {
                Some(CliError::NoData(_)) => 3,
                _ => 1,
            };

            std::process::exit(exit_code);
        }
    }
}

/// Crates whose events the `-v` flags enable.
const LOG_TARGETS: [&str; 5] = [
    "scorekeeper",
    "scorekeeper_score",
    "scorekeeper_stat",
    "scorekeeper_store",
    "scorekeeper_cli",
];

/// Filter directives used when `RUST_LOG` is unset.
fn default_filter(log_level: &str) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={log_level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Demo(args) => {
            let config = commands::load_config(cli.config.as_deref())?;
            commands::demo::execute(args, &config)
        }
        Commands::Run(args) => {
            let config = commands::load_config(cli.config.as_deref())?;
            commands::run::execute(args, &config)
        }
        Commands::Completion { shell } => {
            completion::generate_completion(*shell);
            Ok(())
        }
    }
}
