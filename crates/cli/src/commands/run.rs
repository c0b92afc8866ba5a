//! Line-oriented submission from a file or stdin.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use anyhow::{Context, Result};
use scorekeeper::KeeperConfig;
use scorekeeper::error::{KeeperError, StatError};
use tracing::{debug, info};

use super::{RunArgs, build_keeper};
use crate::error::CliError;
use crate::output;

/// A record and its 1-based line number.
type NumberedLine = (usize, String);

pub fn execute(args: &RunArgs, config: &KeeperConfig) -> Result<()> {
    let score_type = args
        .score_type
        .as_deref()
        .unwrap_or(&config.default_score_type);

    let lines = match args.input.as_deref() {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input {}", path.display()))?;
            read_records(BufReader::new(file))?
        }
        None => read_records(io::stdin().lock())?,
    };
    debug!(records = lines.len(), "read input");

    let mut keeper = build_keeper(config, args.sqlite.as_deref(), score_type)?;
    keeper.start()?;

    let rejected = AtomicUsize::new(0);
    let batches = round_robin(lines, usize::from(args.workers));
    thread::scope(|scope| {
        for batch in batches {
            let keeper = &keeper;
            let rejected = &rejected;
            scope.spawn(move || {
                for (line, record) in batch {
                    if let Err(e) = keeper.submit(score_type, &record) {
                        rejected.fetch_add(1, Ordering::Relaxed);
                        output::print_rejected(line, &record, &e);
                    }
                }
            });
        }
    });

    let counters = keeper.counters();
    info!(
        submitted = counters.submitted,
        stored = counters.stored,
        rejected = rejected.load(Ordering::Relaxed),
        "input processed"
    );

    let stats = match keeper.stats(score_type) {
        Ok(stats) => stats,
        Err(KeeperError::Data(StatError::NoData)) => {
            return Err(CliError::NoData(score_type.to_string()).into());
        }
        Err(e) => return Err(e.into()),
    };
    output::print_stats(&stats, None);

    keeper.stop()?;
    Ok(())
}

/// Non-blank lines with their line numbers.
fn read_records(reader: impl BufRead) -> Result<Vec<NumberedLine>> {
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read input")?;
        if !line.trim().is_empty() {
            records.push((index + 1, line));
        }
    }
    Ok(records)
}

/// Deal `lines` into `workers` batches, one at a time.
fn round_robin(lines: Vec<NumberedLine>, workers: usize) -> Vec<Vec<NumberedLine>> {
    let workers = workers.max(1);
    let mut batches: Vec<Vec<NumberedLine>> = (0..workers).map(|_| Vec::new()).collect();
    for (index, line) in lines.into_iter().enumerate() {
        if let Some(batch) = batches.get_mut(index % workers) {
            batch.push(line);
        }
    }
    batches.retain(|batch| !batch.is_empty());
    batches
}
