//! Output formatting for CLI responses

use anyhow::Error;
use colored::*;
use scorekeeper::KeeperError;

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

/// Report a record the keeper refused; processing goes on.
pub fn print_rejected(line: usize, record: &str, error: &KeeperError) {
    eprintln!(
        "{} line {}: {} ({})",
        "Rejected:".yellow(),
        line,
        error,
        record.trim()
    );
}

/// Print a stats document, optionally tagged with where it came from.
pub fn print_stats(stats: &str, tag: Option<&str>) {
    match tag {
        Some(tag) => println!("{} {}", format!("[{tag}]").dimmed(), stats),
        None => println!("{stats}"),
    }
}
