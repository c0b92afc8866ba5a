//! The demo run: one sequential pass, then concurrent submitters.

use std::thread;

use anyhow::Result;
use scorekeeper::{KeeperConfig, ScoreKeeper, TRIAL};
use tracing::info;

use super::{DemoArgs, build_keeper};
use crate::output;

/// Three actions, five trials each.
pub const DEMO_ACTIONS: [&str; 15] = [
    r#"{"action":"hop", "time":100}"#,
    r#"{"action":"skip", "time":100}"#,
    r#"{"action":"jump", "time":100}"#,
    r#"{"action":"hop", "time":200}"#,
    r#"{"action":"skip", "time":200}"#,
    r#"{"action":"jump", "time":200}"#,
    r#"{"action":"hop", "time":1}"#,
    r#"{"action":"hop", "time":1}"#,
    r#"{"action":"hop", "time":1}"#,
    r#"{"action":"skip", "time":2}"#,
    r#"{"action":"skip", "time":2}"#,
    r#"{"action":"skip", "time":2}"#,
    r#"{"action":"jump", "time":3}"#,
    r#"{"action":"jump", "time":3}"#,
    r#"{"action":"jump", "time":3}"#,
];

pub fn execute(args: &DemoArgs, config: &KeeperConfig) -> Result<()> {
    let mut keeper = build_keeper(config, args.sqlite.as_deref(), TRIAL)?;
    keeper.start()?;

    submit_all(&keeper);
    print_current(&keeper, "initial");

    info!(workers = args.workers, "starting concurrent submitters");
    thread::scope(|scope| {
        for worker in 0..args.workers {
            let keeper = &keeper;
            scope.spawn(move || {
                submit_all(keeper);
                // Likely intermediate: other submitters may still be running.
                print_current(keeper, &format!("worker {worker}"));
            });
        }
    });

    print_current(&keeper, "final");
    keeper.stop()?;

    if let Some(path) = args.sqlite.as_deref() {
        info!(path = %path.display(), "scores kept in database");
    }
    Ok(())
}

fn submit_all(keeper: &ScoreKeeper) {
    for (index, action) in DEMO_ACTIONS.iter().enumerate() {
        if let Err(e) = keeper.submit(TRIAL, action) {
            output::print_rejected(index + 1, action, &e);
        }
    }
}

fn print_current(keeper: &ScoreKeeper, tag: &str) {
    match keeper.stats(TRIAL) {
        Ok(stats) => output::print_stats(&stats, Some(tag)),
        Err(e) => eprintln!("[{tag}] {e}"),
    }
}
