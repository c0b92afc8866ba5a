//! Many submitters against one keeper.

use std::sync::Arc;
use std::thread;

use scorekeeper::prelude::*;
use scorekeeper_test_helpers::prelude::*;

const WORKERS: usize = 10;

#[test]
fn test_concurrent_submitters_with_arc() -> TestResult {
    let mut keeper = ScoreKeeper::default();
    keeper.start()?;
    let keeper = Arc::new(keeper);

    let handles: Vec<_> = (0..WORKERS)
        .map(|_| {
            let keeper = Arc::clone(&keeper);
            thread::spawn(move || {
                for action in fifteen_actions() {
                    must(keeper.submit(TRIAL, action));
                }
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().is_ok(), "submitter panicked");
    }

    assert_stats_eq!(keeper.stats(TRIAL)?, FIFTEEN_ACTIONS_STATS);
    assert_eq!(keeper.counters().stored, (WORKERS * 15) as u64);

    let mut keeper = must_some(Arc::into_inner(keeper), "keeper still shared");
    keeper.stop()?;
    Ok(())
}

#[test]
fn test_concurrent_submitters_scoped() -> TestResult {
    let mut keeper = ScoreKeeper::default();
    keeper.start()?;

    thread::scope(|scope| {
        for _ in 0..WORKERS {
            scope.spawn(|| {
                for action in fifteen_actions() {
                    must(keeper.submit(TRIAL, action));
                }
            });
        }
    });

    assert_stats_eq!(keeper.stats(TRIAL)?, FIFTEEN_ACTIONS_STATS);
    keeper.stop()?;
    Ok(())
}

#[test]
fn test_stats_while_submitting() -> TestResult {
    let mut keeper = ScoreKeeper::default();
    keeper.start()?;
    keeper.submit(TRIAL, r#"{"action":"jump", "time":10}"#)?;

    thread::scope(|scope| {
        scope.spawn(|| {
            for _ in 0..100 {
                must(keeper.submit(TRIAL, r#"{"action":"jump", "time":10}"#));
            }
        });
        scope.spawn(|| {
            for _ in 0..100 {
                // Every value is 10, so any snapshot averages to 10.
                let stats = must(keeper.stats(TRIAL));
                assert!(must(stats_equivalent(&stats, r#"[{"action":"jump","avg":10}]"#)));
            }
        });
    });

    assert_eq!(keeper.counters().stored, 101);
    keeper.stop()?;
    Ok(())
}

#[test]
fn test_invalid_submissions_under_contention() -> TestResult {
    let mut keeper = ScoreKeeper::default();
    keeper.start()?;

    thread::scope(|scope| {
        for worker in 0..WORKERS {
            let keeper = &keeper;
            scope.spawn(move || {
                for _ in 0..20 {
                    if worker % 2 == 0 {
                        must_with(
                            keeper.submit(TRIAL, r#"{"action":"hop", "time":2}"#),
                            &format!("valid submission from worker {worker}"),
                        );
                    } else {
                        assert!(keeper.submit(TRIAL, r#"{"action":"hop"}"#).is_err());
                    }
                }
            });
        }
    });

    assert_stats_eq!(keeper.stats(TRIAL)?, r#"[{"action":"hop","avg":2}]"#);
    let counters = keeper.counters();
    assert_eq!(counters.submitted, 200);
    assert_eq!(counters.rejected, 100);
    assert_eq!(counters.stored, 100);
    Ok(())
}
