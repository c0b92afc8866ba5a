//! Behaviour of the in-memory store through the store trait.

use scorekeeper_errors::StoreError;
use scorekeeper_score::{Score, ScoreFactory, ScoreValue, TRIAL, Trial};
use scorekeeper_store::{MemoryStore, ScoreStore};
use scorekeeper_test_helpers::prelude::*;

fn trial(action: &str, time: f64) -> Result<Box<dyn Score>, Box<dyn std::error::Error>> {
    Ok(Box::new(Trial::new(action, time)?))
}

#[test]
fn test_store_and_retrieve_grouped() -> TestResult {
    let mut store = MemoryStore::new();
    store.store(trial("jump", 100.0)?)?;
    store.store(trial("run", 75.0)?)?;
    store.store(trial("jump", 200.0)?)?;

    let groups = store.retrieve(&ScoreFactory::default(), TRIAL)?;
    assert_eq!(groups.len(), 2);

    let jumps: Vec<ScoreValue> = must_some(groups.get("jump"), "jump group")
        .iter()
        .map(|s| s.value())
        .collect();
    assert_eq!(jumps, vec![ScoreValue::Float(100.0), ScoreValue::Float(200.0)]);
    Ok(())
}

#[test]
fn test_types_are_kept_apart() -> TestResult {
    let factory = ScoreFactory::default().with(TEST_SCORE, TestScore::boxed);
    let mut store = MemoryStore::new();
    store.store(trial("jump", 1.0)?)?;
    store.store(TestScore::float("jump", 2.0))?;

    assert_eq!(store.count(TRIAL), 1);
    assert_eq!(store.count(TEST_SCORE), 1);

    let tests = store.retrieve(&factory, TEST_SCORE)?;
    let values: Vec<ScoreValue> = tests.values().flatten().map(|s| s.value()).collect();
    assert_eq!(values, vec![ScoreValue::Float(2.0)]);
    Ok(())
}

#[test]
fn test_retrieve_needs_registered_type() -> TestResult {
    let mut store = MemoryStore::new();
    store.store(TestScore::float("jump", 2.0))?;

    let result = store.retrieve(&ScoreFactory::default(), TEST_SCORE);
    assert!(matches!(result, Err(StoreError::Backend { .. })));
    Ok(())
}

#[test]
fn test_integer_values_survive_retrieval() -> TestResult {
    let factory = ScoreFactory::new().with(TEST_SCORE, TestScore::boxed);
    let mut store = MemoryStore::new();
    store.store(TestScore::integer("count", 3))?;

    let groups = store.retrieve(&factory, TEST_SCORE)?;
    let count = must_some(groups.get("count"), "count group");
    assert_eq!(count.iter().map(|s| s.value()).collect::<Vec<_>>(), vec![ScoreValue::Integer(3)]);
    Ok(())
}

#[test]
fn test_boxed_store_is_a_store() -> TestResult {
    let mut store: Box<dyn ScoreStore> = Box::new(MemoryStore::new());
    store.store(trial("hop", 1.0)?)?;
    assert_eq!(store.retrieve(&ScoreFactory::default(), TRIAL)?.len(), 1);
    Ok(())
}
