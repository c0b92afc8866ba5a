//! Trial decoding against the record wire format.

use scorekeeper_score::prelude::*;

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn test_max_i64_time_is_accepted() -> TestResult {
    let mut score = ScoreFactory::default().create(TRIAL)?;
    score.read(r#"{"action":"jump", "time":9223372036854775807}"#)?;
    assert_eq!(score.name(), "jump");
    assert!(score.value().is_float());
    Ok(())
}

#[test]
fn test_string_time_is_bad_time() -> TestResult {
    let mut score = ScoreFactory::default().create(TRIAL)?;
    assert_eq!(
        score.read(r#"{"action":"jump", "time":"1s"}"#),
        Err(InputError::BadTime)
    );
    Ok(())
}

#[test]
fn test_missing_action_is_bad_action() -> TestResult {
    let mut score = ScoreFactory::default().create(TRIAL)?;
    assert_eq!(score.read(r#"{"time":1}"#), Err(InputError::BadAction));
    Ok(())
}

#[test]
fn test_empty_object_is_missing_time() -> TestResult {
    let mut score = ScoreFactory::default().create(TRIAL)?;
    assert_eq!(score.read("{}"), Err(InputError::NoTime));
    assert_eq!(score.read(r#"{"action":"exist"}"#), Err(InputError::NoTime));
    Ok(())
}

#[test]
fn test_time_mentioned_outside_field_is_bad_input() -> TestResult {
    let mut score = ScoreFactory::default().create(TRIAL)?;
    assert_eq!(score.read("what time is it"), Err(InputError::BadInput));
    Ok(())
}

#[test]
fn test_fractional_time() -> TestResult {
    let trial: Trial = r#"{"action":"float","time":100.5}"#.parse()?;
    assert_eq!(trial.value(), ScoreValue::Float(100.5));
    Ok(())
}

#[test]
fn test_scores_are_send() {
    fn assert_send<T: Send>() {}
    assert_send::<Box<dyn Score>>();
}
