//! A score type for tests that need control over the value variant.

use scorekeeper_errors::InputError;
use scorekeeper_score::{Score, ScoreValue};

/// Type name [`TestScore`] reports and is usually registered under.
pub const TEST_SCORE: &str = "test";

/// Minimal score with a caller-chosen name and value.
///
/// Reads `"<name>:<value>"`; a value with a decimal point or exponent
/// becomes [`ScoreValue::Float`], anything else that parses as an integer
/// becomes [`ScoreValue::Integer`]. That makes it possible to push a value
/// the average rejects through the keeper.
///
/// ```rust
/// use scorekeeper_score::{Score, ScoreValue};
/// use scorekeeper_test_helpers::TestScore;
///
/// let mut score = TestScore::default();
/// score.read("count:3").unwrap();
/// assert_eq!(score.value(), ScoreValue::Integer(3));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TestScore {
    pub name: String,
    pub value: ScoreValue,
}

impl TestScore {
    pub fn new(name: impl Into<String>, value: impl Into<ScoreValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Boxed float score, the common case for aggregation tests.
    pub fn float(name: impl Into<String>, value: f64) -> Box<dyn Score> {
        Box::new(Self::new(name, value))
    }

    /// Boxed integer score, which the average rejects.
    pub fn integer(name: impl Into<String>, value: i64) -> Box<dyn Score> {
        Box::new(Self::new(name, value))
    }

    /// Constructor to register with a `ScoreFactory`.
    pub fn boxed() -> Box<dyn Score> {
        Box::new(Self::default())
    }
}

impl Score for TestScore {
    fn score_type(&self) -> &str {
        TEST_SCORE
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> ScoreValue {
        self.value
    }

    fn read(&mut self, encoded: &str) -> Result<(), InputError> {
        if encoded.is_empty() {
            return Err(InputError::NoInput);
        }
        let (name, raw) = encoded.split_once(':').ok_or(InputError::BadInput)?;
        let value = if raw.contains(['.', 'e', 'E']) {
            raw.parse::<f64>().map(ScoreValue::Float)
        } else {
            raw.parse::<i64>().map(ScoreValue::Integer).or_else(|_| {
                raw.parse::<f64>().map(ScoreValue::Float)
            })
        }
        .map_err(|_| InputError::BadTime)?;
        self.set(name, value)
    }

    fn set(&mut self, name: &str, value: ScoreValue) -> Result<(), InputError> {
        if name.is_empty() {
            return Err(InputError::BadAction);
        }
        self.name = name.to_string();
        self.value = value;
        Ok(())
    }
}
