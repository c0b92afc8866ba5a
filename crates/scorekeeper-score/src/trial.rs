//! Timed action records.
//!
//! A trial is encoded as `{"action": "<label>", "time": <number>}`. Decoding
//! goes through [`serde_json::Value`] rather than a derived `Deserialize` so a
//! wrongly-typed field can be reported as the field it is.
//!
//! Field names match without regard to ASCII case. When an object carries
//! both an exact and a case-folded match, the exact key wins.

use core::str::FromStr;

use scorekeeper_errors::InputError;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::trace;

use crate::{Score, ScoreValue};

/// Registered type name of [`Trial`].
pub const TRIAL: &str = "trial";

const ACTION_FIELD: &str = "action";
const TIME_FIELD: &str = "time";

/// An action label with the time it took.
///
/// # Examples
///
/// ```
/// use scorekeeper_errors::InputError;
/// use scorekeeper_score::Trial;
///
/// let trial: Trial = r#"{"action":"hop","time":2.5}"#.parse()?;
/// assert_eq!(trial.action(), "hop");
/// assert_eq!(trial.time(), 2.5);
///
/// assert_eq!("{}".parse::<Trial>(), Err(InputError::NoTime));
/// # Ok::<(), InputError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Trial {
    action: String,
    time: f64,
}

impl Trial {
    /// Create a trial from its fields.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::BadAction`] if `action` is empty, or
    /// [`InputError::BadTime`] if `time` is NaN or infinite.
    pub fn new(action: impl Into<String>, time: f64) -> Result<Self, InputError> {
        let action = action.into();
        if action.is_empty() {
            return Err(InputError::BadAction);
        }
        if !time.is_finite() {
            return Err(InputError::BadTime);
        }
        Ok(Self { action, time })
    }

    /// The action label.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// The elapsed time.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Constructor registered with the score factory.
    pub fn boxed() -> Box<dyn Score> {
        Box::new(Trial::default())
    }
}

impl Score for Trial {
    fn score_type(&self) -> &str {
        TRIAL
    }

    fn name(&self) -> &str {
        &self.action
    }

    fn value(&self) -> ScoreValue {
        ScoreValue::Float(self.time)
    }

    fn read(&mut self, encoded: &str) -> Result<(), InputError> {
        *self = decode(encoded)?;
        Ok(())
    }

    fn set(&mut self, name: &str, value: ScoreValue) -> Result<(), InputError> {
        let ScoreValue::Float(time) = value else {
            return Err(InputError::BadTime);
        };
        *self = Trial::new(name, time)?;
        Ok(())
    }
}

impl FromStr for Trial {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

fn decode(encoded: &str) -> Result<Trial, InputError> {
    if encoded.is_empty() {
        return Err(InputError::NoInput);
    }

    // Textual check, so `{"action":"x"}` is a missing time and not a bad one.
    if !encoded.contains(TIME_FIELD) {
        return Err(InputError::NoTime);
    }

    let parsed: Value = serde_json::from_str(encoded).map_err(|e| {
        trace!(error = %e, "trial is not valid JSON");
        if is_out_of_range(&e) {
            InputError::BadTime
        } else {
            InputError::BadInput
        }
    })?;
    let Value::Object(fields) = parsed else {
        return Err(InputError::BadInput);
    };

    let action = action_field(&fields)?;
    let time = time_field(&fields)?;

    Trial::new(action, time)
}

/// A number literal too large for `f64`, such as `1e400`.
fn is_out_of_range(error: &serde_json::Error) -> bool {
    error.is_syntax() && error.to_string().starts_with("number out of range")
}

/// Look up `name`, falling back to the first key equal to it ignoring ASCII case.
fn field<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    fields.get(name).or_else(|| {
        fields
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    })
}

fn action_field(fields: &Map<String, Value>) -> Result<String, InputError> {
    match field(fields, ACTION_FIELD) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(action)) => Ok(action.clone()),
        Some(_) => Err(InputError::BadAction),
    }
}

fn time_field(fields: &Map<String, Value>) -> Result<f64, InputError> {
    match field(fields, TIME_FIELD) {
        None | Some(Value::Null) => Ok(0.0),
        Some(Value::Number(time)) => time.as_f64().ok_or(InputError::BadTime),
        Some(_) => Err(InputError::BadTime),
    }
}
