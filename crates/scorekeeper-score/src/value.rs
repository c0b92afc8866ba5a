//! Measurement values carried by scores.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The measurement of a score.
///
/// Statistics decide which variants they can consume; the average only
/// accepts [`ScoreValue::Float`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScoreValue {
    /// Floating-point measurement
    Float(f64),
    /// Integral measurement
    Integer(i64),
}

impl ScoreValue {
    /// The measurement as `f64`, if this is a float.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ScoreValue::Float(v) => Some(*v),
            ScoreValue::Integer(_) => None,
        }
    }

    /// Check if this is a float.
    pub fn is_float(&self) -> bool {
        matches!(self, ScoreValue::Float(_))
    }
}

impl Default for ScoreValue {
    fn default() -> Self {
        ScoreValue::Float(0.0)
    }
}

impl From<f64> for ScoreValue {
    fn from(value: f64) -> Self {
        ScoreValue::Float(value)
    }
}

impl From<i64> for ScoreValue {
    fn from(value: i64) -> Self {
        ScoreValue::Integer(value)
    }
}

impl fmt::Display for ScoreValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreValue::Float(v) => write!(f, "{v}"),
            ScoreValue::Integer(v) => write!(f, "{v}"),
        }
    }
}
