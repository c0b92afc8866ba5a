//! Per-label averages in the stats wire format.
//!
//! Stats are encoded as a JSON array of `{"action": <label>, "avg": <mean>}`
//! objects, one per label, sorted by label.

use std::collections::HashMap;

use scorekeeper_errors::StatError;
use scorekeeper_score::Score;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::{Average, Stat};

/// The average of one label's scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageReport {
    /// Label the scores were grouped under
    #[serde(rename = "action")]
    pub label: String,
    /// Mean of the group's values
    #[serde(rename = "avg")]
    pub average: f64,
}

impl AverageReport {
    /// Create a report.
    pub fn new(label: impl Into<String>, average: f64) -> Self {
        Self {
            label: label.into(),
            average,
        }
    }

    fn to_value(&self) -> Value {
        json!({ "action": self.label, "avg": self.average })
    }
}

/// Average every group, one report per label sorted by label.
///
/// # Errors
///
/// [`StatError::NoData`] if there are no groups, or any error the average
/// raises for a group. The first failing group aborts the summary.
pub fn summarize(groups: &HashMap<String, Vec<Box<dyn Score>>>) -> Result<Vec<AverageReport>, StatError> {
    if groups.is_empty() {
        return Err(StatError::NoData);
    }

    let average = Average::new();
    let mut reports = groups
        .iter()
        .map(|(label, scores)| Ok(AverageReport::new(label.clone(), average.compute(scores)?)))
        .collect::<Result<Vec<_>, StatError>>()?;
    reports.sort_by(|a, b| a.label.cmp(&b.label));
    Ok(reports)
}

/// Encode reports as a JSON array.
pub fn encode_reports(reports: &[AverageReport]) -> String {
    Value::Array(reports.iter().map(AverageReport::to_value).collect()).to_string()
}
