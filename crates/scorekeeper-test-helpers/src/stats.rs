//! Order-insensitive comparison of stats JSON.
//!
//! Fixtures list reports in submission order while the keeper sorts them by
//! action, so tests compare them as multisets keyed by action.

use serde_json::Value;

const RELATIVE_TOLERANCE: f64 = 1e-12;

/// Parse a stats array into `(action, avg)` pairs sorted by action.
///
/// Entries missing either field, or with the wrong JSON type, are kept with
/// an empty action or a NaN average so they never compare equal.
///
/// # Errors
///
/// Returns the JSON error if `stats` is not a JSON array.
pub fn parse_stats(stats: &str) -> Result<Vec<(String, f64)>, serde_json::Error> {
    let reports: Vec<Value> = serde_json::from_str(stats)?;
    let mut pairs: Vec<(String, f64)> = reports
        .iter()
        .map(|report| {
            let action = report
                .get("action")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let avg = report
                .get("avg")
                .and_then(Value::as_f64)
                .unwrap_or(f64::NAN);
            (action, avg)
        })
        .collect();
    pairs.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)));
    Ok(pairs)
}

/// Check whether two stats arrays hold the same reports, ignoring order.
///
/// # Errors
///
/// Returns the JSON error if either side is not a JSON array.
pub fn stats_equivalent(left: &str, right: &str) -> Result<bool, serde_json::Error> {
    let left = parse_stats(left)?;
    let right = parse_stats(right)?;

    Ok(left.len() == right.len()
        && left
            .iter()
            .zip(&right)
            .all(|((la, lv), (ra, rv))| la == ra && approx_eq(*lv, *rv)))
}

fn approx_eq(left: f64, right: f64) -> bool {
    let scale = left.abs().max(right.abs()).max(1.0);
    (left - right).abs() <= RELATIVE_TOLERANCE * scale
}
