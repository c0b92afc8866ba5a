//! The store trait.

use std::collections::HashMap;

use scorekeeper_errors::StoreError;
use scorekeeper_score::{Score, ScoreFactory, ScoreValue};

/// Scores of one type grouped by label.
pub type ScoreGroups = HashMap<String, Vec<Box<dyn Score>>>;

/// Append-only storage for scores.
pub trait ScoreStore: Send {
    /// Append a score under its type and label.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend could not persist the score.
    fn store(&mut self, score: Box<dyn Score>) -> Result<(), StoreError>;

    /// Every score of `score_type`, grouped by label.
    ///
    /// Returned scores are fresh instances built with `factory`. A type with
    /// no stored scores yields an empty map.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backend fails, or if `factory` cannot
    /// rebuild a stored score.
    fn retrieve(&self, factory: &ScoreFactory, score_type: &str) -> Result<ScoreGroups, StoreError>;
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn store(&mut self, score: Box<dyn Score>) -> Result<(), StoreError> {
        (**self).store(score)
    }

    fn retrieve(&self, factory: &ScoreFactory, score_type: &str) -> Result<ScoreGroups, StoreError> {
        (**self).retrieve(factory, score_type)
    }
}

/// Build a fresh score of `score_type` from stored fields.
///
/// # Errors
///
/// [`StoreError::Backend`] if the type is not registered with `factory` or
/// the score rejects the fields.
pub fn rebuild(
    factory: &ScoreFactory,
    score_type: &str,
    name: &str,
    value: ScoreValue,
) -> Result<Box<dyn Score>, StoreError> {
    let mut score = factory
        .create(score_type)
        .map_err(|e| StoreError::backend("create score", e))?;
    score
        .set(name, value)
        .map_err(|e| StoreError::backend("set score", e))?;
    Ok(score)
}
