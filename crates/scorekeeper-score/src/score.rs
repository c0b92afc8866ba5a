//! The score trait.

use core::fmt;

use scorekeeper_errors::InputError;

use crate::ScoreValue;

/// One recorded event.
///
/// Implementations start empty (as built by a [`crate::ScoreFactory`]
/// constructor) and are filled either from an encoded string with
/// [`Score::read`] or from stored fields with [`Score::set`]. A score that
/// has been filled successfully always has a non-empty name. Scores are moved
/// into the keeper's worker thread, hence `Send`.
pub trait Score: Send + fmt::Debug {
    /// Registered type name, used to group scores in a store.
    fn score_type(&self) -> &str;

    /// The label this score is grouped under.
    fn name(&self) -> &str;

    /// The measurement.
    fn value(&self) -> ScoreValue;

    /// Parse and validate an encoded record into this score.
    ///
    /// On error the score is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] describing the first validation failure.
    fn read(&mut self, encoded: &str) -> Result<(), InputError>;

    /// Fill this score from already-decoded fields.
    ///
    /// Used by stores rebuilding scores from persisted rows.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if the name is empty or the value has a
    /// variant this score type does not hold.
    fn set(&mut self, name: &str, value: ScoreValue) -> Result<(), InputError>;
}
