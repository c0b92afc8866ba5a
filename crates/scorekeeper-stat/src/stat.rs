//! The statistic trait.

use scorekeeper_errors::StatError;
use scorekeeper_score::Score;

/// A statistic computed over scores.
///
/// `compute` works on a whole group at once. `step` and `report` build the
/// same result one score at a time; for the same scores in the same order
/// both paths give the same answer.
pub trait Stat {
    /// Compute the statistic over `scores`, ignoring any running state.
    ///
    /// # Errors
    ///
    /// [`StatError::NoData`] for an empty slice, [`StatError::TypeInvalid`]
    /// if a score holds a value this statistic cannot consume.
    fn compute(&self, scores: &[Box<dyn Score>]) -> Result<f64, StatError>;

    /// Fold one score into the running state.
    ///
    /// # Errors
    ///
    /// [`StatError::TypeInvalid`] if the score's value cannot be consumed; the
    /// running state is unchanged.
    fn step(&mut self, score: &dyn Score) -> Result<(), StatError>;

    /// The statistic over everything stepped so far.
    ///
    /// # Errors
    ///
    /// [`StatError::NoData`] if nothing was stepped.
    fn report(&self) -> Result<f64, StatError>;
}
