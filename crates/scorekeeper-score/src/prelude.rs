//! Common imports for working with scores.

pub use crate::{
    factory::{ScoreConstructor, ScoreFactory, score_constructors},
    score::Score,
    trial::{TRIAL, Trial},
    value::ScoreValue,
};
pub use scorekeeper_errors::{InputError, LifecycleError};
