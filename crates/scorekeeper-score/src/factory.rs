//! Registry of score constructors.
//!
//! Stores and the keeper never name a concrete score type; they look one up
//! here by the type name a caller passed in, or the name recorded next to
//! persisted rows.

use std::collections::BTreeMap;

use scorekeeper_errors::LifecycleError;

use crate::{Score, TRIAL, Trial};

/// Constructor producing an empty score ready for [`Score::read`] or
/// [`Score::set`].
pub type ScoreConstructor = fn() -> Box<dyn Score>;

/// Built-in score types as `(type name, constructor)` pairs.
pub fn score_constructors() -> &'static [(&'static str, ScoreConstructor)] {
    &[(TRIAL, Trial::boxed)]
}

/// Maps score type names to constructors.
///
/// [`ScoreFactory::default`] registers every built-in type;
/// [`ScoreFactory::new`] starts empty.
#[derive(Debug, Clone)]
pub struct ScoreFactory {
    constructors: BTreeMap<String, ScoreConstructor>,
}

impl ScoreFactory {
    /// Create an empty factory.
    pub fn new() -> Self {
        Self {
            constructors: BTreeMap::new(),
        }
    }

    /// Register a constructor, returning the one it replaced.
    pub fn register(
        &mut self,
        score_type: impl Into<String>,
        constructor: ScoreConstructor,
    ) -> Option<ScoreConstructor> {
        self.constructors.insert(score_type.into(), constructor)
    }

    /// Builder form of [`ScoreFactory::register`].
    #[must_use]
    pub fn with(mut self, score_type: impl Into<String>, constructor: ScoreConstructor) -> Self {
        self.register(score_type, constructor);
        self
    }

    /// Build an empty score of the given type.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::UnregisteredType`] if no constructor is
    /// registered under `score_type`.
    pub fn create(&self, score_type: &str) -> Result<Box<dyn Score>, LifecycleError> {
        self.constructors
            .get(score_type)
            .map(|constructor| constructor())
            .ok_or_else(|| LifecycleError::unregistered(score_type))
    }

    /// Check if a type is registered.
    pub fn contains(&self, score_type: &str) -> bool {
        self.constructors.contains_key(score_type)
    }

    /// Registered type names, sorted.
    pub fn score_types(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Check if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl Default for ScoreFactory {
    fn default() -> Self {
        score_constructors()
            .iter()
            .fold(Self::new(), |factory, (name, constructor)| {
                factory.with(*name, *constructor)
            })
    }
}
