//! In-memory store.

use std::collections::HashMap;

use scorekeeper_errors::StoreError;
use scorekeeper_score::{Score, ScoreFactory};
use tracing::trace;

use crate::{ScoreGroups, ScoreStore, rebuild};

/// Keeps scores in nested maps: score type, then label, then arrival order.
///
/// Nothing survives the process. Retrieval rebuilds each score through the
/// factory, the same way a persistent store would.
#[derive(Debug, Default)]
pub struct MemoryStore {
    scores: HashMap<String, ScoreGroups>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels stored for `score_type`, sorted.
    pub fn names(&self, score_type: &str) -> Vec<String> {
        let mut names: Vec<String> = self
            .scores
            .get(score_type)
            .map(|groups| groups.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }

    /// Number of scores stored for `score_type`.
    pub fn count(&self, score_type: &str) -> usize {
        self.scores
            .get(score_type)
            .map(|groups| groups.values().map(Vec::len).sum())
            .unwrap_or(0)
    }

    /// Total number of scores across all types.
    pub fn len(&self) -> usize {
        self.scores
            .values()
            .flat_map(HashMap::values)
            .map(Vec::len)
            .sum()
    }

    /// Check if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ScoreStore for MemoryStore {
    fn store(&mut self, score: Box<dyn Score>) -> Result<(), StoreError> {
        trace!(score_type = score.score_type(), label = score.name(), "storing score");
        self.scores
            .entry(score.score_type().to_string())
            .or_default()
            .entry(score.name().to_string())
            .or_default()
            .push(score);
        Ok(())
    }

    fn retrieve(&self, factory: &ScoreFactory, score_type: &str) -> Result<ScoreGroups, StoreError> {
        let Some(groups) = self.scores.get(score_type) else {
            return Ok(ScoreGroups::new());
        };

        groups
            .iter()
            .map(|(label, scores)| {
                let rebuilt = scores
                    .iter()
                    .map(|score| rebuild(factory, score_type, score.name(), score.value()))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok::<_, StoreError>((label.clone(), rebuilt))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorekeeper_score::{TRIAL, Trial};

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_names_and_counts() -> TestResult {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());

        store.store(Box::new(Trial::new("skip", 1.0)?))?;
        store.store(Box::new(Trial::new("hop", 2.0)?))?;
        store.store(Box::new(Trial::new("hop", 3.0)?))?;

        assert_eq!(store.names(TRIAL), vec!["hop", "skip"]);
        assert_eq!(store.count(TRIAL), 3);
        assert_eq!(store.len(), 3);
        assert!(store.names("lap").is_empty());
        Ok(())
    }

    #[test]
    fn test_retrieve_unknown_type_is_empty() -> TestResult {
        let store = MemoryStore::new();
        assert!(store.retrieve(&ScoreFactory::default(), TRIAL)?.is_empty());
        Ok(())
    }
}
