//! Keeper configuration.

use serde::{Deserialize, Serialize};

use crate::error::{KeeperError, KeeperResult};

/// Runtime settings for a [`crate::ScoreKeeper`].
///
/// Missing fields take their defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeeperConfig {
    /// Bound of the append and stats request queues.
    pub request_queue_capacity: usize,
    /// Name given to the worker thread.
    pub worker_thread_name: String,
    /// Score type used by callers that do not name one.
    pub default_score_type: String,
}

impl Default for KeeperConfig {
    fn default() -> Self {
        Self {
            request_queue_capacity: 64,
            worker_thread_name: "scorekeeper-worker".to_string(),
            default_score_type: scorekeeper_score::TRIAL.to_string(),
        }
    }
}

impl KeeperConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`KeeperError::Config`] naming the first invalid field.
    pub fn validate(&self) -> KeeperResult<()> {
        if self.request_queue_capacity == 0 {
            return Err(KeeperError::config(
                "request_queue_capacity must be greater than 0",
            ));
        }
        if self.worker_thread_name.is_empty() {
            return Err(KeeperError::config("worker_thread_name must not be empty"));
        }
        if self.default_score_type.is_empty() {
            return Err(KeeperError::config("default_score_type must not be empty"));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`KeeperError::Config`] if the document is malformed or invalid.
    pub fn from_json(json: &str) -> KeeperResult<Self> {
        let config: KeeperConfig = serde_json::from_str(json)
            .map_err(|e| KeeperError::config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Create a configuration builder.
    #[must_use]
    pub fn builder() -> KeeperConfigBuilder {
        KeeperConfigBuilder::default()
    }
}

/// Builder for [`KeeperConfig`].
#[derive(Debug, Default)]
pub struct KeeperConfigBuilder {
    config: KeeperConfig,
}

impl KeeperConfigBuilder {
    /// Set the request queue bound.
    #[must_use]
    pub fn request_queue_capacity(mut self, capacity: usize) -> Self {
        self.config.request_queue_capacity = capacity;
        self
    }

    /// Set the worker thread name.
    #[must_use]
    pub fn worker_thread_name(mut self, name: impl Into<String>) -> Self {
        self.config.worker_thread_name = name.into();
        self
    }

    /// Set the default score type.
    #[must_use]
    pub fn default_score_type(mut self, score_type: impl Into<String>) -> Self {
        self.config.default_score_type = score_type.into();
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> KeeperResult<KeeperConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
