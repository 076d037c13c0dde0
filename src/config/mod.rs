pub mod vocabulary;

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::filter::Facet;
pub use vocabulary::FacetVocabulary;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Vocabulary for facet '{0}' is empty")]
    EmptyVocabulary(Facet),
}

// Serializable, comparable, every field has an explicit default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    pub vocabulary: FacetVocabulary,
    /// Simulated fetch delay before a result list becomes visible.
    pub list_latency_ms: u64,
    /// Simulated fetch delay before a project detail becomes visible.
    pub detail_latency_ms: u64,
    pub featured_count: usize,
    pub include_option_counts: bool,
}

impl BrowserConfig {
    pub fn v0() -> Self {
        Self {
            vocabulary: FacetVocabulary::uc_system(),
            list_latency_ms: 600,
            detail_latency_ms: 800,
            featured_count: 3,
            include_option_counts: false,
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let f = std::fs::File::open(path)?;
        let config: BrowserConfig = serde_json::from_reader(f)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded browser config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for facet in Facet::ALL {
            if self.vocabulary.domain(facet).is_empty() {
                return Err(ConfigError::EmptyVocabulary(facet));
            }
        }
        Ok(())
    }

    pub fn list_latency(&self) -> Duration {
        Duration::from_millis(self.list_latency_ms)
    }

    pub fn detail_latency(&self) -> Duration {
        Duration::from_millis(self.detail_latency_ms)
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self::v0()
    }
}
