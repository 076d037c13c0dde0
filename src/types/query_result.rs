use serde::{Deserialize, Serialize};

use crate::project::ProjectRecord;
use crate::types::identifiers::CatalogVersion;

/// A normalized free-text query.
/// Normalization rules:
/// - Trim surrounding whitespace
/// - Lowercase
/// - No tokenization: the whole trimmed text is one substring term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryText {
    pub raw: String,
    pub needle: Option<String>,
}

impl QueryText {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let trimmed = raw.trim();
        let needle = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        };

        Self { raw, needle }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_none()
    }
}

/// Metadata describing the outcome of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationMetadata {
    pub query: String,
    pub active_filters: usize,

    pub projects_considered: usize,
    pub projects_matched: usize,
    pub projects_excluded_malformed: usize,

    pub catalog_version: CatalogVersion,
}

/// The visible result set for a filter state, in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub projects: Vec<ProjectRecord>,
    pub evaluation: EvaluationMetadata,
}

impl QueryResult {
    pub fn total_count(&self) -> usize {
        self.evaluation.projects_matched
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// "Showing 3 projects for \"rust\"", as rendered above the result grid.
    pub fn summary(&self) -> String {
        let count = self.total_count();
        let noun = if count == 1 { "project" } else { "projects" };
        if self.evaluation.query.is_empty() {
            format!("Showing {count} {noun}")
        } else {
            format!("Showing {count} {noun} for \"{}\"", self.evaluation.query)
        }
    }
}
