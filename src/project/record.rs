use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::identifiers::ProjectId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Project id must be positive, got {0}")]
    InvalidId(ProjectId),
    #[error("Project {0} has no languages")]
    EmptyLanguages(ProjectId),
    #[error("Project {0} has no topics")]
    EmptyTopics(ProjectId),
    #[error("Project {id} lists {field} tag '{tag}' more than once")]
    DuplicateTag {
        id: ProjectId,
        field: &'static str,
        tag: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub name: String,
    pub avatar: String,
}

/// One catalog entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub campus: String,
    pub department: String,
    pub languages: Vec<String>,
    pub topics: Vec<String>,
    pub stars: u32,
    pub forks: u32,
    pub last_updated: String,
    pub url: String,

    // Detail-only; filled by a detail lookup and never consulted by filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributors: Option<Vec<Contributor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

impl ProjectRecord {
    /// Check the structural invariants the query engine relies on.
    ///
    /// A record that fails here is still stored; the engine skips it at
    /// evaluation time instead of failing the whole query.
    pub fn validate(&self) -> Result<(), RecordError> {
        if !self.id.is_valid() {
            return Err(RecordError::InvalidId(self.id));
        }
        if self.languages.is_empty() {
            return Err(RecordError::EmptyLanguages(self.id));
        }
        if self.topics.is_empty() {
            return Err(RecordError::EmptyTopics(self.id));
        }
        check_distinct(self.id, "language", &self.languages)?;
        check_distinct(self.id, "topic", &self.topics)?;
        Ok(())
    }

    pub fn has_details(&self) -> bool {
        self.readme.is_some() || self.contributors.is_some() || self.license.is_some()
    }
}

fn check_distinct(id: ProjectId, field: &'static str, tags: &[String]) -> Result<(), RecordError> {
    for (i, tag) in tags.iter().enumerate() {
        if tags[..i].contains(tag) {
            return Err(RecordError::DuplicateTag {
                id,
                field,
                tag: tag.clone(),
            });
        }
    }
    Ok(())
}
