use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::project::ProjectRecord;

/// Stable identity of a project. Used for routing and detail lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(u64);

impl ProjectId {
    pub const fn new(raw: u64) -> Self {
        ProjectId(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// Ids are positive; zero marks a record that never got one.
    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }
}

impl From<u64> for ProjectId {
    fn from(raw: u64) -> Self {
        ProjectId(raw)
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Content fingerprint of a loaded catalog.
///
/// Two stores holding the same records in the same order share a version,
/// so the presentation layer can tell which data refresh produced a result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogVersion(String);

impl CatalogVersion {
    pub fn from_records(records: &[ProjectRecord]) -> Self {
        let mut hasher = Sha256::new();
        for record in records {
            // Fall back to the id alone if a record ever fails to serialize
            match serde_json::to_vec(record) {
                Ok(bytes) => hasher.update(&bytes),
                Err(_) => hasher.update(record.id.get().to_be_bytes()),
            }
            hasher.update(b"\n");
        }

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        CatalogVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
