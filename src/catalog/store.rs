// Read-only after construction:
// no mutation
// no "update" methods
// a data refresh builds a new store

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::project::ProjectRecord;
use crate::types::identifiers::{CatalogVersion, ProjectId};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Duplicate project ID: {0}")]
    DuplicateProjectId(ProjectId),
}

/// Supplies the detail-only fields for a record.
pub trait DetailSource {
    fn enrich(&self, record: &ProjectRecord) -> ProjectRecord;
}

/// What happened to the raw entries of a catalog file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub entries_read: usize,
    pub entries_loaded: usize,
    pub entries_skipped: usize,
}

#[derive(Debug, Clone)]
pub struct CatalogStore {
    records: Vec<ProjectRecord>,
    by_id: HashMap<ProjectId, usize>,
    version: CatalogVersion,
}

impl CatalogStore {
    /// Build a store in the given order. Fails only on a repeated id.
    pub fn new(records: Vec<ProjectRecord>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if by_id.insert(record.id, position).is_some() {
                return Err(CatalogError::DuplicateProjectId(record.id));
            }
        }

        let version = CatalogVersion::from_records(&records);

        Ok(Self {
            records,
            by_id,
            version,
        })
    }

    /// Read a JSON array of project records.
    ///
    /// Entries that do not decode are logged and skipped; the rest load in
    /// file order.
    pub fn from_reader<R: Read>(reader: R) -> Result<(Self, LoadReport), CatalogError> {
        let raw: Vec<serde_json::Value> = serde_json::from_reader(reader)?;
        let mut report = LoadReport {
            entries_read: raw.len(),
            ..LoadReport::default()
        };

        let mut records = Vec::with_capacity(raw.len());
        for (position, entry) in raw.into_iter().enumerate() {
            match serde_json::from_value::<ProjectRecord>(entry) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(position, error = %e, "Skipping malformed catalog entry");
                    report.entries_skipped += 1;
                }
            }
        }
        report.entries_loaded = records.len();

        Ok((Self::new(records)?, report))
    }

    pub fn load(path: &Path) -> Result<(Self, LoadReport), CatalogError> {
        let f = std::fs::File::open(path)?;
        let (store, report) = Self::from_reader(std::io::BufReader::new(f))?;
        tracing::debug!(
            path = %path.display(),
            loaded = report.entries_loaded,
            skipped = report.entries_skipped,
            version = store.version.as_str(),
            "Loaded catalog"
        );
        Ok((store, report))
    }

    /// `None` is the not-found signal.
    pub fn lookup_by_id(&self, id: ProjectId) -> Option<&ProjectRecord> {
        self.by_id.get(&id).map(|&position| &self.records[position])
    }

    pub fn lookup_detail(&self, id: ProjectId, source: &dyn DetailSource) -> Option<ProjectRecord> {
        self.lookup_by_id(id).map(|record| source.enrich(record))
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn version(&self) -> &CatalogVersion {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The leading records in stored order, as shown on the landing page.
    pub fn featured(&self, count: usize) -> &[ProjectRecord] {
        &self.records[..count.min(self.records.len())]
    }
}
