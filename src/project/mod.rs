pub mod record;

pub use crate::types::identifiers::ProjectId;
pub use record::{Contributor, ProjectRecord, RecordError};
