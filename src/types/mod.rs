pub mod identifiers;
pub mod query_result;

pub use identifiers::{CatalogVersion, ProjectId};
pub use query_result::{EvaluationMetadata, QueryResult, QueryText};
