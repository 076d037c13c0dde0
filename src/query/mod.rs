pub mod matching;
pub mod options;
pub mod scheduler;

use crate::catalog::CatalogStore;
use crate::filter::{Facet, FilterState};
use crate::project::ProjectRecord;
use crate::types::query_result::{EvaluationMetadata, QueryResult, QueryText};
pub use matching::{FacetConstraint, RecordMatcher, SubstringMatcher};
pub use options::{FacetGroup, FacetOption, FacetOptionSupplier};
pub use scheduler::{DeferredEvaluator, DetailLookup, EvaluationGate, EvaluationStatus, QuerySnapshot, Ticket};

/// Borrowed outcome of a filter pass.
#[derive(Debug, Clone, Default)]
pub struct Filtered<'a> {
	pub matched: Vec<&'a ProjectRecord>,
	pub excluded_malformed: usize,
}

pub struct QueryEngine<M> {
	matcher: M,
}

impl Default for QueryEngine<SubstringMatcher> {
	fn default() -> Self {
		Self {
			matcher: SubstringMatcher,
		}
	}
}

impl<M> QueryEngine<M>
where
	M: RecordMatcher,
{
	pub fn new(matcher: M) -> Self {
		Self { matcher }
	}

	pub fn matcher(&self) -> &M {
		&self.matcher
	}

	/// Stable filter over `records`. Never fails: malformed records are
	/// logged and left out, unknown facets apply no constraint.
	pub fn filter<'a>(&self, records: &'a [ProjectRecord], state: &FilterState) -> Filtered<'a> {
		let query = QueryText::new(state.query.as_str());
		let constraints = active_constraints(state);

		let mut matched = Vec::new();
		let mut excluded_malformed = 0;

		for record in records {
			if let Err(e) = record.validate() {
				tracing::warn!(id = %record.id, error = %e, "Excluding malformed project record");
				excluded_malformed += 1;
				continue;
			}
			if self.matcher.matches(record, &query, &constraints) {
				matched.push(record);
			}
		}

		Filtered {
			matched,
			excluded_malformed,
		}
	}

	pub fn evaluate(&self, catalog: &CatalogStore, state: &FilterState) -> QueryResult {
		let Filtered {
			matched,
			excluded_malformed,
		} = self.filter(catalog.records(), state);

		let evaluation = EvaluationMetadata {
			query: state.query.clone(),
			active_filters: state.active_filter_count(),
			projects_considered: catalog.len(),
			projects_matched: matched.len(),
			projects_excluded_malformed: excluded_malformed,
			catalog_version: catalog.version().clone(),
		};

		QueryResult {
			projects: matched.into_iter().cloned().collect(),
			evaluation,
		}
	}
}

/// The core contract: records passing `state`, in their original order.
pub fn filter_records<'a>(records: &'a [ProjectRecord], state: &FilterState) -> Vec<&'a ProjectRecord> {
	QueryEngine::default().filter(records, state).matched
}

/// Known facets with a non-empty selection. Unknown ids are dropped here.
pub fn active_constraints(state: &FilterState) -> Vec<FacetConstraint<'_>> {
	state
		.selections
		.iter()
		.filter(|(_, selected)| !selected.is_empty())
		.filter_map(|(id, selected)| match Facet::from_id(id) {
			Some(facet) => Some((facet, selected)),
			None => {
				tracing::debug!(facet = %id, "Ignoring selection for unknown facet");
				None
			}
		})
		.collect()
}
