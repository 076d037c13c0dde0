use std::collections::BTreeSet;

use crate::filter::Facet;
use crate::project::ProjectRecord;
use crate::types::query_result::QueryText;

/// One active facet constraint: the record must carry any of `selected`.
pub type FacetConstraint<'s> = (Facet, &'s BTreeSet<String>);

pub trait RecordMatcher {
    /// `needle` is already trimmed and lowercased.
    fn matches_text(&self, record: &ProjectRecord, needle: &str) -> bool;

    /// OR within the facet. Labels outside the facet's vocabulary simply never match.
    fn matches_facet(&self, record: &ProjectRecord, facet: Facet, selected: &BTreeSet<String>) -> bool {
        facet.values(record).iter().any(|value| selected.contains(value))
    }

    /// Text test (when present) AND every facet constraint.
    fn matches(&self, record: &ProjectRecord, query: &QueryText, constraints: &[FacetConstraint<'_>]) -> bool {
        if let Some(needle) = &query.needle {
            if !self.matches_text(record, needle) {
                return false;
            }
        }
        constraints
            .iter()
            .all(|(facet, selected)| self.matches_facet(record, *facet, selected))
    }
}

/// v0: single-term, case-insensitive substring match over
/// name, description, languages and topics.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubstringMatcher;

impl RecordMatcher for SubstringMatcher {
    fn matches_text(&self, record: &ProjectRecord, needle: &str) -> bool {
        contains_lower(&record.name, needle)
            || contains_lower(&record.description, needle)
            || record.topics.iter().any(|topic| contains_lower(topic, needle))
            || record.languages.iter().any(|lang| contains_lower(lang, needle))
    }
}

// Allocates a lowered copy per field on every call.
fn contains_lower(field: &str, needle: &str) -> bool {
    field.to_lowercase().contains(needle)
}
