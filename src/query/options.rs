use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::FacetVocabulary;
use crate::filter::Facet;
use crate::project::ProjectRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOption {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetGroup {
    pub id: String,
    pub name: String,
    pub options: Vec<FacetOption>,
}

/// Projects the fixed vocabulary into renderable option lists.
pub struct FacetOptionSupplier<'v> {
    vocabulary: &'v FacetVocabulary,
}

impl<'v> FacetOptionSupplier<'v> {
    pub fn new(vocabulary: &'v FacetVocabulary) -> Self {
        Self { vocabulary }
    }

    /// Full domain of `facet`, as fed to a select-all toggle.
    pub fn option_ids(&self, facet: Facet) -> &'v [String] {
        self.vocabulary.domain(facet)
    }

    pub fn options(&self, facet: Facet) -> Vec<FacetOption> {
        self.vocabulary
            .domain(facet)
            .iter()
            .map(|label| FacetOption {
                id: label.clone(),
                label: label.clone(),
                count: None,
            })
            .collect()
    }

    /// Each count is what `facet` alone would keep for that option, ignoring
    /// the query and every other facet.
    pub fn options_with_counts(&self, facet: Facet, records: &[ProjectRecord]) -> Vec<FacetOption> {
        let counts = tally(facet, records);
        let mut options = self.options(facet);
        for option in &mut options {
            option.count = Some(counts.get(option.id.as_str()).copied().unwrap_or(0));
        }
        options
    }

    /// One group per facet, in display order. Counts only when `records` is given.
    pub fn groups(&self, records: Option<&[ProjectRecord]>) -> Vec<FacetGroup> {
        Facet::ALL
            .into_iter()
            .map(|facet| FacetGroup {
                id: facet.id().to_string(),
                name: facet.display_name().to_string(),
                options: match records {
                    Some(records) => self.options_with_counts(facet, records),
                    None => self.options(facet),
                },
            })
            .collect()
    }
}

/// Records per facet value in one pass, so counting stays O(records × tags)
/// rather than one catalog scan per option.
///
/// Malformed records are skipped, matching what the engine would keep.
pub fn tally(facet: Facet, records: &[ProjectRecord]) -> HashMap<&str, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records.iter().filter(|r| r.validate().is_ok()) {
        for value in facet.values(record) {
            *counts.entry(value.as_str()).or_insert(0) += 1;
        }
    }
    counts
}
