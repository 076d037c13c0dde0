use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::filter::facet::Facet;

/// Current query text and facet selections.
///
/// Every transition borrows `self` and returns a fresh state, so a state
/// handed to an in-flight evaluation is never changed underneath it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub selections: BTreeMap<String, BTreeSet<String>>,
}

/// A single user-driven change to a [`FilterState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum FilterAction {
    SetQuery { text: String },
    ToggleOption { facet: String, option: String },
    ToggleAll { facet: String, all_options: Vec<String> },
    SetSelection { facet: String, options: Vec<String> },
    ClearFacetOption { facet: String, option: String },
    ClearAll,
}

impl FilterState {
    /// Empty query with an empty selection for each known facet.
    pub fn new() -> Self {
        let selections = Facet::ALL
            .iter()
            .map(|facet| (facet.id().to_string(), BTreeSet::new()))
            .collect();

        Self {
            query: String::new(),
            selections,
        }
    }

    pub fn selection(&self, facet_id: &str) -> Option<&BTreeSet<String>> {
        self.selections.get(facet_id)
    }

    pub fn is_selected(&self, facet_id: &str, option_id: &str) -> bool {
        self.selection(facet_id)
            .map_or(false, |set| set.contains(option_id))
    }

    /// Stored verbatim; trimming happens at evaluation.
    #[must_use]
    pub fn set_query(&self, text: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.query = text.into();
        next
    }

    #[must_use]
    pub fn toggle_option(&self, facet_id: &str, option_id: &str) -> Self {
        let mut next = self.clone();
        let set = next.selections.entry(facet_id.to_string()).or_default();
        if !set.remove(option_id) {
            set.insert(option_id.to_string());
        }
        next
    }

    /// Select-all / deselect-all toggle.
    ///
    /// Compares the selection's cardinality with the domain's, not its
    /// membership: a selection of the same size but different members also
    /// counts as "all selected" and is cleared.
    #[must_use]
    pub fn toggle_all<S: AsRef<str>>(&self, facet_id: &str, all_option_ids: &[S]) -> Self {
        let mut next = self.clone();
        let full: BTreeSet<String> = all_option_ids
            .iter()
            .map(|id| id.as_ref().to_string())
            .collect();
        let set = next.selections.entry(facet_id.to_string()).or_default();
        if set.len() == all_option_ids.len() {
            set.clear();
        } else {
            *set = full;
        }
        next
    }

    #[must_use]
    pub fn set_selection<S: AsRef<str>>(&self, facet_id: &str, options: &[S]) -> Self {
        let mut next = self.clone();
        next.selections.insert(
            facet_id.to_string(),
            options.iter().map(|o| o.as_ref().to_string()).collect(),
        );
        next
    }

    /// Empties every facet. The query is kept.
    #[must_use]
    pub fn clear_all(&self) -> Self {
        let mut next = self.clone();
        for set in next.selections.values_mut() {
            set.clear();
        }
        next
    }

    /// Removes one active-filter chip.
    #[must_use]
    pub fn clear_facet_option(&self, facet_id: &str, option_id: &str) -> Self {
        let mut next = self.clone();
        if let Some(set) = next.selections.get_mut(facet_id) {
            set.remove(option_id);
        }
        next
    }

    #[must_use]
    pub fn apply(&self, action: &FilterAction) -> Self {
        match action {
            FilterAction::SetQuery { text } => self.set_query(text.clone()),
            FilterAction::ToggleOption { facet, option } => self.toggle_option(facet, option),
            FilterAction::ToggleAll { facet, all_options } => self.toggle_all(facet, all_options),
            FilterAction::SetSelection { facet, options } => self.set_selection(facet, options),
            FilterAction::ClearFacetOption { facet, option } => self.clear_facet_option(facet, option),
            FilterAction::ClearAll => self.clear_all(),
        }
    }

    /// Same cardinality rule as [`FilterState::toggle_all`]; drives the
    /// "Select All" / "Deselect All" label.
    pub fn is_fully_selected(&self, facet_id: &str, domain_len: usize) -> bool {
        self.selection(facet_id).map_or(0, BTreeSet::len) == domain_len
    }

    /// Total selected options across all facets, unknown ones included.
    pub fn active_filter_count(&self) -> usize {
        self.selections.values().map(BTreeSet::len).sum()
    }

    pub fn has_active_filters(&self) -> bool {
        self.active_filter_count() > 0
    }

    /// `(facet id, option)` pairs in facet then option order.
    pub fn active_filters(&self) -> Vec<(&str, &str)> {
        self.selections
            .iter()
            .flat_map(|(facet, set)| set.iter().map(move |option| (facet.as_str(), option.as_str())))
            .collect()
    }
}
