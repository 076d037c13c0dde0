//! Explicit state-transition dispatcher for a browse session.
//!
//! There is no observer graph: each dispatched action produces a new
//! [`FilterState`] and the session re-runs the engine right away.

use std::sync::Arc;

use crate::catalog::{CatalogStore, DetailSource};
use crate::config::BrowserConfig;
use crate::filter::{Facet, FilterAction, FilterState};
use crate::project::ProjectRecord;
use crate::query::{FacetGroup, FacetOptionSupplier, QueryEngine, RecordMatcher, SubstringMatcher};
use crate::types::identifiers::ProjectId;
use crate::types::query_result::QueryResult;

pub struct Browser<M = SubstringMatcher> {
    catalog: Arc<CatalogStore>,
    config: BrowserConfig,
    engine: QueryEngine<M>,
    state: FilterState,
    results: QueryResult,
}

impl Browser<SubstringMatcher> {
    pub fn new(catalog: Arc<CatalogStore>, config: BrowserConfig) -> Self {
        Self::with_engine(catalog, config, QueryEngine::default())
    }
}

impl<M> Browser<M>
where
    M: RecordMatcher,
{
    /// Starts from an empty query and the three known facets unselected.
    pub fn with_engine(catalog: Arc<CatalogStore>, config: BrowserConfig, engine: QueryEngine<M>) -> Self {
        Self::with_state(catalog, config, engine, FilterState::new())
    }

    /// Starts from a given state, e.g. one restored from a `?q=` link.
    pub fn with_state(
        catalog: Arc<CatalogStore>,
        config: BrowserConfig,
        engine: QueryEngine<M>,
        state: FilterState,
    ) -> Self {
        let results = engine.evaluate(&catalog, &state);
        Self {
            catalog,
            config,
            engine,
            state,
            results,
        }
    }

    pub fn dispatch(&mut self, action: &FilterAction) -> &QueryResult {
        let next = self.state.apply(action);
        if next != self.state {
            self.state = next;
            self.results = self.engine.evaluate(&self.catalog, &self.state);
        }
        &self.results
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn results(&self) -> &QueryResult {
        &self.results
    }

    pub fn catalog(&self) -> &Arc<CatalogStore> {
        &self.catalog
    }

    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    /// Convenience wrapper building the select-all action from the vocabulary.
    pub fn toggle_all(&mut self, facet: Facet) -> &QueryResult {
        let action = FilterAction::ToggleAll {
            facet: facet.id().to_string(),
            all_options: self.config.vocabulary.domain(facet).to_vec(),
        };
        self.dispatch(&action)
    }

    pub fn facet_groups(&self) -> Vec<FacetGroup> {
        let supplier = FacetOptionSupplier::new(&self.config.vocabulary);
        let records = self
            .config
            .include_option_counts
            .then(|| self.catalog.records());
        supplier.groups(records)
    }

    pub fn featured(&self) -> &[ProjectRecord] {
        self.catalog.featured(self.config.featured_count)
    }

    pub fn result_summary(&self) -> String {
        self.results.summary()
    }

    pub fn lookup_detail(&self, id: ProjectId, source: &dyn DetailSource) -> Option<ProjectRecord> {
        self.catalog.lookup_detail(id, source)
    }
}
