//! Simulated fetch latency with stale-result suppression.
//!
//! The engine itself never suspends. This layer delays the visibility of a
//! result the way a remote fetch would, and guarantees that a result is only
//! published while its submission is still the latest one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::catalog::{CatalogStore, DetailSource};
use crate::config::BrowserConfig;
use crate::filter::FilterState;
use crate::project::ProjectRecord;
use crate::query::{QueryEngine, RecordMatcher, SubstringMatcher};
use crate::types::identifiers::ProjectId;
use crate::types::query_result::QueryResult;

/// Identifies one submission. Later submissions carry larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Generation counter deciding which in-flight result may still be shown.
#[derive(Debug, Default)]
pub struct EvaluationGate {
    latest: AtomicU64,
}

impl EvaluationGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supersedes every ticket issued before.
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn latest(&self) -> Option<Ticket> {
        match self.latest.load(Ordering::SeqCst) {
            0 => None,
            n => Some(Ticket(n)),
        }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Hands `value` back only if `ticket` is still the latest.
    pub fn deliver<T>(&self, ticket: Ticket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            tracing::debug!(ticket = ticket.0, "Discarding superseded evaluation");
            None
        }
    }
}

/// A delivered evaluation together with the input that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySnapshot {
    pub ticket: Ticket,
    pub state: FilterState,
    pub result: QueryResult,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationStatus {
    Idle,
    Loading(Ticket),
    Ready(QuerySnapshot),
}

impl EvaluationStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, EvaluationStatus::Loading(_))
    }
}

/// Outcome of a delayed detail lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailLookup {
    Found(ProjectRecord),
    NotFound,
    Superseded,
}

impl DetailLookup {
    pub fn into_record(self) -> Option<ProjectRecord> {
        match self {
            DetailLookup::Found(record) => Some(record),
            DetailLookup::NotFound | DetailLookup::Superseded => None,
        }
    }
}

/// Delays each evaluation by a fixed latency and publishes only the newest.
///
/// `submit` must be called from within a Tokio runtime.
pub struct DeferredEvaluator<M = SubstringMatcher> {
    catalog: Arc<CatalogStore>,
    engine: Arc<QueryEngine<M>>,
    gate: Arc<EvaluationGate>,
    detail_gate: EvaluationGate,
    status: Arc<watch::Sender<EvaluationStatus>>,
    pending: Mutex<Option<JoinHandle<()>>>,
    list_latency: Duration,
    detail_latency: Duration,
}

impl DeferredEvaluator<SubstringMatcher> {
    pub fn from_config(catalog: Arc<CatalogStore>, config: &BrowserConfig) -> Self {
        Self::new(
            catalog,
            QueryEngine::default(),
            config.list_latency(),
            config.detail_latency(),
        )
    }
}

impl<M> DeferredEvaluator<M>
where
    M: RecordMatcher + Send + Sync + 'static,
{
    pub fn new(
        catalog: Arc<CatalogStore>,
        engine: QueryEngine<M>,
        list_latency: Duration,
        detail_latency: Duration,
    ) -> Self {
        let (status, _) = watch::channel(EvaluationStatus::Idle);
        Self {
            catalog,
            engine: Arc::new(engine),
            gate: Arc::new(EvaluationGate::new()),
            detail_gate: EvaluationGate::new(),
            status: Arc::new(status),
            pending: Mutex::new(None),
            list_latency,
            detail_latency,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<EvaluationStatus> {
        self.status.subscribe()
    }

    pub fn status(&self) -> EvaluationStatus {
        self.status.borrow().clone()
    }

    /// Schedule an evaluation of `state`, cancelling whatever was pending.
    pub fn submit(&self, state: FilterState) -> Ticket {
        // Issue, publish, abort and spawn under one lock: the newest ticket
        // must always belong to the task that is left running.
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        let ticket = self.gate.issue();
        self.status.send_replace(EvaluationStatus::Loading(ticket));

        if let Some(previous) = pending.take() {
            previous.abort();
            tracing::debug!(ticket = ticket.0, "Superseding pending evaluation");
        }

        let catalog = Arc::clone(&self.catalog);
        let engine = Arc::clone(&self.engine);
        let gate = Arc::clone(&self.gate);
        let status = Arc::clone(&self.status);
        let latency = self.list_latency;

        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(latency).await;
            if !gate.is_current(ticket) {
                tracing::debug!(ticket = ticket.0, "Evaluation superseded before it ran");
                return;
            }

            let result = engine.evaluate(&catalog, &state);
            status.send_if_modified(|current| {
                match gate.deliver(ticket, ()) {
                    Some(()) => {
                        *current = EvaluationStatus::Ready(QuerySnapshot {
                            ticket,
                            state,
                            result,
                        });
                        true
                    }
                    None => false,
                }
            });
        }));

        ticket
    }

    /// Detail lookup behind the configured detail latency.
    ///
    /// A lookup overtaken by a newer one while waiting resolves to
    /// [`DetailLookup::Superseded`] and never yields its record.
    pub async fn lookup_detail(&self, id: ProjectId, source: &dyn DetailSource) -> DetailLookup {
        let ticket = self.detail_gate.issue();
        tokio::time::sleep(self.detail_latency).await;
        if !self.detail_gate.is_current(ticket) {
            tracing::debug!(%id, ticket = ticket.0, "Discarding superseded detail lookup");
            return DetailLookup::Superseded;
        }

        match self.catalog.lookup_detail(id, source) {
            Some(record) => DetailLookup::Found(record),
            None => {
                tracing::debug!(%id, "Project not found");
                DetailLookup::NotFound
            }
        }
    }
}
