use std::collections::HashMap;
use std::sync::Arc;

use tokio::task::{Id, JoinSet};

use crate::mvi::Reducer;

use super::intent::FetchIntent;
use super::lookup::{Lookup, LookupAborted};
use super::reducer::FetchReducer;
use super::state::{FetchLifecycle, FetchState, FetchStatus};

type LifecycleOf<L> = FetchLifecycle<<L as Lookup>::Output, <L as Lookup>::Error>;
type OutcomeOf<L> = Result<<L as Lookup>::Output, <L as Lookup>::Error>;

/// What happened to a lookup that came back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The outcome settled the current query.
    Applied { generation: u64, query: String },
    /// A newer query superseded the request; the outcome was dropped.
    Stale { generation: u64, query: String },
}

/// Generation and query a lookup task was issued under.
struct Issued {
    generation: u64,
    query: String,
}

/// Owns a [`FetchLifecycle`] and drives lookups for it.
///
/// Lookups run as tasks in a [`JoinSet`] owned by the controller; only the
/// controller mutates the lifecycle. A task that panics still completes: it
/// settles as a rejection carrying [`LookupAborted`]. Dropping the controller
/// aborts whatever is still in flight. Must be used inside a tokio runtime.
pub struct FetchController<L: Lookup> {
    lookup: Arc<L>,
    lifecycle: LifecycleOf<L>,
    tasks: JoinSet<OutcomeOf<L>>,
    issued: HashMap<Id, Issued>,
}

impl<L: Lookup> FetchController<L> {
    pub fn new(lookup: L) -> Self {
        Self::with_shared(Arc::new(lookup))
    }

    pub fn with_shared(lookup: Arc<L>) -> Self {
        Self {
            lookup,
            lifecycle: FetchLifecycle::default(),
            tasks: JoinSet::new(),
            issued: HashMap::new(),
        }
    }

    pub fn lifecycle(&self) -> &LifecycleOf<L> {
        &self.lifecycle
    }

    pub fn state(&self) -> &FetchState<L::Output, L::Error> {
        self.lifecycle.state()
    }

    pub fn status(&self) -> FetchStatus {
        self.lifecycle.status()
    }

    /// Lookups issued whose outcome has not been received yet, stale ones
    /// included.
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// Feed the current value of the tracked query.
    ///
    /// When the value differs from the previous one the lifecycle is updated
    /// synchronously (idle for an empty query, pending otherwise) and, if
    /// pending, exactly one lookup is issued.
    pub fn on_query_change(&mut self, query: impl Into<String>) -> FetchStatus {
        let previous = self.lifecycle.generation();
        self.dispatch(FetchIntent::QueryChanged {
            query: query.into(),
        });

        if self.lifecycle.generation() != previous && self.status() == FetchStatus::Pending {
            self.issue();
        }

        self.status()
    }

    /// Recovery action: clear the query and go back to idle.
    pub fn reset(&mut self) {
        self.dispatch(FetchIntent::Reset);
    }

    /// Wait for the next lookup to come back and apply it.
    ///
    /// Returns `None` straight away when nothing is in flight. Cancel safe:
    /// dropping the future before it resolves loses nothing.
    pub async fn next_completion(&mut self) -> Option<Completion> {
        loop {
            let (id, joined) = match self.tasks.join_next_with_id().await? {
                Ok((id, outcome)) => (id, Ok(outcome)),
                Err(e) if e.is_panic() => (e.id(), Err("lookup task panicked")),
                Err(e) => (e.id(), Err("lookup task was cancelled")),
            };

            let Some(issued) = self.issued.remove(&id) else {
                tracing::error!(task = %id, "Completion for unknown lookup task");
                continue;
            };

            let outcome = match joined {
                Ok(outcome) => outcome,
                Err(reason) => {
                    tracing::error!(
                        generation = issued.generation,
                        query = %issued.query,
                        reason,
                        "Lookup task ended without an outcome"
                    );
                    Err(L::Error::from(LookupAborted {
                        query: issued.query.clone(),
                        reason: reason.to_string(),
                    }))
                }
            };

            return Some(self.apply(issued, outcome));
        }
    }

    fn dispatch(&mut self, intent: FetchIntent<L::Output, L::Error>) {
        let current = std::mem::take(&mut self.lifecycle);
        self.lifecycle = FetchReducer::reduce(current, intent);
    }

    fn issue(&mut self) {
        let generation = self.lifecycle.generation();
        let query = self.lifecycle.query().to_string();
        let lookup = Arc::clone(&self.lookup);

        tracing::debug!(generation, query = %query, "Issuing lookup");

        let task_query = query.clone();
        let handle = self
            .tasks
            .spawn(async move { lookup.lookup(&task_query).await });
        self.issued.insert(handle.id(), Issued { generation, query });
    }

    fn apply(&mut self, issued: Issued, outcome: OutcomeOf<L>) -> Completion {
        let Issued { generation, query } = issued;

        if generation != self.lifecycle.generation() {
            tracing::debug!(
                generation,
                current = self.lifecycle.generation(),
                query = %query,
                "Discarding superseded lookup"
            );
            return Completion::Stale { generation, query };
        }

        if let Err(error) = &outcome {
            tracing::info!(query = %query, error = %error, "Lookup rejected");
        }

        self.dispatch(FetchIntent::Settled {
            generation,
            outcome,
        });
        Completion::Applied { generation, query }
    }
}
