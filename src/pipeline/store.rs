use crate::error::FetchError;
use crate::models::{FactCheckRecord, ResultSet};
use crate::pipeline::traits::FactSource;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// What the dashboard currently knows about the fact-check list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchStatus {
    Loading,
    Ready(Arc<ResultSet>),
    /// `stale` is the last successful set, empty if there never was one.
    Failed {
        message: String,
        stale: Arc<ResultSet>,
    },
}

/// Issued by [`ResultStore::begin_load`]; only the newest ticket may land.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LoadTicket {
    generation: u64,
}

/// A finished fetch waiting to be applied to the store.
#[derive(Debug)]
pub struct Completion {
    pub ticket: LoadTicket,
    pub outcome: Result<ResultSet, FetchError>,
}

pub struct ResultStore<S: FactSource> {
    source: Arc<S>,
    status: FetchStatus,
    last_good: Arc<ResultSet>,
    generation: u64,
}

impl<S: FactSource + 'static> ResultStore<S> {
    /// Starts out `Loading`; nothing is fetched until [`load`](Self::load)
    /// or [`begin_load`](Self::begin_load) is called.
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            status: FetchStatus::Loading,
            last_good: Arc::new(ResultSet::empty()),
            generation: 0,
        }
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    /// Most recent successful set, kept across failures.
    pub fn last_good(&self) -> &Arc<ResultSet> {
        &self.last_good
    }

    /// Records that should be on screen for the current status.
    pub fn records(&self) -> &[FactCheckRecord] {
        match &self.status {
            FetchStatus::Loading => &[],
            FetchStatus::Ready(set) => set.records(),
            FetchStatus::Failed { stale, .. } => stale.records(),
        }
    }

    /// Fetch and apply in one go.
    pub async fn load(&mut self) {
        let ticket = self.begin_load();
        let completion = self.fetch(ticket).await;
        self.complete(completion);
    }

    pub async fn retry(&mut self) {
        self.load().await
    }

    /// Switch to `Loading` and hand out a ticket for the fetch about to start.
    /// Any ticket issued earlier is superseded.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.status = FetchStatus::Loading;
        debug!(generation = self.generation, "load started");
        LoadTicket {
            generation: self.generation,
        }
    }

    /// The network half of a load. Owns everything it needs so it can be
    /// spawned while the store keeps serving renders.
    pub fn fetch(&self, ticket: LoadTicket) -> impl Future<Output = Completion> + Send + 'static {
        let source = Arc::clone(&self.source);
        async move {
            let outcome = source.fetch().await;
            Completion { ticket, outcome }
        }
    }

    /// Apply a finished fetch. Returns `false` when the completion belongs to
    /// a superseded load and was dropped.
    pub fn complete(&mut self, completion: Completion) -> bool {
        let Completion { ticket, outcome } = completion;
        if ticket.generation != self.generation {
            debug!(
                generation = ticket.generation,
                current = self.generation,
                "dropping superseded fetch result"
            );
            return false;
        }

        match outcome {
            Ok(set) => {
                info!(records = set.len(), "fact checks loaded");
                self.last_good = Arc::new(set);
                self.status = FetchStatus::Ready(Arc::clone(&self.last_good));
            }
            Err(err) => {
                warn!(error = %err, stale = self.last_good.len(), "fact check fetch failed");
                self.status = FetchStatus::Failed {
                    message: err.to_string(),
                    stale: Arc::clone(&self.last_good),
                };
            }
        }
        true
    }
}
