use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use super::error::ProfileError;
use super::model::Subject;
use super::source::SubjectSource;

pub type OutcomeSender = mpsc::UnboundedSender<LoadOutcome>;
pub type OutcomeReceiver = mpsc::UnboundedReceiver<LoadOutcome>;

/// Result of one completed load, tagged with the request that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    /// Generation of the request; only the latest one may be applied.
    pub generation: u64,
    pub id: u32,
    pub result: Result<Subject, ProfileError>,
}

/// Runs subject fetches as background tasks, one at a time.
///
/// Starting a load aborts the one still in flight. A task that already
/// finished may have queued its outcome before the abort, so consumers must
/// still compare generations before applying an outcome.
pub struct Loader {
    source: Arc<dyn SubjectSource>,
    outcome_tx: OutcomeSender,
    in_flight: Option<JoinHandle<()>>,
    generation: u64,
}

impl Loader {
    pub fn new(source: Arc<dyn SubjectSource>, outcome_tx: OutcomeSender) -> Self {
        Self {
            source,
            outcome_tx,
            in_flight: None,
            generation: 0,
        }
    }

    /// Spawns a fetch for `id` and returns the generation tagging it.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, id: u32) -> u64 {
        self.cancel();
        self.generation += 1;
        let generation = self.generation;
        let source = Arc::clone(&self.source);
        let outcome_tx = self.outcome_tx.clone();

        debug!(id, generation, source = source.name(), "starting subject load");
        self.in_flight = Some(tokio::spawn(async move {
            let result = source.fetch(id).await;
            trace!(id, generation, ok = result.is_ok(), "subject load resolved");
            // A closed receiver means the UI is gone; nothing left to notify.
            let _ = outcome_tx.send(LoadOutcome {
                generation,
                id,
                result,
            });
        }));

        generation
    }

    /// Aborts the pending load, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            if !handle.is_finished() {
                debug!(generation = self.generation, "aborting superseded load");
                handle.abort();
            }
        }
    }

    /// True while the most recent load has not resolved yet.
    pub fn is_pending(&self) -> bool {
        self.in_flight
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Loader {
    fn drop(&mut self) {
        self.cancel();
    }
}
