use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::profile::{LoadOutcome, Loader, MockDirectory, OutcomeSender, SubjectSource};
use crate::ui::mvi::{dispatch_mvi, Reducer};
use crate::ui::profile::intent::ProfileIntent;
use crate::ui::profile::reducer::ProfileReducer;
use crate::ui::profile::state::{ProfileState, DEFAULT_SUBJECT_ID};

pub const DEFAULT_LOAD_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserDataOptions {
    pub initial_id: u32,
    /// Simulated latency of every load.
    pub load_delay: Duration,
}

impl Default for UserDataOptions {
    fn default() -> Self {
        Self {
            initial_id: DEFAULT_SUBJECT_ID,
            load_delay: DEFAULT_LOAD_DELAY,
        }
    }
}

/// The data-fetch unit: tracked subject id, its load state, and the loader
/// that resolves it.
///
/// Outcomes arrive on the channel passed at construction and must be handed
/// back through [`UserData::apply`] by whoever owns the receiver.
pub struct UserData {
    state: ProfileState,
    loader: Loader,
}

impl UserData {
    /// Creates the unit backed by the mock directory and starts loading
    /// `options.initial_id` right away.
    pub fn new(options: UserDataOptions, outcome_tx: OutcomeSender) -> Self {
        let source = Arc::new(MockDirectory::new(options.load_delay));
        Self::with_source(options.initial_id, source, outcome_tx)
    }

    pub fn with_source(
        initial_id: u32,
        source: Arc<dyn SubjectSource>,
        outcome_tx: OutcomeSender,
    ) -> Self {
        let mut user_data = Self {
            state: ProfileState::new(initial_id),
            loader: Loader::new(source, outcome_tx),
        };
        user_data.load(initial_id);
        user_data
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    /// Tracks `id` and loads it, even when it equals the current id.
    pub fn set_subject_id(&mut self, id: u32) {
        info!(id, "subject id changed");
        self.load(id);
    }

    /// Reloads the current subject id.
    pub fn refresh(&mut self) {
        info!(id = self.state.subject_id, "refreshing subject");
        self.load(self.state.subject_id);
    }

    /// Applies a completed load. Returns false when the outcome belongs to
    /// a superseded request and was dropped.
    pub fn apply(&mut self, outcome: LoadOutcome) -> bool {
        let current = outcome.generation == self.state.generation;
        dispatch_mvi!(self, state, ProfileReducer, ProfileIntent::LoadFinished(outcome));
        current
    }

    fn load(&mut self, id: u32) {
        let generation = self.loader.start(id);
        dispatch_mvi!(
            self,
            state,
            ProfileReducer,
            ProfileIntent::LoadStarted { id, generation }
        );
    }
}
