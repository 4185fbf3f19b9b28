use crate::profile::LoadOutcome;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ProfileIntent {
    /// A load for `id` was spawned and tagged with `generation`.
    LoadStarted { id: u32, generation: u64 },
    /// A spawned load resolved. Ignored unless it is the latest request.
    LoadFinished(LoadOutcome),
}

impl Intent for ProfileIntent {}
