use tracing::debug;

use crate::ui::mvi::Reducer;
use crate::ui::profile::intent::ProfileIntent;
use crate::ui::profile::state::ProfileState;

pub struct ProfileReducer;

impl Reducer for ProfileReducer {
    type State = ProfileState;
    type Intent = ProfileIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProfileIntent::LoadStarted { id, generation } => ProfileState {
                subject_id: id,
                is_loading: true,
                error: None,
                generation,
                ..state
            },
            ProfileIntent::LoadFinished(outcome) if outcome.generation != state.generation => {
                debug!(
                    id = outcome.id,
                    stale = outcome.generation,
                    current = state.generation,
                    "discarding superseded load outcome"
                );
                state
            }
            ProfileIntent::LoadFinished(outcome) => match outcome.result {
                Ok(subject) => ProfileState {
                    subject: Some(subject),
                    error: None,
                    is_loading: false,
                    ..state
                },
                Err(error) => ProfileState {
                    subject: None,
                    error: Some(error),
                    is_loading: false,
                    ..state
                },
            },
        }
    }
}
