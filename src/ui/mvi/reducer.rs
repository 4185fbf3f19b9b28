//! State transitions of the profile screen's units.

use super::intent::Intent;
use super::state::UiState;

/// Turns one unit's state plus an intent into its next state.
///
/// `ProfileReducer` and `PreferencesReducer` are the only places the
/// data-fetch and preferences units change. Reducers do no I/O: starting or
/// cancelling a load happens in `UserData` before the intent is dispatched.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Consumes the current state and returns the next one.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
