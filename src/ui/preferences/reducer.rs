use crate::ui::mvi::Reducer;
use crate::ui::preferences::intent::PreferencesIntent;
use crate::ui::preferences::state::PreferencesState;

pub struct PreferencesReducer;

impl Reducer for PreferencesReducer {
    type State = PreferencesState;
    type Intent = PreferencesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PreferencesIntent::Update(patch) => PreferencesState {
                current: state.current.merged(&patch),
                initial: state.initial,
            },
            PreferencesIntent::Reset => PreferencesState {
                current: state.initial.clone(),
                initial: state.initial,
            },
        }
    }
}
