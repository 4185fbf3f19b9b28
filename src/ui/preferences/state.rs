use crate::preferences::{Preferences, PreferencesPatch};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PreferencesState {
    pub(super) current: Preferences,
    /// Reset target: base defaults overlaid with the custom defaults.
    pub(super) initial: Preferences,
}

impl UiState for PreferencesState {}

impl PreferencesState {
    pub fn new(defaults: &PreferencesPatch) -> Self {
        let initial = Preferences::default().merged(defaults);
        Self {
            current: initial.clone(),
            initial,
        }
    }

    pub fn preferences(&self) -> &Preferences {
        &self.current
    }

    pub fn initial(&self) -> &Preferences {
        &self.initial
    }

    pub fn is_modified(&self) -> bool {
        self.current != self.initial
    }
}
