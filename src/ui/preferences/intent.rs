use crate::preferences::PreferencesPatch;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PreferencesIntent {
    /// Shallow-merge the given fields over the current preferences.
    Update(PreferencesPatch),
    /// Restore the preferences captured at initialization.
    Reset,
}

impl Intent for PreferencesIntent {}
