mod intent;
mod reducer;
mod state;

pub use intent::PreferencesIntent;
pub use reducer::PreferencesReducer;
pub use state::PreferencesState;
