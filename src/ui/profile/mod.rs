mod intent;
mod reducer;
mod state;
mod user_data;

pub use intent::ProfileIntent;
pub use reducer::ProfileReducer;
pub use state::{ProfileState, DEFAULT_SUBJECT_ID};
pub use user_data::{UserData, UserDataOptions, DEFAULT_LOAD_DELAY};
