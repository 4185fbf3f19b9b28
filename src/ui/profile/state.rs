use crate::profile::{ProfileError, Subject};
use crate::ui::mvi::UiState;

pub const DEFAULT_SUBJECT_ID: u32 = 1;

/// Load state of the data-fetch unit.
///
/// `subject` and `error` are never both set. While `is_loading` is true
/// they still describe the previous completed load.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileState {
    pub subject_id: u32,
    pub subject: Option<Subject>,
    pub error: Option<ProfileError>,
    pub is_loading: bool,
    /// Generation of the request whose outcome may be applied.
    pub generation: u64,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self::new(DEFAULT_SUBJECT_ID)
    }
}

impl UiState for ProfileState {}

impl ProfileState {
    pub fn new(subject_id: u32) -> Self {
        Self {
            subject_id,
            subject: None,
            error: None,
            is_loading: false,
            generation: 0,
        }
    }
}
