use thiserror::Error;

/// Errors surfaced by the data-fetch unit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// The source has no subject with this id.
    #[error("User not found")]
    NotFound { id: u32 },

    /// The requested id could not be parsed; no load was attempted.
    #[error("Invalid user id: '{input}'")]
    Validation { input: String },
}
