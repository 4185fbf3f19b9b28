//! Subject model and the asynchronous machinery that loads it.
//!
//! The UI never talks to a [`SubjectSource`] directly: it goes through the
//! [`Loader`], which runs every fetch as a cancellable task and reports the
//! result as a [`LoadOutcome`] tagged with the generation of the request.

mod error;
mod loader;
mod model;
mod source;

pub use error::ProfileError;
pub use loader::{LoadOutcome, Loader, OutcomeReceiver, OutcomeSender};
pub use model::{parse_subject_id, Subject, ADMIN_SUBJECT_ID, MISSING_SUBJECT_ID};
pub use source::{MockDirectory, SubjectSource};
