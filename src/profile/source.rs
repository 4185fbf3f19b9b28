//! Where subjects come from.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::error::ProfileError;
use super::model::{Subject, MISSING_SUBJECT_ID};

/// A provider of subjects keyed by id.
///
/// The loader awaits `fetch` inside a spawned task, so implementations may
/// suspend for as long as they need. A network-backed directory would
/// implement this trait without changing the loader or the UI.
#[async_trait]
pub trait SubjectSource: Send + Sync {
    /// Returns the name of this source for logging.
    fn name(&self) -> &'static str;

    /// Resolves the subject for `id`.
    async fn fetch(&self, id: u32) -> Result<Subject, ProfileError>;
}

/// In-memory directory that simulates latency with a timer.
#[derive(Debug, Clone)]
pub struct MockDirectory {
    delay: Duration,
}

impl MockDirectory {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl SubjectSource for MockDirectory {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn fetch(&self, id: u32) -> Result<Subject, ProfileError> {
        tokio::time::sleep(self.delay).await;

        if id == MISSING_SUBJECT_ID {
            debug!(id, "mock directory has no such subject");
            return Err(ProfileError::NotFound { id });
        }

        Ok(Subject::fixture(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn fetch_waits_for_the_configured_delay() {
        let directory = MockDirectory::new(Duration::from_millis(500));
        let started = tokio::time::Instant::now();

        let subject = directory.fetch(2).await.unwrap();

        assert_eq!(subject, Subject::fixture(2));
        assert!(started.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_of_reserved_id_fails() {
        let directory = MockDirectory::new(Duration::from_millis(10));
        let err = directory.fetch(MISSING_SUBJECT_ID).await.unwrap_err();
        assert_eq!(err, ProfileError::NotFound { id: 999 });
    }
}
