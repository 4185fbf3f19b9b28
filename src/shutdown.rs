use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::signal;
use tokio::sync::Notify;
use tracing::info;

/// Owns the shutdown flag shared by the input thread, the signal listener
/// and the UI loop.
pub struct ShutdownCoordinator {
    shutdown: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Signal shutdown start
    pub fn signal(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            info!("graceful shutdown initiated");
            self.notify.notify_waiters();
        }
    }

    /// Create a handle for sharing
    pub fn handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            shutdown: Arc::clone(&self.shutdown),
            notify: Arc::clone(&self.notify),
        }
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Lightweight handle for checking shutdown state
#[derive(Clone)]
pub struct ShutdownHandle {
    shutdown: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ShutdownHandle {
    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    pub fn signal(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            self.notify.notify_waiters();
        }
    }

    pub async fn wait(&self) {
        // Register with Notify before checking the flag, otherwise a signal
        // landing between the check and the await is lost.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_shutting_down() {
            return;
        }
        notified.await;
    }
}

/// Waits for Ctrl+C or SIGTERM and flips the shutdown flag.
///
/// In raw mode Ctrl+C arrives as a key event instead, so this mainly
/// catches signals sent from outside the terminal.
pub async fn listen_for_signals(handle: ShutdownHandle) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())?;
        tokio::select! {
            result = signal::ctrl_c() => result?,
            _ = sigterm.recv() => {},
            _ = handle.wait() => return Ok(()),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::select! {
            result = signal::ctrl_c() => result?,
            _ = handle.wait() => return Ok(()),
        }
    }

    info!("termination signal received");
    handle.signal();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn signal_is_seen_by_every_handle() {
        let coordinator = ShutdownCoordinator::new();
        let before = coordinator.handle();
        assert!(!before.is_shutting_down());

        coordinator.signal();
        coordinator.signal();

        assert!(before.is_shutting_down());
        assert!(coordinator.handle().is_shutting_down());
    }

    #[test]
    fn handle_signal_reaches_other_handles() {
        let coordinator = ShutdownCoordinator::new();
        let input = coordinator.handle();
        coordinator.handle().signal();
        assert!(input.is_shutting_down());
    }

    #[tokio::test]
    async fn wait_returns_after_handle_signal() {
        let coordinator = ShutdownCoordinator::new();
        let waiter = coordinator.handle();
        let task = tokio::spawn(async move { waiter.wait().await });

        coordinator.handle().signal();

        tokio::time::timeout(Duration::from_secs(1), task)
            .await
            .expect("wait should complete")
            .unwrap();
    }

    #[tokio::test]
    async fn wait_returns_immediately_when_already_signaled() {
        let coordinator = ShutdownCoordinator::new();
        coordinator.signal();
        coordinator.handle().wait().await;
    }
}
