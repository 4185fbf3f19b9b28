use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use parking_lot::Mutex;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Arc;

type Restore = Box<dyn FnOnce() + Send + 'static>;

/// Puts the terminal back the way the profile screen found it.
///
/// The restore step is shared with the panic hook; whichever of drop and
/// panic runs first takes it, so it runs at most once.
pub struct TerminalGuard {
    restore: Arc<Mutex<Option<Restore>>>,
}

impl TerminalGuard {
    fn with_restore<F: FnOnce() + Send + 'static>(restore: F) -> Self {
        Self {
            restore: Arc::new(Mutex::new(Some(Box::new(restore)))),
        }
    }

    fn install_panic_hook(&self) {
        let restore = Arc::clone(&self.restore);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            run_once(&restore);
            default_hook(info);
        }));
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        run_once(&self.restore);
    }
}

fn run_once(slot: &Mutex<Option<Restore>>) {
    if let Some(restore) = slot.lock().take() {
        restore();
    }
}

fn leave_profile_screen() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(DisableBracketedPaste);
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

/// Enters raw mode on the alternate screen with bracketed paste, so pasted
/// ids arrive as a single event.
pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard::with_restore(leave_profile_screen);
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableBracketedPaste)?;
    stdout.execute(Hide)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    guard.install_panic_hook();

    Ok((terminal, guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_guard() -> (TerminalGuard, Arc<AtomicUsize>) {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let guard = TerminalGuard::with_restore(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (guard, runs)
    }

    #[test]
    fn drop_restores_the_terminal() {
        let (guard, runs) = counting_guard();
        assert_eq!(runs.load(Ordering::SeqCst), 0);
        drop(guard);
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn restore_runs_once_when_the_slot_was_already_taken() {
        let (guard, runs) = counting_guard();
        // Same path the panic hook takes.
        run_once(&guard.restore);
        drop(guard);
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }
}
