use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::config::Config;
use crate::shutdown::{listen_for_signals, ShutdownCoordinator};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_paste};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

const TICK_RATE: Duration = Duration::from_millis(120);

/// Runs the profile screen until the user quits or a signal arrives.
pub async fn run(config: Config) -> Result<()> {
    let shutdown = ShutdownCoordinator::new();
    let signals = tokio::spawn(listen_for_signals(shutdown.handle()));

    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let (outcome_tx, mut outcomes) = mpsc::unbounded_channel();
    let mut app = App::new(&config, outcome_tx);
    let mut events = EventHandler::new(TICK_RATE, shutdown.handle());
    let shutdown_handle = shutdown.handle();
    info!(
        initial_id = config.profile.initial_id,
        load_delay_ms = config.profile.load_delay_ms,
        "profile screen started"
    );

    loop {
        terminal
            .draw(|frame| draw(frame, &app))
            .context("failed to draw frame")?;
        if app.should_quit() {
            break;
        }

        tokio::select! {
            event = events.next() => match event {
                Some(AppEvent::Key(key)) => {
                    let action = handle_key(&mut app, key);
                    debug!(?action, "key handled");
                }
                Some(AppEvent::Paste(text)) => {
                    handle_paste(&mut app, &text);
                }
                Some(AppEvent::Tick) => app.on_tick(),
                // The next draw picks up the new size.
                Some(AppEvent::Resize(_, _)) => {}
                None => app.request_quit(),
            },
            Some(outcome) = outcomes.recv() => {
                if !app.on_load_outcome(outcome) {
                    debug!("stale load outcome ignored");
                }
            }
            _ = shutdown_handle.wait() => app.request_quit(),
        }
    }

    // Stops the input thread and the signal listener.
    shutdown.signal();
    signals.abort();

    // Dropping the app aborts any load still in flight.
    drop(app);
    debug!("pending loads cancelled");

    drop(guard);
    info!("terminal restored");
    Ok(())
}
