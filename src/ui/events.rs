use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::shutdown::ShutdownHandle;

/// Upper bound on one input poll so the shutdown flag is seen promptly.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Tick,
    Resize(u16, u16),
}

/// Reads terminal input on a dedicated thread and forwards it to the UI task.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        thread::Builder::new()
            .name("input".to_string())
            .spawn(move || input_loop(tick_rate, shutdown, tx))
            .map_err(|err| error!(%err, "failed to spawn input thread"))
            .ok();

        Self { rx }
    }

    /// Next event, or `None` once the input thread has stopped.
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}

fn input_loop(
    tick_rate: Duration,
    shutdown: ShutdownHandle,
    tx: mpsc::UnboundedSender<AppEvent>,
) {
    let mut last_tick = Instant::now();
    loop {
        if shutdown.is_shutting_down() {
            break;
        }

        let timeout = tick_rate
            .saturating_sub(last_tick.elapsed())
            .min(POLL_INTERVAL);

        let forwarded = match event::poll(timeout) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                Ok(Event::Paste(text)) => Some(AppEvent::Paste(text)),
                Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
                Ok(_) => None,
                Err(err) => {
                    error!(%err, "terminal read failed");
                    break;
                }
            },
            Ok(false) => None,
            Err(err) => {
                error!(%err, "terminal poll failed");
                break;
            }
        };

        if let Some(event) = forwarded {
            if tx.send(event).is_err() {
                break;
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                break;
            }
            last_tick = Instant::now();
        }
    }
    debug!("input thread stopped");
}
