//! Shared test utilities for driving the data-fetch unit on virtual time.

#![allow(dead_code, unused_imports)]

use std::time::Duration;

use tokio::sync::mpsc;
use userview::profile::{LoadOutcome, OutcomeReceiver};
use userview::ui::profile::{UserData, UserDataOptions};

pub const DELAY: Duration = Duration::from_millis(500);

/// Creates a unit with a 500ms load delay. Call inside a paused runtime.
pub fn user_data(initial_id: u32) -> (UserData, OutcomeReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    let options = UserDataOptions {
        initial_id,
        load_delay: DELAY,
    };
    (UserData::new(options, tx), rx)
}

/// Lets spawned loads register their timers, then moves the clock.
pub async fn advance(by: Duration) {
    tokio::task::yield_now().await;
    tokio::time::advance(by).await;
    tokio::task::yield_now().await;
}

/// Waits for the next outcome and applies it, returning it for inspection.
pub async fn settle(data: &mut UserData, rx: &mut OutcomeReceiver) -> LoadOutcome {
    let outcome = rx.recv().await.expect("outcome channel closed");
    data.apply(outcome.clone());
    outcome
}

/// Applies every outcome already delivered, without waiting.
pub fn drain(data: &mut UserData, rx: &mut OutcomeReceiver) -> usize {
    let mut applied = 0;
    while let Ok(outcome) = rx.try_recv() {
        if data.apply(outcome) {
            applied += 1;
        }
    }
    applied
}
