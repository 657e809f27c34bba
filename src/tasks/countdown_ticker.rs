//! Countdown ticker background task

use std::{sync::Arc, time::Duration};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::state::AppState;

/// One tick is one counted second
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Background task that advances the countdown once per second.
///
/// Ticks are issued one at a time from this task only. A late tick delays the
/// following ones instead of firing a burst, so a stalled runtime never counts
/// seconds twice.
pub async fn countdown_ticker_task(state: Arc<AppState>) {
    info!("Starting countdown ticker task");

    let mut interval = interval(TICK_INTERVAL);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately
    interval.tick().await;

    loop {
        interval.tick().await;

        match state.tick() {
            Ok(Some(snapshot)) => {
                debug!("Tick: {} remaining ({:.0}%)", snapshot.clock_text, snapshot.progress * 100.0);
            }
            Ok(None) => {}
            Err(e) => {
                error!("Failed to tick timer: {}", e);
            }
        }
    }
}
