use std::{sync::Arc, time::Duration};

use metroscope::sim::Simulator;
use tokio::{task::JoinHandle, time::MissedTickBehavior};
use tracing::debug;

use crate::state::AppState;

/// Map rendering polls every 3 seconds, so positions are recomputed on the
/// same cadence.
pub const FLEET_TICK_SECS: u64 = 3;

/// Recomputes the fleet on a fixed cadence and publishes into the shared
/// store. Ticks that fall behind are skipped rather than queued, and a
/// publish that loses the race against a newer tick is dropped by the store.
pub struct TickLoop {
    handle: JoinHandle<()>,
}

impl TickLoop {
    pub fn start(state: Arc<AppState>, period: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut tick: u64 = 0;
            loop {
                interval.tick().await;
                tick += 1;
                let snapshot = Simulator::new(&state.repository).snapshot(tick);
                debug!(
                    "Tick {} computed {} train positions",
                    tick,
                    snapshot.trains.len()
                );
                if !state.store.publish(snapshot) {
                    debug!("Tick {} lost the publish race, discarded", tick);
                }
            }
        });
        Self { handle }
    }

    pub fn stop(self) {
        self.handle.abort();
    }
}
