//! Cancellable repeating timer.
//!
//! A `Ticker` owns one tokio task that sends a [`Tick`] every period.
//! The task lives exactly as long as the guard: dropping the `Ticker`
//! aborts it, so no tick is produced after the owner lets go.

use std::time::Duration;

use chrono::{DateTime, Local};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::trace;

/// One firing of a producer.
#[derive(Debug, Clone)]
pub struct Tick {
    /// Which producer lifetime fired this tick.
    pub epoch: u64,
    /// Wall-clock time at the moment of firing.
    pub at: DateTime<Local>,
}

/// Guard for a running tick producer.
#[derive(Debug)]
pub struct Ticker {
    epoch: u64,
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawn a producer that fires every `period`, first one period from now.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(epoch: u64, period: Duration, tx: mpsc::UnboundedSender<Tick>) -> Self {
        // Anchor the schedule now, not when the task first gets polled.
        let first = Instant::now() + period;
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(first, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                trace!(epoch, "thought tick");
                if tx.send(Tick { epoch, at: Local::now() }).is_err() {
                    // Receiver gone: the view was torn down.
                    break;
                }
            }
        });
        Self { epoch, handle }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
