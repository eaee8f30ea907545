use std::time::Duration;

use common::logger::{TraceId, child_span, root_span};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{Instrument, debug, info, warn};

use crate::error::MarketError;
use crate::feed::{FeedSimulator, Jitter};
use crate::store::AssetStore;

/// Owner of a running feed task.
///
/// [`stop`](Self::stop) shuts the loop down and waits for it. Dropping the
/// handle aborts the task, so no tick can fire once the owner is gone.
pub struct FeedHandle {
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<u64>>,
}

impl FeedHandle {
    /// Stop scheduling ticks and wait for the loop to exit.
    ///
    /// Returns the number of ticks that were published.
    pub async fn stop(mut self) -> Result<u64, MarketError> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }

        match self.task.take() {
            Some(task) => Ok(task.await?),
            None => Ok(0),
        }
    }
}

impl Drop for FeedHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("feed task aborted on handle drop");
        }
    }
}

impl<J: Jitter> FeedSimulator<J> {
    /// Move the simulator onto a tokio task that ticks every
    /// `config.interval` and publishes into `store`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(self, store: AssetStore) -> FeedHandle {
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let span = root_span("feed_simulator", &TraceId::default());

        let task = tokio::spawn(self.run(store, shutdown_rx).instrument(span));

        FeedHandle {
            shutdown: Some(shutdown_tx),
            task: Some(task),
        }
    }

    async fn run(mut self, store: AssetStore, mut shutdown: oneshot::Receiver<()>) -> u64 {
        // tokio panics on a zero period
        let period = self.config().interval.max(Duration::from_millis(1));

        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            every_ms = period.as_millis() as u64,
            assets = store.len(),
            "feed simulator started"
        );

        if store.is_empty() {
            warn!("feed started on an empty store; ticks will publish nothing");
        }

        let mut ticks: u64 = 0;

        loop {
            tokio::select! {
                biased;

                // Either an explicit stop or the handle's sender being dropped.
                _ = &mut shutdown => break,

                _ = ticker.tick() => {
                    ticks += 1;

                    let span = child_span("feed_tick");
                    span.record("tick", ticks);
                    span.in_scope(|| self.tick(&store));
                }
            }
        }

        info!(ticks, "feed simulator stopped");
        ticks
    }
}
