//! Once-per-period recomputation of every countdown.
//!
//! [`CountdownTicker::start`] spawns a single interval task and hands back a
//! [`TickerHandle`]. The handle owns the timer: [`TickerHandle::stop`]
//! consumes it, and dropping an unstopped handle cancels the task too.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use tokio::runtime::Handle;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::models::CountdownSnapshot;
use super::service::{Clock, CountdownService};

pub const DEFAULT_TICK_INTERVAL: StdDuration = StdDuration::from_secs(1);

pub struct CountdownTicker;

impl CountdownTicker {
    /// Computes an initial snapshot right away, then one per `period`.
    ///
    /// `on_tick` runs on the runtime after each new snapshot is published.
    pub fn start<F>(
        runtime: &Handle,
        service: CountdownService,
        clock: Arc<dyn Clock>,
        period: StdDuration,
        on_tick: F,
    ) -> TickerHandle
    where
        F: Fn(&CountdownSnapshot) + Send + 'static,
    {
        let initial = Arc::new(service.snapshot_at(clock.now()));
        let (snapshot_tx, snapshot_rx) = watch::channel(initial);
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

        log::info!(
            "Starting countdown ticker for {} milestone(s) every {:?}",
            service.milestones().len(),
            period
        );

        let task = runtime.spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately; the initial snapshot already covers it.
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = &mut stop_rx => break,
                    _ = interval.tick() => {
                        let snapshot = Arc::new(service.snapshot_at(clock.now()));
                        log::debug!("Countdown tick at {}", snapshot.taken_at);
                        if snapshot_tx.send(Arc::clone(&snapshot)).is_err() {
                            break;
                        }
                        on_tick(&snapshot);
                    }
                }
            }

            log::debug!("Countdown ticker task finished");
        });

        TickerHandle {
            snapshot_rx,
            stop_tx: Some(stop_tx),
            task: Some(task),
        }
    }
}

/// Owned handle to a running ticker.
pub struct TickerHandle {
    snapshot_rx: watch::Receiver<Arc<CountdownSnapshot>>,
    stop_tx: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl TickerHandle {
    /// Most recently published snapshot.
    pub fn latest(&self) -> Arc<CountdownSnapshot> {
        Arc::clone(&*self.snapshot_rx.borrow())
    }

    /// Waits for the next snapshot. Returns `false` once the ticker is gone.
    pub async fn changed(&mut self) -> bool {
        self.snapshot_rx.changed().await.is_ok()
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stops the timer. The last snapshot stays readable until the handle is dropped.
    pub fn stop(mut self) -> Arc<CountdownSnapshot> {
        self.shutdown();
        log::info!("Countdown ticker stopped");
        self.latest()
    }

    fn shutdown(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            // The task may already be gone; nothing to signal then.
            let _ = stop_tx.send(());
        }
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        if self.stop_tx.is_some() {
            log::warn!("Countdown ticker dropped without stop(); cancelling timer");
            self.shutdown();
        }
    }
}
