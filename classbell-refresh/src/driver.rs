use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use classbell_core::ClassbellConfig;
use classbell_schedule::{DisplayMessage, Locale, ScheduleTable};
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::error::RefreshError;
use crate::source::{SystemClock, TimeSource};
use crate::state::DisplayState;

/// Re-resolves the schedule on a fixed cadence.
pub struct RefreshDriver {
    source: Arc<dyn TimeSource>,
    table: ScheduleTable,
    locale: Locale,
    interval: Duration,
}

impl RefreshDriver {
    pub fn new(
        source: Arc<dyn TimeSource>,
        locale: Locale,
        interval: Duration,
    ) -> Result<Self, RefreshError> {
        if interval.is_zero() {
            return Err(RefreshError::ZeroInterval);
        }
        Ok(Self {
            source,
            table: ScheduleTable::standard(),
            locale,
            interval,
        })
    }

    /// Driver reading the host clock with the configured locale, offset and
    /// cadence.
    pub fn from_config(config: &ClassbellConfig) -> Result<Self, RefreshError> {
        Self::new(
            Arc::new(SystemClock::from_config(config)),
            config.locale,
            config.refresh_interval,
        )
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// One synchronous resolve-and-format pass.
    pub fn evaluate(&self, tick: u64) -> DisplayState {
        let time = self.source.now();
        let state = self.table.resolve(time);
        let message = DisplayMessage::compose_with(&self.table, time, state, self.locale);
        DisplayState {
            time,
            state,
            message,
            tick,
            evaluated_at: Utc::now(),
        }
    }

    /// Publishes an evaluation immediately, then one per interval on a tokio
    /// task. Must be called from within a tokio runtime.
    ///
    /// The returned handle owns the timer: dropping it cancels the task.
    pub fn start(self) -> RefreshHandle {
        let initial = self.evaluate(0);
        info!(
            state = initial.state.kind(),
            interval_secs = self.interval.as_secs_f64(),
            locale = %self.locale,
            "refresh driver started"
        );

        let (publisher, receiver) = watch::channel(initial);
        let (stop_tx, stop_rx) = oneshot::channel();
        let task = tokio::spawn(refresh_loop(self, publisher, stop_rx));

        RefreshHandle {
            receiver,
            stop: Some(stop_tx),
            task: Some(task),
        }
    }
}

async fn refresh_loop(
    driver: RefreshDriver,
    publisher: watch::Sender<DisplayState>,
    mut stop: oneshot::Receiver<()>,
) {
    let period = driver.interval;
    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut tick = 0u64;

    loop {
        tokio::select! {
            _ = &mut stop => {
                debug!(tick, "refresh driver stopping");
                break;
            }
            _ = ticker.tick() => {
                tick += 1;
                let next = driver.evaluate(tick);
                let previous = publisher.borrow().state;
                if previous != next.state {
                    info!(from = previous.kind(), to = next.state.kind(), time = %next.time, "schedule state changed");
                } else {
                    debug!(tick, state = next.state.kind(), "refresh tick");
                }
                if publisher.send(next).is_err() {
                    debug!(tick, "no readers left, refresh driver exiting");
                    break;
                }
            }
        }
    }
}

/// Owner of a running refresh task.
pub struct RefreshHandle {
    receiver: watch::Receiver<DisplayState>,
    stop: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl RefreshHandle {
    /// Latest published state.
    pub fn current(&self) -> DisplayState {
        self.receiver.borrow().clone()
    }

    /// Reader that is notified on every publish. Reports an error from
    /// `changed()` once the driver is gone.
    pub fn subscribe(&self) -> watch::Receiver<DisplayState> {
        self.receiver.clone()
    }

    pub fn is_running(&self) -> bool {
        self.task
            .as_ref()
            .map(|task| !task.is_finished())
            .unwrap_or(false)
    }

    /// Stops the timer and waits for the task to finish.
    pub async fn stop(mut self) -> Result<(), RefreshError> {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(task) = self.task.take() {
            task.await
                .map_err(|err| RefreshError::TaskFailed(err.to_string()))?;
        }
        info!("refresh driver stopped");
        Ok(())
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
