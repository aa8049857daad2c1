//! The periodic refresh driver.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use thiserror::Error;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tokio::time;

use crate::sync::RouteTableSynchronizer;

/// Error type for scheduler lifecycle operations.
#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("scheduler is not running")]
    NotRunning,

    #[error("scheduler is already running")]
    AlreadyRunning,

    #[error("refresh interval must be greater than zero")]
    InvalidInterval,
}

enum State {
    Idle,
    Running {
        trigger_tx: mpsc::Sender<()>,
        shutdown_tx: broadcast::Sender<()>,
        task: JoinHandle<()>,
    },
}

/// Fires the synchronizer at a fixed interval, with an out-of-band
/// manual trigger.
pub struct RefreshScheduler {
    synchronizer: Arc<RouteTableSynchronizer>,
    state: Mutex<State>,
}

impl RefreshScheduler {
    pub fn new(synchronizer: Arc<RouteTableSynchronizer>) -> Self {
        Self {
            synchronizer,
            state: Mutex::new(State::Idle),
        }
    }

    /// Start firing `sync()` every `interval`.
    ///
    /// The first tick fires immediately. Rejects a zero interval and a
    /// scheduler that is already running.
    pub fn start(&self, interval: Duration) -> Result<(), SchedulerError> {
        if interval.is_zero() {
            return Err(SchedulerError::InvalidInterval);
        }

        let mut state = self.state.lock().expect("scheduler state poisoned");
        if matches!(*state, State::Running { .. }) {
            return Err(SchedulerError::AlreadyRunning);
        }

        // Capacity 1: a trigger requested while one is pending coalesces.
        let (trigger_tx, mut trigger_rx) = mpsc::channel(1);
        let (shutdown_tx, mut shutdown_rx) = broadcast::channel(1);
        let synchronizer = self.synchronizer.clone();

        let task = tokio::spawn(async move {
            let mut ticker = time::interval(interval);

            loop {
                tokio::select! {
                    biased;

                    _ = shutdown_rx.recv() => {
                        tracing::info!("Refresh scheduler stopping");
                        break;
                    }
                    _ = ticker.tick() => {
                        synchronizer.sync().await;
                    }
                    Some(()) = trigger_rx.recv() => {
                        tracing::info!("Manual route refresh triggered");
                        synchronizer.sync().await;
                    }
                }
            }
        });

        tracing::info!(interval_ms = interval.as_millis() as u64, "Refresh scheduler started");

        *state = State::Running {
            trigger_tx,
            shutdown_tx,
            task,
        };
        Ok(())
    }

    /// Stop the scheduler and wait for the ticker task to exit.
    ///
    /// An in-flight sync finishes cleanly; no further tick fires after
    /// this returns. Stopping an idle scheduler is a no-op.
    pub async fn stop(&self) {
        let previous = {
            let mut state = self.state.lock().expect("scheduler state poisoned");
            std::mem::replace(&mut *state, State::Idle)
        };

        if let State::Running {
            shutdown_tx, task, ..
        } = previous
        {
            let _ = shutdown_tx.send(());
            let _ = task.await;
        }
    }

    /// Request an immediate out-of-band sync.
    ///
    /// Does not reset or consume the next scheduled tick. Only valid
    /// while running.
    pub fn trigger_now(&self) -> Result<(), SchedulerError> {
        let state = self.state.lock().expect("scheduler state poisoned");
        match &*state {
            State::Running { trigger_tx, .. } => {
                let _ = trigger_tx.try_send(());
                Ok(())
            }
            State::Idle => Err(SchedulerError::NotRunning),
        }
    }

    /// Whether the scheduler currently has a ticker task.
    pub fn is_running(&self) -> bool {
        matches!(
            *self.state.lock().expect("scheduler state poisoned"),
            State::Running { .. }
        )
    }
}
