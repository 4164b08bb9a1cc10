//! Idle detection
//!
//! Two-state machine (Active / Idle) over a restartable timer. Activity
//! signals arrive from the environment (pointer movement, key presses,
//! clicks); a continuous quiet period of `IdleConfig::timeout` flips the
//! store's idle flag. Dropping the handle tears the task and its pending
//! timer down on any exit path.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, trace};

use crate::state::TourStore;

const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy)]
pub struct IdleConfig {
    /// Quiet period after which the session is considered idle.
    pub timeout: Duration,
}

impl Default for IdleConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_IDLE_TIMEOUT,
        }
    }
}

/// User input events; only their occurrence matters, never a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivitySignal {
    PointerMove,
    KeyPress,
    PointerClick,
}

/// Handle to a running detector. Dropping it shuts the detector down,
/// removing the activity sink and cancelling the pending timer.
pub struct IdleHandle {
    tx: mpsc::UnboundedSender<ActivitySignal>,
    task: JoinHandle<()>,
}

impl IdleHandle {
    /// Report an activity signal. Signals after shutdown are dropped
    /// silently.
    pub fn activity(&self, signal: ActivitySignal) {
        let _ = self.tx.send(signal);
    }
}

impl Drop for IdleHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

pub struct IdleDetector;

impl IdleDetector {
    /// Start the detector. The session begins Active, with the timer running
    /// as if a signal had just occurred.
    pub fn spawn(store: Arc<TourStore>, config: IdleConfig) -> IdleHandle {
        let (tx, mut rx) = mpsc::unbounded_channel();

        let task = tokio::spawn(async move {
            store.set_idle(false);
            let mut deadline = Instant::now() + config.timeout;

            loop {
                tokio::select! {
                    _ = sleep_until(deadline) => {
                        debug!("No activity for {:?}, session is idle", config.timeout);
                        store.set_idle(true);
                        // Stay idle until the next signal arrives.
                        match rx.recv().await {
                            Some(signal) => {
                                trace!("Activity ({:?}) ends idle state", signal);
                                store.set_idle(false);
                                deadline = Instant::now() + config.timeout;
                            }
                            None => break,
                        }
                    }
                    signal = rx.recv() => match signal {
                        Some(signal) => {
                            trace!("Activity: {:?}", signal);
                            // Redundant writes are fine, the store is cheap
                            // and idempotent here.
                            store.set_idle(false);
                            deadline = Instant::now() + config.timeout;
                        }
                        None => break,
                    },
                }
            }
        });

        IdleHandle { tx, task }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time;

    async fn settle() {
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_after_timeout() {
        let store = Arc::new(TourStore::new());
        let _handle = IdleDetector::spawn(store.clone(), IdleConfig::default());
        settle().await;
        assert!(!store.snapshot().idle);

        time::advance(Duration::from_millis(5000)).await;
        settle().await;
        assert!(store.snapshot().idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_activity_resets_deadline() {
        let store = Arc::new(TourStore::new());
        let handle = IdleDetector::spawn(store.clone(), IdleConfig::default());
        settle().await;

        time::advance(Duration::from_millis(3000)).await;
        handle.activity(ActivitySignal::PointerMove);
        settle().await;
        assert!(!store.snapshot().idle);

        // The original deadline would have fired here; the reset one has not.
        time::advance(Duration::from_millis(4999)).await;
        settle().await;
        assert!(!store.snapshot().idle);

        time::advance(Duration::from_millis(1)).await;
        settle().await;
        assert!(store.snapshot().idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_activity_ends_idle_state() {
        let store = Arc::new(TourStore::new());
        let handle = IdleDetector::spawn(store.clone(), IdleConfig::default());
        settle().await;

        time::advance(Duration::from_millis(5000)).await;
        settle().await;
        assert!(store.snapshot().idle);

        handle.activity(ActivitySignal::KeyPress);
        settle().await;
        assert!(!store.snapshot().idle);

        // And the timer restarts after recovery.
        time::advance(Duration::from_millis(5000)).await;
        settle().await;
        assert!(store.snapshot().idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_timeout() {
        let store = Arc::new(TourStore::new());
        let _handle = IdleDetector::spawn(
            store.clone(),
            IdleConfig {
                timeout: Duration::from_millis(100),
            },
        );
        settle().await;

        time::advance(Duration::from_millis(100)).await;
        settle().await;
        assert!(store.snapshot().idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_detector() {
        let store = Arc::new(TourStore::new());
        let handle = IdleDetector::spawn(store.clone(), IdleConfig::default());
        settle().await;
        drop(handle);
        settle().await;

        time::advance(Duration::from_millis(10_000)).await;
        settle().await;
        assert!(!store.snapshot().idle);
    }
}
