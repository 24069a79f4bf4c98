//! One-shot slide transition signal.
//!
//! The view layer animates a slide and reports back when the animation ends.
//! The waiting side never hangs on a stalled animation: `settle` gives up after
//! a timeout and the slide is treated as done.

use std::time::Duration;

use serde::Serialize;
use tokio::sync::oneshot;
use uuid::Uuid;

/// How a pending transition ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionOutcome {
    /// The view layer reported the end of the animation.
    Completed,
    /// No completion arrived within the timeout.
    TimedOut,
    /// The signal was dropped without firing (session discarded).
    Abandoned,
}

/// Completion side, fired by whoever observes the end of the animation.
#[derive(Debug)]
pub struct TransitionSignal {
    id: Uuid,
    tx: oneshot::Sender<()>,
}

impl TransitionSignal {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn complete(self) {
        // The waiter may already have timed out; nothing to do then.
        let _ = self.tx.send(());
    }
}

/// Waiting side of a transition.
#[derive(Debug)]
pub struct PendingTransition {
    id: Uuid,
    rx: oneshot::Receiver<()>,
}

impl PendingTransition {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Suspends until the signal fires, is dropped, or `timeout` elapses.
    pub async fn settle(self, timeout: Duration) -> TransitionOutcome {
        match tokio::time::timeout(timeout, self.rx).await {
            Ok(Ok(())) => TransitionOutcome::Completed,
            Ok(Err(_)) => TransitionOutcome::Abandoned,
            Err(_) => TransitionOutcome::TimedOut,
        }
    }
}

/// Creates a linked signal/waiter pair for the transition `id`.
pub fn transition(id: Uuid) -> (TransitionSignal, PendingTransition) {
    let (tx, rx) = oneshot::channel();
    (TransitionSignal { id, tx }, PendingTransition { id, rx })
}
