//! Marshaling of background-computed states onto the owning thread.
//!
//! A [`StateHolder`] must only be mutated from the thread that owns it, so
//! long-running work cannot call `set_state` directly. Instead it sends the
//! computed state through a channel; the owning thread drains the channel
//! between events and applies each queued value as one synchronous
//! assignment (one notification each).

use tokio::sync::mpsc;

use super::StateHolder;

/// Create a channel pair for delivering states to a holder's owning thread.
pub fn state_channel<S>() -> (StateSender<S>, StateUpdates<S>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (StateSender { tx }, StateUpdates { rx })
}

/// Sending half, cloneable into background tasks.
#[derive(Debug)]
pub struct StateSender<S> {
    tx: mpsc::UnboundedSender<S>,
}

impl<S> StateSender<S> {
    /// Queue a state for the owning thread.
    ///
    /// Returns false if the receiving half was dropped.
    pub fn send(&self, state: S) -> bool {
        self.tx.send(state).is_ok()
    }
}

impl<S> Clone for StateSender<S> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

/// Receiving half, held next to the holder on the owning thread.
#[derive(Debug)]
pub struct StateUpdates<S> {
    rx: mpsc::UnboundedReceiver<S>,
}

impl<S: Clone + std::fmt::Debug> StateUpdates<S> {
    /// Drain every queued state into the holder.
    ///
    /// Each queued value is applied in arrival order as its own assignment,
    /// so observers see one notification per send. Returns the number of
    /// assignments applied.
    pub fn apply_to(&mut self, holder: &mut StateHolder<S>) -> usize {
        let mut applied = 0;
        while let Ok(next) = self.rx.try_recv() {
            holder.set_state(next);
            applied += 1;
        }
        applied
    }
}
