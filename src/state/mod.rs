//! Observable state containers.
//!
//! This module contains the core [`StateHolder`] container plus:
//! - [`LoadingState`]: the closed state set used by the shipped screens
//! - [`channel`]: marshaling of background-computed states onto the owning
//!   thread
//!
//! A holder owns exactly one value from a closed set of named states and
//! notifies its observers on **every** assignment, including assignments of
//! the value already held. Repeat assignments are meaningful state-machine
//! transitions; deduplicating them here would hide transitions from
//! observers, so the holder never compares values.

pub mod channel;
mod loading;

use std::fmt;

pub use channel::{state_channel, StateSender, StateUpdates};
pub use loading::LoadingState;

/// Observer callback invoked with the freshly assigned state.
type Observer<S> = Box<dyn FnMut(&S)>;

/// Container for a single value drawn from a closed state set.
///
/// One holder belongs to exactly one screen; holders are never shared.
/// All mutation must happen on the owning (UI) thread: there is no internal
/// locking, and the notification pass runs synchronously on the caller's
/// stack. Background work delivers results through [`channel`] instead of
/// touching the holder directly.
///
/// Observers receive the assigned value, not the holder, so an observer
/// cannot re-enter `set_state` on the same holder while a notification is
/// in flight.
pub struct StateHolder<S> {
    state: S,
    default_state: S,
    observers: Vec<Observer<S>>,
}

impl<S: Clone + fmt::Debug> StateHolder<S> {
    /// Create a holder resting in `default_state`.
    ///
    /// No notification fires for the initial value; observers only hear
    /// about explicit assignments.
    pub fn new(default_state: S) -> Self {
        Self {
            state: default_state.clone(),
            default_state,
            observers: Vec::new(),
        }
    }

    /// Current state. No side effects.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The default this holder was constructed with.
    pub fn default_state(&self) -> &S {
        &self.default_state
    }

    /// Assign `next` unconditionally, then notify observers exactly once.
    ///
    /// Fires even when `next` equals the current value.
    pub fn set_state(&mut self, next: S) {
        tracing::trace!(state = ?next, "state assigned");
        self.state = next;
        self.notify_state_changed();
    }

    /// Assign the configured default through [`set_state`](Self::set_state).
    ///
    /// Like any assignment, this notifies.
    pub fn reset(&mut self) {
        let default = self.default_state.clone();
        self.set_state(default);
    }

    /// Register an observer, called after every assignment in registration
    /// order.
    pub fn observe(&mut self, observer: impl FnMut(&S) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify_state_changed(&mut self) {
        for observer in self.observers.iter_mut() {
            observer(&self.state);
        }
    }
}

impl<S: Clone + fmt::Debug + Default> Default for StateHolder<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: fmt::Debug> fmt::Debug for StateHolder<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateHolder")
            .field("state", &self.state)
            .field("default_state", &self.default_state)
            .field("observers", &self.observers.len())
            .finish()
    }
}
