//! Host-side inset propagation over an ordered handler chain.

use serde::{Deserialize, Serialize};

use crate::config::BindConfig;

use super::{InsetHandler, Insets};

/// How often inset events are delivered to the chain.
///
/// Hosts differ on whether they redeliver insets on every surface event or
/// only once per screen attach, so the cadence is configuration rather than
/// an assumption baked into the dispatcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchCadence {
    /// Deliver on every dispatch call.
    #[default]
    EveryEvent,
    /// Deliver only on the first dispatch after an attach.
    OncePerAttach,
}

/// Walks an ordered chain of [`InsetHandler`]s with a single propagating
/// inset value.
///
/// Propagation is synchronous and depth-first in chain order. Each
/// participant is peeked with the value as delivered to it, then given the
/// chance to consume: a `Some(remaining)` replaces the propagating value,
/// `None` leaves it untouched. Consumption never stops the walk; downstream
/// participants always run.
#[derive(Debug)]
pub struct InsetDispatcher {
    cadence: DispatchCadence,
    delivered_since_attach: bool,
}

impl InsetDispatcher {
    /// Dispatcher with the given cadence.
    pub fn new(cadence: DispatchCadence) -> Self {
        Self {
            cadence,
            delivered_since_attach: false,
        }
    }

    /// Dispatcher configured from [`BindConfig`].
    pub fn from_config(config: &BindConfig) -> Self {
        Self::new(config.inset_cadence)
    }

    /// The configured cadence.
    pub fn cadence(&self) -> DispatchCadence {
        self.cadence
    }

    /// Record a screen attach, re-arming delivery under
    /// [`DispatchCadence::OncePerAttach`].
    pub fn notify_attached(&mut self) {
        self.delivered_since_attach = false;
    }

    /// Propagate `insets` through `chain`, returning the final remaining
    /// value for the host.
    ///
    /// Under [`DispatchCadence::OncePerAttach`], calls after the first since
    /// the last [`notify_attached`](Self::notify_attached) skip every hook
    /// and return the input untouched.
    pub fn dispatch(&mut self, insets: Insets, chain: &mut [&mut dyn InsetHandler]) -> Insets {
        if self.cadence == DispatchCadence::OncePerAttach && self.delivered_since_attach {
            return insets;
        }
        self.delivered_since_attach = true;

        let mut remaining = insets;
        for handler in chain.iter_mut() {
            handler.peek_system_insets(&remaining);
            if let Some(rest) = handler.consume_system_insets(&remaining) {
                tracing::trace!(before = ?remaining, after = ?rest, "inset consumed");
                remaining = rest;
            }
        }
        remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every peeked value; absorbs a fixed top amount when asked to.
    struct Recorder {
        peeked: Rc<RefCell<Vec<Insets>>>,
        absorb_top: bool,
    }

    impl Recorder {
        fn new(peeked: Rc<RefCell<Vec<Insets>>>, absorb_top: bool) -> Self {
            Self { peeked, absorb_top }
        }
    }

    impl InsetHandler for Recorder {
        fn peek_system_insets(&mut self, insets: &Insets) {
            self.peeked.borrow_mut().push(*insets);
        }

        fn consume_system_insets(&mut self, insets: &Insets) -> Option<Insets> {
            if self.absorb_top && insets.top > 0 {
                Some(insets.without_top())
            } else {
                None
            }
        }
    }

    #[test]
    fn test_dispatch_over_empty_chain_returns_input() {
        let mut dispatcher = InsetDispatcher::new(DispatchCadence::EveryEvent);
        let insets = Insets::new(0, 2, 0, 1);
        assert_eq!(dispatcher.dispatch(insets, &mut []), insets);
    }

    #[test]
    fn test_non_consuming_chain_passes_value_through() {
        let peeked = Rc::new(RefCell::new(Vec::new()));
        let mut a = Recorder::new(Rc::clone(&peeked), false);
        let mut b = Recorder::new(Rc::clone(&peeked), false);
        let mut dispatcher = InsetDispatcher::new(DispatchCadence::EveryEvent);

        let insets = Insets::new(1, 2, 3, 4);
        let remaining = dispatcher.dispatch(insets, &mut [&mut a, &mut b]);

        assert_eq!(remaining, insets);
        // Both participants saw the unmodified value.
        assert_eq!(peeked.borrow().as_slice(), &[insets, insets]);
    }

    #[test]
    fn test_consumed_edge_propagates_to_downstream_participants() {
        let peeked = Rc::new(RefCell::new(Vec::new()));
        let mut bar = Recorder::new(Rc::clone(&peeked), true);
        let mut content = Recorder::new(Rc::clone(&peeked), false);
        let mut dispatcher = InsetDispatcher::new(DispatchCadence::EveryEvent);

        let insets = Insets::new(0, 3, 0, 1);
        let remaining = dispatcher.dispatch(insets, &mut [&mut bar, &mut content]);

        // The bar absorbed the top; the rest of the chain saw the remainder.
        assert_eq!(remaining, Insets::new(0, 0, 0, 1));
        assert_eq!(
            peeked.borrow().as_slice(),
            &[insets, Insets::new(0, 0, 0, 1)]
        );
    }

    #[test]
    fn test_consumption_never_stops_the_walk() {
        let peeked = Rc::new(RefCell::new(Vec::new()));
        let mut first = Recorder::new(Rc::clone(&peeked), true);
        let mut second = Recorder::new(Rc::clone(&peeked), true);
        let mut third = Recorder::new(Rc::clone(&peeked), false);
        let mut dispatcher = InsetDispatcher::new(DispatchCadence::EveryEvent);

        dispatcher.dispatch(
            Insets::new(0, 2, 0, 0),
            &mut [&mut first, &mut second, &mut third],
        );

        // All three participants ran even though the first consumed.
        assert_eq!(peeked.borrow().len(), 3);
    }

    #[test]
    fn test_every_event_cadence_redelivers() {
        let peeked = Rc::new(RefCell::new(Vec::new()));
        let mut view = Recorder::new(Rc::clone(&peeked), false);
        let mut dispatcher = InsetDispatcher::new(DispatchCadence::EveryEvent);

        let insets = Insets::uniform(1);
        dispatcher.dispatch(insets, &mut [&mut view]);
        dispatcher.dispatch(insets, &mut [&mut view]);

        assert_eq!(peeked.borrow().len(), 2);
    }

    #[test]
    fn test_once_per_attach_delivers_only_first_dispatch() {
        let peeked = Rc::new(RefCell::new(Vec::new()));
        let mut view = Recorder::new(Rc::clone(&peeked), true);
        let mut dispatcher = InsetDispatcher::new(DispatchCadence::OncePerAttach);
        dispatcher.notify_attached();

        let insets = Insets::new(0, 2, 0, 0);
        let first = dispatcher.dispatch(insets, &mut [&mut view]);
        let second = dispatcher.dispatch(insets, &mut [&mut view]);

        assert_eq!(first, Insets::ZERO);
        // Second dispatch skipped the hooks and returned the input untouched.
        assert_eq!(second, insets);
        assert_eq!(peeked.borrow().len(), 1);
    }

    #[test]
    fn test_once_per_attach_rearms_on_attach() {
        let peeked = Rc::new(RefCell::new(Vec::new()));
        let mut view = Recorder::new(Rc::clone(&peeked), false);
        let mut dispatcher = InsetDispatcher::new(DispatchCadence::OncePerAttach);

        let insets = Insets::uniform(1);
        dispatcher.dispatch(insets, &mut [&mut view]);
        dispatcher.dispatch(insets, &mut [&mut view]);
        dispatcher.notify_attached();
        dispatcher.dispatch(insets, &mut [&mut view]);

        assert_eq!(peeked.borrow().len(), 2);
    }

    #[test]
    fn test_cadence_default_is_every_event() {
        assert_eq!(DispatchCadence::default(), DispatchCadence::EveryEvent);
    }

    #[test]
    fn test_cadence_serde_round_trip() {
        let json = serde_json::to_string(&DispatchCadence::OncePerAttach).unwrap();
        assert_eq!(json, "\"once_per_attach\"");
        let back: DispatchCadence = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DispatchCadence::OncePerAttach);
    }
}
