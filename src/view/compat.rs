//! The capability contracts a screen implements.

use std::fmt;

use crate::navigation::NavigationDelegate;
use crate::state::StateHolder;

use super::Insets;

/// Surface-event hooks for inset propagation.
///
/// Object-safe on purpose: the dispatcher walks a heterogeneous chain of
/// `&mut dyn InsetHandler`. Both hooks have pass-through defaults so a
/// screen only overrides what it needs.
pub trait InsetHandler {
    /// Observation hook, called with the inset value as delivered to this
    /// participant.
    ///
    /// May update the screen's internal padding bookkeeping, but must not
    /// mutate the screen's bound state. The input is shared, so the insets
    /// themselves cannot be altered from here.
    fn peek_system_insets(&mut self, _insets: &Insets) {}

    /// Claim/transform hook.
    ///
    /// Returning `Some(remaining)` replaces the propagating inset value for
    /// the rest of the chain with the part this screen did not absorb.
    /// Returning `None` means "untouched, pass through unchanged" - the
    /// normal outcome, not a failure.
    fn consume_system_insets(&mut self, _insets: &Insets) -> Option<Insets> {
        None
    }
}

/// The capability set a screen exposes to the host.
///
/// A compat view is a live association between a render surface, a bound
/// [`StateHolder`], and an optional [`NavigationDelegate`]; it exists for
/// exactly as long as its screen does. The surface is opaque to this crate -
/// the host renderer knows what to do with it.
pub trait CompatView: InsetHandler {
    /// The closed state set this screen's holder carries.
    type State: Clone + fmt::Debug;
    /// Opaque handle to the host renderer.
    type Surface;
    /// Route values understood by the navigation host.
    type Route: fmt::Debug;

    /// The screen's root visual surface.
    fn render_surface(&self) -> &Self::Surface;

    /// The state holder bound to this screen.
    fn bound_state(&self) -> &StateHolder<Self::State>;

    /// Mutable access to the bound state holder.
    fn bound_state_mut(&mut self) -> &mut StateHolder<Self::State>;

    /// The screen's navigation delegate, if it has one.
    fn navigation(&self) -> Option<&NavigationDelegate<Self::Route>> {
        None
    }
}
