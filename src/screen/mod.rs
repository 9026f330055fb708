//! Screen composition.
//!
//! A screen is a composition of {render surface, state holder, navigation
//! delegate} implementing the compat view capability set directly - there is
//! no base-class layering to inherit through. Hosts construct screens with
//! their dependencies as explicit arguments, resolved once at construction
//! time.

pub mod console;

use std::fmt;

use crate::error::NavigationError;
use crate::navigation::{NavigationDelegate, NavigationHost};
use crate::state::StateHolder;
use crate::view::{CompatView, InsetHandler};

/// A screen assembled from its three capabilities.
///
/// `St` is the closed state set, `Su` the opaque render surface, `R` the
/// route type of the navigation host. The inset hooks keep their
/// pass-through defaults; screens with real inset behavior wrap a `Screen`
/// and override the hooks on the wrapper (see [`console`]).
#[derive(Debug)]
pub struct Screen<St, Su, R> {
    surface: Su,
    state: StateHolder<St>,
    navigation: NavigationDelegate<R>,
}

impl<St: Clone + fmt::Debug, Su, R: fmt::Debug> Screen<St, Su, R> {
    /// A screen with an unconfigured navigation delegate.
    pub fn new(surface: Su, state: StateHolder<St>) -> Self {
        Self {
            surface,
            state,
            navigation: NavigationDelegate::unconfigured(),
        }
    }

    /// A screen with its delegate supplied by the caller.
    pub fn with_navigation(
        surface: Su,
        state: StateHolder<St>,
        navigation: NavigationDelegate<R>,
    ) -> Self {
        Self {
            surface,
            state,
            navigation,
        }
    }

    /// Bind the navigation host, completing the screen's wiring.
    pub fn bind_navigation(&mut self, host: NavigationHost<R>) {
        self.navigation.bind(host);
    }

    /// The render surface.
    pub fn surface(&self) -> &Su {
        &self.surface
    }

    /// The bound state holder.
    pub fn state(&self) -> &StateHolder<St> {
        &self.state
    }

    /// Mutable access to the bound state holder.
    pub fn state_mut(&mut self) -> &mut StateHolder<St> {
        &mut self.state
    }

    /// The navigation delegate.
    pub fn navigation_delegate(&self) -> &NavigationDelegate<R> {
        &self.navigation
    }

    /// Mutable access to the navigation delegate.
    pub fn navigation_delegate_mut(&mut self) -> &mut NavigationDelegate<R> {
        &mut self.navigation
    }

    /// Navigate through the delegate. Fatal when the delegate is still
    /// unconfigured.
    pub fn navigate(&mut self, route: R) {
        self.navigation.navigate(route);
    }

    /// Navigate through the delegate, surfacing missing wiring as an error.
    pub fn try_navigate(&mut self, route: R) -> Result<(), NavigationError> {
        self.navigation.try_navigate(route)
    }
}

impl<St, Su, R> InsetHandler for Screen<St, Su, R> {}

impl<St: Clone + fmt::Debug, Su, R: fmt::Debug> CompatView for Screen<St, Su, R> {
    type State = St;
    type Surface = Su;
    type Route = R;

    fn render_surface(&self) -> &Su {
        &self.surface
    }

    fn bound_state(&self) -> &StateHolder<St> {
        &self.state
    }

    fn bound_state_mut(&mut self) -> &mut StateHolder<St> {
        &mut self.state
    }

    fn navigation(&self) -> Option<&NavigationDelegate<R>> {
        Some(&self.navigation)
    }
}
