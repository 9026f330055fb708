//! Lazy binding between a screen and its navigation host.
//!
//! A screen object is often constructed before the host UI element that
//! performs navigation exists, so the delegate starts *unconfigured* and is
//! bound later, at attach time. Using an unconfigured delegate is a wiring
//! bug, not a runtime condition: [`NavigationDelegate::navigate`] fails
//! immediately and loudly rather than silently dropping the request.

use std::fmt;

use crate::error::NavigationError;

/// The attachment target for a delegate: an ordered route stack.
///
/// This is the minimal contract a host must satisfy; the host's own graph
/// format stays on the host's side.
#[derive(Debug, Clone, Default)]
pub struct NavigationHost<R> {
    stack: Vec<R>,
}

impl<R: fmt::Debug> NavigationHost<R> {
    /// An empty host.
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Push a route onto the stack.
    pub fn push(&mut self, route: R) {
        self.stack.push(route);
    }

    /// Pop the top route, if any.
    pub fn pop(&mut self) -> Option<R> {
        self.stack.pop()
    }

    /// The route currently on top.
    pub fn current(&self) -> Option<&R> {
        self.stack.last()
    }

    /// Stack depth.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

/// Lazy binding between a screen and a [`NavigationHost`].
///
/// Two states: unconfigured and bound. Binding happens once, after
/// construction; navigation before binding is a fatal misconfiguration.
#[derive(Debug, Default)]
pub struct NavigationDelegate<R> {
    host: Option<NavigationHost<R>>,
}

impl<R: fmt::Debug> NavigationDelegate<R> {
    /// A delegate with no host bound yet.
    pub fn unconfigured() -> Self {
        Self { host: None }
    }

    /// A delegate already bound to `host`.
    pub fn bound(host: NavigationHost<R>) -> Self {
        Self { host: Some(host) }
    }

    /// Bind `host`, resolving the lazy attachment.
    pub fn bind(&mut self, host: NavigationHost<R>) {
        tracing::debug!("navigation host bound");
        self.host = Some(host);
    }

    /// True once a host is bound.
    pub fn is_bound(&self) -> bool {
        self.host.is_some()
    }

    /// The bound host, if any.
    pub fn host(&self) -> Option<&NavigationHost<R>> {
        self.host.as_ref()
    }

    /// Navigate to `route`.
    ///
    /// # Panics
    ///
    /// Panics when no host is bound. An unconfigured delegate at navigation
    /// time means the screen's wiring was never completed; failing loudly
    /// here beats a navigation request vanishing.
    pub fn navigate(&mut self, route: R) {
        match self.host.as_mut() {
            Some(host) => {
                tracing::debug!(route = ?route, "navigating");
                host.push(route);
            }
            None => panic!(
                "navigation delegate used before a host was bound; \
                 bind a NavigationHost during screen attach"
            ),
        }
    }

    /// Navigate to `route`, surfacing the unconfigured case as a typed
    /// error instead of panicking.
    pub fn try_navigate(&mut self, route: R) -> Result<(), NavigationError> {
        match self.host.as_mut() {
            Some(host) => {
                tracing::debug!(route = ?route, "navigating");
                host.push(route);
                Ok(())
            }
            None => Err(NavigationError::HostNotBound),
        }
    }
}
