//! The compatibility view protocol and inset propagation.
//!
//! A screen participates in two contracts here:
//! - [`CompatView`]: exposes the screen's render surface, its bound
//!   [`StateHolder`](crate::state::StateHolder), and an optional navigation
//!   delegate
//! - [`InsetHandler`]: the two surface-event hooks ([`peek`] and
//!   [`consume`]) through which the host propagates inset geometry
//!
//! [`InsetDispatcher`] is the host-side driver: it walks an ordered chain of
//! handlers with a single propagating [`Insets`] value, letting nested
//! screens agree on which layer absorbs which edge without knowing about
//! their siblings.
//!
//! [`peek`]: InsetHandler::peek_system_insets
//! [`consume`]: InsetHandler::consume_system_insets

mod compat;
mod dispatch;
mod insets;

pub use compat::{CompatView, InsetHandler};
pub use dispatch::{DispatchCadence, InsetDispatcher};
pub use insets::Insets;
