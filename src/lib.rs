//! Viewbind - observable screen-state binding for terminal UIs
//!
//! This library is the binding layer between an application's state machines
//! and the screens that render them. It provides:
//! - [`state::StateHolder`] - a container for one value from a closed state
//!   set, notifying observers on every assignment
//! - [`view::CompatView`] - the capability contract a screen implements to
//!   expose its render surface, bound state, and navigation delegate
//! - [`view::InsetDispatcher`] - chain-of-responsibility propagation of
//!   surface insets across an ordered set of screens
//! - [`models::DiffItem`] - diff-identity wrappers for incremental list
//!   rendering
//!
//! Rendering itself is out of scope: the host owns the terminal and draws
//! from whatever state the screens expose.

pub mod config;
pub mod error;
pub mod models;
pub mod navigation;
pub mod prelude;
pub mod screen;
pub mod state;
pub mod view;
