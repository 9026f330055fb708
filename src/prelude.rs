//! Prelude module for convenient imports.
//!
//! # Usage
//!
//! ```ignore
//! use viewbind::prelude::*;
//! ```

// State containers
pub use crate::state::{state_channel, LoadingState, StateHolder, StateSender, StateUpdates};

// View protocol
pub use crate::view::{CompatView, DispatchCadence, InsetDispatcher, InsetHandler, Insets};

// Screens
pub use crate::screen::console::{ConsolePane, ConsoleRoute, StatusBar};
pub use crate::screen::Screen;

// Navigation
pub use crate::navigation::{NavigationDelegate, NavigationHost};

// List models
pub use crate::models::{ConsoleLine, DiffItem, TemplateRef};

// Configuration and errors
pub use crate::config::BindConfig;
pub use crate::error::{BindError, BindResult, ConfigError, NavigationError};
