//! Error types for the binding layer.
//!
//! Two things here are deliberately *not* errors:
//! - a consume hook returning "not consumed" is the normal propagation
//!   outcome and is never logged or surfaced
//! - assigning the same state value twice is a valid transition and still
//!   notifies
//!
//! What *is* an error: incomplete screen wiring (navigating through an
//! unbound delegate) and malformed configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Navigation wiring errors.
#[derive(Debug, Error)]
pub enum NavigationError {
    /// A navigation operation ran before a host was bound to the delegate.
    #[error("navigation host not bound; bind a NavigationHost before navigating")]
    HostNotBound,
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that was attempted
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The config contents did not parse.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Unified error type for the crate.
#[derive(Debug, Error)]
pub enum BindError {
    /// Navigation wiring error
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result alias used across the crate.
pub type BindResult<T> = Result<T, BindError>;
