//! The closed loading-state set used by the shipped screens.

use serde::{Deserialize, Serialize};

/// Screen loading lifecycle.
///
/// A closed set of named states; holders carrying it start in [`Idle`]
/// unless constructed with a different default.
///
/// [`Idle`]: LoadingState::Idle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadingState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// Work in flight
    Loading,
    /// Work finished successfully
    Loaded,
    /// Work finished with an error
    Failed,
}

impl LoadingState {
    /// True while work is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    /// True once work has finished, successfully or not.
    pub fn is_settled(&self) -> bool {
        matches!(self, LoadingState::Loaded | LoadingState::Failed)
    }
}
