//! Console output rows.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::TemplateRef;

/// One line of console output, value-equal by content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConsoleLine(String);

impl ConsoleLine {
    /// Row template for console output.
    pub const TEMPLATE: TemplateRef = TemplateRef(1);

    /// A line with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The line's text.
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConsoleLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConsoleLine {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for ConsoleLine {
    fn from(text: String) -> Self {
        Self(text)
    }
}
