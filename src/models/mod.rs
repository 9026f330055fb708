//! Model types consumed by the external list-rendering engine.
//!
//! The engine computes minimal insert/remove/move operations between two
//! ordered item sequences; everything it needs from us is the diff-identity
//! contract on [`DiffItem`] and the opaque row template each item carries.

mod console;

use serde::{Deserialize, Serialize};

pub use console::ConsoleLine;

/// Opaque reference to a row's render template.
///
/// Resolution is the host's concern; this crate only threads the handle
/// through to the rendering engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateRef(pub u32);

impl TemplateRef {
    /// Template for rows that never registered a specific one.
    pub const DEFAULT: TemplateRef = TemplateRef(0);
}

/// A domain value wrapped with diff identity for incremental list
/// rendering.
///
/// Items are created per rendered row and replaced wholesale whenever the
/// backing collection changes; the wrapped value is treated as immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffItem<V> {
    value: V,
    template: TemplateRef,
}

impl<V: PartialEq> DiffItem<V> {
    /// Wrap `value` with the default template.
    pub fn wrap(value: V) -> Self {
        Self::with_template(value, TemplateRef::DEFAULT)
    }

    /// Wrap `value` with a specific render template.
    pub fn with_template(value: V, template: TemplateRef) -> Self {
        Self { value, template }
    }

    /// The wrapped value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Unwrap into the value.
    pub fn into_value(self) -> V {
        self.value
    }

    /// This row's render template.
    pub fn template(&self) -> TemplateRef {
        self.template
    }

    /// Diff identity: two items are the same row iff their wrapped values
    /// are equal by value.
    pub fn diff_equals(&self, other: &Self) -> bool {
        self.value == other.value
    }
}
