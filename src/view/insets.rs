//! Inset geometry reserved by host chrome.

use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};

/// Margins reserved by system chrome (status line, host panels) that a
/// surface may observe or partially absorb.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insets {
    /// Columns reserved on the left edge
    pub left: u16,
    /// Rows reserved on the top edge
    pub top: u16,
    /// Columns reserved on the right edge
    pub right: u16,
    /// Rows reserved on the bottom edge
    pub bottom: u16,
}

impl Insets {
    /// No reserved space.
    pub const ZERO: Insets = Insets {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    /// Insets with the given edges.
    pub fn new(left: u16, top: u16, right: u16, bottom: u16) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The same reservation on every edge.
    pub fn uniform(value: u16) -> Self {
        Self::new(value, value, value, value)
    }

    /// True when no edge is reserved.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// The remaining insets after the top edge has been absorbed.
    pub fn without_top(self) -> Self {
        Self { top: 0, ..self }
    }

    /// The remaining insets after the bottom edge has been absorbed.
    pub fn without_bottom(self) -> Self {
        Self { bottom: 0, ..self }
    }

    /// The remaining insets after the left edge has been absorbed.
    pub fn without_left(self) -> Self {
        Self { left: 0, ..self }
    }

    /// The remaining insets after the right edge has been absorbed.
    pub fn without_right(self) -> Self {
        Self { right: 0, ..self }
    }

    /// Shrink `area` by these insets, saturating at zero size.
    pub fn shrink(&self, area: Rect) -> Rect {
        let width = area
            .width
            .saturating_sub(self.left.saturating_add(self.right));
        let height = area
            .height
            .saturating_sub(self.top.saturating_add(self.bottom));
        let x = area.x.saturating_add(self.left.min(area.width));
        let y = area.y.saturating_add(self.top.min(area.height));
        Rect::new(x, y, width, height)
    }
}
