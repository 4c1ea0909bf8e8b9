//! Visible-window and row-height types for virtual scrolling.

use serde::Serialize;

/// Extra rows included above/below the strict viewport intersection to
/// reduce popping during scroll.
pub const OVERSCAN_ROWS: usize = 1;

/// The contiguous slice of rows that must be materialized for the current
/// scroll position, plus the vertical translation that keeps the rendered
/// slice aligned with the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct VisibleWindow {
    /// First visible row index (inclusive).
    pub first: usize,
    /// Last visible row index (exclusive). Clamped to the row count.
    pub last: usize,
    /// Vertical offset (px) to translate the rendered slice by.
    pub offset_y: f32,
}

impl VisibleWindow {
    /// Number of rows in the window.
    pub fn len(&self) -> usize {
        self.last.saturating_sub(self.first)
    }

    /// True when no rows are visible.
    pub fn is_empty(&self) -> bool {
        self.last <= self.first
    }

    /// The window as a range over the sorted row collection.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.first..self.last
    }
}

/// Row height source: uniform fast path or a per-row height function.
#[derive(Clone)]
pub enum RowHeight {
    /// Every row has the same height (px).
    Fixed(f32),
    /// Per-row height lookup; the index is into the sorted row order.
    Variable(std::sync::Arc<dyn Fn(usize) -> f32 + Send + Sync>),
}

impl std::fmt::Debug for RowHeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowHeight::Fixed(h) => f.debug_tuple("Fixed").field(h).finish(),
            RowHeight::Variable(_) => f.write_str("Variable(..)"),
        }
    }
}

impl Default for RowHeight {
    fn default() -> Self {
        RowHeight::Fixed(30.0)
    }
}
