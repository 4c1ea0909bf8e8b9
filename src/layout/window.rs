//! Visible-window computation for virtual scrolling.
//!
//! Pre-computes cumulative row positions once per row-set/height change,
//! enabling O(log n) lookups of the first visible row at any scroll
//! offset. Uniform row heights take a constant-time arithmetic path and
//! skip the cumulative table entirely.

use crate::types::{RowHeight, VisibleWindow, OVERSCAN_ROWS};

/// Vertical layout of the sorted row collection.
///
/// Rebuilt whenever the row count or the height source changes identity;
/// window queries are synchronous and side-effect-free.
#[derive(Debug, Clone)]
pub struct RowLayout {
    /// Cumulative row positions (`positions[i]` = y of row i's top edge,
    /// final entry = total height). Empty for the uniform fast path.
    positions: Vec<f32>,
    row_count: usize,
    /// Uniform row height, if the height source is fixed.
    fixed_height: Option<f32>,
    total_height: f32,
}

impl RowLayout {
    /// Build the layout for `row_count` rows with the given height source.
    pub fn new(row_count: usize, height: &RowHeight) -> Self {
        match height {
            RowHeight::Fixed(h) => {
                let h = h.max(0.0);
                Self {
                    positions: Vec::new(),
                    row_count,
                    fixed_height: Some(h),
                    total_height: h * row_count as f32,
                }
            }
            RowHeight::Variable(height_fn) => {
                let mut positions = Vec::with_capacity(row_count + 1);
                let mut y: f32 = 0.0;
                for i in 0..row_count {
                    positions.push(y);
                    y += height_fn(i).max(0.0);
                }
                positions.push(y);
                Self {
                    positions,
                    row_count,
                    fixed_height: None,
                    total_height: y,
                }
            }
        }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Total content height in pixels.
    pub fn total_height(&self) -> f32 {
        self.total_height
    }

    /// Y position of a row's top edge.
    pub fn row_top(&self, index: usize) -> f32 {
        match self.fixed_height {
            Some(h) => h * index.min(self.row_count) as f32,
            None => self
                .positions
                .get(index.min(self.row_count))
                .copied()
                .unwrap_or(self.total_height),
        }
    }

    /// Find the row containing the given y offset (binary search for
    /// variable heights, division for uniform). Clamped to valid rows.
    pub fn row_at_y(&self, y: f32) -> usize {
        if self.row_count == 0 || y <= 0.0 {
            return 0;
        }
        if let Some(h) = self.fixed_height {
            if h <= 0.0 {
                return 0;
            }
            // floor(y / h), clamped to the last row
            let idx = (y / h).floor();
            let idx = if idx.is_finite() && idx >= 0.0 {
                idx.min((self.row_count - 1) as f32)
            } else {
                0.0
            };
            // round-trip through f32 is exact for realistic row counts
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let idx = idx as usize;
            return idx;
        }
        match self
            .positions
            .binary_search_by(|pos| pos.partial_cmp(&y).unwrap_or(std::cmp::Ordering::Equal))
        {
            Ok(i) => i.min(self.row_count.saturating_sub(1)),
            Err(i) => i.saturating_sub(1).min(self.row_count.saturating_sub(1)),
        }
    }

    /// Compute the visible window for a scroll offset and viewport height.
    ///
    /// `first` increases monotonically with `scroll_top`; the window is
    /// clamped to `[0, row_count]` and padded with [`OVERSCAN_ROWS`]. An
    /// unmeasured viewport (zero or non-finite height) yields an empty
    /// window rather than a division error.
    pub fn visible_window(&self, scroll_top: f32, viewport_height: f32) -> VisibleWindow {
        if self.row_count == 0
            || !viewport_height.is_finite()
            || viewport_height <= 0.0
            || self.total_height <= 0.0
        {
            return VisibleWindow::default();
        }

        let max_scroll = (self.total_height - viewport_height).max(0.0);
        let scroll_top = scroll_top.clamp(0.0, max_scroll);

        let first = self.row_at_y(scroll_top);
        let last = if let Some(h) = self.fixed_height {
            let span = (viewport_height / h).ceil();
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let span = if span.is_finite() && span >= 0.0 {
                span as usize
            } else {
                0
            };
            first
                .saturating_add(span)
                .saturating_add(OVERSCAN_ROWS)
                .min(self.row_count)
        } else {
            self.row_at_y(scroll_top + viewport_height)
                .saturating_add(1)
                .saturating_add(OVERSCAN_ROWS)
                .min(self.row_count)
        };

        VisibleWindow {
            first,
            last,
            offset_y: self.row_top(first),
        }
    }
}
