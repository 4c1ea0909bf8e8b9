//! Pinned column grouping.
//!
//! Partitions columns into left/center/right groups, computes per-group
//! total widths, and derives the horizontal translate offsets that keep
//! frozen groups anchored while the center group scrolls.

use serde::Serialize;

use crate::types::{Column, ColumnId, ColumnLayout, PinSide};

/// Columns partitioned by pin side. Relative order within each group is
/// the column order of the source collection (stable single pass).
#[derive(Debug, Clone, Default)]
pub struct ColumnsByPin {
    pub left: Vec<ColumnId>,
    pub center: Vec<ColumnId>,
    pub right: Vec<ColumnId>,
}

/// Per-group and total widths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GroupWidths {
    pub left: f32,
    pub center: f32,
    pub right: f32,
    /// Total width of all columns, floored to whole pixels. Serves as a
    /// cross-check: it always equals the sum of the three groups.
    pub total: f32,
}

/// Horizontal translate offsets applied by the host to each group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GroupOffsets {
    /// Left group is anchored.
    pub left: f32,
    /// Center group translates opposite to the horizontal scroll.
    pub center: f32,
    /// Right group is anchored to the visible right edge.
    pub right: f32,
}

/// Snapshot of one rendered pin group for the host.
#[derive(Debug, Clone, Serialize)]
pub struct PinGroup {
    pub side: PinSide,
    pub columns: Vec<ColumnLayout>,
    pub width: f32,
    pub offset: f32,
}

/// Partition columns by pin side, preserving relative order.
pub fn group_by_pin(columns: &[Column]) -> ColumnsByPin {
    let mut groups = ColumnsByPin::default();
    for col in columns {
        match col.pin {
            PinSide::Left => groups.left.push(col.id),
            PinSide::Right => groups.right.push(col.id),
            PinSide::None => groups.center.push(col.id),
        }
    }
    groups
}

/// Compute per-group widths plus the floored all-columns total.
pub fn group_widths(groups: &ColumnsByPin, columns: &[Column]) -> GroupWidths {
    let width_of = |ids: &[ColumnId]| -> f32 {
        ids.iter()
            .filter_map(|id| columns.iter().find(|c| c.id == *id))
            .map(|c| c.width)
            .sum()
    };

    GroupWidths {
        left: width_of(&groups.left),
        center: width_of(&groups.center),
        right: width_of(&groups.right),
        total: columns.iter().map(|c| c.width).sum::<f32>().floor(),
    }
}

/// Derive the translate offset of each group for the current horizontal
/// scroll position and viewport inner width.
///
/// The center group shifts opposite to the scroll; the right group shifts
/// by `-(total - inner_width)` so it stays pinned to the visible right
/// edge regardless of scroll.
pub fn group_offsets(widths: &GroupWidths, offset_x: f32, inner_width: f32) -> GroupOffsets {
    GroupOffsets {
        left: 0.0,
        center: -offset_x,
        right: -(widths.total - inner_width),
    }
}
