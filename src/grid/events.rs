//! Outbound notifications from the grid orchestrator.
//!
//! Each event carries the previous and new value so the host can decide
//! whether to issue a server round-trip (external sorting/paging) or just
//! re-render. Events are queued on the grid and drained with
//! [`GridView::take_events`](crate::grid::GridView::take_events).

use serde::Serialize;
use serde_json::Value;

use crate::types::{ColumnId, SortDescriptor, VisibleWindow};

/// Request for an external data page, emitted under external paging when
/// the visible window crosses a page boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    /// Zero-based page index.
    pub offset: usize,
    /// Rows per page (derived from the body height and row height).
    pub page_size: usize,
    /// Total row count known to the engine.
    pub count: usize,
}

/// A change notification from the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GridEvent {
    /// The sort descriptor set changed (user gesture or host update).
    SortChanged {
        prev: Vec<SortDescriptor>,
        sorts: Vec<SortDescriptor>,
    },
    /// A column was resized.
    ColumnResized {
        id: ColumnId,
        prop: Option<String>,
        prev_width: f32,
        width: f32,
    },
    /// A column moved to a new position.
    ColumnReordered {
        id: ColumnId,
        prev_index: usize,
        new_index: usize,
    },
    /// The visible window moved or changed size.
    WindowChanged {
        prev: VisibleWindow,
        window: VisibleWindow,
    },
    /// The host should fetch a new page (external paging only).
    Page(PageRequest),
    /// The selected row set changed.
    SelectionChanged { selected: Vec<Value> },
}
