//! gridview - virtualized data-grid layout and windowing engine
//!
//! Computes everything a data-grid host needs short of painting pixels:
//! - Column normalization (stable ids, name/prop derivation, defaults)
//! - Width distribution (standard, flex-grow, force-fill)
//! - Pinned (frozen) column groups with scroll-anchored offsets
//! - Stable single/multi-column sorting over opaque row records
//! - Row grouping by key
//! - Visible-row windows so only a bounded slice is ever materialized,
//!   regardless of dataset size
//!
//! Rendering, gesture tracking, and framework wiring stay in the host:
//! it feeds columns, rows, viewport dimensions, and scroll/sort/resize
//! events in, and reads layout snapshots and change events back out.
//!
//! # Usage
//!
//! ```
//! use gridview::{ColumnSpec, GridConfig, GridView, SortDescriptor};
//! use serde_json::json;
//!
//! let mut grid = GridView::new(GridConfig::default());
//! grid.set_columns(&[ColumnSpec::named("Age"), ColumnSpec::named("Name")]);
//! grid.set_viewport(800.0, 600.0);
//! grid.set_rows(vec![
//!     json!({"age": 5, "name": "Ada"}),
//!     json!({"age": 1, "name": "Grace"}),
//! ]);
//! grid.set_sorts(vec![SortDescriptor::asc("age")]);
//!
//! let window = grid.window();
//! assert_eq!(grid.rows()[0]["age"], 1);
//! assert_eq!(window.first, 0);
//! ```

// Engine modules
pub mod columns;
pub mod error;
pub mod group;
pub mod layout;
pub mod prop;
pub mod sort;
pub mod types;

// Orchestration
pub mod grid;

pub use error::{GridError, Result};
pub use grid::{GridConfig, GridEvent, GridView, PageRequest, RowSelection, SelectionMode};
pub use layout::{GroupOffsets, GroupWidths, PinGroup, RowLayout};
pub use prop::ColumnProp;
pub use types::*;

/// Get the library version
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
