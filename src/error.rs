//! Structured error types for gridview.
//!
//! The layout and windowing functions are total over their documented
//! input domain (missing values, unknown sort props, and unmeasured
//! viewports all degrade gracefully), so errors are reserved for host
//! contract violations on the orchestrator's request surface.

/// All errors that can occur driving the grid orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// A column index outside the current column collection.
    #[error("column index {index} out of bounds (have {len} columns)")]
    ColumnIndex { index: usize, len: usize },

    /// A width that is negative or not a finite number.
    #[error("invalid column width: {0}")]
    InvalidWidth(f32),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;
