//! Data types for the grid layout engine.

mod column;
mod group;
mod sort;
mod window;

pub use column::*;
pub use group::*;
pub use sort::*;
pub use window::*;
