//! Layout engine: column width distribution, pinned-group geometry, and
//! visible-window computation for virtual scrolling.

mod pin;
mod width;
mod window;

pub use pin::{
    group_by_pin, group_offsets, group_widths, ColumnsByPin, GroupOffsets, GroupWidths, PinGroup,
};
pub use width::{columns_total_width, distribute_widths, DistributeOpts};
pub use window::RowLayout;
