//! Grid orchestrator - the primary entry point for the layout engine.
//!
//! Composes the column model, width distributor, pin grouper, sort
//! engine, row grouper, and window calculator behind explicit setter
//! methods. Each setter recomputes only the stages that depend on the
//! changed input, always in the fixed order
//! columns -> widths -> pin groups -> window, so no stage ever observes a
//! half-updated sibling. All recomputation is derived from the latest
//! snapshot of inputs; a newer event simply supersedes a stale one.
//!
//! The orchestrator exclusively owns its derived state. Hosts receive
//! cloned snapshots and react to queued [`GridEvent`]s - there is no
//! shared mutable aliasing between internal and external collections.

mod events;
mod selection;

pub use events::{GridEvent, PageRequest};
pub use selection::{RowSelection, SelectionMode};

use log::{debug, trace};
use serde_json::Value;

use crate::columns::normalize_columns;
use crate::error::{GridError, Result};
use crate::group::group_rows_by;
use crate::layout::{
    distribute_widths, group_by_pin, group_offsets, group_widths, ColumnsByPin, DistributeOpts,
    GroupOffsets, GroupWidths, PinGroup, RowLayout,
};
use crate::sort::sort_rows;
use crate::types::{
    apply_sort_request, Column, ColumnLayout, ColumnMode, ColumnSpec, GroupedRows, PinSide,
    RowHeight, SortDescriptor, SortType, VisibleWindow,
};

/// Conventional desktop scrollbar width in logical pixels.
pub const DEFAULT_SCROLLBAR_WIDTH: f32 = 17.0;

/// Static grid configuration, fixed at construction.
///
/// Viewport dimensions and the scrollbar width arrive from the host as
/// injected measurements; the engine never consults ambient context.
#[derive(Debug, Clone)]
pub struct GridConfig {
    /// Column width distribution formula.
    pub column_mode: ColumnMode,
    /// Single- or multi-column sorting.
    pub sort_type: SortType,
    /// When true, the engine records and emits sort descriptors but trusts
    /// the incoming row order as already sorted.
    pub external_sorting: bool,
    /// When true, the host supplies row pages; the engine emits
    /// [`PageRequest`]s as the window crosses page boundaries.
    pub external_paging: bool,
    /// Vertical scrolling (enables row virtualization).
    pub scrollbar_v: bool,
    /// Horizontal scrolling (allows column bleed past the viewport).
    pub scrollbar_h: bool,
    /// Header height (px); 0 for no header.
    pub header_height: f32,
    /// Footer height (px); 0 for no footer.
    pub footer_height: f32,
    /// Row height source for windowing.
    pub row_height: RowHeight,
    /// Width reserved for the vertical scrollbar, injected by the host.
    pub scrollbar_width: f32,
    /// Scope header select-all to the currently visible window.
    pub select_all_rows_on_page: bool,
    /// Row selection behavior.
    pub selection_mode: SelectionMode,
    /// Group rows by this key property, when set.
    pub group_rows_by: Option<String>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            column_mode: ColumnMode::Standard,
            sort_type: SortType::Single,
            external_sorting: false,
            external_paging: false,
            scrollbar_v: true,
            scrollbar_h: false,
            header_height: 30.0,
            footer_height: 0.0,
            row_height: RowHeight::default(),
            scrollbar_width: DEFAULT_SCROLLBAR_WIDTH,
            select_all_rows_on_page: false,
            selection_mode: SelectionMode::None,
            group_rows_by: None,
        }
    }
}

/// The grid layout orchestrator.
pub struct GridView {
    config: GridConfig,

    // Declarative inputs (always fresh copies of what the host supplied).
    source_rows: Vec<Value>,

    // Derived aggregates, exclusively owned.
    columns: Vec<Column>,
    rows: Vec<Value>,
    grouped: Option<Vec<GroupedRows>>,
    sorts: Vec<SortDescriptor>,

    // Viewport state.
    measured_width: f32,
    measured_height: f32,
    inner_width: f32,
    body_height: f32,
    offset_x: f32,
    scroll_top: f32,

    // Layout aggregates.
    by_pin: ColumnsByPin,
    widths: GroupWidths,
    offsets: GroupOffsets,
    row_layout: RowLayout,
    window: VisibleWindow,

    selection: RowSelection,
    current_page: Option<usize>,
    events: Vec<GridEvent>,
}

impl GridView {
    /// Create an empty grid with the given configuration.
    pub fn new(config: GridConfig) -> Self {
        let row_layout = RowLayout::new(0, &config.row_height);
        let selection = RowSelection::new(config.selection_mode);
        Self {
            config,
            source_rows: Vec::new(),
            columns: Vec::new(),
            rows: Vec::new(),
            grouped: None,
            sorts: Vec::new(),
            measured_width: 0.0,
            measured_height: 0.0,
            inner_width: 0.0,
            body_height: 0.0,
            offset_x: 0.0,
            scroll_top: 0.0,
            by_pin: ColumnsByPin::default(),
            widths: GroupWidths::default(),
            offsets: GroupOffsets::default(),
            row_layout,
            window: VisibleWindow::default(),
            selection,
            current_page: None,
            events: Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Input setters (explicit invalidation; stage order documented above)
    // ------------------------------------------------------------------

    /// Replace the column set. Re-runs normalization, width distribution,
    /// and pin grouping; the window is unaffected.
    pub fn set_columns(&mut self, specs: &[ColumnSpec]) {
        debug!("column set replaced: {} columns", specs.len());
        self.columns = normalize_columns(specs);
        self.recalculate_columns(None);
    }

    /// Replace the row set.
    ///
    /// Under internal sorting the rows are re-sorted with the active
    /// descriptors; under external sorting the incoming order is trusted
    /// as already sorted. Grouping (when configured) and the window are
    /// rebuilt either way.
    pub fn set_rows(&mut self, rows: Vec<Value>) {
        debug!("row set replaced: {} rows", rows.len());
        self.source_rows = rows;
        self.rows = if self.config.external_sorting {
            self.source_rows.clone()
        } else {
            sort_rows(&self.source_rows, &self.columns, &self.sorts)
        };
        self.regroup();
        self.rebuild_row_layout();
        self.recompute_window();
    }

    /// Supply pre-grouped rows from the host (external grouping). The
    /// flat sorted order is untouched.
    pub fn set_grouped_rows(&mut self, groups: Vec<GroupedRows>) {
        self.grouped = Some(groups);
    }

    /// Update the measured viewport dimensions. Width availability
    /// changed, so widths, pin groups, and the window are all re-derived.
    /// Zero/non-measurable dimensions defer recomputation.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        trace!("viewport measured: {width}x{height}");
        self.measured_width = if width.is_finite() { width } else { 0.0 };
        self.measured_height = if height.is_finite() { height } else { 0.0 };
        self.recalculate_dims();
        self.recalculate_columns(None);
        self.recompute_window();
    }

    /// Update the scroll offsets. Horizontal scroll re-derives group
    /// offsets only (no regrouping); vertical scroll re-derives the
    /// window.
    pub fn set_scroll(&mut self, offset_x: f32, scroll_top: f32) {
        self.offset_x = offset_x.max(0.0);
        self.scroll_top = scroll_top.max(0.0);
        self.offsets = group_offsets(&self.widths, self.offset_x, self.inner_width);
        self.recompute_window();
    }

    // ------------------------------------------------------------------
    // User gestures
    // ------------------------------------------------------------------

    /// A header click requested a sort on the column bound to `prop`.
    ///
    /// Cycles the column's direction (unsorted -> asc -> desc ->
    /// unsorted) under the configured [`SortType`]. Non-sortable and
    /// unknown columns are ignored.
    pub fn sort_requested(&mut self, prop: &str) {
        let sortable = self
            .columns
            .iter()
            .any(|c| c.sortable && c.prop_string().as_deref() == Some(prop));
        if !sortable {
            return;
        }
        let next = apply_sort_request(&self.sorts, prop, self.config.sort_type);
        self.apply_sorts(next);
    }

    /// Replace the descriptor set directly (host-driven).
    pub fn set_sorts(&mut self, sorts: Vec<SortDescriptor>) {
        self.apply_sorts(sorts);
    }

    /// Resize a single column to `width` (clamped to its bounds), then
    /// reflow the columns after it and re-derive pin groups.
    pub fn resize_column(&mut self, index: usize, width: f32) -> Result<()> {
        if !width.is_finite() || width < 0.0 {
            return Err(GridError::InvalidWidth(width));
        }
        let len = self.columns.len();
        let col = self
            .columns
            .get_mut(index)
            .ok_or(GridError::ColumnIndex { index, len })?;
        if !col.resizeable {
            return Ok(());
        }
        let prev_width = col.width;
        let new_width = col.clamp_width(width);
        col.width = new_width;
        // Marker excludes this column from force-fill redistribution, so
        // the manual width survives the same recalculation pass.
        col.old_width = Some(new_width);
        let id = col.id;
        let prop = col.prop_string();

        self.recalculate_columns(Some(index));
        self.events.push(GridEvent::ColumnResized {
            id,
            prop,
            prev_width,
            width: new_width,
        });
        Ok(())
    }

    /// Move a column between positions (drag reorder). Swaps the two
    /// positions and re-derives pin groups; widths are untouched.
    pub fn reorder_column(&mut self, prev_index: usize, new_index: usize) -> Result<()> {
        let len = self.columns.len();
        if new_index >= len {
            return Err(GridError::ColumnIndex {
                index: new_index,
                len,
            });
        }
        let Some(col) = self.columns.get(prev_index) else {
            return Err(GridError::ColumnIndex {
                index: prev_index,
                len,
            });
        };
        let id = col.id;
        if prev_index == new_index {
            return Ok(());
        }
        self.columns.swap(prev_index, new_index);
        self.regroup_pins();
        self.events.push(GridEvent::ColumnReordered {
            id,
            prev_index,
            new_index,
        });
        Ok(())
    }

    /// A body row was clicked for selection. The index addresses the
    /// sorted row order.
    pub fn row_clicked(&mut self, index: usize) {
        let Some(row) = self.rows.get(index).cloned() else {
            return;
        };
        if self.selection.click(&row) {
            self.emit_selection();
        }
    }

    /// Header select-all toggle. With `select_all_rows_on_page` the
    /// candidates are exactly the rows of the current window; otherwise
    /// the whole collection.
    pub fn select_all(&mut self) {
        let candidates: Vec<Value> = if self.config.select_all_rows_on_page {
            self.rows
                .get(self.window.range())
                .map(<[Value]>::to_vec)
                .unwrap_or_default()
        } else {
            self.rows.clone()
        };
        if self.selection.toggle_all(&candidates) {
            self.emit_selection();
        }
    }

    // ------------------------------------------------------------------
    // Derived-state snapshots
    // ------------------------------------------------------------------

    /// Normalized column layout snapshot.
    pub fn columns(&self) -> Vec<ColumnLayout> {
        self.columns.iter().map(ColumnLayout::from).collect()
    }

    /// The three pin groups with widths and translate offsets.
    pub fn pin_groups(&self) -> Vec<PinGroup> {
        let snapshot = |side: PinSide, ids: &[crate::types::ColumnId], width: f32, offset: f32| {
            PinGroup {
                side,
                columns: ids
                    .iter()
                    .filter_map(|id| self.columns.iter().find(|c| c.id == *id))
                    .map(ColumnLayout::from)
                    .collect(),
                width,
                offset,
            }
        };
        vec![
            snapshot(
                PinSide::Left,
                &self.by_pin.left,
                self.widths.left,
                self.offsets.left,
            ),
            snapshot(
                PinSide::None,
                &self.by_pin.center,
                self.widths.center,
                self.offsets.center,
            ),
            snapshot(
                PinSide::Right,
                &self.by_pin.right,
                self.widths.right,
                self.offsets.right,
            ),
        ]
    }

    /// Per-group and total widths.
    pub fn group_widths(&self) -> GroupWidths {
        self.widths
    }

    /// Current group translate offsets.
    pub fn group_offsets(&self) -> GroupOffsets {
        self.offsets
    }

    /// Sorted row order (fresh copy).
    pub fn rows(&self) -> Vec<Value> {
        self.rows.clone()
    }

    /// Rows of the current window (fresh copy).
    pub fn visible_rows(&self) -> Vec<Value> {
        self.rows
            .get(self.window.range())
            .map(<[Value]>::to_vec)
            .unwrap_or_default()
    }

    /// Grouped rows, when grouping is active.
    pub fn grouped_rows(&self) -> Option<Vec<GroupedRows>> {
        self.grouped.clone()
    }

    /// Current visible window.
    pub fn window(&self) -> VisibleWindow {
        self.window
    }

    /// Active sort descriptors.
    pub fn sorts(&self) -> Vec<SortDescriptor> {
        self.sorts.clone()
    }

    /// Selected rows (fresh copies).
    pub fn selected(&self) -> Vec<Value> {
        self.selection.selected()
    }

    /// Body height after subtracting header and footer.
    pub fn body_height(&self) -> f32 {
        self.body_height
    }

    /// Inner width used for layout (floored measured width).
    pub fn inner_width(&self) -> f32 {
        self.inner_width
    }

    /// Drain queued change notifications.
    pub fn take_events(&mut self) -> Vec<GridEvent> {
        std::mem::take(&mut self.events)
    }

    /// The configuration this grid was built with.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Recompute stages
    // ------------------------------------------------------------------

    fn recalculate_dims(&mut self) {
        self.inner_width = self.measured_width.max(0.0).floor();
        let mut height = self.measured_height.max(0.0);
        if self.config.scrollbar_v {
            height -= self.config.header_height.max(0.0);
            height -= self.config.footer_height.max(0.0);
        }
        self.body_height = height.max(0.0);
    }

    /// Width distribution followed by pin grouping, in that order.
    fn recalculate_columns(&mut self, force_idx: Option<usize>) {
        let mut available = self.inner_width;
        if self.config.scrollbar_v {
            available -= self.config.scrollbar_width;
        }
        distribute_widths(
            &mut self.columns,
            available,
            self.config.column_mode,
            DistributeOpts {
                force_idx,
                allow_bleed: self.config.scrollbar_h,
            },
        );
        self.regroup_pins();
    }

    fn regroup_pins(&mut self) {
        self.by_pin = group_by_pin(&self.columns);
        self.widths = group_widths(&self.by_pin, &self.columns);
        self.offsets = group_offsets(&self.widths, self.offset_x, self.inner_width);
        trace!(
            "pin groups: left={} center={} right={} total={}",
            self.widths.left,
            self.widths.center,
            self.widths.right,
            self.widths.total
        );
    }

    fn regroup(&mut self) {
        self.grouped = self
            .config
            .group_rows_by
            .as_deref()
            .map(|key| group_rows_by(&self.rows, key));
    }

    fn rebuild_row_layout(&mut self) {
        self.row_layout = RowLayout::new(self.rows.len(), &self.config.row_height);
    }

    fn recompute_window(&mut self) {
        let prev = self.window;
        self.window = if self.config.scrollbar_v {
            self.row_layout
                .visible_window(self.scroll_top, self.body_height)
        } else {
            // No vertical virtualization: every row is materialized.
            VisibleWindow {
                first: 0,
                last: self.rows.len(),
                offset_y: 0.0,
            }
        };
        if self.window != prev {
            self.events.push(GridEvent::WindowChanged {
                prev,
                window: self.window,
            });
            self.maybe_request_page();
        }
    }

    fn maybe_request_page(&mut self) {
        if !(self.config.external_paging && self.config.scrollbar_v) {
            return;
        }
        let page_size = self.page_size();
        if page_size == 0 {
            return;
        }
        let page = self.window.first / page_size;
        if self.current_page != Some(page) {
            self.current_page = Some(page);
            self.events.push(GridEvent::Page(PageRequest {
                offset: page,
                page_size,
                count: self.rows.len(),
            }));
        }
    }

    fn page_size(&self) -> usize {
        match self.config.row_height {
            RowHeight::Fixed(h) if h > 0.0 && self.body_height > 0.0 => {
                let span = (self.body_height / h).ceil();
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let span = if span.is_finite() && span >= 0.0 {
                    span as usize
                } else {
                    0
                };
                span
            }
            _ => self.window.len(),
        }
    }

    fn apply_sorts(&mut self, sorts: Vec<SortDescriptor>) {
        let prev = std::mem::replace(&mut self.sorts, sorts);
        debug!("sorts changed: {:?} -> {:?}", prev, self.sorts);

        // Page-scoped selections do not survive a re-sort.
        if self.config.select_all_rows_on_page && self.selection.clear() {
            self.emit_selection();
        }

        if !self.config.external_sorting {
            self.rows = sort_rows(&self.rows, &self.columns, &self.sorts);
            self.regroup();
            // Back to the first page so the freshly sorted data is visible.
            self.scroll_top = 0.0;
            self.recompute_window();
        }

        self.events.push(GridEvent::SortChanged {
            prev,
            sorts: self.sorts.clone(),
        });
    }

    fn emit_selection(&mut self) {
        self.events.push(GridEvent::SelectionChanged {
            selected: self.selection.selected(),
        });
    }
}
