//! Column types: declarative specs, normalized internal columns, pin sides,
//! and the width-distribution mode.

use std::cmp::Ordering;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::prop::{ColumnProp, PropPath};

/// Default width (px) assigned by normalization when a spec carries none.
pub const DEFAULT_COLUMN_WIDTH: f32 = 150.0;

/// Width (px) assumed for a width-less column during force-fill distribution.
pub const FORCE_FILL_DEFAULT_WIDTH: f32 = 300.0;

static NEXT_COLUMN_ID: AtomicU64 = AtomicU64::new(1);

/// Stable internal column identifier, assigned once at normalization.
/// Survives reorder and resize; never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ColumnId(pub u64);

impl ColumnId {
    pub(crate) fn next() -> Self {
        Self(NEXT_COLUMN_ID.fetch_add(1, AtomicOrdering::Relaxed))
    }
}

/// Which frozen group a column belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PinSide {
    /// Scrolls with the body (the default).
    #[default]
    None,
    /// Frozen to the left edge.
    Left,
    /// Frozen to the right edge.
    Right,
}

/// Column width distribution formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ColumnMode {
    /// Columns keep their declared/defaulted widths.
    #[default]
    Standard,
    /// Extra space is distributed proportionally to `flex_grow` factors.
    Flex,
    /// Columns are stretched/shrunk so the total equals the viewport width.
    Force,
}

/// Opaque handle to a host-side cell or header template.
///
/// The engine stores and forwards it verbatim and never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TemplateHandle(pub u64);

/// Custom per-column comparator over resolved cell values.
pub type RowComparator = Arc<dyn Fn(&Value, &Value) -> Ordering + Send + Sync>;

/// Declarative column description supplied by the host.
///
/// At least one of `name` and `prop` must be set; normalization derives
/// the other (camel-case / de-camel-case). All flags default to enabled.
#[derive(Clone, Default)]
pub struct ColumnSpec {
    /// Display name shown in the header.
    pub name: Option<String>,
    /// Property to bind to the row: `"someField"`, `"some.field.nested"`,
    /// or a numeric index (0 is valid).
    pub prop: Option<ColumnProp>,
    /// Width in pixels; defaults to [`DEFAULT_COLUMN_WIDTH`].
    pub width: Option<f32>,
    /// Minimum width bound, if any.
    pub min_width: Option<f32>,
    /// Maximum width bound, if any.
    pub max_width: Option<f32>,
    /// Flex-grow factor for [`ColumnMode::Flex`] distribution.
    pub flex_grow: f32,
    /// Frozen side.
    pub pin: PinSide,
    /// Can the column be resized.
    pub resizeable: Option<bool>,
    /// Can the column be sorted.
    pub sortable: Option<bool>,
    /// Can the column be re-arranged by dragging.
    pub draggable: Option<bool>,
    /// Whether the column participates in automatic width distribution.
    pub can_auto_resize: Option<bool>,
    /// Renders a row-selection checkbox in body cells.
    pub checkboxable: bool,
    /// Renders a select-all checkbox in the header cell.
    pub header_checkboxable: bool,
    /// Custom sort comparator over resolved cell values.
    pub comparator: Option<RowComparator>,
    /// Opaque cell template reference, forwarded untouched.
    pub cell_template: Option<TemplateHandle>,
    /// Opaque header template reference, forwarded untouched.
    pub header_template: Option<TemplateHandle>,
}

impl fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("name", &self.name)
            .field("prop", &self.prop)
            .field("width", &self.width)
            .field("pin", &self.pin)
            .finish_non_exhaustive()
    }
}

impl ColumnSpec {
    /// Spec with just a display name; prop is derived at normalization.
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    /// Spec bound to a prop; name is derived at normalization.
    pub fn for_prop(prop: impl Into<ColumnProp>) -> Self {
        Self {
            prop: Some(prop.into()),
            ..Self::default()
        }
    }

    /// Set the declared width.
    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the min/max width bounds.
    #[must_use]
    pub fn bounds(mut self, min_width: Option<f32>, max_width: Option<f32>) -> Self {
        self.min_width = min_width;
        self.max_width = max_width;
        self
    }

    /// Set the flex-grow factor.
    #[must_use]
    pub fn flex_grow(mut self, factor: f32) -> Self {
        self.flex_grow = factor;
        self
    }

    /// Set the frozen side.
    #[must_use]
    pub fn pin(mut self, side: PinSide) -> Self {
        self.pin = side;
        self
    }

    /// Set the custom comparator.
    #[must_use]
    pub fn comparator(mut self, cmp: RowComparator) -> Self {
        self.comparator = Some(cmp);
        self
    }
}

/// Normalized internal column.
///
/// Created whenever the declarative column list changes identity; mutated
/// in place only for width and pin during layout/resize. The whole
/// collection is replaced on column-set change, never edited piecemeal.
#[derive(Clone)]
pub struct Column {
    /// Stable identifier, immutable once assigned.
    pub id: ColumnId,
    /// Display name; never empty-optional after normalization (an empty
    /// string is used when neither name nor prop was given, so hosts
    /// never render a literal "null").
    pub name: String,
    /// Bound row property, if any.
    pub prop: Option<ColumnProp>,
    /// Pre-parsed accessor for `prop`, cached at normalization.
    pub(crate) accessor: PropPath,
    /// Current width in pixels.
    pub width: f32,
    /// Width explicitly set by a user resize; excluded from the even
    /// force-fill split so a manual resize is not immediately overridden.
    pub old_width: Option<f32>,
    /// Minimum width bound.
    pub min_width: Option<f32>,
    /// Maximum width bound.
    pub max_width: Option<f32>,
    /// Flex-grow factor.
    pub flex_grow: f32,
    /// Frozen side.
    pub pin: PinSide,
    /// Can the column be resized.
    pub resizeable: bool,
    /// Can the column be sorted.
    pub sortable: bool,
    /// Can the column be dragged.
    pub draggable: bool,
    /// Participates in automatic width distribution.
    pub can_auto_resize: bool,
    /// Body checkbox column.
    pub checkboxable: bool,
    /// Header select-all checkbox.
    pub header_checkboxable: bool,
    /// Custom sort comparator.
    pub comparator: Option<RowComparator>,
    /// Opaque cell template reference.
    pub cell_template: Option<TemplateHandle>,
    /// Opaque header template reference.
    pub header_template: Option<TemplateHandle>,
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("prop", &self.prop)
            .field("width", &self.width)
            .field("pin", &self.pin)
            .field("flex_grow", &self.flex_grow)
            .finish_non_exhaustive()
    }
}

impl Column {
    /// Resolve this column's value from a row.
    ///
    /// Absent props and missing intermediate objects both resolve to
    /// `None`, never an error.
    pub fn value<'a>(&self, row: &'a Value) -> Option<&'a Value> {
        if self.prop.is_none() || self.accessor.is_empty() {
            return None;
        }
        self.accessor.resolve(row)
    }

    /// The prop rendered as a string, for sort-descriptor matching.
    pub fn prop_string(&self) -> Option<String> {
        self.prop.as_ref().map(ColumnProp::as_display_string)
    }

    /// Clamp a candidate width to this column's bounds.
    pub fn clamp_width(&self, width: f32) -> f32 {
        let mut w = width;
        if let Some(min) = self.min_width {
            w = w.max(min);
        }
        if let Some(max) = self.max_width {
            w = w.min(max);
        }
        w.max(0.0)
    }
}

/// Read-only column layout snapshot handed to the host.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnLayout {
    pub id: ColumnId,
    pub name: String,
    pub prop: Option<String>,
    pub width: f32,
    pub pin: PinSide,
    pub sortable: bool,
    pub resizeable: bool,
    pub draggable: bool,
}

impl From<&Column> for ColumnLayout {
    fn from(col: &Column) -> Self {
        Self {
            id: col.id,
            name: col.name.clone(),
            prop: col.prop_string(),
            width: col.width,
            pin: col.pin,
            sortable: col.sortable,
            resizeable: col.resizeable,
            draggable: col.draggable,
        }
    }
}
