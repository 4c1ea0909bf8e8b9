//! Column normalization.
//!
//! Turns the host's declarative column list into the canonical internal
//! form: stable ids, name/prop derivation, cached value accessors, and
//! flag/width defaults. Runs once per column-set identity change.

use crate::prop::{camel_case, de_camel_case, PropPath};
use crate::types::{Column, ColumnId, ColumnSpec, DEFAULT_COLUMN_WIDTH};

/// Normalize a declarative column list into internal columns.
///
/// Defaulting rules:
/// - a fresh [`ColumnId`] is assigned to every column
/// - `prop` unset + `name` set: prop is derived by camel-casing the name
/// - `prop` set + `name` unset: name is derived by de-camel-casing the
///   prop's string form (numeric props stringify; `0` is a valid prop)
/// - both unset: name defaults to the empty string so hosts never render
///   a literal "null"
/// - resizeable/sortable/draggable/can_auto_resize default to true
/// - width defaults to [`DEFAULT_COLUMN_WIDTH`]
pub fn normalize_columns(specs: &[ColumnSpec]) -> Vec<Column> {
    specs.iter().map(normalize_column).collect()
}

fn normalize_column(spec: &ColumnSpec) -> Column {
    let mut prop = spec.prop.clone();
    let mut name = spec.name.clone();

    if prop.is_none() {
        if let Some(n) = &name {
            prop = Some(camel_case(n).into());
        }
    }

    if name.is_none() {
        name = prop
            .as_ref()
            .map(|p| de_camel_case(&p.as_display_string()));
    }

    let accessor = prop.as_ref().map(PropPath::compile).unwrap_or_default();

    Column {
        id: ColumnId::next(),
        name: name.unwrap_or_default(),
        prop,
        accessor,
        width: spec.width.unwrap_or(DEFAULT_COLUMN_WIDTH),
        old_width: None,
        min_width: spec.min_width,
        max_width: spec.max_width,
        flex_grow: spec.flex_grow,
        pin: spec.pin,
        resizeable: spec.resizeable.unwrap_or(true),
        sortable: spec.sortable.unwrap_or(true),
        draggable: spec.draggable.unwrap_or(true),
        can_auto_resize: spec.can_auto_resize.unwrap_or(true),
        checkboxable: spec.checkboxable,
        header_checkboxable: spec.header_checkboxable,
        comparator: spec.comparator.clone(),
        cell_template: spec.cell_template,
        header_template: spec.header_template,
    }
}
