//! Column model tests
//!
//! Normalization through the public surface: name/prop derivation,
//! defaulting, nested and numeric prop resolution, and the column
//! snapshot the host reads back.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use gridview::columns::normalize_columns;
use gridview::{ColumnProp, ColumnSpec, GridConfig, GridView, SortDescriptor};
use serde_json::json;
use test_case::test_case;

#[test_case("Max Height", "maxHeight" ; "two words")]
#[test_case("Name", "name" ; "single word")]
#[test_case("first-name", "firstName" ; "kebab name")]
fn test_prop_derived_from_name(name: &str, expected_prop: &str) {
    let cols = normalize_columns(&[ColumnSpec::named(name)]);
    assert_eq!(cols[0].prop, Some(ColumnProp::from(expected_prop)));
    assert_eq!(cols[0].name, name);
}

#[test]
fn test_name_derived_from_prop() {
    let cols = normalize_columns(&[ColumnSpec::for_prop("firstName")]);
    assert_eq!(cols[0].name, "First Name");
}

#[test]
fn test_both_absent_yields_empty_name_not_null() {
    let cols = normalize_columns(&[ColumnSpec::default()]);
    assert_eq!(cols[0].name, "");
    assert!(cols[0].prop.is_none());
}

#[test]
fn test_nested_prop_resolves_through_sort() {
    let mut grid = GridView::new(GridConfig::default());
    let mut spec = ColumnSpec::named("City");
    spec.prop = Some(ColumnProp::from("address.city"));
    grid.set_columns(&[spec]);
    grid.set_viewport(400.0, 330.0);
    grid.set_rows(vec![
        json!({"address": {"city": "Oslo"}}),
        json!({"address": {"city": "Bergen"}}),
        json!({"address": null}),
    ]);

    grid.set_sorts(vec![SortDescriptor::asc("address.city")]);
    let rows = grid.rows();
    // Missing intermediate sorts first, then alphabetical.
    assert!(rows[0]["address"].is_null());
    assert_eq!(rows[1]["address"]["city"], "Bergen");
    assert_eq!(rows[2]["address"]["city"], "Oslo");
}

#[test]
fn test_numeric_prop_zero_addresses_array_rows() {
    let mut grid = GridView::new(GridConfig::default());
    grid.set_columns(&[ColumnSpec::for_prop(0usize), ColumnSpec::for_prop(1usize)]);
    grid.set_viewport(400.0, 330.0);
    grid.set_rows(vec![json!(["b", 2]), json!(["a", 1])]);

    let columns = grid.columns();
    assert_eq!(columns[0].name, "0");
    assert_eq!(columns[0].prop.as_deref(), Some("0"));

    grid.set_sorts(vec![SortDescriptor::asc("0")]);
    assert_eq!(grid.rows()[0][0], "a");
}

#[test]
fn test_snapshot_carries_flags_and_defaults() {
    let mut spec = ColumnSpec::named("Age");
    spec.draggable = Some(false);
    let cols = normalize_columns(&[spec, ColumnSpec::named("Name")]);

    assert!(!cols[0].draggable);
    assert!(cols[0].sortable && cols[0].resizeable && cols[0].can_auto_resize);
    assert_eq!(cols[1].width, 150.0);
}

#[test]
fn test_ids_survive_reorder() {
    let mut grid = GridView::new(GridConfig::default());
    grid.set_columns(&[ColumnSpec::named("A"), ColumnSpec::named("B")]);
    let before = grid.columns();

    grid.reorder_column(0, 1).unwrap();
    let after = grid.columns();
    assert_eq!(after[1].id, before[0].id);
    assert_eq!(after[0].id, before[1].id);
}
