//! Width distribution tests
//!
//! Tests for the standard/flex/force column width formulas: exact
//! force-fill totals, proportional flex growth, bound clamping, and
//! graceful handling of infeasible targets.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use gridview::columns::normalize_columns;
use gridview::layout::{columns_total_width, distribute_widths, DistributeOpts};
use gridview::{Column, ColumnMode, ColumnSpec};
use test_case::test_case;

fn uniform_columns(count: usize, width: f32) -> Vec<Column> {
    let specs: Vec<ColumnSpec> = (0..count)
        .map(|i| ColumnSpec::named(&format!("Col {i}")).width(width))
        .collect();
    normalize_columns(&specs)
}

// =============================================================================
// FORCE MODE
// =============================================================================

#[test]
fn test_force_three_columns_fill_360() {
    // 3 columns x 100px into a 360px viewport
    let mut columns = uniform_columns(3, 100.0);
    distribute_widths(
        &mut columns,
        360.0,
        ColumnMode::Force,
        DistributeOpts::default(),
    );

    let total = columns_total_width(&columns);
    assert!(
        (total - 360.0).abs() <= 3.0,
        "total should fill the viewport within 1px per column, got {total}"
    );
    for col in &columns {
        assert_eq!(col.width, 120.0);
    }
}

#[test_case(300.0, 2 ; "grow into 300")]
#[test_case(500.0, 4 ; "grow into 500")]
#[test_case(150.0, 3 ; "shrink into 150")]
#[test_case(1000.0, 5 ; "grow into 1000")]
fn test_force_total_matches_available(available: f32, count: usize) {
    let mut columns = uniform_columns(count, 80.0);
    distribute_widths(
        &mut columns,
        available,
        ColumnMode::Force,
        DistributeOpts::default(),
    );

    let total = columns_total_width(&columns);
    assert!(
        (total - available).abs() <= count as f32,
        "available {available}: got total {total}"
    );
}

#[test]
fn test_force_holds_min_and_max_bounds() {
    let specs = vec![
        ColumnSpec::named("A").width(100.0).bounds(Some(90.0), Some(130.0)),
        ColumnSpec::named("B").width(100.0).bounds(Some(50.0), None),
        ColumnSpec::named("C").width(100.0),
    ];
    let mut columns = normalize_columns(&specs);
    distribute_widths(
        &mut columns,
        600.0,
        ColumnMode::Force,
        DistributeOpts::default(),
    );

    assert!(columns[0].width <= 130.0);
    for col in &columns {
        if let Some(min) = col.min_width {
            assert!(col.width >= min);
        }
        if let Some(max) = col.max_width {
            assert!(col.width <= max);
        }
    }
    // The bounded column's shortfall lands on the unbounded ones.
    let total = columns_total_width(&columns);
    assert!((total - 600.0).abs() <= 3.0, "got total {total}");
}

#[test]
fn test_force_infeasible_target_leaves_min_widths() {
    let specs = vec![
        ColumnSpec::named("A").width(250.0).bounds(Some(250.0), None),
        ColumnSpec::named("B").width(250.0).bounds(Some(250.0), None),
    ];
    let mut columns = normalize_columns(&specs);
    distribute_widths(
        &mut columns,
        400.0,
        ColumnMode::Force,
        DistributeOpts::default(),
    );

    // Sum of min widths exceeds the viewport: no compression below min,
    // no negative widths, total is allowed to overflow.
    assert_eq!(columns[0].width, 250.0);
    assert_eq!(columns[1].width, 250.0);
    assert!(columns_total_width(&columns) > 400.0);
}

#[test]
fn test_force_manual_resize_not_overridden() {
    let mut columns = uniform_columns(3, 100.0);
    // The user just dragged column 1 to 180px.
    columns[1].width = 180.0;
    columns[1].old_width = Some(180.0);

    distribute_widths(
        &mut columns,
        500.0,
        ColumnMode::Force,
        DistributeOpts {
            force_idx: Some(1),
            allow_bleed: false,
        },
    );

    assert_eq!(columns[1].width, 180.0, "manual width must survive the pass");
    assert_eq!(columns[0].width, 100.0, "columns before force_idx stay put");
    // Column 2 absorbs the remaining 220px.
    assert!((columns[2].width - 220.0).abs() < 1.0);
}

#[test]
fn test_force_bleed_keeps_horizontal_overflow() {
    let mut columns = uniform_columns(4, 200.0);
    distribute_widths(
        &mut columns,
        500.0,
        ColumnMode::Force,
        DistributeOpts {
            force_idx: None,
            allow_bleed: true,
        },
    );

    // 800px of content in a 500px viewport with bleed: nothing shrinks.
    for col in &columns {
        assert_eq!(col.width, 200.0);
    }
}

// =============================================================================
// FLEX MODE
// =============================================================================

#[test]
fn test_flex_proportional_distribution() {
    let specs = vec![
        ColumnSpec::named("A").width(100.0).flex_grow(1.0),
        ColumnSpec::named("B").width(100.0).flex_grow(2.0),
        ColumnSpec::named("C").width(100.0).flex_grow(1.0),
    ];
    let mut columns = normalize_columns(&specs);
    distribute_widths(
        &mut columns,
        700.0,
        ColumnMode::Flex,
        DistributeOpts::default(),
    );

    // Leftover 400 split 1:2:1.
    assert!((columns[0].width - 200.0).abs() < 0.01);
    assert!((columns[1].width - 300.0).abs() < 0.01);
    assert!((columns[2].width - 200.0).abs() < 0.01);
}

#[test]
fn test_flex_zero_grow_contributes_base_width_only() {
    let specs = vec![
        ColumnSpec::named("Static").width(120.0),
        ColumnSpec::named("Grower").width(100.0).flex_grow(1.0),
    ];
    let mut columns = normalize_columns(&specs);
    distribute_widths(
        &mut columns,
        520.0,
        ColumnMode::Flex,
        DistributeOpts::default(),
    );

    assert_eq!(columns[0].width, 120.0, "flex_grow=0 never grows");
    assert!((columns[1].width - 400.0).abs() < 0.01);
}

#[test]
fn test_flex_leftover_proportionality_property() {
    // For several viewport widths, the growth ratio must track flex_grow.
    for available in [400.0_f32, 640.0, 1024.0] {
        let specs = vec![
            ColumnSpec::named("A").width(100.0).flex_grow(1.0),
            ColumnSpec::named("B").width(100.0).flex_grow(3.0),
        ];
        let mut columns = normalize_columns(&specs);
        distribute_widths(
            &mut columns,
            available,
            ColumnMode::Flex,
            DistributeOpts::default(),
        );

        let grow_a = columns[0].width - 100.0;
        let grow_b = columns[1].width - 100.0;
        if grow_a > 0.0 {
            assert!(
                (grow_b / grow_a - 3.0).abs() < 0.01,
                "available {available}: growth ratio {}",
                grow_b / grow_a
            );
        }
    }
}

// =============================================================================
// STANDARD MODE + DEGENERATE INPUTS
// =============================================================================

#[test]
fn test_standard_keeps_declared_widths() {
    let mut columns = uniform_columns(3, 90.0);
    distribute_widths(
        &mut columns,
        2000.0,
        ColumnMode::Standard,
        DistributeOpts::default(),
    );
    for col in &columns {
        assert_eq!(col.width, 90.0);
    }
}

#[test_case(0.0 ; "zero width")]
#[test_case(-100.0 ; "negative width")]
#[test_case(f32::NAN ; "nan width")]
#[test_case(f32::INFINITY ; "infinite width")]
fn test_unmeasured_viewport_is_deferred(available: f32) {
    let mut columns = uniform_columns(2, 100.0);
    distribute_widths(
        &mut columns,
        available,
        ColumnMode::Force,
        DistributeOpts::default(),
    );
    assert_eq!(columns[0].width, 100.0);
    assert_eq!(columns[1].width, 100.0);
}

#[test]
fn test_no_eligible_columns_leaves_widths() {
    let mut specs = vec![
        ColumnSpec::named("A").width(100.0),
        ColumnSpec::named("B").width(100.0),
    ];
    for spec in &mut specs {
        spec.can_auto_resize = Some(false);
    }
    let mut columns = normalize_columns(&specs);
    distribute_widths(
        &mut columns,
        900.0,
        ColumnMode::Force,
        DistributeOpts::default(),
    );
    // No redistribution target: widths untouched, total underflows.
    assert_eq!(columns_total_width(&columns), 200.0);
}
