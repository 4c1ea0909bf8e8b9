//! Column width distribution.
//!
//! Three formulas, selected by [`ColumnMode`]:
//! - `Standard`: columns keep their declared widths, no redistribution.
//! - `Flex`: leftover viewport space is split proportionally to each
//!   column's flex-grow factor.
//! - `Force`: widths are stretched/shrunk so the total fills the
//!   viewport exactly, within min/max bounds.
//!
//! All passes mutate widths in place and are total: an unmeasured
//! viewport (zero or non-finite width) makes the call a no-op, and an
//! infeasible target leaves columns at their bounds with the total
//! allowed to overflow the viewport.

use crate::types::{Column, ColumnMode, FORCE_FILL_DEFAULT_WIDTH};

/// Per-call options for width distribution.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistributeOpts {
    /// Index of a column the user just resized. Force mode keeps its new
    /// width fixed and reflows only the columns after it.
    pub force_idx: Option<usize>,
    /// When the content is wider than the viewport, keep the overflow
    /// (horizontal scrollbar) instead of compressing columns.
    pub allow_bleed: bool,
}

/// Total width of a column set.
pub fn columns_total_width(columns: &[Column]) -> f32 {
    columns.iter().map(|c| c.width).sum()
}

/// Distribute column widths for the given mode. Mutates widths in place.
pub fn distribute_widths(
    columns: &mut [Column],
    available_width: f32,
    mode: ColumnMode,
    opts: DistributeOpts,
) {
    // Viewport not yet measured: defer, never divide by an unknown.
    if !available_width.is_finite() || available_width <= 0.0 {
        return;
    }

    match mode {
        ColumnMode::Standard => {}
        ColumnMode::Flex => adjust_column_widths(columns, available_width),
        ColumnMode::Force => force_fill_column_widths(columns, available_width, opts),
    }
}

/// Flex distribution: each auto-resizable column grows by
/// `flex_grow / Σ(flex_grow)` of the leftover space. Columns with a zero
/// factor keep their base width and never grow.
fn adjust_column_widths(columns: &mut [Column], available_width: f32) {
    let total_flex: f32 = columns
        .iter()
        .filter(|c| c.can_auto_resize)
        .map(|c| c.flex_grow)
        .sum();
    if total_flex <= 0.0 {
        return;
    }

    let leftover = available_width - columns_total_width(columns);
    if leftover <= 0.0 {
        return;
    }

    // Columns that hit a max bound give their surplus back; re-split the
    // remainder over the still-growable columns, left to right.
    let mut growable: Vec<usize> = (0..columns.len())
        .filter(|&i| {
            columns
                .get(i)
                .is_some_and(|c| c.can_auto_resize && c.flex_grow > 0.0)
        })
        .collect();
    let mut remaining = leftover;

    while remaining > f32::EPSILON && !growable.is_empty() {
        let flex_sum: f32 = growable
            .iter()
            .filter_map(|&i| columns.get(i).map(|c| c.flex_grow))
            .sum();
        if flex_sum <= 0.0 {
            break;
        }
        let per_point = remaining / flex_sum;
        remaining = 0.0;
        let mut still_growable = Vec::with_capacity(growable.len());

        for &i in &growable {
            let Some(col) = columns.get_mut(i) else {
                continue;
            };
            let proposed = col.width + col.flex_grow * per_point;
            let clamped = col.clamp_width(proposed);
            if proposed > clamped {
                // Hit the max bound: keep the surplus for the next pass.
                remaining += proposed - clamped;
                col.width = clamped;
            } else {
                col.width = clamped;
                still_growable.push(i);
            }
        }

        if still_growable.len() == growable.len() {
            break;
        }
        growable = still_growable;
    }
}

/// Force-fill distribution: the delta between the current total and the
/// target is split evenly over the eligible columns, respecting min/max
/// bounds. A column clamped during a pass is frozen out and the shortfall
/// re-split over the remaining columns on the next pass, left to right.
fn force_fill_column_widths(columns: &mut [Column], available_width: f32, opts: DistributeOpts) {
    // Width-less columns enter the distribution at the force default.
    for col in columns.iter_mut() {
        if col.width <= 0.0 {
            col.width = FORCE_FILL_DEFAULT_WIDTH;
        }
    }

    let start = opts.force_idx.map_or(0, |idx| idx.saturating_add(1));
    let mut eligible: Vec<usize> = (start..columns.len())
        .filter(|&i| {
            columns
                .get(i)
                .is_some_and(|c| c.can_auto_resize && c.old_width.is_none())
        })
        .collect();

    let total = columns_total_width(columns);
    if opts.allow_bleed && total > available_width {
        // Content is wider than the viewport and bleed is allowed: keep
        // the overflow for a horizontal scrollbar instead of compressing.
        return;
    }

    // Tolerance of one pixel per eligible column, matching the documented
    // rounding guarantee.
    let tolerance = (eligible.len().max(1)) as f32;

    loop {
        if eligible.is_empty() {
            break;
        }
        let delta = available_width - columns_total_width(columns);
        if delta.abs() < 0.5 {
            break;
        }
        let per_column = delta / eligible.len() as f32;
        let mut clamped_out = Vec::new();

        for &i in &eligible {
            let Some(col) = columns.get_mut(i) else {
                continue;
            };
            let proposed = col.width + per_column;
            let clamped = col.clamp_width(proposed);
            col.width = clamped;
            if (clamped - proposed).abs() > f32::EPSILON {
                clamped_out.push(i);
            }
        }

        if clamped_out.is_empty() {
            // Fully distributed; residue is only float noise.
            break;
        }
        eligible.retain(|i| !clamped_out.contains(i));

        let residue = (available_width - columns_total_width(columns)).abs();
        if residue <= tolerance {
            break;
        }
    }
}
