//! Comparator-driven row sorting.
//!
//! Descriptors are applied as a compound order: the first descriptor is
//! primary and ties fall through to the next. The sort is stable, so rows
//! comparing equal under every descriptor keep their original relative
//! order — re-sorts must not jitter untouched rows in grouped or
//! paginated views.

use std::cmp::Ordering;

use serde_json::Value;

use crate::types::{Column, SortDescriptor, SortDirection};

/// Sort rows by the given descriptors, resolving each descriptor's column
/// by prop. Returns a new ordered collection; the input is never mutated.
///
/// A descriptor naming an unknown prop is ignored rather than fatal. The
/// column's custom comparator wins over the default one. An empty
/// descriptor set returns the rows unchanged.
pub fn sort_rows(rows: &[Value], columns: &[Column], sorts: &[SortDescriptor]) -> Vec<Value> {
    let mut out: Vec<Value> = rows.to_vec();
    if sorts.is_empty() {
        return out;
    }

    // Resolve descriptors to columns once, not per comparison.
    let resolved: Vec<(&SortDescriptor, &Column)> = sorts
        .iter()
        .filter_map(|d| {
            columns
                .iter()
                .find(|c| c.prop_string().as_deref() == Some(d.prop.as_str()))
                .map(|c| (d, c))
        })
        .collect();
    if resolved.is_empty() {
        return out;
    }

    out.sort_by(|a, b| {
        for (descriptor, column) in &resolved {
            let va = column.value(a);
            let vb = column.value(b);
            let ord = match &column.comparator {
                Some(cmp) => {
                    // Custom comparators see resolved values; absent cells
                    // are handed to them as nulls.
                    let null = Value::Null;
                    cmp(va.unwrap_or(&null), vb.unwrap_or(&null))
                }
                None => compare_values(va, vb),
            };
            let ord = match descriptor.dir {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    });
    out
}

/// Default cell comparator: absent/null sorts before defined values, two
/// numbers compare numerically, everything else falls back to string
/// coercion.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());

    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(va), Some(vb)) => match (va.as_f64(), vb.as_f64()) {
            (Some(na), Some(nb)) => na.partial_cmp(&nb).unwrap_or(Ordering::Equal),
            _ => coerce_string(va).cmp(&coerce_string(vb)),
        },
    }
}

fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
