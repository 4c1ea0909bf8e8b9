//! Sort descriptors and the cyclic direction state machine.

use serde::Serialize;

/// Sort direction for one descriptor. `None`-direction descriptors are
/// dropped from the active set rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Cycle to the next direction: unsorted -> asc -> desc -> unsorted.
    pub fn next(current: Option<SortDirection>) -> Option<SortDirection> {
        match current {
            None => Some(SortDirection::Asc),
            Some(SortDirection::Asc) => Some(SortDirection::Desc),
            Some(SortDirection::Desc) => None,
        }
    }
}

/// Whether sort requests replace the descriptor set or append to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortType {
    /// A sort request replaces all previous descriptors.
    #[default]
    Single,
    /// A sort request appends or updates the column's descriptor; later
    /// descriptors break ties among earlier ones.
    Multi,
}

/// One entry of an ordered sort specification, matched to columns by prop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortDescriptor {
    /// String form of the column prop this descriptor targets.
    pub prop: String,
    /// Direction to apply.
    pub dir: SortDirection,
}

impl SortDescriptor {
    pub fn new(prop: &str, dir: SortDirection) -> Self {
        Self {
            prop: prop.to_string(),
            dir,
        }
    }

    /// Ascending descriptor shorthand.
    pub fn asc(prop: &str) -> Self {
        Self::new(prop, SortDirection::Asc)
    }

    /// Descending descriptor shorthand.
    pub fn desc(prop: &str) -> Self {
        Self::new(prop, SortDirection::Desc)
    }
}

/// Apply a sort request for `prop` to an existing descriptor set, honoring
/// the sort type. Returns the new descriptor set.
///
/// Single mode replaces the whole set with the column's next cycle state.
/// Multi mode cycles only the targeted column's entry, keeping the others
/// as tie-breakers in their existing order; a freshly sorted column is
/// appended at the end (lowest priority).
pub fn apply_sort_request(
    sorts: &[SortDescriptor],
    prop: &str,
    sort_type: SortType,
) -> Vec<SortDescriptor> {
    let current = sorts.iter().find(|d| d.prop == prop).map(|d| d.dir);
    let next = SortDirection::next(current);

    match sort_type {
        SortType::Single => match next {
            Some(dir) => vec![SortDescriptor::new(prop, dir)],
            None => Vec::new(),
        },
        SortType::Multi => {
            let mut out: Vec<SortDescriptor> =
                sorts.iter().filter(|d| d.prop != prop).cloned().collect();
            match next {
                Some(dir) => {
                    if let Some(pos) = sorts.iter().position(|d| d.prop == prop) {
                        // Preserve the column's tie-break priority when cycling.
                        let pos = pos.min(out.len());
                        out.insert(pos, SortDescriptor::new(prop, dir));
                    } else {
                        out.push(SortDescriptor::new(prop, dir));
                    }
                }
                None => {}
            }
            out
        }
    }
}
