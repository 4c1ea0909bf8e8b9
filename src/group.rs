//! Row grouping by a key property.

use serde_json::Value;

use crate::prop::{ColumnProp, PropPath};
use crate::types::GroupedRows;

/// Partition rows into named groups by the value at `key`.
///
/// Group order is first-seen; row order within a group is the original
/// order. Rows where the key is missing group under `Value::Null`.
pub fn group_rows_by(rows: &[Value], key: &str) -> Vec<GroupedRows> {
    let path = PropPath::compile(&ColumnProp::from(key));
    let mut groups: Vec<GroupedRows> = Vec::new();

    for row in rows {
        let group_id = path.resolve(row).cloned().unwrap_or(Value::Null);
        match groups.iter_mut().find(|g| g.group_id == group_id) {
            Some(group) => group.rows.push(row.clone()),
            None => groups.push(GroupedRows {
                group_id,
                rows: vec![row.clone()],
            }),
        }
    }

    groups
}
