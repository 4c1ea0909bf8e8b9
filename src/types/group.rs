//! Grouped-row types.

use serde::Serialize;
use serde_json::Value;

/// One named group of rows: the value found at the group key, plus the
/// member rows in their original relative order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedRows {
    /// Value at the group key (absent keys group under `Value::Null`).
    pub group_id: Value,
    /// Member rows, original order preserved.
    pub rows: Vec<Value>,
}
