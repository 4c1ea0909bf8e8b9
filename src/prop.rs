//! Utilities for parsing column property paths and resolving row values.
//!
//! A column addresses its value inside an opaque row record by a "prop":
//! either a string path (`"name"`, `"address.city"`, `"tags.0"`) or a bare
//! numeric index (`0` is a valid prop, distinct from an absent one). Paths
//! are parsed once per column and cached; resolution tolerates missing
//! intermediate objects and yields an absent value instead of an error.

use serde_json::Value;

/// A single step of a parsed property path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object key lookup.
    Key(String),
    /// Array index lookup.
    Index(usize),
}

/// A column property: string path or numeric index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnProp {
    /// Dotted string path, e.g. `"address.city"`.
    Path(String),
    /// Numeric index prop; `0` is valid and distinct from no prop at all.
    Index(usize),
}

impl ColumnProp {
    /// Render the prop as the string form used for display-name derivation
    /// and sort-descriptor matching.
    pub fn as_display_string(&self) -> String {
        match self {
            ColumnProp::Path(p) => p.clone(),
            ColumnProp::Index(i) => i.to_string(),
        }
    }
}

impl From<&str> for ColumnProp {
    fn from(s: &str) -> Self {
        ColumnProp::Path(s.to_string())
    }
}

impl From<String> for ColumnProp {
    fn from(s: String) -> Self {
        ColumnProp::Path(s)
    }
}

impl From<usize> for ColumnProp {
    fn from(i: usize) -> Self {
        ColumnProp::Index(i)
    }
}

/// A pre-parsed property path, cached on the column so row access does not
/// re-split the string for every cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PropPath {
    segments: Vec<PathSegment>,
}

impl PropPath {
    /// Compile a [`ColumnProp`] into its segment list.
    pub fn compile(prop: &ColumnProp) -> Self {
        let segments = match prop {
            ColumnProp::Index(i) => vec![PathSegment::Index(*i)],
            ColumnProp::Path(path) => path
                .split('.')
                .filter(|s| !s.is_empty())
                .map(|s| match s.parse::<usize>() {
                    Ok(i) => PathSegment::Index(i),
                    Err(_) => PathSegment::Key(s.to_string()),
                })
                .collect(),
        };
        Self { segments }
    }

    /// Resolve the path against a row.
    ///
    /// Returns `None` when any intermediate step is missing or has the
    /// wrong shape; malformed paths are a data condition, not an error.
    pub fn resolve<'a>(&self, row: &'a Value) -> Option<&'a Value> {
        let mut current = row;
        for segment in &self.segments {
            current = match segment {
                PathSegment::Key(key) => current.get(key.as_str())?,
                PathSegment::Index(i) => match current {
                    // A numeric segment addresses arrays by position but
                    // also objects keyed by the digit string ({"0": ...}).
                    Value::Array(_) => current.get(*i)?,
                    _ => current.get(i.to_string().as_str())?,
                },
            };
        }
        Some(current)
    }

    /// True when the path has no segments (empty prop string).
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Convert a display name to a camel-cased prop: `"Max Height"` -> `"maxHeight"`.
pub fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for ch in name.chars() {
        if ch.is_whitespace() || ch == '_' || ch == '-' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else if out.is_empty() {
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Convert a camel-cased prop to a display name: `"maxHeight"` -> `"Max Height"`.
pub fn de_camel_case(prop: &str) -> String {
    let mut out = String::with_capacity(prop.len() + 4);
    for (i, ch) in prop.chars().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            out.push(' ');
            out.push(ch);
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_simple_key() {
        let row = json!({"name": "Ada"});
        let path = PropPath::compile(&ColumnProp::from("name"));
        assert_eq!(path.resolve(&row), Some(&json!("Ada")));
    }

    #[test]
    fn test_resolve_nested_path() {
        let row = json!({"address": {"city": "Oslo"}});
        let path = PropPath::compile(&ColumnProp::from("address.city"));
        assert_eq!(path.resolve(&row), Some(&json!("Oslo")));
    }

    #[test]
    fn test_resolve_array_index() {
        let row = json!({"tags": ["a", "b"]});
        let path = PropPath::compile(&ColumnProp::from("tags.1"));
        assert_eq!(path.resolve(&row), Some(&json!("b")));
    }

    #[test]
    fn test_numeric_prop_zero_is_valid() {
        let row = json!(["first", "second"]);
        let path = PropPath::compile(&ColumnProp::from(0usize));
        assert_eq!(path.resolve(&row), Some(&json!("first")));
    }

    #[test]
    fn test_numeric_prop_against_object() {
        let row = json!({"0": "keyed"});
        let path = PropPath::compile(&ColumnProp::from(0usize));
        assert_eq!(path.resolve(&row), Some(&json!("keyed")));
    }

    #[test]
    fn test_missing_intermediate_is_absent_not_error() {
        let row = json!({"address": null});
        let path = PropPath::compile(&ColumnProp::from("address.city.zip"));
        assert_eq!(path.resolve(&row), None);
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("Max Height"), "maxHeight");
        assert_eq!(camel_case("Name"), "name");
        assert_eq!(camel_case("first-name"), "firstName");
        assert_eq!(camel_case("already camelish Words"), "alreadyCamelishWords");
    }

    #[test]
    fn test_de_camel_case() {
        assert_eq!(de_camel_case("maxHeight"), "Max Height");
        assert_eq!(de_camel_case("name"), "Name");
        assert_eq!(de_camel_case("rowHeight"), "Row Height");
    }
}
