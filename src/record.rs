//! Structural access to caller records.
//!
//! The renderer never looks inside a record on its own. Each column owns a
//! render function; the [`default_render`] function is what a column uses
//! when none was assigned, and it goes through the [`Record`] view below.
//!
//! ```rust
//! use rsttable::record::default_render;
//! use serde_json::json;
//!
//! let row = json!({"name": "John", "age": 20});
//! assert_eq!(default_render(&row, "name"), "John");
//! assert_eq!(default_render(&row, "age"), "20");
//! assert_eq!(default_render(&row, "missing"), "");
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;

use serde_json::{Map, Value};

/// A record that can be looked up by column name.
///
/// `field` returns `None` when the record has no value for `name`, or when
/// the record does not have a key/value shape at all. Callers turn `None`
/// into an empty cell.
pub trait Record {
    /// Returns the display string of the value stored under `name`.
    fn field(&self, name: &str) -> Option<String>;
}

/// Renders `column` of `record` for display, or `""` if the record has no
/// such value.
pub fn default_render<R: Record + ?Sized>(record: &R, column: &str) -> String {
    record.field(column).unwrap_or_default()
}

fn value_to_plain_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl Record for Value {
    fn field(&self, name: &str) -> Option<String> {
        match self {
            Value::Object(map) => map.field(name),
            _ => None,
        }
    }
}

impl Record for Map<String, Value> {
    fn field(&self, name: &str) -> Option<String> {
        self.get(name).map(value_to_plain_string)
    }
}

impl<V: Display> Record for HashMap<String, V> {
    fn field(&self, name: &str) -> Option<String> {
        self.get(name).map(ToString::to_string)
    }
}

impl<V: Display> Record for BTreeMap<String, V> {
    fn field(&self, name: &str) -> Option<String> {
        self.get(name).map(ToString::to_string)
    }
}

impl<T: Record + ?Sized> Record for &T {
    fn field(&self, name: &str) -> Option<String> {
        (**self).field(name)
    }
}

impl<T: Record + ?Sized> Record for Box<T> {
    fn field(&self, name: &str) -> Option<String> {
        (**self).field(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_scalars() {
        let row = json!({"s": "text", "n": 42, "f": 1.5, "b": true, "z": null});
        assert_eq!(default_render(&row, "s"), "text");
        assert_eq!(default_render(&row, "n"), "42");
        assert_eq!(default_render(&row, "f"), "1.5");
        assert_eq!(default_render(&row, "b"), "true");
        assert_eq!(default_render(&row, "z"), "");
    }

    #[test]
    fn test_json_nested_values_render_compact() {
        let row = json!({"tags": ["a", "b"], "meta": {"k": 1}});
        assert_eq!(default_render(&row, "tags"), r#"["a","b"]"#);
        assert_eq!(default_render(&row, "meta"), r#"{"k":1}"#);
    }

    #[test]
    fn test_non_object_record_is_empty() {
        // Not a key/value record: every column degrades to an empty cell.
        assert_eq!(default_render(&json!([1, 2, 3]), "name"), "");
        assert_eq!(default_render(&json!("John"), "name"), "");
        assert_eq!(default_render(&Value::Null, "name"), "");
    }

    #[test]
    fn test_missing_key_is_empty() {
        let row = json!({"name": "John"});
        assert_eq!(default_render(&row, "age"), "");
    }

    #[test]
    fn test_std_maps() {
        let mut hash: HashMap<String, u32> = HashMap::new();
        hash.insert("age".to_string(), 30);
        assert_eq!(default_render(&hash, "age"), "30");
        assert_eq!(default_render(&hash, "name"), "");

        let mut tree: BTreeMap<String, &str> = BTreeMap::new();
        tree.insert("name".to_string(), "Jane");
        assert_eq!(default_render(&tree, "name"), "Jane");
    }

    #[test]
    fn test_reference_and_box_forward() {
        let row = json!({"name": "Joe"});
        let boxed: Box<Value> = Box::new(row.clone());
        assert_eq!(default_render(&&row, "name"), "Joe");
        assert_eq!(default_render(&boxed, "name"), "Joe");
    }
}
