//! Flattening of nested records into dotted paths

use serde_json::{Map, Value};

use super::value::{FlatValue, FlatView};

/// Separator between the keys of a flattened path
pub const PATH_SEPARATOR: char = '.';

/// Flatten a record into a single level view.
///
/// Nested objects are expanded under `parent.child` paths and the parent key
/// itself is dropped. `null` is a leaf and stays at its path. Arrays are not
/// expanded and end up as structured values.
pub fn flatten(record: &Map<String, Value>) -> FlatView {
    let mut view = FlatView::new();
    flatten_into(&mut view, record, None);
    view
}

/// Flatten any JSON value. Values that are not objects contribute nothing.
pub fn flatten_value(value: &Value) -> FlatView {
    match value {
        Value::Object(record) => flatten(record),
        _ => FlatView::new(),
    }
}

fn flatten_into(view: &mut FlatView, record: &Map<String, Value>, prefix: Option<&str>) {
    for (key, value) in record {
        let path = match prefix {
            Some(prefix) => format!("{prefix}{PATH_SEPARATOR}{key}"),
            None => key.clone(),
        };

        match value {
            // null must never be descended into
            Value::Null => view.insert(path, FlatValue::Scalar(Value::Null)),
            Value::Object(child) => flatten_into(view, child, Some(&path)),
            leaf => view.insert(path, FlatValue::from_json(leaf.clone())),
        }
    }
}
