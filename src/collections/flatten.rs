//! Recursive flattening of nested lists.

use serde_json::Value;

use crate::types::Nested;

/// Flattens an arbitrarily nested list into a single list, preserving left-to-right order.
pub fn flatten<T: Clone>(nested: &Nested<T>) -> Vec<T> {
    let mut out = Vec::new();
    flatten_into(nested, &mut out);
    out
}

fn flatten_into<T: Clone>(nested: &Nested<T>, out: &mut Vec<T>) {
    match nested {
        Nested::Item(v) => out.push(v.clone()),
        Nested::List(items) => {
            for item in items {
                flatten_into(item, out);
            }
        }
    }
}

/// Flattens nested JSON arrays. A non-array value flattens to a single-element list.
pub fn flatten_json(value: &Value) -> Vec<Value> {
    let mut out = Vec::new();
    flatten_json_into(value, &mut out);
    out
}

fn flatten_json_into(value: &Value, out: &mut Vec<Value>) {
    match value {
        Value::Array(items) => {
            for item in items {
                flatten_json_into(item, out);
            }
        }
        other => out.push(other.clone()),
    }
}
