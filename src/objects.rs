//! Merging keyed mappings.
//!
//! [`extend`] and [`defaults`] work on any [`KeyedMap`] (`HashMap`, `BTreeMap`,
//! `serde_json::Map`). [`extend_json`] and [`defaults_json`] accept `serde_json::Value`s and
//! reject anything that is not a JSON object.

use serde_json::{Map, Value};

use crate::error::{UnderbarError, UnderbarResult};
use crate::types::KeyedMap;

/// Copies every entry of each source into `target`, in order, and returns `target`.
///
/// Later sources overwrite earlier ones and any pre-existing key on `target`.
pub fn extend<'t, M>(target: &'t mut M, sources: &[&M]) -> &'t mut M
where
    M: KeyedMap,
    M::Key: Clone,
    M::Value: Clone,
{
    for source in sources {
        for (key, value) in source.pairs() {
            target.put(key.clone(), value.clone());
        }
    }
    target
}

/// Like [`extend`], but never overwrites a key that is already present on `target`,
/// including keys filled in by an earlier source in the same call.
pub fn defaults<'t, M>(target: &'t mut M, sources: &[&M]) -> &'t mut M
where
    M: KeyedMap,
    M::Key: Clone,
    M::Value: Clone,
{
    for source in sources {
        for (key, value) in source.pairs() {
            if !target.contains(key) {
                target.put(key.clone(), value.clone());
            }
        }
    }
    target
}

/// [`extend`] for JSON objects.
///
/// Returns [`UnderbarError::NotAnObject`] if `target` or any source is not a JSON object; in
/// that case `target` is left untouched.
pub fn extend_json<'t>(target: &'t mut Value, sources: &[&Value]) -> UnderbarResult<&'t mut Value> {
    let sources = source_objects(sources)?;
    let _ = extend(target_object(target)?, &sources);
    Ok(target)
}

/// [`defaults`] for JSON objects. Errors as [`extend_json`].
pub fn defaults_json<'t>(target: &'t mut Value, sources: &[&Value]) -> UnderbarResult<&'t mut Value> {
    let sources = source_objects(sources)?;
    let _ = defaults(target_object(target)?, &sources);
    Ok(target)
}

fn target_object(target: &mut Value) -> UnderbarResult<&mut Map<String, Value>> {
    let found = json_kind(target);
    target
        .as_object_mut()
        .ok_or(UnderbarError::NotAnObject { found })
}

fn source_objects<'s>(sources: &[&'s Value]) -> UnderbarResult<Vec<&'s Map<String, Value>>> {
    sources
        .iter()
        .map(|s| {
            s.as_object().ok_or(UnderbarError::NotAnObject {
                found: json_kind(s),
            })
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
