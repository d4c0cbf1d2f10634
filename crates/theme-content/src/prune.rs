//! Removal of disabled configuration nodes
//!
//! A section or block is excluded from published output when its own
//! `disabled` attribute is boolean `true`. The check is one level deep per
//! call: a kept entry's nested disabled flags stay exactly as they were.

use serde_json::{Map, Value};

/// True when a value is an object carrying its own `disabled: true`.
///
/// Only a strict boolean `true` counts; `"true"`, `1`, or a missing flag
/// keep the entry.
fn is_disabled(value: &Value) -> bool {
    match value {
        Value::Object(map) => matches!(map.get("disabled"), Some(Value::Bool(true))),
        _ => false,
    }
}

/// Return a copy of `entries` without the entries disabled at this level.
///
/// Surviving entries keep their insertion order and are carried over
/// unchanged, nested flags included. Non-object values are never removal
/// candidates. The input is not mutated.
pub fn remove_disabled_entries(entries: &Map<String, Value>) -> Map<String, Value> {
    entries
        .iter()
        .filter(|(_, value)| !is_disabled(value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Prune a template document for publishing.
///
/// Disabled sections are dropped whole; each kept section loses its
/// disabled blocks. A top-level `blocks` mapping is pruned the same way.
/// Order sequences, settings, and every other entry pass through
/// unchanged. Non-object documents are returned as-is.
pub fn prune_template(document: &Value) -> Value {
    let Value::Object(root) = document else {
        return document.clone();
    };

    let mut pruned = Map::new();
    for (key, value) in root {
        match (key.as_str(), value) {
            ("sections", Value::Object(sections)) => {
                pruned.insert(key.clone(), Value::Object(prune_sections(sections)));
            }
            ("blocks", Value::Object(blocks)) => {
                pruned.insert(key.clone(), Value::Object(remove_disabled_entries(blocks)));
            }
            _ => {
                pruned.insert(key.clone(), value.clone());
            }
        }
    }
    Value::Object(pruned)
}

/// Drop disabled sections, then prune each survivor's `blocks` mapping.
fn prune_sections(sections: &Map<String, Value>) -> Map<String, Value> {
    remove_disabled_entries(sections)
        .into_iter()
        .map(|(name, section)| {
            let section = match section {
                Value::Object(mut fields) => {
                    if let Some(Value::Object(blocks)) = fields.get("blocks") {
                        let kept = remove_disabled_entries(blocks);
                        fields.insert("blocks".to_string(), Value::Object(kept));
                    }
                    Value::Object(fields)
                }
                other => other,
            };
            (name, section)
        })
        .collect()
}
