//! Remote-wins document merging

use serde_json::{Map, Value};

/// Merge a local and a remote document.
///
/// The result carries the union of keys from both sides at every mapping
/// level: sub-mappings present on both sides merge recursively, and on a
/// leaf collision the remote value supersedes the local one. Keys unique
/// to either side are always retained, so merging never drops
/// information.
///
/// Local keys keep their positions; keys unique to the remote side are
/// appended in remote order, making the result deterministic for a given
/// input pair.
pub fn merge_documents(local: &Value, remote: &Value) -> Value {
    match (local, remote) {
        (Value::Object(local_map), Value::Object(remote_map)) => {
            let mut merged: Map<String, Value> = local_map.clone();
            for (key, remote_value) in remote_map {
                let value = match local_map.get(key) {
                    Some(local_value) => merge_documents(local_value, remote_value),
                    None => remote_value.clone(),
                };
                merged.insert(key.clone(), value);
            }
            Value::Object(merged)
        }
        // Anything but a pair of mappings is a leaf collision: remote wins.
        (_, remote_value) => remote_value.clone(),
    }
}
