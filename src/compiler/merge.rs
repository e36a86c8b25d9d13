//! Deep merge of override fragments.
//!
//! The downstream engine applies array entries with a shallow per-field
//! overwrite, so two fragments touching sibling fields of the same pipeline
//! node would clobber each other if applied in sequence. Built-in tasks are
//! compiled through this merge instead: every contribution folds into one
//! object and sibling fields survive.

use serde_json::map::Entry;
use serde_json::{Map, Value};

/// Folds a list of fragments into a single object.
///
/// Plain objects merge recursively; arrays, scalars and null are
/// last-write-wins. Fragments that are not objects are skipped, so the
/// fold is total and never fails.
pub fn deep_merge(fragments: impl IntoIterator<Item = Value>) -> Value {
    let mut merged = Map::new();
    for fragment in fragments {
        if let Value::Object(object) = fragment {
            merge_object(&mut merged, object);
        }
    }
    Value::Object(merged)
}

fn merge_object(target: &mut Map<String, Value>, incoming: Map<String, Value>) {
    for (key, value) in incoming {
        match target.entry(key) {
            Entry::Occupied(mut slot) => match (slot.get_mut(), value) {
                (Value::Object(existing), Value::Object(incoming)) => {
                    merge_object(existing, incoming);
                }
                (existing, value) => {
                    *existing = value;
                }
            },
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
    }
}
