use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A dotted key into a translation resource, referenced as `{{t.<key>}}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TranslationKey {
    pub name: String,
}

/// Flattens a nested translation resource into dotted keys.
///
/// Leaves (strings, numbers, anything non-object) become keys; nested objects
/// join their path with dots. Non-object roots yield nothing, matching the
/// engine's degrade-don't-fail posture toward malformed input.
pub fn flatten_translation_object(resource: &Value) -> Vec<TranslationKey> {
    let mut keys = Vec::new();
    if let Value::Object(map) = resource {
        for (name, child) in map {
            collect(child, name, &mut keys);
        }
    }
    keys.sort_by(|a, b| a.name.cmp(&b.name));
    keys
}

fn collect(value: &Value, path: &str, keys: &mut Vec<TranslationKey>) {
    match value {
        Value::Object(map) => {
            for (name, child) in map {
                collect(child, &format!("{path}.{name}"), keys);
            }
        }
        _ => keys.push(TranslationKey {
            name: path.to_string(),
        }),
    }
}
