use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;

/// The JSON-Schema primitive type keywords the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
    Null,
}

impl SchemaType {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "string" => Some(SchemaType::String),
            "number" => Some(SchemaType::Number),
            "integer" => Some(SchemaType::Integer),
            "boolean" => Some(SchemaType::Boolean),
            "object" => Some(SchemaType::Object),
            "array" => Some(SchemaType::Array),
            "null" => Some(SchemaType::Null),
            _ => None,
        }
    }

    pub fn as_keyword(&self) -> &'static str {
        match self {
            SchemaType::String => "string",
            SchemaType::Number => "number",
            SchemaType::Integer => "integer",
            SchemaType::Boolean => "boolean",
            SchemaType::Object => "object",
            SchemaType::Array => "array",
            SchemaType::Null => "null",
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_keyword())
    }
}

/// A normalized JSON-Schema node.
///
/// Raw schema fragments arrive from the editor as loosely-typed JSON; this
/// model resolves them into a closed set of kinds so the flattening and diff
/// routines can match exhaustively instead of probing properties. A
/// `type: [T, "null"]` union is normalized to `Nullable` wrapping the non-null
/// primary type. Anything the normalizer cannot make sense of becomes
/// `Unknown`, which simply contributes no nested properties.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    Object {
        properties: AHashMap<String, SchemaNode>,
        /// Sorted property names; order in the source document is not
        /// semantically meaningful.
        required: Vec<String>,
    },
    Array {
        items: Box<SchemaNode>,
    },
    Primitive(SchemaType),
    Nullable(Box<SchemaNode>),
    Unknown,
}

impl SchemaNode {
    /// Normalizes a raw JSON-Schema fragment. Total: malformed input maps to
    /// `Unknown` rather than failing, so one bad property never blocks the
    /// rest of a catalog build.
    pub fn from_value(value: &Value) -> SchemaNode {
        let Some(obj) = value.as_object() else {
            return SchemaNode::Unknown;
        };

        let (primary, nullable) = match obj.get("type") {
            Some(Value::String(keyword)) => (SchemaType::from_keyword(keyword), false),
            Some(Value::Array(keywords)) => {
                let mut primary = None;
                let mut nullable = false;
                for keyword in keywords.iter().filter_map(Value::as_str) {
                    match SchemaType::from_keyword(keyword) {
                        Some(SchemaType::Null) => nullable = true,
                        Some(ty) if primary.is_none() => primary = Some(ty),
                        _ => {}
                    }
                }
                (primary, nullable)
            }
            // An untyped fragment with `properties` is treated as an object.
            None if obj.contains_key("properties") => (Some(SchemaType::Object), false),
            _ => (None, false),
        };

        let node = match primary {
            Some(SchemaType::Object) => {
                let properties = obj
                    .get("properties")
                    .and_then(Value::as_object)
                    .map(|props| {
                        props
                            .iter()
                            .map(|(name, fragment)| (name.clone(), SchemaNode::from_value(fragment)))
                            .collect()
                    })
                    .unwrap_or_default();
                let mut required: Vec<String> = obj
                    .get("required")
                    .and_then(Value::as_array)
                    .map(|names| {
                        names
                            .iter()
                            .filter_map(Value::as_str)
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default();
                required.sort();
                required.dedup();
                SchemaNode::Object {
                    properties,
                    required,
                }
            }
            Some(SchemaType::Array) => {
                let items = obj
                    .get("items")
                    .map(SchemaNode::from_value)
                    .unwrap_or(SchemaNode::Unknown);
                SchemaNode::Array {
                    items: Box::new(items),
                }
            }
            Some(ty) => SchemaNode::Primitive(ty),
            None => SchemaNode::Unknown,
        };

        if nullable {
            SchemaNode::Nullable(Box::new(node))
        } else {
            node
        }
    }

    /// Re-serializes the node into a raw JSON-Schema fragment. The inverse of
    /// [`SchemaNode::from_value`] modulo key ordering.
    pub fn to_value(&self) -> Value {
        match self {
            SchemaNode::Object {
                properties,
                required,
            } => {
                let mut props: Vec<(&String, &SchemaNode)> = properties.iter().collect();
                props.sort_by(|a, b| a.0.cmp(b.0));
                let props: serde_json::Map<String, Value> = props
                    .into_iter()
                    .map(|(name, node)| (name.clone(), node.to_value()))
                    .collect();
                let mut out = json!({ "type": "object", "properties": props });
                if !required.is_empty() {
                    out["required"] = json!(required);
                }
                out
            }
            SchemaNode::Array { items } => json!({ "type": "array", "items": items.to_value() }),
            SchemaNode::Primitive(ty) => json!({ "type": ty.as_keyword() }),
            SchemaNode::Nullable(inner) => {
                let mut out = inner.to_value();
                let primary = inner.schema_type().unwrap_or(SchemaType::Null);
                out["type"] = json!([primary.as_keyword(), "null"]);
                out
            }
            SchemaNode::Unknown => json!({}),
        }
    }

    /// The node's primary type, looking through a `Nullable` wrapper.
    /// `None` for `Unknown`.
    pub fn schema_type(&self) -> Option<SchemaType> {
        match self {
            SchemaNode::Object { .. } => Some(SchemaType::Object),
            SchemaNode::Array { .. } => Some(SchemaType::Array),
            SchemaNode::Primitive(ty) => Some(*ty),
            SchemaNode::Nullable(inner) => inner.schema_type(),
            SchemaNode::Unknown => None,
        }
    }

    /// Unwraps a `Nullable` wrapper, reporting whether one was present.
    pub fn unwrap_nullable(&self) -> (&SchemaNode, bool) {
        match self {
            SchemaNode::Nullable(inner) => (inner.as_ref(), true),
            other => (other, false),
        }
    }
}
