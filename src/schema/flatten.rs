use super::{SchemaNode, SchemaType};

/// One property of a payload schema, addressed by its dotted path.
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenedProperty {
    /// Dotted path relative to the schema root, e.g. `user.address.city`.
    /// Arrays do not introduce an index segment.
    pub path: String,
    /// Primary type with any nullable wrapper already looked through.
    /// `None` when the fragment was malformed.
    pub ty: Option<SchemaType>,
    /// Membership in the owning object's `required` list.
    pub is_required: bool,
    /// Whether the property carried a `[T, "null"]` type union.
    pub nullable: bool,
}

/// Recursively flattens an object schema into dotted property paths.
///
/// Object properties recurse with a joined path; array-of-object items are
/// flattened under the array property's own path. Every property, including
/// intermediate objects, yields an entry. Malformed fragments contribute no
/// nested properties; nothing here can fail.
pub fn flatten_schema(root: &SchemaNode) -> Vec<FlattenedProperty> {
    let mut out = Vec::new();
    collect(root, "", &mut out);
    out
}

fn collect(node: &SchemaNode, prefix: &str, out: &mut Vec<FlattenedProperty>) {
    let (node, _) = node.unwrap_nullable();
    let SchemaNode::Object {
        properties,
        required,
    } = node
    else {
        return;
    };

    for (name, fragment) in properties {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        let (inner, nullable) = fragment.unwrap_nullable();
        out.push(FlattenedProperty {
            path: path.clone(),
            ty: inner.schema_type(),
            is_required: required.iter().any(|r| r == name),
            nullable,
        });

        match inner {
            SchemaNode::Object { .. } => collect(inner, &path, out),
            SchemaNode::Array { items } => {
                // Item properties land under the array's path, no index segment.
                collect(items.as_ref(), &path, out);
            }
            _ => {}
        }
    }
}
