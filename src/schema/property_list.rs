use super::{SchemaNode, SchemaType};
use crate::error::SchemaConversionError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// One row of the schema editor's property list.
///
/// Object and array-of-object properties own a nested `property_list`,
/// forming a tree whose depth equals the schema's nesting depth. For arrays
/// of primitives the item type is carried separately, since there is no row
/// to hang it on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyListItem {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: SchemaType,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<SchemaType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_list: Option<Vec<PropertyListItem>>,
}

/// Converts an object schema into the editor's property-list representation.
///
/// Non-object roots yield an empty list. Malformed property fragments default
/// to `string`, the editor's choice for a fresh row.
pub fn schema_to_property_list(root: &SchemaNode) -> Vec<PropertyListItem> {
    let (root, _) = root.unwrap_nullable();
    let SchemaNode::Object {
        properties,
        required,
    } = root
    else {
        return Vec::new();
    };

    let mut items: Vec<PropertyListItem> = properties
        .iter()
        .map(|(name, fragment)| {
            let (inner, nullable) = fragment.unwrap_nullable();
            let ty = inner.schema_type().unwrap_or(SchemaType::String);
            let (item_type, property_list) = match inner {
                SchemaNode::Object { .. } => (None, Some(schema_to_property_list(inner))),
                SchemaNode::Array { items } => {
                    let (item_node, _) = items.unwrap_nullable();
                    match item_node {
                        SchemaNode::Object { .. } => {
                            (None, Some(schema_to_property_list(item_node)))
                        }
                        other => (other.schema_type(), None),
                    }
                }
                _ => (None, None),
            };
            PropertyListItem {
                name: name.clone(),
                ty,
                is_required: required.iter().any(|r| r == name),
                nullable,
                item_type,
                property_list,
            }
        })
        .collect();
    items.sort_by(|a, b| a.name.cmp(&b.name));
    items
}

/// Rebuilds an object schema from a property list.
///
/// The round trip `schema -> list -> schema` is semantically lossless except
/// for key reordering. Empty or duplicate property names are rejected; the
/// editor should never produce them, but a half-typed row must not corrupt a
/// save.
pub fn property_list_to_schema(
    items: &[PropertyListItem],
) -> Result<SchemaNode, SchemaConversionError> {
    build_object(items, "$")
}

fn build_object(
    items: &[PropertyListItem],
    parent_path: &str,
) -> Result<SchemaNode, SchemaConversionError> {
    let mut properties: AHashMap<String, SchemaNode> = AHashMap::with_capacity(items.len());
    let mut required = Vec::new();

    for item in items {
        if item.name.is_empty() {
            return Err(SchemaConversionError::EmptyPropertyName {
                parent_path: parent_path.to_string(),
            });
        }
        if properties.contains_key(&item.name) {
            return Err(SchemaConversionError::DuplicateProperty {
                name: item.name.clone(),
                parent_path: parent_path.to_string(),
            });
        }

        let child_path = format!("{parent_path}.{}", item.name);
        let node = build_node(item, &child_path)?;
        let node = if item.nullable {
            SchemaNode::Nullable(Box::new(node))
        } else {
            node
        };

        if item.is_required {
            required.push(item.name.clone());
        }
        properties.insert(item.name.clone(), node);
    }

    required.sort();
    Ok(SchemaNode::Object {
        properties,
        required,
    })
}

fn build_node(
    item: &PropertyListItem,
    child_path: &str,
) -> Result<SchemaNode, SchemaConversionError> {
    match item.ty {
        SchemaType::Object => {
            let children = item.property_list.as_deref().unwrap_or(&[]);
            build_object(children, child_path)
        }
        SchemaType::Array => {
            let items_node = if let Some(children) = item.property_list.as_deref() {
                build_object(children, child_path)?
            } else if let Some(ty) = item.item_type {
                SchemaNode::Primitive(ty)
            } else {
                SchemaNode::Unknown
            };
            Ok(SchemaNode::Array {
                items: Box::new(items_node),
            })
        }
        ty => Ok(SchemaNode::Primitive(ty)),
    }
}
