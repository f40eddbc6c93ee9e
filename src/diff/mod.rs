use crate::schema::{FlattenedProperty, SchemaNode, SchemaType, flatten_schema};
use ahash::AHashMap;
use itertools::Itertools;

mod usage;

pub use usage::*;

/// A property present in the old schema but absent from the new one.
#[derive(Debug, Clone)]
pub struct DeletedProperty {
    pub key: String,
    pub original_type: Option<SchemaType>,
    pub usage: UsageInfo,
}

/// A property present only in the new schema.
#[derive(Debug, Clone)]
pub struct AddedProperty {
    pub key: String,
    pub new_type: Option<SchemaType>,
    pub usage: UsageInfo,
}

/// A property whose type keyword differs between the two schemas.
#[derive(Debug, Clone)]
pub struct TypeChange {
    pub key: String,
    pub original_type: Option<SchemaType>,
    pub new_type: Option<SchemaType>,
    pub usage: UsageInfo,
}

/// A property whose `required` membership differs between the two schemas.
#[derive(Debug, Clone)]
pub struct RequiredChange {
    pub key: String,
    pub originally_required: bool,
    pub now_required: bool,
    pub usage: UsageInfo,
}

/// The classified result of comparing two payload-schema snapshots.
///
/// Purely advisory: computed on demand for a confirmation dialog and
/// discarded once the save is confirmed or abandoned.
#[derive(Debug, Clone, Default)]
pub struct SchemaChanges {
    pub deleted: Vec<DeletedProperty>,
    pub added: Vec<AddedProperty>,
    pub type_changed: Vec<TypeChange>,
    pub required_changed: Vec<RequiredChange>,
}

impl SchemaChanges {
    pub fn is_empty(&self) -> bool {
        self.deleted.is_empty()
            && self.added.is_empty()
            && self.type_changed.is_empty()
            && self.required_changed.is_empty()
    }

    /// Whether any change touches a property some step actually references.
    /// A destructive save should block on this and ask for confirmation.
    pub fn any_in_use(&self) -> bool {
        self.deleted.iter().any(|c| c.usage.is_used)
            || self.type_changed.iter().any(|c| c.usage.is_used)
            || self.required_changed.iter().any(|c| c.usage.is_used)
            || self.added.iter().any(|c| c.usage.is_used)
    }
}

/// Diffs two payload-schema snapshots property by property.
///
/// Both schemas run through the same flattening routine the catalog builder
/// uses, so nesting, arrays, and nullability are treated identically in both
/// views. Every change is annotated with the steps currently referencing the
/// property's variable.
pub fn detect_schema_changes(
    old: &SchemaNode,
    new: &SchemaNode,
    usage: &UsageIndex,
) -> SchemaChanges {
    let old_flat = flatten_schema(old);
    let new_flat = flatten_schema(new);
    let old_props: AHashMap<&str, &FlattenedProperty> = index_by_path(&old_flat);
    let new_props: AHashMap<&str, &FlattenedProperty> = index_by_path(&new_flat);

    let mut changes = SchemaChanges::default();

    for key in old_props.keys().sorted() {
        let old_prop = old_props[key];
        match new_props.get(key) {
            None => changes.deleted.push(DeletedProperty {
                key: (*key).to_string(),
                original_type: old_prop.ty,
                usage: usage.usage_of(key),
            }),
            Some(new_prop) => {
                if old_prop.ty != new_prop.ty {
                    changes.type_changed.push(TypeChange {
                        key: (*key).to_string(),
                        original_type: old_prop.ty,
                        new_type: new_prop.ty,
                        usage: usage.usage_of(key),
                    });
                }
                if old_prop.is_required != new_prop.is_required {
                    changes.required_changed.push(RequiredChange {
                        key: (*key).to_string(),
                        originally_required: old_prop.is_required,
                        now_required: new_prop.is_required,
                        usage: usage.usage_of(key),
                    });
                }
            }
        }
    }

    for key in new_props.keys().sorted() {
        if !old_props.contains_key(key) {
            changes.added.push(AddedProperty {
                key: (*key).to_string(),
                new_type: new_props[key].ty,
                usage: usage.usage_of(key),
            });
        }
    }

    changes
}

fn index_by_path(props: &[FlattenedProperty]) -> AHashMap<&str, &FlattenedProperty> {
    props.iter().map(|p| (p.path.as_str(), p)).collect()
}
