//! Applies compiled fields to config objects.
//!
//! Walks the schema (never the config) in declaration order, filling defaults
//! for required leaves, recursing into present groups, and deciding through
//! [`Requirement`] what to do with groups the config leaves out.

mod requirement;


pub use requirement::Requirement;

use crate::SchemaError;
use crate::model::{Fields, LeafField, SchemaNode};
use crate::utils::{join_path, location};
use log::debug;
use serde_json::{Map, Value};

impl Fields {
    /// Apply these fields to `config`, returning the completed object.
    ///
    /// Takes ownership of `config` and hands it back mutated. Any error aborts
    /// the whole call.
    pub fn apply(&self, config: Value) -> Result<Value, SchemaError> {
        put(config, self, "")
    }
}

/// Apply `fields` to the config found at `path`.
pub(crate) fn put(config: Value, fields: &Fields, path: &str) -> Result<Value, SchemaError> {
    let Value::Object(mut map) = config else {
        return Err(SchemaError::InvalidConfig {
            path: location(path),
        });
    };
    for (name, node) in fields.iter() {
        let field_path = join_path(path, name);
        match node {
            SchemaNode::Group { fields } => put_group(&mut map, name, fields, &field_path)?,
            SchemaNode::Leaf(leaf) => put_leaf(&mut map, name, leaf, &field_path)?,
        }
    }
    Ok(Value::Object(map))
}

/// Recurse into a present group or settle an absent one.
fn put_group(
    config: &mut Map<String, Value>,
    name: &str,
    fields: &Fields,
    path: &str,
) -> Result<(), SchemaError> {
    if let Some(slot) = config.get_mut(name) {
        let value = std::mem::take(slot);
        *slot = put(value, fields, path)?;
        return Ok(());
    }

    match fields.requirement() {
        Requirement::NotRequired => {
            debug!("skipping absent optional group (path={path})");
        }
        Requirement::AutoAppend => {
            debug!("materializing absent group with defaults (path={path})");
            let value = put(Value::Object(Map::new()), fields, path)?;
            config.insert(name.to_string(), value);
        }
        Requirement::HardViolation(sub_field) => {
            return Err(SchemaError::RequiredSubFieldMissing {
                path: location(path),
                field: name.to_string(),
                sub_field,
            });
        }
    }
    Ok(())
}

/// Fill a required leaf that is absent or null.
fn put_leaf(
    config: &mut Map<String, Value>,
    name: &str,
    leaf: &LeafField,
    path: &str,
) -> Result<(), SchemaError> {
    if !leaf.required || !config.get(name).is_none_or(Value::is_null) {
        return Ok(());
    }
    match &leaf.default_value {
        Some(default_value) => {
            config.insert(name.to_string(), default_value.clone());
            Ok(())
        }
        None => Err(SchemaError::RequiredFieldMissing {
            path: location(path),
            field: name.to_string(),
        }),
    }
}
