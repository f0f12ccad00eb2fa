//! Compiles raw field declarations into schema nodes.

use crate::SchemaError;
use crate::model::{Fields, LeafField, SchemaNode};
use crate::utils::{join_path, location};
use serde_json::{Map, Value};

/// Declaration key holding nested field declarations.
pub(crate) const FIELDS_KEY: &str = "fields";
/// Declaration key marking a leaf as required.
pub(crate) const REQUIRED_KEY: &str = "required";
/// Declaration key holding a leaf's default value.
pub(crate) const DEFAULT_VALUE_KEY: &str = "defaultValue";

/// Compile a top-level declaration registered at `path`.
pub(crate) fn compile_field(declaration: &Value, path: &str) -> Result<SchemaNode, SchemaError> {
    let Value::Object(map) = declaration else {
        return Err(SchemaError::InvalidFieldOptions {
            path: location(path),
        });
    };
    compile_declaration(map, path)
}

/// Apply the single compilation rule to a declaration object.
///
/// A `fields` entry makes the node a group and every other key is ignored;
/// otherwise the node is a leaf. Only a boolean `true` marks a leaf required,
/// and a `null` default is the same as no default.
fn compile_declaration(map: &Map<String, Value>, path: &str) -> Result<SchemaNode, SchemaError> {
    if let Some(nested) = map.get(FIELDS_KEY) {
        let Value::Object(nested) = nested else {
            return Err(SchemaError::InvalidFieldOptions {
                path: join_path(path, FIELDS_KEY),
            });
        };
        let mut fields = Fields::new();
        for (name, declaration) in nested {
            let child_path = join_path(path, name);
            let Value::Object(child) = declaration else {
                return Err(SchemaError::InvalidNestedFieldOptions { path: child_path });
            };
            fields.insert(name.as_str(), compile_declaration(child, &child_path)?);
        }
        return Ok(SchemaNode::Group { fields });
    }

    Ok(SchemaNode::Leaf(LeafField {
        required: matches!(map.get(REQUIRED_KEY), Some(Value::Bool(true))),
        default_value: map
            .get(DEFAULT_VALUE_KEY)
            .filter(|value| !value.is_null())
            .cloned(),
    }))
}
