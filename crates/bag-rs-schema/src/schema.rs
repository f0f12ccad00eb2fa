//! Field registry for a config schema.

use crate::SchemaError;
use crate::compiler;
use crate::model::{Fields, SchemaNode};
use crate::utils::value_kind;
use log::debug;
use serde::Serialize;
use serde_json::Value;

/// Ordered set of top-level field declarations.
///
/// Built once through [`Schema::add`], then shared read-only by every
/// [`Schema::normalize`] call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Schema {
    fields: Fields,
}

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile `declaration` and register it under `name`.
    ///
    /// Replaces any previous field with the same name. On error the schema is
    /// left untouched.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        declaration: &Value,
    ) -> Result<&mut Self, SchemaError> {
        let name = name.into();
        let node = compiler::compile_field(declaration, &name)?;
        debug!("registering field (name={name}, kind={})", node.kind());
        self.fields.insert(name, node);
        Ok(self)
    }

    /// Register a field whose name comes from untyped input.
    pub fn add_value(
        &mut self,
        name: &Value,
        declaration: &Value,
    ) -> Result<&mut Self, SchemaError> {
        let Value::String(name) = name else {
            return Err(SchemaError::InvalidFieldName {
                found: value_kind(name),
            });
        };
        self.add(name.as_str(), declaration)
    }

    /// Fill defaults in `config` and check required fields.
    ///
    /// Consumes the config and returns it completed; any error aborts the
    /// whole call.
    pub fn normalize(&self, config: Value) -> Result<Value, SchemaError> {
        self.fields.apply(config)
    }

    /// Top-level fields in registration order.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Fetch a top-level field by name.
    pub fn get(&self, name: &str) -> Option<&SchemaNode> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LeafField;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn add_chains_and_keeps_order() {
        let mut schema = Schema::new();
        schema
            .add("firstname", &json!({ "required": true }))
            .and_then(|schema| schema.add("lastname", &json!({ "required": true })))
            .expect("add fields");

        assert_eq!(
            schema.fields().names().collect::<Vec<_>>(),
            vec!["firstname", "lastname"]
        );
        assert_eq!(
            schema.get("firstname"),
            Some(&SchemaNode::Leaf(LeafField::required()))
        );
    }

    #[test]
    fn add_overwrites_existing_field() {
        let mut schema = Schema::new();
        schema.add("name", &json!({ "required": true })).expect("add");
        schema.add("other", &json!({})).expect("add");
        schema
            .add("name", &json!({ "fields": {} }))
            .expect("overwrite");

        assert_eq!(schema.len(), 2);
        assert_eq!(schema.get("name").map(SchemaNode::kind), Some("group"));
        assert_eq!(
            schema.fields().names().collect::<Vec<_>>(),
            vec!["name", "other"]
        );
    }

    #[test]
    fn rejects_non_string_name_without_mutation() {
        let mut schema = Schema::new();
        let err = schema.add_value(&json!(1), &json!({})).unwrap_err();

        assert!(matches!(err, SchemaError::InvalidFieldName { found: "number" }));
        assert!(schema.is_empty());
    }

    #[test]
    fn rejects_invalid_options_without_mutation() {
        let mut schema = Schema::new();
        schema.add("name", &json!({ "required": true })).expect("add");

        let err = schema.add_value(&json!("name"), &json!(1)).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidFieldOptions { ref path } if path == "name"));

        let err = schema
            .add("name", &json!({ "fields": { "ok": {}, "bad": "x" } }))
            .unwrap_err();
        assert!(matches!(
            err,
            SchemaError::InvalidNestedFieldOptions { ref path } if path == "name.bad"
        ));

        assert_eq!(
            schema.get("name"),
            Some(&SchemaNode::Leaf(LeafField::required()))
        );
    }
}
