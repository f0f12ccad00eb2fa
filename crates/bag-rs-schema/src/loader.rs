//! JSON5 loading for schema declarations and config objects.

use crate::utils::ROOT_PATH;
use crate::{Schema, SchemaError};
use log::{debug, info};
use serde_json::Value;
use std::fs;
use std::path::Path;

impl Schema {
    /// Build a schema from an object mapping field names to declarations.
    ///
    /// Fields are registered in the object's key order.
    pub fn from_declarations(declarations: &Value) -> Result<Self, SchemaError> {
        let Value::Object(map) = declarations else {
            return Err(SchemaError::InvalidFieldOptions {
                path: ROOT_PATH.to_string(),
            });
        };
        let mut schema = Schema::new();
        for (name, declaration) in map {
            schema.add(name.as_str(), declaration)?;
        }
        Ok(schema)
    }

    /// Load declarations from JSON5 contents.
    pub fn load_from_str(contents: &str) -> Result<Self, SchemaError> {
        debug!("loading schema from raw contents (len={})", contents.len());
        let value: Value = json5::from_str(contents)?;
        Self::from_declarations(&value)
    }

    /// Load declarations from a JSON5 file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        info!("loading schema from path: {}", path.as_ref().display());
        let contents = fs::read_to_string(path)?;
        Self::load_from_str(&contents)
    }
}

/// Parse a config object from JSON5 contents.
///
/// The shape is not checked here; [`Schema::normalize`] rejects non-objects.
pub fn load_config_from_str(contents: &str) -> Result<Value, SchemaError> {
    debug!("loading config from raw contents (len={})", contents.len());
    Ok(json5::from_str(contents)?)
}

/// Parse a config object from a JSON5 file.
pub fn load_config_from_path(path: impl AsRef<Path>) -> Result<Value, SchemaError> {
    info!("loading config from path: {}", path.as_ref().display());
    let contents = fs::read_to_string(path)?;
    load_config_from_str(&contents)
}
