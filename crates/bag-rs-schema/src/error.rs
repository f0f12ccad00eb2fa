//! Error types for schema compilation, normalization, and loading.

use thiserror::Error;

/// Errors returned while building a schema or applying it to a config.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A field was registered under a name that is not a string.
    #[error("invalid field name, field name must be a string (found {found})")]
    InvalidFieldName { found: &'static str },
    /// A field declaration (or its `fields` entry) is not an object.
    #[error("invalid options at {path}, options must be an object")]
    InvalidFieldOptions { path: String },
    /// A declaration nested under `fields` is not an object.
    #[error("invalid nested field options at {path}, options must be an object")]
    InvalidNestedFieldOptions { path: String },
    /// The config (or a nested group value) is not an object.
    #[error("invalid config at {path}, config must be an object")]
    InvalidConfig { path: String },
    /// A required leaf is absent or null and has no default value.
    #[error("field \"{field}\" at {path} is required and does not have a default value")]
    RequiredFieldMissing { path: String, field: String },
    /// An absent group contains a required leaf without a default value.
    #[error(
        "encountered required sub field \"{sub_field}\" for non existing field \"{field}\" at {path}"
    )]
    RequiredSubFieldMissing {
        path: String,
        field: String,
        sub_field: String,
    },
    /// Reading a schema or config file failed.
    #[error("failed to read file: {0}")]
    ReadFailed(#[from] std::io::Error),
    /// Parsing JSON5 contents failed.
    #[error("failed to parse json5: {0}")]
    ParseFailed(#[from] json5::Error),
}
