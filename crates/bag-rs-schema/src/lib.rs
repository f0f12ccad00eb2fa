//! Declarative schemas for nested configuration objects.
//!
//! A [`Schema`] is built from per-field declarations (flat leaves or nested
//! groups carrying `required`/`defaultValue` metadata) and then applied to
//! untyped JSON objects to fill in defaults and reject objects that violate
//! required-field constraints.

mod compiler;
mod error;
mod loader;
mod model;
mod normalizer;
mod render;
mod schema;
mod utils;

/// Public error type returned by compilation, normalization, and loading.
pub use error::SchemaError;
/// JSON5 helpers for reading config objects.
pub use loader::{load_config_from_path, load_config_from_str};
/// Compiled schema tree types.
pub use model::{Fields, LeafField, SchemaNode};
/// Outcome of checking whether an absent group must be materialized.
pub use normalizer::Requirement;
/// The field registry and normalization entry point.
pub use schema::Schema;
