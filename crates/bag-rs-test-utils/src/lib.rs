//! Test helpers shared across bag-rs crates.

pub mod files;
pub mod schemas;

pub use files::write_json5;
pub use schemas::{
    ADDRESS_WITH_REQUIRED_STREET_JSON5, PERSON_WITH_DEFAULTS_JSON5, address_with_required_street,
    person_with_defaults, required_names,
};
