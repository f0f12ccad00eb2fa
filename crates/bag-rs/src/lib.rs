//! Public surface for bag-rs.
//!
//! Re-exports the schema library and hosts the command handlers behind the
//! `bag` binary.

pub mod cli;

/// Re-export for convenience.
pub use bag_rs_schema as schema;
pub use bag_rs_schema::{Fields, LeafField, Requirement, Schema, SchemaError, SchemaNode};

#[inline]
/// Initialize logging using env_logger if the "logging" feature is enabled.
///
/// This is a no-op if the feature is not enabled. Binaries are still expected
/// to call this early in startup to ensure log output is wired up.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::try_init();
    }
}
