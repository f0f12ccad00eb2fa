//! Handlers for the `bag` subcommands.
//!
//! Each handler returns the text to print so it can be exercised without a
//! process boundary.

use anyhow::Context;
use bag_rs_schema::{Schema, load_config_from_path};
use log::info;
use std::path::{Path, PathBuf};

/// Output format for `bag render`.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderFormat {
    /// One line per field, two spaces per nesting level.
    #[default]
    Text,
    /// The compiled declarations as pretty JSON.
    Json,
}

/// Arguments for `bag render`.
#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Path to a JSON5 schema file
    #[arg(long)]
    pub schema: PathBuf,
    /// Output format
    #[arg(long, value_enum, default_value_t = RenderFormat::Text)]
    pub format: RenderFormat,
}

/// Arguments for `bag apply`.
#[derive(clap::Args, Debug)]
pub struct ApplyArgs {
    /// Path to a JSON5 schema file
    #[arg(long)]
    pub schema: PathBuf,
    /// Path to the JSON5 config file to normalize
    #[arg(long)]
    pub config: PathBuf,
    /// Print the result on a single line
    #[arg(long)]
    pub compact: bool,
}

/// Render a schema file.
pub fn render(args: &RenderArgs) -> anyhow::Result<String> {
    let schema = load_schema(&args.schema)?;
    match args.format {
        RenderFormat::Text => Ok(schema.render()),
        RenderFormat::Json => {
            let mut output = serde_json::to_string_pretty(&schema)?;
            output.push('\n');
            Ok(output)
        }
    }
}

/// Normalize a config file against a schema file.
pub fn apply(args: &ApplyArgs) -> anyhow::Result<String> {
    let schema = load_schema(&args.schema)?;
    let config = load_config_from_path(&args.config)
        .with_context(|| format!("failed to load config {}", args.config.display()))?;
    let config = schema.normalize(config).with_context(|| {
        format!(
            "config {} does not satisfy schema {}",
            args.config.display(),
            args.schema.display()
        )
    })?;
    info!("normalized config (fields={})", schema.len());

    let mut output = if args.compact {
        serde_json::to_string(&config)?
    } else {
        serde_json::to_string_pretty(&config)?
    };
    output.push('\n');
    Ok(output)
}

fn load_schema(path: &Path) -> anyhow::Result<Schema> {
    Schema::load_from_path(path)
        .with_context(|| format!("failed to load schema {}", path.display()))
}
