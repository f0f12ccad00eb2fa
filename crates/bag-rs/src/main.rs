//! `bag` command-line entry point.

use bag_rs::cli::{ApplyArgs, RenderArgs, apply, render};
use clap::Parser;

/// Render declarative config schemas and apply them to config files.
#[derive(Parser, Debug)]
#[command(name = "bag", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print a schema file as indented text or compiled JSON.
    Render(RenderArgs),
    /// Fill defaults in a config file and check required fields.
    Apply(ApplyArgs),
}

fn main() -> anyhow::Result<()> {
    bag_rs::init_logging();

    let cli = Cli::parse();
    let output = match cli.command {
        Commands::Render(args) => render(&args)?,
        Commands::Apply(args) => apply(&args)?,
    };
    print!("{output}");
    Ok(())
}
