//! stonegen CLI - Rust code generator for Stone-style IDL schemas
//!
//! Commands:
//! - `stonegen generate` - Generate Rust modules from a resolved schema
//! - `stonegen check` - Validate a stonegen.toml manifest

use clap::{Parser, Subcommand};
use stonegen_cli::{generate, manifest};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stonegen")]
#[command(author, version, about = "Rust code generator for Stone-style IDL schemas", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Rust modules from a resolved schema
    Generate {
        /// Path to the resolved schema (JSON)
        #[arg(short, long)]
        schema: String,

        /// Output directory for generated code
        #[arg(short, long)]
        output: String,

        /// Path to stonegen.toml manifest (default: ./stonegen.toml if present)
        #[arg(short, long)]
        manifest: Option<String>,

        /// Log per-namespace progress
        #[arg(short, long)]
        verbose: bool,
    },

    /// Validate a stonegen.toml manifest
    Check {
        /// Path to stonegen.toml (default: ./stonegen.toml)
        #[arg(short, long)]
        manifest: Option<String>,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            schema,
            output,
            manifest,
            verbose,
        } => {
            init_logging(verbose);
            generate::run(&schema, &output, manifest)?;
        }
        Commands::Check { manifest } => {
            init_logging(false);
            manifest::check(manifest)?;
        }
    }

    Ok(())
}
