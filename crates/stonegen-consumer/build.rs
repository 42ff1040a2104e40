//! Generates `generated.rs` from `schema/api.json` into `OUT_DIR`.

use anyhow::{Context, Result};
use std::path::PathBuf;
use stonegen_cli::generate::generate_to;
use stonegen_cli::manifest::Manifest;

fn main() -> Result<()> {
    let manifest_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR")?);
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").context("OUT_DIR not set")?);
    let schema = manifest_dir.join("schema").join("api.json");
    let manifest_path = manifest_dir.join("stonegen.toml");

    println!("cargo:rerun-if-changed={}", schema.display());
    println!("cargo:rerun-if-changed={}", manifest_path.display());

    let manifest = Manifest::from_file(&manifest_path)?;
    manifest.validate()?;

    let generated = generate_to(&schema, &out_dir, &manifest.generator)?;
    for diagnostic in &generated.diagnostics {
        println!("cargo:warning={diagnostic}");
    }

    Ok(())
}
