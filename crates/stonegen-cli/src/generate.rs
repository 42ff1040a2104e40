//! Generate command: schema in, Rust modules out

use crate::codegen::{self, Generated};
use crate::manifest::Manifest;
use anyhow::{Context, Result};
use std::path::Path;
use stonegen_core::{Api, GeneratorConfig};

/// Run code generation for the `generate` command.
///
/// Diagnostics are printed but never fail the command; only unreadable or
/// malformed input does.
pub fn run(schema: &str, output: &str, manifest: Option<String>) -> Result<()> {
    let manifest = Manifest::load_or_default(manifest.as_deref().map(Path::new))?;

    println!("Generating Rust modules from: {}", schema);

    let generated = generate_to(Path::new(schema), Path::new(output), &manifest.generator)?;

    println!(
        "✓ Generated {} module(s), {} file(s) in {}",
        generated.modules.len(),
        generated.files.len(),
        output
    );
    if generated.diagnostics.is_empty() {
        println!("✓ No diagnostics");
    } else {
        println!("{} diagnostic(s):", generated.diagnostics.len());
        for diagnostic in &generated.diagnostics {
            println!("  {}", diagnostic);
        }
    }

    Ok(())
}

/// Load `schema`, generate with `config`, and write the result under `output`.
///
/// This is the entry point for build scripts that want the generated files
/// without going through the binary.
pub fn generate_to(schema: &Path, output: &Path, config: &GeneratorConfig) -> Result<Generated> {
    config
        .validate()
        .context("Invalid generator configuration")?;

    let api = Api::from_file(schema)
        .with_context(|| format!("Failed to load schema: {:?}", schema))?;

    let generated = codegen::generate(&api, config);

    generated
        .write_all(output)
        .with_context(|| format!("Failed to write generated code to {:?}", output))?;

    Ok(generated)
}
