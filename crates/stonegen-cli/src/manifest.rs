//! Manifest parsing and validation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use stonegen_core::{GeneratorConfig, OutputLayout};

/// Manifest looked up in the working directory when none is given
pub const DEFAULT_MANIFEST: &str = "stonegen.toml";

/// stonegen.toml manifest structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl Manifest {
    /// Load manifest from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read manifest: {:?}", path.as_ref()))?;

        Self::from_str(&content)
    }

    /// Parse manifest from string
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse manifest")
    }

    /// Load the given manifest, or `stonegen.toml` if present, or fall back
    /// to the default settings. The result is validated either way.
    pub fn load_or_default(manifest_path: Option<&Path>) -> Result<Self> {
        let manifest = match manifest_path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_MANIFEST).is_file() => Self::from_file(DEFAULT_MANIFEST)?,
            None => {
                tracing::debug!("no {} found, using default settings", DEFAULT_MANIFEST);
                Self::default()
            }
        };
        manifest.validate()?;
        Ok(manifest)
    }

    /// Validate the manifest
    pub fn validate(&self) -> Result<()> {
        self.generator
            .validate()
            .context("Invalid [generator] settings")
    }
}

fn layout_name(layout: OutputLayout) -> &'static str {
    match layout {
        OutputLayout::Files => "files",
        OutputLayout::SingleFile => "single-file",
    }
}

/// Check command implementation
pub fn check(manifest_path: Option<String>) -> Result<()> {
    let path = manifest_path.unwrap_or_else(|| DEFAULT_MANIFEST.to_string());

    println!("Checking manifest: {}", path);

    let manifest = Manifest::from_file(&path)?;
    manifest.validate()?;

    let config = &manifest.generator;
    match config.layout {
        OutputLayout::Files => println!("✓ Layout: {}", layout_name(config.layout)),
        OutputLayout::SingleFile => println!(
            "✓ Layout: {} ({})",
            layout_name(config.layout),
            config.single_file_name
        ),
    }
    println!("✓ Client trait: {}", config.client_trait_path);
    println!("✓ Client helpers: {}", config.client_helpers_path);
    println!("✓ Result type: {}", config.result_path);
    println!("✓ Doc width: {}", config.doc_width);
    println!("\nManifest is valid!");

    Ok(())
}
