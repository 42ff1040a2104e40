//! Generator configuration

use crate::error::{GenError, GenResult};
use serde::{Deserialize, Serialize};

/// How generated modules are laid out on disk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputLayout {
    /// One `<module>.rs` per namespace plus a `mod.rs` index
    #[default]
    Files,

    /// Every namespace as an inline `pub mod` in one file, for `include!` from a build script
    SingleFile,
}

/// Settings for a generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Output layout
    #[serde(default)]
    pub layout: OutputLayout,

    /// File name used by [`OutputLayout::SingleFile`]
    #[serde(default = "default_single_file_name")]
    pub single_file_name: String,

    /// Module path providing `HttpClient`, `Endpoint`, and `HttpRequestResult`
    #[serde(default = "default_client_trait_path")]
    pub client_trait_path: String,

    /// Module path providing `request` and `request_with_body`
    #[serde(default = "default_client_helpers_path")]
    pub client_helpers_path: String,

    /// Path of the transport-level result alias wrapping every route result
    #[serde(default = "default_result_path")]
    pub result_path: String,

    /// Wrap width for emitted doc comments
    #[serde(default = "default_doc_width")]
    pub doc_width: usize,
}

fn default_single_file_name() -> String {
    "generated.rs".to_string()
}

fn default_client_trait_path() -> String {
    "crate::client_trait".to_string()
}

fn default_client_helpers_path() -> String {
    "crate::client_helpers".to_string()
}

fn default_result_path() -> String {
    "crate::Result".to_string()
}

fn default_doc_width() -> usize {
    100
}

const MIN_DOC_WIDTH: usize = 40;

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            layout: OutputLayout::default(),
            single_file_name: default_single_file_name(),
            client_trait_path: default_client_trait_path(),
            client_helpers_path: default_client_helpers_path(),
            result_path: default_result_path(),
            doc_width: default_doc_width(),
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with every setting at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from a TOML table body
    pub fn from_toml(content: &str) -> GenResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Switch to the given layout
    pub fn with_layout(mut self, layout: OutputLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Check that the configuration can produce compilable output
    pub fn validate(&self) -> GenResult<()> {
        for (key, path) in [
            ("client_trait_path", &self.client_trait_path),
            ("client_helpers_path", &self.client_helpers_path),
            ("result_path", &self.result_path),
        ] {
            if !is_valid_rust_path(path) {
                return Err(GenError::InvalidConfig(format!(
                    "{key} is not a Rust path: {path:?}"
                )));
            }
        }

        if !self.single_file_name.ends_with(".rs") || self.single_file_name.len() <= 3 {
            return Err(GenError::InvalidConfig(format!(
                "single_file_name must name a .rs file: {:?}",
                self.single_file_name
            )));
        }

        if self.doc_width < MIN_DOC_WIDTH {
            return Err(GenError::InvalidConfig(format!(
                "doc_width must be at least {MIN_DOC_WIDTH}, got {}",
                self.doc_width
            )));
        }

        Ok(())
    }
}

/// Whether `path` is a `::`-separated list of identifiers, optionally rooted with `::`.
fn is_valid_rust_path(path: &str) -> bool {
    let path = path.strip_prefix("::").unwrap_or(path);
    !path.is_empty() && path.split("::").all(is_identifier)
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
