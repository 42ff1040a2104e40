//! Per-namespace state shared by every emitter.

use super::code_writer::CodeWriter;
use stonegen_core::{Api, Diagnostics, GeneratorConfig, Namespace};

/// Everything an emitter needs to translate one namespace.
///
/// The only namespace-dependent piece is `namespace`, which decides whether a
/// type reference needs module qualification.
#[derive(Clone, Copy)]
pub struct EmitContext<'a> {
    pub api: &'a Api,
    pub namespace: &'a Namespace,
    pub config: &'a GeneratorConfig,
    pub diagnostics: &'a Diagnostics,
}

impl<'a> EmitContext<'a> {
    pub fn new(
        api: &'a Api,
        namespace: &'a Namespace,
        config: &'a GeneratorConfig,
        diagnostics: &'a Diagnostics,
    ) -> Self {
        Self {
            api,
            namespace,
            config,
            diagnostics,
        }
    }

    /// Qualified subject for a diagnostic about `item` in the current namespace.
    pub fn subject(&self, item: &str) -> String {
        format!("{}.{}", self.namespace.name, item)
    }

    pub fn is_current(&self, namespace: &str) -> bool {
        self.namespace.name == namespace
    }

    /// Emit `///` docs when the schema item has any.
    pub fn doc(&self, w: &mut CodeWriter, doc: Option<&str>) {
        if let Some(text) = doc {
            w.doc_comment("///", text, self.config.doc_width);
        }
    }

    /// `client_trait_path::item`
    pub fn client_trait(&self, item: &str) -> String {
        format!("{}::{}", self.config.client_trait_path, item)
    }

    /// `client_helpers_path::item`
    pub fn client_helper(&self, item: &str) -> String {
        format!("{}::{}", self.config.client_helpers_path, item)
    }
}
