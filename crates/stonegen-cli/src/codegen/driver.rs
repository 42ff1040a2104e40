//! Emission order and output layout.
//!
//! Namespaces are emitted in schema order. Within a namespace the order is
//! aliases, routes, then user types in declaration order; each type is
//! followed directly by its serde impls. Resolved module names are collected
//! as namespaces finish and returned with the output, which is also how the
//! module index is built.

use super::code_writer::CodeWriter;
use super::context::EmitContext;
use super::naming::{IdentKind, identifier};
use super::rust_types::type_expr;
use super::{routes, serde_impl, structs, unions};
use stonegen_core::{
    Api, Diagnostic, Diagnostics, GenResult, GeneratorConfig, OutputLayout, UserType,
};
use std::path::{Path, PathBuf};

/// Lints silenced in every generated module.
pub const ALLOWED_LINTS: &[&str] = &[
    "unknown_lints",
    "deprecated",
    "clippy::identity_op",
    "clippy::too_many_arguments",
    "clippy::large_enum_variant",
    "clippy::doc_markdown",
];

/// Index file of the files layout.
pub const MOD_FILE: &str = "mod.rs";

/// One output file, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub contents: String,
}

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct Generated {
    pub files: Vec<GeneratedFile>,

    /// Resolved module names in emission order.
    pub modules: Vec<String>,

    /// Everything that was skipped or substituted along the way.
    pub diagnostics: Vec<Diagnostic>,
}

impl Generated {
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&GeneratedFile> {
        self.files.iter().find(|f| f.path == path.as_ref())
    }

    /// Write every file under `dir`, creating it if needed.
    pub fn write_all(&self, dir: &Path) -> GenResult<Vec<PathBuf>> {
        std::fs::create_dir_all(dir)?;
        let mut written = Vec::with_capacity(self.files.len());
        for file in &self.files {
            let path = dir.join(&file.path);
            std::fs::write(&path, &file.contents)?;
            written.push(path);
        }
        Ok(written)
    }
}

/// Generate Rust source for every namespace of `api`.
pub fn generate(api: &Api, config: &GeneratorConfig) -> Generated {
    let diagnostics = Diagnostics::new();
    let mut modules = Vec::with_capacity(api.namespaces.len());

    let files = match config.layout {
        OutputLayout::Files => {
            let mut files = Vec::with_capacity(api.namespaces.len() + 1);
            for namespace in &api.namespaces {
                let ctx = EmitContext::new(api, namespace, config, &diagnostics);
                let mut w = CodeWriter::new();
                emit_banner(&mut w);
                emit_inner_allow(&mut w);
                if let Some(doc) = &namespace.doc {
                    w.doc_comment("//!", doc, config.doc_width);
                    w.blank_line();
                }
                let module = emit_namespace(&ctx, &mut w);
                files.push(GeneratedFile {
                    path: PathBuf::from(format!("{module}.rs")),
                    contents: finish(w),
                });
                modules.push(module);
            }
            files.push(mod_file(&modules));
            files
        }
        OutputLayout::SingleFile => {
            let mut w = CodeWriter::new();
            emit_banner(&mut w);
            for namespace in &api.namespaces {
                let ctx = EmitContext::new(api, namespace, config, &diagnostics);
                let module = identifier(&namespace.name, IdentKind::Namespace);
                ctx.doc(&mut w, namespace.doc.as_deref());
                emit_outer_allow(&mut w);
                let mut emitted = String::new();
                w.block(&format!("pub mod {module}"), |w| {
                    emitted = emit_namespace(&ctx, w);
                });
                w.blank_line();
                modules.push(emitted);
            }
            vec![GeneratedFile {
                path: PathBuf::from(&config.single_file_name),
                contents: finish(w),
            }]
        }
    };

    tracing::info!(
        namespaces = modules.len(),
        files = files.len(),
        diagnostics = diagnostics.len(),
        "generation finished"
    );

    Generated {
        files,
        modules,
        diagnostics: diagnostics.into_vec(),
    }
}

/// Emit the items of one namespace and return its module name.
pub fn emit_namespace(ctx: &EmitContext<'_>, w: &mut CodeWriter) -> String {
    let namespace = ctx.namespace;
    tracing::debug!(
        namespace = %namespace.name,
        aliases = namespace.aliases.len(),
        routes = namespace.routes.len(),
        types = namespace.types.len(),
        "emitting namespace"
    );

    for alias in &namespace.aliases {
        ctx.doc(w, alias.doc.as_deref());
        w.line(format!(
            "pub type {} = {};",
            identifier(&alias.name, IdentKind::Alias),
            type_expr(ctx, &alias.data_type)
        ));
    }
    if !namespace.aliases.is_empty() {
        w.blank_line();
    }

    for route in &namespace.routes {
        routes::emit_route(ctx, w, route);
    }

    for user_type in &namespace.types {
        match user_type {
            UserType::Struct(s) if s.is_polymorphic() => {
                unions::emit_polymorphic_struct(ctx, w, s);
                serde_impl::emit_polymorphic_serde(ctx, w, s);
            }
            UserType::Struct(s) => {
                structs::emit_struct(ctx, w, s);
                serde_impl::emit_struct_serde(ctx, w, s);
            }
            UserType::Union(u) => {
                unions::emit_union(ctx, w, u);
                serde_impl::emit_union_serde(ctx, w, u);
                unions::emit_error_impl(w, u);
            }
        }
    }

    identifier(&namespace.name, IdentKind::Namespace)
}

fn emit_banner(w: &mut CodeWriter) {
    w.line("// DO NOT EDIT");
    w.line("// This file was generated by stonegen");
    w.blank_line();
}

fn emit_inner_allow(w: &mut CodeWriter) {
    emit_allow(w, "#![allow(");
    w.blank_line();
}

fn emit_outer_allow(w: &mut CodeWriter) {
    emit_allow(w, "#[allow(");
}

fn emit_allow(w: &mut CodeWriter, open: &str) {
    w.line(open);
    w.indented(|w| {
        for lint in ALLOWED_LINTS {
            w.line(format!("{lint},"));
        }
    });
    w.line(")]");
}

fn mod_file(modules: &[String]) -> GeneratedFile {
    let mut w = CodeWriter::new();
    emit_banner(&mut w);
    emit_inner_allow(&mut w);
    for module in modules {
        w.line(format!("pub mod {module};"));
    }
    GeneratedFile {
        path: PathBuf::from(MOD_FILE),
        contents: finish(w),
    }
}

/// Collapse trailing blank lines to a single newline.
fn finish(w: CodeWriter) -> String {
    let mut contents = w.into_string();
    let trimmed = contents.trim_end().len();
    contents.truncate(trimmed);
    contents.push('\n');
    contents
}
