//! Plain struct definitions with their constructors.
//!
//! A struct whose fields are all optional (nullable or defaulted) gets a
//! `Default` impl. Otherwise it gets `new` taking the required fields in
//! declaration order, plus one `with_<field>` builder per optional field.

use super::code_writer::CodeWriter;
use super::context::EmitContext;
use super::defaults::default_expr;
use super::naming::{IdentKind, identifier};
use super::rust_types::type_expr;
use stonegen_core::Struct;

pub fn emit_struct(ctx: &EmitContext<'_>, w: &mut CodeWriter, s: &Struct) {
    let name = identifier(&s.name, IdentKind::Struct);

    ctx.doc(w, s.doc.as_deref());
    w.line("#[derive(Debug, Clone, PartialEq)]");
    if s.fields.is_empty() {
        w.line(format!("pub struct {name} {{}}"));
    } else {
        w.block(&format!("pub struct {name}"), |w| {
            for field in &s.fields {
                ctx.doc(w, field.doc.as_deref());
                w.line(format!(
                    "pub {}: {},",
                    identifier(&field.name, IdentKind::Field),
                    type_expr(ctx, &field.data_type)
                ));
            }
        });
    }
    w.blank_line();

    if s.has_required_fields() {
        emit_constructor(ctx, w, s, &name);
    } else {
        emit_default_impl(ctx, w, s, &name);
    }
    w.blank_line();
}

fn emit_default_impl(ctx: &EmitContext<'_>, w: &mut CodeWriter, s: &Struct, name: &str) {
    w.block(&format!("impl Default for {name}"), |w| {
        w.block("fn default() -> Self", |w| {
            if s.fields.is_empty() {
                w.line(format!("{name} {{}}"));
                return;
            }
            w.block(name, |w| {
                for field in &s.fields {
                    w.line(format!(
                        "{}: {},",
                        identifier(&field.name, IdentKind::Field),
                        default_expr(ctx, field)
                    ));
                }
            });
        });
    });
}

fn emit_constructor(ctx: &EmitContext<'_>, w: &mut CodeWriter, s: &Struct, name: &str) {
    let params = s
        .required_fields()
        .map(|f| {
            format!(
                "{}: {}",
                identifier(&f.name, IdentKind::Field),
                type_expr(ctx, &f.data_type)
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    w.block(&format!("impl {name}"), |w| {
        w.block(&format!("pub fn new({params}) -> Self"), |w| {
            w.block(name, |w| {
                for field in &s.fields {
                    let field_name = identifier(&field.name, IdentKind::Field);
                    if field.is_required() {
                        w.line(format!("{field_name},"));
                    } else {
                        w.line(format!("{field_name}: {},", default_expr(ctx, field)));
                    }
                }
            });
        });

        for field in s.optional_fields() {
            let field_name = identifier(&field.name, IdentKind::Field);
            w.blank_line();
            w.block(
                &format!(
                    "pub fn with_{field_name}(mut self, value: {}) -> Self",
                    type_expr(ctx, &field.data_type)
                ),
                |w| {
                    w.line(format!("self.{field_name} = value;"));
                    w.line("self");
                },
            );
        }
    });
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::codegen::test_support::{emit_with, sample_api};

    fn emit_named(namespace: &str, name: &str) -> String {
        let api = sample_api();
        let s = api.lookup_struct(namespace, name).unwrap().clone();
        let (out, diagnostics) = emit_with(namespace, |ctx, w| emit_struct(ctx, w, &s));
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        out
    }

    #[test]
    fn emit_struct___declares_every_field_with_docs() {
        let out = emit_named("files", "ListFolderArg");

        assert!(out.starts_with("/// Arguments for listing a folder.\n#[derive(Debug, Clone, PartialEq)]\npub struct ListFolderArg {\n"));
        assert!(out.contains("    /// Folder to list.\n    pub path: super::common::Path,\n"));
        assert!(out.contains("    pub limit: Limit,\n"));
        assert!(out.contains("    pub rev: Option<Rev>,\n"));
        assert!(out.contains("    pub type_field: String,\n"));
    }

    #[test]
    fn emit_struct___required_fields___constructor_and_builders() {
        let out = emit_named("files", "ListFolderArg");

        assert!(out.contains("    pub fn new(path: super::common::Path) -> Self {\n"));
        assert!(out.contains("            path,\n"));
        assert!(out.contains("            mode: super::common::Mode::Overwrite,\n"));
        assert!(out.contains("    pub fn with_rev(mut self, value: Option<Rev>) -> Self {\n        self.rev = value;\n        self\n    }\n"));
        assert!(out.contains("pub fn with_type_field(mut self, value: String) -> Self"));
        assert!(!out.contains("fn with_path"));
        assert!(!out.contains("impl Default for ListFolderArg"));
    }

    #[test]
    fn emit_struct___all_optional___default_impl() {
        let out = emit_named("files", "ListOptions");

        assert!(out.contains(
            "impl Default for ListOptions {\n    fn default() -> Self {\n        ListOptions {\n            recursive: true,\n            cursor: None,\n        }\n    }\n}\n"
        ));
        assert!(!out.contains("pub fn new"));
    }

    #[test]
    fn emit_struct___fieldless___empty_braces_and_default() {
        let out = emit_named("common", "Empty");

        assert!(out.contains("pub struct Empty {}\n"));
        assert!(out.contains("    fn default() -> Self {\n        Empty {}\n    }\n"));
    }

    #[test]
    fn emit_struct___only_required___constructor_without_builders() {
        let out = emit_named("files", "FileMetadata");

        assert!(out.contains("pub fn new(name: String, size: u64) -> Self"));
        assert!(!out.contains("pub fn with_"));
    }
}
