//! Sum types: tagged unions and polymorphic structs.
//!
//! Both become a Rust enum. Union variants with a `void` payload are unit
//! variants; polymorphic structs get one variant per subtype wrapping the
//! subtype's struct. Open (catch-all) types add `_Unknown`, which holds the
//! raw wire value of any tag this schema does not know.

use super::code_writer::CodeWriter;
use super::context::EmitContext;
use super::naming::{IdentKind, identifier};
use super::rust_types::{PayloadShape, payload_shape, type_expr};
use stonegen_core::{DataType, Struct, Union};

/// Name of the variant carrying unrecognized wire values.
pub const UNKNOWN_VARIANT: &str = "_Unknown";

/// A subtype of a polymorphic struct whose struct definition was found.
#[derive(Debug, Clone)]
pub struct SubtypeVariant<'a> {
    /// Named after the wire tag rather than the subtype struct, so `Metadata::File` not `Metadata::FileMetadata`.
    pub variant: String,
    pub tag: &'a str,
    pub type_name: String,
    pub definition: &'a Struct,
}

/// Subtypes of `s` in declaration order, skipping any the schema does not define.
pub fn subtype_variants<'a>(ctx: &EmitContext<'a>, s: &'a Struct) -> Vec<SubtypeVariant<'a>> {
    let Some(subtypes) = &s.subtypes else {
        return Vec::new();
    };

    subtypes
        .members
        .iter()
        .filter_map(|member| {
            let definition = ctx.api.lookup_struct(&member.namespace, &member.name)?;
            Some(SubtypeVariant {
                variant: identifier(&member.tag, IdentKind::Variant),
                tag: &member.tag,
                type_name: type_expr(ctx, &DataType::struct_ref(&member.namespace, &member.name)),
                definition,
            })
        })
        .collect()
}

pub fn emit_polymorphic_struct(ctx: &EmitContext<'_>, w: &mut CodeWriter, s: &Struct) {
    let name = identifier(&s.name, IdentKind::Struct);

    if let Some(subtypes) = &s.subtypes {
        for member in &subtypes.members {
            if ctx.api.lookup_struct(&member.namespace, &member.name).is_none() {
                ctx.diagnostics.error(
                    ctx.subject(&s.name),
                    format!(
                        "subtype {:?} refers to undefined struct {}.{}, variant skipped",
                        member.tag, member.namespace, member.name
                    ),
                );
            }
        }
    }

    ctx.doc(w, s.doc.as_deref());
    w.line("#[derive(Debug, Clone, PartialEq)]");
    w.block(&format!("pub enum {name}"), |w| {
        for subtype in subtype_variants(ctx, s) {
            w.line(format!("{}({}),", subtype.variant, subtype.type_name));
        }
        if s.is_catch_all() {
            tracing::debug!(subject = %ctx.subject(&s.name), "open subtype family");
            w.line(format!("{UNKNOWN_VARIANT}(::serde_json::Value),"));
        }
    });
    w.blank_line();
}

pub fn emit_union(ctx: &EmitContext<'_>, w: &mut CodeWriter, u: &Union) {
    let name = identifier(&u.name, IdentKind::Union);

    ctx.doc(w, u.doc.as_deref());
    w.line("#[derive(Debug, Clone, PartialEq)]");
    w.block(&format!("pub enum {name}"), |w| {
        for field in &u.fields {
            ctx.doc(w, field.doc.as_deref());
            let variant = identifier(&field.name, IdentKind::Variant);
            if payload_shape(ctx, &field.data_type) == PayloadShape::Unit {
                w.line(format!("{variant},"));
            } else {
                w.line(format!("{variant}({}),", type_expr(ctx, &field.data_type)));
            }
        }
        if u.catch_all {
            tracing::debug!(subject = %ctx.subject(&u.name), "open union");
            w.line(format!("{UNKNOWN_VARIANT}(::serde_json::Value),"));
        }
    });
    w.blank_line();
}

/// `Error` and `Display` for unions named `...Error`.
pub fn emit_error_impl(w: &mut CodeWriter, u: &Union) {
    if !u.name.ends_with("Error") {
        return;
    }
    let name = identifier(&u.name, IdentKind::Union);

    w.block(&format!("impl ::std::error::Error for {name}"), |w| {
        w.block("fn description(&self) -> &str", |w| {
            w.line(format!("{name:?}"));
        });
    });
    w.blank_line();
    w.block(&format!("impl ::std::fmt::Display for {name}"), |w| {
        w.block(
            "fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result",
            |w| {
                w.line("write!(f, \"{:?}\", *self)");
            },
        );
    });
    w.blank_line();
}
