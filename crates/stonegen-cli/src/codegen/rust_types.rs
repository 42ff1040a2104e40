//! Rust type expressions for schema type descriptors.
//!
//! # Type Mappings
//!
//! | Schema | Rust |
//! |--------|------|
//! | `int32` / `uint32` / `int64` / `uint64` | `i32` / `u32` / `i64` / `u64` |
//! | `float32` / `float64` | `f32` / `f64` |
//! | `boolean` | `bool` |
//! | `string` | `String` |
//! | `timestamp` | `String /*Timestamp*/` (no structured timestamp type) |
//! | `bytes` | `Vec<u8>` |
//! | `void` | `()` |
//! | `nullable(T)` | `Option<T>` |
//! | `list(T)` | `Vec<T>` |
//! | `map(K, V)` | `::std::collections::HashMap<K, V>` |
//! | alias / struct / union | resolved name, `super::<module>::` prefixed across namespaces |

use super::context::EmitContext;
use super::naming::{IdentKind, identifier};
use stonegen_core::{DataType, Struct};

/// Rust type expression for `data_type` as seen from the context's namespace.
///
/// A reference to a type the schema does not define is recorded as a warning
/// and mapped to `()` so the rest of the namespace still generates.
pub fn type_expr(ctx: &EmitContext<'_>, data_type: &DataType) -> String {
    match data_type {
        DataType::Int32 => "i32".to_string(),
        DataType::UInt32 => "u32".to_string(),
        DataType::Int64 => "i64".to_string(),
        DataType::UInt64 => "u64".to_string(),
        DataType::Float32 => "f32".to_string(),
        DataType::Float64 => "f64".to_string(),
        DataType::Boolean => "bool".to_string(),
        DataType::String => "String".to_string(),
        DataType::Timestamp => "String /*Timestamp*/".to_string(),
        DataType::Bytes => "Vec<u8>".to_string(),
        DataType::Void => "()".to_string(),
        DataType::Nullable { inner } => format!("Option<{}>", type_expr(ctx, inner)),
        DataType::List { item } => format!("Vec<{}>", type_expr(ctx, item)),
        DataType::Map { key, value } => format!(
            "::std::collections::HashMap<{}, {}>",
            type_expr(ctx, key),
            type_expr(ctx, value)
        ),
        DataType::Alias { namespace, name } => {
            let found = ctx.api.lookup_alias(namespace, name).is_some();
            user_type_path(ctx, namespace, name, IdentKind::Alias, found, "alias")
        }
        DataType::Struct { namespace, name } => {
            let found = ctx.api.lookup_struct(namespace, name).is_some();
            user_type_path(ctx, namespace, name, IdentKind::Struct, found, "struct")
        }
        DataType::Union { namespace, name } => {
            let found = ctx.api.lookup_union(namespace, name).is_some();
            user_type_path(ctx, namespace, name, IdentKind::Union, found, "union")
        }
    }
}

fn user_type_path(
    ctx: &EmitContext<'_>,
    namespace: &str,
    name: &str,
    kind: IdentKind,
    found: bool,
    what: &str,
) -> String {
    if !found {
        ctx.diagnostics.warn(
            format!("{namespace}.{name}"),
            format!("unresolved {what} reference, substituting ()"),
        );
        return "()".to_string();
    }

    qualified_name(ctx, namespace, identifier(name, kind))
}

/// Prefix `ident` with its module when `namespace` is not the one being emitted.
pub fn qualified_name(ctx: &EmitContext<'_>, namespace: &str, ident: String) -> String {
    if ctx.is_current(namespace) {
        ident
    } else {
        format!(
            "super::{}::{}",
            identifier(namespace, IdentKind::Namespace),
            ident
        )
    }
}

/// Wire shape of a union variant payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PayloadShape<'a> {
    /// `void`: the variant is `.tag` alone.
    Unit,
    /// Struct without fields: `.tag` plus a unit value under the variant name.
    FieldlessStruct,
    /// Struct with fields: its fields sit next to `.tag`.
    Flattened(&'a Struct),
    /// Anything else: the value sits under the variant name.
    Nested,
}

/// Classify a variant payload, looking through aliases.
pub fn payload_shape<'a>(ctx: &EmitContext<'a>, data_type: &'a DataType) -> PayloadShape<'a> {
    match ctx.api.unwrap_aliases(data_type) {
        DataType::Void => PayloadShape::Unit,
        DataType::Struct { namespace, name } => match ctx.api.lookup_struct(namespace, name) {
            Some(s) if s.is_polymorphic() => PayloadShape::Nested,
            Some(s) if s.fields.is_empty() => PayloadShape::FieldlessStruct,
            Some(s) => PayloadShape::Flattened(s),
            None => PayloadShape::Nested,
        },
        _ => PayloadShape::Nested,
    }
}
