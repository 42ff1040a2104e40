//! Rust expressions realizing declared field defaults.

use super::context::EmitContext;
use super::naming::{IdentKind, identifier};
use super::rust_types::type_expr;
use stonegen_core::{DataType, DefaultValue, Field, TagRef};

/// Expression for the value a field takes when it is not supplied.
///
/// Nullable fields are `None`. Everything else follows the declared default,
/// checked against the field's type with aliases unwrapped.
pub fn default_expr(ctx: &EmitContext<'_>, field: &Field) -> String {
    if field.is_nullable() {
        return "None".to_string();
    }

    let Some(default) = &field.default else {
        ctx.diagnostics.warn(
            ctx.subject(&field.name),
            "field has neither a default nor a nullable type",
        );
        return "::std::default::Default::default()".to_string();
    };

    let target = ctx.api.unwrap_aliases(&field.data_type);

    if target.is_numeric() {
        if let Some(literal) = numeric_literal(default, target.is_float()) {
            return literal;
        }
    }

    match (target, default) {
        (_, DefaultValue::TagRef(tag)) => tag_ref_expr(ctx, field, tag),
        (DataType::Boolean, DefaultValue::Bool(b)) => b.to_string(),
        (DataType::String, DefaultValue::String(s)) => {
            if default.is_falsy() {
                "String::new()".to_string()
            } else {
                format!("{s:?}.to_owned()")
            }
        }
        _ => {
            ctx.diagnostics.warn(
                ctx.subject(&field.name),
                format!("unhandled default value {default}"),
            );
            default.to_string()
        }
    }
}

fn numeric_literal(default: &DefaultValue, float: bool) -> Option<String> {
    let literal = match *default {
        DefaultValue::Integer(i) if float => format!("{:?}", i as f64),
        DefaultValue::Unsigned(u) if float => format!("{:?}", u as f64),
        DefaultValue::Float(v) if float => format!("{v:?}"),
        DefaultValue::Integer(i) => i.to_string(),
        DefaultValue::Unsigned(u) => u.to_string(),
        _ => return None,
    };
    Some(literal)
}

/// `Union::Variant` for a default naming one variant of a union.
///
/// An unknown variant name falls back to the union's last variant.
fn tag_ref_expr(ctx: &EmitContext<'_>, field: &Field, tag: &TagRef) -> String {
    let union_type = type_expr(ctx, &DataType::union_ref(&tag.namespace, &tag.union));

    let Some(union) = ctx.api.lookup_union(&tag.namespace, &tag.union) else {
        // type_expr already reported the missing union
        return "::std::default::Default::default()".to_string();
    };

    let variant = match union.fields.iter().find(|v| v.name == tag.tag) {
        Some(variant) => variant,
        None => {
            let known: Vec<&str> = union.fields.iter().map(|v| v.name.as_str()).collect();
            let Some(last) = union.fields.last() else {
                ctx.diagnostics.error(
                    ctx.subject(&field.name),
                    format!("default names variant {:?} of a union with no variants", tag.tag),
                );
                return "::std::default::Default::default()".to_string();
            };
            ctx.diagnostics.error(
                ctx.subject(&field.name),
                format!(
                    "no variant {:?} in {}.{} (variants: {}); using {:?}",
                    tag.tag,
                    tag.namespace,
                    tag.union,
                    known.join(", "),
                    last.name
                ),
            );
            last
        }
    };

    format!("{union_type}::{}", identifier(&variant.name, IdentKind::Variant))
}
