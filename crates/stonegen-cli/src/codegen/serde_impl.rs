//! Hand-written `serde` impls for generated types.
//!
//! Every type travels as a flat field set. Sum types carry a `.tag` entry
//! naming the active variant, written first and required first when read:
//!
//! ```text
//! plain struct        {"path": "/a", "limit": 10}
//! unit variant        {".tag": "not_found"}
//! nested variant      {".tag": "path", "path": "/a"}
//! flattened variant   {".tag": "file", "name": "a.txt", "size": 3}
//! fieldless payload   {".tag": "empty", "empty": null}
//! ```
//!
//! Plain structs also get a crate-visible `internal_deserialize`, which reads
//! their fields from an already-open map. Flattened union variants and
//! polymorphic subtypes decode through it after the tag has been consumed.

use super::code_writer::CodeWriter;
use super::context::EmitContext;
use super::defaults::default_expr;
use super::naming::{IdentKind, identifier};
use super::rust_types::{PayloadShape, payload_shape, type_expr};
use super::unions::{UNKNOWN_VARIANT, subtype_variants};
use stonegen_core::{Struct, Union};

const DESERIALIZE_FN: &str =
    "fn deserialize<D: ::serde::de::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error>";
const SERIALIZE_FN: &str =
    "fn serialize<S: ::serde::ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error>";
const EXPECTING_FN: &str =
    "fn expecting(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result";
const VISIT_MAP_FN: &str =
    "fn visit_map<V: MapAccess<'de>>(self, mut map: V) -> Result<Self::Value, V::Error>";

/// Rust string literal for `s`.
fn lit(s: &str) -> String {
    format!("{s:?}")
}

fn string_slice(names: impl IntoIterator<Item = impl AsRef<str>>) -> String {
    let items: Vec<String> = names.into_iter().map(|n| lit(n.as_ref())).collect();
    format!("&[{}]", items.join(", "))
}

fn deserialize_impl<F>(w: &mut CodeWriter, type_name: &str, body: F)
where
    F: FnOnce(&mut CodeWriter),
{
    w.block(
        &format!("impl<'de> ::serde::de::Deserialize<'de> for {type_name}"),
        |w| w.block(DESERIALIZE_FN, body),
    );
    w.blank_line();
}

fn serialize_impl<F>(w: &mut CodeWriter, type_name: &str, body: F)
where
    F: FnOnce(&mut CodeWriter),
{
    w.block(
        &format!("impl ::serde::ser::Serialize for {type_name}"),
        |w| w.block(SERIALIZE_FN, body),
    );
    w.blank_line();
}

// Plain structs

pub fn emit_struct_serde(ctx: &EmitContext<'_>, w: &mut CodeWriter, s: &Struct) {
    let name = identifier(&s.name, IdentKind::Struct);

    emit_internal_deserialize(ctx, w, s, &name);

    deserialize_impl(w, &name, |w| {
        w.line("use ::serde::de::{MapAccess, Visitor};");
        w.line("struct StructVisitor;");
        w.block("impl<'de> Visitor<'de> for StructVisitor", |w| {
            w.line(format!("type Value = {name};"));
            w.block(EXPECTING_FN, |w| {
                w.line(format!("f.write_str({})", lit(&format!("a {} struct", s.name))));
            });
            if s.fields.is_empty() {
                w.block(
                    "fn visit_unit<E: ::serde::de::Error>(self) -> Result<Self::Value, E>",
                    |w| w.line(format!("Ok({name} {{}})")),
                );
            }
            w.block(
                "fn visit_map<V: MapAccess<'de>>(self, map: V) -> Result<Self::Value, V::Error>",
                |w| w.line(format!("{name}::internal_deserialize(map)")),
            );
        });
        if s.fields.is_empty() {
            w.line("deserializer.deserialize_any(StructVisitor)");
        } else {
            w.line(format!(
                "const FIELDS: &[&str] = {};",
                string_slice(s.fields.iter().map(|f| &f.name))
            ));
            w.line(format!(
                "deserializer.deserialize_struct({}, FIELDS, StructVisitor)",
                lit(&s.name)
            ));
        }
    });

    serialize_impl(w, &name, |w| {
        if s.fields.is_empty() {
            w.line(format!("serializer.serialize_unit_struct({})", lit(&s.name)));
            return;
        }
        w.line("use ::serde::ser::SerializeStruct;");
        w.line(format!(
            "let mut s = serializer.serialize_struct({}, {})?;",
            lit(&s.name),
            s.fields.len()
        ));
        for field in &s.fields {
            w.line(format!(
                "s.serialize_field({}, &self.{})?;",
                lit(&field.name),
                identifier(&field.name, IdentKind::Field)
            ));
        }
        w.line("s.end()");
    });
}

fn emit_internal_deserialize(ctx: &EmitContext<'_>, w: &mut CodeWriter, s: &Struct, name: &str) {
    w.block(&format!("impl {name}"), |w| {
        w.line("pub(crate) fn internal_deserialize<'de, V: ::serde::de::MapAccess<'de>>(");
        w.indented(|w| w.line("mut map: V,"));
        w.block(") -> Result<Self, V::Error>", |w| {
            w.line("use ::serde::de;");

            if s.fields.is_empty() {
                w.block("if let Some(key) = map.next_key::<String>()?", |w| {
                    w.line("return Err(de::Error::unknown_field(&key, &[]));");
                });
                w.line(format!("Ok({name} {{}})"));
                return;
            }

            w.line(format!(
                "const FIELDS: &[&str] = {};",
                string_slice(s.fields.iter().map(|f| &f.name))
            ));
            for field in &s.fields {
                w.line(format!(
                    "let mut field_{}: Option<{}> = None;",
                    identifier(&field.name, IdentKind::Field),
                    type_expr(ctx, &field.data_type)
                ));
            }

            w.block("while let Some(key) = map.next_key::<String>()?", |w| {
                w.block("match key.as_str()", |w| {
                    for field in &s.fields {
                        let local = format!("field_{}", identifier(&field.name, IdentKind::Field));
                        let raw = lit(&field.name);
                        w.block(&format!("{raw} =>"), |w| {
                            w.block(&format!("if {local}.is_some()"), |w| {
                                w.line(format!("return Err(de::Error::duplicate_field({raw}));"));
                            });
                            w.line(format!("{local} = Some(map.next_value()?);"));
                        });
                    }
                    w.line("_ => return Err(de::Error::unknown_field(&key, FIELDS)),");
                });
            });

            for field in s.required_fields() {
                let local = format!("field_{}", identifier(&field.name, IdentKind::Field));
                w.block_with_close(&format!("let Some({local}) = {local} else"), "};", |w| {
                    w.line(format!(
                        "return Err(de::Error::missing_field({}));",
                        lit(&field.name)
                    ));
                });
            }

            w.block_with_close(&format!("Ok({name}"), "})", |w| {
                for field in &s.fields {
                    let ident = identifier(&field.name, IdentKind::Field);
                    let value = if field.is_required() {
                        format!("field_{ident}")
                    } else if field.is_nullable() {
                        format!("field_{ident}.flatten()")
                    } else {
                        format!("field_{ident}.unwrap_or_else(|| {})", default_expr(ctx, field))
                    };
                    w.line(format!("{ident}: {value},"));
                }
            });
        });
    });
    w.blank_line();
}

// Sum types

/// One `match tag.as_str()` arm body producing the decoded variant.
struct DecodeArm {
    tag: String,
    expr: Vec<String>,
}

/// Visitor that reads `.tag`, dispatches on it, and rejects leftover keys.
fn emit_tag_dispatch(
    w: &mut CodeWriter,
    type_name: &str,
    raw_name: &str,
    arms: &[DecodeArm],
    catch_all: bool,
) {
    deserialize_impl(w, type_name, |w| {
        w.line("use ::serde::de::{self, MapAccess, Visitor};");
        w.line("struct EnumVisitor;");
        w.block("impl<'de> Visitor<'de> for EnumVisitor", |w| {
            w.line(format!("type Value = {type_name};"));
            w.block(EXPECTING_FN, |w| {
                w.line(format!("f.write_str({})", lit(&format!("a {raw_name} structure"))));
            });
            w.block(VISIT_MAP_FN, |w| {
                w.block_with_close("let tag: String = match map.next_key::<String>()?", "};", |w| {
                    w.line("Some(key) if key == \".tag\" => map.next_value()?,");
                    w.line(
                        "Some(key) => return Err(de::Error::custom(format_args!(\"expected `.tag` as the first key, found `{key}`\"))),",
                    );
                    w.line("None => return Err(de::Error::missing_field(\".tag\")),");
                });
                w.block_with_close("let value = match tag.as_str()", "};", |w| {
                    for arm in arms {
                        match arm.expr.as_slice() {
                            [single] => w.line(format!("{} => {single},", lit(&arm.tag))),
                            lines => {
                                w.line(format!("{} => {}", lit(&arm.tag), lines[0]));
                                w.indented(|w| {
                                    for line in &lines[1..lines.len() - 1] {
                                        w.line(line);
                                    }
                                });
                                w.line(format!("{},", lines[lines.len() - 1]));
                            }
                        }
                    }
                    if catch_all {
                        w.block("_ =>", |w| {
                            w.line("let mut fields = ::serde_json::Map::new();");
                            w.line(
                                "fields.insert(\".tag\".to_owned(), ::serde_json::Value::String(tag.clone()));",
                            );
                            w.block(
                                "while let Some((key, value)) = map.next_entry::<String, ::serde_json::Value>()?",
                                |w| w.line("fields.insert(key, value);"),
                            );
                            w.line(format!(
                                "{type_name}::{UNKNOWN_VARIANT}(::serde_json::Value::Object(fields))"
                            ));
                        });
                    } else {
                        w.line("_ => return Err(de::Error::unknown_variant(&tag, VARIANTS)),");
                    }
                });
                w.block("if let Some(key) = map.next_key::<String>()?", |w| {
                    w.line("return Err(de::Error::unknown_field(&key, &[]));");
                });
                w.line("Ok(value)");
            });
        });
        w.line(format!(
            "const VARIANTS: &[&str] = {};",
            string_slice(arms.iter().map(|a| &a.tag))
        ));
        w.line(format!(
            "deserializer.deserialize_struct({}, VARIANTS, EnumVisitor)",
            lit(raw_name)
        ));
    });
}

/// Serialize arm writing `.tag` followed by `entries` as `(key, value expression)`.
fn emit_tagged_arm(
    w: &mut CodeWriter,
    pattern: &str,
    raw_name: &str,
    tag: &str,
    entries: &[(String, String)],
) {
    w.block(&format!("{pattern} =>"), |w| {
        w.line(format!(
            "let mut s = serializer.serialize_struct({}, {})?;",
            lit(raw_name),
            entries.len() + 1
        ));
        w.line(format!("s.serialize_field(\".tag\", {})?;", lit(tag)));
        for (key, value) in entries {
            w.line(format!("s.serialize_field({}, {value})?;", lit(key)));
        }
        w.line("s.end()");
    });
}

fn emit_unknown_serialize_arm(w: &mut CodeWriter, type_name: &str) {
    w.line(format!(
        "{type_name}::{UNKNOWN_VARIANT}(_) => Err(::serde::ser::Error::custom(\"cannot serialize unknown variant\")),"
    ));
}

/// Entries of a struct's fields read through the binding `x`.
fn flattened_entries(s: &Struct) -> Vec<(String, String)> {
    s.fields
        .iter()
        .map(|f| {
            (
                f.name.clone(),
                format!("&x.{}", identifier(&f.name, IdentKind::Field)),
            )
        })
        .collect()
}

pub fn emit_polymorphic_serde(ctx: &EmitContext<'_>, w: &mut CodeWriter, s: &Struct) {
    let name = identifier(&s.name, IdentKind::Struct);
    let subtypes = subtype_variants(ctx, s);

    let arms: Vec<DecodeArm> = subtypes
        .iter()
        .map(|sub| DecodeArm {
            tag: sub.tag.to_string(),
            expr: vec![format!(
                "{name}::{}({}::internal_deserialize(&mut map)?)",
                sub.variant, sub.type_name
            )],
        })
        .collect();
    emit_tag_dispatch(w, &name, &s.name, &arms, s.is_catch_all());

    serialize_impl(w, &name, |w| {
        w.line("use ::serde::ser::SerializeStruct;");
        w.block("match *self", |w| {
            for sub in &subtypes {
                let binding = if sub.definition.fields.is_empty() { "_" } else { "ref x" };
                emit_tagged_arm(
                    w,
                    &format!("{name}::{}({binding})", sub.variant),
                    &s.name,
                    sub.tag,
                    &flattened_entries(sub.definition),
                );
            }
            if s.is_catch_all() {
                emit_unknown_serialize_arm(w, &name);
            }
        });
    });
}

pub fn emit_union_serde(ctx: &EmitContext<'_>, w: &mut CodeWriter, u: &Union) {
    let name = identifier(&u.name, IdentKind::Union);

    let arms: Vec<DecodeArm> = u
        .fields
        .iter()
        .map(|field| {
            let variant = format!("{name}::{}", identifier(&field.name, IdentKind::Variant));
            let key = lit(&field.name);
            let expr = match payload_shape(ctx, &field.data_type) {
                PayloadShape::Unit => vec![variant],
                PayloadShape::Flattened(_) => vec![format!(
                    "{variant}({}::internal_deserialize(&mut map)?)",
                    type_expr(ctx, ctx.api.unwrap_aliases(&field.data_type))
                )],
                shape => {
                    let absent = if shape == PayloadShape::FieldlessStruct {
                        format!(
                            "{variant}({} {{}})",
                            type_expr(ctx, ctx.api.unwrap_aliases(&field.data_type))
                        )
                    } else if ctx.api.unwrap_aliases(&field.data_type).is_nullable() {
                        format!("{variant}(None)")
                    } else {
                        format!("return Err(de::Error::missing_field({key}))")
                    };
                    vec![
                        "match map.next_key::<String>()? {".to_string(),
                        format!("Some(key) if key == {key} => {variant}(map.next_value()?),"),
                        format!("Some(key) => return Err(de::Error::unknown_field(&key, &[{key}])),"),
                        format!("None => {absent},"),
                        "}".to_string(),
                    ]
                }
            };
            DecodeArm {
                tag: field.name.clone(),
                expr,
            }
        })
        .collect();
    emit_tag_dispatch(w, &name, &u.name, &arms, u.catch_all);

    serialize_impl(w, &name, |w| {
        w.line("use ::serde::ser::SerializeStruct;");
        w.block("match *self", |w| {
            for field in &u.fields {
                let variant = format!("{name}::{}", identifier(&field.name, IdentKind::Variant));
                match payload_shape(ctx, &field.data_type) {
                    PayloadShape::Unit => {
                        emit_tagged_arm(w, &variant, &u.name, &field.name, &[]);
                    }
                    PayloadShape::FieldlessStruct => {
                        let entries = [(field.name.clone(), "&()".to_string())];
                        emit_tagged_arm(w, &format!("{variant}(_)"), &u.name, &field.name, &entries);
                    }
                    PayloadShape::Flattened(payload) => {
                        emit_tagged_arm(
                            w,
                            &format!("{variant}(ref x)"),
                            &u.name,
                            &field.name,
                            &flattened_entries(payload),
                        );
                    }
                    PayloadShape::Nested => {
                        let entries = [(field.name.clone(), "x".to_string())];
                        emit_tagged_arm(
                            w,
                            &format!("{variant}(ref x)"),
                            &u.name,
                            &field.name,
                            &entries,
                        );
                    }
                }
            }
            if u.catch_all {
                emit_unknown_serialize_arm(w, &name);
            }
        });
    });
}
