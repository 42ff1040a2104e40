//! Runtime behavior of the generated types: defaults, builders, and the
//! wire encoding of structs, unions, and polymorphic structs.

#![allow(non_snake_case)]

use serde_json::{Value, json};
use stonegen_consumer::generated::common::{Empty, WriteMode};
use stonegen_consumer::generated::files::{
    Entry, FileMetadata, FolderMetadata, ListFolderArg, ListFolderError, ListOptions, Lookup,
    Metadata,
};
use test_case::test_case;

fn decode_err<T: serde::de::DeserializeOwned + std::fmt::Debug>(json: &str) -> String {
    serde_json::from_str::<T>(json).unwrap_err().to_string()
}

fn entry_count(value: &Value) -> usize {
    value.as_object().map_or(0, |o| o.len())
}

// =============================================================================
// Structs
// =============================================================================

#[test]
fn ListOptions___all_optional___default_matches_empty_decode() {
    let decoded: ListOptions = serde_json::from_str("{}").unwrap();

    assert_eq!(decoded, ListOptions::default());
    assert!(!decoded.recursive);
    assert_eq!(decoded.limit, 100);
    assert_eq!(decoded.cursor, None);
}

#[test]
fn ListFolderArg___new___optional_fields_take_declared_defaults() {
    let arg = ListFolderArg::new("/docs".to_string());

    assert_eq!(arg.path, "/docs");
    assert!(!arg.recursive);
    assert_eq!(arg.mode, WriteMode::Overwrite);
    assert_eq!(arg.ratio, 1.0);
    assert_eq!(arg.label, "inbox \"main\"");
    assert_eq!(arg.type_field, "");
    assert_eq!(arg.rev, None);
}

#[test]
fn ListFolderArg___builders___override_defaults() {
    let arg = ListFolderArg::new("/docs".to_string())
        .with_recursive(true)
        .with_mode(WriteMode::Add)
        .with_rev(Some("a1b2".to_string()));

    assert!(arg.recursive);
    assert_eq!(arg.mode, WriteMode::Add);
    assert_eq!(arg.rev.as_deref(), Some("a1b2"));
}

#[test]
fn ListFolderArg___decode_only_required___same_as_new() {
    let decoded: ListFolderArg = serde_json::from_str(r#"{"path": "/docs"}"#).unwrap();

    assert_eq!(decoded, ListFolderArg::new("/docs".to_string()));
}

#[test]
fn ListFolderArg___encode___every_field_under_wire_name() {
    let value = serde_json::to_value(ListFolderArg::new("/docs".to_string())).unwrap();

    assert_eq!(
        value,
        json!({
            "path": "/docs",
            "recursive": false,
            "mode": { ".tag": "overwrite" },
            "ratio": 1.0,
            "label": "inbox \"main\"",
            "type": "",
            "rev": null
        })
    );
}

#[test]
fn ListFolderArg___explicit_null_for_nullable___decodes_to_none() {
    let decoded: ListFolderArg = serde_json::from_str(r#"{"path": "/a", "rev": null}"#).unwrap();

    assert_eq!(decoded.rev, None);
}

#[test]
fn ListFolderArg___missing_required___fails() {
    let err = decode_err::<ListFolderArg>(r#"{"recursive": true}"#);

    assert!(err.contains("missing field `path`"), "{err}");
}

#[test]
fn ListFolderArg___duplicate_field___fails() {
    let err = decode_err::<ListFolderArg>(r#"{"path": "/a", "path": "/b"}"#);

    assert!(err.contains("duplicate field `path`"), "{err}");
}

#[test]
fn ListFolderArg___unknown_field___fails() {
    let err = decode_err::<ListFolderArg>(r#"{"path": "/a", "color": "red"}"#);

    assert!(err.contains("unknown field `color`"), "{err}");
}

#[test]
fn Empty___encodes_as_unit() {
    assert_eq!(serde_json::to_string(&Empty {}).unwrap(), "null");
}

#[test_case("null" ; "unit value")]
#[test_case("{}" ; "empty object")]
fn Empty___decodes_from(json: &str) {
    let decoded: Empty = serde_json::from_str(json).unwrap();

    assert_eq!(decoded, Empty::default());
}

#[test]
fn Empty___any_key___fails() {
    let err = decode_err::<Empty>(r#"{"x": 1}"#);

    assert!(err.contains("unknown field `x`"), "{err}");
}

// =============================================================================
// Unions
// =============================================================================

#[test_case(Lookup::NotFound, json!({".tag": "not_found"}), 1 ; "unit variant")]
#[test_case(Lookup::MalformedPath("a//b".into()), json!({".tag": "malformed_path", "malformed_path": "a//b"}), 2 ; "nested primitive")]
#[test_case(Lookup::File(FileMetadata { name: "a.txt".into(), size: 3 }), json!({".tag": "file", "name": "a.txt", "size": 3}), 3 ; "flattened struct")]
#[test_case(Lookup::Empty(Empty {}), json!({".tag": "empty", "empty": null}), 2 ; "fieldless struct")]
#[test_case(Lookup::Mode(WriteMode::Add), json!({".tag": "mode", "mode": {".tag": "add"}}), 2 ; "nested union")]
#[test_case(Lookup::Hint(None), json!({".tag": "hint", "hint": null}), 2 ; "nullable payload")]
#[test_case(Lookup::Meta(Metadata::Folder(FolderMetadata { name: "docs".into() })), json!({".tag": "meta", "meta": {".tag": "folder", "name": "docs"}}), 2 ; "nested polymorphic")]
fn Lookup___wire_form(variant: Lookup, expected: Value, entries: usize) {
    let encoded = serde_json::to_value(&variant).unwrap();
    assert_eq!(encoded, expected);
    assert_eq!(entry_count(&encoded), entries);

    let decoded: Lookup = serde_json::from_value(expected).unwrap();
    assert_eq!(decoded, variant);
}

#[test]
fn Lookup___absent_nullable_payload___decodes_to_none() {
    let decoded: Lookup = serde_json::from_str(r#"{".tag": "hint"}"#).unwrap();

    assert_eq!(decoded, Lookup::Hint(None));
}

#[test]
fn Lookup___absent_fieldless_payload___decodes_to_empty() {
    let decoded: Lookup = serde_json::from_str(r#"{".tag": "empty"}"#).unwrap();

    assert_eq!(decoded, Lookup::Empty(Empty {}));
}

#[test]
fn Lookup___absent_required_payload___fails() {
    let err = decode_err::<Lookup>(r#"{".tag": "malformed_path"}"#);

    assert!(err.contains("missing field `malformed_path`"), "{err}");
}

#[test]
fn Lookup___empty_field_set___missing_tag() {
    let err = decode_err::<Lookup>("{}");

    assert!(err.contains("missing field `.tag`"), "{err}");
}

#[test]
fn Lookup___no_tag___names_first_key() {
    let err = decode_err::<Lookup>(r#"{"name": "a.txt", "size": 3}"#);

    assert!(err.contains("expected `.tag` as the first key, found `name`"), "{err}");
}

#[test]
fn Metadata___tag_after_fields___rejected_with_tag_order_error() {
    let err = decode_err::<Metadata>(r#"{"name": "a.txt", "size": 3, ".tag": "file"}"#);

    assert!(err.contains("expected `.tag` as the first key, found `name`"), "{err}");
}

#[test]
fn Lookup___leftover_key_after_unit_variant___fails() {
    let err = decode_err::<Lookup>(r#"{".tag": "not_found", "extra": 1}"#);

    assert!(err.contains("unknown field `extra`"), "{err}");
}

#[test]
fn Lookup___unknown_tag___kept_as_raw_value() {
    let decoded: Lookup = serde_json::from_str(r#"{".tag": "moved", "to": "/b"}"#).unwrap();

    assert_eq!(decoded, Lookup::_Unknown(json!({".tag": "moved", "to": "/b"})));
}

#[test]
fn Lookup___unknown_variant___cannot_be_encoded() {
    let err = serde_json::to_string(&Lookup::_Unknown(json!({".tag": "moved"}))).unwrap_err();

    assert!(err.to_string().contains("cannot serialize unknown variant"));
}

#[test]
fn WriteMode___closed_union___rejects_unknown_tag() {
    let err = decode_err::<WriteMode>(r#"{".tag": "append"}"#);

    assert!(err.contains("unknown variant `append`"), "{err}");
}

#[test]
fn ListFolderError___nested_union_payload___round_trips() {
    let error = ListFolderError::Path(Lookup::NotFound);

    let encoded = serde_json::to_value(&error).unwrap();
    assert_eq!(encoded, json!({".tag": "path", "path": {".tag": "not_found"}}));
    assert_eq!(serde_json::from_value::<ListFolderError>(encoded).unwrap(), error);
}

#[test]
fn ListFolderError___implements_std_error() {
    let error: Box<dyn std::error::Error> = Box::new(ListFolderError::Other);

    assert_eq!(error.to_string(), "Other");
}

// =============================================================================
// Polymorphic structs
// =============================================================================

#[test]
fn Metadata___subtype_fields_flattened_next_to_tag() {
    let file = Metadata::File(FileMetadata {
        name: "a.txt".into(),
        size: 3,
    });

    let encoded = serde_json::to_value(&file).unwrap();

    assert_eq!(encoded, json!({".tag": "file", "name": "a.txt", "size": 3}));
    assert_eq!(serde_json::from_value::<Metadata>(encoded).unwrap(), file);
}

#[test]
fn Metadata___catch_all___unknown_subtype_kept() {
    let decoded: Metadata = serde_json::from_str(r#"{".tag": "symlink", "target": "/a"}"#).unwrap();

    assert_eq!(
        decoded,
        Metadata::_Unknown(json!({".tag": "symlink", "target": "/a"}))
    );
}

#[test]
fn Metadata___subtype_missing_field___fails() {
    let err = decode_err::<Metadata>(r#"{".tag": "file", "name": "a.txt"}"#);

    assert!(err.contains("missing field `size`"), "{err}");
}

#[test]
fn Entry___closed_family___rejects_unknown_subtype() {
    let err = decode_err::<Entry>(r#"{".tag": "folder", "name": "docs"}"#);

    assert!(err.contains("unknown variant `folder`"), "{err}");
}
