//! Shared schema fixture for emitter unit tests.

#![allow(clippy::unwrap_used)]

use super::code_writer::CodeWriter;
use super::context::EmitContext;
use stonegen_core::{Api, Diagnostic, Diagnostics, GeneratorConfig};

pub const SAMPLE: &str = r#"{
  "namespaces": [
    {
      "name": "common",
      "doc": "Types shared across namespaces.",
      "aliases": [{ "name": "Path", "data_type": { "type": "string" } }],
      "types": [
        { "kind": "struct", "name": "Empty" },
        {
          "kind": "union",
          "name": "Mode",
          "fields": [
            { "name": "add", "data_type": { "type": "void" } },
            { "name": "overwrite", "data_type": { "type": "void" } }
          ]
        }
      ]
    },
    {
      "name": "files",
      "aliases": [
        { "name": "Rev", "data_type": { "type": "string" } },
        { "name": "Limit", "data_type": { "type": "uint32" } },
        { "name": "Box", "data_type": { "type": "list", "item": { "type": "alias", "namespace": "common", "name": "Path" } } }
      ],
      "routes": [
        {
          "name": "list_folder",
          "doc": "List a folder.",
          "arg": { "type": "struct", "namespace": "files", "name": "ListFolderArg" },
          "result": { "type": "struct", "namespace": "files", "name": "Metadata" },
          "error": { "type": "union", "namespace": "files", "name": "ListFolderError" }
        },
        {
          "name": "download",
          "arg": { "type": "alias", "namespace": "common", "name": "Path" },
          "result": { "type": "struct", "namespace": "files", "name": "FileMetadata" },
          "error": { "type": "union", "namespace": "files", "name": "Lookup" },
          "attrs": { "host": "content", "style": "download" }
        },
        {
          "name": "upload",
          "arg": { "type": "alias", "namespace": "common", "name": "Path" },
          "result": { "type": "struct", "namespace": "files", "name": "FileMetadata" },
          "error": { "type": "void" },
          "attrs": { "host": "content", "style": "upload" }
        },
        {
          "name": "broken",
          "arg": { "type": "void" },
          "result": { "type": "void" },
          "error": { "type": "void" },
          "attrs": { "host": "elsewhere" }
        },
        {
          "name": "stream",
          "arg": { "type": "void" },
          "result": { "type": "void" },
          "error": { "type": "void" },
          "attrs": { "host": "notify", "style": "stream" }
        },
        {
          "name": "move",
          "arg": { "type": "void" },
          "result": { "type": "void" },
          "error": { "type": "void" },
          "attrs": { "host": "notify" }
        }
      ],
      "types": [
        {
          "kind": "struct",
          "name": "ListFolderArg",
          "doc": "Arguments for listing a folder.",
          "fields": [
            { "name": "path", "doc": "Folder to list.", "data_type": { "type": "alias", "namespace": "common", "name": "Path" } },
            { "name": "recursive", "data_type": { "type": "boolean" }, "default": false },
            { "name": "limit", "data_type": { "type": "alias", "namespace": "files", "name": "Limit" }, "default": 100 },
            { "name": "ratio", "data_type": { "type": "float64" }, "default": 1 },
            { "name": "rev", "data_type": { "type": "nullable", "inner": { "type": "alias", "namespace": "files", "name": "Rev" } } },
            { "name": "mode", "data_type": { "type": "union", "namespace": "common", "name": "Mode" },
              "default": { "namespace": "common", "union": "Mode", "tag": "overwrite" } },
            { "name": "label", "data_type": { "type": "string" }, "default": "inbox \"main\"" },
            { "name": "type", "data_type": { "type": "string" }, "default": "" }
          ]
        },
        {
          "kind": "struct",
          "name": "ListOptions",
          "fields": [
            { "name": "recursive", "data_type": { "type": "boolean" }, "default": true },
            { "name": "cursor", "data_type": { "type": "nullable", "inner": { "type": "string" } } }
          ]
        },
        {
          "kind": "struct",
          "name": "FileMetadata",
          "fields": [
            { "name": "name", "data_type": { "type": "string" } },
            { "name": "size", "data_type": { "type": "uint64" } }
          ]
        },
        {
          "kind": "struct",
          "name": "FolderMetadata",
          "fields": [{ "name": "name", "data_type": { "type": "string" } }]
        },
        {
          "kind": "struct",
          "name": "Metadata",
          "doc": "File or folder metadata.",
          "subtypes": {
            "catch_all": true,
            "members": [
              { "tag": "file", "namespace": "files", "name": "FileMetadata" },
              { "tag": "folder", "namespace": "files", "name": "FolderMetadata" }
            ]
          }
        },
        {
          "kind": "union",
          "name": "Lookup",
          "catch_all": true,
          "fields": [
            { "name": "not_found", "doc": "Nothing there.", "data_type": { "type": "void" } },
            { "name": "path", "data_type": { "type": "string" } },
            { "name": "meta", "data_type": { "type": "struct", "namespace": "files", "name": "Metadata" } },
            { "name": "arg", "data_type": { "type": "struct", "namespace": "files", "name": "FileMetadata" } },
            { "name": "empty", "data_type": { "type": "struct", "namespace": "common", "name": "Empty" } },
            { "name": "mode", "data_type": { "type": "union", "namespace": "common", "name": "Mode" } },
            { "name": "maybe", "data_type": { "type": "nullable", "inner": { "type": "string" } } }
          ]
        },
        {
          "kind": "union",
          "name": "ListFolderError",
          "fields": [
            { "name": "path", "data_type": { "type": "union", "namespace": "files", "name": "Lookup" } },
            { "name": "other", "data_type": { "type": "void" } }
          ]
        }
      ]
    }
  ]
}"#;

pub fn sample_api() -> Api {
    Api::from_json(SAMPLE).unwrap()
}

/// Run `emit` against namespace `namespace` of the sample schema and return
/// the emitted text plus every diagnostic recorded on the way.
pub fn emit_with<F>(namespace: &str, emit: F) -> (String, Vec<Diagnostic>)
where
    F: FnOnce(&EmitContext<'_>, &mut CodeWriter),
{
    let api = sample_api();
    emit_with_api(&api, namespace, emit)
}

pub fn emit_with_api<F>(api: &Api, namespace: &str, emit: F) -> (String, Vec<Diagnostic>)
where
    F: FnOnce(&EmitContext<'_>, &mut CodeWriter),
{
    let config = GeneratorConfig::default();
    let diagnostics = Diagnostics::new();
    let ns = api.namespace(namespace).unwrap();
    let ctx = EmitContext::new(api, ns, &config, &diagnostics);

    let mut w = CodeWriter::new();
    emit(&ctx, &mut w);

    (w.into_string(), diagnostics.into_vec())
}

/// Evaluate `f` with a context for `namespace` and collect its diagnostics.
pub fn with_ctx<T, F>(namespace: &str, f: F) -> (T, Vec<Diagnostic>)
where
    F: FnOnce(&EmitContext<'_>) -> T,
{
    let api = sample_api();
    let config = GeneratorConfig::default();
    let diagnostics = Diagnostics::new();
    let ns = api.namespace(namespace).unwrap();
    let ctx = EmitContext::new(&api, ns, &config, &diagnostics);

    let value = f(&ctx);
    (value, diagnostics.into_vec())
}
