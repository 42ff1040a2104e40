//! Integration tests for the generate pipeline.
//!
//! Drives schema loading, generation, and file output end to end against a
//! fixture schema on disk.

#![allow(non_snake_case)]

use std::fs;
use std::path::PathBuf;
use stonegen_cli::generate::generate_to;
use stonegen_core::{GeneratorConfig, OutputLayout, Severity};
use tempfile::TempDir;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("api.json")
}

#[test]
fn generate___fixture___every_namespace_written() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("generated");

    let generated = generate_to(&fixture(), &output, &GeneratorConfig::default()).unwrap();

    assert_eq!(generated.modules, vec!["common", "files"]);
    for name in ["common.rs", "files.rs", "mod.rs"] {
        assert!(output.join(name).is_file(), "missing {name}");
    }
}

#[test]
fn generate___fixture___cross_namespace_references_qualified() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("generated");

    generate_to(&fixture(), &output, &GeneratorConfig::default()).unwrap();

    let files = fs::read_to_string(output.join("files.rs")).unwrap();
    assert!(files.contains("pub path: super::common::Path,"));
    assert!(files.contains("super::common::WriteMode::Add"));
}

#[test]
fn generate___fixture___unsupported_route_reported_and_skipped() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("generated");

    let generated = generate_to(&fixture(), &output, &GeneratorConfig::default()).unwrap();

    let files = fs::read_to_string(output.join("files.rs")).unwrap();
    assert!(files.contains("pub fn get_metadata("));
    assert!(files.contains("pub fn download("));
    assert!(!files.contains("pub fn legacy("));
    assert_eq!(generated.diagnostics.len(), 1);
    assert_eq!(generated.diagnostics[0].severity, Severity::Error);
    assert_eq!(generated.diagnostics[0].subject, "files.legacy");
}

#[test]
fn generate___fixture___error_union_implements_error() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("generated");

    generate_to(&fixture(), &output, &GeneratorConfig::default()).unwrap();

    let files = fs::read_to_string(output.join("files.rs")).unwrap();
    assert!(files.contains("impl ::std::error::Error for GetMetadataError {"));
    assert!(files.contains("impl ::std::fmt::Display for GetMetadataError {"));
}

#[test]
fn generate___single_file___custom_helper_paths_used() {
    let temp = TempDir::new().unwrap();
    let mut config = GeneratorConfig::default().with_layout(OutputLayout::SingleFile);
    config.client_trait_path = "crate::http".into();
    config.client_helpers_path = "crate::http::helpers".into();

    generate_to(&fixture(), temp.path(), &config).unwrap();

    let contents = fs::read_to_string(temp.path().join("generated.rs")).unwrap();
    assert!(contents.contains("client: &dyn crate::http::HttpClient,"));
    assert!(contents.contains("crate::http::helpers::request(client, crate::http::Endpoint::Api"));
    assert!(!contents.contains("crate::client_trait"));
}

#[test]
fn generate___twice___identical_output() {
    let temp = TempDir::new().unwrap();
    let first = temp.path().join("first");
    let second = temp.path().join("second");

    generate_to(&fixture(), &first, &GeneratorConfig::default()).unwrap();
    generate_to(&fixture(), &second, &GeneratorConfig::default()).unwrap();

    for name in ["common.rs", "files.rs", "mod.rs"] {
        assert_eq!(
            fs::read_to_string(first.join(name)).unwrap(),
            fs::read_to_string(second.join(name)).unwrap()
        );
    }
}
