//! Rust code generation from a resolved schema.
//!
//! # Architecture
//!
//! ```text
//! Api (schema model)
//!     ↓
//!  [driver]  namespace order, layout, module index
//!     ↓
//!  ├─→ [routes]      client stubs
//!  ├─→ [structs]     plain structs, constructors, builders
//!  ├─→ [unions]      unions and polymorphic structs
//!  └─→ [serde_impl]  Serialize / Deserialize for each type
//!          ↓
//!  [rust_types] [defaults] [naming]
//! ```
//!
//! Emitters write through a [`CodeWriter`](code_writer::CodeWriter) and report
//! problems to the run's [`Diagnostics`](stonegen_core::Diagnostics) instead of
//! failing; generation always produces output for everything it can.
//!
//! # Usage
//!
//! ```rust
//! use stonegen_cli::codegen::generate;
//! use stonegen_core::{Api, GeneratorConfig};
//!
//! let api = Api::from_json(r#"{ "namespaces": [{ "name": "files" }] }"#).unwrap();
//! let generated = generate(&api, &GeneratorConfig::default());
//!
//! assert_eq!(generated.modules, vec!["files"]);
//! assert!(generated.file("mod.rs").unwrap().contents.contains("pub mod files;"));
//! ```

pub mod code_writer;
pub mod context;
pub mod defaults;
pub mod driver;
pub mod naming;
pub mod routes;
pub mod rust_types;
pub mod serde_impl;
pub mod structs;
pub mod unions;

#[cfg(test)]
pub(crate) mod test_support;

pub use driver::{Generated, GeneratedFile, generate};
