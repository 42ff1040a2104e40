//! stonegen - Rust code generator for Stone-style IDL schemas
//!
//! The library half of the `stonegen` binary:
//! - [`codegen`] turns a resolved [`Api`](stonegen_core::Api) into Rust source
//! - [`manifest`] loads `stonegen.toml` generator settings
//! - [`generate`] ties both to the file system, as used by the CLI and build scripts

pub mod codegen;
pub mod generate;
pub mod manifest;
