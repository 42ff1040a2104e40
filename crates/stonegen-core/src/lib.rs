//! stonegen-core - Schema model, configuration, and diagnostics
//!
//! This crate provides the foundational types shared by the stonegen code generator:
//! - [`Api`] and the rest of the schema model handed over by the IDL front end
//! - [`GeneratorConfig`] for output layout and helper API paths
//! - [`GenError`] for fatal input errors
//! - [`Diagnostics`] for non-fatal generator findings

mod config;
mod diagnostic;
mod error;
mod schema;

pub use config::{GeneratorConfig, OutputLayout};
pub use diagnostic::{Diagnostic, Diagnostics, Severity};
pub use error::{GenError, GenResult};
pub use schema::{
    Alias, Api, DataType, DefaultValue, Field, Namespace, Route, Struct, Subtype, Subtypes,
    TagRef, Union, UserType,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Alias, Api, DataType, DefaultValue, Diagnostic, Diagnostics, Field, GenError, GenResult,
        GeneratorConfig, Namespace, OutputLayout, Route, Severity, Struct, Subtype, Subtypes,
        TagRef, Union, UserType,
    };
}
