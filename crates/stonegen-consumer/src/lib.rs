//! stonegen-consumer - Compiles and exercises stonegen output
//!
//! The build script generates [`generated`] from `schema/api.json`. This crate
//! supplies the client API the generated route functions call into:
//! - [`client_trait`]: the transport seam (`HttpClient`, `Endpoint`, `HttpRequestResult`)
//! - [`client_helpers`]: argument encoding and result decoding around one call
//! - [`Error`] / [`Result`]: transport-level failures

pub mod client_helpers;
pub mod client_trait;
mod error;

pub use error::{Error, Result};

/// Code generated from `schema/api.json` by the build script.
pub mod generated {
    include!(concat!(env!("OUT_DIR"), "/generated.rs"));
}
