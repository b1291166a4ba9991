//! Derive macro for `cfgstruct`.
//!
//! ```ignore
//! #[derive(Config)]
//! pub struct ServerConfig {
//!     #[config(default = "0.0.0.0:7777")]
//!     pub address: String,
//!
//!     #[config(release_default = false, dev_default = true)]
//!     pub debug: bool,
//!
//!     /// Nested structs and fixed-size arrays of them need no attribute.
//!     pub tls: TlsConfig,
//!
//!     #[config(skip)]
//!     pub started_at: Option<Instant>,
//! }
//! ```
//!
//! # Field attributes
//!
//! - `#[config(default = <lit>)]` - default in every mode
//! - `#[config(release_default = <lit>)]` - default in release mode
//! - `#[config(dev_default = <lit>)]` - default in dev mode
//! - `#[config(skip)]` - leave the field unbound
//!
//! `<lit>` may be a string, integer, float or bool literal.

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive `cfgstruct::Config` and `cfgstruct::Node`.
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
