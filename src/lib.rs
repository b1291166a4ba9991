//! Bind the fields of a nested configuration struct to command-line flags.
//!
//! One struct definition is both the runtime configuration object and the
//! source of truth for its flags. Flag names, defaults and directory
//! substitution are derived from the struct's fields and attributes.
//!
//! ```ignore
//! #[derive(Config, Default)]
//! struct ServerConfig {
//!     #[config(default = "0.0.0.0:7777")]
//!     address: String,
//!     #[config(release_default = false, dev_default = true)]
//!     debug: bool,
//!     #[config(default = "30s")]
//!     idle_timeout: Duration,
//!     tls: TlsConfig,
//!     upstreams: [Upstream; 4],
//! }
//!
//! let mut config = ServerConfig::default();
//! let mut flags = FlagSet::new("server");
//! cfgstruct::bind(&mut flags, &mut config, &BindOptions::new().conf_dir("/etc/server"))?;
//! flags.parse(std::env::args_os().skip(1))?;
//! ```
//!
//! # Flag names
//!
//! Every leaf field becomes one flag named after its path from the root.
//! Identifiers are lowercased and hyphenated, nesting is joined with dots,
//! and array elements are zero-padded to at least two digits:
//!
//! | Field path | Flag |
//! |------------|------|
//! | `idle_timeout` | `--idle-timeout` |
//! | `tls.cert_path` | `--tls.cert-path` |
//! | `upstreams[3].address` | `--upstreams.03.address` |
//!
//! Two fields that encode to the same name make [`bind`] fail with
//! [`BindError::DuplicateFlag`].
//!
//! # Defaults and modes
//!
//! Three attributes supply defaults:
//!
//! - **`default`** is used in both modes unless a mode-specific one is present.
//! - **`release_default`** wins in [`Mode::Release`] (the baseline).
//! - **`dev_default`** wins in [`Mode::Dev`].
//!
//! A field with none of them defaults to the zero value of its type. The mode
//! is chosen per call through [`BindOptions`], never through global state, so
//! binding twice with different modes is safe.
//!
//! Defaults are written into the struct during [`bind`]. The struct reflects
//! them even if arguments are never parsed; after
//! [`FlagSet::parse`] it reflects whatever was given on the command line.
//!
//! # Directory placeholders
//!
//! `$CONFDIR` / `${CONFDIR}` and `$IDENTITYDIR` / `${IDENTITYDIR}` inside a
//! default are replaced by the directory configured on [`BindOptions`]:
//!
//! - **Flat** ([`conf_dir`](BindOptions::conf_dir)) substitutes the path
//!   unchanged at every depth.
//! - **Nested** ([`conf_dir_nested`](BindOptions::conf_dir_nested)) appends
//!   the encoded name of each enclosing struct field, so a field of `tls`
//!   sees `{dir}/tls` and a field of `upstreams[3]` sees
//!   `{dir}/upstreams/03`.
//!
//! A placeholder with no configured directory is an error
//! ([`BindError::MissingDirectory`]), never an empty substitution. Other
//! `$NAME` tokens are left alone.
//!
//! # Supported fields
//!
//! `bool`, `i32`, `i64`, `isize`, `u32`, `u64`, `usize`, `f32`, `f64`,
//! [`Duration`](std::time::Duration) (humantime syntax), `String`,
//! [`PathBuf`](std::path::PathBuf), nested `#[derive(Config)]` structs and
//! fixed-size arrays of them. Anything else fails to compile rather than
//! being silently left unbound. Mark a field `#[config(skip)]` to leave it
//! out on purpose.
//!
//! # Bootstrapping from the command line
//!
//! The mode and config directory are needed before binding. The [`cli`]
//! module's [`BootstrapArgs`] scans them out of the raw arguments early
//! (`--defaults dev`, `--config-dir PATH`) and also registers them with clap
//! so the full parse accepts them.
//!
//! # Error handling
//!
//! All fallible operations return [`BindError`]. Shape problems and bad
//! defaults abort [`bind`] at the first offending field; command-line parse
//! errors are clap's own errors, passed through unchanged.

extern crate self as cfgstruct;

pub mod cli;
pub mod dirs;
pub mod error;
pub mod name;
pub mod resolve;
pub mod types;

mod flags;
mod options;
mod slot;
mod walk;

#[cfg(test)]
mod fixtures;

pub use cli::BootstrapArgs;
pub use error::BindError;
pub use flags::{Flag, FlagSet};
pub use name::{FieldPath, Segment};
pub use options::{BindOptions, DirOption, DirStyle};
pub use slot::Slot;
pub use types::{FieldTags, Mode, Placeholder};
pub use walk::{Config, Node, Walker, walk};

#[cfg(feature = "derive")]
pub use cfgstruct_derive::Config;

/// Register a flag for every leaf of `config` and write its default.
///
/// Walks `config` depth-first, encodes each leaf's name, resolves its default
/// for the selected mode and directories, and registers it with `flags`
/// bound to the field. The flag set holds the field borrows until it is
/// dropped.
///
/// Stops at the first duplicate name, malformed default or unconfigured
/// placeholder. Flags registered before the failure remain in `flags`.
pub fn bind<'a, C>(
    flags: &mut FlagSet<'a>,
    config: &'a mut C,
    options: &BindOptions,
) -> Result<(), BindError>
where
    C: Config + ?Sized,
{
    tracing::debug!(mode = %options.get_mode(), "binding configuration flags");
    walk(config, |path, tags, slot| {
        let default = resolve::resolve(tags, path, options)?;
        flags.register(path.encode(), default, slot)
    })
}
