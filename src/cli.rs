//! Bootstrap arguments that must be known before flags are bound.
//!
//! The defaults mode and the config and identity directories decide what every other flag's
//! default is, so they cannot wait for the full parse. [`BootstrapArgs::scan`]
//! picks them out of the raw argument list first; the same struct is also a
//! clap [`Args`] derive, so the real parse accepts and documents them.
//!
//! ```ignore
//! let boot = BootstrapArgs::from_env()?;
//! let mut config = AppConfig::default();
//! let mut flags = FlagSet::with_command(BootstrapArgs::augment_args(Command::new("app")));
//! cfgstruct::bind(&mut flags, &mut config, &boot.into_options_for("app"))?;
//! flags.parse(std::env::args_os().skip(1))?;
//! ```

use std::ffi::OsStr;
use std::path::PathBuf;

use clap::Args;

use crate::dirs;
use crate::error::BindError;
use crate::options::BindOptions;
use crate::types::Mode;

/// `--defaults`, `--config-dir` and `--identity-dir`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct BootstrapArgs {
    /// Which set of configuration defaults to use.
    #[arg(long, value_enum, default_value_t = Mode::Release)]
    pub defaults: Mode,

    /// Directory substituted for $CONFDIR in flag defaults.
    #[arg(long = "config-dir", value_name = "PATH")]
    pub config_dir: Option<PathBuf>,

    /// Directory substituted for $IDENTITYDIR in flag defaults.
    #[arg(long = "identity-dir", value_name = "PATH")]
    pub identity_dir: Option<PathBuf>,
}

impl BootstrapArgs {
    /// Find the bootstrap flags in a raw argument list.
    ///
    /// Accepts `--name value` and `--name=value`; the last occurrence wins and
    /// scanning stops at `--`. Every other argument is ignored, since the
    /// flags it may belong to are not bound yet.
    pub fn scan<I, T>(args: I) -> Result<Self, BindError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<OsStr>,
    {
        let mut found = Self::default();
        let mut args = args
            .into_iter()
            .map(|a| a.as_ref().to_string_lossy().into_owned());

        while let Some(arg) = args.next() {
            if arg == "--" {
                break;
            }
            let Some(rest) = arg.strip_prefix("--") else {
                continue;
            };
            let (name, inline) = match rest.split_once('=') {
                Some((name, value)) => (name, Some(value.to_string())),
                None => (rest, None),
            };
            if !matches!(name, "defaults" | "config-dir" | "identity-dir") {
                continue;
            }
            let Some(value) = inline.or_else(|| args.next()) else {
                break;
            };
            match name {
                "defaults" => found.defaults = value.parse()?,
                "config-dir" => found.config_dir = Some(PathBuf::from(value)),
                _ => found.identity_dir = Some(PathBuf::from(value)),
            }
        }
        Ok(found)
    }

    /// [`scan`](Self::scan) the arguments of the current process.
    pub fn from_env() -> Result<Self, BindError> {
        Self::scan(std::env::args_os().skip(1))
    }

    /// Options with the selected mode and, where given, a flat `$CONFDIR`
    /// and `$IDENTITYDIR`.
    pub fn into_options(self) -> BindOptions {
        let mut options = BindOptions::new().mode(self.defaults);
        if let Some(dir) = self.config_dir {
            options = options.conf_dir(dir);
        }
        if let Some(dir) = self.identity_dir {
            options = options.identity_dir(dir);
        }
        options
    }

    /// Like [`into_options`](Self::into_options), falling back to the
    /// platform directories of `app_name` for whichever of `--config-dir`
    /// and `--identity-dir` is absent.
    pub fn into_options_for(mut self, app_name: &str) -> BindOptions {
        if self.config_dir.is_none() {
            self.config_dir = dirs::default_config_dir(app_name);
        }
        if self.identity_dir.is_none() {
            self.identity_dir = dirs::default_identity_dir(app_name);
        }
        self.into_options()
    }
}
