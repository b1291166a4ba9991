use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::BindError;

/// Which deployment context selects field defaults.
///
/// `Release` is the baseline. `Dev` only changes the outcome for fields that
/// carry a `dev_default`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Mode {
    #[default]
    Release,
    Dev,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Release => "release",
            Mode::Dev => "dev",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = BindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "release" => Ok(Mode::Release),
            "dev" => Ok(Mode::Dev),
            other => Err(BindError::InvalidMode {
                value: other.to_string(),
            }),
        }
    }
}

/// The default-value attributes attached to a leaf field.
///
/// Populated by `#[derive(Config)]` from `#[config(default = ..,
/// release_default = .., dev_default = ..)]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldTags {
    pub default: Option<&'static str>,
    pub release_default: Option<&'static str>,
    pub dev_default: Option<&'static str>,
}

impl FieldTags {
    pub const NONE: FieldTags = FieldTags {
        default: None,
        release_default: None,
        dev_default: None,
    };
}

/// A directory placeholder recognised inside default values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// `$CONFDIR` / `${CONFDIR}`
    ConfDir,
    /// `$IDENTITYDIR` / `${IDENTITYDIR}`
    IdentityDir,
}

impl Placeholder {
    pub fn from_var(name: &str) -> Option<Self> {
        match name {
            "CONFDIR" => Some(Placeholder::ConfDir),
            "IDENTITYDIR" => Some(Placeholder::IdentityDir),
            _ => None,
        }
    }

    pub fn var(self) -> &'static str {
        match self {
            Placeholder::ConfDir => "CONFDIR",
            Placeholder::IdentityDir => "IDENTITYDIR",
        }
    }

    /// The [`BindOptions`](crate::BindOptions) method that configures this
    /// placeholder. Used in error messages.
    pub(crate) fn option_method(self) -> &'static str {
        match self {
            Placeholder::ConfDir => "conf_dir",
            Placeholder::IdentityDir => "identity_dir",
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.var())
    }
}
