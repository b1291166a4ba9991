use std::path::{Path, PathBuf};

use crate::types::{Mode, Placeholder};

/// How a directory placeholder resolves below the root struct.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DirStyle {
    /// Every placeholder resolves to the configured path, at any depth.
    #[default]
    Flat,
    /// Each level of nesting appends the encoded name of the field that
    /// introduced it, so nested structs get their own subdirectory.
    Nested,
}

/// A configured directory for one placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirOption {
    pub path: PathBuf,
    pub style: DirStyle,
}

/// Options for a single [`bind`](crate::bind) call.
///
/// ```ignore
/// let options = BindOptions::new()
///     .dev_defaults()
///     .conf_dir_nested("/etc/myapp");
/// ```
///
/// Release mode is the baseline. Later calls override earlier ones for the
/// same setting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindOptions {
    mode: Mode,
    conf_dir: Option<DirOption>,
    identity_dir: Option<DirOption>,
}

impl BindOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `release_default` where present.
    pub fn release_defaults(self) -> Self {
        self.mode(Mode::Release)
    }

    /// Select `dev_default` where present.
    pub fn dev_defaults(self) -> Self {
        self.mode(Mode::Dev)
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Substitute `$CONFDIR` with `path` at every depth.
    pub fn conf_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.conf_dir = Some(DirOption {
            path: path.into(),
            style: DirStyle::Flat,
        });
        self
    }

    /// Substitute `$CONFDIR` with `path` joined with the encoded names of the
    /// enclosing struct fields.
    pub fn conf_dir_nested(mut self, path: impl Into<PathBuf>) -> Self {
        self.conf_dir = Some(DirOption {
            path: path.into(),
            style: DirStyle::Nested,
        });
        self
    }

    /// Substitute `$IDENTITYDIR` with `path` at every depth.
    pub fn identity_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.identity_dir = Some(DirOption {
            path: path.into(),
            style: DirStyle::Flat,
        });
        self
    }

    /// Nested variant of [`identity_dir`](Self::identity_dir).
    pub fn identity_dir_nested(mut self, path: impl Into<PathBuf>) -> Self {
        self.identity_dir = Some(DirOption {
            path: path.into(),
            style: DirStyle::Nested,
        });
        self
    }

    pub fn get_mode(&self) -> Mode {
        self.mode
    }

    /// The directory configured for `placeholder`, if any.
    pub fn dir(&self, placeholder: Placeholder) -> Option<&DirOption> {
        match placeholder {
            Placeholder::ConfDir => self.conf_dir.as_ref(),
            Placeholder::IdentityDir => self.identity_dir.as_ref(),
        }
    }

    /// Root `$CONFDIR` path, if configured.
    pub fn conf_dir_path(&self) -> Option<&Path> {
        self.conf_dir.as_ref().map(|d| d.path.as_path())
    }
}
