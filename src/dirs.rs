//! Platform directories used as fallbacks for `$CONFDIR` and `$IDENTITYDIR`.

use std::path::PathBuf;

/// The platform config directory for `app_name`
/// (`~/.config/{app_name}` on Linux, `~/Library/Application Support/{app_name}`
/// on macOS).
///
/// Returns `None` when no home directory can be determined.
pub fn default_config_dir(app_name: &str) -> Option<PathBuf> {
    let proj = directories::ProjectDirs::from("", "", app_name)?;
    Some(proj.config_dir().to_path_buf())
}

/// The identity directory for `app_name`: an `identity` folder inside the
/// platform data directory.
pub fn default_identity_dir(app_name: &str) -> Option<PathBuf> {
    let proj = directories::ProjectDirs::from("", "", app_name)?;
    Some(proj.data_dir().join("identity"))
}
