//! Platform default location of the state directory.

use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;

/// Directory name appended to the platform state directory.
pub const APP_DIR_NAME: &str = "jot";

/// Environment variable that overrides the state directory.
pub const DIR_ENV_VAR: &str = "JOT_DIR";

#[derive(Debug, Error)]
pub enum PathError {
    #[error("could not determine a state directory for this platform; pass --dir or set {DIR_ENV_VAR}")]
    NoStateDir,
}

/// Returns the platform default state directory for jot.
///
/// - Linux: `$XDG_STATE_HOME/jot`, falling back to `~/.local/state/jot`
/// - Windows: `%LOCALAPPDATA%\jot`
/// - macOS: `~/Library/Application Support/jot`
pub fn default_state_dir() -> Result<PathBuf, PathError> {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or(PathError::NoStateDir)
}

/// Interprets the value of [`DIR_ENV_VAR`]. An empty value counts as unset.
pub fn dir_from_env(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}
