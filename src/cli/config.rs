//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::infra::{PathError, default_state_dir};

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// State directory
    pub dir: Option<PathBuf>,

    /// Template used by `ls` when `--template` is not given
    pub template: Option<String>,

    /// Directory holding `<name>.tmpl` files
    pub templates_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_path);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/jot/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("jot")
            .join("config.toml")
    }

    /// Resolve the state directory.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. `JOT_DIR` environment variable
    /// 3. Config file `dir` setting
    /// 4. Platform state directory
    pub fn state_dir(
        &self,
        cli_dir: Option<&PathBuf>,
        env_dir: Option<PathBuf>,
    ) -> Result<PathBuf, PathError> {
        if let Some(dir) = cli_dir.cloned().or(env_dir).or_else(|| self.dir.clone()) {
            return Ok(dir);
        }
        default_state_dir()
    }

    /// Resolve the templates directory, defaulting to `<state_dir>/templates`.
    pub fn templates_dir(&self, state_dir: &Path) -> PathBuf {
        self.templates_dir
            .clone()
            .unwrap_or_else(|| state_dir.join("templates"))
    }
}
