//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/eqparse/eqparse.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `EQPARSE_*` prefix

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Unified configuration for eqparse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Print notices for update tags that were skipped
    pub report_ignored_tags: bool,
    /// Colored terminal output; `false` turns colors off unconditionally
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            report_ignored_tags: true,
            color: true,
        }
    }
}

/// Get the XDG config directory for eqparse.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "eqparse").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("eqparse.toml"))
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit file, applied over the global config.
    ///   Unlike the global file it must exist.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut builder = Self::defaults_builder()?;

        if let Some(global_path) = global_config_path() {
            builder = builder.add_source(
                File::from(global_path)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }
        if let Some(path) = config_file {
            builder = builder.add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(true),
            );
        }
        builder = builder.add_source(
            Environment::with_prefix("EQPARSE")
                .prefix_separator("_")
                .separator("__"),
        );

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    /// Load defaults plus a single TOML file, ignoring global config and environment.
    pub fn from_file(path: &Path) -> Result<Self, ApplicationError> {
        let config = Self::defaults_builder()?
            .add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(true),
            )
            .build()
            .map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    fn defaults_builder() -> Result<ConfigBuilder<DefaultState>, ApplicationError> {
        let defaults = Settings::default();
        Config::builder()
            .set_default("report_ignored_tags", defaults.report_ignored_tags)
            .map_err(config_err)?
            .set_default("color", defaults.color)
            .map_err(config_err)
    }

    /// Render as TOML, as `config show` prints it.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: e.to_string(),
        })
    }
}
