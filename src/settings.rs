//! Runtime configuration. Everything has a sensible default so the program
//! runs with no config at all; a `library.toml` file and `LIBRARY__*`
//! environment variables can override individual keys.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Config file picked up from the working directory when present.
const DEFAULT_CONFIG_FILE: &str = "library.toml";
/// Points at an alternative config file.
const CONFIG_PATH_ENV: &str = "LIBRARY_CONFIG";
const ENV_PREFIX: &str = "LIBRARY";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub log: LogSettings,
    #[serde(default)]
    pub shell: ShellSettings,
}

impl Settings {
    /// Layer `.env`, the optional config file, then `LIBRARY__SECTION__KEY`
    /// environment variables.
    pub fn load() -> Result<Self> {
        // A missing `.env` is the normal case.
        let _ = dotenvy::dotenv();

        let config_path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

        config::Config::builder()
            .add_source(config::File::from(config_path).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()
            .context("failed to build configuration")?
            .try_deserialize()
            .context("failed to deserialize configuration")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    /// `EnvFilter` directive, e.g. `info` or `library_catalog=debug`.
    #[serde(default = "LogSettings::default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
    /// Log file location. Defaults to a file under the user's home directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl LogSettings {
    fn default_level() -> String {
        "info".to_string()
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
            format: LogFormat::default(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShellSettings {
    /// Colorize status messages. Ignored when stdout is not a terminal.
    #[serde(default = "ShellSettings::default_color")]
    pub color: bool,
}

impl ShellSettings {
    fn default_color() -> bool {
        true
    }
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            color: Self::default_color(),
        }
    }
}
