//! Configuration management.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `FUTURAMA_*` environment variables (a `.env` file is loaded by `main`
//! before any of this runs).

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::scrapers::http_client::DEFAULT_MAX_ATTEMPTS;

pub const DEFAULT_QUOTES_BASE_URL: &str = "https://en.wikiquote.org/wiki";
pub const DEFAULT_PLOT_BASE_URL: &str = "https://en.wikipedia.org/wiki";

/// Config file name inside the platform config directory.
const CONFIG_FILE: &str = "futurama/config.toml";

/// Errors that can occur while loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Runtime settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// User agent: unset for the default, "impersonate" for a browser UA,
    /// anything else is sent verbatim.
    pub user_agent: Option<String>,
    /// Request timeout in seconds.
    pub request_timeout: u64,
    /// Attempts per page before giving up.
    pub max_attempts: u32,
    /// Backoff unit in milliseconds; the wait after attempt `n` is `n` units.
    pub retry_backoff_ms: u64,
    /// Base URL of the quote wiki.
    pub quotes_base_url: String,
    /// Base URL of the encyclopedia wiki.
    pub plot_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_agent: None,
            request_timeout: 30,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_backoff_ms: 1000,
            quotes_base_url: DEFAULT_QUOTES_BASE_URL.to_string(),
            plot_base_url: DEFAULT_PLOT_BASE_URL.to_string(),
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }

    /// Parse settings from TOML text. Missing keys keep their defaults.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `FUTURAMA_*` overrides using the given variable lookup.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("FUTURAMA_USER_AGENT") {
            self.user_agent = Some(v);
        }
        if let Some(v) = lookup("FUTURAMA_REQUEST_TIMEOUT") {
            self.request_timeout = parse_env("FUTURAMA_REQUEST_TIMEOUT", v)?;
        }
        if let Some(v) = lookup("FUTURAMA_MAX_ATTEMPTS") {
            self.max_attempts = parse_env("FUTURAMA_MAX_ATTEMPTS", v)?;
        }
        if let Some(v) = lookup("FUTURAMA_RETRY_BACKOFF_MS") {
            self.retry_backoff_ms = parse_env("FUTURAMA_RETRY_BACKOFF_MS", v)?;
        }
        if let Some(v) = lookup("FUTURAMA_QUOTES_BASE_URL") {
            self.quotes_base_url = v;
        }
        if let Some(v) = lookup("FUTURAMA_PLOT_BASE_URL") {
            self.plot_base_url = v;
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnv { var, value })
}

/// Default config file location, e.g. `~/.config/futurama/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(CONFIG_FILE))
}

/// Load settings.
///
/// An explicit `config_path` must exist. Without one, the default location
/// is used when present and silently skipped otherwise.
pub fn load_settings(config_path: Option<&Path>) -> Result<Settings, ConfigError> {
    let path = match config_path {
        Some(p) => Some(p.to_path_buf()),
        None => default_config_path().filter(|p| p.is_file()),
    };

    let mut settings = match path {
        Some(path) => {
            debug!(path = %path.display(), "Loading config file");
            let text = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;
            Settings::from_toml(&text, &path)?
        }
        None => Settings::default(),
    };

    settings.apply_env(|key| std::env::var(key).ok())?;
    Ok(settings)
}
