//! Configuration management for pageicon.
//!
//! Configuration is read from `~/.config/pageicon/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.
//! Command-line flags override whatever the file says.

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = concat!("pageicon/", env!("CARGO_PKG_VERSION"));

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetcher: FetcherConfig,
    pub selection: SelectionConfig,
}

/// Settings for the default HTTP fetcher.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// Per-request timeout in seconds (default: none)
    pub timeout_secs: Option<u64>,

    /// User agent string to send
    pub user_agent: Option<String>,

    /// Treat non-2xx responses as failures instead of content (default: false)
    pub fail_on_http_error: bool,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            user_agent: Some(DEFAULT_USER_AGENT.to_string()),
            fail_on_http_error: false,
        }
    }
}

impl FetcherConfig {
    /// Get the request timeout as a Duration, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// How the best icon is chosen.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Preferred extensions, highest priority first. Empty means largest wins.
    pub preference: Vec<String>,
}

impl Config {
    /// Load configuration from the default path.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from `config_path`.
    ///
    /// If the file doesn't exist, creates a default one with comments.
    /// If the file exists but is invalid, returns an error.
    /// Missing fields use default values.
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            Self::create_default_config(config_path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| ConfigError::Io {
            path: config_path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// Get the default config file path: `~/.config/pageicon/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("pageicon").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    fn default_config_content() -> String {
        r##"# pageicon configuration

[fetcher]
# Per-request timeout in seconds. Leave unset to wait indefinitely.
# timeout_secs = 10

# User agent sent with every request
# user_agent = "pageicon"

# Reject 4xx/5xx responses instead of treating their body as content
fail_on_http_error = false

[selection]
# Preferred icon extensions, highest priority first.
# An empty list picks the largest icon.
preference = []
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
