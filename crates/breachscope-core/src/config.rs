//! Configuration management for Breachscope.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration.
///
/// This is loaded from `~/.config/breachscope/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Lookup service settings
    pub lookup: LookupConfig,
    /// Payload normalization settings
    pub normalize: NormalizeConfig,
    /// Output rendering settings
    pub output: OutputConfig,
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit path.
    ///
    /// Unlike [`AppConfig::load`], a missing file is an error here.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.display().to_string(),
            });
        }

        tracing::debug!("Loading config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `BREACHSCOPE_API_URL`: Override the lookup service base URL
    /// - `BREACHSCOPE_TIMEOUT_SECS`: Override the request timeout
    /// - `BREACHSCOPE_MAX_DEPTH`: Override the normalization depth limit
    /// - `NO_COLOR`: Disable coloured output when set to any non-empty value
    pub fn load_with_env(path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match path {
            Some(path) => Self::load_from(path)?,
            None => Self::load()?,
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides read through `lookup_var`.
    ///
    /// Values that fail to parse are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup_var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup_var("BREACHSCOPE_API_URL") {
            if !url.trim().is_empty() {
                tracing::debug!("Override lookup.base_url from env: {}", url);
                self.lookup.base_url = url;
            }
        }

        if let Some(val) = lookup_var("BREACHSCOPE_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse() {
                self.lookup.timeout_secs = secs;
                tracing::debug!("Override lookup.timeout_secs from env: {}", secs);
            }
        }

        if let Some(val) = lookup_var("BREACHSCOPE_MAX_DEPTH") {
            if let Ok(depth) = val.parse() {
                self.normalize.max_depth = depth;
                tracing::debug!("Override normalize.max_depth from env: {}", depth);
            }
        }

        if lookup_var("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            self.output.color = false;
        }
    }

    /// Check value constraints that TOML typing cannot express.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.lookup.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "lookup.base_url".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.lookup.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "lookup.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.normalize.max_depth == 0 {
            return Err(ConfigError::InvalidValue {
                field: "normalize.max_depth".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Save configuration to `path`.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        let config_dir = path.parent().ok_or_else(|| ConfigError::InvalidValue {
            field: "config_path".to_string(),
            reason: "no parent directory".to_string(),
        })?;

        fs::create_dir_all(config_dir)?;
        tracing::debug!("Saving config to {}", path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/breachscope/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs = ProjectDirs::from("com", "breachscope", "breachscope")
            .ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Lookup service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Base URL of the XposedOrNot API (without trailing `/check-email`)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User agent string sent with every request
    pub user_agent: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.xposedornot.com/v1".to_string(),
            timeout_secs: 15,
            user_agent: concat!("Breachscope/", env!("CARGO_PKG_VERSION"), " (Security Tool)")
                .to_string(),
        }
    }
}

/// Payload normalization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Maximum nesting depth walked before giving up on a payload
    pub max_depth: usize,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self { max_depth: 64 }
    }
}

/// Output rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Colour the text report
    pub color: bool,
    /// Emit JSON instead of the text report
    pub json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            json: false,
        }
    }
}
