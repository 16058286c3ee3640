//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::assets::{GLOBAL_STYLESHEET, ICON_FONT_STYLESHEET};
use crate::router::HistoryMode;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub router: RouterConfig,

    #[serde(default)]
    pub assets: AssetsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Mount configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Selector of the host element the app mounts into
    #[serde(default = "default_mount")]
    pub mount: String,
}

fn default_mount() -> String {
    "#app".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mount: default_mount(),
        }
    }
}

/// Router configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RouterConfig {
    #[serde(default)]
    pub mode: HistoryMode,

    /// Path prefix the app is served under
    #[serde(default = "default_base")]
    pub base: String,
}

fn default_base() -> String {
    "/".to_string()
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            mode: HistoryMode::default(),
            base: default_base(),
        }
    }
}

/// Static assets loaded at startup
#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    #[serde(default = "default_stylesheets")]
    pub stylesheets: Vec<String>,
}

fn default_stylesheets() -> Vec<String> {
    vec![
        GLOBAL_STYLESHEET.to_string(),
        ICON_FONT_STYLESHEET.to_string(),
    ]
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            stylesheets: default_stylesheets(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("pigbank").join("config.toml")),
            Some(PathBuf::from("/etc/pigbank/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Reject settings the app cannot start with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.router.mode != HistoryMode::History {
            return Err(ConfigError::UnsupportedHistoryMode(self.router.mode));
        }
        if self.app.mount.trim().is_empty() {
            return Err(ConfigError::Invalid("app.mount must not be empty".to_string()));
        }
        match self.app.mount.strip_prefix('#') {
            Some(id) if !id.is_empty() && !id.contains(|c: char| c.is_whitespace()) => {}
            _ => {
                return Err(ConfigError::Invalid(format!(
                    "app.mount must be an element id selector like \"#app\", got {:?}",
                    self.app.mount
                )))
            }
        }
        Ok(())
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(base) = lookup("PIGBANK_BASE_URL") {
            self.router.base = base;
        }
        if let Some(mount) = lookup("PIGBANK_MOUNT") {
            self.app.mount = mount;
        }

        if let Some(level) = lookup("PIGBANK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("PIGBANK_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Unsupported history mode {0:?}: only \"history\" is supported")]
    UnsupportedHistoryMode(HistoryMode),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r##"# Pigbank Configuration
#
# Environment variables override these settings:
# - PIGBANK_BASE_URL
# - PIGBANK_MOUNT
# - PIGBANK_LOG_LEVEL
# - PIGBANK_LOG_FORMAT

[app]
# Selector of the host element the app mounts into
mount = "#app"

[router]
# Addressing mode; only "history" is supported
mode = "history"

# Path prefix the app is served under
base = "/"

[assets]
# Stylesheets loaded before mount, in order
stylesheets = [
    "assets/styles/global.css",
    "vendor/fontawesome-free/css/all.css",
]

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"##
    .to_string()
}
