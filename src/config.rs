//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty means any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8090
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// What a fresh application state starts with
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
    /// Start with the three sample applications
    #[serde(default = "default_seed_sample_data")]
    pub seed_sample_data: bool,

    /// Shown on the home screen
    #[serde(default = "default_open_roles")]
    pub open_roles: u32,

    /// Shown on the home screen
    #[serde(default = "default_avg_time_to_hire")]
    pub avg_time_to_hire_days: u32,
}

fn default_seed_sample_data() -> bool {
    true
}

fn default_open_roles() -> u32 {
    6
}

fn default_avg_time_to_hire() -> u32 {
    8
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: default_seed_sample_data(),
            open_roles: default_open_roles(),
            avg_time_to_hire_days: default_avg_time_to_hire(),
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

    pub file: Option<String>,
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
            file: None,
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
    ///
    /// Nothing is logged here: callers report the returned source once
    /// logging is set up.
    pub fn load_default() -> Result<(Self, ConfigSource), ConfigError> {
        Self::load_first(&default_paths())
    }

    /// Load an explicit file if given, otherwise search the default locations
    pub fn resolve(path: Option<&Path>) -> Result<(Self, ConfigSource), ConfigError> {
        match path {
            Some(path) => {
                let config = Self::load_with_env(path)?;
                Ok((config, ConfigSource::File(path.to_path_buf())))
            }
            None => Self::load_default(),
        }
    }

    fn load_first(paths: &[PathBuf]) -> Result<(Self, ConfigSource), ConfigError> {
        match paths.iter().find(|path| path.exists()) {
            Some(path) => {
                let config = Self::load_with_env(path)?;
                Ok((config, ConfigSource::File(path.clone())))
            }
            None => Ok((Self::from_env(), ConfigSource::Defaults)),
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // API overrides
        if let Some(host) = lookup("VERIDIA_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = lookup("VERIDIA_API_PORT") {
            match port.parse() {
                Ok(p) => self.api.port = p,
                Err(_) => tracing::warn!("Ignoring invalid VERIDIA_API_PORT: {}", port),
            }
        }

        // Catalog overrides
        if let Some(seed) = lookup("VERIDIA_SEED_SAMPLE_DATA") {
            match seed.parse() {
                Ok(s) => self.catalog.seed_sample_data = s,
                Err(_) => tracing::warn!("Ignoring invalid VERIDIA_SEED_SAMPLE_DATA: {}", seed),
            }
        }

        // Logging overrides
        if let Some(level) = lookup("VERIDIA_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("VERIDIA_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

fn default_paths() -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = dirs::config_dir()
        .map(|p| p.join("veridia").join("config.toml"))
        .into_iter()
        .collect();
    paths.push(PathBuf::from("/etc/veridia/config.toml"));
    paths.push(PathBuf::from("./config.toml"));
    paths
}

/// Where a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// No file found; built-in defaults plus environment overrides
    Defaults,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults => f.write_str("defaults with environment overrides"),
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
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Veridia Hiring Configuration
#
# Environment variables override these settings:
# - VERIDIA_API_HOST
# - VERIDIA_API_PORT
# - VERIDIA_SEED_SAMPLE_DATA
# - VERIDIA_LOG_LEVEL
# - VERIDIA_LOG_FORMAT

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8090

# Allowed CORS origins (empty = any origin)
cors_origins = []

# Request timeout in seconds
request_timeout_secs = 30

[catalog]
# Start with the three sample applications
seed_sample_data = true

# Figures shown on the home screen
open_roles = 6
avg_time_to_hire_days = 8

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/veridia/veridia.log"
"#
    .to_string()
}
