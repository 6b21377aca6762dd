//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub apod: ApodConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// APOD provider configuration
#[derive(Clone, Deserialize)]
pub struct ApodConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// 0 disables the timeout
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

/// NASA's shared, heavily rate-limited key
pub const DEMO_API_KEY: &str = "DEMO_KEY";

fn default_endpoint() -> String {
    "https://api.nasa.gov/planetary/apod".to_string()
}

fn default_api_key() -> String {
    DEMO_API_KEY.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApodConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: default_api_key(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApodConfig {
    /// Whether the shared demo key is in use
    pub fn uses_demo_key(&self) -> bool {
        self.api_key == DEMO_API_KEY
    }
}

// Keep the key out of logs and panics
impl fmt::Debug for ApodConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApodConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"***")
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8083
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:8084".to_string(),
        "http://127.0.0.1:8084".to_string(),
    ]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
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

    /// Load from `APOD_CONFIG`, then default locations, then environment
    ///
    /// An explicit `APOD_CONFIG` that fails to load is an error; the
    /// default locations are best-effort. Nothing is logged here; log the
    /// returned [`LoadReport`] once the subscriber is up.
    pub fn load_default() -> Result<(Self, LoadReport), ConfigError> {
        if let Ok(path) = std::env::var("APOD_CONFIG") {
            let path = PathBuf::from(path);
            let config = Self::load_with_env(&path)?;
            return Ok((config, LoadReport::file(path)));
        }

        let candidates: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("apod").join("config.toml")),
            Some(PathBuf::from("/etc/apod/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Ok(Self::load_first(&candidates))
    }

    /// Load the first candidate file that exists and parses
    ///
    /// Falls back to defaults with environment overrides. Candidates that
    /// exist but fail to load are recorded in the report.
    pub fn load_first(candidates: &[PathBuf]) -> (Self, LoadReport) {
        let mut report = LoadReport::default();

        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    report.path = Some(path.clone());
                    return (config, report);
                }
                Err(e) => report.skipped.push((path.clone(), e)),
            }
        }

        (Self::from_env(), report)
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any `APOD_*` lookup
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // Provider overrides
        if let Some(api_key) = lookup("APOD_API_KEY") {
            self.apod.api_key = api_key;
        }
        if let Some(endpoint) = lookup("APOD_ENDPOINT") {
            self.apod.endpoint = endpoint;
        }
        if let Some(timeout) = lookup("APOD_REQUEST_TIMEOUT_SECS") {
            if let Ok(t) = timeout.parse() {
                self.apod.request_timeout_secs = t;
            }
        }

        // Server overrides
        if let Some(host) = lookup("APOD_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("APOD_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // Logging overrides
        if let Some(level) = lookup("APOD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("APOD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Where a loaded config came from
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Source file; `None` means defaults plus environment
    pub path: Option<PathBuf>,
    /// Files that exist but failed to load
    pub skipped: Vec<(PathBuf, ConfigError)>,
}

impl LoadReport {
    /// Report for a config read from `path`
    pub fn file(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            skipped: Vec::new(),
        }
    }

    /// Log where the config came from and what was skipped
    pub fn log(&self) {
        for (path, e) in &self.skipped {
            tracing::warn!("Failed to load config from {:?}: {}", path, e);
        }
        match &self.path {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
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
    r#"# APOD Viewer Configuration
#
# Environment variables override these settings:
# - APOD_API_KEY
# - APOD_ENDPOINT
# - APOD_REQUEST_TIMEOUT_SECS
# - APOD_HOST
# - APOD_PORT
# - APOD_LOG_LEVEL
# - APOD_LOG_FORMAT

[apod]
# Provider endpoint
endpoint = "https://api.nasa.gov/planetary/apod"

# Access key (get one at https://api.nasa.gov). Prefer APOD_API_KEY over
# committing a real key to this file.
api_key = "DEMO_KEY"

# Request timeout in seconds (0 = no timeout)
request_timeout_secs = 30

[server]
# Server host
host = "0.0.0.0"

# Server port
port = 8083

# Allowed CORS origins (the WASM frontend)
cors_origins = ["http://localhost:8084", "http://127.0.0.1:8084"]

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
