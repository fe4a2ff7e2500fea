//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file and defines the constants
//! the service is built around: the greeting body, the default listen address,
//! HTTP cache TTLs, and logging defaults. `AppConfig` is the root configuration
//! struct containing all settings.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Greeting
// =============================================================================

/// Body returned for every request to the root path.
pub const GREETING_BODY: &str = "Hello World, from Dockers and Kubernetes!";

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// Cache-Control values for upstream caches (ingress controllers, CDNs).
// All values are in seconds. The greeting never changes, so it is safe to
// cache; /health carries no cache header at all.

/// Greeting max-age
pub const HTTP_CACHE_GREETING_MAX_AGE: u32 = 60;
/// Serve stale greeting while revalidating in background
pub const HTTP_CACHE_GREETING_SWR: u32 = 30;

pub const CACHE_CONTROL_GREETING: &str = formatcp!(
    "public, max-age={}, stale-while-revalidate={}",
    HTTP_CACHE_GREETING_MAX_AGE,
    HTTP_CACHE_GREETING_SWR
);

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default listen host. Binds all interfaces so the container port mapping works.
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default listen port. The Dockerfile EXPOSE line and the containerPort in
/// k8s/deployment.yaml must stay in sync with this value.
pub const DEFAULT_HTTP_PORT: u16 = 5000;

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "greeter=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;

        // A zero port would make the kernel pick one, diverging from the
        // containerPort declared in the deployment manifest.
        if config.http.port == 0 {
            return Err(ConfigError::Validation(
                "http.port must be nonzero".to_string(),
            ));
        }

        Ok(config)
    }

    /// Load configuration, falling back to built-in defaults if the file
    /// does not exist. Parse and validation failures still error: a present
    /// but broken config file must not be silently ignored.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
