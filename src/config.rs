//! Configuration loading and constants.
//!
//! Defines the fixed route paths and response payloads, the defaults used when
//! no configuration file is present, and `AppConfig`, the root configuration
//! struct loaded from TOML.

use const_format::formatcp;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

// =============================================================================
// Routes
// =============================================================================

/// Root greeting
pub const ROOT_PATH: &str = "/";

/// Load balancer health check
pub const HEALTH_PATH: &str = "/health";

/// Prefix shared by the marketplace management endpoints
pub const MGMT_PATH_PREFIX: &str = "/oms/marketplace/mgmt";

/// Kubernetes liveness probe
pub const LIVENESS_PATH: &str = formatcp!("{}/health/liveness", MGMT_PATH_PREFIX);

// =============================================================================
// Response Payloads
// =============================================================================

/// Plain text body returned by the root route
pub const ROOT_GREETING: &str = "Hello World from Python Flask!";

pub const HEALTH_STATUS: &str = "healthy";
pub const HEALTH_MESSAGE: &str = "Application is running";

pub const LIVENESS_STATUS: &str = "alive";
pub const LIVENESS_MESSAGE: &str = "Application is alive";

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Probe responses must never be answered from an intermediate cache
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// =============================================================================
// Server Defaults
// =============================================================================

/// Default bind host (all interfaces, as expected inside a container)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_PORT: u16 = 8000;

/// Seconds to wait for in-flight requests after a shutdown signal
pub const GRACEFUL_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path, used only when it exists
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Tracing target of this crate
pub const LOG_TARGET: &str = "oms_hello";

/// Default log filter when neither --log-level nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = formatcp!("{}=info,tower_http=info", LOG_TARGET);

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Log formats accepted by `logging.format`
pub const LOG_FORMATS: [&str; 2] = ["text", "json"];

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
        DEFAULT_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_PORT
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
    /// Emit a span and completion event per request (default: off)
    #[serde(default)]
    pub access_log: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: Self::default_format(),
            access_log: false,
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    /// Whether logs should be emitted as JSON lines
    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl AppConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Load configuration from an explicit path, or fall back to
    /// `DEFAULT_CONFIG_PATH` when it exists, or to built-in defaults.
    ///
    /// An explicit path that cannot be read is an error; only the implicit
    /// default path is allowed to be missing.
    pub fn load_or_default(path: Option<&str>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).is_file() => Self::load(DEFAULT_CONFIG_PATH),
            None => Ok(Self::default()),
        }
    }

    /// Parse and validate configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command line overrides on top of file values.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.http.host = host;
        }
        if let Some(port) = port {
            self.http.port = port;
        }
        self
    }

    /// The socket address the server binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.http.host, self.http.port)
            .parse()
            .map_err(|e| {
                ConfigError::Validation(format!(
                    "Invalid http.host or http.port '{}:{}': {}",
                    self.http.host, self.http.port, e
                ))
            })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Unknown logging.format '{}', expected one of {:?}",
                self.logging.format, LOG_FORMATS
            )));
        }
        self.socket_addr()?;
        Ok(())
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
