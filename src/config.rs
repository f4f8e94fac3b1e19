//! Configuration loading and constants.
//!
//! Loads application configuration from a TOML file, applies environment
//! overrides (`PORT`, `APP_ENV`, `LOG_LEVEL`) and defines constants for HTTP
//! cache headers, logging and default paths. `AppConfig` is the root
//! configuration struct containing all settings.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// API documentation - only changes on redeploy
pub const HTTP_CACHE_DOCS_MAX_AGE: u32 = 300;

/// Calculation results and health probes must always be fresh
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

pub const CACHE_CONTROL_DOCS: &str = formatcp!("public, max-age={}", HTTP_CACHE_DOCS_MAX_AGE);

// =============================================================================
// Routes
// =============================================================================

pub const ADD_ROUTE: &str = "/calculator/add";
pub const HEALTH_ROUTE: &str = "/health";
pub const DOCS_ROUTE: &str = "/api-docs";
pub const OPENAPI_ROUTE: &str = formatcp!("{}/openapi.json", DOCS_ROUTE);

/// Example request shown when the operands parameter is missing
pub const ADD_EXAMPLE: &str = formatcp!("{}?operands=1,2,3", ADD_ROUTE);

/// Routes listed in 404 responses
pub const AVAILABLE_ROUTES: [&str; 3] = [
    formatcp!("GET {}?operands=<numbers>", ADD_ROUTE),
    formatcp!("GET {}", HEALTH_ROUTE),
    formatcp!("GET {}", DOCS_ROUTE),
];

// =============================================================================
// Defaults
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_SERVICE_NAME: &str = "calculator-service";

/// Default log filter when neither the CLI nor RUST_LOG set one
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Seconds to wait for in-flight requests on shutdown
pub const SHUTDOWN_GRACE_SECS: u64 = 30;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Identity reported by the health endpoint and API docs
    #[serde(default)]
    pub service: ServiceConfig,
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
    /// Deployment environment name (development, production, ...)
    #[serde(default = "HttpServerConfig::default_environment")]
    pub environment: String,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            environment: Self::default_environment(),
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

    fn default_environment() -> String {
        DEFAULT_ENVIRONMENT.to_string()
    }

    /// Base URL advertised in the API documentation.
    pub fn base_url(&self) -> String {
        let host = if self.host == "0.0.0.0" {
            "localhost"
        } else {
            self.host.as_str()
        };
        format!("http://{}:{}", host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "ServiceConfig::default_name")]
    pub name: String,
    /// Defaults to the crate version
    #[serde(default = "ServiceConfig::default_version")]
    pub version: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: Self::default_name(),
            version: Self::default_version(),
        }
    }
}

impl ServiceConfig {
    fn default_name() -> String {
        DEFAULT_SERVICE_NAME.to_string()
    }

    fn default_version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when neither `--log-level` nor RUST_LOG is set
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
            format: Self::default_format(),
        }
    }
}

impl LoggingConfig {
    fn default_level() -> String {
        DEFAULT_LOG_LEVEL.to_string()
    }

    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl AppConfig {
    /// Load from a TOML file and apply overrides from the process environment.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: AppConfig = toml::from_str(&contents)?;
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `PORT`, `APP_ENV` and `LOG_LEVEL` overrides using the given lookup.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.http.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::Validation(format!("Invalid PORT value: {}", port)))?;
        }
        if let Some(environment) = lookup("APP_ENV") {
            self.http.environment = environment;
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            self.logging.level = level;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation(
                "http.port must be between 1 and 65535".to_string(),
            ));
        }
        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(ConfigError::Validation(format!(
                "logging.format must be \"text\" or \"json\", got \"{}\"",
                self.logging.format
            )));
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn parse(contents: &str) -> AppConfig {
        toml::from_str(contents).unwrap()
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse("");
        assert_eq!(config.http.host, DEFAULT_HOST);
        assert_eq!(config.http.port, DEFAULT_PORT);
        assert_eq!(config.http.environment, "development");
        assert_eq!(config.service.name, "calculator-service");
        assert_eq!(config.service.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_full_config() {
        let config = parse(
            r#"
            [http]
            host = "127.0.0.1"
            port = 8080
            environment = "production"

            [service]
            name = "adder"
            version = "2.0.0"

            [logging]
            level = "calculator_service=debug"
            format = "json"
            "#,
        );
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.http.environment, "production");
        assert_eq!(config.service.name, "adder");
        assert_eq!(config.service.version, "2.0.0");
        assert_eq!(config.logging.level, "calculator_service=debug");
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = parse("[http]\nport = 8080\n");
        config
            .apply_env(|key| match key {
                "PORT" => Some("9090".to_string()),
                "APP_ENV" => Some("staging".to_string()),
                "LOG_LEVEL" => Some("warn".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.http.port, 9090);
        assert_eq!(config.http.environment, "staging");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_env_override_invalid_port() {
        let mut config = AppConfig::default();
        let err = config
            .apply_env(|key| (key == "PORT").then(|| "http".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_validate_rejects_unknown_log_format() {
        let config = parse("[logging]\nformat = \"xml\"\n");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_port_zero() {
        let config = parse("[http]\nport = 0\n");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config("[service]\nname = \"from-file\"\n");
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.service.name, "from-file");
    }

    #[test]
    fn test_load_missing_file() {
        let err = AppConfig::load("/nonexistent/calculator.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let file = write_config("[http\nport = ");
        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_base_url() {
        let mut http = HttpServerConfig::default();
        assert_eq!(http.base_url(), "http://localhost:3000");
        http.host = "10.0.0.5".to_string();
        assert_eq!(http.base_url(), "http://10.0.0.5:3000");
    }
}
