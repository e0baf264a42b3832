//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. Command line flags parsed in `main.rs` may override the port and
//! the request logging toggle.
//!
//! ## Variables
//!
//! - `HOST` - Bind host (default: `0.0.0.0`)
//! - `PORT` - Listening port (default: `8888`)
//! - `BASE_URL` - Public base for short links (default: `http://localhost:<PORT>`)
//! - `REQUEST_LOGGING` - Per-request tracing spans, `true`/`false` (default: `true`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `ID_LENGTH_BYTES` - Random bytes per short id (default: `6`, range 3-32)

use anyhow::{Context, Result};
use std::env;

use crate::utils::code_generator::{
    DEFAULT_ID_LENGTH_BYTES, MAX_ID_LENGTH_BYTES, MIN_ID_LENGTH_BYTES,
};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8888;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Explicit public base URL. When `None`, derived from the port.
    pub base_url: Option<String>,
    /// Enables the per-request tracing layer.
    pub request_logging: bool,
    pub log_level: String,
    pub log_format: String,
    pub id_length_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            base_url: None,
            request_logging: true,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            id_length_bytes: DEFAULT_ID_LENGTH_BYTES,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric or boolean variable cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let host = env::var("HOST").unwrap_or(defaults.host);

        let port = match env::var("PORT") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got '{}'", v))?,
            Err(_) => defaults.port,
        };

        let base_url = env::var("BASE_URL").ok().filter(|v| !v.is_empty());

        let request_logging = match env::var("REQUEST_LOGGING") {
            Ok(v) => parse_bool(&v)
                .with_context(|| format!("REQUEST_LOGGING must be a boolean, got '{}'", v))?,
            Err(_) => defaults.request_logging,
        };

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let id_length_bytes = match env::var("ID_LENGTH_BYTES") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("ID_LENGTH_BYTES must be a number, got '{}'", v))?,
            Err(_) => defaults.id_length_bytes,
        };

        Ok(Self {
            host,
            port,
            base_url,
            request_logging,
            log_level,
            log_format,
            id_length_bytes,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `port` is 0
    /// - `log_format` is not `text` or `json`
    /// - `base_url` is not an `http://` or `https://` URL
    /// - `id_length_bytes` is outside the supported range
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("PORT must be greater than 0");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if let Some(ref base_url) = self.base_url
            && !base_url.starts_with("http://")
            && !base_url.starts_with("https://")
        {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                base_url
            );
        }

        if !(MIN_ID_LENGTH_BYTES..=MAX_ID_LENGTH_BYTES).contains(&self.id_length_bytes) {
            anyhow::bail!(
                "ID_LENGTH_BYTES must be between {} and {}, got {}",
                MIN_ID_LENGTH_BYTES,
                MAX_ID_LENGTH_BYTES,
                self.id_length_bytes
            );
        }

        Ok(())
    }

    /// Applies command line overrides on top of the environment.
    pub fn with_overrides(mut self, port: Option<u16>, request_logging: Option<bool>) -> Self {
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(request_logging) = request_logging {
            self.request_logging = request_logging;
        }
        self
    }

    /// Address the listener binds to.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Public base URL without trailing slash.
    pub fn public_base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://localhost:{}", self.port),
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  Public base URL: {}", self.public_base_url());
        tracing::info!("  Request logging: {}", self.request_logging);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Id length: {} bytes", self.id_length_bytes);
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "HOST",
        "PORT",
        "BASE_URL",
        "REQUEST_LOGGING",
        "LOG_FORMAT",
        "ID_LENGTH_BYTES",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("ON"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.port = 0;
        assert!(config.validate().is_err());
        config.port = 8080;

        config.base_url = Some("ftp://short.example".to_string());
        assert!(config.validate().is_err());

        config.base_url = Some("https://short.example".to_string());
        assert!(config.validate().is_ok());

        config.id_length_bytes = 2;
        assert!(config.validate().is_err());

        config.id_length_bytes = 33;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_public_base_url() {
        let mut config = Config::default();
        assert_eq!(config.public_base_url(), "http://localhost:8888");

        config.port = 9000;
        assert_eq!(config.public_base_url(), "http://localhost:9000");

        config.base_url = Some("https://s.example.com/".to_string());
        assert_eq!(config.public_base_url(), "https://s.example.com");
    }

    #[test]
    fn test_with_overrides() {
        let config = Config::default().with_overrides(Some(3000), Some(false));
        assert_eq!(config.port, 3000);
        assert!(!config.request_logging);
        assert_eq!(config.listen_addr(), "0.0.0.0:3000");

        let untouched = Config::default().with_overrides(None, None);
        assert_eq!(untouched.port, DEFAULT_PORT);
        assert!(untouched.request_logging);
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.host, "0.0.0.0");
        assert!(config.base_url.is_none());
        assert!(config.request_logging);
        assert_eq!(config.id_length_bytes, DEFAULT_ID_LENGTH_BYTES);
    }

    #[test]
    #[serial]
    fn test_from_env_values() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("PORT", "9999");
            env::set_var("BASE_URL", "https://s.example.com");
            env::set_var("REQUEST_LOGGING", "false");
            env::set_var("ID_LENGTH_BYTES", "9");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.port, 9999);
        assert_eq!(config.public_base_url(), "https://s.example.com");
        assert!(!config.request_logging);
        assert_eq!(config.id_length_bytes, 9);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_port() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("PORT", "not-a-port");
        }

        assert!(Config::from_env().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_bool() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("REQUEST_LOGGING", "sometimes");
        }

        assert!(Config::from_env().is_err());

        clear_env();
    }
}
