//! Application settings and configuration management
//!
//! Settings are layered: built-in defaults, then an optional
//! `config/gateway.yaml` file, then `CUSTOMER_GATEWAY__`-prefixed
//! environment variables (`__` separates nesting, e.g.
//! `CUSTOMER_GATEWAY__CORS__ALLOWED_ORIGIN`), then a plain `PORT`
//! variable which always wins for the listening port.

use crate::error::{AppError, Result};
use axum::http::HeaderValue;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Cross-origin policy applied to every response.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CorsPolicy {
    AllowAny,
    SingleOrigin,
}

impl Default for CorsPolicy {
    fn default() -> Self {
        CorsPolicy::AllowAny
    }
}

impl std::fmt::Display for CorsPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorsPolicy::AllowAny => write!(f, "allow-any"),
            CorsPolicy::SingleOrigin => write!(f, "single-origin"),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CorsConfig {
    #[serde(default)]
    pub policy: CorsPolicy,
    /// Required when `policy` is `single-origin`; must not be set otherwise.
    #[serde(default)]
    pub allowed_origin: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
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
    "json".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file and environment variables
    pub fn load() -> Result<Self> {
        let mut settings = Self::load_from_path("config/gateway.yaml")?;

        // Legacy contract: a bare PORT variable overrides every other source.
        if let Ok(port) = std::env::var("PORT") {
            settings.apply_port_override(&port)?;
        }

        Ok(settings)
    }

    /// Load settings from a specific configuration file path (YAML or TOML)
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let format = if path
            .extension()
            .map_or(false, |ext| ext == "yaml" || ext == "yml")
        {
            FileFormat::Yaml
        } else {
            FileFormat::Toml
        };

        let mut config_builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("cors.policy", "allow-any")?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "json")?;

        if path.exists() {
            config_builder = config_builder.add_source(File::from(path).format(format));
        }

        config_builder = config_builder.add_source(
            Environment::with_prefix("CUSTOMER_GATEWAY")
                .separator("__")
                .try_parsing(true),
        );

        let config = config_builder.build()?;
        let settings: Settings = config.try_deserialize()?;
        Ok(settings)
    }

    /// Apply a raw `PORT` value on top of the loaded settings
    pub fn apply_port_override(&mut self, value: &str) -> Result<()> {
        let port: u16 = value.parse().map_err(|e| {
            AppError::Config(config::ConfigError::Message(format!(
                "invalid PORT value '{}': {}",
                value, e
            )))
        })?;
        self.server.port = port;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Config(config::ConfigError::Message(
                "Server port cannot be 0".to_string(),
            )));
        }

        match self.cors.policy {
            CorsPolicy::SingleOrigin => {
                let origin = self.cors.allowed_origin.as_deref().unwrap_or("");
                if origin.is_empty() {
                    return Err(AppError::Config(config::ConfigError::Message(
                        "cors.policy is single-origin but cors.allowed_origin is not set"
                            .to_string(),
                    )));
                }
                if origin.parse::<HeaderValue>().is_err() {
                    return Err(AppError::Config(config::ConfigError::Message(format!(
                        "cors.allowed_origin '{}' is not a valid header value",
                        origin
                    ))));
                }
            }
            CorsPolicy::AllowAny => {
                // An origin alongside allow-any means two policies were
                // configured at once; refuse to guess which one is meant.
                if self.cors.allowed_origin.is_some() {
                    return Err(AppError::Config(config::ConfigError::Message(
                        "cors.allowed_origin is set but cors.policy is allow-any; \
                         set cors.policy to single-origin or remove the origin"
                            .to_string(),
                    )));
                }
            }
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
            },
            cors: CorsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.cors.policy, CorsPolicy::AllowAny);
        assert!(settings.cors.allowed_origin.is_none());
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_cors_policy_serialization() {
        let json = serde_json::to_string(&CorsPolicy::SingleOrigin).unwrap();
        assert_eq!(json, "\"single-origin\"");

        let policy: CorsPolicy = serde_json::from_str("\"allow-any\"").unwrap();
        assert_eq!(policy, CorsPolicy::AllowAny);
    }

    #[test]
    fn test_port_override() {
        let mut settings = Settings::default();
        settings.apply_port_override("8181").unwrap();
        assert_eq!(settings.server.port, 8181);

        assert!(settings.apply_port_override("not-a-port").is_err());
        assert_eq!(settings.server.port, 8181);
    }
}
