//! CORS layer construction from the configured policy

use crate::config::{CorsConfig, CorsPolicy};
use crate::error::{AppError, Result};
use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

/// Build the CORS layer for the configured policy.
///
/// `allow-any` opens the API to every origin; `single-origin` restricts
/// `Access-Control-Allow-Origin` to the configured origin and narrows the
/// allowed methods and headers to what the API uses.
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
    match config.policy {
        CorsPolicy::AllowAny => Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)),
        CorsPolicy::SingleOrigin => {
            let origin = config.allowed_origin.as_deref().ok_or_else(|| {
                AppError::Config(config::ConfigError::Message(
                    "cors.policy is single-origin but cors.allowed_origin is not set".to_string(),
                ))
            })?;

            let origin = origin.parse::<HeaderValue>().map_err(|e| {
                AppError::Config(config::ConfigError::Message(format!(
                    "invalid cors.allowed_origin '{}': {}",
                    origin, e
                )))
            })?;

            Ok(CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_any_policy() {
        let config = CorsConfig {
            policy: CorsPolicy::AllowAny,
            allowed_origin: None,
        };
        assert!(cors_layer(&config).is_ok());
    }

    #[test]
    fn test_single_origin_policy() {
        let config = CorsConfig {
            policy: CorsPolicy::SingleOrigin,
            allowed_origin: Some("http://127.0.0.1:5500".to_string()),
        };
        assert!(cors_layer(&config).is_ok());
    }

    #[test]
    fn test_single_origin_without_origin() {
        let config = CorsConfig {
            policy: CorsPolicy::SingleOrigin,
            allowed_origin: None,
        };
        assert!(cors_layer(&config).is_err());
    }

    #[test]
    fn test_single_origin_invalid_header_value() {
        let config = CorsConfig {
            policy: CorsPolicy::SingleOrigin,
            allowed_origin: Some("http://bad\norigin".to_string()),
        };
        assert!(cors_layer(&config).is_err());
    }
}
