//! Configuration module

pub mod settings;

pub use settings::{CorsConfig, CorsPolicy, LoggingConfig, ServerConfig, Settings};
