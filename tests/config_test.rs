//! Unit tests for configuration module

use customer_gateway::config::{CorsPolicy, Settings};

#[test]
fn test_missing_config_file_uses_defaults() {
    let settings = Settings::load_from_path("does/not/exist.yaml").unwrap();

    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.cors.policy, CorsPolicy::AllowAny);
    assert_eq!(settings.logging.format, "json");
}

#[test]
fn test_load_from_yaml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gateway.yaml");
    std::fs::write(
        &path,
        "server:\n  port: 8088\ncors:\n  policy: single-origin\n  allowed_origin: \"http://127.0.0.1:5500\"\n",
    )
    .unwrap();

    let settings = Settings::load_from_path(&path).unwrap();

    assert_eq!(settings.server.port, 8088);
    assert_eq!(settings.cors.policy, CorsPolicy::SingleOrigin);
    assert_eq!(
        settings.cors.allowed_origin.as_deref(),
        Some("http://127.0.0.1:5500")
    );
    assert!(settings.validate().is_ok());
}

#[test]
fn test_port_env_override() {
    // Only this test reads PORT; the rest go through load_from_path.
    std::env::set_var("PORT", "4500");
    let settings = Settings::load().unwrap();
    std::env::remove_var("PORT");

    assert_eq!(settings.server.port, 4500);
}

#[test]
fn test_settings_validation_valid_defaults() {
    let settings = Settings::default();
    assert!(settings.validate().is_ok());
}

#[test]
fn test_settings_validation_invalid_port() {
    let mut settings = Settings::default();
    settings.server.port = 0;

    assert!(settings.validate().is_err());
}

#[test]
fn test_settings_validation_single_origin_requires_origin() {
    let mut settings = Settings::default();
    settings.cors.policy = CorsPolicy::SingleOrigin;

    assert!(settings.validate().is_err());

    settings.cors.allowed_origin = Some(String::new());
    assert!(settings.validate().is_err());

    settings.cors.allowed_origin = Some("http://127.0.0.1:5500".to_string());
    assert!(settings.validate().is_ok());
}

#[test]
fn test_settings_validation_rejects_contradictory_cors() {
    let mut settings = Settings::default();
    settings.cors.policy = CorsPolicy::AllowAny;
    settings.cors.allowed_origin = Some("http://127.0.0.1:5500".to_string());

    assert!(settings.validate().is_err());
}

#[test]
fn test_settings_validation_rejects_non_header_origin() {
    let mut settings = Settings::default();
    settings.cors.policy = CorsPolicy::SingleOrigin;
    settings.cors.allowed_origin = Some("http://bad\norigin".to_string());

    assert!(settings.validate().is_err());
}
