use std::fs;

use creatordeck::config::{Config, ConfigError};

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.default_route, "/");
    assert!(config.logging.file.is_none());
    assert_eq!(config.logging.filter, "info");
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui]\ndefault_route = \"/community\"\n").unwrap();
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ui.default_route, "/community");
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn full_file_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[ui]
tick_rate_ms = 100
default_route = "/messages"

[logging]
file = "/tmp/creatordeck.log"
filter = "debug"
"#,
    )
    .unwrap();
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.ui.default_route, "/messages");
    assert_eq!(
        config.logging.file.as_deref().unwrap().to_str(),
        Some("/tmp/creatordeck.log")
    );
    assert_eq!(config.logging.filter, "debug");
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "not valid [ toml").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn zero_tick_rate_fails_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui]\ntick_rate_ms = 0\n").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}
