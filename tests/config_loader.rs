use std::fs;

use tempfile::TempDir;
use userview::config::{Config, ConfigError, ProfileConfig};
use userview::preferences::Theme;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.profile.initial_id, 1);
    assert_eq!(config.profile.load_delay_ms, 1000);
    assert_eq!(config.profile.greeting(), "Hey!");
    assert!(config.preferences.is_empty());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("userview/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_full_config_parses() {
    let (_dir, path) = write_config(
        r#"
[profile]
initial_id = 42
load_delay_ms = 250
greeting = "Good Morning !"

[preferences]
theme = "dark"
notifications = false
language = "fr"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.profile.initial_id, 42);
    assert_eq!(
        config.profile.user_data_options().load_delay,
        std::time::Duration::from_millis(250)
    );
    assert_eq!(config.profile.greeting(), "Good Morning !");
    assert_eq!(config.preferences.theme, Some(Theme::Dark));
    assert_eq!(config.preferences.notifications, Some(false));
    assert_eq!(config.preferences.language.as_deref(), Some("fr"));
}

#[test]
fn test_partial_sections_use_defaults() {
    let (_dir, path) = write_config("[preferences]\ntheme = \"dark\"\n");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.profile, ProfileConfig::default());
    assert_eq!(config.preferences.theme, Some(Theme::Dark));
    assert!(config.preferences.notifications.is_none());
}

#[test]
fn test_empty_greeting_falls_back() {
    let profile = ProfileConfig {
        greeting: Some(String::new()),
        ..ProfileConfig::default()
    };
    assert_eq!(profile.greeting(), "Hey!");
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[profile\ninitial_id = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_unknown_theme_is_parse_error() {
    let (_dir, path) = write_config("[preferences]\ntheme = \"sepia\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_zero_initial_id_fails_validation() {
    let (_dir, path) = write_config("[profile]\ninitial_id = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("initial_id"));
}

#[test]
fn test_blank_language_fails_validation() {
    let (_dir, path) = write_config("[preferences]\nlanguage = \"  \"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[cfg(unix)]
#[test]
fn test_directory_path_is_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = Config::load_from(temp_dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
}
