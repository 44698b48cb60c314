//! Unit tests for the SettingsEngine public API.
//!
//! The engine only reads: a missing file means defaults, a partial file is
//! filled from defaults, and a broken file is a startup error.

use std::fs;

use tempfile::TempDir;

use webshell::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use webshell::types::errors::SettingsError;
use webshell::types::settings::ShellSettings;

/// Helper: a SettingsEngine reading `settings.json` inside `dir`.
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    SettingsEngine::new(Some(dir.path().join("settings.json")))
}

fn write_settings(dir: &TempDir, content: &str) {
    fs::write(dir.path().join("settings.json"), content).unwrap();
}

#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(settings, ShellSettings::default());
    assert!(!dir.path().join("settings.json").exists(), "load must not create the file");
}

#[test]
fn test_defaults_match_original_window() {
    let settings = ShellSettings::default();
    assert_eq!(settings.window.title, "Custom Web Browser");
    assert_eq!((settings.window.width, settings.window.height), (1200.0, 800.0));
    assert_eq!((settings.window.min_width, settings.window.min_height), (800.0, 600.0));
    assert_eq!(settings.startup.start_address, "https://www.google.com");
    assert_eq!(settings.startup.start_label, "Home");
    assert_eq!(settings.layout.nav_bar_height, 40.0);
    assert_eq!(settings.layout.history_panel_width, 200.0);
    assert_eq!(settings.layout.tab_label_max_chars, 20);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    write_settings(&dir, r#"{"startup": {"start_address": "https://example.org"}}"#);
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(settings.startup.start_address, "https://example.org");
    assert_eq!(settings.startup.start_label, "Home");
    assert_eq!(settings.window, ShellSettings::default().window);
    assert_eq!(engine.get_settings(), &settings);
}

#[test]
fn test_malformed_file_is_a_serialization_error() {
    let dir = TempDir::new().unwrap();
    write_settings(&dir, "{ not json");
    let mut engine = engine_in_temp(&dir);

    let result = engine.load();

    assert!(matches!(result, Err(SettingsError::SerializationError(_))));
}

#[test]
fn test_wrong_type_is_a_serialization_error() {
    let dir = TempDir::new().unwrap();
    write_settings(&dir, r#"{"layout": {"nav_bar_height": "tall"}}"#);
    let mut engine = engine_in_temp(&dir);

    assert!(matches!(engine.load(), Err(SettingsError::SerializationError(_))));
}

#[test]
fn test_min_size_larger_than_window_is_rejected() {
    let dir = TempDir::new().unwrap();
    write_settings(&dir, r#"{"window": {"width": 640, "height": 480}}"#);
    let mut engine = engine_in_temp(&dir);

    assert!(matches!(engine.load(), Err(SettingsError::InvalidValue(_))));
}

#[test]
fn test_zero_label_length_is_rejected() {
    let dir = TempDir::new().unwrap();
    write_settings(&dir, r#"{"layout": {"tab_label_max_chars": 0}}"#);
    let mut engine = engine_in_temp(&dir);

    assert!(matches!(engine.load(), Err(SettingsError::InvalidValue(_))));
}

#[test]
fn test_config_path_override() {
    let dir = TempDir::new().unwrap();
    let engine = engine_in_temp(&dir);
    assert_eq!(engine.get_config_path(), dir.path().join("settings.json").as_path());
}
