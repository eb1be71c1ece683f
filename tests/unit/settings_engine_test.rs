//! Integration-level tests for the SettingsEngine public API: default
//! loading, value persistence, and reset behavior.

use tabshell::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use tabshell::types::errors::SettingsError;
use tabshell::types::settings::ShellSettings;
use tempfile::TempDir;

/// Helper: create a SettingsEngine backed by a temp directory that lives for
/// the duration of the test (the caller holds the `TempDir` handle).
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    SettingsEngine::new(Some(path))
}

#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();
    assert_eq!(settings, ShellSettings::default());
    assert_eq!(settings.general.seed_url, "https://jobi.one");
    assert_eq!(settings.general.new_tab_url, "about:blank");
    assert_eq!(settings.general.default_scheme, "https");
    assert!(settings.navigation.discard_stale_completions);
    assert!(settings.navigation.optimistic_address);
}

#[test]
fn test_set_value_persists_changes() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine
            .set_value(
                "general.new_tab_url",
                serde_json::Value::String("https://start.example".to_string()),
            )
            .unwrap();
    }

    let mut engine = engine_in_temp(&dir);
    let loaded = engine.load().unwrap();
    assert_eq!(loaded.general.new_tab_url, "https://start.example");
}

#[test]
fn test_set_value_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    assert!(engine.set_value("general.homepage", serde_json::json!("x")).is_err());
    assert!(engine.set_value("", serde_json::json!(true)).is_err());
}

#[test]
fn test_set_value_rejects_wrong_type() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    let result = engine.set_value(
        "navigation.discard_stale_completions",
        serde_json::json!("yes"),
    );
    assert!(result.is_err());
    assert!(engine.get_settings().navigation.discard_stale_completions);
}

#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();
    engine
        .set_value("general.seed_url", serde_json::json!("about:blank"))
        .unwrap();

    engine.reset().unwrap();
    assert_eq!(*engine.get_settings(), ShellSettings::default());

    let mut reloaded = engine_in_temp(&dir);
    assert_eq!(reloaded.load().unwrap(), ShellSettings::default());
}

#[test]
fn test_default_config_path_uses_platform() {
    let engine = SettingsEngine::new(None);
    let path = engine.get_config_path();
    assert!(path.contains("settings.json"));
    assert!(path.to_lowercase().contains("tabshell"));
}

#[test]
fn test_set_value_rejects_non_scheme_values() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    for bad in ["", "https://", "1http", "ht tp"] {
        let result = engine.set_value("general.default_scheme", serde_json::json!(bad));
        assert!(
            matches!(result, Err(SettingsError::InvalidValue(_))),
            "{:?} accepted",
            bad
        );
    }
    let result = engine.set_value(
        "general.recognized_schemes",
        serde_json::json!(["https", "about:"]),
    );
    assert!(matches!(result, Err(SettingsError::InvalidValue(_))));
    let result = engine.set_value("general.seed_url", serde_json::json!("  "));
    assert!(matches!(result, Err(SettingsError::InvalidValue(_))));

    assert_eq!(*engine.get_settings(), ShellSettings::default());
    let mut reloaded = engine_in_temp(&dir);
    assert_eq!(reloaded.load().unwrap(), ShellSettings::default());
}

#[test]
fn test_set_value_accepts_scheme_tokens() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    engine
        .set_value("general.default_scheme", serde_json::json!("http"))
        .unwrap();
    engine
        .set_value(
            "general.recognized_schemes",
            serde_json::json!(["https", "view-source", "coap+tcp"]),
        )
        .unwrap();
    assert_eq!(engine.get_settings().general.default_scheme, "http");
}
