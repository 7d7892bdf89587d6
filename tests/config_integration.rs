#![cfg(not(target_arch = "wasm32"))]

use chat_widget::WidgetConfig;
use chat_widget::config::{CONFIG_FILE_ENV, DEFAULT_ENDPOINT, DEFAULT_FALLBACK_MESSAGE};
use serial_test::serial;
use std::env;
use std::fs;

const OVERRIDES: [&str; 4] = [
    "CHAT_WIDGET__ENDPOINT",
    "CHAT_WIDGET__GREETING",
    "CHAT_WIDGET__ELEMENTS__INPUT",
    "CHAT_WIDGET__FALLBACK_MESSAGE",
];

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var(CONFIG_FILE_ENV);
        for key in OVERRIDES {
            env::remove_var(key);
        }
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = WidgetConfig::load_from(None).expect("defaults should load");
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.fallback_message, DEFAULT_FALLBACK_MESSAGE);
    assert_eq!(config.elements.launcher, "chat-launcher");
    assert!(config.greeting.is_none());
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("CHAT_WIDGET__ENDPOINT", "https://bot.example.com/api/chat");
        env::set_var("CHAT_WIDGET__ELEMENTS__INPUT", "question-box");
    }

    let config = WidgetConfig::load_from(None).expect("Failed to load config");
    assert_eq!(config.endpoint, "https://bot.example.com/api/chat");
    assert_eq!(config.elements.input, "question-box");
    assert_eq!(config.elements.panel, "chat-panel");

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("widget.yaml");
    fs::write(
        &path,
        r#"
greeting: "Hi! Ask me anything about renting on Leechy."
title: Leechy Help
elements:
  panel: help-panel
"#,
    )
    .expect("Failed to write temp config");

    let config = WidgetConfig::load_from(Some(&path)).expect("Failed to load config from file");
    assert_eq!(
        config.greeting.as_deref(),
        Some("Hi! Ask me anything about renting on Leechy.")
    );
    assert_eq!(config.title, "Leechy Help");
    assert_eq!(config.elements.panel, "help-panel");
    assert_eq!(config.elements.send, "chat-send");
}

#[test]
#[serial]
fn test_env_beats_file() {
    clear_env_vars();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("widget.toml");
    fs::write(&path, "endpoint = \"/from-file\"\n").unwrap();

    unsafe {
        env::set_var(CONFIG_FILE_ENV, &path);
        env::set_var("CHAT_WIDGET__ENDPOINT", "/from-env");
    }

    let config = WidgetConfig::load().expect("Failed to load config");
    assert_eq!(config.endpoint, "/from-env");

    clear_env_vars();
}

#[test]
#[serial]
fn test_config_file_env_var() {
    clear_env_vars();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("widget.json");
    fs::write(&path, r#"{"fallback_message": "Please try again."}"#).unwrap();

    unsafe {
        env::set_var(CONFIG_FILE_ENV, &path);
    }

    let config = WidgetConfig::load().expect("Failed to load config");
    assert_eq!(config.fallback_message, "Please try again.");

    clear_env_vars();
}

#[test]
#[serial]
fn test_missing_file_is_an_error() {
    clear_env_vars();

    let dir = tempfile::tempdir().unwrap();
    let result = WidgetConfig::load_from(Some(&dir.path().join("absent.yaml")));
    assert!(matches!(result, Err(chat_widget::WidgetError::Config(_))));
}
