//! Configuration system tests
//!
//! Tests for config paths and editor config parsing.

use ttk_edit::config::EditorConfig;
use ttk_edit::config_paths;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("ttk-edit"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&config));
    }
}

// ========================================================================
// Editor Config Tests
// ========================================================================

#[test]
fn test_empty_yaml_gives_defaults() {
    let config = EditorConfig::from_yaml("{}").unwrap();
    assert_eq!(config, EditorConfig::default());
}

#[test]
fn test_partial_yaml_keeps_other_defaults() {
    let config = EditorConfig::from_yaml("history_limit: 500\n").unwrap();
    assert_eq!(config.history_limit, Some(500));
    assert_eq!(config.max_file_size_mb, 50);
}

#[test]
fn test_yaml_round_trip() {
    let config = EditorConfig {
        history_limit: Some(64),
        max_file_size_mb: 4,
    };
    let yaml = serde_yaml::to_string(&config).unwrap();
    assert_eq!(EditorConfig::from_yaml(&yaml).unwrap(), config);
    assert_eq!(config.max_file_size_bytes(), 4 * 1024 * 1024);
}

#[test]
fn test_invalid_yaml_is_an_error() {
    assert!(EditorConfig::from_yaml("history_limit: lots").is_err());
}
