//! Basic load tests: success, missing files, commit semantics.

use std::time::Duration;

use tempfile::TempDir;

use super::write_config;
use crate::loader::{ConfigError, LoadOptions};
use crate::store::Config;
use crate::value::{Map, Value};

const SAMPLE_INI: &str = "\
; sample
app_name = strata
[server]
host = localhost
port = 8080
timeout = 30s
[features]
enabled = yes
tags = a, b, c
";

#[test]
fn test_load_ini_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "app.ini", SAMPLE_INI);

    let config = Config::new();
    config
        .load_file(&path, &LoadOptions::new().ignore_env())
        .unwrap();

    assert_eq!(config.get_string("app_name"), "strata");
    assert_eq!(config.get_string("server.host"), "localhost");
    assert_eq!(config.get_int("server.port"), 8080);
    assert_eq!(config.get_duration("server.timeout"), Duration::from_secs(30));
    assert!(config.get_bool("features.enabled"));
    assert_eq!(config.get_string_list("features.tags"), vec!["a", "b", "c"]);
    assert_eq!(config.keys(), vec!["app_name", "features", "server"]);
}

#[test]
fn test_missing_file_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.ini");

    let config = Config::new();
    config.set("keep", 1);

    match config.load_file(&path, &LoadOptions::new()) {
        Err(ConfigError::NotFound { path: reported }) => assert_eq!(reported, path),
        other => panic!("Expected NotFound, got {:?}", other),
    }
    assert_eq!(config.get_int("keep"), 1);
}

#[test]
fn test_directory_is_read_error() {
    let temp_dir = TempDir::new().unwrap();

    let result = Config::new().load_file(temp_dir.path(), &LoadOptions::new().ignore_env());
    assert!(
        matches!(result, Err(ConfigError::Read { .. })),
        "Expected Read error, got {:?}",
        result
    );
}

#[test]
fn test_successful_load_replaces_previous_content() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "app.ini", "fresh = 2\n");

    let config = Config::new();
    config.set("stale", true);
    config
        .load_file(&path, &LoadOptions::new().ignore_env())
        .unwrap();

    assert!(!config.has("stale"));
    assert_eq!(config.get_int("fresh"), 2);
    assert_eq!(config.len(), 1);
}

#[test]
fn test_failed_load_preserves_previous_content() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "broken.json", "{\"unterminated\": ");

    let config = Config::new();
    config.set("server.port", 9000);
    let before = config.get_all();

    let result = config.load_file(&path, &LoadOptions::new().ignore_env());
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
    assert_eq!(config.get_all(), before);
}

#[test]
fn test_load_constructors() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "app.ini", "[db]\nhost = primary\n");

    let config = Config::load(&path, &LoadOptions::new().ignore_env()).unwrap();
    assert_eq!(config.get_string("db.host"), "primary");

    let mut defaults = Map::new();
    defaults.insert("db.port".to_string(), Value::Int(5432));
    defaults.insert("db.host".to_string(), Value::from("fallback"));
    let config = Config::load_with_defaults(&path, defaults).unwrap();
    assert_eq!(config.get_string("db.host"), "primary");
    assert_eq!(config.get_int("db.port"), 5432);

    let missing = temp_dir.path().join("missing.yaml");
    assert!(matches!(
        Config::load(&missing, &LoadOptions::new()),
        Err(ConfigError::NotFound { .. })
    ));
}

#[test]
fn test_empty_ini_file_loads_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "empty.ini", "");

    let config = Config::new();
    config.set("old", 1);
    config
        .load_file(&path, &LoadOptions::new().ignore_env())
        .unwrap();
    assert!(config.is_empty());
}

#[test]
fn test_custom_separator_applies_to_loaded_data() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "app.ini", "[server]\nport = 81\n");

    let config = Config::with_settings(crate::ConfigSettings { separator: '/' }).unwrap();
    let options = LoadOptions::new()
        .ignore_env()
        .with_default("server/host", "h")
        .with_required_key("server/port");
    config.load_file(&path, &options).unwrap();

    assert_eq!(config.get_int("server/port"), 81);
    assert_eq!(config.get_string("server/host"), "h");
    assert!(!config.has("server.port"));
}
