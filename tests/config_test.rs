//! Integration tests for Settings loading.
//!
//! These use `Settings::from_file` so that neither a global config nor
//! `EQPARSE_*` variables on the test machine can change the outcome.

use std::fs;

use tempfile::TempDir;

use eqparse::application::ApplicationError;
use eqparse::config::Settings;

#[test]
fn given_partial_config_when_loading_then_missing_fields_use_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("eqparse.toml");
    fs::write(&path, "report_ignored_tags = false\n").unwrap();

    let settings = Settings::from_file(&path).expect("load settings");

    assert!(!settings.report_ignored_tags);
    assert!(settings.color, "color should keep its default");
}

#[test]
fn given_full_config_when_loading_then_all_fields_applied() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("eqparse.toml");
    fs::write(&path, "report_ignored_tags = false\ncolor = false\n").unwrap();

    let settings = Settings::from_file(&path).expect("load settings");

    assert_eq!(
        settings,
        Settings {
            report_ignored_tags: false,
            color: false,
        }
    );
}

#[test]
fn given_missing_file_when_loading_then_config_error() {
    let dir = TempDir::new().unwrap();
    let result = Settings::from_file(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_malformed_value_when_loading_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("eqparse.toml");
    fs::write(&path, "color = \"sometimes\"\n").unwrap();

    let result = Settings::from_file(&path);
    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_settings_when_rendered_then_round_trips_through_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("eqparse.toml");
    let original = Settings {
        report_ignored_tags: false,
        color: true,
    };
    fs::write(&path, original.to_toml().unwrap()).unwrap();

    assert_eq!(Settings::from_file(&path).unwrap(), original);
}
