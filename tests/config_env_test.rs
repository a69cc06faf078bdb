//! Environment layer of `Settings::load`.
//!
//! Kept in its own test binary: it changes process-wide variables, which
//! would leak into the file-based tests running on other threads.

use std::env;

use tempfile::TempDir;

use eqparse::config::Settings;

#[test]
fn given_eqparse_env_vars_when_loading_then_they_override_defaults() {
    let home = TempDir::new().unwrap();
    env::set_var("HOME", home.path());
    env::set_var("XDG_CONFIG_HOME", home.path().join(".config"));
    env::set_var("EQPARSE_REPORT_IGNORED_TAGS", "false");
    env::set_var("EQPARSE_COLOR", "false");

    let settings = Settings::load(None).expect("load settings");

    env::remove_var("EQPARSE_REPORT_IGNORED_TAGS");
    env::remove_var("EQPARSE_COLOR");

    assert_eq!(
        settings,
        Settings {
            report_ignored_tags: false,
            color: false,
        }
    );
}
