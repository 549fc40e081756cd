//! Integration tests for configuration management

use act_leaderboard::config::{Config, ConfigOverrides};
use act_leaderboard::TrailingPolicy;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("nested").join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.snapshots_dir.is_empty(),
        "Default snapshots_dir should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
    assert_eq!(config.trailing_policy(), TrailingPolicy::LastPosition);
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[leaderboard]
title = "Spring Challenge"
trailing_policy = "lowest-distinct-score"
show_points = false

[paths]
snapshots_dir = "./snapshots"
reports_dir = "./reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.leaderboard.title, "Spring Challenge");
    assert_eq!(config.trailing_policy(), TrailingPolicy::LowestDistinctScore);
    assert!(!config.leaderboard.show_points);
    assert_eq!(config.paths.snapshots_dir, "./snapshots");
    assert_eq!(config.paths.reports_dir, "./reports");
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "error"

[leaderboard]
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert!(config.leaderboard.show_points);
    assert_eq!(config.paths.reports_dir, "");
}

#[test]
fn test_unknown_trailing_policy_falls_back_to_default() {
    let config = Config::from_toml("[leaderboard]\ntrailing_policy = \"sideways\"\n")
        .expect("Failed to parse TOML");
    assert_eq!(config.trailing_policy(), TrailingPolicy::default());
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$ACTBOARD/test.log"

[paths]
reports_dir = "$ACTBOARD/reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("actboard"));
    assert!(!config.logging.file.contains("$ACTBOARD"));
    assert!(config.paths.reports_dir.ends_with("reports"));
    assert!(!config.paths.reports_dir.contains("$ACTBOARD"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config
        .set("verbose", "true")
        .expect("Failed to set verbose");
    assert!(config.logging.verbose);

    config
        .set("trailing-policy", "lowest")
        .expect("Failed to set trailing policy");
    assert_eq!(
        config.get("trailing_policy").unwrap(),
        "lowest-distinct-score"
    );

    assert!(config.set("level", "loud").is_err());
    assert!(config.set("show_points", "maybe").is_err());
    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("title", "Renamed").expect("Failed to set title");
    assert_eq!(config.leaderboard.title, "Renamed");

    config
        .unset("title", &defaults)
        .expect("Failed to unset title");
    assert_eq!(config.leaderboard.title, defaults.leaderboard.title);
    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let (_temp_dir, config_file) = setup_temp_config();

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config
        .set("trailing_policy", "disabled")
        .expect("Failed to set trailing policy");
    config.save_to(&config_file).expect("Failed to save config");

    let loaded = Config::load_from(&config_file);
    assert_eq!(loaded.logging.level, "info");
    assert_eq!(loaded.trailing_policy(), TrailingPolicy::Disabled);
}

#[test]
fn test_load_from_creates_missing_file() {
    let (_temp_dir, config_file) = setup_temp_config();
    assert!(!config_file.exists());

    let config = Config::load_from(&config_file);
    assert!(config_file.exists());
    assert_eq!(config.logging.level, Config::from_defaults().logging.level);
}

#[test]
fn test_load_from_fills_missing_fields() {
    let (_temp_dir, config_file) = setup_temp_config();
    fs::create_dir_all(config_file.parent().unwrap()).unwrap();
    fs::write(&config_file, "[logging]\nlevel = \"error\"\n").unwrap();

    let config = Config::load_from(&config_file);
    assert_eq!(config.logging.level, "error");
    assert!(!config.leaderboard.trailing_policy.is_empty());

    let rewritten = fs::read_to_string(&config_file).unwrap();
    assert!(rewritten.contains("[leaderboard]"));
}

#[test]
fn test_load_from_invalid_file_uses_defaults() {
    let (_temp_dir, config_file) = setup_temp_config();
    fs::create_dir_all(config_file.parent().unwrap()).unwrap();
    fs::write(&config_file, "this is = = not toml").unwrap();

    let config = Config::load_from(&config_file);
    assert_eq!(config.logging.level, Config::from_defaults().logging.level);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        trailing_policy: Some("disabled".to_string()),
        snapshots_dir: Some("./custom_snapshots".to_string()),
        reports_dir: Some("./custom_reports".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.trailing_policy(), TrailingPolicy::Disabled);
    assert_eq!(config.paths.snapshots_dir, "./custom_snapshots");
    assert_eq!(config.paths.reports_dir, "./custom_reports");
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let before = config.paths.reports_dir.clone();

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        ..ConfigOverrides::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.paths.reports_dir, before);
}

#[test]
fn test_config_display_format() {
    let config = Config::from_defaults();
    let display_str = format!("{config}");

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[leaderboard]"));
    assert!(display_str.contains("[paths]"));
    assert!(display_str.contains("trailing_policy"));
    assert!(display_str.contains("show_points"));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let toml_str = r#"
[logging]
level = "error"

[leaderboard]
title = ""
trailing_policy = ""

[paths]
snapshots_dir = ""
reports_dir = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    assert!(
        config.merge_defaults(&defaults),
        "merge_defaults should return true when fields are added"
    );
    assert_eq!(config.paths.reports_dir, defaults.paths.reports_dir);
    assert!(!config.merge_defaults(&defaults));
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"

[leaderboard]
trailing_policy = "disabled"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    let defaults = Config::from_defaults();

    config.merge_defaults(&defaults);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.leaderboard.trailing_policy, "disabled");
}

#[test]
fn test_get_actboard_dir() {
    let dir = Config::get_actboard_dir();

    assert!(dir.to_string_lossy().contains("actboard"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
