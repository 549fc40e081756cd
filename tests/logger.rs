//! Integration tests for logger behavior.

use act_leaderboard::logger::{set_level, set_level_from_str, Level};
use act_leaderboard::{debug, error, info, verbose, warn};

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("warn"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn level_parse_accepts_aliases_and_mixed_case() {
    assert_eq!("warning".parse::<Level>(), Ok(Level::Warn));
    assert_eq!("ERR".parse::<Level>(), Ok(Level::Error));
    assert_eq!(" Debug ".parse::<Level>(), Ok(Level::Debug));
    assert!(set_level_from_str("warning"));
    assert!(set_level_from_str("INFO"));
}

#[test]
fn level_parse_error_names_the_input() {
    let err = "trace".parse::<Level>().unwrap_err();
    assert!(err.contains("trace"));
}

#[test]
fn level_display_matches_config_spelling() {
    let names: Vec<String> = [Level::Error, Level::Warn, Level::Info, Level::Debug]
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(names, vec!["error", "warn", "info", "debug"]);
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
    verbose!("verbose integration");
}
