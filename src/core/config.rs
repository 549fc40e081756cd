//! Configuration module for `act-leaderboard`

use crate::core::ranking::TrailingPolicy;
use crate::logger::Level;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the config directory
const DIR_VARIABLE: &str = "$ACTBOARD";

const fn default_true() -> bool {
    true
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Leaderboard presentation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardConfig {
    /// Heading used in reports
    #[serde(default)]
    pub title: String,
    /// Trailing marker policy (`last-position`, `lowest-distinct-score`, `disabled`)
    #[serde(default)]
    pub trailing_policy: String,
    /// Include the points column in reports
    #[serde(default = "default_true")]
    pub show_points: bool,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            trailing_policy: String::new(),
            show_points: true,
        }
    }
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory searched for snapshot files given by bare name
    #[serde(default)]
    pub snapshots_dir: String,
    /// Directory for report output files
    #[serde(default)]
    pub reports_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Leaderboard settings
    #[serde(default)]
    pub leaderboard: LeaderboardConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override trailing policy
    pub trailing_policy: Option<String>,
    /// Override snapshots directory
    pub snapshots_dir: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

impl Config {
    /// Get the `$ACTBOARD` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/actboard`
    /// - macOS: `~/Library/Application Support/actboard`
    /// - Windows: `%APPDATA%\actboard`
    #[must_use]
    pub fn get_actboard_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("actboard")
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds.
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_actboard_dir().join(CONFIG_FILE_NAME)
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only string fields that are empty here and non-empty in `defaults` are
    /// filled in.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let pairs: [(&mut String, &String); 6] = [
            (&mut self.logging.level, &defaults.logging.level),
            (&mut self.logging.file, &defaults.logging.file),
            (&mut self.leaderboard.title, &defaults.leaderboard.title),
            (
                &mut self.leaderboard.trailing_policy,
                &defaults.leaderboard.trailing_policy,
            ),
            (&mut self.paths.snapshots_dir, &defaults.paths.snapshots_dir),
            (&mut self.paths.reports_dir, &defaults.paths.reports_dir),
        ];

        let mut changed = false;
        for (value, default) in pairs {
            if value.is_empty() && !default.is_empty() {
                value.clone_from(default);
                changed = true;
            }
        }
        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides affect this run only; nothing is written to disk.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(policy) = &overrides.trailing_policy {
            self.leaderboard.trailing_policy.clone_from(policy);
        }
        if let Some(snapshots_dir) = &overrides.snapshots_dir {
            self.paths.snapshots_dir.clone_from(snapshots_dir);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
    }

    /// Expand `$ACTBOARD` to the config directory
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_actboard_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults and `$ACTBOARD` is expanded in
    /// path values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.snapshots_dir = Self::expand_variables(&config.paths.snapshots_dir);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The
    /// defaults are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from the user config file, or create it from defaults
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_file_path())
    }

    /// Load configuration from `config_file`, creating it from defaults on first run
    ///
    /// Fields missing from an existing file are filled from the defaults and
    /// the file is rewritten.
    #[must_use]
    pub fn load_from(config_file: &Path) -> Self {
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            let _ = defaults.save_to(config_file);
            return defaults;
        }

        let Ok(content) = fs::read_to_string(config_file) else {
            return defaults;
        };
        let Ok(mut config) = Self::from_toml(&content) else {
            return defaults;
        };
        if config.merge_defaults(&defaults) {
            let _ = config.save_to(config_file);
        }
        config
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, the config cannot
    /// be serialized, or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration to `config_file`
    ///
    /// # Errors
    /// Same as [`save`](Self::save).
    pub fn save_to(&self, config_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(config_file, toml_str)?;
        Ok(())
    }

    /// Effective trailing policy; unknown or empty values fall back to the default
    #[must_use]
    pub fn trailing_policy(&self) -> TrailingPolicy {
        self.leaderboard
            .trailing_policy
            .parse()
            .unwrap_or_default()
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `title`, `trailing_policy`,
    /// `show_points`, `snapshots_dir`, `reports_dir` (dashes accepted in place
    /// of underscores).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match normalize_key(key).as_str() {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "title" => Some(self.leaderboard.title.clone()),
            "trailing_policy" => Some(self.leaderboard.trailing_policy.clone()),
            "show_points" => Some(self.leaderboard.show_points.to_string()),
            "snapshots_dir" => Some(self.paths.snapshots_dir.clone()),
            "reports_dir" => Some(self.paths.reports_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only. Call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value does not parse
    /// (log level, trailing policy, booleans).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match normalize_key(key).as_str() {
            "level" => {
                let level: Level = value.parse()?;
                self.logging.level = level.to_string();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => self.logging.verbose = parse_bool(key, value)?,
            "title" => self.leaderboard.title = value.to_string(),
            "trailing_policy" => {
                let policy: TrailingPolicy = value.parse()?;
                self.leaderboard.trailing_policy = policy.to_string();
            }
            "show_points" => self.leaderboard.show_points = parse_bool(key, value)?,
            "snapshots_dir" => self.paths.snapshots_dir = value.to_string(),
            "reports_dir" => self.paths.reports_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset a single configuration value to its default
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match normalize_key(key).as_str() {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "title" => self.leaderboard.title.clone_from(&defaults.leaderboard.title),
            "trailing_policy" => self
                .leaderboard
                .trailing_policy
                .clone_from(&defaults.leaderboard.trailing_policy),
            "show_points" => self.leaderboard.show_points = defaults.leaderboard.show_points,
            "snapshots_dir" => self
                .paths
                .snapshots_dir
                .clone_from(&defaults.paths.snapshots_dir),
            "reports_dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Delete the user config file so the next [`load()`](Config::load) recreates it
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_ascii_lowercase().replace('-', "_")
}

fn parse_bool(key: &str, value: &str) -> Result<bool, String> {
    value
        .parse::<bool>()
        .map_err(|_| format!("Invalid boolean value for '{key}': '{value}'"))
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[leaderboard]")?;
        writeln!(f, "  title = \"{}\"", self.leaderboard.title)?;
        writeln!(f, "  trailing_policy = \"{}\"", self.leaderboard.trailing_policy)?;
        writeln!(f, "  show_points = {}", self.leaderboard.show_points)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  snapshots_dir = \"{}\"", self.paths.snapshots_dir)?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse_and_carry_policy() {
        let config = Config::from_defaults();
        assert_eq!(config.trailing_policy(), TrailingPolicy::LastPosition);
        assert!(config.leaderboard.show_points);
        assert!(!config.leaderboard.title.is_empty());
    }

    #[test]
    fn test_unknown_policy_falls_back_to_default() {
        let mut config = Config::from_defaults();
        config.leaderboard.trailing_policy = "sideways".to_string();
        assert_eq!(config.trailing_policy(), TrailingPolicy::LastPosition);
    }

    #[test]
    fn test_set_normalizes_values() {
        let mut config = Config::from_defaults();
        config.set("level", "WARNING").unwrap();
        assert_eq!(config.logging.level, "warn");

        config.set("trailing-policy", "lowest").unwrap();
        assert_eq!(config.leaderboard.trailing_policy, "lowest-distinct-score");
        assert_eq!(config.trailing_policy(), TrailingPolicy::LowestDistinctScore);

        assert!(config.set("level", "loud").is_err());
        assert!(config.set("trailing_policy", "random").is_err());
        assert!(config.set("show_points", "maybe").is_err());
    }

    #[test]
    fn test_missing_show_points_defaults_to_true() {
        let config = Config::from_toml("[leaderboard]\ntitle = \"x\"\n").unwrap();
        assert!(config.leaderboard.show_points);
    }
}
