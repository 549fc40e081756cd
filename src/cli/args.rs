//! CLI argument definitions for `actboard`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use act_leaderboard::config::ConfigOverrides;
use act_leaderboard::logger::Level;
use act_leaderboard::TrailingPolicy;

/// CLI log level argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

/// CLI trailing policy argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum TrailingPolicyArg {
    /// Mark the last row of the list
    LastPosition,
    /// Mark every row with the lowest score (unless all scores tie)
    LowestDistinctScore,
    /// Never mark a trailing row
    Disabled,
}

impl From<TrailingPolicyArg> for TrailingPolicy {
    fn from(arg: TrailingPolicyArg) -> Self {
        match arg {
            TrailingPolicyArg::LastPosition => Self::LastPosition,
            TrailingPolicyArg::LowestDistinctScore => Self::LowestDistinctScore,
            TrailingPolicyArg::Disabled => Self::Disabled,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    Get {
        /// Optional configuration key (e.g., `level`, `trailing_policy`, `reports_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Reset one configuration value to its default.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Rank users by approved points.
    Leaderboard {
        /// Snapshot file (a bare name is also looked up in `snapshots_dir`)
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,

        /// Output format: text, markdown (md), or csv
        #[arg(short, long, value_name = "FORMAT", default_value = "text")]
        format: String,

        /// Write the report to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Write the report into the configured `reports_dir`
        #[arg(long, conflicts_with = "output")]
        save: bool,
    },
    /// Show a user's approved achievement counts.
    Tally {
        /// Snapshot file (a bare name is also looked up in `snapshots_dir`)
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,

        /// User to inspect
        #[arg(value_name = "USER_ID")]
        user_id: String,

        /// Group counts by achievement category
        #[arg(long)]
        by_category: bool,
    },
    /// Preview the achievement count and points of a checkin.
    Checkin {
        /// Snapshot file (a bare name is also looked up in `snapshots_dir`)
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,

        /// Checkin to summarize
        #[arg(value_name = "CHECKIN_ID")]
        checkin_id: String,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "actboard",
    about = "Achievement checkin leaderboard",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override the trailing marker policy
    #[arg(long = "trailing-policy", value_enum)]
    pub trailing_policy: Option<TrailingPolicyArg>,

    /// Override config snapshots directory
    #[arg(long = "snapshots-dir", value_name = "DIR")]
    pub snapshots_dir: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` fields leave the loaded configuration untouched.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| Level::from(lvl).to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            trailing_policy: self
                .trailing_policy
                .map(|p| TrailingPolicy::from(p).to_string()),
            snapshots_dir: self
                .snapshots_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}
