//! Leaderboard aggregation engine and its supporting layers

pub mod config;
pub mod error;
pub mod index;
pub mod models;
pub mod ranking;
pub mod report;
pub mod snapshot;
pub mod tally;
pub mod view;

pub use error::{IndexError, SnapshotError};
pub use index::ReadModels;
pub use ranking::{LeaderboardEntry, Placement, TrailingPolicy};
pub use tally::{compute_achievement_tally, Tally};
pub use view::{compute_leaderboard, LeaderboardView};

/// Returns the current version of the `act-leaderboard` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
