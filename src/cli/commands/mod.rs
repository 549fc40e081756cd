//! CLI command handlers for `actboard`.
//!
//! Each command is implemented in its own submodule and returns a
//! user-facing error message on failure.

pub mod checkin;
pub mod config;
pub mod leaderboard;
pub mod tally;

use act_leaderboard::config::Config;
use act_leaderboard::snapshot::load_snapshot;
use act_leaderboard::{error, ReadModels};
use std::path::{Path, PathBuf};

/// Resolve a snapshot argument: an existing path is used as-is, otherwise it
/// is looked up inside the configured `snapshots_dir`.
pub fn resolve_snapshot(snapshot: &Path, config: &Config) -> PathBuf {
    if snapshot.exists() || config.paths.snapshots_dir.is_empty() {
        return snapshot.to_path_buf();
    }
    let candidate = Path::new(&config.paths.snapshots_dir).join(snapshot);
    if candidate.exists() {
        candidate
    } else {
        snapshot.to_path_buf()
    }
}

/// Resolve and load a snapshot, mapping failures to a CLI message
fn load_models(snapshot: &Path, config: &Config) -> Result<ReadModels, String> {
    let path = resolve_snapshot(snapshot, config);
    load_snapshot(&path).map_err(|e| {
        error!("Failed to load snapshot {}: {e}", path.display());
        format!("✗ Failed to load {}: {e}", path.display())
    })
}
