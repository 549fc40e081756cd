//! Cached leaderboard view over the read models
//!
//! The view owns the last computed [`LeaderboardSnapshot`] and the revision of
//! the read models it was computed from. A refresh rebuilds the whole pipeline
//! (reduce, then rank) into a new snapshot and swaps it in with one
//! assignment, so readers see either the old result or the new one.

use crate::core::index::ReadModels;
use crate::core::models::Points;
use crate::core::ranking::{rank, LeaderboardEntry, Placement, ScoredUser, TrailingPolicy};
use crate::core::tally::{reduce_users, Tally};
use crate::debug;
use std::collections::BTreeMap;

static EMPTY_TALLY: Tally = BTreeMap::new();

/// Ranked leaderboard plus per-user tallies computed from one revision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardSnapshot {
    /// Read-model revision the snapshot was computed from
    pub revision: u64,
    /// Policy used to mark trailing rows
    pub policy: TrailingPolicy,
    /// Rows sorted by points, highest first
    pub entries: Vec<LeaderboardEntry>,
    /// Approved achievement counts per user id
    pub tallies: BTreeMap<String, Tally>,
}

/// Everything shown when a single leaderboard row is selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    /// User identifier
    pub user_id: String,
    /// Display name, if the user is on the leaderboard
    pub display_name: Option<String>,
    /// Approved points (0 when not on the leaderboard)
    pub total_points: Points,
    /// Placement, if the user is on the leaderboard
    pub placement: Option<Placement>,
    /// Approved achievement counts
    pub tally: Tally,
}

/// Run the full pipeline against the read models
#[must_use]
pub fn compute_snapshot(models: &ReadModels, policy: TrailingPolicy) -> LeaderboardSnapshot {
    let totals = reduce_users(models);

    let mut tallies = BTreeMap::new();
    let mut scored = Vec::with_capacity(totals.len());
    for user in totals {
        let display_name = models
            .display_name(&user.user_id)
            .unwrap_or(&user.user_id)
            .to_string();
        scored.push(ScoredUser {
            user_id: user.user_id.clone(),
            display_name,
            total_points: user.total_points,
        });
        tallies.insert(user.user_id, user.tally);
    }

    LeaderboardSnapshot {
        revision: models.revision(),
        policy,
        entries: rank(scored, policy),
        tallies,
    }
}

/// Ranked leaderboard for the current read models
#[must_use]
pub fn compute_leaderboard(models: &ReadModels, policy: TrailingPolicy) -> Vec<LeaderboardEntry> {
    compute_snapshot(models, policy).entries
}

/// Leaderboard result cache that recomputes when the read models change
#[derive(Debug, Clone, Default)]
pub struct LeaderboardView {
    policy: TrailingPolicy,
    snapshot: Option<LeaderboardSnapshot>,
}

impl LeaderboardView {
    /// Create an empty view; nothing is computed until [`refresh`](Self::refresh)
    #[must_use]
    pub const fn new(policy: TrailingPolicy) -> Self {
        Self {
            policy,
            snapshot: None,
        }
    }

    /// Create a view and compute it immediately
    #[must_use]
    pub fn with_models(models: &ReadModels, policy: TrailingPolicy) -> Self {
        let mut view = Self::new(policy);
        view.refresh(models);
        view
    }

    /// Active trailing policy
    #[must_use]
    pub const fn policy(&self) -> TrailingPolicy {
        self.policy
    }

    /// Change the trailing policy; the next refresh recomputes
    pub fn set_policy(&mut self, policy: TrailingPolicy) {
        self.policy = policy;
    }

    /// Whether the cached snapshot no longer matches `models` or the policy
    #[must_use]
    pub fn is_stale(&self, models: &ReadModels) -> bool {
        self.snapshot
            .as_ref()
            .is_none_or(|s| s.revision != models.revision() || s.policy != self.policy)
    }

    /// Recompute if stale. Returns `true` when a new snapshot was installed.
    pub fn refresh(&mut self, models: &ReadModels) -> bool {
        if !self.is_stale(models) {
            return false;
        }
        let snapshot = compute_snapshot(models, self.policy);
        debug!(
            "Leaderboard recomputed at revision {} ({} entries)",
            snapshot.revision,
            snapshot.entries.len()
        );
        self.snapshot = Some(snapshot);
        true
    }

    /// The current snapshot, if one was computed
    #[must_use]
    pub const fn snapshot(&self) -> Option<&LeaderboardSnapshot> {
        self.snapshot.as_ref()
    }

    /// Ranked rows (empty before the first refresh)
    #[must_use]
    pub fn leaderboard(&self) -> &[LeaderboardEntry] {
        self.snapshot
            .as_ref()
            .map(|s| s.entries.as_slice())
            .unwrap_or_default()
    }

    /// Approved achievement counts of a user (empty when unknown)
    #[must_use]
    pub fn achievement_tally(&self, user_id: &str) -> &Tally {
        self.snapshot
            .as_ref()
            .and_then(|s| s.tallies.get(user_id))
            .unwrap_or(&EMPTY_TALLY)
    }

    /// Summary of a selected user; unknown users get zero points
    #[must_use]
    pub fn user_summary(&self, user_id: &str) -> UserSummary {
        let entry = self.leaderboard().iter().find(|e| e.user_id == user_id);
        UserSummary {
            user_id: user_id.to_string(),
            display_name: entry.map(|e| e.display_name.clone()),
            total_points: entry.map_or(0, |e| e.total_points),
            placement: entry.map(|e| e.placement),
            tally: self.achievement_tally(user_id).clone(),
        }
    }
}
