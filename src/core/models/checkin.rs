//! Checkin model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of times an achievement was performed within one checkin
pub type Count = u32;

/// Achievement counts of a single checkin, keyed by achievement id
pub type AchievementCounts = BTreeMap<String, Count>;

/// A user-submitted record referencing achievements, pending admin approval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkin {
    /// Checkin identifier
    pub id: String,

    /// Owning user
    pub user_id: String,

    /// Set by an admin; only approved checkins count toward points and tallies
    #[serde(default)]
    pub approved: bool,

    /// Free-form note written by the user
    #[serde(default)]
    pub note: Option<String>,

    /// Achievement id to count
    #[serde(default)]
    pub achievement_counts: AchievementCounts,
}

impl Checkin {
    /// Create a new, unapproved checkin with no achievements
    #[must_use]
    pub const fn new(id: String, user_id: String) -> Self {
        Self {
            id,
            user_id,
            approved: false,
            note: None,
            achievement_counts: BTreeMap::new(),
        }
    }

    /// Add `count` occurrences of an achievement, summing with any existing count
    pub fn add_achievement(&mut self, achievement_id: impl Into<String>, count: Count) {
        let slot = self.achievement_counts.entry(achievement_id.into()).or_insert(0);
        *slot = slot.saturating_add(count);
    }

    /// Builder-style variant of [`add_achievement`](Self::add_achievement)
    #[must_use]
    pub fn with_achievement(mut self, achievement_id: impl Into<String>, count: Count) -> Self {
        self.add_achievement(achievement_id, count);
        self
    }

    /// Builder-style approval flag
    #[must_use]
    pub const fn with_approved(mut self, approved: bool) -> Self {
        self.approved = approved;
        self
    }
}
