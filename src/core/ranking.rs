//! Ranking of reduced user totals into leaderboard placements

use crate::core::models::Points;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A user's score before ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredUser {
    /// User identifier
    pub user_id: String,
    /// Name to display
    pub display_name: String,
    /// Approved points
    pub total_points: Points,
}

/// Rank label shown next to a leaderboard row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    /// First position
    Gold,
    /// Second position
    Silver,
    /// Third position
    Bronze,
    /// Any other position, 1-based
    Rank(usize),
    /// Marked as trailing by the active [`TrailingPolicy`]
    Trailing,
}

impl Placement {
    /// Placement of the row at 0-based `index`
    #[must_use]
    pub const fn for_index(index: usize, trailing: bool) -> Self {
        if trailing {
            return Self::Trailing;
        }
        match index {
            0 => Self::Gold,
            1 => Self::Silver,
            2 => Self::Bronze,
            _ => Self::Rank(index + 1),
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gold => write!(f, "gold"),
            Self::Silver => write!(f, "silver"),
            Self::Bronze => write!(f, "bronze"),
            Self::Rank(n) => write!(f, "{n}"),
            Self::Trailing => write!(f, "trailing"),
        }
    }
}

/// Which rows receive the [`Placement::Trailing`] marker.
///
/// `LastPosition` marks whatever row sorts last, even when it is tied with
/// higher rows, so a tied top scorer can be labelled as trailing. It is the
/// default because it matches the app's existing behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrailingPolicy {
    /// The single last row of the list
    #[default]
    LastPosition,
    /// Every row holding the minimum score, unless all scores are equal
    LowestDistinctScore,
    /// No row is marked
    Disabled,
}

impl TrailingPolicy {
    fn marks(self, index: usize, len: usize, points: Points, lowest: Points, highest: Points) -> bool {
        match self {
            Self::LastPosition => index + 1 == len,
            Self::LowestDistinctScore => lowest != highest && points == lowest,
            Self::Disabled => false,
        }
    }
}

impl FromStr for TrailingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "last-position" | "last" => Ok(Self::LastPosition),
            "lowest-distinct-score" | "lowest" => Ok(Self::LowestDistinctScore),
            "disabled" | "none" | "off" => Ok(Self::Disabled),
            _ => Err(format!("Unknown trailing policy: '{s}'")),
        }
    }
}

impl fmt::Display for TrailingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LastPosition => write!(f, "last-position"),
            Self::LowestDistinctScore => write!(f, "lowest-distinct-score"),
            Self::Disabled => write!(f, "disabled"),
        }
    }
}

/// A ranked leaderboard row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// User identifier
    pub user_id: String,
    /// Name to display
    pub display_name: String,
    /// Approved points
    pub total_points: Points,
    /// 1-based list position
    pub position: usize,
    /// Rank label
    pub placement: Placement,
}

/// Sort users by points, highest first, and assign placements.
///
/// The sort is stable: users with equal points keep their input order.
#[must_use]
pub fn rank(mut users: Vec<ScoredUser>, policy: TrailingPolicy) -> Vec<LeaderboardEntry> {
    users.sort_by(|a, b| b.total_points.cmp(&a.total_points));

    let len = users.len();
    let highest = users.first().map_or(0, |u| u.total_points);
    let lowest = users.last().map_or(0, |u| u.total_points);

    users
        .into_iter()
        .enumerate()
        .map(|(index, user)| {
            let trailing = policy.marks(index, len, user.total_points, lowest, highest);
            LeaderboardEntry {
                placement: Placement::for_index(index, trailing),
                position: index + 1,
                user_id: user.user_id,
                display_name: user.display_name,
                total_points: user.total_points,
            }
        })
        .collect()
}
