//! Achievement catalog models

use serde::{Deserialize, Serialize};

/// Points awarded per unit of an achievement
pub type Points = u64;

/// A grouping of achievements (shown as tabs by presentation layers)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementCategory {
    /// Category identifier
    pub id: String,

    /// Human-readable category name
    pub name: String,
}

/// An immutable catalog entry with a fixed point value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    /// Catalog identifier
    pub id: String,

    /// Short title (e.g., "Morning run")
    pub name: String,

    /// Longer explanation of what earns the achievement
    #[serde(default)]
    pub description: String,

    /// Points awarded for each counted occurrence
    pub points: Points,

    /// Category this achievement belongs to
    pub category_id: String,
}

impl Achievement {
    /// Create a new achievement with an empty description
    #[must_use]
    pub const fn new(id: String, name: String, points: Points, category_id: String) -> Self {
        Self {
            id,
            name,
            description: String::new(),
            points,
            category_id,
        }
    }

    /// Points earned for `count` occurrences of this achievement
    #[must_use]
    pub fn points_for(&self, count: u32) -> Points {
        self.points.saturating_mul(Points::from(count))
    }
}
