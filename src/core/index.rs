//! Read-model indexes consumed by the aggregation engine
//!
//! `ReadModels` bundles the lookup structures that the surrounding app keeps
//! loaded in memory: the achievement catalog (by id and by category), checkin
//! records by id, checkin ownership by user, and display names by user.
//! All validation happens here so the engine can treat its inputs as
//! well-formed non-negative integers.

use crate::core::error::IndexError;
use crate::core::models::{Achievement, AchievementCategory, Checkin, Count, Points, User};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of revision stamps shared by every `ReadModels` in the process.
/// Zero is reserved for models that were never mutated.
static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

/// Identifier sets keyed by an owning id
pub type IdsByKey = BTreeMap<String, BTreeSet<String>>;

/// In-memory lookup structures for users, achievements and checkins.
///
/// Every mutation stamps a new [`revision`](Self::revision), unique across the
/// process, so derived views can tell when they are stale even after a clone
/// diverges or a different set of models is swapped in. Cloning yields a
/// consistent point-in-time copy.
#[derive(Debug, Clone, Default)]
pub struct ReadModels {
    users: BTreeMap<String, User>,
    categories: BTreeMap<String, AchievementCategory>,
    achievements: BTreeMap<String, Achievement>,
    achievements_by_category: IdsByKey,
    checkins: BTreeMap<String, Checkin>,
    checkin_ids_by_user: IdsByKey,
    revision: u64,
}

impl ReadModels {
    /// Create empty read models
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build read models from complete record sets
    ///
    /// # Errors
    /// Returns the first validation failure (empty or duplicate ids).
    pub fn from_records(
        users: impl IntoIterator<Item = User>,
        categories: impl IntoIterator<Item = AchievementCategory>,
        achievements: impl IntoIterator<Item = Achievement>,
        checkins: impl IntoIterator<Item = Checkin>,
    ) -> Result<Self, IndexError> {
        let mut models = Self::new();
        for user in users {
            models.register_user(user)?;
        }
        for category in categories {
            models.insert_category(category)?;
        }
        for achievement in achievements {
            models.insert_achievement(achievement)?;
        }
        for checkin in checkins {
            models.insert_checkin(checkin)?;
        }
        Ok(models)
    }

    /// Process-unique stamp of the last successful mutation (0 when never mutated)
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Add a user to the registry
    ///
    /// # Errors
    /// Fails on an empty id or an id that is already registered.
    pub fn register_user(&mut self, user: User) -> Result<(), IndexError> {
        require_id("user", &user.id)?;
        if self.users.contains_key(&user.id) {
            return Err(duplicate("user", &user.id));
        }
        self.users.insert(user.id.clone(), user);
        self.touch();
        Ok(())
    }

    /// Add an achievement category
    ///
    /// # Errors
    /// Fails on an empty or duplicate id.
    pub fn insert_category(&mut self, category: AchievementCategory) -> Result<(), IndexError> {
        require_id("category", &category.id)?;
        if self.categories.contains_key(&category.id) {
            return Err(duplicate("category", &category.id));
        }
        self.categories.insert(category.id.clone(), category);
        self.touch();
        Ok(())
    }

    /// Add an achievement to the catalog
    ///
    /// Achievements whose category was never registered are still indexed
    /// under their `category_id`.
    ///
    /// # Errors
    /// Fails on an empty or duplicate id.
    pub fn insert_achievement(&mut self, achievement: Achievement) -> Result<(), IndexError> {
        require_id("achievement", &achievement.id)?;
        if self.achievements.contains_key(&achievement.id) {
            return Err(duplicate("achievement", &achievement.id));
        }
        self.achievements_by_category
            .entry(achievement.category_id.clone())
            .or_default()
            .insert(achievement.id.clone());
        self.achievements.insert(achievement.id.clone(), achievement);
        self.touch();
        Ok(())
    }

    /// Remove an achievement from the catalog.
    ///
    /// Checkins that still reference it are left untouched; the engine skips
    /// the dangling reference.
    pub fn remove_achievement(&mut self, achievement_id: &str) -> Option<Achievement> {
        let removed = self.achievements.remove(achievement_id)?;
        if let Some(ids) = self.achievements_by_category.get_mut(&removed.category_id) {
            ids.remove(achievement_id);
            if ids.is_empty() {
                self.achievements_by_category.remove(&removed.category_id);
            }
        }
        self.touch();
        Some(removed)
    }

    /// Index a checkin and record its ownership
    ///
    /// The owning user does not have to be registered.
    ///
    /// # Errors
    /// Fails on an empty checkin or user id, or a duplicate checkin id.
    pub fn insert_checkin(&mut self, checkin: Checkin) -> Result<(), IndexError> {
        require_id("checkin", &checkin.id)?;
        require_id("checkin owner", &checkin.user_id)?;
        if self.checkins.contains_key(&checkin.id) {
            return Err(duplicate("checkin", &checkin.id));
        }
        self.checkin_ids_by_user
            .entry(checkin.user_id.clone())
            .or_default()
            .insert(checkin.id.clone());
        self.checkins.insert(checkin.id.clone(), checkin);
        self.touch();
        Ok(())
    }

    /// Set the admin approval flag of a checkin
    ///
    /// # Errors
    /// Returns [`IndexError::UnknownCheckin`] if the checkin is not indexed.
    pub fn set_approved(&mut self, checkin_id: &str, approved: bool) -> Result<(), IndexError> {
        let checkin = self
            .checkins
            .get_mut(checkin_id)
            .ok_or_else(|| IndexError::UnknownCheckin(checkin_id.to_string()))?;
        checkin.approved = approved;
        self.touch();
        Ok(())
    }

    /// Look up an achievement in the catalog
    #[must_use]
    pub fn achievement(&self, achievement_id: &str) -> Option<&Achievement> {
        self.achievements.get(achievement_id)
    }

    /// Achievement catalog keyed by id
    #[must_use]
    pub const fn achievement_catalog(&self) -> &BTreeMap<String, Achievement> {
        &self.achievements
    }

    /// Achievement ids grouped by category id
    #[must_use]
    pub const fn achievements_by_category(&self) -> &IdsByKey {
        &self.achievements_by_category
    }

    /// Registered categories keyed by id
    #[must_use]
    pub const fn categories(&self) -> &BTreeMap<String, AchievementCategory> {
        &self.categories
    }

    /// Look up a checkin record
    #[must_use]
    pub fn checkin(&self, checkin_id: &str) -> Option<&Checkin> {
        self.checkins.get(checkin_id)
    }

    /// Checkin records keyed by id
    #[must_use]
    pub const fn checkin_by_id(&self) -> &BTreeMap<String, Checkin> {
        &self.checkins
    }

    /// Checkin ids keyed by owning user
    #[must_use]
    pub const fn checkin_ids_by_user(&self) -> &IdsByKey {
        &self.checkin_ids_by_user
    }

    /// Checkin ids owned by a user (empty for unknown users)
    pub fn checkin_ids(&self, user_id: &str) -> impl Iterator<Item = &str> {
        self.checkin_ids_by_user
            .get(user_id)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    /// Look up a registered user
    #[must_use]
    pub fn user(&self, user_id: &str) -> Option<&User> {
        self.users.get(user_id)
    }

    /// Registered display name of a user
    #[must_use]
    pub fn display_name(&self, user_id: &str) -> Option<&str> {
        self.user(user_id).map(|u| u.display_name.as_str())
    }

    /// Every user that should appear on the leaderboard: registered users and
    /// checkin owners, in ascending id order
    #[must_use]
    pub fn leaderboard_user_ids(&self) -> BTreeSet<&str> {
        self.users
            .keys()
            .chain(self.checkin_ids_by_user.keys())
            .map(String::as_str)
            .collect()
    }

    fn touch(&mut self) {
        self.revision = NEXT_REVISION.fetch_add(1, Ordering::Relaxed);
    }
}

/// Convert a raw signed point value into catalog points.
///
/// # Errors
/// Returns [`IndexError::NegativePoints`] for values below zero.
pub fn points_from_raw(achievement_id: &str, raw: i64) -> Result<Points, IndexError> {
    Points::try_from(raw).map_err(|_| IndexError::NegativePoints {
        achievement_id: achievement_id.to_string(),
        points: raw,
    })
}

/// Convert a raw signed checkin count into a [`Count`].
///
/// Zero is accepted; the engine treats it as no contribution.
///
/// # Errors
/// Returns [`IndexError::NegativeCount`] below zero and
/// [`IndexError::CountOutOfRange`] above [`Count::MAX`].
pub fn count_from_raw(checkin_id: &str, achievement_id: &str, raw: i64) -> Result<Count, IndexError> {
    if raw < 0 {
        return Err(IndexError::NegativeCount {
            checkin_id: checkin_id.to_string(),
            achievement_id: achievement_id.to_string(),
            count: raw,
        });
    }
    Count::try_from(raw).map_err(|_| IndexError::CountOutOfRange {
        checkin_id: checkin_id.to_string(),
        achievement_id: achievement_id.to_string(),
        count: raw,
    })
}

fn require_id(kind: &'static str, id: &str) -> Result<(), IndexError> {
    if id.trim().is_empty() {
        Err(IndexError::EmptyId { kind })
    } else {
        Ok(())
    }
}

fn duplicate(kind: &'static str, id: &str) -> IndexError {
    IndexError::Duplicate {
        kind,
        id: id.to_string(),
    }
}
