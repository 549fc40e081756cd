//! Per-user reduction of approved checkins into points and achievement tallies

use crate::core::index::ReadModels;
use crate::core::models::{AchievementCounts, Checkin, Points};
use crate::debug;
use std::collections::BTreeMap;

/// Cumulative approved count per achievement id
pub type Tally = BTreeMap<String, u64>;

/// A tally split by achievement category id
pub type TallyByCategory = BTreeMap<String, Tally>;

/// What a single checkin adds to its owner's totals
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckinContribution {
    /// Points from catalog-present achievements
    pub points: Points,
    /// Counts of catalog-present achievements
    pub tally: Tally,
}

/// Reduced totals for one user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTotals {
    /// User the totals belong to
    pub user_id: String,
    /// Sum of `points * count` over approved checkins
    pub total_points: Points,
    /// Cumulative counts over approved checkins
    pub tally: Tally,
}

/// Running totals of a checkin being composed (or already stored)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckinSummary {
    /// Sum of every count in the checkin
    pub achievement_count: u64,
    /// Points the checkin awards once approved
    pub points: Points,
}

/// Fold the achievement counts of one checkin.
///
/// Approval is not consulted here. Achievements missing from the catalog and
/// zero counts contribute nothing and create no tally key.
#[must_use]
pub fn fold_checkin(checkin: &Checkin, models: &ReadModels) -> CheckinContribution {
    let mut contribution = CheckinContribution::default();

    for (achievement_id, &count) in &checkin.achievement_counts {
        if count == 0 {
            continue;
        }
        let Some(achievement) = models.achievement(achievement_id) else {
            debug!(
                "Checkin '{}' references unknown achievement '{achievement_id}'; skipped",
                checkin.id
            );
            continue;
        };

        contribution.points = contribution
            .points
            .saturating_add(achievement.points_for(count));
        add_count(&mut contribution.tally, achievement_id, u64::from(count));
    }

    contribution
}

/// Fold every approved checkin owned by `user_id`.
///
/// Unknown users and users without approved checkins yield zero points and an
/// empty tally.
#[must_use]
pub fn fold_user(user_id: &str, models: &ReadModels) -> UserTotals {
    let mut totals = UserTotals {
        user_id: user_id.to_string(),
        total_points: 0,
        tally: Tally::new(),
    };

    for checkin_id in models.checkin_ids(user_id) {
        let Some(checkin) = models.checkin(checkin_id) else {
            debug!("Checkin '{checkin_id}' of user '{user_id}' has no record; skipped");
            continue;
        };
        if !checkin.approved {
            continue;
        }

        let contribution = fold_checkin(checkin, models);
        totals.total_points = totals.total_points.saturating_add(contribution.points);
        for (achievement_id, count) in contribution.tally {
            add_count(&mut totals.tally, &achievement_id, count);
        }
    }

    totals
}

/// Reduce every leaderboard user (registered users plus checkin owners) in
/// ascending user id order.
#[must_use]
pub fn reduce_users(models: &ReadModels) -> Vec<UserTotals> {
    let totals: Vec<UserTotals> = models
        .leaderboard_user_ids()
        .into_iter()
        .map(|user_id| fold_user(user_id, models))
        .collect();

    debug!(
        "Reduced {} users over {} checkins (revision {})",
        totals.len(),
        models.checkin_by_id().len(),
        models.revision()
    );

    totals
}

/// Cumulative approved achievement counts of a single user.
///
/// Returns an empty tally for unknown users.
#[must_use]
pub fn compute_achievement_tally(models: &ReadModels, user_id: &str) -> Tally {
    fold_user(user_id, models).tally
}

/// Group a tally by achievement category using the catalog-by-category index.
///
/// Achievements no longer in the catalog are left out, and categories with
/// nothing tallied are omitted.
#[must_use]
pub fn tally_by_category(tally: &Tally, models: &ReadModels) -> TallyByCategory {
    models
        .achievements_by_category()
        .iter()
        .filter_map(|(category_id, achievement_ids)| {
            let group: Tally = achievement_ids
                .iter()
                .filter_map(|id| tally.get(id).map(|&count| (id.clone(), count)))
                .collect();
            (!group.is_empty()).then(|| (category_id.clone(), group))
        })
        .collect()
}

/// Summarize a set of achievement counts the way the checkin builder shows
/// them: the total number of achievements selected, and the points they are
/// worth according to the catalog.
#[must_use]
pub fn summarize_checkin(counts: &AchievementCounts, models: &ReadModels) -> CheckinSummary {
    counts
        .iter()
        .fold(CheckinSummary::default(), |summary, (achievement_id, &count)| {
            let points = models
                .achievement(achievement_id)
                .map_or(0, |achievement| achievement.points_for(count));
            CheckinSummary {
                achievement_count: summary.achievement_count.saturating_add(u64::from(count)),
                points: summary.points.saturating_add(points),
            }
        })
}

/// Insert `count` for a new key, otherwise add it to the existing value
fn add_count(tally: &mut Tally, achievement_id: &str, count: u64) {
    if let Some(existing) = tally.get_mut(achievement_id) {
        *existing = existing.saturating_add(count);
    } else {
        tally.insert(achievement_id.to_string(), count);
    }
}
