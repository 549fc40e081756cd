//! Snapshot file loader
//!
//! A snapshot is a TOML document holding every record the leaderboard needs:
//!
//! ```toml
//! [[users]]
//! id = "u1"
//! display_name = "Ada Lovelace"
//!
//! [[categories]]
//! id = "fitness"
//! name = "Fitness"
//!
//! [[achievements]]
//! id = "run"
//! name = "Morning run"
//! points = 10
//! category_id = "fitness"
//!
//! [[checkins]]
//! id = "c1"
//! user_id = "u1"
//! approved = true
//! [checkins.achievements]
//! run = 2
//! ```
//!
//! Numbers are read as signed integers so that negative points or counts are
//! reported as validation errors rather than opaque parse failures.

use crate::core::error::SnapshotError;
use crate::core::index::{count_from_raw, points_from_raw, ReadModels};
use crate::core::models::{Achievement, AchievementCategory, AchievementCounts, Checkin, User};
use crate::info;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct SnapshotFile {
    #[serde(default)]
    users: Vec<User>,
    #[serde(default)]
    categories: Vec<AchievementCategory>,
    #[serde(default)]
    achievements: Vec<RawAchievement>,
    #[serde(default)]
    checkins: Vec<RawCheckin>,
}

#[derive(Debug, Deserialize)]
struct RawAchievement {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    points: i64,
    category_id: String,
}

#[derive(Debug, Deserialize)]
struct RawCheckin {
    id: String,
    user_id: String,
    #[serde(default)]
    approved: bool,
    #[serde(default)]
    note: Option<String>,
    #[serde(default)]
    achievements: BTreeMap<String, i64>,
}

impl RawAchievement {
    fn validate(self) -> Result<Achievement, SnapshotError> {
        let points = points_from_raw(&self.id, self.points)?;
        Ok(Achievement {
            id: self.id,
            name: self.name,
            description: self.description,
            points,
            category_id: self.category_id,
        })
    }
}

impl RawCheckin {
    fn validate(self) -> Result<Checkin, SnapshotError> {
        let achievement_counts = self
            .achievements
            .iter()
            .map(|(achievement_id, &raw)| {
                count_from_raw(&self.id, achievement_id, raw).map(|count| (achievement_id.clone(), count))
            })
            .collect::<Result<AchievementCounts, _>>()?;

        Ok(Checkin {
            id: self.id,
            user_id: self.user_id,
            approved: self.approved,
            note: self.note,
            achievement_counts,
        })
    }
}

/// Parse snapshot TOML into validated read models
///
/// # Errors
/// Returns an error if the TOML is malformed or any record fails validation
/// (negative values, empty or duplicate ids).
pub fn parse_snapshot(toml_str: &str) -> Result<ReadModels, SnapshotError> {
    let file: SnapshotFile = toml::from_str(toml_str)?;

    let achievements = file
        .achievements
        .into_iter()
        .map(RawAchievement::validate)
        .collect::<Result<Vec<_>, _>>()?;
    let checkins = file
        .checkins
        .into_iter()
        .map(RawCheckin::validate)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ReadModels::from_records(
        file.users,
        file.categories,
        achievements,
        checkins,
    )?)
}

/// Load and validate a snapshot file
///
/// # Errors
/// Returns an error if the file cannot be read or [`parse_snapshot`] fails.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<ReadModels, SnapshotError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let models = parse_snapshot(&content)?;
    info!(
        "Snapshot loaded from {}: {} achievements, {} checkins",
        path.display(),
        models.achievement_catalog().len(),
        models.checkin_by_id().len()
    );
    Ok(models)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::IndexError;

    const SMALL: &str = r#"
[[users]]
id = "u1"
display_name = "Ada"

[[achievements]]
id = "A"
name = "Alpha"
points = 10
category_id = "x"

[[checkins]]
id = "c1"
user_id = "u1"
approved = true
note = "first"
[checkins.achievements]
A = 2
"#;

    #[test]
    fn test_parse_small_snapshot() {
        let models = parse_snapshot(SMALL).expect("parse snapshot");
        assert_eq!(models.display_name("u1"), Some("Ada"));
        assert_eq!(models.achievement("A").map(|a| a.points), Some(10));

        let checkin = models.checkin("c1").expect("checkin c1");
        assert!(checkin.approved);
        assert_eq!(checkin.note.as_deref(), Some("first"));
        assert_eq!(checkin.achievement_counts.get("A"), Some(&2));
    }

    #[test]
    fn test_empty_snapshot_is_valid() {
        let models = parse_snapshot("").expect("parse empty snapshot");
        assert!(models.leaderboard_user_ids().is_empty());
    }

    #[test]
    fn test_negative_points_rejected() {
        let toml = r#"
[[achievements]]
id = "bad"
name = "Bad"
points = -1
category_id = "x"
"#;
        let err = parse_snapshot(toml).unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::Index(IndexError::NegativePoints { points: -1, .. })
        ));
    }

    #[test]
    fn test_negative_count_rejected() {
        let toml = r#"
[[checkins]]
id = "c1"
user_id = "u1"
[checkins.achievements]
A = -4
"#;
        let err = parse_snapshot(toml).unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::Index(IndexError::NegativeCount { count: -4, .. })
        ));
    }

    #[test]
    fn test_duplicate_checkin_rejected() {
        let toml = r#"
[[checkins]]
id = "c1"
user_id = "u1"

[[checkins]]
id = "c1"
user_id = "u2"
"#;
        assert!(matches!(
            parse_snapshot(toml),
            Err(SnapshotError::Index(IndexError::Duplicate { kind: "checkin", .. }))
        ));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        assert!(matches!(
            parse_snapshot("[[users]\nid ="),
            Err(SnapshotError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            load_snapshot("does/not/exist.toml"),
            Err(SnapshotError::Io(_))
        ));
    }
}
