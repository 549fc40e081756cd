//! Tests against the bundled sample snapshot

use act_leaderboard::snapshot::load_snapshot;
use act_leaderboard::tally::{summarize_checkin, tally_by_category};
use act_leaderboard::{LeaderboardView, Placement, ReadModels, TrailingPolicy};
use std::path::PathBuf;

fn club() -> ReadModels {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples/snapshots/club.toml");
    load_snapshot(path).expect("sample snapshot loads")
}

#[test]
fn club_leaderboard_order() {
    let view = LeaderboardView::with_models(&club(), TrailingPolicy::LastPosition);
    let rows: Vec<(&str, &str, u64, Placement)> = view
        .leaderboard()
        .iter()
        .map(|e| {
            (
                e.user_id.as_str(),
                e.display_name.as_str(),
                e.total_points,
                e.placement,
            )
        })
        .collect();

    assert_eq!(
        rows,
        vec![
            ("ada", "Ada Lovelace", 25, Placement::Gold),
            ("margaret", "Margaret Hamilton", 15, Placement::Silver),
            ("guest", "guest", 10, Placement::Bronze),
            ("grace", "Grace Hopper", 0, Placement::Rank(4)),
            ("linus", "Linus", 0, Placement::Trailing),
        ]
    );
}

#[test]
fn club_lowest_distinct_score_marks_both_zero_rows() {
    let view = LeaderboardView::with_models(&club(), TrailingPolicy::LowestDistinctScore);
    let trailing: Vec<&str> = view
        .leaderboard()
        .iter()
        .filter(|e| e.placement == Placement::Trailing)
        .map(|e| e.user_id.as_str())
        .collect();
    assert_eq!(trailing, vec!["grace", "linus"]);
}

#[test]
fn club_user_summaries() {
    let models = club();
    let view = LeaderboardView::with_models(&models, TrailingPolicy::default());

    let margaret = view.user_summary("margaret");
    assert_eq!(margaret.total_points, 15);
    assert_eq!(margaret.tally.get("B"), Some(&3));
    assert!(!margaret.tally.contains_key("retired"));

    let grace = view.user_summary("grace");
    assert_eq!(grace.total_points, 0);
    assert!(grace.tally.is_empty());

    let by_category = tally_by_category(&view.user_summary("ada").tally, &models);
    assert_eq!(by_category["fitness"].get("A"), Some(&2));
    assert_eq!(by_category["learning"].get("B"), Some(&1));
}

#[test]
fn club_checkin_summary_ignores_approval() {
    let models = club();
    let pending = models.checkin("c2").expect("checkin c2");
    let summary = summarize_checkin(&pending.achievement_counts, &models);
    assert_eq!(summary.achievement_count, 5);
    assert_eq!(summary.points, 50);

    let mixed = models.checkin("c3").expect("checkin c3");
    let summary = summarize_checkin(&mixed.achievement_counts, &models);
    assert_eq!(summary.achievement_count, 7);
    assert_eq!(summary.points, 15);
}
