//! Tally command handler

use super::load_models;
use act_leaderboard::config::Config;
use act_leaderboard::tally::{tally_by_category, Tally};
use act_leaderboard::{LeaderboardView, ReadModels};
use std::path::Path;

/// Print a user's approved achievement counts and total points.
///
/// Unknown users print an empty tally rather than failing.
pub fn run(snapshot: &Path, user_id: &str, by_category: bool, config: &Config) -> Result<(), String> {
    let models = load_models(snapshot, config)?;
    let view = LeaderboardView::with_models(&models, config.trailing_policy());
    print!("{}", render(&models, &view, user_id, by_category));
    Ok(())
}

/// Render the tally section shown by the command
pub fn render(models: &ReadModels, view: &LeaderboardView, user_id: &str, by_category: bool) -> String {
    let summary = view.user_summary(user_id);
    let name = summary.display_name.as_deref().unwrap_or(user_id);

    let mut out = format!("\n=== {name} ===\n");
    out.push_str(&format!("Total points: {}\n", summary.total_points));
    if let Some(placement) = summary.placement {
        out.push_str(&format!("Placement: {placement}\n"));
    }

    if summary.tally.is_empty() {
        out.push_str("No approved achievements.\n");
        return out;
    }

    if by_category {
        for (category_id, tally) in tally_by_category(&summary.tally, models) {
            let heading = models
                .categories()
                .get(&category_id)
                .map_or(category_id.as_str(), |c| c.name.as_str());
            out.push_str(&format!("\n[{heading}]\n"));
            push_rows(&mut out, models, &tally);
        }
    } else {
        out.push('\n');
        push_rows(&mut out, models, &summary.tally);
    }
    out
}

fn push_rows(out: &mut String, models: &ReadModels, tally: &Tally) {
    for (achievement_id, count) in tally {
        let name = models
            .achievement(achievement_id)
            .map_or(achievement_id.as_str(), |a| a.name.as_str());
        out.push_str(&format!("  {name} x{count}\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use act_leaderboard::snapshot::parse_snapshot;
    use act_leaderboard::TrailingPolicy;

    const SNAPSHOT: &str = r#"
[[users]]
id = "u1"
display_name = "Ada"

[[categories]]
id = "fit"
name = "Fitness"

[[achievements]]
id = "run"
name = "Run"
points = 5
category_id = "fit"

[[achievements]]
id = "read"
name = "Read"
points = 2
category_id = "mind"

[[checkins]]
id = "c1"
user_id = "u1"
approved = true
[checkins.achievements]
run = 2
read = 1
"#;

    #[test]
    fn test_render_flat_tally() {
        let models = parse_snapshot(SNAPSHOT).expect("parse snapshot");
        let view = LeaderboardView::with_models(&models, TrailingPolicy::Disabled);
        let text = render(&models, &view, "u1", false);

        assert!(text.contains("=== Ada ==="));
        assert!(text.contains("Total points: 12"));
        assert!(text.contains("Placement: gold"));
        assert!(text.contains("  Run x2"));
        assert!(text.contains("  Read x1"));
    }

    #[test]
    fn test_render_by_category_uses_category_names() {
        let models = parse_snapshot(SNAPSHOT).expect("parse snapshot");
        let view = LeaderboardView::with_models(&models, TrailingPolicy::Disabled);
        let text = render(&models, &view, "u1", true);

        assert!(text.contains("[Fitness]"));
        // unregistered category falls back to its id
        assert!(text.contains("[mind]"));
    }

    #[test]
    fn test_render_unknown_user() {
        let models = parse_snapshot(SNAPSHOT).expect("parse snapshot");
        let view = LeaderboardView::with_models(&models, TrailingPolicy::Disabled);
        let text = render(&models, &view, "ghost", false);

        assert!(text.contains("Total points: 0"));
        assert!(text.contains("No approved achievements."));
        assert!(!text.contains("Placement"));
    }
}
