//! Checkin command handler

use super::load_models;
use act_leaderboard::config::Config;
use act_leaderboard::tally::summarize_checkin;
use std::path::Path;

/// Print the achievement count and point value of one checkin
pub fn run(snapshot: &Path, checkin_id: &str, config: &Config) -> Result<(), String> {
    let models = load_models(snapshot, config)?;
    let checkin = models
        .checkin(checkin_id)
        .ok_or_else(|| format!("✗ Unknown checkin: '{checkin_id}'"))?;

    let summary = summarize_checkin(&checkin.achievement_counts, &models);
    let owner = models.display_name(&checkin.user_id).unwrap_or(&checkin.user_id);
    let status = if checkin.approved { "approved" } else { "pending approval" };

    println!("\n=== Checkin {checkin_id} ===");
    println!("User: {owner}");
    println!("Status: {status}");
    if let Some(note) = checkin.note.as_deref().filter(|n| !n.is_empty()) {
        println!("Note: {note}");
    }
    println!("Achievements: {}", summary.achievement_count);
    println!("Points: {}", summary.points);
    Ok(())
}
