//! Leaderboard command handler
//!
//! Loads a snapshot, computes the ranked leaderboard and renders it as text,
//! Markdown or CSV.

use super::load_models;
use act_leaderboard::config::Config;
use act_leaderboard::report::{
    CsvReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator, TextReporter,
};
use act_leaderboard::{info, verbose, LeaderboardView};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the leaderboard command.
///
/// # Arguments
/// * `snapshot` - Snapshot file to aggregate
/// * `format_str` - Report format (text, markdown, csv)
/// * `output` - Optional output file; stdout when omitted
/// * `save` - Write into the configured reports directory
/// * `config` - Loaded configuration
pub fn run(
    snapshot: &Path,
    format_str: &str,
    output: Option<&Path>,
    save: bool,
    config: &Config,
) -> Result<(), String> {
    let format = ReportFormat::from_str(format_str).map_err(|e| format!("✗ {e}"))?;
    let models = load_models(snapshot, config)?;

    let view = LeaderboardView::with_models(&models, config.trailing_policy());
    verbose!(
        "✓ Ranked {} users from {}",
        view.leaderboard().len(),
        snapshot.display()
    );

    let ctx = ReportContext::new(&config.leaderboard.title, view.leaderboard(), view.policy())
        .with_points(config.leaderboard.show_points);
    let reporter = reporter_for(format);

    let target = if save {
        Some(default_report_path(snapshot, format, config)?)
    } else {
        output.map(Path::to_path_buf)
    };

    match target {
        Some(path) => {
            reporter
                .generate(&ctx, &path)
                .map_err(|e| format!("✗ Failed to write report to {}: {e}", path.display()))?;
            info!("Leaderboard report written to {}", path.display());
            println!("✓ Report generated: {}", path.display());
        }
        None => {
            let rendered = reporter
                .render(&ctx)
                .map_err(|e| format!("✗ Failed to render leaderboard: {e}"))?;
            print!("{rendered}");
        }
    }

    Ok(())
}

fn reporter_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Text => Box::new(TextReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Csv => Box::new(CsvReporter::new()),
    }
}

/// `<reports_dir>/<snapshot stem>_leaderboard.<ext>`, creating the directory
fn default_report_path(
    snapshot: &Path,
    format: ReportFormat,
    config: &Config,
) -> Result<PathBuf, String> {
    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    std::fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "✗ Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;

    let stem = snapshot
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("snapshot");
    Ok(reports_dir.join(format!("{stem}_leaderboard.{}", format.extension())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_report_path_uses_stem_and_extension() {
        let dir = TempDir::new().expect("temp dir");
        let mut config = Config::default();
        config.paths.reports_dir = dir.path().join("reports").to_string_lossy().to_string();

        let path = default_report_path(Path::new("data/club.toml"), ReportFormat::Markdown, &config)
            .expect("report path");
        assert_eq!(path, dir.path().join("reports").join("club_leaderboard.md"));
        assert!(dir.path().join("reports").is_dir());
    }

    #[test]
    fn test_run_writes_csv_report() {
        let dir = TempDir::new().expect("temp dir");
        let snapshot = dir.path().join("club.toml");
        std::fs::write(
            &snapshot,
            r#"
[[achievements]]
id = "A"
name = "Alpha"
points = 10
category_id = "x"

[[checkins]]
id = "c1"
user_id = "u1"
approved = true
[checkins.achievements]
A = 3
"#,
        )
        .expect("write snapshot");
        let out = dir.path().join("board.csv");

        let config = Config::from_defaults();
        run(&snapshot, "csv", Some(&out), false, &config).expect("run leaderboard");

        let csv = std::fs::read_to_string(&out).expect("read report");
        assert!(csv.contains("1,trailing,u1,u1,30"));
    }

    #[test]
    fn test_run_rejects_unknown_format() {
        let config = Config::default();
        let err = run(Path::new("club.toml"), "html", None, false, &config).unwrap_err();
        assert!(err.contains("Unknown report format"));
    }
}
