//! Leaderboard report generation
//!
//! Renders a computed leaderboard as plain text, Markdown or CSV.

pub mod formats;

use crate::core::models::Points;
use crate::core::ranking::{LeaderboardEntry, Placement, TrailingPolicy};
use std::error::Error;
use std::path::Path;

pub use formats::{CsvReporter, MarkdownReporter, ReportFormat, TextReporter};

/// Data context for report generation
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Report heading
    pub title: &'a str,
    /// Ranked rows
    pub entries: &'a [LeaderboardEntry],
    /// Policy the rows were ranked with
    pub policy: TrailingPolicy,
    /// Whether to include the points column
    pub show_points: bool,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context that shows points
    #[must_use]
    pub const fn new(title: &'a str, entries: &'a [LeaderboardEntry], policy: TrailingPolicy) -> Self {
        Self {
            title,
            entries,
            policy,
            show_points: true,
        }
    }

    /// Toggle the points column
    #[must_use]
    pub const fn with_points(mut self, show_points: bool) -> Self {
        self.show_points = show_points;
        self
    }

    /// Number of ranked users
    #[must_use]
    pub const fn user_count(&self) -> usize {
        self.entries.len()
    }

    /// Points summed over every row
    #[must_use]
    pub fn total_points(&self) -> Points {
        self.entries
            .iter()
            .fold(0, |sum: Points, e| sum.saturating_add(e.total_points))
    }
}

/// Short human label for a placement
#[must_use]
pub fn placement_label(placement: Placement) -> String {
    match placement {
        Placement::Gold => "Gold".to_string(),
        Placement::Silver => "Silver".to_string(),
        Placement::Bronze => "Bronze".to_string(),
        Placement::Rank(n) => format!("#{n}"),
        Placement::Trailing => "Last".to_string(),
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
