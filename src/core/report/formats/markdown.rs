//! Markdown report generator
//!
//! Renders the leaderboard as a Markdown table. Podium rows and the trailing
//! row get the same icons the mobile app shows.

use crate::core::ranking::Placement;
use crate::core::report::{placement_label, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::{self, Write};

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/leaderboard.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    ///
    /// Placeholders are filled in one pass over the template, so substituted
    /// text (titles, display names) is never scanned for placeholders again.
    fn render_template(ctx: &ReportContext) -> Result<String, fmt::Error> {
        let table = Self::generate_table(ctx)?;
        let mut out = String::with_capacity(MARKDOWN_TEMPLATE.len() + table.len());
        let mut rest = MARKDOWN_TEMPLATE;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                rest = &rest[start..];
                break;
            };
            match &after[..end] {
                "title" => out.push_str(ctx.title),
                "user_count" => write!(out, "{}", ctx.user_count())?,
                "total_points" => write!(out, "{}", ctx.total_points())?,
                "trailing_policy" => write!(out, "{}", ctx.policy)?,
                "leaderboard_table" => out.push_str(&table),
                other => write!(out, "{{{{{other}}}}}")?,
            }
            rest = &after[end + 2..];
        }
        out.push_str(rest);

        Ok(out)
    }

    /// Generate the standings table
    fn generate_table(ctx: &ReportContext) -> Result<String, fmt::Error> {
        let mut table = String::new();

        if ctx.entries.is_empty() {
            table.push_str("_No checkins yet._\n");
            return Ok(table);
        }

        if ctx.show_points {
            table.push_str("| Place | Name | Points |\n|---|---|---:|\n");
        } else {
            table.push_str("| Place | Name |\n|---|---|\n");
        }

        for entry in ctx.entries {
            let place = format!("{} {}", icon(entry.placement), placement_label(entry.placement));
            let name = escape_cell(&entry.display_name);
            if ctx.show_points {
                writeln!(table, "| {} | {name} | {} |", place.trim(), entry.total_points)?;
            } else {
                writeln!(table, "| {} | {name} |", place.trim())?;
            }
        }

        Ok(table)
    }
}

const fn icon(placement: Placement) -> &'static str {
    match placement {
        Placement::Gold => "🥇",
        Placement::Silver => "🥈",
        Placement::Bronze => "🥉",
        Placement::Trailing => "💩",
        Placement::Rank(_) => "",
    }
}

fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(Self::render_template(ctx)?)
    }
}
