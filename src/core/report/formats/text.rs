//! Plain-text report generator for terminal output

use crate::core::report::{placement_label, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Renders aligned columns
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let mut out = String::new();
        writeln!(out, "=== {} ===", ctx.title)?;

        if ctx.entries.is_empty() {
            writeln!(out, "(no entries)")?;
            return Ok(out);
        }

        let name_width = ctx
            .entries
            .iter()
            .map(|e| e.display_name.chars().count())
            .max()
            .unwrap_or(0)
            .max("Name".len());

        if ctx.show_points {
            writeln!(out, "{:<8} {:<name_width$} {:>8}", "Place", "Name", "Points")?;
        } else {
            writeln!(out, "{:<8} {:<name_width$}", "Place", "Name")?;
        }

        for entry in ctx.entries {
            let place = placement_label(entry.placement);
            if ctx.show_points {
                writeln!(
                    out,
                    "{place:<8} {:<name_width$} {:>8}",
                    entry.display_name, entry.total_points
                )?;
            } else {
                writeln!(out, "{place:<8} {:<name_width$}", entry.display_name)?;
            }
        }

        Ok(out)
    }
}
