//! CSV report generator

use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// One header line, then one line per leaderboard row
pub struct CsvReporter;

impl CsvReporter {
    /// Create a new CSV reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for CsvReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let mut out = String::new();
        if ctx.show_points {
            writeln!(out, "Position,Placement,User ID,Name,Points")?;
        } else {
            writeln!(out, "Position,Placement,User ID,Name")?;
        }

        for entry in ctx.entries {
            write!(
                out,
                "{},{},{},{}",
                entry.position,
                entry.placement,
                escape_field(&entry.user_id),
                escape_field(&entry.display_name)
            )?;
            if ctx.show_points {
                write!(out, ",{}", entry.total_points)?;
            }
            out.push('\n');
        }

        Ok(out)
    }
}

/// Quote a field when it contains a separator, quote or newline
fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
