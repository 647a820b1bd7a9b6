//! Rendering of scan results for terminals, logs, and CI consumers.
//!
//! Every renderer here is a pure function from a [`CheckReport`] (or a
//! slice of them) to a `String`; the CLI layer decides which stream the
//! string lands on. JSON field names are part of the tool's contract
//! and must not change between releases.

use serde::Serialize;

use crate::error::{GapscanError, Result};
use crate::gaps::GapReport;
use crate::ui::{Align, Table};

/// Output format for the `check` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// One missing id per line on stdout.
    #[default]
    Text,
    /// Box-drawing summary table.
    Table,
    /// Machine-readable JSON.
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown format '{}' (expected text, table, or json)",
                other
            )),
        }
    }
}

/// A [`GapReport`] tied to the table and column it came from.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Table that was scanned.
    pub table: String,
    /// Column that was scanned.
    pub column: String,
    #[serde(flatten)]
    pub report: GapReport,
    /// Display label for human-facing output. Not serialized; JSON
    /// consumers key off `table`/`column` instead.
    #[serde(skip)]
    pub label: String,
}

impl CheckReport {
    /// Wrap a scan result with its origin.
    pub fn new(table: &str, column: &str, label: &str, report: GapReport) -> Self {
        Self {
            table: table.to_string(),
            column: column.to_string(),
            label: label.to_string(),
            report,
        }
    }

    /// One-line human summary, suitable for status output.
    pub fn summary(&self) -> String {
        match (self.report.lo, self.report.hi) {
            (None, _) | (_, None) => format!("{}: no rows", self.label),
            (Some(lo), Some(hi)) if self.report.is_dense() => format!(
                "{}: no gaps ({} ids, {}..={})",
                self.label, self.report.distinct, lo, hi
            ),
            (Some(lo), Some(hi)) => format!(
                "{}: {} missing in {} run{} ({}..={}, density {})",
                self.label,
                self.report.missing_count(),
                self.report.runs.len(),
                if self.report.runs.len() == 1 { "" } else { "s" },
                lo,
                hi,
                format_density(self.report.density),
            ),
        }
    }
}

/// Render missing ids as plain text, one per line.
///
/// Dense reports render as the empty string so `check | wc -l` counts
/// missing ids directly.
pub fn render_text(check: &CheckReport) -> String {
    check
        .report
        .missing
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Summarize gap runs as a compact list, e.g. `3, 6-8, 12`.
pub fn format_runs(runs: &[(i64, i64)]) -> String {
    runs.iter()
        .map(|&(start, end)| {
            if start == end {
                start.to_string()
            } else {
                format!("{}-{}", start, end)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Density as a percentage with one decimal place.
pub fn format_density(density: f64) -> String {
    format!("{:.1}%", density * 100.0)
}

/// Render one row per check into the box-drawing table.
pub fn render_table(checks: &[CheckReport]) -> String {
    let mut table = Table::with_aligns(
        vec!["Check", "Table", "Column", "Ids", "Range", "Missing", "Runs", "Density"],
        vec![
            Align::Left,
            Align::Left,
            Align::Left,
            Align::Right,
            Align::Left,
            Align::Right,
            Align::Left,
            Align::Right,
        ],
    );

    for check in checks {
        let range = match (check.report.lo, check.report.hi) {
            (Some(lo), Some(hi)) => format!("{}..{}", lo, hi),
            _ => "-".to_string(),
        };
        let runs = if check.report.runs.is_empty() {
            "-".to_string()
        } else {
            format_runs(&check.report.runs)
        };

        table.add_row(vec![
            &check.label,
            &check.table,
            &check.column,
            &check.report.distinct.to_string(),
            &range,
            &check.report.missing_count().to_string(),
            &runs,
            &format_density(check.report.density),
        ]);
    }

    table.render()
}

/// Serialize a single check as a pretty-printed JSON object.
pub fn render_json(check: &CheckReport) -> Result<String> {
    serde_json::to_string_pretty(check).map_err(|e| GapscanError::Other(e.into()))
}

/// Serialize several checks as a pretty-printed JSON array.
pub fn render_json_all(checks: &[CheckReport]) -> Result<String> {
    serde_json::to_string_pretty(checks).map_err(|e| GapscanError::Other(e.into()))
}
