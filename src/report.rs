//! Text and JSON reports for the demo binary

use crate::counter::CountSummary;
use crate::grid::Grid;
use serde::Serialize;

/// Counts produced for one grid
#[derive(Debug, Clone, Serialize)]
pub struct GridReport {
    /// Label for the grid (sample name or pattern)
    pub name: String,
    pub rows: usize,
    pub cols: usize,
    /// Read-only count with size statistics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<CountSummary>,
    /// Count from the mutating entry point
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mutating: Option<usize>,
}

/// Render a grid as `#` (active) and `.` (inactive), one line per row
pub fn render_grid<G: Grid + ?Sized>(grid: &G) -> String {
    let mut out = String::new();
    for row in 0..grid.row_count() {
        for col in 0..grid.row_len(row) {
            out.push(if grid.is_active(row, col) { '#' } else { '.' });
        }
        out.push('\n');
    }
    out
}

pub fn format_text(report: &GridReport) -> String {
    let mut out = format!("{} ({}x{})\n", report.name, report.rows, report.cols);
    if let Some(summary) = &report.read_only {
        out.push_str(&format!(
            "  Clusters (without modification): {}\n",
            summary.clusters
        ));
        out.push_str(&format!(
            "  Active cells: {}, largest cluster: {}, peak frontier: {}\n",
            summary.active_cells, summary.largest_cluster, summary.peak_frontier
        ));
    }
    if let Some(clusters) = report.mutating {
        out.push_str(&format!("  Clusters (direct modification): {}\n", clusters));
    }
    out
}

pub fn format_json(reports: &[GridReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}
