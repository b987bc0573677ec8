//! Report renderers.

use anyhow::Result;

use todosim_engine::AnalysisReport;

/// Render the report as an aligned text table, one row per heuristic.
pub fn render_text(report: &AnalysisReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<24} {:>10} {:>10} {:>10}\n",
        "heuristic", "completed", "important", "in time"
    ));
    for (heuristic, result) in report.iter() {
        out.push_str(&format!(
            "{:<24} {:>10.3} {:>10.3} {:>10.3}\n",
            heuristic.name(),
            result.completed,
            result.important_completed,
            result.completed_in_time
        ));
    }
    out
}

/// Render the report as pretty-printed JSON.
pub fn render_json(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
