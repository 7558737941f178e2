//! Output formatting helpers for CLI commands

use crate::metrics::MetricRow;
use crate::report::ModelReport;
use crate::store::PinMeta;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde_json::json;
use std::fmt::Write;

/// View model for pin display
#[derive(Debug, Clone, serde::Serialize)]
pub struct PinView {
    pub name: String,
    pub pin_type: String,
    pub version: String,
    pub created: String,
    pub description: String,
}

impl From<&PinMeta> for PinView {
    fn from(meta: &PinMeta) -> Self {
        Self {
            name: meta.name.clone(),
            pin_type: meta.pin_type.clone(),
            version: meta.version.clone(),
            created: meta.created.clone(),
            description: meta.description.clone().unwrap_or_default(),
        }
    }
}

/// Format the board catalog as a table
pub fn format_pins_table(pins: &[PinView]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Type", "Version", "Created", "Description"]);

    for p in pins {
        table.add_row(vec![
            Cell::new(&p.name),
            Cell::new(&p.pin_type),
            Cell::new(&p.version),
            Cell::new(&p.created),
            Cell::new(&p.description),
        ]);
    }

    table.to_string()
}

/// Format the board catalog as JSON
pub fn format_pins_json(pins: &[PinView]) -> String {
    serde_json::to_string_pretty(&json!({
        "pins": pins
    }))
    .unwrap()
}

/// Format the windowed metric rows as a table
pub fn format_metric_rows_table(rows: &[MetricRow]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Window start", "Window end", "Metric", "Value", "N"]);

    for row in rows {
        table.add_row(vec![
            Cell::new(row.window_start.format("%Y-%m-%d %H:%M")),
            Cell::new(row.window_end.format("%Y-%m-%d %H:%M")),
            Cell::new(&row.metric),
            Cell::new(format_metric_value(row.value)),
            Cell::new(row.n),
        ]);
    }

    table.to_string()
}

/// Color a metric value by how healthy it looks
fn format_metric_value(value: f64) -> String {
    let text = format!("{:.3}", value);
    if value >= 0.9 {
        text.green().to_string()
    } else if value >= 0.7 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}

/// Format a full report as pretty text: value boxes, the metrics table, and
/// the API docs pointer
pub fn format_report_pretty(report: &ModelReport) -> String {
    let mut output = String::new();
    let summary = &report.summary;

    writeln!(
        output,
        "Model: {} ({})",
        summary.model.bold(),
        summary.version
    )
    .unwrap();
    if let Some(description) = &summary.description {
        writeln!(output, "Description: {}", description).unwrap();
    }
    writeln!(
        output,
        "Published: {} ({} days ago)",
        summary.created.format("%Y-%m-%d %H:%M UTC"),
        summary.age_days
    )
    .unwrap();
    writeln!(
        output,
        "Observations: {} ({} .. {})",
        summary.records,
        summary.oldest.format("%Y-%m-%d"),
        summary.latest.format("%Y-%m-%d")
    )
    .unwrap();

    let overall: Vec<String> = summary
        .overall
        .iter()
        .map(|v| format!("{} {}", v.metric, format_metric_value(v.value)))
        .collect();
    writeln!(output, "Overall: {}", overall.join(" | ")).unwrap();

    writeln!(output).unwrap();
    writeln!(output, "{}", format_metric_rows_table(&report.rows)).unwrap();

    match &summary.api_docs_url {
        Some(url) => writeln!(output, "API docs: {}", url.cyan()).unwrap(),
        None => writeln!(output, "API docs: {}", "not configured".dimmed()).unwrap(),
    }

    output
}
