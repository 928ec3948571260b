//! Terminal rendering of parsed plans

use comfy_table::{Table, presets::UTF8_FULL};
use plansight_analyzer::{FlatPlan, PlanNode, PlanSummary};
use std::fmt::Write;

/// Builds the summary table shown above the tree
pub fn summary_table(summary: &PlanSummary) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Metric", "Value"]);

    table.add_row(vec!["Engine".to_string(), summary.engine.display_name().to_string()]);
    table.add_row(vec!["Nodes".to_string(), summary.node_count.to_string()]);

    let metrics = [
        ("Total cost", summary.total_cost),
        ("Actual time (ms)", summary.actual_time),
        ("Actual rows", summary.actual_rows),
        ("Planning time (ms)", summary.planning_time),
        ("Execution time (ms)", summary.execution_time),
    ];
    for (label, value) in metrics {
        if let Some(value) = value {
            table.add_row(vec![label.to_string(), format_number(value)]);
        }
    }

    for note in &summary.notes {
        table.add_row(vec!["Note".to_string(), note.clone()]);
    }

    table
}

/// Renders flattened rows as an indented tree
pub fn render_tree(flat: &FlatPlan<'_>, total_nodes: usize) -> String {
    let mut out = String::new();
    for row in &flat.nodes {
        let _ = writeln!(out, "{}{}", "  ".repeat(row.depth), node_line(row.node));
    }
    if flat.truncated {
        let _ = writeln!(
            out,
            "… showing {} of {} nodes",
            flat.nodes.len(),
            total_nodes
        );
    }
    out
}

/// One line of the tree: name, detail and whatever metrics the node has
pub fn node_line(node: &PlanNode) -> String {
    let mut line = node.name.clone();
    if let Some(detail) = node.detail.as_deref().filter(|d| *d != node.name) {
        let _ = write!(line, " [{detail}]");
    }

    let metrics: Vec<String> = [
        ("cost", node.cost),
        ("rows", node.rows),
        ("actual_ms", node.actual_time),
        ("actual_rows", node.actual_rows),
        ("loops", node.loops),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|v| format!("{label}={}", format_number(v))))
    .collect();

    if !metrics.is_empty() {
        let _ = write!(line, " ({})", metrics.join(" "));
    }
    line
}

/// Formats a metric without a trailing `.0` for whole numbers
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
