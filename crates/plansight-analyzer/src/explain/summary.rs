//! Plan Summary Builder
//!
//! Parsers hand back the tree together with whatever headline metrics their
//! format carries. The node count is always derived here, from the finished
//! tree, never tracked while parsing.

use crate::explain::engine::PlanEngine;
use crate::explain::plan::{PlanNode, PlanSummary};

/// Headline metrics and notes a parser extracted alongside its tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Headline {
    pub total_cost: Option<f64>,
    pub actual_time: Option<f64>,
    pub actual_rows: Option<f64>,
    pub planning_time: Option<f64>,
    pub execution_time: Option<f64>,
    pub notes: Vec<String>,
}

impl Headline {
    /// Appends a diagnostic note
    pub fn note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }
}

/// Output of a single engine parser
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPlan {
    pub root: PlanNode,
    pub headline: Headline,
}

impl ParsedPlan {
    /// A tree with no headline metrics or notes
    pub fn bare(root: PlanNode) -> Self {
        Self {
            root,
            headline: Headline::default(),
        }
    }
}

/// Counts `node` and all of its descendants
pub fn node_count(node: &PlanNode) -> usize {
    node.node_count()
}

/// Builds the summary for a parsed tree
///
/// `root` is `None` only for plans that produced no tree at all, in which
/// case the node count is 0.
pub fn build_summary(
    engine: PlanEngine,
    root: Option<&PlanNode>,
    headline: Headline,
) -> PlanSummary {
    PlanSummary {
        engine,
        node_count: root.map_or(0, node_count),
        total_cost: headline.total_cost,
        actual_time: headline.actual_time,
        actual_rows: headline.actual_rows,
        planning_time: headline.planning_time,
        execution_time: headline.execution_time,
        notes: headline.notes,
    }
}
