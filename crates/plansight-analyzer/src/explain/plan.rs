//! Plan Model - Engine-agnostic representation of a parsed execution plan
//!
//! Every engine parser produces the same [`PlanNode`] tree. Fields that a
//! given engine does not report simply stay `None`, so summaries and
//! renderers never need to know which engine a tree came from.

use serde::{Deserialize, Serialize};

use crate::explain::engine::PlanEngine;

/// Result of parsing one plan dump
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanParseResult {
    /// Aggregate view of the plan
    pub summary: PlanSummary,
    /// Root of the plan tree. Only `None` for an unsupported engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PlanNode>,
}

impl PlanParseResult {
    /// Returns an iterator over all nodes in the plan (depth-first)
    pub fn iter_nodes(&self) -> PlanNodeIterator<'_> {
        PlanNodeIterator {
            stack: self.root.iter().collect(),
        }
    }
}

/// Aggregate counts and headline metrics for one parsed plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub engine: PlanEngine,
    /// Number of nodes in the returned tree, 0 when there is no tree
    pub node_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_rows: Option<f64>,
    /// Planning time in milliseconds (PostgreSQL EXPLAIN ANALYZE)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planning_time: Option<f64>,
    /// Execution time in milliseconds (PostgreSQL EXPLAIN ANALYZE)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_time: Option<f64>,
    /// Advisory diagnostics, empty when there is nothing to report
    #[serde(default)]
    pub notes: Vec<String>,
}

/// A single step of a query plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanNode {
    /// Operator label, e.g. "Seq Scan", "TABLE" or "Step 3"
    pub name: String,
    /// Engine-specific annotation (relation, access type, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Estimated cost
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    /// Estimated rows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<f64>,
    /// Actual time in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_time: Option<f64>,
    /// Actual rows returned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_rows: Option<f64>,
    /// Number of loops/executions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loops: Option<f64>,
    /// Child nodes, in source order
    #[serde(default)]
    pub children: Vec<PlanNode>,
}

impl PlanNode {
    /// Creates a leaf node with the given name and no metrics
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: None,
            cost: None,
            rows: None,
            actual_time: None,
            actual_rows: None,
            loops: None,
            children: Vec::new(),
        }
    }

    /// Sets the detail annotation
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Sets the estimated cost
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Sets the estimated rows
    pub fn with_rows(mut self, rows: f64) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Adds a child node
    pub fn with_child(mut self, child: PlanNode) -> Self {
        self.children.push(child);
        self
    }

    /// Replaces the children
    pub fn with_children(mut self, children: Vec<PlanNode>) -> Self {
        self.children = children;
        self
    }

    /// Returns the total number of nodes in this subtree (including self)
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Returns the maximum depth of this subtree, 1 for a leaf
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1usize)];
        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            stack.extend(node.children.iter().map(|c| (c, depth + 1)));
        }
        max
    }

    /// Returns true if this is a leaf node (no children)
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Pre-order depth-first iterator over this subtree
    pub fn iter(&self) -> PlanNodeIterator<'_> {
        PlanNodeIterator { stack: vec![self] }
    }
}

/// Iterator for traversing plan nodes depth-first
pub struct PlanNodeIterator<'a> {
    stack: Vec<&'a PlanNode>,
}

impl<'a> Iterator for PlanNodeIterator<'a> {
    type Item = &'a PlanNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push children in reverse order so we visit them in order
        for child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}
