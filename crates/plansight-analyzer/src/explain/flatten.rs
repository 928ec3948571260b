//! Display flattening
//!
//! Renderers show a plan as indented rows. Large plans are cut off after a
//! fixed number of rows so the view stays responsive.

use serde::Serialize;

use crate::explain::plan::PlanNode;

/// Default cap on flattened rows
pub const DEFAULT_MAX_FLAT_NODES: usize = 800;

/// One row of a flattened plan
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FlatNode<'a> {
    /// Nesting level, 0 for the root
    pub depth: usize,
    /// Position in pre-order
    pub index: usize,
    pub node: &'a PlanNode,
}

/// A plan flattened into pre-order rows
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FlatPlan<'a> {
    pub nodes: Vec<FlatNode<'a>>,
    /// True when rows were left out because of the cap
    pub truncated: bool,
}

/// Flattens a tree into at most `max_nodes` pre-order rows
pub fn flatten_plan(root: &PlanNode, max_nodes: usize) -> FlatPlan<'_> {
    let mut nodes = Vec::new();
    let mut truncated = false;
    let mut stack = vec![(root, 0usize)];

    while let Some((node, depth)) = stack.pop() {
        if nodes.len() >= max_nodes {
            truncated = true;
            break;
        }
        nodes.push(FlatNode {
            depth,
            index: nodes.len(),
            node,
        });
        for child in node.children.iter().rev() {
            stack.push((child, depth + 1));
        }
    }

    if truncated {
        tracing::debug!(max_nodes, "plan display truncated");
    }

    FlatPlan { nodes, truncated }
}

#[cfg(test)]
mod tests;
