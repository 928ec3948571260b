//! SQL Server ShowPlan XML Parser
//!
//! Parses `.sqlplan` documents (the
//! `http://schemas.microsoft.com/sqlserver/2004/07/showplan` schema). Each
//! operator is a `RelOp` element, but its inputs are not direct XML children:
//! they sit inside an operator-specific wrapper such as `NestedLoops` or
//! `Hash`:
//!
//! ```text
//! <RelOp LogicalOp="Inner Join" PhysicalOp="Nested Loops">
//!   <NestedLoops>
//!     <RelOp LogicalOp="Index Seek" .../>
//!     <RelOp LogicalOp="Clustered Index Seek" .../>
//!   </NestedLoops>
//! </RelOp>
//! ```
//!
//! The inputs of an operator are therefore its nearest `RelOp` descendants,
//! i.e. those reachable without passing through another `RelOp`. Elements
//! are matched by local name, so documents without the namespace work too.
//!
//! # Examples
//!
//! ```
//! use plansight_analyzer::explain::sqlserver::parse_sqlserver_plan;
//!
//! let xml = r#"<ShowPlanXML><QueryPlan>
//!   <RelOp LogicalOp="Index Scan" PhysicalOp="Index Scan" EstimateRows="100"/>
//! </QueryPlan></ShowPlanXML>"#;
//!
//! let plan = parse_sqlserver_plan(xml).unwrap();
//! assert_eq!(plan.root.name, "Index Scan");
//! assert_eq!(plan.root.rows, Some(100.0));
//! ```

use roxmltree::{Document, Node};
use thiserror::Error;

use crate::explain::coerce::{coerce_str, trim_text};
use crate::explain::options::ParseOptions;
use crate::explain::plan::PlanNode;
use crate::explain::summary::{Headline, ParsedPlan};

const RELOP: &str = "RelOp";
const RUNTIME_INFORMATION: &str = "RunTimeInformation";
const RUNTIME_COUNTERS: &str = "RunTimeCountersPerThread";

/// Errors that can occur when parsing SQL Server ShowPlan XML
#[derive(Debug, Error)]
pub enum SqlServerPlanError {
    #[error("Paste a SQL Server .sqlplan XML containing RelOp nodes.")]
    EmptyInput,

    #[error("Invalid XML: {0}")]
    InvalidXml(#[from] roxmltree::Error),

    #[error("No RelOp nodes found in XML.")]
    MissingRelOp,

    #[error("Plan too deeply nested (limit {limit})")]
    TooDeep { limit: usize },
}

/// Result type for SQL Server ShowPlan parsing
pub type Result<T> = std::result::Result<T, SqlServerPlanError>;

/// Parses ShowPlan XML with default options
pub fn parse_sqlserver_plan(input: &str) -> Result<ParsedPlan> {
    parse_sqlserver_plan_with(input, &ParseOptions::default())
}

/// Parses ShowPlan XML
///
/// The first operator tree in document order becomes the root. Documents
/// holding several top-level operator trees get a note saying only the
/// first is shown.
pub fn parse_sqlserver_plan_with(input: &str, options: &ParseOptions) -> Result<ParsedPlan> {
    let trimmed = trim_text(input);
    if trimmed.is_empty() {
        return Err(SqlServerPlanError::EmptyInput);
    }

    let doc = Document::parse(trimmed)?;
    let top_level = operator_inputs(doc.root());
    let first = top_level.first().ok_or(SqlServerPlanError::MissingRelOp)?;

    let root = map_relop(*first, 1, options)?;

    let mut headline = Headline::default();
    if top_level.len() > 1 {
        headline.note(format!(
            "Plan contains {} top-level operator trees; showing the first.",
            top_level.len()
        ));
    }

    Ok(ParsedPlan { root, headline })
}

fn is_relop(node: &Node<'_, '_>) -> bool {
    node.is_element() && node.tag_name().name() == RELOP
}

/// Collects the nearest `RelOp` descendants of `parent`, in document order
fn operator_inputs<'a, 'input>(parent: Node<'a, 'input>) -> Vec<Node<'a, 'input>> {
    let mut inputs = Vec::new();
    let mut stack: Vec<Node<'a, 'input>> = parent.children().filter(Node::is_element).collect();
    stack.reverse();

    while let Some(node) = stack.pop() {
        if is_relop(&node) {
            inputs.push(node);
            continue;
        }
        let mut children: Vec<_> = node.children().filter(Node::is_element).collect();
        children.reverse();
        stack.extend(children);
    }

    inputs
}

fn map_relop(relop: Node<'_, '_>, depth: usize, options: &ParseOptions) -> Result<PlanNode> {
    if !options.allows(depth) {
        return Err(SqlServerPlanError::TooDeep {
            limit: options.max_depth,
        });
    }

    let logical = relop
        .attribute("LogicalOp")
        .unwrap_or(RELOP)
        .to_string();
    let detail = match relop.attribute("PhysicalOp").filter(|p| !p.is_empty()) {
        Some(physical) => format!("{logical} ({physical})"),
        None => logical.clone(),
    };

    let children = operator_inputs(relop)
        .into_iter()
        .map(|child| map_relop(child, depth + 1, options))
        .collect::<Result<Vec<_>>>()?;

    let runtime = RuntimeCounters::read(relop);

    Ok(PlanNode {
        name: logical,
        detail: Some(detail),
        cost: coerce_str(relop.attribute("EstimatedTotalSubtreeCost")),
        rows: coerce_str(relop.attribute("EstimateRows")),
        actual_time: runtime.elapsed_ms,
        actual_rows: runtime.rows,
        loops: runtime.executions,
        children,
    })
}

/// Actual-plan counters of one operator, aggregated across threads
#[derive(Debug, Default, PartialEq)]
struct RuntimeCounters {
    rows: Option<f64>,
    executions: Option<f64>,
    elapsed_ms: Option<f64>,
}

impl RuntimeCounters {
    /// Reads `RunTimeInformation` directly under `relop`
    ///
    /// Rows and executions add up across threads. Threads run concurrently,
    /// so elapsed time is the slowest thread's.
    fn read(relop: Node<'_, '_>) -> Self {
        let mut counters = Self::default();

        let threads = relop
            .children()
            .filter(|n| n.is_element() && n.tag_name().name() == RUNTIME_INFORMATION)
            .flat_map(|info| info.children())
            .filter(|n| n.is_element() && n.tag_name().name() == RUNTIME_COUNTERS);

        for thread in threads {
            if let Some(rows) = coerce_str(thread.attribute("ActualRows")) {
                counters.rows = Some(counters.rows.unwrap_or(0.0) + rows);
            }
            if let Some(executions) = coerce_str(thread.attribute("ActualExecutions")) {
                counters.executions = Some(counters.executions.unwrap_or(0.0) + executions);
            }
            if let Some(elapsed) = coerce_str(thread.attribute("ActualElapsedms")) {
                counters.elapsed_ms =
                    Some(counters.elapsed_ms.map_or(elapsed, |e| e.max(elapsed)));
            }
        }

        counters
    }
}
