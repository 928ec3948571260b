//! PostgreSQL EXPLAIN Parser
//!
//! Parses the output of `EXPLAIN (ANALYZE, BUFFERS, FORMAT JSON)`: a JSON
//! array whose first element holds a `Plan` object. Each plan object carries
//! its operator in `"Node Type"` and its inputs in `"Plans"`.
//!
//! # Examples
//!
//! ```
//! use plansight_analyzer::explain::postgres::parse_postgres_plan;
//!
//! let json_output = r#"[
//!   {
//!     "Plan": {
//!       "Node Type": "Seq Scan",
//!       "Relation Name": "users",
//!       "Startup Cost": 0.0,
//!       "Total Cost": 10.0,
//!       "Plan Rows": 100
//!     }
//!   }
//! ]"#;
//!
//! let plan = parse_postgres_plan(json_output).unwrap();
//! assert_eq!(plan.root.name, "Seq Scan");
//! assert_eq!(plan.headline.total_cost, Some(10.0));
//! ```

use serde_json::{Map, Value};
use thiserror::Error;

use crate::explain::coerce::{coerce_field, trim_text};
use crate::explain::json::{compose_detail, display_value, exceeds_nesting_limit};
use crate::explain::options::ParseOptions;
use crate::explain::plan::PlanNode;
use crate::explain::summary::{Headline, ParsedPlan};

/// Name used when a plan object has no "Node Type"
pub const DEFAULT_NODE_NAME: &str = "Plan Node";

/// Note added when the plan carries no runtime instrumentation
pub const NO_TIMING_NOTE: &str = "No actual timing found. Include ANALYZE for runtime metrics.";

const DETAIL_KEYS: [&str; 3] = ["Relation Name", "Index Name", "Join Type"];

/// Errors that can occur when parsing PostgreSQL EXPLAIN output
#[derive(Debug, Error)]
pub enum PostgresPlanError {
    #[error("Paste a PostgreSQL JSON plan.")]
    EmptyInput,

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Missing Plan root. Use EXPLAIN (ANALYZE, BUFFERS, FORMAT JSON).")]
    MissingPlan,

    #[error("Plan too deeply nested (limit {limit})")]
    TooDeep { limit: usize },
}

/// Result type for PostgreSQL EXPLAIN parsing
pub type Result<T> = std::result::Result<T, PostgresPlanError>;

/// Parses PostgreSQL JSON EXPLAIN output with default options
pub fn parse_postgres_plan(input: &str) -> Result<ParsedPlan> {
    parse_postgres_plan_with(input, &ParseOptions::default())
}

/// Parses PostgreSQL JSON EXPLAIN output
pub fn parse_postgres_plan_with(input: &str, options: &ParseOptions) -> Result<ParsedPlan> {
    let trimmed = trim_text(input);
    if trimmed.is_empty() {
        return Err(PostgresPlanError::EmptyInput);
    }

    let value: Value = serde_json::from_str(trimmed).map_err(|err| {
        if exceeds_nesting_limit(&err) {
            PostgresPlanError::TooDeep {
                limit: options.max_depth,
            }
        } else {
            PostgresPlanError::InvalidJson(err)
        }
    })?;
    let (statement, plan) = locate_plan(&value)?;

    let root = map_plan_node(plan, 1, options)?;

    // Headline values come from the raw root object, not the mapped node:
    // "Total Cost" must not fall back to "Startup Cost" here.
    let mut headline = Headline {
        total_cost: coerce_field(plan.get("Total Cost")),
        actual_time: coerce_field(plan.get("Actual Total Time")),
        actual_rows: coerce_field(plan.get("Actual Rows")),
        planning_time: coerce_field(statement.get("Planning Time")),
        execution_time: coerce_field(statement.get("Execution Time")),
        notes: Vec::new(),
    };
    if headline.actual_time.is_none() {
        headline.note(NO_TIMING_NOTE);
    }

    Ok(ParsedPlan { root, headline })
}

/// Finds the statement object and its `Plan`
///
/// PostgreSQL wraps the statement in an array; a bare statement object is
/// accepted too.
fn locate_plan(value: &Value) -> Result<(&Map<String, Value>, &Map<String, Value>)> {
    let statement = match value {
        Value::Array(items) => items.first().and_then(Value::as_object),
        Value::Object(obj) => Some(obj),
        _ => None,
    }
    .ok_or(PostgresPlanError::MissingPlan)?;

    let plan = statement
        .get("Plan")
        .and_then(Value::as_object)
        .ok_or(PostgresPlanError::MissingPlan)?;

    Ok((statement, plan))
}

/// Maps one plan object and its subplans
fn map_plan_node(
    node: &Map<String, Value>,
    depth: usize,
    options: &ParseOptions,
) -> Result<PlanNode> {
    if !options.allows(depth) {
        return Err(PostgresPlanError::TooDeep {
            limit: options.max_depth,
        });
    }

    let name = node
        .get("Node Type")
        .and_then(display_value)
        .unwrap_or_else(|| DEFAULT_NODE_NAME.to_string());

    let children = match node.get("Plans").and_then(Value::as_array) {
        Some(plans) => plans
            .iter()
            .map(|child| match child {
                Value::Object(obj) => map_plan_node(obj, depth + 1, options),
                _ => Ok(PlanNode::new(DEFAULT_NODE_NAME)),
            })
            .collect::<Result<Vec<_>>>()?,
        None => Vec::new(),
    };

    Ok(PlanNode {
        name,
        detail: compose_detail(node, &DETAIL_KEYS),
        cost: coerce_field(node.get("Total Cost"))
            .or_else(|| coerce_field(node.get("Startup Cost"))),
        rows: coerce_field(node.get("Plan Rows")),
        actual_time: coerce_field(node.get("Actual Total Time"))
            .or_else(|| coerce_field(node.get("Actual Startup Time"))),
        actual_rows: coerce_field(node.get("Actual Rows")),
        loops: coerce_field(node.get("Actual Loops")),
        children,
    })
}
