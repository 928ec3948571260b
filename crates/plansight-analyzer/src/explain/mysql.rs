//! MySQL EXPLAIN Parser
//!
//! Parses `EXPLAIN FORMAT=JSON` output. Unlike PostgreSQL the format has no
//! operator field, so nodes are labelled by what they are: `"QUERY"` for a
//! query block and `"TABLE"` for a table access.
//!
//! A block's children come from two places, concatenated in this order:
//! - its `nested_loop` array, where each entry holds either a `table` or a
//!   nested `query_block` (correlated subqueries)
//! - a direct `table` key, used when the block reads a single table
//!
//! # Examples
//!
//! ```
//! use plansight_analyzer::explain::mysql::parse_mysql_plan;
//!
//! let json_output = r#"{
//!   "query_block": {
//!     "select_id": 1,
//!     "cost_info": { "query_cost": "1.00" },
//!     "table": {
//!       "table_name": "users",
//!       "access_type": "ALL",
//!       "rows_examined_per_scan": 100
//!     }
//!   }
//! }"#;
//!
//! let plan = parse_mysql_plan(json_output).unwrap();
//! assert_eq!(plan.root.name, "QUERY");
//! assert_eq!(plan.root.cost, Some(1.0));
//! assert_eq!(plan.root.children[0].rows, Some(100.0));
//! ```

use serde_json::{Map, Value};
use thiserror::Error;

use crate::explain::coerce::{coerce_field, trim_text};
use crate::explain::json::{compose_detail, exceeds_nesting_limit};
use crate::explain::options::ParseOptions;
use crate::explain::plan::PlanNode;
use crate::explain::summary::ParsedPlan;

pub const QUERY_LABEL: &str = "QUERY";
pub const TABLE_LABEL: &str = "TABLE";
/// Label for a `nested_loop` entry holding neither a table nor a query block
pub const UNKNOWN_LABEL: &str = "NODE";

const DETAIL_KEYS: [&str; 4] = ["select_id", "table_name", "access_type", "key"];

/// Errors that can occur when parsing MySQL EXPLAIN output
#[derive(Debug, Error)]
pub enum MysqlPlanError {
    #[error("Paste a MySQL JSON plan.")]
    EmptyInput,

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Missing query_block. Use EXPLAIN FORMAT=JSON.")]
    MissingQueryBlock,

    #[error("Plan too deeply nested (limit {limit})")]
    TooDeep { limit: usize },
}

/// Result type for MySQL EXPLAIN parsing
pub type Result<T> = std::result::Result<T, MysqlPlanError>;

/// Parses MySQL EXPLAIN FORMAT=JSON output with default options
pub fn parse_mysql_plan(input: &str) -> Result<ParsedPlan> {
    parse_mysql_plan_with(input, &ParseOptions::default())
}

/// Parses MySQL EXPLAIN FORMAT=JSON output
pub fn parse_mysql_plan_with(input: &str, options: &ParseOptions) -> Result<ParsedPlan> {
    let trimmed = trim_text(input);
    if trimmed.is_empty() {
        return Err(MysqlPlanError::EmptyInput);
    }

    let value: Value = serde_json::from_str(trimmed).map_err(|err| {
        if exceeds_nesting_limit(&err) {
            MysqlPlanError::TooDeep {
                limit: options.max_depth,
            }
        } else {
            MysqlPlanError::InvalidJson(err)
        }
    })?;
    let query_block = value
        .get("query_block")
        .and_then(Value::as_object)
        .ok_or(MysqlPlanError::MissingQueryBlock)?;

    let root = map_block(query_block, QUERY_LABEL, 1, options)?;
    Ok(ParsedPlan::bare(root))
}

/// Maps a query block or table entry under the given label
fn map_block(
    block: &Map<String, Value>,
    label: &str,
    depth: usize,
    options: &ParseOptions,
) -> Result<PlanNode> {
    if !options.allows(depth) {
        return Err(MysqlPlanError::TooDeep {
            limit: options.max_depth,
        });
    }

    let mut children = Vec::new();

    if let Some(entries) = block.get("nested_loop").and_then(Value::as_array) {
        for entry in entries {
            children.push(map_nested_loop_entry(entry, depth + 1, options)?);
        }
    }

    if let Some(table) = block.get("table").and_then(Value::as_object) {
        children.push(map_block(table, TABLE_LABEL, depth + 1, options)?);
    }

    let cost = block
        .get("cost_info")
        .and_then(|info| coerce_field(info.get("query_cost")));

    Ok(PlanNode {
        name: label.to_string(),
        detail: compose_detail(block, &DETAIL_KEYS),
        cost,
        rows: coerce_field(block.get("rows_examined_per_scan"))
            .or_else(|| coerce_field(block.get("rows"))),
        actual_time: None,
        actual_rows: None,
        loops: None,
        children,
    })
}

/// Maps one element of a `nested_loop` array
fn map_nested_loop_entry(entry: &Value, depth: usize, options: &ParseOptions) -> Result<PlanNode> {
    if let Some(table) = entry.get("table").and_then(Value::as_object) {
        return map_block(table, TABLE_LABEL, depth, options);
    }
    if let Some(query_block) = entry.get("query_block").and_then(Value::as_object) {
        return map_block(query_block, QUERY_LABEL, depth, options);
    }
    Ok(PlanNode::new(UNKNOWN_LABEL))
}
