//! SQLite EXPLAIN QUERY PLAN Parser
//!
//! Parses the pipe-delimited rows produced by `EXPLAIN QUERY PLAN`:
//!
//! ```text
//! 0|0|0|SCAN TABLE users
//! 0|1|1|SEARCH TABLE orders USING INDEX idx_user_id (user_id=?)
//! ```
//!
//! The `id|parent` columns do not encode nesting consistently across SQLite
//! versions, so no hierarchy is rebuilt: every row becomes a flat step under
//! a synthetic `"Query Plan"` root.
//!
//! # Examples
//!
//! ```
//! use plansight_analyzer::explain::sqlite::parse_sqlite_plan;
//!
//! let plan = parse_sqlite_plan("0|0|0|SCAN TABLE users").unwrap();
//! assert_eq!(plan.root.name, "Query Plan");
//! assert_eq!(plan.root.children[0].name, "Step 1");
//! assert_eq!(plan.root.children[0].detail.as_deref(), Some("SCAN TABLE users"));
//! ```

use thiserror::Error;

use crate::explain::coerce::trim_text;
use crate::explain::plan::PlanNode;
use crate::explain::summary::ParsedPlan;

/// Name of the synthetic root node
pub const ROOT_NAME: &str = "Query Plan";

/// Number of leading `|`-separated columns before the detail text
const PREFIX_COLUMNS: usize = 3;

/// Errors that can occur when parsing SQLite EXPLAIN QUERY PLAN output
#[derive(Debug, Error)]
pub enum SqlitePlanError {
    #[error("Paste SQLite EXPLAIN QUERY PLAN text.")]
    EmptyInput,
}

/// Result type for SQLite EXPLAIN parsing
pub type Result<T> = std::result::Result<T, SqlitePlanError>;

/// Parses SQLite EXPLAIN QUERY PLAN rows
///
/// The tree is always two levels deep, so no depth limit applies.
pub fn parse_sqlite_plan(input: &str) -> Result<ParsedPlan> {
    let trimmed = trim_text(input);
    if trimmed.is_empty() {
        return Err(SqlitePlanError::EmptyInput);
    }

    let steps = trimmed
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(index, line)| {
            PlanNode::new(format!("Step {}", index + 1)).with_detail(step_detail(line))
        })
        .collect();

    Ok(ParsedPlan::bare(PlanNode::new(ROOT_NAME).with_children(steps)))
}

/// Returns the detail column of a row, or the whole row if it has no detail column
fn step_detail(line: &str) -> &str {
    let mut columns = line.splitn(PREFIX_COLUMNS + 1, '|');
    for _ in 0..PREFIX_COLUMNS {
        columns.next();
    }
    columns.next().unwrap_or(line)
}

#[cfg(test)]
mod tests;
