//! Engine Dispatcher
//!
//! The single entry point callers use. It picks the parser for the declared
//! engine, builds the summary from the tree that parser returns, and never
//! retries a failed parse with another engine.
//!
//! An unrecognized engine is not an error: it yields a zero-node summary
//! with an explanatory note and no root. Callers rely on this to tell an
//! empty state apart from a parse failure.

use crate::explain::engine::PlanEngine;
use crate::explain::error::Result;
use crate::explain::mysql::parse_mysql_plan_with;
use crate::explain::options::ParseOptions;
use crate::explain::plan::{PlanParseResult, PlanSummary};
use crate::explain::postgres::parse_postgres_plan_with;
use crate::explain::sqlite::parse_sqlite_plan;
use crate::explain::sqlserver::parse_sqlserver_plan_with;
use crate::explain::summary::{ParsedPlan, build_summary};

/// Note attached to results for engines this crate cannot parse
pub const UNSUPPORTED_ENGINE_NOTE: &str = "Unsupported engine.";

/// Parses a plan dump with default options
pub fn parse_plan(engine: &PlanEngine, input: &str) -> Result<PlanParseResult> {
    parse_plan_with(engine, input, &ParseOptions::default())
}

/// Parses a plan dump for the given engine
pub fn parse_plan_with(
    engine: &PlanEngine,
    input: &str,
    options: &ParseOptions,
) -> Result<PlanParseResult> {
    // `Other` may still carry a recognized identifier when built by hand
    let resolved;
    let engine = match engine {
        PlanEngine::Other(id) => {
            resolved = PlanEngine::parse(id);
            &resolved
        }
        known => known,
    };

    let parsed: ParsedPlan = match engine {
        PlanEngine::Postgres => parse_postgres_plan_with(input, options)?,
        PlanEngine::Mysql => parse_mysql_plan_with(input, options)?,
        PlanEngine::SqlServer => parse_sqlserver_plan_with(input, options)?,
        PlanEngine::Sqlite => parse_sqlite_plan(input)?,
        PlanEngine::Other(id) => {
            tracing::warn!(engine = %id, "unsupported plan engine");
            return Ok(unsupported(engine.clone()));
        }
    };

    let summary = build_summary(engine.clone(), Some(&parsed.root), parsed.headline);
    tracing::debug!(
        engine = %engine,
        node_count = summary.node_count,
        notes = summary.notes.len(),
        "parsed plan"
    );

    Ok(PlanParseResult {
        summary,
        root: Some(parsed.root),
    })
}

/// Parses a plan dump, resolving the engine from its identifier
pub fn parse_plan_str(engine: &str, input: &str) -> Result<PlanParseResult> {
    parse_plan(&PlanEngine::parse(engine), input)
}

fn unsupported(engine: PlanEngine) -> PlanParseResult {
    PlanParseResult {
        summary: PlanSummary {
            engine,
            node_count: 0,
            total_cost: None,
            actual_time: None,
            actual_rows: None,
            planning_time: None,
            execution_time: None,
            notes: vec![UNSUPPORTED_ENGINE_NOTE.to_string()],
        },
        root: None,
    }
}

#[cfg(test)]
mod tests;
