//! Query Plan Normalization Module
//!
//! This module turns raw EXPLAIN dumps from several engines into one
//! engine-agnostic [`PlanNode`] tree:
//! - PostgreSQL (`EXPLAIN (FORMAT JSON)`)
//! - MySQL (`EXPLAIN FORMAT=JSON`)
//! - SQL Server (ShowPlan XML)
//! - SQLite (`EXPLAIN QUERY PLAN` rows)
//!
//! # Example
//!
//! ```
//! use plansight_analyzer::explain::{parse_plan, PlanEngine};
//!
//! // PostgreSQL EXPLAIN
//! let pg_json = r#"[{"Plan": {"Node Type": "Seq Scan", "Relation Name": "users", "Total Cost": 12.3}}]"#;
//! let result = parse_plan(&PlanEngine::Postgres, pg_json).unwrap();
//! assert_eq!(result.root.unwrap().name, "Seq Scan");
//! assert_eq!(result.summary.total_cost, Some(12.3));
//!
//! // SQLite EXPLAIN QUERY PLAN
//! let result = parse_plan(&PlanEngine::Sqlite, "0|0|0|SCAN TABLE users").unwrap();
//! assert_eq!(result.summary.node_count, 2);
//!
//! // Unknown engines are reported, not rejected
//! let result = parse_plan(&PlanEngine::parse("oracle"), "...").unwrap();
//! assert!(result.root.is_none());
//! ```

pub mod coerce;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod flatten;
pub mod json;
pub mod mysql;
pub mod options;
pub mod plan;
pub mod postgres;
pub mod samples;
pub mod sqlite;
pub mod sqlserver;
pub mod summary;

pub use dispatch::{UNSUPPORTED_ENGINE_NOTE, parse_plan, parse_plan_str, parse_plan_with};
pub use engine::PlanEngine;
pub use error::PlanError;
pub use flatten::{DEFAULT_MAX_FLAT_NODES, FlatNode, FlatPlan, flatten_plan};
pub use mysql::{MysqlPlanError, parse_mysql_plan};
pub use options::{DEFAULT_MAX_DEPTH, ParseOptions};
pub use plan::{PlanNode, PlanNodeIterator, PlanParseResult, PlanSummary};
pub use postgres::{PostgresPlanError, parse_postgres_plan};
pub use samples::sample_plan;
pub use sqlite::{SqlitePlanError, parse_sqlite_plan};
pub use sqlserver::{SqlServerPlanError, parse_sqlserver_plan};
pub use summary::{Headline, ParsedPlan, build_summary, node_count};
