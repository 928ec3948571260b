//! Sample plans, one per supported engine
//!
//! Useful as editor placeholders and as a quick smoke test of each parser.

use crate::explain::engine::PlanEngine;

pub const POSTGRES_SAMPLE: &str = r#"[{"Plan":{"Node Type":"Seq Scan","Relation Name":"users","Plan Rows":1000,"Total Cost":12.3,"Actual Rows":1000,"Actual Total Time":1.23}}]"#;

pub const MYSQL_SAMPLE: &str = r#"{"query_block":{"select_id":1,"nested_loop":[{"table":{"table_name":"users","access_type":"ALL","rows_examined_per_scan":1000}}]}}"#;

pub const SQLSERVER_SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-16"?><ShowPlanXML xmlns="http://schemas.microsoft.com/sqlserver/2004/07/showplan"><BatchSequence><Batch><Statements><StmtSimple StatementType="SELECT"><QueryPlan><RelOp NodeId="0" PhysicalOp="Index Scan" LogicalOp="Index Scan" EstimateRows="100" EstimatedTotalSubtreeCost="0.5"></RelOp></QueryPlan></StmtSimple></Statements></Batch></BatchSequence></ShowPlanXML>"#;

pub const SQLITE_SAMPLE: &str = "0|0|0|SCAN TABLE users";

/// Returns the sample plan for an engine, `None` for unsupported engines
pub fn sample_plan(engine: &PlanEngine) -> Option<&'static str> {
    match engine {
        PlanEngine::Postgres => Some(POSTGRES_SAMPLE),
        PlanEngine::Mysql => Some(MYSQL_SAMPLE),
        PlanEngine::SqlServer => Some(SQLSERVER_SAMPLE),
        PlanEngine::Sqlite => Some(SQLITE_SAMPLE),
        PlanEngine::Other(_) => None,
    }
}
