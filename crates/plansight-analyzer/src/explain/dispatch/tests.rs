use super::*;
use crate::explain::error::PlanError;
use pretty_assertions::assert_eq;

#[test]
fn test_dispatch_postgres() {
    let json = r#"[{"Plan":{"Node Type":"Seq Scan","Relation Name":"users","Total Cost":12.3,"Actual Total Time":1.23}}]"#;

    let result = parse_plan(&PlanEngine::Postgres, json).expect("parse failed");

    assert_eq!(result.summary.engine, PlanEngine::Postgres);
    assert_eq!(result.summary.node_count, 1);
    assert_eq!(result.summary.total_cost, Some(12.3));
    assert_eq!(result.summary.actual_time, Some(1.23));
    assert!(result.summary.notes.is_empty());
    assert_eq!(result.root.expect("root").name, "Seq Scan");
}

#[test]
fn test_dispatch_sqlite_counts_synthetic_root() {
    let result =
        parse_plan(&PlanEngine::Sqlite, "0|0|0|SCAN a\n0|0|0|SCAN b").expect("parse failed");
    assert_eq!(result.summary.engine, PlanEngine::Sqlite);
    assert_eq!(result.summary.node_count, 3);
    assert_eq!(result.summary.total_cost, None);
}

#[test]
fn test_unsupported_engine_is_not_an_error() {
    for id in ["oracle", "", "DB2", "postgres-json"] {
        let result = parse_plan_str(id, "whatever input").expect("must not fail");

        assert_eq!(result.summary.engine, PlanEngine::Other(id.to_string()));
        assert_eq!(result.summary.node_count, 0);
        assert_eq!(result.summary.notes, vec![UNSUPPORTED_ENGINE_NOTE]);
        assert!(result.root.is_none());
    }
}

#[test]
fn test_unsupported_engine_with_blank_input_is_not_an_error() {
    let result = parse_plan(&PlanEngine::Other("oracle".into()), "").expect("must not fail");
    assert_eq!(result.summary.node_count, 0);
}

#[test]
fn test_blank_input_fails_for_every_engine() {
    for engine in PlanEngine::SUPPORTED {
        let err = parse_plan(&engine, " \n ").unwrap_err();
        assert!(err.is_empty_input(), "{engine}: {err}");
    }
}

#[test]
fn test_errors_are_not_retried_with_another_engine() {
    // Valid MySQL plan handed to the PostgreSQL parser
    let mysql = r#"{"query_block":{"select_id":1}}"#;
    let err = parse_plan(&PlanEngine::Postgres, mysql).unwrap_err();
    assert!(matches!(err, PlanError::Postgres(_)));
    assert_eq!(
        err.to_string(),
        "Missing Plan root. Use EXPLAIN (ANALYZE, BUFFERS, FORMAT JSON)."
    );
}

#[test]
fn test_depth_option_is_forwarded() {
    let json = r#"{"query_block":{"table":{"table_name":"t"}}}"#;
    let options = ParseOptions::default().with_max_depth(1);

    let err = parse_plan_with(&PlanEngine::Mysql, json, &options).unwrap_err();
    assert!(err.is_too_deep());
    assert!(!err.is_empty_input());
}

#[test]
fn test_hand_built_other_with_known_identifier_is_resolved() {
    let json = r#"[{"Plan":{"Node Type":"Seq Scan"}}]"#;
    let engine = PlanEngine::Other("PostgreSQL".into());
    let result = parse_plan(&engine, json).expect("parse failed");

    assert_eq!(result.summary.engine, PlanEngine::Postgres);
    assert_eq!(result.summary.node_count, 1);
    assert!(result.root.is_some());
}

#[test]
fn test_deep_json_reports_too_deep() {
    let mut node = r#"{"Node Type":"Seq Scan"}"#.to_string();
    for _ in 0..100 {
        node = format!(r#"{{"Node Type":"Nested Loop","Plans":[{node}]}}"#);
    }
    let json = format!(r#"[{{"Plan":{node}}}]"#);

    let err = parse_plan(&PlanEngine::Postgres, &json).unwrap_err();
    assert!(err.is_too_deep(), "{err}");
}
