//! Tests for the SQLite EXPLAIN QUERY PLAN parser

use super::*;
use pretty_assertions::assert_eq;

fn details(plan: &ParsedPlan) -> Vec<&str> {
    plan.root
        .children
        .iter()
        .map(|c| c.detail.as_deref().unwrap_or_default())
        .collect()
}

#[test]
fn test_single_row() {
    let plan = parse_sqlite_plan("0|0|0|SCAN TABLE users").expect("parse failed");

    assert_eq!(plan.root.name, "Query Plan");
    assert_eq!(plan.root.detail, None);
    assert_eq!(plan.root.children.len(), 1);
    assert_eq!(plan.root.children[0].name, "Step 1");
    assert_eq!(
        plan.root.children[0].detail.as_deref(),
        Some("SCAN TABLE users")
    );
    assert_eq!(plan.root.node_count(), 2);
    assert!(plan.headline.notes.is_empty());
}

#[test]
fn test_rows_stay_flat_and_ordered() {
    let output = "\n\n  0|0|0|SCAN TABLE users\r\n0|1|1|SEARCH TABLE orders USING INDEX idx_user_id (user_id=?)\n\n   \n2|0|0|USE TEMP B-TREE FOR ORDER BY\n\n";

    let plan = parse_sqlite_plan(output).expect("parse failed");

    let names: Vec<_> = plan.root.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Step 1", "Step 2", "Step 3"]);
    assert_eq!(
        details(&plan),
        vec![
            "SCAN TABLE users",
            "SEARCH TABLE orders USING INDEX idx_user_id (user_id=?)",
            "USE TEMP B-TREE FOR ORDER BY",
        ]
    );
    assert_eq!(plan.root.depth(), 2);
}

#[test]
fn test_detail_keeps_embedded_pipes() {
    let plan = parse_sqlite_plan("3|0|0|SCAN t | filtered | twice").expect("parse failed");
    assert_eq!(details(&plan), vec!["SCAN t | filtered | twice"]);
}

#[test]
fn test_short_rows_use_whole_line() {
    let plan = parse_sqlite_plan("QUERY PLAN\n|--SCAN users\n1|2|SCAN x").expect("parse failed");
    assert_eq!(
        details(&plan),
        vec!["QUERY PLAN", "|--SCAN users", "1|2|SCAN x"]
    );
}

#[test]
fn test_rows_have_no_metrics() {
    let plan = parse_sqlite_plan("0|0|0|SCAN TABLE users").expect("parse failed");
    let step = &plan.root.children[0];
    assert_eq!(step.cost, None);
    assert_eq!(step.rows, None);
    assert!(step.is_leaf());
}

#[test]
fn test_empty_input_fails() {
    for input in ["", " ", "\n\r\n"] {
        let err = parse_sqlite_plan(input).unwrap_err();
        assert!(matches!(err, SqlitePlanError::EmptyInput));
        assert_eq!(err.to_string(), "Paste SQLite EXPLAIN QUERY PLAN text.");
    }
}
