use super::*;
use pretty_assertions::assert_eq;

fn tree() -> PlanNode {
    PlanNode::new("root")
        .with_child(PlanNode::new("a").with_child(PlanNode::new("a1")))
        .with_child(PlanNode::new("b"))
}

fn rows<'a>(flat: &FlatPlan<'a>) -> Vec<(usize, usize, &'a str)> {
    flat.nodes
        .iter()
        .map(|row| (row.depth, row.index, row.node.name.as_str()))
        .collect()
}

#[test]
fn test_flatten_pre_order_with_depths() {
    let root = tree();
    let flat = flatten_plan(&root, DEFAULT_MAX_FLAT_NODES);

    assert!(!flat.truncated);
    assert_eq!(
        rows(&flat),
        vec![(0, 0, "root"), (1, 1, "a"), (2, 2, "a1"), (1, 3, "b")]
    );
}

#[test]
fn test_flatten_truncates_at_cap() {
    let root = tree();
    let flat = flatten_plan(&root, 2);

    assert!(flat.truncated);
    assert_eq!(rows(&flat), vec![(0, 0, "root"), (1, 1, "a")]);
}

#[test]
fn test_flatten_exact_fit_is_not_truncated() {
    let root = tree();
    let flat = flatten_plan(&root, 4);
    assert!(!flat.truncated);
    assert_eq!(flat.nodes.len(), 4);
}

#[test]
fn test_flatten_zero_cap() {
    let root = tree();
    let flat = flatten_plan(&root, 0);
    assert!(flat.truncated);
    assert!(flat.nodes.is_empty());
}
