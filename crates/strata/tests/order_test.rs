use strata::rank::depth;
use strata::{DependencyGraph, DependencyRecord, Orientation, PositionScope, graph, order};

fn position(g: &DependencyGraph, id: &str) -> Option<i32> {
    g.node(id).and_then(|n| n.position)
}

fn ranked(records: &[DependencyRecord]) -> DependencyGraph {
    let mut g = graph::build(records).unwrap();
    depth::dependent_depth(&mut g, Orientation::LeavesFirst, 0).unwrap();
    g
}

#[test]
fn assign_positions_sorts_each_layer_by_name() {
    let mut g = ranked(&[
        DependencyRecord::new("zeta", "base"),
        DependencyRecord::new("alpha", "base"),
        DependencyRecord::new("Mid", "base"),
    ]);

    order::assign_positions(&mut g, PositionScope::Layer, 1).unwrap();

    assert_eq!(position(&g, "base"), Some(1));
    // Ordinal comparison: uppercase sorts before lowercase.
    assert_eq!(position(&g, "Mid"), Some(1));
    assert_eq!(position(&g, "alpha"), Some(2));
    assert_eq!(position(&g, "zeta"), Some(3));
}

#[test]
fn assign_positions_by_group_sorts_by_layer_then_name() {
    let mut g = ranked(&[
        DependencyRecord::new("api", "db").with_group("backend"),
        DependencyRecord::root("db").with_group("backend"),
        DependencyRecord::new("worker", "queue").with_group("backend"),
        DependencyRecord::root("queue").with_group("infra"),
        DependencyRecord::new("web", "api").with_group("frontend"),
    ]);

    order::assign_positions(&mut g, PositionScope::Group, 0).unwrap();

    assert_eq!(position(&g, "db"), Some(0));
    assert_eq!(position(&g, "api"), Some(1));
    assert_eq!(position(&g, "worker"), Some(2));
    assert_eq!(position(&g, "web"), Some(0));
    assert_eq!(position(&g, "queue"), Some(0));
}

#[test]
fn assign_positions_puts_ungrouped_nodes_in_one_bucket() {
    let mut g = ranked(&[
        DependencyRecord::new("a", "x").with_group("g"),
        DependencyRecord::new("b", "y").with_group("g"),
    ]);

    order::assign_positions(&mut g, PositionScope::Group, 0).unwrap();

    assert_eq!(position(&g, "x"), Some(0));
    assert_eq!(position(&g, "y"), Some(1));
    assert_eq!(position(&g, "a"), Some(0));
    assert_eq!(position(&g, "b"), Some(1));
}
