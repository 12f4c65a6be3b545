use strata_graphlib::{Graph, GraphOptions};

fn edges<N: Default, E: Default + Clone, G: Default>(
    g: &Graph<N, E, G>,
) -> Vec<(usize, usize, E)> {
    let mut out = Vec::new();
    g.for_each_edge(|v, w, label| out.push((v, w, label.clone())));
    out
}

#[test]
fn nodes_keep_insertion_order_and_index() {
    let mut g: Graph<(), (), ()> = Graph::new(GraphOptions::default());
    g.set_node("c", ());
    g.set_node("a", ());
    g.set_node("b", ());
    g.set_node("a", ());

    assert_eq!(g.node_count(), 3);
    assert_eq!(g.node_ix("a"), Some(1));
    assert_eq!(g.node_id_by_ix(2), Some("b"));
    assert_eq!(g.node_ix("missing"), None);
    assert_eq!(g.node_id_by_ix(3), None);

    let mut seen = Vec::new();
    g.for_each_node_ix(|ix, id, _| seen.push((ix, id.to_string())));
    assert_eq!(
        seen,
        vec![(0, "c".to_string()), (1, "a".to_string()), (2, "b".to_string())]
    );
}

#[test]
fn set_edge_named_creates_missing_endpoints_with_default_labels() {
    let mut g: Graph<i32, (), ()> = Graph::new(GraphOptions::default());
    g.set_node("a", 5);
    g.set_edge_named("a", "b", None, ());

    assert_eq!(g.node("a"), Some(&5));
    assert_eq!(g.node("b"), Some(&0));
    assert_eq!(g.successor_ixs(0), vec![1]);
    assert_eq!(g.predecessor_ixs(1), vec![0]);
    assert!(g.successor_ixs(1).is_empty());
}

#[test]
fn simple_graphs_collapse_parallel_edges() {
    let mut g: Graph<(), i32, ()> = Graph::new(GraphOptions::default());
    g.set_edge_named("a", "b", None, 1);
    g.set_edge_named("a", "b", Some("ignored".to_string()), 2);

    assert_eq!(g.edge_count(), 1);
    assert_eq!(edges(&g), vec![(0, 1, 2)]);
}

#[test]
fn multigraphs_keep_named_parallel_edges() {
    let mut g: Graph<(), i32, ()> = Graph::new(GraphOptions { multigraph: true });
    g.set_edge_named("a", "b", Some("r0".to_string()), 1);
    g.set_edge_named("a", "b", Some("r1".to_string()), 2);
    g.set_edge_named("a", "b", Some("r0".to_string()), 3);

    assert_eq!(g.edge_count(), 2);
    assert_eq!(edges(&g), vec![(0, 1, 3), (0, 1, 2)]);
    assert_eq!(g.successor_ixs(0), vec![1]);
}

#[test]
fn adjacency_ixs_are_sorted_and_distinct() {
    let mut g: Graph<(), (), ()> = Graph::new(GraphOptions { multigraph: true });
    g.set_node("d", ());
    g.set_edge_named("c", "d", Some("1".to_string()), ());
    g.set_edge_named("b", "d", Some("2".to_string()), ());
    g.set_edge_named("c", "d", Some("3".to_string()), ());
    g.set_edge_named("d", "d", Some("4".to_string()), ());

    assert_eq!(g.predecessor_ixs(0), vec![0, 1, 2]);
    assert_eq!(g.successor_ixs(0), vec![0]);
    assert_eq!(g.successor_ixs(1), vec![0]);
    assert!(g.predecessor_ixs(99).is_empty());
}

#[test]
fn labels_can_be_updated_in_place() {
    let mut g: Graph<i32, (), usize> = Graph::new(GraphOptions::default());
    g.set_graph(4);
    g.set_node("a", 7);

    if let Some(label) = g.node_mut("a") {
        *label = 9;
    }
    assert_eq!(g.node("a"), Some(&9));

    if let Some(label) = g.node_label_mut_by_ix(0) {
        *label = 11;
    }
    assert_eq!(g.node("a"), Some(&11));
    assert!(g.node_mut("missing").is_none());

    *g.graph_mut() += 1;
    assert_eq!(*g.graph(), 5);
}
