#![forbid(unsafe_code)]

//! Deterministic layered layout of component dependency graphs.
//!
//! Given `(component, dependency)` records, `strata` builds the dependency graph, assigns
//! every node a layer, ranks nodes inside their layer (or group), and returns positioned
//! nodes plus one edge per record:
//!
//! ```
//! use strata::{DependencyRecord, LayoutOptions, layout};
//!
//! let records = vec![
//!     DependencyRecord::new("app", "core"),
//!     DependencyRecord::new("cli", "core"),
//! ];
//! let out = layout(&records, &LayoutOptions::default()).unwrap();
//! assert_eq!(out.node("core").map(|n| n.x), Some(1));
//! assert_eq!(out.node("app").map(|n| (n.x, n.y)), Some((2, 1)));
//! assert_eq!(out.node("cli").map(|n| (n.x, n.y)), Some((2, 2)));
//! ```
//!
//! The computation is a pure function of its input: identical records always produce an
//! identical [`Layout`].

pub use strata_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod error;
mod model;
mod options;

pub mod graph;
pub mod order;
pub mod rank;

pub use error::{Error, Result};
pub use graph::DependencyGraph;
pub use model::{
    DependencyRecord, Edge, EdgeLabel, GraphLabel, Layout, NodeLabel, PositionedNode,
};
pub use options::{Layering, LayoutOptions, Orientation, PositionScope, UnresolvedPolicy};

/// Lays out the graph formed by every name the records mention.
pub fn layout(records: &[DependencyRecord], options: &LayoutOptions) -> Result<Layout> {
    let mut g = graph::build(records)?;
    layout_graph(&mut g, options)
}

/// Lays out an externally supplied node set. Records may only reference names from
/// `node_names`; names no record mentions are laid out as isolated nodes.
pub fn layout_with_node_set<S: AsRef<str>>(
    node_names: &[S],
    records: &[DependencyRecord],
    options: &LayoutOptions,
) -> Result<Layout> {
    let mut g = graph::build_with_node_set(node_names, records)?;
    layout_graph(&mut g, options)
}

/// Ranks, orders, and reads back a graph built by [`graph::build`].
pub fn layout_graph(g: &mut DependencyGraph, options: &LayoutOptions) -> Result<Layout> {
    rank::rank(g, options)?;
    order::assign_positions(g, options.positions, options.position_base)?;
    tracing::debug!(
        layers = g.graph().layer_count,
        scope = ?options.positions,
        "layout complete"
    );
    Ok(Layout {
        nodes: positioned_nodes(g, options.positions),
        edges: edges(g),
    })
}

/// Every node of a ranked and ordered graph.
///
/// Nodes come out by `(layer, position)` for layer-scoped positions and by
/// `(group, position)` for group-scoped ones.
pub fn positioned_nodes(g: &DependencyGraph, scope: PositionScope) -> Vec<PositionedNode> {
    let mut nodes: Vec<PositionedNode> = Vec::with_capacity(g.node_count());
    g.for_each_node_ix(|ix, id, label| {
        nodes.push(PositionedNode {
            component_name: id.to_string(),
            id: ix,
            x: label.layer.unwrap_or_default(),
            y: label.position.unwrap_or_default(),
            group: label.group.clone(),
        });
    });
    match scope {
        PositionScope::Layer => nodes.sort_by(|a, b| {
            (a.x, a.y, &a.component_name).cmp(&(b.x, b.y, &b.component_name))
        }),
        PositionScope::Group => nodes.sort_by(|a, b| {
            (&a.group, a.y, &a.component_name).cmp(&(&b.group, b.y, &b.component_name))
        }),
    }
    nodes
}

/// One edge per record that names a dependency, in record order.
pub fn edges(g: &DependencyGraph) -> Vec<Edge> {
    let mut out: Vec<(usize, Edge)> = Vec::with_capacity(g.edge_count());
    g.for_each_edge(|source, target, label| {
        out.push((label.record, Edge { source, target }));
    });
    out.sort_by_key(|(record, _)| *record);
    out.into_iter().map(|(_, e)| e).collect()
}

/// Every dependency cycle in the records, each listed in id order.
pub fn find_cycles(records: &[DependencyRecord]) -> Result<Vec<Vec<String>>> {
    let g = graph::build(records)?;
    Ok(graphlib::alg::find_cycles(&g))
}
