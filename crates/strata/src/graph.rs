//! Dependency graph construction.
//!
//! Nodes are inserted in sorted (ordinal, case-sensitive) name order, so a node's insertion
//! index is its output id. Edges point from a component to the dependency it consumes and
//! are inserted in record order; the graph is a multigraph so duplicate records survive.

use crate::graphlib::{Graph, GraphOptions};
use crate::{DependencyRecord, EdgeLabel, Error, GraphLabel, NodeLabel, Result};
use std::collections::BTreeSet;

pub type DependencyGraph = Graph<NodeLabel, EdgeLabel, GraphLabel>;

/// Builds the graph over every name the records mention.
pub fn build(records: &[DependencyRecord]) -> Result<DependencyGraph> {
    validate_component_names(records)?;
    let names: BTreeSet<&str> = records
        .iter()
        .flat_map(|r| std::iter::once(r.component_name.as_str()).chain(r.dependency()))
        .collect();
    populate(names, records)
}

/// Builds the graph over an externally supplied node set. Every name referenced by a record
/// must belong to it; extra names become isolated nodes.
pub fn build_with_node_set<S: AsRef<str>>(
    node_names: &[S],
    records: &[DependencyRecord],
) -> Result<DependencyGraph> {
    validate_component_names(records)?;
    let names: BTreeSet<&str> = node_names
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| !s.is_empty())
        .collect();
    for (record, r) in records.iter().enumerate() {
        for name in std::iter::once(r.component_name.as_str()).chain(r.dependency()) {
            if !names.contains(name) {
                return Err(Error::UnknownReference {
                    name: name.to_string(),
                    record,
                });
            }
        }
    }
    populate(names, records)
}

fn validate_component_names(records: &[DependencyRecord]) -> Result<()> {
    match records.iter().position(|r| r.component_name.is_empty()) {
        Some(record) => Err(Error::EmptyComponentName { record }),
        None => Ok(()),
    }
}

fn populate(names: BTreeSet<&str>, records: &[DependencyRecord]) -> Result<DependencyGraph> {
    let mut g: DependencyGraph = Graph::new(GraphOptions { multigraph: true });
    g.set_graph(GraphLabel::default());
    for name in names {
        g.set_node(name, NodeLabel::default());
    }

    for (record, r) in records.iter().enumerate() {
        if let Some(group) = r.group.as_deref() {
            assign_group(&mut g, record, &r.component_name, group)?;
        }
        if let Some(dependency) = r.dependency() {
            g.set_edge_named(
                &r.component_name,
                dependency,
                Some(record.to_string()),
                EdgeLabel { record },
            );
        }
    }

    tracing::debug!(
        nodes = g.node_count(),
        edges = g.edge_count(),
        "built dependency graph"
    );
    Ok(g)
}

fn assign_group(
    g: &mut DependencyGraph,
    record: usize,
    component: &str,
    group: &str,
) -> Result<()> {
    let Some(label) = g.node_mut(component) else {
        return Err(Error::UnknownReference {
            name: component.to_string(),
            record,
        });
    };
    if let Some(existing) = label.group.as_deref() {
        if existing != group {
            return Err(Error::ConflictingGroup {
                component: component.to_string(),
                first: existing.to_string(),
                second: group.to_string(),
            });
        }
        return Ok(());
    }
    label.group = Some(group.to_string());
    Ok(())
}
