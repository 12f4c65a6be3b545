//! Layer assignment.
//!
//! Both policies work on insertion indices and write the result into `NodeLabel::layer`.
//! Prerequisites of a node are its dependencies under [`Orientation::LeavesFirst`] and its
//! dependents under [`Orientation::RootsFirst`].

pub mod depth;
pub mod fixed_point;

pub use depth::dependent_depth;
pub use fixed_point::forward_fixed_point;

use crate::graph::DependencyGraph;
use crate::{Error, LayoutOptions, Layering, Orientation, Result};

pub fn rank(g: &mut DependencyGraph, options: &LayoutOptions) -> Result<()> {
    match options.layering {
        Layering::DependentDepth => {
            depth::dependent_depth(g, options.orientation, options.layer_base)
        }
        Layering::ForwardFixedPoint => fixed_point::forward_fixed_point(
            g,
            options.orientation,
            options.layer_base,
            options.unresolved,
        ),
    }
}

pub(crate) fn prerequisites(
    g: &DependencyGraph,
    orientation: Orientation,
    ix: usize,
) -> Vec<usize> {
    match orientation {
        Orientation::LeavesFirst => g.successor_ixs(ix),
        Orientation::RootsFirst => g.predecessor_ixs(ix),
    }
}

pub(crate) fn dependents(g: &DependencyGraph, orientation: Orientation, ix: usize) -> Vec<usize> {
    match orientation {
        Orientation::LeavesFirst => g.predecessor_ixs(ix),
        Orientation::RootsFirst => g.successor_ixs(ix),
    }
}

/// The layer right after `layer`, for node `ix`.
pub(crate) fn next_layer(g: &DependencyGraph, layer: i32, base: i32, ix: usize) -> Result<i32> {
    layer.checked_add(1).ok_or_else(|| Error::LayerOverflow {
        component: g.node_id_by_ix(ix).unwrap_or_default().to_string(),
        base,
    })
}

/// Writes `layers[ix]` into each node label and records the number of distinct layers.
pub(crate) fn apply_layers(g: &mut DependencyGraph, layers: &[i32]) {
    for (ix, &layer) in layers.iter().enumerate() {
        if let Some(label) = g.node_label_mut_by_ix(ix) {
            label.layer = Some(layer);
        }
    }
    let mut distinct = layers.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    g.graph_mut().layer_count = distinct.len();
}
