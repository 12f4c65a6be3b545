//! Memoized longest-path layering.
//!
//! `layer(n) = base` when `n` has no prerequisites, otherwise one past the highest layer among
//! them. The traversal is an explicit post-order walk: each node is finished once and cached,
//! and a node that is re-entered while still on the walk closes a cycle.

use crate::graph::DependencyGraph;
use crate::rank::{apply_layers, next_layer, prerequisites};
use crate::{Error, Orientation, Result};

pub fn dependent_depth(
    g: &mut DependencyGraph,
    orientation: Orientation,
    base: i32,
) -> Result<()> {
    let layers = compute_layers(g, orientation, base)?;
    tracing::debug!(nodes = layers.len(), "assigned dependent-depth layers");
    apply_layers(g, &layers);
    Ok(())
}

/// Layer of every node, indexed by insertion index.
pub fn compute_layers(
    g: &DependencyGraph,
    orientation: Orientation,
    base: i32,
) -> Result<Vec<i32>> {
    let n = g.node_count();
    let mut layers: Vec<Option<i32>> = vec![None; n];
    let mut in_progress = vec![false; n];

    for root in 0..n {
        if layers[root].is_some() {
            continue;
        }

        // (node, its prerequisites, next prerequisite to visit)
        let mut stack: Vec<(usize, Vec<usize>, usize)> =
            vec![(root, prerequisites(g, orientation, root), 0)];
        in_progress[root] = true;

        while let Some((v, prereqs, cursor)) = stack.last_mut() {
            let v = *v;
            if let Some(&w) = prereqs.get(*cursor) {
                *cursor += 1;
                if layers[w].is_some() {
                    continue;
                }
                if in_progress[w] {
                    return Err(cycle_error(g, &stack, w, orientation));
                }
                in_progress[w] = true;
                stack.push((w, prerequisites(g, orientation, w), 0));
                continue;
            }

            let layer = match prereqs.iter().filter_map(|&w| layers[w]).max() {
                Some(deepest) => next_layer(g, deepest, base, v)?,
                None => base,
            };
            layers[v] = Some(layer);
            in_progress[v] = false;
            stack.pop();
        }
    }

    Ok(layers.into_iter().map(|l| l.unwrap_or(base)).collect())
}

/// The walk from `reentered` to the top of the stack is the cycle. It is reported in
/// dependency order, starting from its smallest member.
fn cycle_error(
    g: &DependencyGraph,
    stack: &[(usize, Vec<usize>, usize)],
    reentered: usize,
    orientation: Orientation,
) -> Error {
    let start = stack
        .iter()
        .position(|(ix, _, _)| *ix == reentered)
        .unwrap_or(0);
    let mut members: Vec<usize> = stack[start..].iter().map(|(ix, _, _)| *ix).collect();
    if orientation == Orientation::RootsFirst {
        members.reverse();
    }

    let smallest = members
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| g.node_id_by_ix(**a).cmp(&g.node_id_by_ix(**b)))
        .map_or(0, |(pos, _)| pos);
    members.rotate_left(smallest);

    let cycle: Vec<String> = members
        .into_iter()
        .filter_map(|ix| g.node_id_by_ix(ix).map(str::to_string))
        .collect();
    tracing::debug!(?cycle, "dependency cycle detected");
    Error::CycleDetected { cycle }
}
