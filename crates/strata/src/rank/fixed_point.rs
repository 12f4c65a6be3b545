//! Forward fixed-point layering.
//!
//! Level `base` holds every node whose prerequisites are all resolved (vacuously, for nodes
//! without any). Each following level holds the nodes whose last unresolved prerequisite was
//! resolved on the previous level. Levels advance until a pass resolves nothing.
//!
//! Nodes left over after the fixed point are on or behind a cycle.

use crate::graph::DependencyGraph;
use crate::rank::{apply_layers, dependents, depth, next_layer, prerequisites};
use crate::{Orientation, Result, UnresolvedPolicy};

pub fn forward_fixed_point(
    g: &mut DependencyGraph,
    orientation: Orientation,
    base: i32,
    unresolved: UnresolvedPolicy,
) -> Result<()> {
    let layers = compute_levels(g, orientation, base, unresolved)?;
    apply_layers(g, &layers);
    Ok(())
}

/// Level of every node, indexed by insertion index.
pub fn compute_levels(
    g: &DependencyGraph,
    orientation: Orientation,
    base: i32,
    unresolved: UnresolvedPolicy,
) -> Result<Vec<i32>> {
    let n = g.node_count();
    let mut levels: Vec<Option<i32>> = vec![None; n];
    let mut remaining: Vec<usize> = (0..n)
        .map(|ix| prerequisites(g, orientation, ix).len())
        .collect();

    // Most recently filled level; `None` until the first one.
    let mut last: Option<i32> = None;
    let mut used = 0usize;
    let advance = |last: Option<i32>, ix: usize| match last {
        Some(level) => next_layer(g, level, base, ix),
        None => Ok(base),
    };

    let mut frontier: Vec<usize> = (0..n).filter(|&ix| remaining[ix] == 0).collect();
    while let Some(&first) = frontier.first() {
        let level = advance(last, first)?;
        for &v in &frontier {
            levels[v] = Some(level);
        }
        let mut next: Vec<usize> = Vec::new();
        for &v in &frontier {
            for d in dependents(g, orientation, v) {
                remaining[d] = remaining[d].saturating_sub(1);
                if remaining[d] == 0 && levels[d].is_none() {
                    next.push(d);
                }
            }
        }
        next.sort_unstable();
        next.dedup();
        frontier = next;
        last = Some(level);
        used += 1;
    }

    let leftover: Vec<usize> = (0..n).filter(|&ix| levels[ix].is_none()).collect();
    if !leftover.is_empty() {
        match unresolved {
            UnresolvedPolicy::Fail => {
                // Unresolved nodes sit on or behind a cycle, which the longest-path walk
                // reports in dependency order. Its layers are discarded, so base 0 keeps the
                // walk clear of the overflow check.
                let Err(err) = depth::compute_layers(g, orientation, 0) else {
                    unreachable!("unresolved nodes without a dependency cycle");
                };
                return Err(err);
            }
            UnresolvedPolicy::AppendLevels => {
                tracing::warn!(
                    unresolved = leftover.len(),
                    after_level = ?last,
                    "appending unresolved nodes on their own levels"
                );
                for ix in leftover {
                    let level = advance(last, ix)?;
                    levels[ix] = Some(level);
                    last = Some(level);
                    used += 1;
                }
            }
        }
    }

    tracing::debug!(nodes = n, levels = used, "assigned fixed-point levels");
    Ok(levels.into_iter().map(|l| l.unwrap_or(base)).collect())
}
