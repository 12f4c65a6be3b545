//! Position assignment within a layer or a group.
//!
//! Buckets are keyed explicitly (`BTreeMap`) and sorted by `(layer, name)`, so positions never
//! depend on record order.

use crate::{Error, PositionScope, Result};
use crate::graph::DependencyGraph;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum BucketKey {
    Layer(Option<i32>),
    Group(Option<String>),
}

pub fn assign_positions(g: &mut DependencyGraph, scope: PositionScope, base: i32) -> Result<()> {
    let mut buckets: BTreeMap<BucketKey, Vec<(Option<i32>, String, usize)>> = BTreeMap::new();
    g.for_each_node_ix(|ix, id, label| {
        let key = match scope {
            PositionScope::Layer => BucketKey::Layer(label.layer),
            PositionScope::Group => BucketKey::Group(label.group.clone()),
        };
        buckets
            .entry(key)
            .or_default()
            .push((label.layer, id.to_string(), ix));
    });

    for members in buckets.values_mut() {
        members.sort();
        for (offset, (_, id, ix)) in members.iter().enumerate() {
            let position = i32::try_from(offset)
                .ok()
                .and_then(|offset| base.checked_add(offset))
                .ok_or_else(|| Error::PositionOverflow {
                    component: id.clone(),
                    base,
                })?;
            if let Some(label) = g.node_label_mut_by_ix(*ix) {
                label.position = Some(position);
            }
        }
    }
    Ok(())
}
