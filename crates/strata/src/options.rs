//! Layout configuration.
//!
//! `LayoutOptions` deserializes from camelCase documents where every key is optional, e.g.
//! `{"layering": "forward-fixed-point", "layerBase": 0}`. Missing keys fall back to
//! [`LayoutOptions::dependent_depth`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How layers are computed from the dependency graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layering {
    /// Memoized longest path: a node sits one layer past its deepest prerequisite.
    #[default]
    DependentDepth,
    /// Level-by-level relaxation: a node resolves on the first level where all of its
    /// prerequisites were resolved on earlier levels.
    ForwardFixedPoint,
}

/// Which end of the dependency graph sits on the base layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    /// Nodes without dependencies are on the base layer; components sit strictly above
    /// everything they depend on.
    #[default]
    LeavesFirst,
    /// Nodes nothing depends on are on the base layer; dependencies sit strictly above every
    /// component that requires them.
    RootsFirst,
}

/// The bucket within which positions are assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PositionScope {
    /// Per layer, sorted by name.
    #[default]
    Layer,
    /// Per group label, sorted by `(layer, name)`. Nodes without a group share one bucket.
    Group,
}

/// What the forward fixed point does with nodes it could not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnresolvedPolicy {
    /// Report the cycle that blocks them.
    #[default]
    Fail,
    /// Put each unresolved node on its own level after the last resolved one.
    AppendLevels,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutOptions {
    pub layering: Layering,
    pub orientation: Orientation,
    pub positions: PositionScope,
    pub layer_base: i32,
    pub position_base: i32,
    pub unresolved: UnresolvedPolicy,
}

impl LayoutOptions {
    /// `(x, y)` convention: layers and positions start at 1, positions per layer.
    pub fn dependent_depth() -> Self {
        Self {
            layering: Layering::DependentDepth,
            orientation: Orientation::LeavesFirst,
            positions: PositionScope::Layer,
            layer_base: 1,
            position_base: 1,
            unresolved: UnresolvedPolicy::Fail,
        }
    }

    /// `(i, j)` convention: levels and positions start at 0, positions per group.
    pub fn forward_fixed_point() -> Self {
        Self {
            layering: Layering::ForwardFixedPoint,
            orientation: Orientation::LeavesFirst,
            positions: PositionScope::Group,
            layer_base: 0,
            position_base: 0,
            unresolved: UnresolvedPolicy::Fail,
        }
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self::dependent_depth()
    }
}

impl FromStr for Layering {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "depth" | "dependent-depth" => Ok(Self::DependentDepth),
            "fixed-point" | "forward-fixed-point" => Ok(Self::ForwardFixedPoint),
            _ => Err(()),
        }
    }
}

impl FromStr for Orientation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "leaves-first" | "leaves" => Ok(Self::LeavesFirst),
            "roots-first" | "roots" => Ok(Self::RootsFirst),
            _ => Err(()),
        }
    }
}

impl FromStr for PositionScope {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "layer" => Ok(Self::Layer),
            "group" => Ok(Self::Group),
            _ => Err(()),
        }
    }
}
