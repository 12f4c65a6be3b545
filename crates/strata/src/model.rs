//! Input records, output layout types, and the graph labels used while computing a layout.
//!
//! Input and output types are plain serde structs so callers can move them over any
//! structured interchange format. Graph labels stay `Clone`-friendly and default to
//! "not computed yet" (`None`).

use serde::{Deserialize, Deserializer, Serialize};

/// A directed dependency declaration: `component_name` requires `dependency_name`.
///
/// A record without a dependency declares a root component. Both the flat shape
/// (`{component_name, dependency_name}`) and the grouped shape (`{component, group,
/// dependency}`) deserialize into this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRecord {
    #[serde(alias = "component")]
    pub component_name: String,
    #[serde(
        default,
        alias = "dependency",
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub dependency_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub group: Option<String>,
}

impl DependencyRecord {
    pub fn new(component: impl Into<String>, dependency: impl Into<String>) -> Self {
        let dependency = dependency.into();
        Self {
            component_name: component.into(),
            dependency_name: (!dependency.is_empty()).then_some(dependency),
            group: None,
        }
    }

    pub fn root(component: impl Into<String>) -> Self {
        Self {
            component_name: component.into(),
            dependency_name: None,
            group: None,
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        let group = group.into();
        self.group = (!group.is_empty()).then_some(group);
        self
    }

    pub fn dependency(&self) -> Option<&str> {
        self.dependency_name.as_deref()
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionedNode {
    pub component_name: String,
    pub id: usize,
    /// Layer.
    pub x: i32,
    /// Rank within the layer (or within the group, for group-scoped positions).
    pub y: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// `source` is the component's id, `target` the id of the dependency it consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<Edge>,
}

impl Layout {
    pub fn node(&self, name: &str) -> Option<&PositionedNode> {
        self.nodes.iter().find(|n| n.component_name == name)
    }

    /// Number of distinct layers present in the layout.
    pub fn layer_count(&self) -> usize {
        let mut layers: Vec<i32> = self.nodes.iter().map(|n| n.x).collect();
        layers.sort_unstable();
        layers.dedup();
        layers.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphLabel {
    pub layer_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeLabel {
    pub layer: Option<i32>,
    pub position: Option<i32>,
    pub group: Option<String>,
}

/// Edge label carrying the index of the input record that declared the edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeLabel {
    pub record: usize,
}
