//! Graph configuration options.

#[derive(Debug, Clone, Copy, Default)]
pub struct GraphOptions {
    /// Allow several edges between the same pair of nodes, distinguished by name.
    pub multigraph: bool,
}
