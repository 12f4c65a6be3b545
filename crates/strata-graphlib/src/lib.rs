//! Graph container APIs used by `strata`.
//!
//! The container is a directed multigraph keyed by string node ids. Node and edge storage
//! preserves insertion order, which is what the layout engine relies on for deterministic ids.

pub mod graph;

pub use graph::{Graph, GraphOptions, alg};
