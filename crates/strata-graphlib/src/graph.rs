//! Graph container APIs used by `strata`.
//!
//! Nodes are addressed by string id or by insertion index (`ix`). Edges are keyed by their
//! endpoint indices plus an optional name, and adjacency is kept per node as edge indices.

mod edge_key;
mod entries;
mod options;

pub mod alg;

pub use options::GraphOptions;

use edge_key::{EdgeKey, EdgeKeyView};
use entries::{EdgeEntry, NodeEntry};
use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

pub struct Graph<N, E, G>
where
    N: Default,
    E: Default,
    G: Default,
{
    options: GraphOptions,
    graph_label: G,

    nodes: Vec<NodeEntry<N>>,
    node_index: HashMap<String, usize>,

    edges: Vec<EdgeEntry<E>>,
    edge_index: HashMap<EdgeKey, usize>,

    // Edges are never removed, so adjacency is maintained eagerly.
    out_adj: Vec<Vec<usize>>,
    in_adj: Vec<Vec<usize>>,
}

impl<N, E, G> Graph<N, E, G>
where
    N: Default,
    E: Default,
    G: Default,
{
    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            graph_label: G::default(),
            nodes: Vec::new(),
            node_index: HashMap::default(),
            edges: Vec::new(),
            edge_index: HashMap::default(),
            out_adj: Vec::new(),
            in_adj: Vec::new(),
        }
    }

    pub fn set_graph(&mut self, label: G) -> &mut Self {
        self.graph_label = label;
        self
    }

    pub fn graph(&self) -> &G {
        &self.graph_label
    }

    pub fn graph_mut(&mut self) -> &mut G {
        &mut self.graph_label
    }

    /// Inserts `id` or replaces its label. A new node gets the next insertion index.
    pub fn set_node(&mut self, id: impl Into<String>, label: N) -> &mut Self {
        let id = id.into();
        if let Some(&ix) = self.node_index.get(&id) {
            self.nodes[ix].label = label;
            return self;
        }
        self.insert_node(id, label);
        self
    }

    fn insert_node(&mut self, id: String, label: N) -> usize {
        let ix = self.nodes.len();
        self.nodes.push(NodeEntry {
            id: id.clone(),
            label,
        });
        self.out_adj.push(Vec::new());
        self.in_adj.push(Vec::new());
        self.node_index.insert(id, ix);
        ix
    }

    fn ensure_node(&mut self, id: &str) -> usize {
        match self.node_index.get(id) {
            Some(&ix) => ix,
            None => self.insert_node(id.to_string(), N::default()),
        }
    }

    pub fn node(&self, id: &str) -> Option<&N> {
        self.node_index.get(id).map(|&ix| &self.nodes[ix].label)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut N> {
        self.node_index
            .get(id)
            .copied()
            .map(move |ix| &mut self.nodes[ix].label)
    }

    /// Insertion index of `id`, stable for the lifetime of the graph.
    pub fn node_ix(&self, id: &str) -> Option<usize> {
        self.node_index.get(id).copied()
    }

    pub fn node_id_by_ix(&self, ix: usize) -> Option<&str> {
        self.nodes.get(ix).map(|n| n.id.as_str())
    }

    pub fn node_label_mut_by_ix(&mut self, ix: usize) -> Option<&mut N> {
        self.nodes.get_mut(ix).map(|n| &mut n.label)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn for_each_node_ix<F>(&self, mut f: F)
    where
        F: FnMut(usize, &str, &N),
    {
        for (ix, n) in self.nodes.iter().enumerate() {
            f(ix, &n.id, &n.label);
        }
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Visits every edge as `(tail ix, head ix, label)` in insertion order.
    pub fn for_each_edge<F>(&self, mut f: F)
    where
        F: FnMut(usize, usize, &E),
    {
        for e in &self.edges {
            f(e.key.v_ix, e.key.w_ix, &e.label);
        }
    }

    /// Adds (or relabels) the edge `v -> w` named `name`, creating missing endpoints.
    ///
    /// Outside multigraph mode the name is ignored, so at most one edge exists per ordered
    /// pair of nodes.
    pub fn set_edge_named(
        &mut self,
        v: &str,
        w: &str,
        name: Option<String>,
        label: E,
    ) -> &mut Self {
        let name = if self.options.multigraph { name } else { None };
        let v_ix = self.ensure_node(v);
        let w_ix = self.ensure_node(w);

        let view = EdgeKeyView {
            v_ix,
            w_ix,
            name: name.as_deref(),
        };
        if let Some(&idx) = self.edge_index.get(&view) {
            self.edges[idx].label = label;
            return self;
        }

        let key = EdgeKey { v_ix, w_ix, name };
        let idx = self.edges.len();
        self.edges.push(EdgeEntry {
            key: key.clone(),
            label,
        });
        self.edge_index.insert(key, idx);
        self.out_adj[v_ix].push(idx);
        self.in_adj[w_ix].push(idx);
        self
    }

    /// Distinct successor indices of `v_ix`, ascending.
    pub fn successor_ixs(&self, v_ix: usize) -> Vec<usize> {
        let Some(out) = self.out_adj.get(v_ix) else {
            return Vec::new();
        };
        let mut ixs: Vec<usize> = out.iter().map(|&e| self.edges[e].key.w_ix).collect();
        ixs.sort_unstable();
        ixs.dedup();
        ixs
    }

    /// Distinct predecessor indices of `v_ix`, ascending.
    pub fn predecessor_ixs(&self, v_ix: usize) -> Vec<usize> {
        let Some(in_) = self.in_adj.get(v_ix) else {
            return Vec::new();
        };
        let mut ixs: Vec<usize> = in_.iter().map(|&e| self.edges[e].key.v_ix).collect();
        ixs.sort_unstable();
        ixs.dedup();
        ixs
    }
}

impl<N, E, G> std::fmt::Debug for Graph<N, E, G>
where
    N: Default + std::fmt::Debug,
    E: Default + std::fmt::Debug,
    G: Default + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("options", &self.options)
            .field("graph", &self.graph_label)
            .field("nodes", &self.nodes)
            .field("edges", &self.edges)
            .finish()
    }
}
