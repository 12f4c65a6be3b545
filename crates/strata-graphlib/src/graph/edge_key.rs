use std::hash::{Hash, Hasher};

/// Owned edge key: endpoint indices plus the multigraph name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(in crate::graph) struct EdgeKey {
    pub(in crate::graph) v_ix: usize,
    pub(in crate::graph) w_ix: usize,
    pub(in crate::graph) name: Option<String>,
}

/// Borrowed form of [`EdgeKey`], so lookups never allocate the name.
#[derive(Clone, Copy, Hash)]
pub(in crate::graph) struct EdgeKeyView<'a> {
    pub(in crate::graph) v_ix: usize,
    pub(in crate::graph) w_ix: usize,
    pub(in crate::graph) name: Option<&'a str>,
}

impl hashbrown::Equivalent<EdgeKey> for EdgeKeyView<'_> {
    fn equivalent(&self, key: &EdgeKey) -> bool {
        key.v_ix == self.v_ix && key.w_ix == self.w_ix && key.name.as_deref() == self.name
    }
}

// Hashes exactly like the derived `Hash` of `EdgeKeyView`.
impl Hash for EdgeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.v_ix.hash(state);
        self.w_ix.hash(state);
        self.name.as_deref().hash(state);
    }
}
