pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A dependency chain returns to a node already on the resolution path. Members are
    /// listed in dependency order (each depends on the next, the last on the first).
    #[error("Dependency cycle detected: {}", format_cycle(.cycle))]
    CycleDetected { cycle: Vec<String> },

    #[error("Record {record} references unknown node `{name}`")]
    UnknownReference { name: String, record: usize },

    #[error("Record {record} has an empty component name")]
    EmptyComponentName { record: usize },

    #[error("Component `{component}` is declared in both group `{first}` and group `{second}`")]
    ConflictingGroup {
        component: String,
        first: String,
        second: String,
    },

    /// The layer of `component` does not fit in `i32` for the configured layer base.
    #[error("Layer of `{component}` overflows i32 (layer base {base})")]
    LayerOverflow { component: String, base: i32 },

    /// The position of `component` does not fit in `i32` for the configured position base.
    #[error("Position of `{component}` overflows i32 (position base {base})")]
    PositionOverflow { component: String, base: i32 },
}

fn format_cycle(cycle: &[String]) -> String {
    let mut out = cycle.join(" -> ");
    if let Some(first) = cycle.first() {
        out.push_str(" -> ");
        out.push_str(first);
    }
    out
}
