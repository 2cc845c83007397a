//! Error Types
//!
//! Every failure in the pipeline is deterministic: it points at malformed
//! input or a broken internal invariant, never at a transient condition.

use crate::scc::ComponentId;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An edge references an endpoint that is malformed or not in the store.
    #[error("invalid edge `{edge}`: {reason}")]
    InvalidEdge { edge: String, reason: String },

    /// The topological sorter was handed a graph that is not acyclic.
    #[error(
        "graph is not acyclic: emitted {emitted} of {total} nodes, left with nonzero in-degree: [{}]",
        .residual.join(", ")
    )]
    CycleDetected {
        emitted: usize,
        total: usize,
        residual: Vec<String>,
    },

    /// A condensation edge violates the reverse-topological discovery order.
    #[error("condensation edge {from} -> {to} closes a cycle between components")]
    CondensationCycle { from: ComponentId, to: ComponentId },

    /// A partition was paired with a graph it was not computed from.
    #[error("partition covers {partition} nodes but the graph has {graph}")]
    PartitionMismatch { partition: usize, graph: usize },

    #[error("invalid pipeline options: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
