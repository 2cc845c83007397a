//! Strata Core
//!
//! This crate decomposes directed graphs into strongly connected components
//! and orders the result. It implements:
//!
//! - A graph store keyed by arbitrary hashable node identifiers
//! - Linear-time strongly connected component decomposition (Tarjan)
//! - The condensation graph: one node per component, deduplicated edges
//! - Topological ordering of the condensation (Kahn)
//!
//! Every stage is deterministic. Component numbering follows the order in
//! which nodes first appear in the input, and the topological sort uses a
//! documented tie-break, so repeated runs on the same input agree.
//!
//! # Architecture
//!
//! - `graph`: node and edge storage with forward and reverse adjacency
//! - `scc`: component decomposition and the resulting partition
//! - `condensation`: the component DAG and its acyclicity check
//! - `topo`: topological sort over any graph in the store
//! - `pipeline`: runs the stages in sequence
//! - `report`: sorted plain data for printing or rendering
//! - `input`: text edge-list parsing
//!
//! # Example
//!
//! ```rust
//! use strata_core::{analyze, DiGraph, PipelineOptions};
//!
//! let graph = DiGraph::from_edges([(4, 1), (1, 3), (3, 2), (2, 1), (3, 5)]);
//! let analysis = analyze(&graph, &PipelineOptions::default())?;
//!
//! let order: Vec<Vec<i32>> = analysis
//!     .order()
//!     .iter()
//!     .map(|&id| analysis.members(id))
//!     .collect();
//! assert_eq!(order, vec![vec![4], vec![1, 3, 2], vec![5]]);
//! # Ok::<(), strata_core::Error>(())
//! ```

pub mod condensation;
pub mod error;
pub mod graph;
pub mod input;
pub mod options;
pub mod pipeline;
pub mod report;
pub mod scc;
pub mod topo;

#[cfg(test)]
mod test;

pub use condensation::{condense, Condensation};
pub use error::{Error, Result};
pub use graph::{DiGraph, Node, NodeId};
pub use input::parse_edge_list;
pub use options::{PipelineOptions, ReadyOrder};
pub use pipeline::{analyze, Analysis};
pub use report::{ComponentReport, Report};
pub use scc::{decompose, Component, ComponentId, Partition};
pub use topo::{is_acyclic, topological_sort};
