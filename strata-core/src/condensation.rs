//! Condensation Graph
//!
//! Contracts every strongly connected component to a single node. An edge
//! `Ci -> Cj` exists when some original edge leaves `Ci` and enters `Cj`
//! with `Ci != Cj`. Intra-component edges and self-loops vanish.

use std::hash::Hash;

use crate::error::{Error, Result};
use crate::graph::DiGraph;
use crate::options::ReadyOrder;
use crate::scc::{ComponentId, Partition};
use crate::topo;

/// The DAG of components derived from a graph and its partition.
#[derive(Debug, Clone)]
pub struct Condensation {
    /// One node per component, inserted in component-id order so that
    /// node ID and component ID coincide.
    graph: DiGraph<ComponentId>,
}

impl Condensation {
    /// The condensation as a plain graph keyed by component id.
    pub fn graph(&self) -> &DiGraph<ComponentId> {
        &self.graph
    }

    /// Deduplicated inter-component edges, in the order first produced.
    pub fn edges(&self) -> impl Iterator<Item = (ComponentId, ComponentId)> + '_ {
        self.graph.edges().map(|(&from, &to)| (from, to))
    }

    pub fn successors(&self, id: ComponentId) -> impl Iterator<Item = ComponentId> + '_ {
        self.graph.out_neighbors(&id).copied()
    }

    pub fn predecessors(&self, id: ComponentId) -> impl Iterator<Item = ComponentId> + '_ {
        self.graph.in_neighbors(&id).copied()
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// One valid topological order of the components.
    pub fn topological_order(&self, order: ReadyOrder) -> Result<Vec<ComponentId>> {
        topo::topological_sort(&self.graph, order)
    }

    /// Check that the condensation is acyclic.
    ///
    /// A partition from [`decompose`](crate::scc::decompose) numbers
    /// components in reverse topological order, so every edge normally runs
    /// from a higher id to a lower one and the check is a single edge scan.
    /// Only when some edge breaks that order does it fall back to a full
    /// cycle search. Any cycle contains at least one such edge, and the
    /// first one found is the one reported.
    pub fn verify(&self) -> Result<()> {
        let Some((from, to)) = self.edges().find(|(from, to)| from <= to) else {
            return Ok(());
        };
        if topo::is_acyclic(&self.graph) {
            tracing::debug!(%from, %to, "condensation edges out of discovery order");
            return Ok(());
        }
        Err(Error::CondensationCycle { from, to })
    }
}

/// Build the condensation of `graph` under `partition`.
///
/// Fails with [`Error::PartitionMismatch`] if `partition` does not cover
/// exactly the nodes of `graph`, and with [`Error::CondensationCycle`] if the
/// result is not a DAG. Neither can happen when `partition` was produced
/// from `graph`.
pub fn condense<K>(graph: &DiGraph<K>, partition: &Partition) -> Result<Condensation>
where
    K: Clone + Eq + Hash,
{
    if partition.node_count() != graph.node_count() {
        return Err(Error::PartitionMismatch {
            partition: partition.node_count(),
            graph: graph.node_count(),
        });
    }
    let condensation = build(graph, partition);
    condensation.verify()?;
    Ok(condensation)
}

/// Build without the acyclicity check.
pub(crate) fn build<K>(graph: &DiGraph<K>, partition: &Partition) -> Condensation
where
    K: Clone + Eq + Hash,
{
    let mut dag = DiGraph::new();
    for component in partition.components() {
        dag.add_node(component.id());
    }

    let mut dropped = 0usize;
    for (u, v) in graph.edge_ids() {
        let from = partition.component_of(u);
        let to = partition.component_of(v);
        if from == to {
            dropped += 1;
            continue;
        }
        dag.add_edge(from, to);
    }

    tracing::trace!(
        components = dag.node_count(),
        edges = dag.edge_count(),
        intra_component_edges = dropped,
        "built condensation"
    );

    Condensation { graph: dag }
}
