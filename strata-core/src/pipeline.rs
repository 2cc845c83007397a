//! Analysis Pipeline
//!
//! Runs the stages in sequence on a finished graph:
//!
//! ```text
//! DiGraph --decompose--> Partition --condense--> Condensation --sort--> order
//! ```
//!
//! Each stage is a pure function of its input, so the pipeline holds no
//! state between calls.

use std::fmt::Debug;
use std::hash::Hash;

use crate::condensation::{self, Condensation};
use crate::error::Result;
use crate::graph::DiGraph;
use crate::options::PipelineOptions;
use crate::report::Report;
use crate::scc::{self, Component, ComponentId, Partition};

/// Everything the pipeline derives from one graph.
#[derive(Debug, Clone)]
pub struct Analysis<'g, K> {
    graph: &'g DiGraph<K>,
    partition: Partition,
    condensation: Condensation,
    order: Vec<ComponentId>,
}

impl<'g, K> Analysis<'g, K>
where
    K: Clone + Eq + Hash,
{
    /// The graph this analysis was computed from.
    pub fn graph(&self) -> &'g DiGraph<K> {
        self.graph
    }

    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    pub fn condensation(&self) -> &Condensation {
        &self.condensation
    }

    /// Component ids in topological order.
    pub fn order(&self) -> &[ComponentId] {
        &self.order
    }

    /// Components in topological order.
    pub fn ordered_components(&self) -> impl Iterator<Item = &Component> + '_ {
        self.order.iter().map(|&id| self.partition.component(id))
    }

    /// Keys of the members of `id`, in first-appearance order.
    pub fn members(&self, id: ComponentId) -> Vec<K> {
        self.partition
            .component(id)
            .members()
            .iter()
            .map(|&node| self.graph.key(node).clone())
            .collect()
    }

    /// The component that owns `key`, if `key` is in the graph.
    pub fn component_of(&self, key: &K) -> Option<ComponentId> {
        self.graph
            .node_id(key)
            .map(|node| self.partition.component_of(node))
    }

    /// Flatten the analysis into plain data for reporting.
    pub fn report(&self) -> Report<K>
    where
        K: Ord,
    {
        Report::new(self)
    }
}

/// Decompose, condense and sort `graph`.
pub fn analyze<'g, K>(
    graph: &'g DiGraph<K>,
    options: &PipelineOptions,
) -> Result<Analysis<'g, K>>
where
    K: Clone + Eq + Hash + Debug,
{
    let span = tracing::info_span!(
        "analyze",
        nodes = graph.node_count(),
        edges = graph.edge_count()
    );
    let _enter = span.enter();

    let partition = scc::decompose(graph);
    tracing::debug!(
        components = partition.len(),
        cyclic = partition.cyclic_components().count(),
        "strongly connected components found"
    );

    let condensation = if options.verify_condensation {
        condensation::condense(graph, &partition)?
    } else {
        condensation::build(graph, &partition)
    };
    tracing::debug!(
        components = condensation.len(),
        edges = condensation.edge_count(),
        "condensation built"
    );

    let order = condensation.topological_order(options.ready_order)?;
    tracing::debug!(ready_order = ?options.ready_order, "topological order computed");

    tracing::info!(
        components = partition.len(),
        condensation_edges = condensation.edge_count(),
        "analysis complete"
    );

    Ok(Analysis {
        graph,
        partition,
        condensation,
        order,
    })
}
