//! Strongly Connected Components
//!
//! Splits a [`DiGraph`] into its strongly connected components: maximal sets
//! of nodes that can all reach one another.
//!
//! # Ordering
//!
//! Roots are tried in first-appearance order and successors are explored in
//! edge insertion order, so the same input always yields the same numbering.
//! Components are numbered in the order they complete, which for Tarjan's
//! algorithm is a reverse topological order of the condensation: every
//! inter-component edge points from a higher id to a lower one.

mod tarjan;

use std::fmt;

use serde::{Serialize, Serializer};
use smallvec::SmallVec;

use crate::graph::{DiGraph, NodeId};

/// Identifier of a component, assigned in discovery order starting at zero.
///
/// Displayed one-based as `C1..Ck`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentId(usize);

impl ComponentId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for ComponentId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0 + 1)
    }
}

impl Serialize for ComponentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One strongly connected component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    id: ComponentId,

    /// Member nodes, ascending by ID.
    members: SmallVec<[NodeId; 4]>,

    /// More than one member, or a single member with a self-loop.
    cyclic: bool,
}

impl Component {
    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn members(&self) -> &[NodeId] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether the component contains at least one directed cycle.
    pub fn is_cyclic(&self) -> bool {
        self.cyclic
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.members.binary_search(&node).is_ok()
    }
}

/// A partition of a graph's nodes into strongly connected components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    components: Vec<Component>,

    /// Owning component for each node, indexed by node ID.
    component_of: Vec<ComponentId>,
}

impl Partition {
    /// All components in discovery order. `components()[i].id().index() == i`.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn component(&self, id: ComponentId) -> &Component {
        &self.components[id.index()]
    }

    /// The component that owns `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` does not belong to the decomposed graph.
    pub fn component_of(&self, node: NodeId) -> ComponentId {
        self.component_of[node.index()]
    }

    pub fn cyclic_components(&self) -> impl Iterator<Item = &Component> + '_ {
        self.components.iter().filter(|c| c.is_cyclic())
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Number of nodes covered by the partition.
    pub fn node_count(&self) -> usize {
        self.component_of.len()
    }
}

/// Decompose `graph` into strongly connected components in O(V + E).
pub fn decompose<K>(graph: &DiGraph<K>) -> Partition {
    let raw = tarjan::strongly_connected(graph);

    let mut component_of = vec![ComponentId(usize::MAX); graph.node_count()];
    for (index, nodes) in raw.iter().enumerate() {
        for &node in nodes {
            component_of[node.index()] = ComponentId(index);
        }
    }

    debug_assert!(
        component_of.iter().all(|c| c.0 != usize::MAX),
        "every node must be assigned to a component"
    );

    // Bucket by ascending node id so member lists come out sorted.
    let mut buckets: Vec<SmallVec<[NodeId; 4]>> = raw
        .iter()
        .map(|nodes| SmallVec::with_capacity(nodes.len()))
        .collect();
    for node in graph.node_ids() {
        buckets[component_of[node.index()].index()].push(node);
    }

    let components: Vec<Component> = buckets
        .into_iter()
        .enumerate()
        .map(|(index, members)| {
            let cyclic = members.len() > 1 || graph.node(members[0]).has_self_loop();
            Component {
                id: ComponentId(index),
                members,
                cyclic,
            }
        })
        .collect();

    tracing::trace!(
        nodes = graph.node_count(),
        components = components.len(),
        "decomposed graph"
    );

    Partition {
        components,
        component_of,
    }
}
