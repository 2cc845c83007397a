//! Graph Nodes
//!
//! This module defines the node types that live in the graph store.

use std::fmt;

use indexmap::IndexSet;

/// Dense handle for a node in a [`DiGraph`](super::DiGraph).
///
/// Ids are handed out in the order keys are first seen, so iterating ids in
/// ascending order replays the input's first-appearance order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Get the position of this node in its store.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// A node in the graph store.
///
/// Adjacency is kept in both directions. Both sets preserve insertion order
/// so traversals are reproducible across runs.
#[derive(Debug, Clone)]
pub struct Node<K> {
    /// Handle for this node.
    id: NodeId,

    /// Caller-supplied identifier.
    key: K,

    /// Targets of outgoing edges.
    successors: IndexSet<NodeId>,

    /// Sources of incoming edges.
    predecessors: IndexSet<NodeId>,
}

impl<K> Node<K> {
    /// Create a node with no edges.
    pub(crate) fn new(id: NodeId, key: K) -> Self {
        Self {
            id,
            key,
            successors: IndexSet::new(),
            predecessors: IndexSet::new(),
        }
    }

    /// Get the node's ID.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Get the node's key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Record an outgoing edge. Returns `false` if it was already present.
    pub(crate) fn add_successor(&mut self, node_id: NodeId) -> bool {
        self.successors.insert(node_id)
    }

    /// Record an incoming edge. Returns `false` if it was already present.
    pub(crate) fn add_predecessor(&mut self, node_id: NodeId) -> bool {
        self.predecessors.insert(node_id)
    }

    /// Get all successors, in edge insertion order.
    pub fn successors(&self) -> &IndexSet<NodeId> {
        &self.successors
    }

    /// Get all predecessors, in edge insertion order.
    pub fn predecessors(&self) -> &IndexSet<NodeId> {
        &self.predecessors
    }

    /// Whether this node has an edge to itself.
    pub fn has_self_loop(&self) -> bool {
        self.successors.contains(&self.id)
    }

    pub fn out_degree(&self) -> usize {
        self.successors.len()
    }

    pub fn in_degree(&self) -> usize {
        self.predecessors.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_ids_order_by_index() {
        let a = NodeId::from(0);
        let b = NodeId::from(3);
        assert!(a < b);
        assert_eq!(b.index(), 3);
        assert_eq!(b.to_string(), "n3");
    }

    #[test]
    fn adjacency_is_a_set() {
        let mut node = Node::new(NodeId::from(0), "a");

        assert!(node.add_successor(NodeId::from(1)));
        assert!(node.add_successor(NodeId::from(2)));
        assert!(!node.add_successor(NodeId::from(1)));

        assert_eq!(node.out_degree(), 2);
        let order: Vec<_> = node.successors().iter().map(|id| id.index()).collect();
        assert_eq!(order, vec![1, 2]);
    }

    #[test]
    fn self_loop_is_tracked_in_both_directions() {
        let mut node = Node::new(NodeId::from(4), 'x');
        assert!(!node.has_self_loop());

        node.add_successor(NodeId::from(4));
        node.add_predecessor(NodeId::from(4));

        assert!(node.has_self_loop());
        assert_eq!(node.in_degree(), 1);
        assert_eq!(node.out_degree(), 1);
    }
}
