//! Graph Store
//!
//! `DiGraph` owns the nodes and directed edges of a graph. Keys are mapped
//! to dense [`NodeId`]s on first sight, which gives the algorithms array
//! indexing while callers keep working with their own identifiers.

use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};

use super::node::{Node, NodeId};
use crate::error::{Error, Result};

/// A directed graph without parallel edges.
///
/// Nodes and edges are both kept in insertion order.
#[derive(Debug, Clone)]
pub struct DiGraph<K> {
    /// Key -> id lookup. The entry index equals the id.
    index: IndexMap<K, NodeId>,

    /// All nodes, indexed by ID.
    nodes: Vec<Node<K>>,

    /// Every distinct edge, in the order it was first inserted.
    edges: IndexSet<(NodeId, NodeId)>,
}

impl<K> DiGraph<K>
where
    K: Clone + Eq + Hash,
{
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            index: IndexMap::new(),
            nodes: Vec::new(),
            edges: IndexSet::new(),
        }
    }

    /// Build a graph from an ordered edge list.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (K, K)>,
    {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Insert a node if it is absent and return its ID.
    pub fn add_node(&mut self, key: K) -> NodeId {
        if let Some(&id) = self.index.get(&key) {
            return id;
        }
        let id = NodeId::from(self.nodes.len());
        self.index.insert(key.clone(), id);
        self.nodes.push(Node::new(id, key));
        id
    }

    /// Insert the edge `u -> v`, adding either endpoint if absent.
    ///
    /// Repeated inserts of the same edge have no effect.
    pub fn add_edge(&mut self, u: K, v: K) -> (NodeId, NodeId) {
        let source = self.add_node(u);
        let target = self.add_node(v);
        self.link(source, target);
        (source, target)
    }

    /// Insert an edge between two nodes that are already in the store.
    ///
    /// Returns whether the edge was new.
    pub fn connect(&mut self, source: NodeId, target: NodeId) -> Result<bool> {
        for endpoint in [source, target] {
            if endpoint.index() >= self.nodes.len() {
                return Err(Error::InvalidEdge {
                    edge: format!("{source} -> {target}"),
                    reason: format!(
                        "endpoint {endpoint} is not in a graph of {} nodes",
                        self.nodes.len()
                    ),
                });
            }
        }
        Ok(self.link(source, target))
    }

    fn link(&mut self, source: NodeId, target: NodeId) -> bool {
        if !self.edges.insert((source, target)) {
            return false;
        }
        self.nodes[source.index()].add_successor(target);
        self.nodes[target.index()].add_predecessor(source);
        true
    }

    /// Look up the ID for a key.
    pub fn node_id(&self, key: &K) -> Option<NodeId> {
        self.index.get(key).copied()
    }

    pub fn contains_node(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    pub fn contains_edge(&self, u: &K, v: &K) -> bool {
        match (self.node_id(u), self.node_id(v)) {
            (Some(source), Some(target)) => self.edges.contains(&(source, target)),
            _ => false,
        }
    }

    /// All keys, in first-appearance order.
    pub fn nodes(&self) -> impl Iterator<Item = &K> + '_ {
        self.index.keys()
    }

    /// All edges as key pairs, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&K, &K)> + '_ {
        self.edges
            .iter()
            .map(|&(source, target)| (self.key(source), self.key(target)))
    }

    /// Keys reachable by one outgoing edge. Empty for unknown keys.
    pub fn out_neighbors<'a>(&'a self, key: &K) -> impl Iterator<Item = &'a K> + 'a {
        self.node_id(key)
            .into_iter()
            .flat_map(move |id| self.successors(id).iter())
            .map(move |&id| self.key(id))
    }

    /// Keys with an edge into `key`. Empty for unknown keys.
    pub fn in_neighbors<'a>(&'a self, key: &K) -> impl Iterator<Item = &'a K> + 'a {
        self.node_id(key)
            .into_iter()
            .flat_map(move |id| self.predecessors(id).iter())
            .map(move |&id| self.key(id))
    }
}

impl<K> DiGraph<K> {
    /// Get a node by ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not handed out by this graph.
    pub fn node(&self, id: NodeId) -> &Node<K> {
        &self.nodes[id.index()]
    }

    pub fn key(&self, id: NodeId) -> &K {
        self.node(id).key()
    }

    pub fn successors(&self, id: NodeId) -> &IndexSet<NodeId> {
        self.node(id).successors()
    }

    pub fn predecessors(&self, id: NodeId) -> &IndexSet<NodeId> {
        self.node(id).predecessors()
    }

    /// All node IDs in ascending (first-appearance) order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().map(Node::id)
    }

    /// All edges as ID pairs, in insertion order.
    pub fn edge_ids(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.edges.iter().copied()
    }

    /// Get the total number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of distinct edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<K> Default for DiGraph<K>
where
    K: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> FromIterator<(K, K)> for DiGraph<K>
where
    K: Clone + Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (K, K)>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

impl<K> Extend<(K, K)> for DiGraph<K>
where
    K: Clone + Eq + Hash,
{
    fn extend<I: IntoIterator<Item = (K, K)>>(&mut self, iter: I) {
        for (u, v) in iter {
            self.add_edge(u, v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_inserts_both_endpoints() {
        let mut graph = DiGraph::new();
        graph.add_edge("a", "b");

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.contains_node(&"a"));
        assert!(graph.contains_node(&"b"));
        assert!(graph.contains_edge(&"a", &"b"));
        assert!(!graph.contains_edge(&"b", &"a"));
    }

    #[test]
    fn duplicate_edges_are_idempotent() {
        let mut graph = DiGraph::from_edges([(1, 2), (1, 2), (2, 3), (1, 2)]);
        graph.add_edge(2, 3);

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.out_neighbors(&1).count(), 1);
        assert_eq!(graph.in_neighbors(&3).count(), 1);
    }

    #[test]
    fn nodes_keep_first_appearance_order() {
        let graph = DiGraph::from_edges([(4, 1), (4, 2), (2, 1), (1, 3)]);
        let nodes: Vec<_> = graph.nodes().copied().collect();
        assert_eq!(nodes, vec![4, 1, 2, 3]);

        let ids: Vec<_> = graph.node_ids().map(|id| *graph.key(id)).collect();
        assert_eq!(ids, nodes);
    }

    #[test]
    fn neighbors_in_both_directions() {
        let graph = DiGraph::from_edges([("x", "y"), ("x", "z"), ("z", "y")]);

        let out: Vec<_> = graph.out_neighbors(&"x").copied().collect();
        assert_eq!(out, vec!["y", "z"]);

        let inn: Vec<_> = graph.in_neighbors(&"y").copied().collect();
        assert_eq!(inn, vec!["x", "z"]);

        assert_eq!(graph.out_neighbors(&"missing").count(), 0);
        assert_eq!(graph.in_neighbors(&"missing").count(), 0);
    }

    #[test]
    fn self_loop_counts_once() {
        let mut graph = DiGraph::new();
        graph.add_edge(7, 7);
        graph.add_edge(7, 7);

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 1);
        let id = graph.node_id(&7).unwrap();
        assert!(graph.node(id).has_self_loop());
        assert_eq!(graph.successors(id).len(), 1);
        assert_eq!(graph.predecessors(id).len(), 1);
    }

    #[test]
    fn isolated_nodes_are_kept() {
        let mut graph: DiGraph<u32> = DiGraph::new();
        let a = graph.add_node(10);
        let again = graph.add_node(10);

        assert_eq!(a, again);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn connect_rejects_unknown_endpoints() {
        let mut graph = DiGraph::from_edges([("a", "b")]);
        let a = graph.node_id(&"a").unwrap();

        let err = graph.connect(a, NodeId::from(9)).unwrap_err();
        assert!(matches!(err, Error::InvalidEdge { .. }));
        assert!(err.to_string().contains("n9"));
        assert_eq!(graph.edge_count(), 1);

        let b = graph.node_id(&"b").unwrap();
        assert!(graph.connect(b, a).unwrap());
        assert!(!graph.connect(b, a).unwrap());
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn empty_graph() {
        let graph: DiGraph<String> = DiGraph::default();
        assert!(graph.is_empty());
        assert_eq!(graph.nodes().count(), 0);
        assert_eq!(graph.edges().count(), 0);
    }
}
