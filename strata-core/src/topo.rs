//! Topological Sorting
//!
//! Orders the nodes of a DAG so that every edge points forward.
//!
//! # Algorithm
//!
//! Kahn's algorithm:
//!
//! 1. Count the in-degree of every node
//! 2. Seed a readiness queue with every node of in-degree zero
//! 3. Repeatedly take a ready node, emit it, and decrement the in-degree of
//!    its successors, queueing any that reach zero
//! 4. If the queue runs dry before every node is emitted, the leftover
//!    nodes sit on or behind a cycle
//!
//! Which ready node goes next is decided by [`ReadyOrder`].

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};
use std::fmt::Debug;

use crate::error::{Error, Result};
use crate::graph::{DiGraph, NodeId};
use crate::options::ReadyOrder;

/// The set of nodes whose predecessors have all been emitted.
enum ReadyQueue {
    Fifo(VecDeque<NodeId>),
    LowestId(BinaryHeap<Reverse<NodeId>>),
}

impl ReadyQueue {
    fn new(order: ReadyOrder) -> Self {
        match order {
            ReadyOrder::Fifo => Self::Fifo(VecDeque::new()),
            ReadyOrder::LowestId => Self::LowestId(BinaryHeap::new()),
        }
    }

    fn push(&mut self, id: NodeId) {
        match self {
            Self::Fifo(queue) => queue.push_back(id),
            Self::LowestId(heap) => heap.push(Reverse(id)),
        }
    }

    fn pop(&mut self) -> Option<NodeId> {
        match self {
            Self::Fifo(queue) => queue.pop_front(),
            Self::LowestId(heap) => heap.pop().map(|Reverse(id)| id),
        }
    }
}

/// Perform a topological sort of `graph`.
///
/// Returns keys in an order where every edge's source precedes its target.
/// Fails with [`Error::CycleDetected`] if the graph has a cycle; self-loops
/// count as cycles.
pub fn topological_sort<K>(graph: &DiGraph<K>, order: ReadyOrder) -> Result<Vec<K>>
where
    K: Clone + Debug,
{
    let total = graph.node_count();
    let mut in_degree: Vec<usize> = graph
        .node_ids()
        .map(|id| graph.predecessors(id).len())
        .collect();

    let mut ready = ReadyQueue::new(order);
    for id in graph.node_ids() {
        if in_degree[id.index()] == 0 {
            ready.push(id);
        }
    }

    let mut result = Vec::with_capacity(total);
    while let Some(id) = ready.pop() {
        result.push(graph.key(id).clone());

        for &successor in graph.successors(id) {
            let degree = &mut in_degree[successor.index()];
            *degree -= 1;
            if *degree == 0 {
                ready.push(successor);
            }
        }
    }

    if result.len() < total {
        let residual: Vec<String> = graph
            .node_ids()
            .filter(|id| in_degree[id.index()] > 0)
            .map(|id| format!("{:?}", graph.key(id)))
            .collect();
        tracing::warn!(
            emitted = result.len(),
            total,
            residual = residual.len(),
            "topological sort stopped early"
        );
        return Err(Error::CycleDetected {
            emitted: result.len(),
            total,
            residual,
        });
    }

    Ok(result)
}

/// Whether `graph` has no directed cycle.
pub fn is_acyclic<K>(graph: &DiGraph<K>) -> bool
where
    K: Clone + Debug,
{
    topological_sort(graph, ReadyOrder::Fifo).is_ok()
}
