//! Tarjan's algorithm with an explicit frame stack.
//!
//! Each node gets a discovery index and a low-link: the smallest discovery
//! index reachable through the DFS tree plus one back or cross edge into a
//! node that is still open. A node whose low-link equals its own index is
//! the root of a component, and everything above it on the open stack
//! belongs to that component.

use smallvec::SmallVec;

use crate::graph::{DiGraph, NodeId};

/// A DFS activation: the node and the position of the next successor to try.
struct Frame {
    node: NodeId,
    next: usize,
}

struct TarjanState {
    next_index: usize,
    index_of: Vec<Option<usize>>,
    lowlink: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<NodeId>,
    components: Vec<SmallVec<[NodeId; 4]>>,
}

impl TarjanState {
    fn new(node_count: usize) -> Self {
        Self {
            next_index: 0,
            index_of: vec![None; node_count],
            lowlink: vec![0; node_count],
            on_stack: vec![false; node_count],
            stack: Vec::new(),
            components: Vec::new(),
        }
    }

    fn open(&mut self, v: NodeId) {
        let i = v.index();
        self.index_of[i] = Some(self.next_index);
        self.lowlink[i] = self.next_index;
        self.next_index += 1;
        self.stack.push(v);
        self.on_stack[i] = true;
    }

    fn strongconnect<K>(&mut self, graph: &DiGraph<K>, root: NodeId) {
        self.open(root);
        let mut frames = vec![Frame { node: root, next: 0 }];

        while let Some(frame) = frames.last_mut() {
            let v = frame.node;

            if let Some(&w) = graph.successors(v).get_index(frame.next) {
                frame.next += 1;
                match self.index_of[w.index()] {
                    None => {
                        self.open(w);
                        frames.push(Frame { node: w, next: 0 });
                    }
                    Some(w_index) if self.on_stack[w.index()] => {
                        let low = &mut self.lowlink[v.index()];
                        *low = (*low).min(w_index);
                    }
                    // Finished node in an already emitted component.
                    Some(_) => {}
                }
                continue;
            }

            // All successors explored: v is finished.
            frames.pop();
            let v_low = self.lowlink[v.index()];
            if let Some(parent) = frames.last() {
                let low = &mut self.lowlink[parent.node.index()];
                *low = (*low).min(v_low);
            }

            if Some(v_low) == self.index_of[v.index()] {
                self.emit(v);
            }
        }
    }

    /// Pop the open stack down to and including `root` as one component.
    fn emit(&mut self, root: NodeId) {
        let mut component = SmallVec::new();
        while let Some(w) = self.stack.pop() {
            self.on_stack[w.index()] = false;
            component.push(w);
            if w == root {
                break;
            }
        }
        self.components.push(component);
    }
}

/// Raw components in completion order; members are in pop order.
pub(super) fn strongly_connected<K>(graph: &DiGraph<K>) -> Vec<SmallVec<[NodeId; 4]>> {
    let mut state = TarjanState::new(graph.node_count());

    for v in graph.node_ids() {
        if state.index_of[v.index()].is_none() {
            state.strongconnect(graph, v);
        }
    }

    debug_assert!(state.stack.is_empty(), "tarjan stack must drain");
    state.components
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_cycles_joined_by_a_bridge() {
        // 0 <-> 1 -> 2 <-> 3
        let graph = DiGraph::from_edges([(0, 1), (1, 0), (1, 2), (2, 3), (3, 2)]);
        let components = strongly_connected(&graph);

        assert_eq!(components.len(), 2);
        let mut sink: Vec<_> = components[0].iter().map(|&id| *graph.key(id)).collect();
        sink.sort();
        assert_eq!(sink, vec![2, 3]);
    }

    #[test]
    fn deep_chain_does_not_recurse() {
        let n = 200_000;
        let graph = DiGraph::from_edges((0..n).map(|i| (i, i + 1)));
        let components = strongly_connected(&graph);
        assert_eq!(components.len(), n + 1);
    }

    #[test]
    fn deep_cycle_is_one_component() {
        let n = 100_000;
        let graph = DiGraph::from_edges((0..n).map(|i| (i, (i + 1) % n)));
        let components = strongly_connected(&graph);
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].len(), n);
    }
}
