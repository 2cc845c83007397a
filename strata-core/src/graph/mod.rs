//! Graph Store
//!
//! This module holds the directed graph that every later stage reads from.
//!
//! # Overview
//!
//! - Nodes are opaque caller keys (integers, strings, anything hashable).
//! - Edges are ordered pairs without weight. Inserting the same pair twice
//!   is a no-op, so the edge collection is a set.
//! - Self-loops are ordinary edges.
//!
//! # Design Decisions
//!
//! 1. Keys are mapped to dense IDs on first sight. The algorithms index
//!    plain vectors by ID, and ascending ID order is first-appearance order.
//!
//! 2. Forward and reverse adjacency are both stored so that in- and
//!    out-neighbor queries are O(degree).
//!
//! 3. Every collection is insertion-ordered, which keeps traversal order,
//!    and therefore component numbering, reproducible.

mod node;
mod store;

pub use node::{Node, NodeId};
pub use store::DiGraph;
