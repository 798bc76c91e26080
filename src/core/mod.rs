//! Core transition graph types and queries.
//!
//! This module contains the in-memory model of a labelled transition system:
//! - Nodes (explored states) and their outgoing step kinds
//! - Directed edges, observable or tau
//! - The graph container with parent/child, tau and closure queries
//!
//! Everything here is synchronous and single-owner. Queries are pure and
//! never fail on a partially built graph.

mod edge;
mod graph;
mod node;

pub use edge::Edge;
pub use graph::TransitionGraph;
pub use node::{Node, NodeId, NodeInfo, NodeKind};
