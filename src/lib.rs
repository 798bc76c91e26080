//! ltsgraph: an in-memory labelled transition system for process explorers.
//!
//! A stepping or model-checking front end produces explored states (nodes)
//! and the transitions between them (edges). Some transitions are
//! observable actions, others are internal "tau" steps. This crate holds
//! that graph, tracks which node is selected, and answers the traversal
//! questions a consumer needs to render it and collapse tau steps into an
//! observable trace.
//!
//! # Core Concepts
//!
//! - **TransitionGraph**: owned nodes and edges with id-indexed lookup
//! - **Tau closure**: every node reachable through unobservable steps,
//!   computed with a worklist so cyclic tau loops terminate
//! - **Validation**: on-demand audit of the producer's invariants that
//!   reports every violation at once
//!
//! # Example
//!
//! ```rust
//! use ltsgraph::core::{Edge, Node, TransitionGraph};
//!
//! let mut graph = TransitionGraph::from_parts(
//!     vec![
//!         Node::new(0),
//!         Node::new(1).with_tau(true),
//!         Node::new(2).with_tau(true),
//!         Node::new(3),
//!     ],
//!     vec![Edge::tau(0, 1), Edge::tau(1, 2), Edge::tau(2, 1), Edge::action(2, 3)],
//! );
//!
//! graph.select(0);
//! assert_eq!(graph.selected().map(|n| n.id), Some(0));
//! assert_eq!(graph.tau_closure(0), vec![1, 2]);
//! assert_eq!(graph.non_tau_children(2), vec![3]);
//!
//! graph.clear();
//! assert!(graph.is_empty());
//! ```

pub mod core;
pub mod validation;

// Re-export commonly used types
pub use core::{Edge, Node, NodeId, NodeInfo, NodeKind, TransitionGraph};
pub use validation::{validate, GraphViolation};
