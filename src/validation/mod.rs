//! Structural audit of a transition graph.
//!
//! The graph itself never rejects a snapshot: a producer may hand over a
//! half-built graph and queries must keep working. This module checks the
//! producer's invariants on demand and, using Stillwater's `Validation`,
//! reports every violation in one pass instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use ltsgraph::core::{Edge, Node, TransitionGraph};
//! use ltsgraph::validation::{validate, GraphViolation};
//! use stillwater::validation::Validation;
//!
//! let graph = TransitionGraph::from_parts(
//!     vec![Node::new(0), Node::new(2)],
//!     vec![Edge::action(0, 5)],
//! );
//!
//! match validate(&graph) {
//!     Validation::Failure(violations) => assert_eq!(violations.len(), 2),
//!     Validation::Success(_) => unreachable!(),
//! }
//! ```

mod rules;
mod violations;

pub use rules::validate;
pub use violations::GraphViolation;
