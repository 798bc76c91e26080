//! Violations of the producer's graph invariants.

use crate::core::NodeId;
use thiserror::Error;

/// A broken structural invariant found by [`crate::validation::validate`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraphViolation {
    #[error("Node at position {position} has id {id}, expected ids to match positions")]
    NonDenseId { position: usize, id: NodeId },

    #[error("Node id {id} is used by more than one node")]
    DuplicateId { id: NodeId },

    #[error("Edge #{index} ({from} -> {to}) references a node that does not exist")]
    DanglingEdge {
        index: usize,
        from: NodeId,
        to: NodeId,
    },

    #[error("More than one node is selected: {ids:?}")]
    MultipleSelected { ids: Vec<NodeId> },
}
