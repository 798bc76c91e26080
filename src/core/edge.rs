//! Directed transitions between nodes.

use super::node::NodeId;
use serde::{Deserialize, Serialize};

/// A directed transition from one node to another.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    /// Whether this transition is an unobservable step
    #[serde(rename = "isTau", default)]
    pub is_tau: bool,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId, is_tau: bool) -> Self {
        Self { from, to, is_tau }
    }

    /// An unobservable transition.
    pub fn tau(from: NodeId, to: NodeId) -> Self {
        Self::new(from, to, true)
    }

    /// An observable transition.
    pub fn action(from: NodeId, to: NodeId) -> Self {
        Self::new(from, to, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_tau_flag() {
        assert!(Edge::tau(0, 1).is_tau);
        assert!(!Edge::action(0, 1).is_tau);
        assert_eq!(Edge::new(2, 3, true), Edge::tau(2, 3));
    }

    #[test]
    fn edge_uses_producer_field_names() {
        let edge: Edge = serde_json::from_str(r#"{"from":0,"to":4,"isTau":true}"#).unwrap();
        assert_eq!(edge, Edge::tau(0, 4));

        let untagged: Edge = serde_json::from_str(r#"{"from":1,"to":2}"#).unwrap();
        assert!(!untagged.is_tau);
    }
}
