//! Invariant checks over a transition graph snapshot.

use crate::core::{NodeId, TransitionGraph};
use crate::validation::violations::GraphViolation;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<GraphViolation>>;

/// Check every producer invariant, accumulating ALL violations.
///
/// Returns `Validation::Success(())` for a dense, well-formed graph with at
/// most one selected node.
pub fn validate(graph: &TransitionGraph) -> Check {
    let mut checks: Vec<Check> = Vec::new();

    // Ids are positions, each used once
    let mut seen = HashSet::new();
    for (position, node) in graph.nodes().iter().enumerate() {
        if node.id != position {
            checks.push(Validation::fail(GraphViolation::NonDenseId {
                position,
                id: node.id,
            }));
        }
        if !seen.insert(node.id) {
            checks.push(Validation::fail(GraphViolation::DuplicateId { id: node.id }));
        }
    }

    for (index, edge) in graph.edges().iter().enumerate() {
        if !graph.contains(edge.from) || !graph.contains(edge.to) {
            checks.push(Validation::fail(GraphViolation::DanglingEdge {
                index,
                from: edge.from,
                to: edge.to,
            }));
        }
    }

    let selected: Vec<NodeId> = graph
        .nodes()
        .iter()
        .filter(|node| node.selected)
        .map(|node| node.id)
        .collect();
    if selected.len() > 1 {
        checks.push(Validation::fail(GraphViolation::MultipleSelected {
            ids: selected,
        }));
    }

    Validation::all_vec(checks).map(|_| ())
}

impl TransitionGraph {
    /// Whether [`validate`] finds no violation.
    pub fn is_consistent(&self) -> bool {
        validate(self).is_success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Edge, Node};

    fn violations(graph: &TransitionGraph) -> Vec<GraphViolation> {
        match validate(graph) {
            Validation::Failure(errors) => errors.iter().cloned().collect(),
            Validation::Success(_) => Vec::new(),
        }
    }

    #[test]
    fn empty_graph_is_consistent() {
        assert!(TransitionGraph::new().is_consistent());
    }

    #[test]
    fn dense_graph_is_consistent() {
        let graph = TransitionGraph::from_parts(
            vec![Node::new(0).with_selected(true), Node::new(1).with_tau(true)],
            vec![Edge::tau(0, 1), Edge::tau(1, 0)],
        );

        assert!(validate(&graph).is_success());
        assert!(graph.is_consistent());
    }

    #[test]
    fn non_dense_ids_are_reported() {
        let graph = TransitionGraph::from_parts(vec![Node::new(0), Node::new(4)], vec![]);

        assert_eq!(
            violations(&graph),
            vec![GraphViolation::NonDenseId { position: 1, id: 4 }]
        );
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let graph = TransitionGraph::from_parts(vec![Node::new(0), Node::new(0)], vec![]);

        let found = violations(&graph);
        assert!(found.contains(&GraphViolation::DuplicateId { id: 0 }));
        assert!(found.contains(&GraphViolation::NonDenseId { position: 1, id: 0 }));
    }

    #[test]
    fn dangling_edges_are_reported() {
        let graph = TransitionGraph::from_parts(
            vec![Node::new(0), Node::new(1)],
            vec![Edge::action(0, 1), Edge::tau(1, 3), Edge::tau(8, 0)],
        );

        let found = violations(&graph);
        assert_eq!(found.len(), 2);
        assert!(found.contains(&GraphViolation::DanglingEdge {
            index: 1,
            from: 1,
            to: 3
        }));
        assert!(found.contains(&GraphViolation::DanglingEdge {
            index: 2,
            from: 8,
            to: 0
        }));
    }

    #[test]
    fn multiple_selections_are_reported() {
        let graph = TransitionGraph::from_parts(
            vec![
                Node::new(0).with_selected(true),
                Node::new(1),
                Node::new(2).with_selected(true),
            ],
            vec![],
        );

        assert_eq!(
            violations(&graph),
            vec![GraphViolation::MultipleSelected { ids: vec![0, 2] }]
        );
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let graph = TransitionGraph::from_parts(
            vec![
                Node::new(0).with_selected(true),
                Node::new(5).with_selected(true),
            ],
            vec![Edge::action(0, 9)],
        );

        let found = violations(&graph);
        assert_eq!(found.len(), 3);
        assert!(found
            .iter()
            .any(|v| matches!(v, GraphViolation::NonDenseId { .. })));
        assert!(found
            .iter()
            .any(|v| matches!(v, GraphViolation::DanglingEdge { .. })));
        assert!(found
            .iter()
            .any(|v| matches!(v, GraphViolation::MultipleSelected { .. })));
        assert!(!graph.is_consistent());
    }

    #[test]
    fn violation_messages_name_the_offender() {
        let message = GraphViolation::DanglingEdge {
            index: 2,
            from: 1,
            to: 7,
        }
        .to_string();

        assert!(message.contains("#2"));
        assert!(message.contains("1 -> 7"));
    }
}
