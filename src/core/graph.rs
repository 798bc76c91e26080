//! The transition graph container and its traversal queries.

use super::edge::Edge;
use super::node::{Node, NodeId};
use std::collections::{HashMap, HashSet, VecDeque};
use std::ops::Index;
use tracing::{debug, trace};

/// Owned, mutable labelled transition system.
///
/// Nodes are looked up through an id → position table, so storage order and
/// identity are independent. When two nodes share an id, the first one in
/// sequence order wins every lookup.
///
/// Queries never mutate the graph and report "not found" as `None` or an
/// empty list, so they are safe to call on a graph that is still being
/// built. Only [`TransitionGraph::is_tau`] and indexing panic, on an id
/// that names no node.
///
/// # Example
///
/// ```rust
/// use ltsgraph::core::{Edge, Node, TransitionGraph};
///
/// let graph = TransitionGraph::from_parts(
///     vec![Node::new(0), Node::new(1).with_tau(true), Node::new(2).with_tau(true)],
///     vec![Edge::tau(0, 1), Edge::tau(1, 2)],
/// );
///
/// assert_eq!(graph.children(0), vec![1]);
/// assert_eq!(graph.tau_closure(0), vec![1, 2]);
/// assert_eq!(graph.parent(1).map(|n| n.id), Some(0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TransitionGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    index: HashMap<NodeId, usize>,
}

fn build_index(nodes: &[Node]) -> HashMap<NodeId, usize> {
    let mut index = HashMap::with_capacity(nodes.len());
    for (position, node) in nodes.iter().enumerate() {
        index.entry(node.id).or_insert(position);
    }
    index
}

impl TransitionGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of an already-built node/edge snapshot.
    ///
    /// Nothing is validated; see [`crate::validation::validate`] for an
    /// on-demand audit.
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let index = build_index(&nodes);
        Self {
            nodes,
            edges,
            index,
        }
    }

    /// True iff the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Discard every node and edge.
    pub fn clear(&mut self) {
        debug!(
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            "clearing transition graph"
        );
        self.nodes.clear();
        self.edges.clear();
        self.index.clear();
    }

    /// Swap in a freshly explored snapshot.
    pub fn replace(&mut self, nodes: Vec<Node>, edges: Vec<Edge>) {
        debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            "replacing transition graph"
        );
        self.index = build_index(&nodes);
        self.nodes = nodes;
        self.edges = edges;
    }

    /// Append newly explored nodes and edges.
    pub fn extend(
        &mut self,
        nodes: impl IntoIterator<Item = Node>,
        edges: impl IntoIterator<Item = Edge>,
    ) {
        let (nodes_before, edges_before) = (self.nodes.len(), self.edges.len());

        for node in nodes {
            self.index.entry(node.id).or_insert(self.nodes.len());
            self.nodes.push(node);
        }
        self.edges.extend(edges);

        debug!(
            added_nodes = self.nodes.len() - nodes_before,
            added_edges = self.edges.len() - edges_before,
            "extended transition graph"
        );
    }

    /// Set or clear the selected flag of a node.
    ///
    /// Other nodes are left untouched. Returns `false` when no node has `id`.
    pub fn set_selected(&mut self, id: NodeId, selected: bool) -> bool {
        match self.index.get(&id) {
            Some(&position) => {
                self.nodes[position].selected = selected;
                true
            }
            None => false,
        }
    }

    /// Make `id` the only selected node.
    ///
    /// Returns `false` and leaves every flag as it was when no node has `id`.
    pub fn select(&mut self, id: NodeId) -> bool {
        if !self.contains(id) {
            return false;
        }
        for node in &mut self.nodes {
            node.selected = false;
        }
        self.set_selected(id, true)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Give the node and edge sequences back to the caller.
    pub fn into_parts(self) -> (Vec<Node>, Vec<Edge>) {
        (self.nodes, self.edges)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.index.get(&id).map(|&position| &self.nodes[position])
    }

    /// The focused node.
    ///
    /// If several nodes are marked selected, the first in sequence order is
    /// returned.
    pub fn selected(&self) -> Option<&Node> {
        self.nodes.iter().find(|node| node.selected)
    }

    /// Source of the first edge (in edge order) that ends at `id`.
    pub fn parent(&self, id: NodeId) -> Option<&Node> {
        self.edges
            .iter()
            .find(|edge| edge.to == id)
            .and_then(|edge| self.node(edge.from))
    }

    /// Target of the first edge (in edge order) that starts at `id`.
    pub fn child(&self, id: NodeId) -> Option<&Node> {
        self.edges
            .iter()
            .find(|edge| edge.from == id)
            .and_then(|edge| self.node(edge.to))
    }

    /// Whether the step into `id` was unobservable.
    ///
    /// # Panics
    ///
    /// Panics if no node has `id`.
    pub fn is_tau(&self, id: NodeId) -> bool {
        self[id].is_tau
    }

    /// Targets of every edge leaving `id`, in edge order, duplicates kept.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.edges
            .iter()
            .filter(|edge| edge.from == id)
            .map(|edge| edge.to)
            .collect()
    }

    /// Targets of the observable edges leaving `id`.
    ///
    /// Filters on the edge's own tau flag.
    pub fn non_tau_children(&self, id: NodeId) -> Vec<NodeId> {
        self.edges
            .iter()
            .filter(|edge| edge.from == id && !edge.is_tau)
            .map(|edge| edge.to)
            .collect()
    }

    /// Targets of edges leaving `id` whose target node is a tau node.
    ///
    /// Filters on the target node's tau flag, not the edge's. Targets that
    /// name no node are skipped.
    pub fn tau_children(&self, id: NodeId) -> Vec<NodeId> {
        self.edges
            .iter()
            .filter(|edge| edge.from == id && self.node(edge.to).is_some_and(|n| n.is_tau))
            .map(|edge| edge.to)
            .collect()
    }

    /// Every node reachable from `id` through one or more tau-children steps.
    ///
    /// Immediate tau children come first, then the rest in breadth-first
    /// discovery order, without duplicates. `id` itself appears only if a
    /// tau path leads back to it. Cycles are walked once.
    pub fn tau_closure(&self, id: NodeId) -> Vec<NodeId> {
        let mut seen = HashSet::new();
        let mut closure = Vec::new();
        let mut frontier = VecDeque::from([id]);

        while let Some(current) = frontier.pop_front() {
            for child in self.tau_children(current) {
                if seen.insert(child) {
                    closure.push(child);
                    frontier.push_back(child);
                } else {
                    trace!(from = current, to = child, "tau closure revisited node");
                }
            }
        }

        closure
    }

    /// Nodes a consumer should display, in sequence order.
    pub fn visible_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|node| node.is_visible)
    }

    /// Whether stepping can continue from `id`; `false` for unknown ids.
    pub fn steppable(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(|node| node.can_step)
    }
}

impl Index<NodeId> for TransitionGraph {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        match self.node(id) {
            Some(node) => node,
            None => panic!("no node with id {} in transition graph", id),
        }
    }
}
