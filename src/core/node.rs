//! Node types for the transition graph.
//!
//! A node is one explored program/process state. Everything except the
//! identity, tau flag, selection and stepping flags is carried through
//! unexamined for the consumer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifier of a node within one graph snapshot.
pub type NodeId = usize;

/// Kind of step a node offers next.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum NodeKind {
    /// Next step is unobservable
    #[default]
    #[serde(rename = "tau")]
    Tau,
    /// The system is offering a choice of observable actions
    #[serde(rename = "action request")]
    ActionRequest,
    /// No further steps
    #[serde(rename = "done")]
    Done,
}

impl NodeKind {
    /// True for `Done`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, NodeKind::Done)
    }

    /// True for `ActionRequest`.
    pub fn awaits_action(&self) -> bool {
        matches!(self, NodeKind::ActionRequest)
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKind::Tau => write!(f, "tau"),
            NodeKind::ActionRequest => write!(f, "action request"),
            NodeKind::Done => write!(f, "done"),
        }
    }
}

impl std::str::FromStr for NodeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tau" => Ok(NodeKind::Tau),
            "action request" => Ok(NodeKind::ActionRequest),
            "done" => Ok(NodeKind::Done),
            _ => Err(format!("Unknown node kind: {}", s)),
        }
    }
}

/// Outgoing step classification plus a free-text debug label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct NodeInfo {
    pub kind: NodeKind,
    #[serde(default)]
    pub debug: String,
}

impl NodeInfo {
    pub fn new(kind: NodeKind, debug: impl Into<String>) -> Self {
        Self {
            kind,
            debug: debug.into(),
        }
    }
}

/// A vertex of the transition graph.
///
/// Field names on the wire follow the producer's record layout
/// (`isVisible`, `isTau`, `loc`, `mem`, `env`, `can_step`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Node {
    /// Identity within the snapshot
    pub id: NodeId,
    /// Opaque serialized execution state
    #[serde(default)]
    pub state: Option<String>,
    /// Whether a consumer should display this node
    #[serde(rename = "isVisible", default)]
    pub is_visible: bool,
    /// Whether the step that produced this node was unobservable
    #[serde(rename = "isTau", default)]
    pub is_tau: bool,
    /// Opaque source-position annotation
    #[serde(rename = "loc", default)]
    pub location: Option<Value>,
    /// Opaque memory snapshot
    #[serde(rename = "mem", default)]
    pub memory: Value,
    /// Kind of the outgoing step
    #[serde(default)]
    pub info: NodeInfo,
    /// Execution context tag
    #[serde(rename = "env", default)]
    pub environment: String,
    /// Memory arena tag
    #[serde(default)]
    pub arena: String,
    /// Whether this is the focused node
    #[serde(default)]
    pub selected: bool,
    /// Whether stepping can continue from here
    #[serde(default)]
    pub can_step: bool,
}

impl Node {
    /// Create a visible, non-tau, unselected node with empty payloads.
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            is_visible: true,
            ..Self::default()
        }
    }

    /// Mark the incoming step as tau (or not).
    pub fn with_tau(mut self, is_tau: bool) -> Self {
        self.is_tau = is_tau;
        self
    }

    pub fn with_info(mut self, info: NodeInfo) -> Self {
        self.info = info;
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_visible(mut self, is_visible: bool) -> Self {
        self.is_visible = is_visible;
        self
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn with_can_step(mut self, can_step: bool) -> Self {
        self.can_step = can_step;
        self
    }

    /// Whether this node's outgoing step kind is `Done`.
    pub fn is_done(&self) -> bool {
        self.info.kind.is_terminal()
    }
}
