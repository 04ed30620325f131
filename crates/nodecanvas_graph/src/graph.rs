// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph store: the authoritative set of nodes and connections.

use crate::connection::{Connection, Endpoint};
use crate::node::{Node, NodeId, DEFAULT_NODE_HEIGHT, DEFAULT_NODE_WIDTH};
use indexmap::IndexMap;

/// Default cascade position for the first node
const CASCADE_X: f32 = 100.0;
const CASCADE_Y: f32 = 100.0;
/// Vertical step between cascaded default positions
const CASCADE_STEP: f32 = 50.0;

/// Owns all nodes and connections and enforces referential integrity.
///
/// Nodes keep insertion order; connections are an ordered sequence addressed
/// by index. Deleting a node cascades to every connection referencing it, so
/// a connection to a missing node is unrepresentable through this API.
#[derive(Debug, Clone)]
pub struct GraphStore {
    nodes: IndexMap<NodeId, Node>,
    connections: Vec<Connection>,
    /// Sequence for generated labels, owned by the store
    label_seq: u64,
    node_width: f32,
    node_height: f32,
}

impl GraphStore {
    /// Create a new empty store with default node dimensions
    pub fn new() -> Self {
        Self::with_node_size(DEFAULT_NODE_WIDTH, DEFAULT_NODE_HEIGHT)
    }

    /// Create a new empty store with custom dimensions for added nodes
    pub fn with_node_size(width: f32, height: f32) -> Self {
        Self {
            nodes: IndexMap::new(),
            connections: Vec::new(),
            label_seq: 0,
            node_width: width,
            node_height: height,
        }
    }

    /// Add a node at the given position, or at the next cascade position.
    ///
    /// The cascade walks down from (100, 100) in 50-unit steps so freshly
    /// added nodes never stack exactly on top of each other. Labels come from
    /// the store-owned sequence. Never fails.
    pub fn add_node(&mut self, position: Option<[f32; 2]>) -> NodeId {
        let position = position.unwrap_or_else(|| self.next_cascade_position());
        self.label_seq += 1;
        let node = Node::new(format!("Node {}", self.label_seq), position[0], position[1])
            .with_size(self.node_width, self.node_height);
        let id = node.id;
        tracing::debug!(node = ?id, label = %node.label, "add node");
        self.nodes.insert(id, node);
        id
    }

    fn next_cascade_position(&self) -> [f32; 2] {
        [CASCADE_X, CASCADE_Y + CASCADE_STEP * self.nodes.len() as f32]
    }

    /// Move a node to a new position. No-op if the node is absent; node
    /// order is unchanged either way.
    pub fn move_node(&mut self, node_id: NodeId, x: f32, y: f32) {
        if let Some(node) = self.nodes.get_mut(&node_id) {
            node.position = [x, y];
        }
    }

    /// Remove a node and every connection referencing it. Idempotent:
    /// deleting an absent node is a no-op.
    pub fn delete_node(&mut self, node_id: NodeId) -> Option<Node> {
        // shift_remove keeps the remaining nodes in insertion order
        let removed = self.nodes.shift_remove(&node_id);
        if removed.is_some() {
            self.connections.retain(|c| !c.involves_node(node_id));
            tracing::debug!(node = ?node_id, "delete node");
        }
        removed
    }

    /// Append a connection between two endpoints.
    ///
    /// Both endpoint nodes must currently exist; a connection to a missing
    /// node is rejected with [`GraphError::NodeNotFound`] rather than left
    /// dangling. Duplicates and self-connections are permitted.
    pub fn add_connection(&mut self, source: Endpoint, target: Endpoint) -> Result<(), GraphError> {
        for endpoint in [&source, &target] {
            if !self.nodes.contains_key(&endpoint.node_id) {
                tracing::warn!(node = ?endpoint.node_id, "connection to missing node rejected");
                return Err(GraphError::NodeNotFound(endpoint.node_id));
            }
        }
        self.connections.push(Connection::new(source, target));
        Ok(())
    }

    /// Remove the connection at `index`. Out-of-range is a no-op.
    pub fn delete_connection(&mut self, index: usize) -> Option<Connection> {
        if index < self.connections.len() {
            Some(self.connections.remove(index))
        } else {
            None
        }
    }

    /// Get a node by ID
    pub fn node(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.get(&node_id)
    }

    /// Whether a node with this ID is currently in the store
    pub fn contains_node(&self, node_id: NodeId) -> bool {
        self.nodes.contains_key(&node_id)
    }

    /// All nodes, in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// All connections, in insertion order
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of connections
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Replace the entire contents from parts already validated against each
    /// other. The label sequence resumes at the node count so later adds keep
    /// numbering from where the imported graph left off.
    pub(crate) fn replace_contents(&mut self, nodes: Vec<Node>, connections: Vec<Connection>) {
        self.label_seq = nodes.len() as u64;
        self.nodes = nodes.into_iter().map(|n| (n.id, n)).collect();
        self.connections = connections;
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Error for store operations referencing a missing record
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Node not found
    #[error("Node not found: {0:?}")]
    NodeNotFound(NodeId),
}
