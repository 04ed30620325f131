// SPDX-License-Identifier: MIT OR Apache-2.0
//! Connection (edge) definitions for the canvas graph.

use crate::anchor::Anchor;
use crate::node::NodeId;
use serde::{Deserialize, Serialize};

/// One end of a connection: a node plus the anchor it attaches to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Node this endpoint attaches to
    pub node_id: NodeId,
    /// Anchor on that node's boundary
    pub anchor: Anchor,
}

impl Endpoint {
    /// Create a new endpoint
    pub fn new(node_id: NodeId, anchor: Anchor) -> Self {
        Self { node_id, anchor }
    }
}

/// A directed connection between two anchors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Where the connection starts
    pub source: Endpoint,
    /// Where the connection ends
    pub target: Endpoint,
}

impl Connection {
    /// Create a new connection
    pub fn new(source: Endpoint, target: Endpoint) -> Self {
        Self { source, target }
    }

    /// Check if this connection involves a specific node
    pub fn involves_node(&self, node_id: NodeId) -> bool {
        self.source.node_id == node_id || self.target.node_id == node_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn involves_either_end() {
        let a = NodeId::new();
        let b = NodeId::new();
        let other = NodeId::new();
        let conn = Connection::new(
            Endpoint::new(a, Anchor::Right),
            Endpoint::new(b, Anchor::Left),
        );
        assert!(conn.involves_node(a));
        assert!(conn.involves_node(b));
        assert!(!conn.involves_node(other));
    }
}
