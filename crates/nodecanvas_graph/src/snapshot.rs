// SPDX-License-Identifier: MIT OR Apache-2.0
//! Snapshot export/import: the single JSON wire format the store honors.

use crate::connection::Connection;
use crate::graph::GraphStore;
use crate::node::{Node, NodeId};
use serde::{Deserialize, Serialize};

/// Point-in-time view of all nodes and connections, in insertion order.
///
/// This is what renderers receive on every change and what round-trips
/// through export/import unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Nodes, in insertion order
    pub nodes: Vec<Node>,
    /// Connections, in insertion order
    pub connections: Vec<Connection>,
}

/// Error for snapshot import/export failures
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Malformed JSON: missing fields, wrong types, bad anchor names
    #[error("Snapshot parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A connection in the payload references a node the payload lacks
    #[error("Connection references missing node: {0:?}")]
    DanglingNode(NodeId),
}

impl GraphStore {
    /// Current snapshot of the whole graph
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes().cloned().collect(),
            connections: self.connections().to_vec(),
        }
    }

    /// Serialize the current snapshot to JSON
    pub fn export_snapshot(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    /// Parse a JSON snapshot and replace the store contents with it.
    ///
    /// All-or-nothing: the payload is parsed and every connection endpoint is
    /// checked against the payload's own nodes before anything is installed.
    /// On any failure the previous graph is left untouched.
    pub fn import_snapshot(&mut self, json: &str) -> Result<(), SnapshotError> {
        let snapshot: GraphSnapshot = serde_json::from_str(json)?;
        for connection in &snapshot.connections {
            for endpoint in [&connection.source, &connection.target] {
                if !snapshot.nodes.iter().any(|n| n.id == endpoint.node_id) {
                    return Err(SnapshotError::DanglingNode(endpoint.node_id));
                }
            }
        }
        tracing::debug!(
            nodes = snapshot.nodes.len(),
            connections = snapshot.connections.len(),
            "import snapshot"
        );
        self.replace_contents(snapshot.nodes, snapshot.connections);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::Anchor;
    use crate::connection::Endpoint;

    fn sample_store() -> GraphStore {
        let mut store = GraphStore::new();
        let a = store.add_node(None);
        let b = store.add_node(Some([250.0, 80.0]));
        store.add_node(None);
        store
            .add_connection(Endpoint::new(a, Anchor::Right), Endpoint::new(b, Anchor::Left))
            .unwrap();
        store
            .add_connection(Endpoint::new(b, Anchor::Bottom), Endpoint::new(a, Anchor::Top))
            .unwrap();
        store
    }

    #[test]
    fn export_import_round_trip() {
        let store = sample_store();
        let json = store.export_snapshot().unwrap();

        let mut restored = GraphStore::new();
        restored.import_snapshot(&json).unwrap();

        assert_eq!(restored.snapshot(), store.snapshot());
    }

    #[test]
    fn import_resumes_label_sequence() {
        let store = sample_store();
        let json = store.export_snapshot().unwrap();

        let mut restored = GraphStore::new();
        restored.import_snapshot(&json).unwrap();
        let next = restored.add_node(None);
        assert_eq!(restored.node(next).unwrap().label, "Node 4");
    }

    #[test]
    fn malformed_json_leaves_store_untouched() {
        let mut store = sample_store();
        let before = store.snapshot();

        assert!(matches!(
            store.import_snapshot("{\"nodes\": 7}"),
            Err(SnapshotError::Parse(_))
        ));
        assert!(store.import_snapshot("not json at all").is_err());

        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn dangling_connection_aborts_import() {
        let donor = sample_store();
        let mut snapshot = donor.snapshot();
        // Point one connection at a node the payload does not contain
        let ghost = NodeId::new();
        snapshot.connections[0].target.node_id = ghost;
        let json = serde_json::to_string(&snapshot).unwrap();

        let mut store = sample_store();
        let before = store.snapshot();
        match store.import_snapshot(&json) {
            Err(SnapshotError::DanglingNode(id)) => assert_eq!(id, ghost),
            other => panic!("expected DanglingNode, got {other:?}"),
        }
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn unknown_anchor_in_payload_is_a_parse_error() {
        let store = sample_store();
        let json = store.export_snapshot().unwrap().replace("\"right\"", "\"rigth\"");
        let mut target = GraphStore::new();
        assert!(matches!(
            target.import_snapshot(&json),
            Err(SnapshotError::Parse(_))
        ));
    }
}
