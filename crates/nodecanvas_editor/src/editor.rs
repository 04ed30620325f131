// SPDX-License-Identifier: MIT OR Apache-2.0
//! Editor facade: commands in, snapshots out.
//!
//! Owns the graph store and the connection-draft machine. Every command that
//! changes the graph publishes the new snapshot synchronously to all
//! subscribers before the command returns, so renderers always paint the
//! latest committed state.

use crate::config::EditorConfig;
use crate::draft::DraftState;
use indexmap::IndexMap;
use nodecanvas_graph::{
    Anchor, Endpoint, GraphSnapshot, GraphStore, NodeId, Point, SnapshotError,
};

/// Handle returned by [`Editor::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Listener = Box<dyn FnMut(&GraphSnapshot)>;

/// The interaction core of the editor.
///
/// Single-threaded and event-driven: each command is fully processed, with
/// subscribers notified, before the next one runs. Rendering layers drive it
/// through the command methods (or [`Editor::handle_event`]) and observe it
/// through subscriptions.
pub struct Editor {
    store: GraphStore,
    draft: DraftState,
    subscribers: IndexMap<SubscriberId, Listener>,
    next_subscriber: u64,
}

impl Editor {
    /// Create an editor with default configuration
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    /// Create an editor with the given node dimensions
    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            store: GraphStore::with_node_size(config.node_width, config.node_height),
            draft: DraftState::new(),
            subscribers: IndexMap::new(),
            next_subscriber: 0,
        }
    }

    /// Register a listener for snapshot updates. Listeners are invoked in
    /// subscription order on every graph change.
    pub fn subscribe(&mut self, listener: impl FnMut(&GraphSnapshot) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.subscribers.insert(id, Box::new(listener));
        id
    }

    /// Remove a listener. Returns false if the id was already gone.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.subscribers.shift_remove(&id).is_some()
    }

    fn publish(&mut self) {
        let snapshot = self.store.snapshot();
        for listener in self.subscribers.values_mut() {
            listener(&snapshot);
        }
    }

    /// Add a node at the next cascade position
    pub fn add_node(&mut self) -> NodeId {
        let id = self.store.add_node(None);
        self.publish();
        id
    }

    /// Add a node at an explicit position
    pub fn add_node_at(&mut self, x: f32, y: f32) -> NodeId {
        let id = self.store.add_node(Some([x, y]));
        self.publish();
        id
    }

    /// Move a node (drag update). No-op for a missing node.
    pub fn move_node(&mut self, node_id: NodeId, x: f32, y: f32) {
        self.store.move_node(node_id, x, y);
        self.publish();
    }

    /// Delete a node and every connection referencing it. Idempotent.
    pub fn delete_node(&mut self, node_id: NodeId) {
        if self.store.delete_node(node_id).is_some() {
            self.publish();
        }
    }

    /// Click an anchor: starts a draft from idle, commits a connection when a
    /// draft is already in progress.
    pub fn select_anchor(&mut self, node_id: NodeId, anchor: Anchor) {
        let endpoint = Endpoint::new(node_id, anchor);
        if let Some((source, target)) = self.draft.select_anchor(&self.store, endpoint) {
            match self.store.add_connection(source, target) {
                Ok(()) => {
                    tracing::debug!(?source, ?target, "connection committed");
                    self.publish();
                }
                Err(err) => tracing::warn!(%err, "draft commit rejected"),
            }
        }
    }

    /// Update the draft's preview endpoint. Never touches the graph.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.draft.pointer_move(Point::new(x, y));
    }

    /// Background click: discard any in-progress draft
    pub fn cancel_draft(&mut self) {
        self.draft.cancel();
    }

    /// Remove the connection at `index`. Out-of-range is a no-op.
    pub fn delete_connection(&mut self, index: usize) {
        if self.store.delete_connection(index).is_some() {
            self.publish();
        }
    }

    /// Serialize the current graph to its JSON wire format
    pub fn export_snapshot(&self) -> Result<String, SnapshotError> {
        self.store.export_snapshot()
    }

    /// Replace the graph with a parsed JSON snapshot. All-or-nothing: on any
    /// error the previous graph stays installed and no snapshot is published.
    /// A successful import also discards any in-progress draft.
    pub fn import_snapshot(&mut self, json: &str) -> Result<(), SnapshotError> {
        self.store.import_snapshot(json)?;
        self.draft.cancel();
        self.publish();
        Ok(())
    }

    /// Read access to the graph
    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    /// Read access to the draft machine (for preview rendering)
    pub fn draft(&self) -> &DraftState {
        &self.draft
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
