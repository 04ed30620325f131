// SPDX-License-Identifier: MIT OR Apache-2.0
//! Connection-draft state machine.
//!
//! Tracks the in-progress edge-drawing gesture: idle until a first anchor is
//! selected, then a live preview endpoint follows the pointer until a second
//! anchor click commits the connection or a background click cancels it.

use nodecanvas_graph::{anchor_point, Endpoint, GraphStore, Point};

/// State of the connection-drawing gesture.
///
/// The machine never mutates the graph itself; a commit is handed back to the
/// caller as the endpoint pair to connect. Only the (node, anchor) reference
/// is held, never copied geometry, so the preview line keeps tracking a node
/// that is dragged mid-gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DraftState {
    /// No gesture in progress
    #[default]
    Idle,
    /// First anchor chosen; preview endpoint follows the pointer
    AnchorSelected {
        /// The first-clicked endpoint
        anchor: Endpoint,
        /// Where the loose end of the preview line currently is
        preview: Point,
    },
}

impl DraftState {
    /// Create the machine in its initial `Idle` state
    pub fn new() -> Self {
        Self::Idle
    }

    /// Whether no gesture is in progress
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Feed an anchor click into the machine.
    ///
    /// From `Idle` this starts a draft, with the preview pinned to the
    /// clicked anchor; from `AnchorSelected` it ends the gesture and returns
    /// the `(source, target)` pair to commit. Node existence is checked
    /// against the live store on both clicks: a click on a since-deleted node
    /// drops the machine back to `Idle` with nothing to commit.
    pub fn select_anchor(
        &mut self,
        store: &GraphStore,
        endpoint: Endpoint,
    ) -> Option<(Endpoint, Endpoint)> {
        match *self {
            Self::Idle => {
                let Some(node) = store.node(endpoint.node_id) else {
                    tracing::warn!(node = ?endpoint.node_id, "anchor select on missing node ignored");
                    return None;
                };
                *self = Self::AnchorSelected {
                    anchor: endpoint,
                    preview: anchor_point(node, endpoint.anchor),
                };
                None
            }
            Self::AnchorSelected { anchor: first, .. } => {
                *self = Self::Idle;
                if store.contains_node(first.node_id) && store.contains_node(endpoint.node_id) {
                    Some((first, endpoint))
                } else {
                    tracing::warn!("draft endpoint node deleted mid-gesture, commit dropped");
                    None
                }
            }
        }
    }

    /// Move the preview endpoint. Only meaningful mid-draft; ignored when
    /// idle.
    pub fn pointer_move(&mut self, point: Point) {
        if let Self::AnchorSelected { preview, .. } = self {
            *preview = point;
        }
    }

    /// Discard the draft unconditionally. No-op when already idle.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// The preview line to render, from the live position of the selected
    /// anchor to the current preview endpoint. `None` when idle or when the
    /// anchor's node has been deleted mid-gesture.
    pub fn preview_line(&self, store: &GraphStore) -> Option<(Point, Point)> {
        let Self::AnchorSelected { anchor, preview } = self else {
            return None;
        };
        let node = store.node(anchor.node_id)?;
        Some((anchor_point(node, anchor.anchor), *preview))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodecanvas_graph::{Anchor, NodeId};

    #[test]
    fn starts_idle_and_cancel_is_noop() {
        let store = GraphStore::new();
        let mut draft = DraftState::new();
        assert!(draft.is_idle());
        draft.cancel();
        assert!(draft.is_idle());
        assert!(draft.preview_line(&store).is_none());
    }

    #[test]
    fn first_click_pins_preview_to_the_anchor() {
        let mut store = GraphStore::new();
        let n1 = store.add_node(None);
        let mut draft = DraftState::new();

        draft.select_anchor(&store, Endpoint::new(n1, Anchor::Right));
        assert_eq!(
            draft,
            DraftState::AnchorSelected {
                anchor: Endpoint::new(n1, Anchor::Right),
                preview: Point::new(228.0, 132.0),
            }
        );
    }

    #[test]
    fn pointer_move_updates_only_the_preview() {
        let mut store = GraphStore::new();
        let n1 = store.add_node(None);
        let mut draft = DraftState::new();

        // Ignored while idle
        draft.pointer_move(Point::new(9.0, 9.0));
        assert!(draft.is_idle());

        draft.select_anchor(&store, Endpoint::new(n1, Anchor::Top));
        draft.pointer_move(Point::new(200.0, 130.0));
        let (origin, loose) = draft.preview_line(&store).unwrap();
        assert_eq!(origin, Point::new(164.0, 100.0));
        assert_eq!(loose, Point::new(200.0, 130.0));
    }

    #[test]
    fn preview_origin_follows_a_moved_node() {
        let mut store = GraphStore::new();
        let n1 = store.add_node(None);
        let mut draft = DraftState::new();
        draft.select_anchor(&store, Endpoint::new(n1, Anchor::Left));

        store.move_node(n1, 500.0, 500.0);
        let (origin, _) = draft.preview_line(&store).unwrap();
        assert_eq!(origin, Point::new(500.0, 532.0));
    }

    #[test]
    fn second_click_returns_the_commit_pair() {
        let mut store = GraphStore::new();
        let n1 = store.add_node(None);
        let n2 = store.add_node(None);
        let mut draft = DraftState::new();

        assert!(draft
            .select_anchor(&store, Endpoint::new(n1, Anchor::Right))
            .is_none());
        let commit = draft
            .select_anchor(&store, Endpoint::new(n2, Anchor::Left))
            .unwrap();
        assert_eq!(commit.0, Endpoint::new(n1, Anchor::Right));
        assert_eq!(commit.1, Endpoint::new(n2, Anchor::Left));
        assert!(draft.is_idle());
    }

    #[test]
    fn selecting_on_a_missing_node_stays_idle() {
        let store = GraphStore::new();
        let mut draft = DraftState::new();
        assert!(draft
            .select_anchor(&store, Endpoint::new(NodeId::new(), Anchor::Top))
            .is_none());
        assert!(draft.is_idle());
    }

    #[test]
    fn deleted_first_node_drops_the_commit() {
        let mut store = GraphStore::new();
        let n1 = store.add_node(None);
        let n2 = store.add_node(None);
        let mut draft = DraftState::new();

        draft.select_anchor(&store, Endpoint::new(n1, Anchor::Top));
        store.delete_node(n1);
        assert!(draft
            .select_anchor(&store, Endpoint::new(n2, Anchor::Left))
            .is_none());
        assert!(draft.is_idle());
    }
}
