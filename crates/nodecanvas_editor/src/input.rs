// SPDX-License-Identifier: MIT OR Apache-2.0
//! Unified input events for mouse and touch.
//!
//! Both pointer sources feed the same abstract event stream, so the draft
//! machine and store see one sequence of commands regardless of the input
//! device driving them.

use crate::editor::Editor;
use nodecanvas_graph::{Anchor, NodeId};
use serde::{Deserialize, Serialize};

/// An abstract editor input event, already hit-tested by the rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Add a node at the next cascade position
    AddNode,
    /// A node is being dragged to a new position
    DragNode {
        /// Node being dragged
        node: NodeId,
        /// New top-left x
        x: f32,
        /// New top-left y
        y: f32,
    },
    /// Delete a node
    DeleteNode {
        /// Node to delete
        node: NodeId,
    },
    /// An anchor was clicked or tapped
    SelectAnchor {
        /// Node the anchor belongs to
        node: NodeId,
        /// Which anchor
        anchor: Anchor,
    },
    /// The pointer moved (mid-draft this drives the preview line)
    PointerMove {
        /// Pointer x
        x: f32,
        /// Pointer y
        y: f32,
    },
    /// The canvas background was clicked, cancelling any draft
    BackgroundClick,
    /// Remove the connection at this index
    RemoveConnection {
        /// Index into the connection sequence
        index: usize,
    },
}

impl Editor {
    /// Dispatch one input event. Events are processed in delivery order,
    /// each fully handled before the next.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::AddNode => {
                self.add_node();
            }
            InputEvent::DragNode { node, x, y } => self.move_node(node, x, y),
            InputEvent::DeleteNode { node } => self.delete_node(node),
            InputEvent::SelectAnchor { node, anchor } => self.select_anchor(node, anchor),
            InputEvent::PointerMove { x, y } => self.pointer_move(x, y),
            InputEvent::BackgroundClick => self.cancel_draft(),
            InputEvent::RemoveConnection { index } => self.delete_connection(index),
        }
    }
}
