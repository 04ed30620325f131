// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph data model for the nodecanvas editor.
//!
//! This crate owns the authoritative graph state:
//! - Nodes positioned on a canvas with four boundary anchors
//! - Directed connections between anchors
//! - Referential integrity (deleting a node cascades to its connections)
//! - A JSON snapshot format that round-trips through export/import
//!
//! Interaction (the connection-drawing gesture, command surface and
//! publish/subscribe) lives in `nodecanvas_editor`; rendering is an external
//! collaborator that consumes published snapshots.

pub mod anchor;
pub mod connection;
pub mod graph;
pub mod node;
pub mod snapshot;

pub use anchor::{anchor_point, Anchor, InvalidAnchor, Point};
pub use connection::{Connection, Endpoint};
pub use graph::{GraphError, GraphStore};
pub use node::{Node, NodeId};
pub use snapshot::{GraphSnapshot, SnapshotError};
