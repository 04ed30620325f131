// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node definitions for the canvas graph.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default node width in canvas units
pub const DEFAULT_NODE_WIDTH: f32 = 128.0;
/// Default node height in canvas units
pub const DEFAULT_NODE_HEIGHT: f32 = 64.0;

/// Unique identifier for a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    /// Create a new random node ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// A node placed on the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique instance ID, stable for the node's lifetime
    pub id: NodeId,
    /// Top-left position on the canvas
    pub position: [f32; 2],
    /// Display label
    pub label: String,
    /// Node width
    #[serde(default = "default_width")]
    pub width: f32,
    /// Node height
    #[serde(default = "default_height")]
    pub height: f32,
}

fn default_width() -> f32 {
    DEFAULT_NODE_WIDTH
}

fn default_height() -> f32 {
    DEFAULT_NODE_HEIGHT
}

impl Node {
    /// Create a new node with default dimensions
    pub fn new(label: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            id: NodeId::new(),
            position: [x, y],
            label: label.into(),
            width: DEFAULT_NODE_WIDTH,
            height: DEFAULT_NODE_HEIGHT,
        }
    }

    /// Set the dimensions
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// X coordinate of the top-left corner
    pub fn x(&self) -> f32 {
        self.position[0]
    }

    /// Y coordinate of the top-left corner
    pub fn y(&self) -> f32 {
        self.position[1]
    }
}
