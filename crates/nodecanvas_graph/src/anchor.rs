// SPDX-License-Identifier: MIT OR Apache-2.0
//! Anchor geometry: mapping a node's position to its four connection points.

use crate::node::Node;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A point on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One of the four named connection points on a node's boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    /// Midpoint of the top edge
    Top,
    /// Midpoint of the bottom edge
    Bottom,
    /// Midpoint of the left edge
    Left,
    /// Midpoint of the right edge
    Right,
}

impl Anchor {
    /// All four anchors, in rendering order
    pub fn all() -> &'static [Anchor] {
        &[Anchor::Top, Anchor::Bottom, Anchor::Left, Anchor::Right]
    }

    /// Lowercase wire name of this anchor
    pub fn as_str(&self) -> &'static str {
        match self {
            Anchor::Top => "top",
            Anchor::Bottom => "bottom",
            Anchor::Left => "left",
            Anchor::Right => "right",
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Anchor {
    type Err = InvalidAnchor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Anchor::Top),
            "bottom" => Ok(Anchor::Bottom),
            "left" => Ok(Anchor::Left),
            "right" => Ok(Anchor::Right),
            other => Err(InvalidAnchor(other.to_string())),
        }
    }
}

/// Error for an anchor name outside the four-value set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid anchor name: {0:?}")]
pub struct InvalidAnchor(pub String);

/// Absolute position of an anchor on a node's boundary.
///
/// Pure and deterministic: with the node's top-left at (x, y), width W and
/// height H, top is (x + W/2, y), bottom (x + W/2, y + H), left (x, y + H/2)
/// and right (x + W, y + H/2).
pub fn anchor_point(node: &Node, anchor: Anchor) -> Point {
    let [x, y] = node.position;
    match anchor {
        Anchor::Top => Point::new(x + node.width / 2.0, y),
        Anchor::Bottom => Point::new(x + node.width / 2.0, y + node.height),
        Anchor::Left => Point::new(x, y + node.height / 2.0),
        Anchor::Right => Point::new(x + node.width, y + node.height / 2.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_formulas() {
        let node = Node::new("Node 1", 100.0, 200.0);
        assert_eq!(anchor_point(&node, Anchor::Top), Point::new(164.0, 200.0));
        assert_eq!(anchor_point(&node, Anchor::Bottom), Point::new(164.0, 264.0));
        assert_eq!(anchor_point(&node, Anchor::Left), Point::new(100.0, 232.0));
        assert_eq!(anchor_point(&node, Anchor::Right), Point::new(228.0, 232.0));
    }

    #[test]
    fn anchor_symmetry() {
        let node = Node::new("Node 1", 37.5, -12.0).with_size(200.0, 80.0);
        let left = anchor_point(&node, Anchor::Left);
        let right = anchor_point(&node, Anchor::Right);
        let top = anchor_point(&node, Anchor::Top);
        let bottom = anchor_point(&node, Anchor::Bottom);
        assert_eq!(left.y, right.y);
        assert_eq!(top.x, bottom.x);
    }

    #[test]
    fn anchor_point_is_deterministic() {
        let node = Node::new("Node 1", 5.0, 7.0);
        for &anchor in Anchor::all() {
            assert_eq!(anchor_point(&node, anchor), anchor_point(&node, anchor));
        }
    }

    #[test]
    fn unknown_anchor_name_is_rejected() {
        assert_eq!("top".parse::<Anchor>(), Ok(Anchor::Top));
        assert!("topleft".parse::<Anchor>().is_err());
        assert!("Top".parse::<Anchor>().is_err());
        assert!("".parse::<Anchor>().is_err());
    }

    #[test]
    fn anchors_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Anchor::Right).unwrap(), "\"right\"");
        let parsed: Anchor = serde_json::from_str("\"bottom\"").unwrap();
        assert_eq!(parsed, Anchor::Bottom);
        assert!(serde_json::from_str::<Anchor>("\"middle\"").is_err());
    }
}
