// SPDX-License-Identifier: MIT OR Apache-2.0
//! Editor configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the editor core.
///
/// The only recognized options are the default dimensions applied to newly
/// added nodes. Unspecified fields fall back to 128x64.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Width for newly added nodes
    #[serde(default = "EditorConfig::default_width")]
    pub node_width: f32,
    /// Height for newly added nodes
    #[serde(default = "EditorConfig::default_height")]
    pub node_height: f32,
}

impl EditorConfig {
    fn default_width() -> f32 {
        nodecanvas_graph::node::DEFAULT_NODE_WIDTH
    }

    fn default_height() -> f32 {
        nodecanvas_graph::node::DEFAULT_NODE_HEIGHT
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            node_width: Self::default_width(),
            node_height: Self::default_height(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_node_model() {
        let config = EditorConfig::default();
        assert_eq!(config.node_width, 128.0);
        assert_eq!(config.node_height, 64.0);
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let config: EditorConfig = serde_json::from_str(r#"{"node_width": 96.0}"#).unwrap();
        assert_eq!(config.node_width, 96.0);
        assert_eq!(config.node_height, 64.0);
    }
}
