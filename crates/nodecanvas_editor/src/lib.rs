// SPDX-License-Identifier: MIT OR Apache-2.0
//! Interaction core for the nodecanvas editor.
//!
//! This crate is the boundary the rendering layer talks to:
//! - [`Editor`] — commands in (add/move/delete node, anchor clicks, pointer
//!   moves, connection removal, snapshot import/export), snapshots out via a
//!   synchronous publish/subscribe contract
//! - [`DraftState`] — the connection-drawing gesture: first anchor click
//!   starts a draft with a live preview line, second click commits, a
//!   background click cancels
//! - [`InputEvent`] — one abstract event stream that mouse and touch
//!   adapters both feed
//!
//! All state transitions are single-threaded and synchronous; each event is
//! fully processed before the next one is handled.

pub mod config;
pub mod draft;
pub mod editor;
pub mod input;

pub use config::EditorConfig;
pub use draft::DraftState;
pub use editor::{Editor, SubscriberId};
pub use input::InputEvent;
