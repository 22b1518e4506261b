//! Terminal input module (core-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into [`crate::types::InputEvent`], scaling
//! terminal cell positions onto the game canvas.

pub mod map;

pub use memory_match_types as types;

pub use map::{handle_key_event, handle_mouse_event, map_event, should_quit};
