//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal play.
//! It avoids widget toolkits and instead renders into a simple framebuffer
//! that is diffed and flushed to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Scale the fixed 800x600 canvas onto any terminal size
//! - Keep per-frame output small (only changed cells are written)

pub mod fb;
pub mod renderer;
pub mod scene_view;

pub use memory_match_core as core;
pub use memory_match_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use scene_view::{symbol_glyph, SceneView};
