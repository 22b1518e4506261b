//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and layout logic.
//! It has **zero dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical deals
//! - **Testable**: The whole state machine runs without a display
//! - **Portable**: Can drive any front end (terminal, window, headless)
//!
//! # Module Structure
//!
//! - [`board`]: Dealt cards of one level with their rectangles and flags
//! - [`game_state`]: Screen state machine, selection, scoring, mismatch timer
//! - [`layout`]: Card size and grid placement on the 800x600 canvas
//! - [`rng`]: Seeded generator and uniform shuffle
//! - [`snapshot`]: Per-frame scene description for renderers
//!
//! # Game Rules
//!
//! - **Levels**: Level 1 deals 6 pairs, level 2 deals 12 pairs, 4 columns each
//! - **Reveal**: Clicking a face-down card turns it face-up
//! - **Match**: Two equal cards stay face-up and score 10 points
//! - **Mismatch**: Two different cards stay visible for 60 frames, then flip back;
//!   clicks are ignored meanwhile
//! - **Win**: Matching every pair ends the game
//!
//! # Example
//!
//! ```
//! use memory_match_core::GameState;
//! use memory_match_types::{InputEvent, Screen};
//!
//! let mut game = GameState::new(12345);
//! game.apply_event(InputEvent::Click { x: 400, y: 300 }); // menu -> level screen
//! game.apply_event(InputEvent::Click { x: 400, y: 320 }); // level 1
//!
//! assert_eq!(game.screen(), Screen::Game);
//! assert_eq!(game.board().unwrap().len(), 12);
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) once per frame after
//! applying that frame's input events.

pub mod board;
pub mod game_state;
pub mod layout;
pub mod rng;
pub mod snapshot;

pub use memory_match_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Tile};
pub use game_state::GameState;
pub use layout::{card_positions, card_rects, card_size, grid_rows};
pub use rng::SimpleRng;
pub use snapshot::{SceneSnapshot, TextAnchor, TextLine, TextSize, TileFace, TileView};
