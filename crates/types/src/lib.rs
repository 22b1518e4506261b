//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Canvas
//!
//! The game is laid out on a fixed logical canvas:
//!
//! - **Width**: 800 units
//! - **Height**: 600 units
//! - **Margin**: 10 units between and around cards
//!
//! Front ends scale the canvas onto whatever surface they draw to (see [`Viewport`]).
//!
//! # Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_COLS` | 4 | Columns in every board |
//! | `CARD_ASPECT` | 1.65 / 2.5 | Portrait card width/height ratio |
//! | `MISMATCH_DELAY_TICKS` | 60 | Frames a mismatched pair stays visible |
//! | `MATCH_SCORE` | 10 | Points per matched pair |
//! | `TICK_MS` | 16 | Default frame interval (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use memory_match_types::{Level, Rect, CANVAS_WIDTH, CANVAS_HEIGHT};
//!
//! assert_eq!(Level::from_id(2), Some(Level::Two));
//! assert_eq!(Level::Two.pairs(), 12);
//! assert_eq!(Level::from_id(3), None);
//!
//! let r = Rect::new(10, 10, 20, 30);
//! assert!(r.contains(10, 10));
//! assert!(!r.contains(30, 10));
//!
//! assert_eq!((CANVAS_WIDTH, CANVAS_HEIGHT), (800, 600));
//! ```

/// Logical canvas width
pub const CANVAS_WIDTH: i32 = 800;

/// Logical canvas height
pub const CANVAS_HEIGHT: i32 = 600;

/// Gap between cards and around the grid
pub const CARD_MARGIN: i32 = 10;

/// Fixed number of grid columns
pub const GRID_COLS: i32 = 4;

/// Card width / height (portrait playing card shape)
pub const CARD_ASPECT: f64 = 1.65 / 2.5;

/// Ticks a mismatched pair stays face-up before flipping back
pub const MISMATCH_DELAY_TICKS: u32 = 60;

/// Points awarded for each matched pair
pub const MATCH_SCORE: u32 = 10;

/// Default fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Level 1 button band on the level screen (exclusive bounds)
pub const LEVEL_ONE_BAND: (i32, i32) = (310, 350);

/// Level 2 button band on the level screen (exclusive bounds)
pub const LEVEL_TWO_BAND: (i32, i32) = (350, 390);

/// Key that quits the game from any screen
pub const QUIT_KEY: char = 'q';

/// Image shown for every face-down card
pub const TILE_BACK_IMAGE: &str = "13.png";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_constants() {
        assert_eq!(CANVAS_WIDTH, 800);
        assert_eq!(CANVAS_HEIGHT, 600);
        assert_eq!(CARD_MARGIN, 10);
        assert_eq!(GRID_COLS, 4);
        assert_eq!(MISMATCH_DELAY_TICKS, 60);
        assert!((CARD_ASPECT - 0.66).abs() < 1e-9);
    }

    #[test]
    fn level_bands_are_adjacent() {
        assert_eq!(LEVEL_ONE_BAND.1, LEVEL_TWO_BAND.0);
    }

    #[test]
    fn level_ids() {
        assert_eq!(Level::from_id(1), Some(Level::One));
        assert_eq!(Level::from_id(2), Some(Level::Two));
        assert_eq!(Level::from_id(0), None);
        assert_eq!(Level::from_id(3), None);
        assert_eq!(Level::One.id(), 1);
        assert_eq!(Level::Two.id(), 2);
    }

    #[test]
    fn level_for_click_band() {
        assert_eq!(Level::for_band_y(320), Some(Level::One));
        assert_eq!(Level::for_band_y(389), Some(Level::Two));
        assert_eq!(Level::for_band_y(310), None);
        assert_eq!(Level::for_band_y(350), None);
        assert_eq!(Level::for_band_y(390), None);
        assert_eq!(Level::for_band_y(100), None);
    }

    #[test]
    fn palettes_have_distinct_symbols() {
        for level in [Level::One, Level::Two] {
            let palette = level.palette();
            assert_eq!(palette.len(), level.pairs());
            for (i, a) in palette.iter().enumerate() {
                for b in &palette[i + 1..] {
                    assert_ne!(a, b);
                }
            }
        }
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(0, 0, 10, 10);
        assert!(r.contains(0, 0));
        assert!(r.contains(9, 9));
        assert!(!r.contains(10, 5));
        assert!(!r.contains(5, 10));
        assert!(!r.contains(-1, 5));
    }

    #[test]
    fn rect_intersects() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.intersects(&Rect::new(5, 5, 10, 10)));
        assert!(!a.intersects(&Rect::new(10, 0, 10, 10)));
        assert!(!a.intersects(&Rect::new(0, 10, 10, 10)));
    }

    #[test]
    fn viewport_round_trips_cell_centres() {
        let vp = Viewport::new(80, 24);
        let (x, y) = vp.cell_to_canvas(40, 12);
        assert_eq!(vp.canvas_to_cell(x, y), (40, 12));
    }

    #[test]
    fn viewport_maps_canvas_corners() {
        let vp = Viewport::new(80, 30);
        assert_eq!(vp.canvas_to_cell(0, 0), (0, 0));
        assert_eq!(vp.canvas_to_cell(799, 599), (79, 29));
        assert_eq!(vp.cell_to_canvas(0, 0), (5, 10));
    }

    #[test]
    fn symbol_image_names() {
        assert_eq!(SymbolId::new(1).image_name(), "1.png");
        assert_eq!(SymbolId::new(12).image_name(), "12.png");
    }
}

/// Axis-aligned rectangle on the logical canvas
///
/// Containment is half-open: `x <= px < x + w` and `y <= py < y + h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Check whether a point lies inside the rectangle
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Check whether two rectangles share any area
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Opaque card symbol
///
/// Symbol ids start at 1 and double as the card image number, so symbol 3 is
/// drawn from `3.png`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(u8);

impl SymbolId {
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// File name of the image for this symbol
    pub fn image_name(&self) -> String {
        format!("{}.png", self.0)
    }
}

const LEVEL_ONE_PALETTE: [SymbolId; 6] = [
    SymbolId(1),
    SymbolId(2),
    SymbolId(3),
    SymbolId(4),
    SymbolId(5),
    SymbolId(6),
];

const LEVEL_TWO_PALETTE: [SymbolId; 12] = [
    SymbolId(1),
    SymbolId(2),
    SymbolId(3),
    SymbolId(4),
    SymbolId(5),
    SymbolId(6),
    SymbolId(7),
    SymbolId(8),
    SymbolId(9),
    SymbolId(10),
    SymbolId(11),
    SymbolId(12),
];

/// The two playable levels
///
/// - **One**: 6 pairs (12 cards, 3 rows)
/// - **Two**: 12 pairs (24 cards, 6 rows)
///
/// Each level draws from its own image pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    One,
    Two,
}

impl Level {
    /// Parse a numeric level id (1 or 2)
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Level::One),
            2 => Some(Level::Two),
            _ => None,
        }
    }

    pub fn id(&self) -> u8 {
        match self {
            Level::One => 1,
            Level::Two => 2,
        }
    }

    /// Number of pairs that must be matched to finish the level
    pub fn pairs(&self) -> usize {
        self.palette().len()
    }

    /// Symbols used by this level, each appearing twice on the board
    pub fn palette(&self) -> &'static [SymbolId] {
        match self {
            Level::One => &LEVEL_ONE_PALETTE,
            Level::Two => &LEVEL_TWO_PALETTE,
        }
    }

    /// Level selected by a click at canvas height `y` on the level screen
    pub fn for_band_y(y: i32) -> Option<Self> {
        if LEVEL_ONE_BAND.0 < y && y < LEVEL_ONE_BAND.1 {
            Some(Level::One)
        } else if LEVEL_TWO_BAND.0 < y && y < LEVEL_TWO_BAND.1 {
            Some(Level::Two)
        } else {
            None
        }
    }
}

/// Top-level screens of the game
///
/// Cycle: Menu → ChooseLevel → Game → GameOver → Menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Menu,
    ChooseLevel,
    Game,
    GameOver,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Menu => "menu",
            Screen::ChooseLevel => "choose_level",
            Screen::Game => "game",
            Screen::GameOver => "game_over",
        }
    }
}

/// Key identity as seen by the core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Escape,
    Other,
}

/// Input events consumed by the game
///
/// Produced by a front end (terminal, window) in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed / interrupt
    Quit,
    /// Key pressed; only [`QUIT_KEY`] has an effect
    KeyPress(Key),
    /// Primary button click in canvas coordinates
    Click { x: i32, y: i32 },
}

/// Surface dimensions in cells, used to scale the canvas
///
/// Each cell covers `CANVAS_WIDTH / width` by `CANVAS_HEIGHT / height` canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Map a canvas point to the cell that covers it
    pub fn canvas_to_cell(&self, x: i32, y: i32) -> (u16, u16) {
        (
            scale_down(x, CANVAS_WIDTH, self.width),
            scale_down(y, CANVAS_HEIGHT, self.height),
        )
    }

    /// Map a cell to the canvas point at its centre
    pub fn cell_to_canvas(&self, col: u16, row: u16) -> (i32, i32) {
        (
            scale_up(col, CANVAS_WIDTH, self.width),
            scale_up(row, CANVAS_HEIGHT, self.height),
        )
    }
}

fn scale_down(v: i32, extent: i32, cells: u16) -> u16 {
    if cells == 0 {
        return 0;
    }
    let v = v.clamp(0, extent - 1) as i64;
    ((v * cells as i64) / extent as i64) as u16
}

fn scale_up(cell: u16, extent: i32, cells: u16) -> i32 {
    if cells == 0 {
        return 0;
    }
    // Centre of the cell: (2 * cell + 1) * extent / (2 * cells)
    (((2 * cell as i64 + 1) * extent as i64) / (2 * cells as i64)) as i32
}
