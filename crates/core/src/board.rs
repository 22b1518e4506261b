//! Board module - the dealt cards of one level
//!
//! A board holds every card of the current level in row-major grid order.
//! Each symbol of the level's palette appears on exactly two cards, and the
//! card rectangles come from [`crate::layout`], so they never overlap and always
//! fit the canvas.

use crate::layout::{card_rects, card_size, grid_rows};
use crate::rng::SimpleRng;
use crate::types::{Level, Rect, SymbolId};

/// A single card on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub symbol: SymbolId,
    pub rect: Rect,
    pub face_up: bool,
    pub matched: bool,
}

impl Tile {
    /// Create a face-down, unmatched card
    pub fn new(symbol: SymbolId, rect: Rect) -> Self {
        Self {
            symbol,
            rect,
            face_up: false,
            matched: false,
        }
    }

    /// Whether the card can be flipped by a click
    pub fn is_selectable(&self) -> bool {
        !self.face_up && !self.matched
    }

    /// Whether the card's face should be drawn
    pub fn is_revealed(&self) -> bool {
        self.face_up || self.matched
    }
}

/// The cards of one level
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    level: Level,
    tiles: Vec<Tile>,
    card_size: (i32, i32),
    rows: i32,
}

impl Board {
    /// Deal a freshly shuffled board for `level`
    pub fn deal(level: Level, rng: &mut SimpleRng) -> Self {
        let mut symbols = doubled_palette(level);
        rng.shuffle(&mut symbols);
        Self::from_symbols(level, &symbols)
    }

    /// Build a board with a fixed symbol order (row-major)
    ///
    /// Panics if `symbols` is not the doubled palette of `level` in some order.
    pub fn from_symbols(level: Level, symbols: &[SymbolId]) -> Self {
        let mut expected = doubled_palette(level);
        let mut given = symbols.to_vec();
        expected.sort_unstable();
        given.sort_unstable();
        assert_eq!(given, expected, "board symbols must be the level palette, doubled");

        let total = symbols.len();
        let tiles = card_rects(total)
            .into_iter()
            .zip(symbols.iter().copied())
            .map(|(rect, symbol)| Tile::new(symbol, rect))
            .collect();

        Self {
            level,
            tiles,
            card_size: card_size(total),
            rows: grid_rows(total),
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Pairs that must be matched to clear the board
    pub fn pair_target(&self) -> usize {
        self.level.pairs()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    pub(crate) fn tile_mut(&mut self, index: usize) -> Option<&mut Tile> {
        self.tiles.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn card_size(&self) -> (i32, i32) {
        self.card_size
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Index of the card whose rectangle contains the point
    pub fn tile_at(&self, x: i32, y: i32) -> Option<usize> {
        self.tiles.iter().position(|t| t.rect.contains(x, y))
    }

    /// Indices of both cards carrying `symbol`
    pub fn pair_of(&self, symbol: SymbolId) -> Vec<usize> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| t.symbol == symbol)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn matched_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.matched).count() / 2
    }
}

/// Every palette symbol twice, in palette order
fn doubled_palette(level: Level) -> Vec<SymbolId> {
    level
        .palette()
        .iter()
        .flat_map(|&s| [s, s])
        .collect()
}
