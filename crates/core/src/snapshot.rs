use crate::board::Tile;
use crate::types::{Level, Rect, Screen, SymbolId};

/// What a card shows this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileFace {
    Back,
    Symbol(SymbolId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileView {
    pub rect: Rect,
    pub face: TileFace,
    pub matched: bool,
}

impl From<&Tile> for TileView {
    fn from(tile: &Tile) -> Self {
        let face = if tile.is_revealed() {
            TileFace::Symbol(tile.symbol)
        } else {
            TileFace::Back
        };
        Self {
            rect: tile.rect,
            face,
            matched: tile.matched,
        }
    }
}

/// Where a text line is placed on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Horizontally centered, vertically centered on `y`
    Centered { y: i32 },
    /// Top-left corner at `(x, y)`
    TopLeft { x: i32, y: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextSize {
    Title,
    Small,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextLine {
    pub text: String,
    pub anchor: TextAnchor,
    pub size: TextSize,
}

impl TextLine {
    pub fn centered(text: impl Into<String>, y: i32) -> Self {
        Self {
            text: text.into(),
            anchor: TextAnchor::Centered { y },
            size: TextSize::Title,
        }
    }

    pub fn top_left(text: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            text: text.into(),
            anchor: TextAnchor::TopLeft { x, y },
            size: TextSize::Small,
        }
    }
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SceneSnapshot {
    pub screen: Screen,
    pub text: Vec<TextLine>,
    pub tiles: Vec<TileView>,
    pub card_size: (i32, i32),
    pub level: Option<Level>,
    pub score: u32,
    pub matched_pairs: u32,
    pub pair_target: u32,
    pub mismatch_ticks: u32,
}

impl SceneSnapshot {
    /// Reset to an empty menu frame, keeping allocations
    pub fn clear(&mut self) {
        self.screen = Screen::Menu;
        self.text.clear();
        self.tiles.clear();
        self.card_size = (0, 0);
        self.level = None;
        self.score = 0;
        self.matched_pairs = 0;
        self.pair_target = 0;
        self.mismatch_ticks = 0;
    }

    /// Whether clicks on cards are currently accepted
    pub fn accepting_clicks(&self) -> bool {
        self.screen == Screen::Game && self.mismatch_ticks == 0
    }

    pub fn face_up_count(&self) -> usize {
        self.tiles
            .iter()
            .filter(|t| matches!(t.face, TileFace::Symbol(_)))
            .count()
    }
}
