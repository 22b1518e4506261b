//! SceneView: maps a `core::SceneSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The 800x600 canvas is scaled onto the whole viewport, so card rectangles and
//! text keep their relative placement at any terminal size. Card images are
//! drawn as a coloured glyph per symbol.

use crate::core::{SceneSnapshot, TextAnchor, TextSize, TileFace, TileView};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Rect, SymbolId, Viewport, CANVAS_WIDTH};

const SKY: Rgb = Rgb::new(135, 206, 235);
const WHITE: Rgb = Rgb::new(255, 255, 255);
const CARD_FACE: Rgb = Rgb::new(250, 248, 240);
const CARD_BACK: Rgb = Rgb::new(40, 70, 140);
const BACK_PATTERN: Rgb = Rgb::new(90, 120, 200);
const MATCHED_EDGE: Rgb = Rgb::new(40, 160, 60);
const FACE_EDGE: Rgb = Rgb::new(60, 60, 60);

/// Glyph and colour for each symbol, indexed by `symbol id - 1`.
const SYMBOL_GLYPHS: [(char, Rgb); 12] = [
    ('♥', Rgb::new(210, 40, 50)),
    ('♠', Rgb::new(20, 20, 20)),
    ('♦', Rgb::new(230, 110, 20)),
    ('♣', Rgb::new(30, 120, 40)),
    ('★', Rgb::new(200, 160, 0)),
    ('●', Rgb::new(120, 40, 160)),
    ('▲', Rgb::new(0, 130, 150)),
    ('■', Rgb::new(150, 80, 30)),
    ('◆', Rgb::new(200, 40, 140)),
    ('☀', Rgb::new(230, 150, 0)),
    ('☂', Rgb::new(60, 90, 200)),
    ('♪', Rgb::new(90, 90, 90)),
];

/// Glyph and colour used to draw a symbol.
pub fn symbol_glyph(symbol: SymbolId) -> (char, Rgb) {
    let i = (symbol.get() as usize).saturating_sub(1) % SYMBOL_GLYPHS.len();
    SYMBOL_GLYPHS[i]
}

/// A lightweight terminal renderer for the game scenes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneView;

impl SceneView {
    pub fn new() -> Self {
        Self
    }

    /// Render the scene into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized only when
    /// the viewport changes.
    pub fn render_into(&self, snap: &SceneSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(WHITE, SKY).cell(' '));

        for tile in &snap.tiles {
            self.draw_tile(fb, viewport, tile);
        }

        for line in &snap.text {
            let style = match line.size {
                TextSize::Title => CellStyle::new(WHITE, SKY).bold(),
                TextSize::Small => CellStyle::new(WHITE, SKY),
            };
            match line.anchor {
                TextAnchor::Centered { y } => {
                    let (mid_x, row) = viewport.canvas_to_cell(CANVAS_WIDTH / 2, y);
                    fb.put_str_centered(mid_x, row, &line.text, style);
                }
                TextAnchor::TopLeft { x, y } => {
                    let (col, row) = viewport.canvas_to_cell(x, y);
                    fb.put_str(col, row, &line.text, style);
                }
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SceneSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, viewport: Viewport, tile: &TileView) {
        let (x, y, w, h) = cell_rect(viewport, tile.rect);

        match tile.face {
            TileFace::Back => {
                let style = CellStyle::new(BACK_PATTERN, CARD_BACK);
                fb.fill_rect(x, y, w, h, '░', style);
                fb.draw_box(x, y, w, h, CellStyle::new(WHITE, CARD_BACK));
            }
            TileFace::Symbol(symbol) => {
                let (glyph, color) = symbol_glyph(symbol);
                fb.fill_rect(x, y, w, h, ' ', CellStyle::new(color, CARD_FACE));
                let edge = if tile.matched { MATCHED_EDGE } else { FACE_EDGE };
                fb.draw_box(x, y, w, h, CellStyle::new(edge, CARD_FACE));
                fb.put_char(
                    x + w / 2,
                    y + h / 2,
                    glyph,
                    CellStyle::new(color, CARD_FACE).bold(),
                );
            }
        }
    }
}

/// Cells covered by a canvas rectangle as `(x, y, w, h)`; never empty.
fn cell_rect(viewport: Viewport, rect: Rect) -> (u16, u16, u16, u16) {
    let (x0, y0) = viewport.canvas_to_cell(rect.x, rect.y);
    let (x1, y1) = viewport.canvas_to_cell(rect.right() - 1, rect.bottom() - 1);
    (x0, y0, x1 - x0 + 1, y1 - y0 + 1)
}
