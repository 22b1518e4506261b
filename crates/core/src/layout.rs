//! Layout module - card size and grid placement
//!
//! Cards are laid out row-major on a grid of [`GRID_COLS`] columns, centered
//! on the 800x600 canvas with a [`CARD_MARGIN`] gap between and around cards.
//! All cards share one size, shrunk to the portrait [`CARD_ASPECT`] so the grid
//! always fits. Arithmetic uses integer floor division and truncation so the
//! pixel positions (and therefore hit-testing) are stable.

use crate::types::{Rect, CANVAS_HEIGHT, CANVAS_WIDTH, CARD_ASPECT, CARD_MARGIN, GRID_COLS};

/// Number of grid rows needed for `total_cards`
pub fn grid_rows(total_cards: usize) -> i32 {
    let cols = GRID_COLS as usize;
    ((total_cards + cols - 1) / cols) as i32
}

/// Uniform card size `(width, height)` for a board of `total_cards`
pub fn card_size(total_cards: usize) -> (i32, i32) {
    let rows = grid_rows(total_cards).max(1);
    let avail_width = CANVAS_WIDTH - (GRID_COLS + 1) * CARD_MARGIN;
    let avail_height = CANVAS_HEIGHT - (rows + 1) * CARD_MARGIN;

    let mut w = avail_width.div_euclid(GRID_COLS);
    let mut h = avail_height.div_euclid(rows);

    if (w as f64) / (h as f64) > CARD_ASPECT {
        w = (h as f64 * CARD_ASPECT) as i32;
    } else {
        h = (w as f64 / CARD_ASPECT) as i32;
    }

    (w, h)
}

/// Top-left corners of every card, row-major
pub fn card_positions(total_cards: usize, size: (i32, i32)) -> Vec<(i32, i32)> {
    let rows = grid_rows(total_cards);
    let (w, h) = size;

    let grid_width = GRID_COLS * w + (GRID_COLS - 1) * CARD_MARGIN;
    let grid_height = rows * h + (rows - 1) * CARD_MARGIN;

    let offset_x = (CANVAS_WIDTH - grid_width).div_euclid(2);
    let offset_y = (CANVAS_HEIGHT - grid_height).div_euclid(2);

    let mut positions = Vec::with_capacity((rows * GRID_COLS) as usize);
    for r in 0..rows {
        for c in 0..GRID_COLS {
            positions.push((
                offset_x + c * (w + CARD_MARGIN),
                offset_y + r * (h + CARD_MARGIN),
            ));
        }
    }
    positions
}

/// Rectangles for the first `total_cards` grid slots
pub fn card_rects(total_cards: usize) -> Vec<Rect> {
    let (w, h) = card_size(total_cards);
    card_positions(total_cards, (w, h))
        .into_iter()
        .take(total_cards)
        .map(|(x, y)| Rect::new(x, y, w, h))
        .collect()
}
