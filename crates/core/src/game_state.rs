//! Game state module - the memory-match state machine
//!
//! Screens cycle `Menu → ChooseLevel → Game → GameOver → Menu`. Clicks drive
//! every transition; the only time-driven change is the mismatch countdown,
//! advanced by [`GameState::tick`] once per frame.

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::board::Board;
use crate::rng::SimpleRng;
use crate::snapshot::{SceneSnapshot, TextLine, TileView};
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    screen: Screen,
    board: Option<Board>,
    /// Face-up cards that are neither matched nor flipped back yet.
    selection: ArrayVec<usize, 2>,
    score: u32,
    matched_pairs: u32,
    /// Frames left before a mismatched pair flips back (0 = accepting clicks).
    mismatch_ticks: u32,
    rng: SimpleRng,
    running: bool,
}

impl GameState {
    /// Create a new game on the menu screen with the given shuffle seed
    pub fn new(seed: u32) -> Self {
        Self {
            screen: Screen::Menu,
            board: None,
            selection: ArrayVec::new(),
            score: 0,
            matched_pairs: 0,
            mismatch_ticks: 0,
            rng: SimpleRng::new(seed),
            running: true,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn matched_pairs(&self) -> u32 {
        self.matched_pairs
    }

    pub fn pair_target(&self) -> u32 {
        self.board
            .as_ref()
            .map(|b| b.pair_target() as u32)
            .unwrap_or(0)
    }

    pub fn mismatch_ticks(&self) -> u32 {
        self.mismatch_ticks
    }

    /// False once a quit signal or the quit key has been seen
    pub fn running(&self) -> bool {
        self.running
    }

    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    /// Apply one input event
    ///
    /// Returns true when the event changed the game.
    pub fn apply_event(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Quit => self.request_quit(),
            InputEvent::KeyPress(Key::Char(c)) if c.eq_ignore_ascii_case(&QUIT_KEY) => {
                self.request_quit()
            }
            InputEvent::KeyPress(_) => false,
            InputEvent::Click { x, y } => self.handle_click(x, y),
        }
    }

    fn request_quit(&mut self) -> bool {
        if !self.running {
            return false;
        }
        info!(screen = self.screen.as_str(), "quit requested");
        self.running = false;
        true
    }

    /// Handle a primary click at canvas coordinates
    pub fn handle_click(&mut self, x: i32, y: i32) -> bool {
        if !(0..CANVAS_WIDTH).contains(&x) || !(0..CANVAS_HEIGHT).contains(&y) {
            return false;
        }

        match self.screen {
            Screen::Menu => {
                self.screen = Screen::ChooseLevel;
                true
            }
            Screen::ChooseLevel => match Level::for_band_y(y) {
                Some(level) => self.start_level(level),
                None => false,
            },
            Screen::Game => self.reveal_at(x, y),
            Screen::GameOver => {
                self.board = None;
                self.selection.clear();
                self.mismatch_ticks = 0;
                self.screen = Screen::Menu;
                true
            }
        }
    }

    /// Deal a new board and enter the game screen
    ///
    /// Only valid from the level screen; ignored anywhere else.
    pub fn start_level(&mut self, level: Level) -> bool {
        if self.screen != Screen::ChooseLevel {
            return false;
        }

        let board = Board::deal(level, &mut self.rng);
        info!(
            level = level.id(),
            cards = board.len(),
            pairs = board.pair_target(),
            "level started"
        );

        self.board = Some(board);
        self.score = 0;
        self.matched_pairs = 0;
        self.selection.clear();
        self.mismatch_ticks = 0;
        self.screen = Screen::Game;
        true
    }

    fn reveal_at(&mut self, x: i32, y: i32) -> bool {
        if self.mismatch_ticks > 0 {
            return false;
        }
        let Some(board) = self.board.as_mut() else {
            return false;
        };
        let Some(index) = board.tile_at(x, y) else {
            return false;
        };
        let Some(tile) = board.tile_mut(index) else {
            return false;
        };
        if !tile.is_selectable() {
            return false;
        }

        tile.face_up = true;
        debug!(index, symbol = tile.symbol.get(), "card revealed");
        self.selection.push(index);

        if self.selection.is_full() {
            self.resolve_selection();
        }
        true
    }

    fn resolve_selection(&mut self) {
        let Some(board) = self.board.as_mut() else {
            return;
        };
        let (a, b) = (self.selection[0], self.selection[1]);
        let (Some(first), Some(second)) = (board.tile(a).copied(), board.tile(b).copied()) else {
            self.selection.clear();
            return;
        };

        if first.symbol != second.symbol {
            debug!(a, b, "mismatch");
            self.mismatch_ticks = MISMATCH_DELAY_TICKS;
            return;
        }

        for i in [a, b] {
            if let Some(tile) = board.tile_mut(i) {
                tile.matched = true;
            }
        }
        self.selection.clear();
        self.score += MATCH_SCORE;
        self.matched_pairs += 1;
        info!(
            symbol = first.symbol.get(),
            matched = self.matched_pairs,
            score = self.score,
            "pair matched"
        );

        if self.matched_pairs as usize == board.pair_target() {
            info!(score = self.score, "board cleared");
            self.screen = Screen::GameOver;
        }
    }

    /// Advance one frame
    ///
    /// Counts the mismatch delay down; when it reaches zero the unmatched pair
    /// flips back. Returns true when cards were flipped back.
    pub fn tick(&mut self) -> bool {
        if self.screen != Screen::Game || self.mismatch_ticks == 0 {
            return false;
        }

        self.mismatch_ticks -= 1;
        if self.mismatch_ticks > 0 {
            return false;
        }

        if let Some(board) = self.board.as_mut() {
            for &i in &self.selection {
                if let Some(tile) = board.tile_mut(i) {
                    tile.face_up = false;
                }
            }
        }
        debug!(cards = self.selection.len(), "mismatch flipped back");
        self.selection.clear();
        true
    }

    /// Run one frame: apply the frame's input in arrival order, then tick once.
    ///
    /// Input after a quit request is dropped. Returns true when anything changed.
    pub fn advance_frame<I>(&mut self, events: I) -> bool
    where
        I: IntoIterator<Item = InputEvent>,
    {
        let mut changed = false;
        for event in events {
            if !self.running {
                break;
            }
            changed |= self.apply_event(event);
        }
        changed |= self.tick();
        changed
    }

    pub fn snapshot_into(&self, out: &mut SceneSnapshot) {
        out.clear();
        out.screen = self.screen;
        out.score = self.score;
        out.matched_pairs = self.matched_pairs;
        out.pair_target = self.pair_target();
        out.mismatch_ticks = self.mismatch_ticks;

        match self.screen {
            Screen::Menu => {
                out.text.push(TextLine::centered("Matching Cards Game", 250));
                out.text.push(TextLine::centered("Click to Start", 310));
            }
            Screen::ChooseLevel => {
                out.text.push(TextLine::centered("Choose Level", 250));
                out.text.push(TextLine::centered(
                    format!("Level 1: {} Pairs", Level::One.pairs()),
                    310,
                ));
                out.text.push(TextLine::centered(
                    format!("Level 2: {} Pairs", Level::Two.pairs()),
                    370,
                ));
            }
            Screen::Game => {
                if let Some(board) = &self.board {
                    out.level = Some(board.level());
                    out.card_size = board.card_size();
                    out.tiles.extend(board.tiles().iter().map(TileView::from));
                }
                out.text
                    .push(TextLine::top_left(format!("Score: {}", self.score), 10, 10));
            }
            Screen::GameOver => {
                out.level = self.board.as_ref().map(|b| b.level());
                out.text.push(TextLine::centered("Game Over!", 250));
                out.text
                    .push(TextLine::centered(format!("Your Score: {}", self.score), 300));
                out.text
                    .push(TextLine::centered("Click to Return to Menu", 350));
            }
        }
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        let mut s = SceneSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::TileFace;

    fn centre(rect: Rect) -> (i32, i32) {
        (rect.x + rect.w / 2, rect.y + rect.h / 2)
    }

    fn in_game(seed: u32, level: Level) -> GameState {
        let mut state = GameState::new(seed);
        state.handle_click(400, 300);
        assert!(state.start_level(level));
        state
    }

    fn click_tile(state: &mut GameState, index: usize) -> bool {
        let rect = state.board().unwrap().tile(index).unwrap().rect;
        let (x, y) = centre(rect);
        state.handle_click(x, y)
    }

    /// Two indices holding different symbols
    fn mismatched_pair(state: &GameState) -> (usize, usize) {
        let tiles = state.board().unwrap().tiles();
        let other = tiles
            .iter()
            .position(|t| t.symbol != tiles[0].symbol)
            .unwrap();
        (0, other)
    }

    fn matching_pair(state: &GameState, symbol: SymbolId) -> (usize, usize) {
        let pair = state.board().unwrap().pair_of(symbol);
        (pair[0], pair[1])
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert_eq!(state.screen, Screen::Menu);
        assert!(state.board.is_none());
        assert!(state.selection.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.mismatch_ticks, 0);
        assert!(state.running);
    }

    #[test]
    fn test_menu_click_goes_to_level_screen() {
        let mut state = GameState::new(1);
        assert!(state.handle_click(0, 0));
        assert_eq!(state.screen, Screen::ChooseLevel);
    }

    #[test]
    fn test_level_screen_ignores_clicks_outside_bands() {
        let mut state = GameState::new(1);
        state.handle_click(400, 300);
        assert!(!state.handle_click(400, 300));
        assert!(!state.handle_click(400, 350));
        assert!(!state.handle_click(400, 390));
        assert_eq!(state.screen, Screen::ChooseLevel);
    }

    #[test]
    fn test_level_bands_start_levels() {
        let mut state = GameState::new(1);
        state.handle_click(400, 300);
        assert!(state.handle_click(400, 351));
        assert_eq!(state.screen, Screen::Game);
        assert_eq!(state.board().unwrap().len(), 24);
        assert_eq!(state.pair_target(), 12);
    }

    #[test]
    fn test_start_level_outside_level_screen_is_ignored() {
        let mut state = GameState::new(1);
        assert!(!state.start_level(Level::One));
        assert_eq!(state.screen, Screen::Menu);

        let mut state = in_game(1, Level::One);
        let before = state.board().cloned();
        assert!(!state.start_level(Level::Two));
        assert_eq!(state.board().cloned(), before);
    }

    #[test]
    fn test_clicks_outside_canvas_are_ignored() {
        let mut state = GameState::new(1);
        assert!(!state.handle_click(-1, 10));
        assert!(!state.handle_click(800, 10));
        assert!(!state.handle_click(10, 600));
        assert_eq!(state.screen, Screen::Menu);
    }

    #[test]
    fn test_first_reveal() {
        let mut state = in_game(3, Level::One);
        assert!(click_tile(&mut state, 0));
        assert!(state.board().unwrap().tile(0).unwrap().face_up);
        assert_eq!(state.selection(), &[0]);
    }

    #[test]
    fn test_match_scores_and_clears_selection() {
        let mut state = in_game(3, Level::One);
        let symbol = state.board().unwrap().tile(0).unwrap().symbol;
        let (a, b) = matching_pair(&state, symbol);

        click_tile(&mut state, a);
        click_tile(&mut state, b);

        let board = state.board().unwrap();
        assert!(board.tile(a).unwrap().matched);
        assert!(board.tile(b).unwrap().matched);
        assert_eq!(state.score, MATCH_SCORE);
        assert_eq!(state.matched_pairs, 1);
        assert!(state.selection.is_empty());
        assert_eq!(state.mismatch_ticks, 0);
    }

    #[test]
    fn test_mismatch_starts_delay() {
        let mut state = in_game(4, Level::One);
        let (a, b) = mismatched_pair(&state);

        click_tile(&mut state, a);
        click_tile(&mut state, b);

        assert_eq!(state.mismatch_ticks, MISMATCH_DELAY_TICKS);
        assert_eq!(state.selection.len(), 2);
        assert!(state.board().unwrap().tile(a).unwrap().face_up);
        assert!(state.board().unwrap().tile(b).unwrap().face_up);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_clicks_ignored_during_delay() {
        let mut state = in_game(4, Level::One);
        let (a, b) = mismatched_pair(&state);
        click_tile(&mut state, a);
        click_tile(&mut state, b);

        let c = (0..12).find(|&i| i != a && i != b).unwrap();
        assert!(!click_tile(&mut state, c));
        assert!(!state.board().unwrap().tile(c).unwrap().face_up);
        assert_eq!(state.selection.len(), 2);
    }

    #[test]
    fn test_tick_flips_back_after_delay() {
        let mut state = in_game(4, Level::One);
        let (a, b) = mismatched_pair(&state);
        click_tile(&mut state, a);
        click_tile(&mut state, b);

        for _ in 0..MISMATCH_DELAY_TICKS - 1 {
            assert!(!state.tick());
        }
        assert!(state.board().unwrap().tile(a).unwrap().face_up);
        assert!(state.tick());

        assert_eq!(state.mismatch_ticks, 0);
        assert!(state.selection.is_empty());
        assert!(!state.board().unwrap().tile(a).unwrap().face_up);
        assert!(!state.board().unwrap().tile(b).unwrap().face_up);
    }

    #[test]
    fn test_tick_outside_game_is_ignored() {
        let mut state = GameState::new(1);
        assert!(!state.tick());
        assert_eq!(state.screen, Screen::Menu);
    }

    #[test]
    fn test_clicking_face_up_tile_is_noop() {
        let mut state = in_game(8, Level::One);
        click_tile(&mut state, 0);
        assert!(!click_tile(&mut state, 0));
        assert_eq!(state.selection.len(), 1);
    }

    #[test]
    fn test_clicking_gap_is_noop() {
        let mut state = in_game(8, Level::One);
        // Left of the first column.
        assert!(!state.handle_click(5, 300));
        assert!(state.selection.is_empty());
    }

    #[test]
    fn test_clearing_board_ends_game() {
        let mut state = in_game(11, Level::One);
        for symbol in Level::One.palette() {
            let (a, b) = matching_pair(&state, *symbol);
            click_tile(&mut state, a);
            click_tile(&mut state, b);
        }
        assert_eq!(state.screen, Screen::GameOver);
        assert_eq!(state.matched_pairs, 6);
        assert_eq!(state.score, 60);

        // Any click goes back to the menu and drops the board.
        assert!(state.handle_click(1, 1));
        assert_eq!(state.screen, Screen::Menu);
        assert!(state.board.is_none());
    }

    #[test]
    fn test_quit_key_and_signal() {
        let mut state = GameState::new(1);
        assert!(!state.apply_event(InputEvent::KeyPress(Key::Char('x'))));
        assert!(state.running());
        assert!(state.apply_event(InputEvent::KeyPress(Key::Char('q'))));
        assert!(!state.running());

        let mut state = in_game(1, Level::Two);
        assert!(state.apply_event(InputEvent::Quit));
        assert!(!state.running());
    }

    #[test]
    fn test_apply_event_click() {
        let mut state = GameState::new(1);
        assert!(state.apply_event(InputEvent::Click { x: 400, y: 300 }));
        assert!(state.apply_event(InputEvent::Click { x: 400, y: 320 }));
        assert_eq!(state.screen, Screen::Game);
        assert_eq!(state.board().unwrap().len(), 12);
    }

    #[test]
    fn test_advance_frame_applies_events_then_ticks() {
        let mut state = GameState::new(6);
        let events = [
            InputEvent::Click { x: 400, y: 300 },
            InputEvent::Click { x: 400, y: 320 },
        ];
        assert!(state.advance_frame(events));
        assert_eq!(state.screen, Screen::Game);

        let (a, b) = mismatched_pair(&state);
        let (ax, ay) = centre(state.board().unwrap().tile(a).unwrap().rect);
        let (bx, by) = centre(state.board().unwrap().tile(b).unwrap().rect);
        state.advance_frame([
            InputEvent::Click { x: ax, y: ay },
            InputEvent::Click { x: bx, y: by },
        ]);
        // The same frame's tick already counted once.
        assert_eq!(state.mismatch_ticks, MISMATCH_DELAY_TICKS - 1);
    }

    #[test]
    fn test_advance_frame_stops_after_quit() {
        let mut state = GameState::new(6);
        state.advance_frame([InputEvent::Quit, InputEvent::Click { x: 1, y: 1 }]);
        assert!(!state.running());
        assert_eq!(state.screen, Screen::Menu);
    }

    #[test]
    fn test_restart_resets_session() {
        let mut state = in_game(21, Level::One);
        for symbol in Level::One.palette() {
            let (a, b) = matching_pair(&state, *symbol);
            click_tile(&mut state, a);
            click_tile(&mut state, b);
        }
        state.handle_click(1, 1);
        state.handle_click(1, 1);
        state.handle_click(400, 320);

        assert_eq!(state.screen, Screen::Game);
        assert_eq!(state.score, 0);
        assert_eq!(state.matched_pairs, 0);
        assert!(state.board().unwrap().tiles().iter().all(|t| t.is_selectable()));
    }

    #[test]
    fn test_snapshot_menu_text() {
        let snap = GameState::new(1).snapshot();
        assert_eq!(snap.screen, Screen::Menu);
        assert_eq!(snap.text.len(), 2);
        assert_eq!(snap.text[0].text, "Matching Cards Game");
        assert!(snap.tiles.is_empty());
    }

    #[test]
    fn test_snapshot_game_faces() {
        let mut state = in_game(5, Level::One);
        click_tile(&mut state, 3);
        let snap = state.snapshot();

        assert_eq!(snap.tiles.len(), 12);
        assert_eq!(snap.card_size, (122, 186));
        assert_eq!(snap.level, Some(Level::One));
        let symbol = state.board().unwrap().tile(3).unwrap().symbol;
        assert_eq!(snap.tiles[3].face, TileFace::Symbol(symbol));
        assert_eq!(snap.face_up_count(), 1);
        assert_eq!(snap.text[0].text, "Score: 0");
    }

    #[test]
    fn test_snapshot_game_over_shows_score() {
        let mut state = in_game(13, Level::One);
        for symbol in Level::One.palette() {
            let (a, b) = matching_pair(&state, *symbol);
            click_tile(&mut state, a);
            click_tile(&mut state, b);
        }
        let snap = state.snapshot();
        assert_eq!(snap.screen, Screen::GameOver);
        assert!(snap.text.iter().any(|l| l.text == "Your Score: 60"));
    }
}
