//! Mapping from terminal events to game input.

use crate::types::{InputEvent, Key, Viewport};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Map any terminal event to a game input event.
///
/// Key releases, repeats, resizes, focus changes and non-primary mouse buttons
/// produce nothing.
pub fn map_event(event: &Event, viewport: Viewport) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(*key),
        Event::Mouse(mouse) => handle_mouse_event(*mouse, viewport),
        _ => None,
    }
}

/// Map keyboard input to game input.
pub fn handle_key_event(key: KeyEvent) -> Option<InputEvent> {
    if should_quit(key) {
        return Some(InputEvent::Quit);
    }

    match key.code {
        KeyCode::Char(c) => Some(InputEvent::KeyPress(Key::Char(c.to_ascii_lowercase()))),
        KeyCode::Esc => Some(InputEvent::KeyPress(Key::Escape)),
        _ => Some(InputEvent::KeyPress(Key::Other)),
    }
}

/// Map a left-button press to a click at the centre of the cell under the cursor.
pub fn handle_mouse_event(mouse: MouseEvent, viewport: Viewport) -> Option<InputEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if mouse.column >= viewport.width || mouse.row >= viewport.height {
                return None;
            }
            let (x, y) = viewport.cell_to_canvas(mouse.column, mouse.row);
            Some(InputEvent::Click { x, y })
        }
        _ => None,
    }
}

/// Check if key is an interrupt that should end the process.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
