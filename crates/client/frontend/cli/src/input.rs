//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-intent mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use delve_core::TurnIntent;

/// Translates `KeyEvent`s into turn intents.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a turn intent. Key releases and repeats
    /// map to [`TurnIntent::None`].
    pub fn handle_key(&self, key: KeyEvent) -> TurnIntent {
        if key.kind != KeyEventKind::Press {
            return TurnIntent::None;
        }

        match key.code {
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
                TurnIntent::ToggleFullscreen
            }
            KeyCode::Esc => TurnIntent::Exit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => TurnIntent::Exit,
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Left => TurnIntent::MoveLeft,
            KeyCode::Right => TurnIntent::MoveRight,
            KeyCode::Up => TurnIntent::MoveUp,
            KeyCode::Down => TurnIntent::MoveDown,
            _ => TurnIntent::None,
        }
    }

    fn handle_char(&self, raw: char) -> TurnIntent {
        match raw.to_ascii_lowercase() {
            'q' => TurnIntent::Exit,
            'h' | 'a' => TurnIntent::MoveLeft,
            'j' | 's' => TurnIntent::MoveDown,
            'k' | 'w' => TurnIntent::MoveUp,
            'l' | 'd' => TurnIntent::MoveRight,
            _ => TurnIntent::None,
        }
    }
}
