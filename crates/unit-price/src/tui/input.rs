//! Keyboard input handling
//!
//! Probar: Error prevention - Type-safe key actions prevent invalid input

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::Key;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a keypad key
    Press(Key),
    /// Move focus to the previous field
    FocusPrevious,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('u') => KeyAction::Press(Key::Clear),
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                KeyAction::Press(Key::Digit(c as u8 - b'0'))
            }
            KeyCode::Char('.' | ',') => KeyAction::Press(Key::Point),
            KeyCode::Char('z') => KeyAction::Press(Key::DoubleZero),
            KeyCode::Char('c') | KeyCode::Esc => KeyAction::Press(Key::Clear),
            KeyCode::Backspace | KeyCode::Delete => KeyAction::Press(Key::Backspace),
            KeyCode::Tab | KeyCode::Enter | KeyCode::Down | KeyCode::Right => {
                KeyAction::Press(Key::Next)
            }
            KeyCode::BackTab | KeyCode::Up | KeyCode::Left => KeyAction::FocusPrevious,
            KeyCode::Char('q') => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}
