//! WASM Keypad for the comparator
//!
//! Probar: Visual feedback - Visual buttons for browser-based interaction
//!
//! Mirrors the TUI keypad layout so both front ends accept the same keys.

use super::dom::{DomElement, MockDom, NUMPAD_ID};
use crate::core::Key;

/// What a browser key or button does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadAction {
    /// Press a keypad key
    Press(Key),
    /// Move focus to the previous field (Shift+Tab)
    FocusPrevious,
}

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The key this button sends
    pub key: Key,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButtonDef {
    /// Creates a new button definition
    #[must_use]
    pub fn new(key: Key, row: usize, col: usize) -> Self {
        let id = match key {
            Key::Digit(d) => format!("key-{d}"),
            Key::DoubleZero => "key-00".to_string(),
            Key::Point => "key-point".to_string(),
            Key::Clear => "key-ac".to_string(),
            Key::Backspace => "key-bs".to_string(),
            Key::Next => "key-next".to_string(),
        };
        Self { key, id, row, col }
    }
}

/// WASM Keypad layout definition
/// ```text
/// [ 7 ] [ 8 ] [ 9 ] [ AC ]
/// [ 4 ] [ 5 ] [ 6 ] [ BS ]
/// [ 1 ] [ 2 ] [ 3 ] [NEXT]
/// [ 0 ] [00 ] [ . ]
/// ```
#[derive(Debug, Clone)]
pub struct WasmKeypad {
    buttons: Vec<KeypadButtonDef>,
    cols: usize,
    rows: usize,
}

impl Default for WasmKeypad {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmKeypad {
    /// Creates the standard comparator keypad
    #[must_use]
    pub fn new() -> Self {
        const LAYOUT: [[Option<Key>; 4]; 4] = [
            [Some(Key::Digit(7)), Some(Key::Digit(8)), Some(Key::Digit(9)), Some(Key::Clear)],
            [Some(Key::Digit(4)), Some(Key::Digit(5)), Some(Key::Digit(6)), Some(Key::Backspace)],
            [Some(Key::Digit(1)), Some(Key::Digit(2)), Some(Key::Digit(3)), Some(Key::Next)],
            [Some(Key::Digit(0)), Some(Key::DoubleZero), Some(Key::Point), None],
        ];

        let buttons = LAYOUT
            .iter()
            .enumerate()
            .flat_map(|(row, keys)| {
                keys.iter()
                    .enumerate()
                    .filter_map(move |(col, key)| key.map(|k| KeypadButtonDef::new(k, row, col)))
            })
            .collect();

        Self {
            buttons,
            cols: 4,
            rows: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button that sends `key`
    #[must_use]
    pub fn find_button_by_key(&self, key: Key) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.key == key)
    }

    /// Creates DOM elements for all keypad buttons
    ///
    /// Each button carries its symbol in `data-key`, which is what a click
    /// handler reads back.
    pub fn create_dom_elements(&self) -> Vec<DomElement> {
        self.buttons
            .iter()
            .map(|btn| {
                DomElement::new("button")
                    .with_id(&btn.id)
                    .with_text(btn.key.symbol())
                    .with_class("key")
                    .with_class(&format!("keypad-row-{}", btn.row))
                    .with_class(&format!("keypad-col-{}", btn.col))
                    .with_attr("data-key", btn.key.symbol())
            })
            .collect()
    }

    /// Processes a button click and returns the key it sends
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<Key> {
        self.find_button_by_id(element_id).map(|btn| btn.key)
    }

    /// Maps a browser `KeyboardEvent.key` to an action
    #[must_use]
    pub fn key_to_action(key: &str, shift: bool) -> Option<KeypadAction> {
        let press = |k| Some(KeypadAction::Press(k));
        match key {
            "Tab" if shift => Some(KeypadAction::FocusPrevious),
            "ArrowUp" | "ArrowLeft" => Some(KeypadAction::FocusPrevious),
            "Tab" | "Enter" | "ArrowDown" | "ArrowRight" => press(Key::Next),
            "." | "," | "Decimal" => press(Key::Point),
            "Backspace" | "Delete" => press(Key::Backspace),
            "Escape" | "c" | "C" => press(Key::Clear),
            _ => Key::from_symbol(key)
                .filter(|k| matches!(k, Key::Digit(_)))
                .map(KeypadAction::Press),
        }
    }
}

/// Extension trait for MockDom to add the keypad
pub trait MockDomKeypadExt {
    /// Adds the keypad container and its buttons
    fn add_keypad(&mut self, keypad: &WasmKeypad);
}

impl MockDomKeypadExt for MockDom {
    fn add_keypad(&mut self, keypad: &WasmKeypad) {
        self.register_element(DomElement::new("div").with_id(NUMPAD_ID).with_class("numpad"));
        for btn in keypad.create_dom_elements() {
            self.register_element(btn);
        }
    }
}
