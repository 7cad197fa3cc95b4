//! TUI Application State
//!
//! Probar: Error prevention - State machine prevents invalid transitions

use ratatui::layout::Rect;
use tracing::debug;

use super::input::KeyAction;
use super::keypad::Keypad;
use super::ui::ScreenLayout;
use crate::core::{AppState, Event, FieldId, Key, Transition, ViewModel};

/// Comparator application state
#[derive(Debug, Default)]
pub struct UnitPriceApp {
    /// Buffers and focus
    state: AppState,
    /// On-screen keypad, highlighting the last key pressed
    keypad: Keypad,
    /// Whether the app should quit
    should_quit: bool,
}

impl UnitPriceApp {
    /// Creates a new app with empty buffers
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the comparator state
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Render-ready view of the current state
    #[must_use]
    pub fn view(&self) -> ViewModel {
        self.state.view()
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Presses a keypad key and highlights it
    pub fn press_key(&mut self, key: Key) -> Transition {
        self.keypad.highlight(key);
        self.state.press_key(key)
    }

    /// Presses a raw keypad symbol; unknown symbols are ignored
    pub fn press_symbol(&mut self, symbol: &str) -> Transition {
        match Key::from_symbol(symbol) {
            Some(key) => self.press_key(key),
            None => self.state.press_symbol(symbol),
        }
    }

    /// Moves focus to a field
    pub fn tap_field(&mut self, id: FieldId) -> Transition {
        self.keypad.release_all();
        self.state.tap_field(id)
    }

    /// Moves focus to the previous field
    pub fn focus_previous(&mut self) -> Transition {
        self.keypad.release_all();
        self.state.handle(Event::FocusPrevious)
    }

    /// Clears every buffer and resets focus
    pub fn reset(&mut self) {
        self.state = AppState::new();
        self.keypad.release_all();
    }

    /// Applies a keyboard action
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Press(key) => {
                self.press_key(key);
            }
            KeyAction::FocusPrevious => {
                self.focus_previous();
            }
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Handles a left click at (`x`, `y`) on a screen of size `area`
    ///
    /// Clicking a field value focuses it; clicking a keypad button presses it.
    pub fn click(&mut self, area: Rect, x: u16, y: u16) -> Transition {
        let layout = ScreenLayout::new(area);
        if let Some(id) = layout.field_at(x, y) {
            return self.tap_field(id);
        }
        if let Some(key) = self.keypad.hit_test(layout.keypad, x, y) {
            return self.press_key(key);
        }
        debug!(x, y, "click outside any control");
        Transition::Unchanged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FieldKind, Slot};

    const A_PRICE: FieldId = FieldId::new(Slot::A, FieldKind::Price);
    const B_AMOUNT: FieldId = FieldId::new(Slot::B, FieldKind::Amount);

    // ===== Constructor tests =====

    #[test]
    fn test_app_new() {
        let app = UnitPriceApp::new();
        assert_eq!(app.state(), &AppState::new());
        assert!(!app.should_quit());
        assert!(app.keypad().highlighted().is_none());
    }

    #[test]
    fn test_quit() {
        let mut app = UnitPriceApp::new();
        app.quit();
        assert!(app.should_quit());
    }

    // ===== Key handling tests =====

    #[test]
    fn test_press_key_edits_and_highlights() {
        let mut app = UnitPriceApp::new();
        assert_eq!(app.press_key(Key::Digit(7)), Transition::Edited(A_PRICE));
        assert_eq!(app.state().buffer(A_PRICE).as_str(), "7");
        assert_eq!(app.keypad().highlighted(), Some(Key::Digit(7)));
    }

    #[test]
    fn test_press_symbol_unknown_is_ignored() {
        let mut app = UnitPriceApp::new();
        assert_eq!(app.press_symbol("%"), Transition::Unchanged);
        assert_eq!(app.state(), &AppState::new());
    }

    #[test]
    fn test_tap_field_releases_keypad() {
        let mut app = UnitPriceApp::new();
        app.press_key(Key::Digit(1));
        assert_eq!(app.tap_field(B_AMOUNT), Transition::Focused(B_AMOUNT));
        assert!(app.keypad().highlighted().is_none());
        assert_eq!(app.state().focus(), B_AMOUNT);
    }

    #[test]
    fn test_focus_previous_wraps() {
        let mut app = UnitPriceApp::new();
        assert_eq!(app.focus_previous(), Transition::Focused(B_AMOUNT));
    }

    #[test]
    fn test_reset() {
        let mut app = UnitPriceApp::new();
        app.press_symbol("5");
        app.press_symbol("NEXT");
        app.reset();
        assert_eq!(app.state(), &AppState::new());
        assert!(app.keypad().highlighted().is_none());
    }

    // ===== Action tests =====

    #[test]
    fn test_handle_action() {
        let mut app = UnitPriceApp::new();
        app.handle_action(KeyAction::Press(Key::Digit(3)));
        app.handle_action(KeyAction::None);
        assert_eq!(app.state().buffer(A_PRICE).as_str(), "3");
        app.handle_action(KeyAction::FocusPrevious);
        assert_eq!(app.state().focus(), B_AMOUNT);
        app.handle_action(KeyAction::Quit);
        assert!(app.should_quit());
    }

    // ===== Mouse tests =====

    #[test]
    fn test_click_field_and_keypad() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = ScreenLayout::new(area);
        let mut app = UnitPriceApp::new();

        let card_b = layout.card(Slot::B);
        assert_eq!(
            app.click(area, card_b.x + 2, layout.field_row(B_AMOUNT)),
            Transition::Focused(B_AMOUNT)
        );

        // top-left button is 7
        let pad = layout.keypad;
        assert_eq!(
            app.click(area, pad.x + 1, pad.y + 1),
            Transition::Edited(B_AMOUNT)
        );
        assert_eq!(app.state().buffer(B_AMOUNT).as_str(), "7");
    }

    #[test]
    fn test_click_outside_controls() {
        let mut app = UnitPriceApp::new();
        assert_eq!(
            app.click(Rect::new(0, 0, 80, 24), 0, 0),
            Transition::Unchanged
        );
    }
}
