//! Browser-independent comparator controller
//!
//! Probar: Error prevention - every DOM event maps to a core event or is
//! ignored; nothing else mutates the state.

use tracing::debug;

use super::keypad::{KeypadAction, WasmKeypad};
use super::render::{DomSink, RenderSync};
use crate::core::{AppState, Event, FieldId, Transition, ViewModel};

/// Comparator state plus the page wiring around it
#[derive(Debug, Clone, Default)]
pub struct WasmComparator {
    state: AppState,
    keypad: WasmKeypad,
    renderer: RenderSync,
}

impl WasmComparator {
    /// Creates a comparator with empty buffers
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the comparator state
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns the keypad definition
    #[must_use]
    pub fn keypad(&self) -> &WasmKeypad {
        &self.keypad
    }

    /// Render-ready view of the current state
    #[must_use]
    pub fn view(&self) -> ViewModel {
        self.state.view()
    }

    /// Handles a click on any element: a field display or a keypad button
    pub fn handle_click(&mut self, element_id: &str) -> Transition {
        if let Some(id) = FieldId::from_element_id(element_id) {
            return self.state.tap_field(id);
        }
        if let Some(key) = self.keypad.handle_click(element_id) {
            return self.state.press_key(key);
        }
        debug!(element_id, "click on unbound element");
        Transition::Unchanged
    }

    /// Handles a `data-key` symbol read from a keypad button
    pub fn handle_symbol(&mut self, symbol: &str) -> Transition {
        self.state.press_symbol(symbol)
    }

    /// Handles a keyboard key
    pub fn handle_key(&mut self, key: &str, shift: bool) -> Transition {
        match WasmKeypad::key_to_action(key, shift) {
            Some(KeypadAction::Press(k)) => self.state.press_key(k),
            Some(KeypadAction::FocusPrevious) => self.state.handle(Event::FocusPrevious),
            None => Transition::Unchanged,
        }
    }

    /// Clears every buffer and resets focus
    pub fn reset(&mut self) {
        self.state = AppState::new();
    }

    /// Writes the current view into `sink`
    pub fn render<S: DomSink + ?Sized>(&self, sink: &mut S) {
        self.renderer.apply(&self.state.view(), sink);
    }
}
