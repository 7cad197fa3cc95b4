//! WASM Driver - Unified Testing Interface
//!
//! Implements [`ComparatorDriver`] on top of the mock DOM, so the unified
//! checks read their answers from rendered elements rather than from
//! the core state.
//!
//! Probar: Balanced testing - Balanced testing across platforms

use super::comparator::WasmComparator;
use super::dom::{
    card_id, unit_price_id, DomEvent, MockDom, ACTIVE_CLASS, NEUTRAL_CLASS, RESULT_BANNER_ID,
    RESULT_TEXT_ID, WINNER_CLASS,
};
use super::keypad::{MockDomKeypadExt, WasmKeypad};
use crate::core::{FieldId, Slot};
use crate::driver::ComparatorDriver;

/// WASM Driver wrapping the comparator and a mock DOM
#[derive(Debug)]
pub struct WasmDriver {
    comparator: WasmComparator,
    dom: MockDom,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a driver over a freshly rendered comparator page
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(WasmComparator::new())
    }

    /// Creates a driver over an existing comparator
    #[must_use]
    pub fn with_comparator(comparator: WasmComparator) -> Self {
        let mut dom = MockDom::comparator();
        dom.add_keypad(&WasmKeypad::new());
        let mut driver = Self { comparator, dom };
        driver.sync_dom();
        driver
    }

    /// Returns the comparator
    #[must_use]
    pub fn comparator(&self) -> &WasmComparator {
        &self.comparator
    }

    /// Returns the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Simulates a click on an element
    pub fn click(&mut self, element_id: &str) {
        self.dom.dispatch_event(DomEvent::click(element_id));
        self.comparator.handle_click(element_id);
        self.sync_dom();
    }

    /// Simulates a key press on the document
    pub fn key_down(&mut self, key: &str, shift: bool) {
        let event = if shift {
            DomEvent::key_down_shifted(key)
        } else {
            DomEvent::key_down(key)
        };
        self.dom.dispatch_event(event);
        self.comparator.handle_key(key, shift);
        self.sync_dom();
    }

    fn sync_dom(&mut self) {
        self.comparator.render(&mut self.dom);
    }

    fn text(&self, id: &str) -> String {
        self.dom.get_element_text(id).unwrap_or_default().to_string()
    }
}

impl ComparatorDriver for WasmDriver {
    fn press(&mut self, symbol: &str) {
        // Symbols reach the page through keypad buttons, found by data-key
        let button = self
            .dom
            .ids_with_class("key")
            .into_iter()
            .find(|id| {
                self.dom
                    .get_element(id)
                    .and_then(|e| e.get_attr("data-key"))
                    == Some(symbol)
            })
            .map(str::to_string);
        match button {
            Some(id) => self.click(&id),
            None => {
                self.comparator.handle_symbol(symbol);
                self.sync_dom();
            }
        }
    }

    fn tap(&mut self, id: FieldId) {
        self.click(&id.element_id());
    }

    fn field_text(&self, id: FieldId) -> String {
        self.text(&id.element_id())
    }

    fn active_field(&self) -> Option<FieldId> {
        match self.dom.ids_with_class(ACTIVE_CLASS).as_slice() {
            [only] => FieldId::from_element_id(only),
            _ => None,
        }
    }

    fn unit_price_text(&self, slot: Slot) -> String {
        self.text(&unit_price_id(slot))
    }

    fn message(&self) -> String {
        self.text(RESULT_TEXT_ID)
    }

    fn is_winner(&self, slot: Slot) -> bool {
        self.dom.has_class(&card_id(slot), WINNER_CLASS)
    }

    fn is_neutral(&self) -> bool {
        self.dom.has_class(RESULT_BANNER_ID, NEUTRAL_CLASS)
    }

    fn reset(&mut self) {
        self.comparator.reset();
        self.dom.clear_event_history();
        self.sync_dom();
    }
}
