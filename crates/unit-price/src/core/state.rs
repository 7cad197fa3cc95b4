//! Application state, events and the render-ready view model
//!
//! Probar: Error prevention - State machine prevents invalid transitions
//!
//! `AppState` is owned by the front end and changed only through
//! [`AppState::apply`] / [`AppState::handle`]. Derived values (unit prices,
//! the comparison) are never stored; [`AppState::view`] recomputes them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::buffer::{FieldBuffer, Key};
use super::compare::Comparison;
use super::field::{FieldId, FieldKind, Slot};
use super::focus::{FocusCursor, FIELD_PROGRESSION};
use super::format::format_field;
use super::pricing::{unit_price, unit_price_label};

/// Inputs accepted by the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A field display was tapped
    TapField(FieldId),
    /// A keypad key was pressed
    PressKey(Key),
    /// Move focus to the previous field (keyboard only)
    FocusPrevious,
}

/// What an event changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A buffer's text changed
    Edited(FieldId),
    /// The focus cursor moved
    Focused(FieldId),
    /// Nothing changed
    Unchanged,
}

/// Price and amount buffers of one product
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInput {
    /// Total price as typed
    pub price: FieldBuffer,
    /// Unit count as typed
    pub amount: FieldBuffer,
}

impl ProductInput {
    fn get(&self, field: FieldKind) -> &FieldBuffer {
        match field {
            FieldKind::Price => &self.price,
            FieldKind::Amount => &self.amount,
        }
    }

    fn get_mut(&mut self, field: FieldKind) -> &mut FieldBuffer {
        match field {
            FieldKind::Price => &mut self.price,
            FieldKind::Amount => &mut self.amount,
        }
    }
}

/// The whole session state: four buffers and the focus cursor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    a: ProductInput,
    b: ProductInput,
    focus: FocusCursor,
}

impl AppState {
    /// Empty buffers, focus on (A, price)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inputs of one product
    #[must_use]
    pub fn product(&self, slot: Slot) -> &ProductInput {
        match slot {
            Slot::A => &self.a,
            Slot::B => &self.b,
        }
    }

    fn product_mut(&mut self, slot: Slot) -> &mut ProductInput {
        match slot {
            Slot::A => &mut self.a,
            Slot::B => &mut self.b,
        }
    }

    /// Buffer addressed by `id`
    #[must_use]
    pub fn buffer(&self, id: FieldId) -> &FieldBuffer {
        self.product(id.slot).get(id.field)
    }

    /// Currently focused field
    #[must_use]
    pub fn focus(&self) -> FieldId {
        self.focus.active()
    }

    /// Pure transition: consumes the state and returns the next one
    #[must_use]
    pub fn apply(mut self, event: Event) -> Self {
        self.handle(event);
        self
    }

    /// In-place transition, reporting what changed
    pub fn handle(&mut self, event: Event) -> Transition {
        let transition = match event {
            Event::TapField(id) => {
                self.focus.set_active(id);
                Transition::Focused(id)
            }
            Event::FocusPrevious => {
                self.focus.retreat();
                Transition::Focused(self.focus.active())
            }
            Event::PressKey(Key::Next) => {
                self.focus.advance();
                Transition::Focused(self.focus.active())
            }
            Event::PressKey(key) => {
                let id = self.focus.active();
                if self.product_mut(id.slot).get_mut(id.field).apply(key) {
                    Transition::Edited(id)
                } else {
                    Transition::Unchanged
                }
            }
        };
        debug!(?event, ?transition, "state transition");
        transition
    }

    /// Taps a field (focus only)
    pub fn tap_field(&mut self, id: FieldId) -> Transition {
        self.handle(Event::TapField(id))
    }

    /// Presses a keypad key
    pub fn press_key(&mut self, key: Key) -> Transition {
        self.handle(Event::PressKey(key))
    }

    /// Presses a raw keypad symbol; unknown symbols are ignored
    pub fn press_symbol(&mut self, symbol: &str) -> Transition {
        match Key::from_symbol(symbol) {
            Some(key) => self.press_key(key),
            None => {
                debug!(symbol, "ignoring unknown key symbol");
                Transition::Unchanged
            }
        }
    }

    /// Unit price of a product, recomputed from its buffers
    #[must_use]
    pub fn unit_price(&self, slot: Slot) -> Option<f64> {
        let product = self.product(slot);
        unit_price(product.price.as_str(), product.amount.as_str())
    }

    /// Comparison of both products, recomputed from the buffers
    #[must_use]
    pub fn comparison(&self) -> Comparison {
        Comparison::of(self.unit_price(Slot::A), self.unit_price(Slot::B))
    }

    /// Everything a front end needs to draw the current state
    #[must_use]
    pub fn view(&self) -> ViewModel {
        let comparison = self.comparison();
        let winner = comparison.winner();
        ViewModel {
            fields: FIELD_PROGRESSION
                .iter()
                .map(|&id| FieldView {
                    id,
                    text: format_field(self.buffer(id).as_str()),
                    active: self.focus.is_active(id),
                })
                .collect(),
            slots: Slot::ALL
                .iter()
                .map(|&slot| SlotView {
                    slot,
                    unit_price: unit_price_label(self.unit_price(slot)),
                    winner: winner == Some(slot),
                })
                .collect(),
            message: comparison.message(),
            neutral: comparison.is_neutral(),
            comparison,
        }
    }
}

/// Display state of one input field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldView {
    /// Which field
    pub id: FieldId,
    /// Formatted buffer text
    pub text: String,
    /// Whether this field has focus
    pub active: bool,
}

/// Display state of one product card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotView {
    /// Which product
    pub slot: Slot,
    /// Unit price line including the suffix
    pub unit_price: String,
    /// Whether this card is highlighted as cheaper
    pub winner: bool,
}

/// Render-ready output of the core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewModel {
    /// The four fields in progression order
    pub fields: Vec<FieldView>,
    /// Both product cards
    pub slots: Vec<SlotView>,
    /// Verdict text
    pub message: String,
    /// Whether the banner uses neutral styling
    pub neutral: bool,
    /// Raw comparison outcome
    pub comparison: Comparison,
}

impl ViewModel {
    /// View of one field
    #[must_use]
    pub fn field(&self, id: FieldId) -> Option<&FieldView> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// View of one product card
    #[must_use]
    pub fn slot(&self, slot: Slot) -> Option<&SlotView> {
        self.slots.iter().find(|s| s.slot == slot)
    }

    /// The focused field
    #[must_use]
    pub fn active_field(&self) -> Option<FieldId> {
        self.fields.iter().find(|f| f.active).map(|f| f.id)
    }
}
