//! WASM front end for the comparator
//!
//! Everything except [`BrowserComparator`] runs natively against a mock DOM,
//! so the page wiring is covered by ordinary tests.
//!
//! Probar: Balanced testing - Balanced testing across TUI and WASM

#[cfg(feature = "wasm")]
mod browser;
mod comparator;
mod dom;
mod driver;
mod keypad;
mod render;

#[cfg(feature = "wasm")]
pub use browser::BrowserComparator;
pub use comparator::WasmComparator;
pub use dom::{
    card_id, unit_price_id, DomElement, DomEvent, MockDom, ACTIVE_CLASS, NEUTRAL_CLASS,
    NUMPAD_ID, RESULT_BANNER_ID, RESULT_TEXT_ID, WINNER_CLASS,
};
pub use driver::WasmDriver;
pub use keypad::{KeypadAction, KeypadButtonDef, MockDomKeypadExt, WasmKeypad};
pub use render::{DomSink, RenderSync};
