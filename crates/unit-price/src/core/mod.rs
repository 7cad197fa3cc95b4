//! Platform-independent comparator core
//!
//! Probar Principles:
//! - Error prevention: invalid input falls back to well-defined sentinel states
//! - Visual feedback: every change produces a fresh [`ViewModel`]
//!
//! Nothing in here can fail. Malformed numbers yield an undefined unit price,
//! unknown keys are no-ops, and a non-positive amount never divides.

pub mod buffer;
pub mod compare;
pub mod field;
pub mod focus;
pub mod format;
pub mod pricing;
pub mod state;

pub use buffer::{FieldBuffer, Key, MAX_LEN};
pub use compare::{format_difference, Comparison};
pub use field::{FieldId, FieldKind, Slot};
pub use focus::{FocusCursor, FIELD_PROGRESSION};
pub use format::format_field;
pub use pricing::{format_unit_price, parse_leading_decimal, unit_price};
pub use state::{AppState, Event, FieldView, ProductInput, SlotView, Transition, ViewModel};
