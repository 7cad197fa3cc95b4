//! Unit Price Comparator - keypad-driven price-per-unit comparison
//!
//! Two products, each with a price and an amount, are typed in through an
//! on-screen keypad. The cheaper product per unit is highlighted together
//! with the difference. The same core drives a terminal UI and a browser
//! page, and both are verified by one set of driver checks.
//!
//! # Probar Testing Principles
//!
//! - **Error prevention**: the edit rules make malformed buffers unreachable
//! - **Poka-Yoke**: undefined unit prices and failed caches degrade, never panic
//! - **Balanced testing**: identical driver checks run against TUI and WASM
//! - **Visual feedback**: every event yields a fresh render-ready view
//!
//! # Example
//!
//! ```rust
//! use unit_price::prelude::*;
//!
//! let mut state = AppState::new();
//! for symbol in ["1", "00", "0", "NEXT", "4", "NEXT", "9", "00", "NEXT", "3"] {
//!     state.press_symbol(symbol);
//! }
//!
//! let view = state.view();
//! assert_eq!(view.slot(Slot::A).unwrap().unit_price, "250 ¥/unit");
//! assert_eq!(view.message, "A is cheaper by ¥50 per unit!");
//! assert_eq!(state.comparison().winner(), Some(Slot::A));
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod commands;
pub mod config;
pub mod core;
pub mod driver;
pub mod error;
pub mod logging;
pub mod offline;

#[cfg(feature = "tui")]
pub mod tui;

/// WASM module - always available for testing
/// (Mock DOM allows testing without actual browser bindings)
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CacheConfig, ColorChoice, Config, Verbosity};
    pub use crate::core::{
        AppState, Comparison, Event, FieldBuffer, FieldId, FieldKind, FocusCursor, Key, Slot,
        Transition, ViewModel,
    };
    pub use crate::driver::ComparatorDriver;
    pub use crate::error::{Result, UnitPriceError};
    pub use crate::offline::{AssetWorker, CacheStorage, Network, Request, Response};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    pub use crate::wasm::{DomElement, DomEvent, MockDom, WasmComparator, WasmDriver};
}
