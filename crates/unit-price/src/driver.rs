//! Unified Comparator Driver - The Probar Way
//!
//! **Write the behaviour checks once, run them against every front end.**
//!
//! Probar: Balanced testing - Balanced testing across platforms

use crate::core::{FieldId, FieldKind, Slot};

/// Abstract driver for comparator interactions
///
/// Both the TUI and the WASM front end implement this, so the `verify_*`
/// functions below exercise the full input → render path of each.
///
/// # Example
///
/// ```rust,ignore
/// fn verify_simple<D: ComparatorDriver>(driver: &mut D) {
///     driver.type_keys("1 0 0 0 NEXT 4");
///     assert_eq!(driver.unit_price_text(Slot::A), "250 ¥/unit");
/// }
/// ```
pub trait ComparatorDriver {
    /// Presses one keypad symbol (`0`-`9`, `00`, `.`, `AC`, `BS`, `NEXT`)
    fn press(&mut self, symbol: &str);

    /// Taps a field display, moving focus there
    fn tap(&mut self, id: FieldId);

    /// Displayed text of a field
    fn field_text(&self, id: FieldId) -> String;

    /// Field that is currently highlighted
    fn active_field(&self) -> Option<FieldId>;

    /// Displayed unit-price line of a product
    fn unit_price_text(&self, slot: Slot) -> String;

    /// Displayed verdict
    fn message(&self) -> String;

    /// Whether a product card is highlighted as cheaper
    fn is_winner(&self, slot: Slot) -> bool;

    /// Whether the verdict banner is neutral
    fn is_neutral(&self) -> bool;

    /// Returns to the start-up state
    fn reset(&mut self);

    /// Presses whitespace-separated symbols in order
    fn type_keys(&mut self, symbols: &str) {
        for symbol in symbols.split_whitespace() {
            self.press(symbol);
        }
    }

    /// Taps a field and types into it
    fn fill(&mut self, id: FieldId, symbols: &str) {
        self.tap(id);
        self.press("AC");
        self.type_keys(symbols);
    }
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{ComparatorDriver, FieldId, Slot};
    use crate::tui::UnitPriceApp;

    /// TUI-specific driver wrapping the comparator app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: UnitPriceApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: UnitPriceApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &UnitPriceApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut UnitPriceApp {
            &mut self.app
        }
    }

    impl ComparatorDriver for TuiDriver {
        fn press(&mut self, symbol: &str) {
            self.app.press_symbol(symbol);
        }

        fn tap(&mut self, id: FieldId) {
            self.app.tap_field(id);
        }

        fn field_text(&self, id: FieldId) -> String {
            self.app
                .view()
                .field(id)
                .map(|f| f.text.clone())
                .unwrap_or_default()
        }

        fn active_field(&self) -> Option<FieldId> {
            self.app.view().active_field()
        }

        fn unit_price_text(&self, slot: Slot) -> String {
            self.app
                .view()
                .slot(slot)
                .map(|s| s.unit_price.clone())
                .unwrap_or_default()
        }

        fn message(&self) -> String {
            self.app.view().message
        }

        fn is_winner(&self, slot: Slot) -> bool {
            self.app.view().slot(slot).is_some_and(|s| s.winner)
        }

        fn is_neutral(&self) -> bool {
            self.app.view().neutral
        }

        fn reset(&mut self) {
            self.app.reset();
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

const A_PRICE: FieldId = FieldId::new(Slot::A, FieldKind::Price);
const A_AMOUNT: FieldId = FieldId::new(Slot::A, FieldKind::Amount);
const B_PRICE: FieldId = FieldId::new(Slot::B, FieldKind::Price);
const B_AMOUNT: FieldId = FieldId::new(Slot::B, FieldKind::Amount);

// ===== Unified Checks =====
// These work with ANY ComparatorDriver implementation

/// Verifies the initial screen
pub fn verify_initial_state<D: ComparatorDriver>(driver: &mut D) {
    driver.reset();
    for id in [A_PRICE, A_AMOUNT, B_PRICE, B_AMOUNT] {
        assert_eq!(driver.field_text(id), "0");
    }
    assert_eq!(driver.active_field(), Some(A_PRICE));
    assert_eq!(driver.unit_price_text(Slot::A), "-- ¥/unit");
    assert_eq!(driver.message(), "Enter numbers to compare");
    assert!(driver.is_neutral());
}

/// Verifies NEXT and taps move focus through the four fields
pub fn verify_focus_progression<D: ComparatorDriver>(driver: &mut D) {
    driver.reset();
    driver.press("NEXT");
    assert_eq!(driver.active_field(), Some(A_AMOUNT));
    driver.press("NEXT");
    assert_eq!(driver.active_field(), Some(B_PRICE));
    driver.press("NEXT");
    assert_eq!(driver.active_field(), Some(B_AMOUNT));
    driver.press("NEXT");
    assert_eq!(driver.active_field(), Some(A_PRICE));

    driver.tap(B_AMOUNT);
    assert_eq!(driver.active_field(), Some(B_AMOUNT));
    // tapping never edits
    assert_eq!(driver.field_text(B_AMOUNT), "0");
}

/// Verifies keypad edit rules through the rendered display
pub fn verify_edit_rules<D: ComparatorDriver>(driver: &mut D) {
    driver.reset();

    driver.type_keys("0 7");
    assert_eq!(driver.field_text(A_PRICE), "7");

    driver.type_keys("AC .");
    assert_eq!(driver.field_text(A_PRICE), "0.");
    driver.type_keys(". 5 .");
    assert_eq!(driver.field_text(A_PRICE), "0.5");

    driver.type_keys("AC 00");
    assert_eq!(driver.field_text(A_PRICE), "0");
    driver.type_keys("1 00 0");
    assert_eq!(driver.field_text(A_PRICE), "1,000");

    driver.type_keys("BS BS");
    assert_eq!(driver.field_text(A_PRICE), "10");

    driver.type_keys("AC 1 2 3 4 5 6 7 8 9 9");
    assert_eq!(driver.field_text(A_PRICE), "123,456,789");

    driver.type_keys("AC BS");
    assert_eq!(driver.field_text(A_PRICE), "0");

    // unknown symbols are ignored
    driver.type_keys("5 x %");
    assert_eq!(driver.field_text(A_PRICE), "5");
}

/// Verifies unit price display for both formatting bands
pub fn verify_unit_prices<D: ComparatorDriver>(driver: &mut D) {
    driver.reset();
    driver.fill(A_PRICE, "5");
    driver.fill(A_AMOUNT, "2");
    assert_eq!(driver.unit_price_text(Slot::A), "2.50 ¥/unit");

    driver.fill(A_PRICE, "1 2 3 4 5 6 7");
    driver.fill(A_AMOUNT, "1");
    assert_eq!(driver.unit_price_text(Slot::A), "1,234,567 ¥/unit");

    driver.fill(A_AMOUNT, "0");
    assert_eq!(driver.unit_price_text(Slot::A), "-- ¥/unit");
}

/// Verifies the verdict, highlight and banner state
pub fn verify_comparison<D: ComparatorDriver>(driver: &mut D) {
    driver.reset();
    driver.type_keys("1 00 0 NEXT 4 NEXT 9 00 NEXT 3");
    assert_eq!(driver.unit_price_text(Slot::A), "250 ¥/unit");
    assert_eq!(driver.unit_price_text(Slot::B), "300 ¥/unit");
    assert_eq!(driver.message(), "A is cheaper by ¥50 per unit!");
    assert!(driver.is_winner(Slot::A));
    assert!(!driver.is_winner(Slot::B));
    assert!(!driver.is_neutral());

    driver.fill(A_PRICE, "1 5 0 0");
    assert_eq!(driver.message(), "B is cheaper by ¥75 per unit!");
    assert!(driver.is_winner(Slot::B));
    assert!(!driver.is_winner(Slot::A));

    driver.fill(B_AMOUNT, "");
    assert_eq!(driver.message(), "Enter numbers to compare");
    assert!(!driver.is_winner(Slot::A));
    assert!(!driver.is_winner(Slot::B));
    assert!(driver.is_neutral());
}

/// Verifies identical unit prices
pub fn verify_tie<D: ComparatorDriver>(driver: &mut D) {
    driver.reset();
    driver.type_keys("1 0 NEXT 2 NEXT 1 0 NEXT 2");
    assert_eq!(driver.message(), "Unit prices are identical");
    assert!(!driver.is_winner(Slot::A));
    assert!(!driver.is_winner(Slot::B));
    assert!(driver.is_neutral());
}

/// Verifies a small difference keeps one decimal
pub fn verify_small_difference<D: ComparatorDriver>(driver: &mut D) {
    driver.reset();
    driver.type_keys("5 NEXT 2 NEXT 3 NEXT 1");
    assert_eq!(driver.message(), "A is cheaper by ¥0.5 per unit!");
}

/// Complete verification suite - runs every check
pub fn run_full_suite<D: ComparatorDriver>(driver: &mut D) {
    verify_initial_state(driver);
    verify_focus_progression(driver);
    verify_edit_rules(driver);
    verify_unit_prices(driver);
    verify_comparison(driver);
    verify_tie(driver);
    verify_small_difference(driver);
}
