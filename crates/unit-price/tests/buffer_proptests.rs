//! Property-based tests for the edit rules, focus cycle and formatting
//!
//! Probar: Error prevention - Property tests catch edge cases that humans miss

use proptest::prelude::*;
use unit_price::core::format::strip_grouping;
use unit_price::core::pricing::parse_unit_price_display;
use unit_price::core::{
    format_difference, format_field, format_unit_price, parse_leading_decimal, AppState, Event,
    FieldBuffer, Key, Slot, MAX_LEN,
};

// ===== Strategy definitions =====

/// Generate any valid digit (0-9)
fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

/// Keys that append digits
fn digit_key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        4 => digit_strategy().prop_map(Key::Digit),
        1 => Just(Key::DoubleZero),
    ]
}

/// Any keypad key
fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        6 => digit_strategy().prop_map(Key::Digit),
        1 => Just(Key::DoubleZero),
        1 => Just(Key::Point),
        1 => Just(Key::Clear),
        1 => Just(Key::Backspace),
        1 => Just(Key::Next),
    ]
}

fn buffer_from(keys: &[Key]) -> FieldBuffer {
    let mut buffer = FieldBuffer::new();
    for &key in keys {
        buffer.apply(key);
    }
    buffer
}

// ===== Edit rule properties =====

proptest! {
    /// Digit presses never grow a buffer past the cap
    #[test]
    fn prop_digit_presses_respect_cap(keys in prop::collection::vec(digit_key_strategy(), 0..40)) {
        let buffer = buffer_from(&keys);
        prop_assert!(buffer.len() <= MAX_LEN);
        prop_assert!(!buffer.has_point());
    }

    /// Any key sequence keeps at most one point and at most nine digits
    #[test]
    fn prop_any_sequence_keeps_invariants(keys in prop::collection::vec(key_strategy(), 0..60)) {
        let buffer = buffer_from(&keys);
        let text = buffer.as_str();
        prop_assert!(text.matches('.').count() <= 1);
        prop_assert!(text.chars().all(|c| c.is_ascii_digit() || c == '.'));
        prop_assert!(text.chars().filter(char::is_ascii_digit).count() <= MAX_LEN);
    }

    /// No leading zero except "0" itself or "0." prefixes
    #[test]
    fn prop_no_redundant_leading_zero(keys in prop::collection::vec(key_strategy(), 0..60)) {
        let buffer = buffer_from(&keys);
        let text = buffer.as_str();
        if text.len() > 1 && text.starts_with('0') {
            prop_assert_eq!(text.as_bytes()[1], b'.');
        }
    }

    /// AC always empties the buffer
    #[test]
    fn prop_clear_empties(keys in prop::collection::vec(key_strategy(), 0..40)) {
        let mut buffer = buffer_from(&keys);
        buffer.apply(Key::Clear);
        prop_assert!(buffer.is_empty());
    }

    /// "0" followed by a digit becomes that digit
    #[test]
    fn prop_zero_then_digit(d in digit_strategy()) {
        let buffer = buffer_from(&[Key::Digit(0), Key::Digit(d)]);
        prop_assert_eq!(buffer.as_str(), d.to_string());
    }

    /// NEXT never edits a buffer
    #[test]
    fn prop_next_is_not_an_edit(keys in prop::collection::vec(key_strategy(), 0..40)) {
        let mut buffer = buffer_from(&keys);
        let before = buffer.clone();
        prop_assert!(!buffer.apply(Key::Next));
        prop_assert_eq!(buffer, before);
    }
}

// ===== Focus properties =====

proptest! {
    /// Four NEXT presses return to the starting field
    #[test]
    fn prop_next_cycles(keys in prop::collection::vec(key_strategy(), 0..30)) {
        let mut state = AppState::new();
        for &key in &keys {
            state.press_key(key);
        }
        let start = state.focus();
        for _ in 0..4 {
            state.press_key(Key::Next);
        }
        prop_assert_eq!(state.focus(), start);
    }

    /// Shift+Tab undoes NEXT
    #[test]
    fn prop_previous_undoes_next(keys in prop::collection::vec(key_strategy(), 0..30)) {
        let mut state = AppState::new();
        for &key in &keys {
            state.press_key(key);
        }
        let start = state.focus();
        state.press_key(Key::Next);
        state.handle(Event::FocusPrevious);
        prop_assert_eq!(state.focus(), start);
    }

    /// Unit prices are undefined or finite and non-negative
    #[test]
    fn prop_unit_price_is_well_formed(keys in prop::collection::vec(key_strategy(), 0..80)) {
        let mut state = AppState::new();
        for &key in &keys {
            state.press_key(key);
        }
        for slot in Slot::ALL {
            if let Some(v) = state.unit_price(slot) {
                prop_assert!(v.is_finite());
                prop_assert!(v >= 0.0);
            }
        }
    }
}

// ===== Formatting idempotence =====

proptest! {
    /// Re-formatting a displayed field yields the same text
    #[test]
    fn prop_field_display_idempotent(keys in prop::collection::vec(key_strategy(), 0..40)) {
        let shown = format_field(buffer_from(&keys).as_str());
        prop_assert_eq!(format_field(&strip_grouping(&shown)), shown.clone());
    }

    /// Re-formatting a displayed unit price yields the same text
    ///
    /// Values in (0, 0.005) display as "0.00", which re-formats as "0".
    /// Values in [9.995, 10) display as "10.00", which re-formats as "10".
    #[test]
    fn prop_unit_price_display_idempotent(
        v in (f64::MIN_POSITIVE..1.0e9)
            .prop_filter("rounds down to zero", |v| *v >= 0.005)
            .prop_filter("rounds across threshold", |v| !(9.995..10.0).contains(v))
    ) {
        let shown = format_unit_price(Some(v));
        let reparsed = parse_unit_price_display(&shown);
        prop_assert_eq!(format_unit_price(reparsed), shown);
    }

    /// Re-formatting a displayed difference yields the same text
    ///
    /// Values in [0.95, 1) display as "1.0", which re-formats as "1".
    #[test]
    fn prop_difference_display_idempotent(
        d in (0.0f64..1.0e9).prop_filter("rounds across threshold", |d| !(0.95..1.0).contains(d))
    ) {
        let shown = format_difference(d);
        let reparsed = parse_leading_decimal(&strip_grouping(&shown));
        prop_assert!(reparsed.is_some());
        prop_assert_eq!(format_difference(reparsed.unwrap_or_default()), shown);
    }
}

// ===== Deterministic edge cases =====

#[test]
fn test_threshold_band_is_not_idempotent() {
    assert_eq!(format_unit_price(Some(9.996)), "10.00");
    assert_eq!(format_unit_price(parse_unit_price_display("10.00")), "10");
    assert_eq!(format_difference(0.96), "1.0");
}

#[test]
fn test_tiny_unit_price_band_is_not_idempotent() {
    // price 1, amount 1000
    let mut state = AppState::new();
    for symbol in ["1", "NEXT", "1", "00", "0"] {
        state.press_symbol(symbol);
    }
    let v = state.unit_price(Slot::A);
    assert_eq!(v, Some(0.001));
    let shown = format_unit_price(v);
    assert_eq!(shown, "0.00");
    assert_eq!(format_unit_price(parse_unit_price_display(&shown)), "0");
    assert_eq!(format_unit_price(Some(0.0049)), "0.00");
    assert_eq!(format_unit_price(Some(0.005)), "0.01");
}

#[test]
fn test_point_may_follow_full_buffer() {
    let buffer = FieldBuffer::from_keys("123456789.");
    assert_eq!(buffer.as_str(), "123456789.");
    assert_eq!(format_field(buffer.as_str()), "123,456,789.");
}
