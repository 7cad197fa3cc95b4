//! Unit price calculation
//!
//! Probar: Error prevention - a missing or non-positive amount yields `None`
//! instead of a division error, so callers cannot forget the empty case.

use super::format::{format_rounded, strip_grouping, to_fixed};

/// Unit prices strictly between zero and this value show two decimals
pub const UNIT_PRICE_DECIMAL_THRESHOLD: f64 = 10.0;

/// Decimals shown below [`UNIT_PRICE_DECIMAL_THRESHOLD`]
pub const UNIT_PRICE_DECIMALS: usize = 2;

/// Placeholder shown when a slot's unit price is undefined
pub const UNDEFINED_UNIT_PRICE: &str = "--";

/// Parses the longest leading decimal number in `text`
///
/// Accepts optional leading whitespace, an optional sign, digits with an
/// optional fraction, and an optional exponent. Anything after the number is
/// ignored. Returns `None` if no digits are found.
#[must_use]
pub fn parse_leading_decimal(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    let number = s.get(..end)?;
    let number = number.strip_suffix('.').unwrap_or(number);
    number.parse::<f64>().ok()
}

/// Price per one unit, or `None` when either value is missing or the
/// amount is not positive
#[must_use]
pub fn unit_price(price: &str, amount: &str) -> Option<f64> {
    let price = parse_leading_decimal(price)?;
    let amount = parse_leading_decimal(amount)?;
    if amount <= 0.0 {
        return None;
    }
    let ratio = price / amount;
    ratio.is_finite().then_some(ratio)
}

/// Formats a unit price for display
///
/// Values in `(0, 10)` keep two decimals; everything else is rounded to an
/// integer and grouped. Undefined prices show [`UNDEFINED_UNIT_PRICE`].
#[must_use]
pub fn format_unit_price(value: Option<f64>) -> String {
    match value {
        None => UNDEFINED_UNIT_PRICE.to_string(),
        Some(v) if v > 0.0 && v < UNIT_PRICE_DECIMAL_THRESHOLD => {
            to_fixed(v, UNIT_PRICE_DECIMALS)
        }
        Some(v) => format_rounded(v),
    }
}

/// Suffix appended to every unit price line
pub const UNIT_SUFFIX: &str = "¥/unit";

/// Unit price line as shown under a product, e.g. `"250 ¥/unit"`
#[must_use]
pub fn unit_price_label(value: Option<f64>) -> String {
    format!("{} {UNIT_SUFFIX}", format_unit_price(value))
}

/// Parses a displayed unit price back into a value
#[must_use]
pub fn parse_unit_price_display(display: &str) -> Option<f64> {
    if display == UNDEFINED_UNIT_PRICE {
        return None;
    }
    parse_leading_decimal(&strip_grouping(display))
}
