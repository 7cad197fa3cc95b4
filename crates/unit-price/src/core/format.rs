//! Display formatting helpers
//!
//! Fixed en-US conventions: `,` groups thousands, `.` separates decimals.

/// Thousands separator used by every grouped number
pub const GROUP_SEPARATOR: char = ',';

/// Groups the decimal digits of `n` in threes, e.g. `1234567` -> `"1,234,567"`
#[must_use]
pub fn group_thousands(n: i128) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    let first = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - first) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}

/// Rounds half-up to the nearest integer and groups thousands
#[must_use]
pub fn format_rounded(value: f64) -> String {
    let rounded = (value + 0.5).floor();
    let n = rounded as i128;
    // -0.4 rounds to -0; show it as 0
    group_thousands(if n == 0 { 0 } else { n })
}

/// Extra digits rendered past the requested precision when deciding rounding
const GUARD_DIGITS: usize = 32;

/// Fixed-point rendering with exactly `digits` decimals
///
/// Exact halfway cases round up (`0.125` -> `"0.13"`), unlike `format!`
/// which rounds them to even.
#[must_use]
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let wide = format!("{:.*}", digits + GUARD_DIGITS, value.abs());
    let Some(dot) = wide.find('.') else {
        return wide;
    };
    let cut = if digits == 0 { dot } else { dot + 1 + digits };
    let (kept, rest) = wide.split_at(cut);
    let round_up = rest
        .chars()
        .find(char::is_ascii_digit)
        .is_some_and(|c| c >= '5');

    let mut out = if round_up {
        increment_last_digit(kept)
    } else {
        kept.to_string()
    };
    if value.is_sign_negative() && out.chars().any(|c| matches!(c, '1'..='9')) {
        out.insert(0, '-');
    }
    out
}

/// Adds one unit in the last place of a plain decimal string
fn increment_last_digit(number: &str) -> String {
    let mut bytes = number.as_bytes().to_vec();
    let mut carry = true;
    for b in bytes.iter_mut().rev() {
        if !carry {
            break;
        }
        match *b {
            b'.' => {}
            b'9' => *b = b'0',
            d => {
                *b = d + 1;
                carry = false;
            }
        }
    }
    let mut out = String::from_utf8(bytes).unwrap_or_default();
    if carry {
        out.insert(0, '1');
    }
    out
}

/// Renders a raw field buffer for display
///
/// - empty buffer shows `"0"`
/// - a trailing point is kept so the user sees the decimal being typed
/// - the integer part is grouped, the fraction is shown as typed
#[must_use]
pub fn format_field(buffer: &str) -> String {
    if buffer.is_empty() {
        return "0".to_string();
    }
    let (int_part, frac_part) = match buffer.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (buffer, None),
    };
    let int_value: i128 = int_part.parse().unwrap_or(0);
    let mut out = group_thousands(int_value);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Strips grouping separators so a displayed number can be parsed again
#[must_use]
pub fn strip_grouping(display: &str) -> String {
    display.chars().filter(|c| *c != GROUP_SEPARATOR).collect()
}
