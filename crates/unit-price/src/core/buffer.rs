//! Numeric input buffer and keypad edit rules
//!
//! Probar: Error prevention - every key either produces a valid buffer or
//! leaves it untouched; there is no failure path.

use serde::{Deserialize, Serialize};

/// Maximum buffer length accepted by digit keys
pub const MAX_LEN: usize = 9;

/// Keypad key alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// A single digit (0-9)
    Digit(u8),
    /// Double zero
    DoubleZero,
    /// Decimal point
    Point,
    /// Clear the active buffer
    Clear,
    /// Remove the last character
    Backspace,
    /// Advance focus to the next field
    Next,
}

impl Key {
    /// Every key on the keypad
    pub const ALL: [Key; 15] = [
        Key::Digit(0),
        Key::Digit(1),
        Key::Digit(2),
        Key::Digit(3),
        Key::Digit(4),
        Key::Digit(5),
        Key::Digit(6),
        Key::Digit(7),
        Key::Digit(8),
        Key::Digit(9),
        Key::DoubleZero,
        Key::Point,
        Key::Clear,
        Key::Backspace,
        Key::Next,
    ];

    /// Parses a keypad symbol (`"0"`..`"9"`, `"00"`, `"."`, `"AC"`, `"BS"`, `"NEXT"`)
    ///
    /// Unknown symbols return `None` and are expected to be ignored.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "00" => Some(Self::DoubleZero),
            "." => Some(Self::Point),
            "AC" => Some(Self::Clear),
            "BS" => Some(Self::Backspace),
            "NEXT" => Some(Self::Next),
            s if s.len() == 1 => {
                let c = s.chars().next()?;
                c.to_digit(10).map(|d| Self::Digit(d as u8))
            }
            _ => None,
        }
    }

    /// The keypad symbol for this key
    #[must_use]
    pub fn symbol(self) -> &'static str {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match self {
            Self::Digit(d) => DIGITS.get(usize::from(d)).copied().unwrap_or("?"),
            Self::DoubleZero => "00",
            Self::Point => ".",
            Self::Clear => "AC",
            Self::Backspace => "BS",
            Self::Next => "NEXT",
        }
    }

    /// Returns true if this key edits a buffer (everything except `NEXT`)
    #[must_use]
    pub const fn edits_buffer(self) -> bool {
        !matches!(self, Self::Next)
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Raw text of one partially typed, non-negative decimal number
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldBuffer {
    text: String,
}

impl FieldBuffer {
    /// Creates an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a buffer by replaying keypad symbols from empty
    ///
    /// Goes through the edit rules, so the result always satisfies the
    /// buffer invariants.
    #[must_use]
    pub fn from_keys(symbols: &str) -> Self {
        let mut buffer = Self::new();
        for c in symbols.chars() {
            if let Some(key) = Key::from_symbol(c.encode_utf8(&mut [0; 4])) {
                buffer.apply(key);
            }
        }
        buffer
    }

    /// Current text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters (ASCII only, so bytes == chars)
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if nothing has been typed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns true if the buffer contains a decimal point
    #[must_use]
    pub fn has_point(&self) -> bool {
        self.text.contains('.')
    }

    /// Applies one key, returning true if the text changed
    ///
    /// `NEXT` is a focus operation and never changes the buffer.
    pub fn apply(&mut self, key: Key) -> bool {
        let before = self.text.len();
        let changed = match key {
            Key::Clear => {
                let had_text = !self.text.is_empty();
                self.text.clear();
                had_text
            }
            Key::Backspace => self.text.pop().is_some(),
            Key::Next => false,
            Key::Point => self.push_point(),
            Key::DoubleZero => self.push_double_zero(),
            Key::Digit(d) => self.push_digit(d),
        };
        debug_assert!(self.text.matches('.').count() <= 1);
        debug_assert!(changed || self.text.len() == before);
        changed
    }

    fn push_point(&mut self) -> bool {
        if self.has_point() {
            return false;
        }
        if self.text.is_empty() {
            self.text.push('0');
        }
        self.text.push('.');
        true
    }

    fn push_double_zero(&mut self) -> bool {
        if self.text.is_empty() || self.text == "0" || self.text.len() + 2 > MAX_LEN {
            return false;
        }
        self.text.push_str("00");
        true
    }

    fn push_digit(&mut self, d: u8) -> bool {
        let Some(c) = char::from_digit(u32::from(d), 10) else {
            return false;
        };
        if self.text == "0" {
            self.text.clear();
            self.text.push(c);
            return c != '0';
        }
        if self.text.len() < MAX_LEN {
            self.text.push(c);
            return true;
        }
        false
    }
}

impl std::fmt::Display for FieldBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
