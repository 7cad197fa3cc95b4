//! Product slots and field identifiers
//!
//! Probar: Error prevention - closed enums make an invalid focus target
//! unrepresentable

use serde::{Deserialize, Serialize};

/// One of the two products being compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    /// Product A
    A,
    /// Product B
    B,
}

impl Slot {
    /// Both slots, in display order
    pub const ALL: [Slot; 2] = [Slot::A, Slot::B];

    /// Upper-case label used in messages ("A" / "B")
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }

    /// Lower-case key used in element ids ("a" / "b")
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
        }
    }
}

/// The sub-value of a slot being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Total price of the product
    Price,
    /// Number of units in the product
    Amount,
}

impl FieldKind {
    /// Both field kinds, in display order
    pub const ALL: [FieldKind; 2] = [FieldKind::Price, FieldKind::Amount];

    /// Key used in element ids ("price" / "amount")
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Amount => "amount",
        }
    }

    /// Human label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Price => "Price",
            Self::Amount => "Amount",
        }
    }
}

/// A (slot, field) pair addressing one of the four buffers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldId {
    /// Owning product
    pub slot: Slot,
    /// Which sub-value
    pub field: FieldKind,
}

impl FieldId {
    /// Creates a field id
    #[must_use]
    pub const fn new(slot: Slot, field: FieldKind) -> Self {
        Self { slot, field }
    }

    /// DOM element id of the field display, e.g. `display-price-a`
    #[must_use]
    pub fn element_id(self) -> String {
        format!("display-{}-{}", self.field.key(), self.slot.key())
    }

    /// Parses an element id produced by [`FieldId::element_id`]
    #[must_use]
    pub fn from_element_id(id: &str) -> Option<Self> {
        let rest = id.strip_prefix("display-")?;
        let (field, slot) = rest.split_once('-')?;
        let field = match field {
            "price" => FieldKind::Price,
            "amount" => FieldKind::Amount,
            _ => return None,
        };
        let slot = match slot {
            "a" => Slot::A,
            "b" => Slot::B,
            _ => return None,
        };
        Some(Self::new(slot, field))
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.slot.label(), self.field.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_id_format() {
        let id = FieldId::new(Slot::B, FieldKind::Amount);
        assert_eq!(id.element_id(), "display-amount-b");
    }

    #[test]
    fn test_element_id_parse_all() {
        for slot in Slot::ALL {
            for field in FieldKind::ALL {
                let id = FieldId::new(slot, field);
                assert_eq!(FieldId::from_element_id(&id.element_id()), Some(id));
            }
        }
    }

    #[test]
    fn test_element_id_parse_rejects_unknown() {
        assert_eq!(FieldId::from_element_id("display-weight-a"), None);
        assert_eq!(FieldId::from_element_id("display-price-c"), None);
        assert_eq!(FieldId::from_element_id("unit-price-a"), None);
    }

    #[test]
    fn test_display() {
        let id = FieldId::new(Slot::A, FieldKind::Price);
        assert_eq!(id.to_string(), "A Price");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&FieldId::new(Slot::A, FieldKind::Amount)).unwrap();
        assert_eq!(json, r#"{"slot":"a","field":"amount"}"#);
    }
}
