//! Focus cursor over the four input fields

use serde::{Deserialize, Serialize};

use super::field::{FieldId, FieldKind, Slot};

/// Cyclic order in which `NEXT` visits the fields
pub const FIELD_PROGRESSION: [FieldId; 4] = [
    FieldId::new(Slot::A, FieldKind::Price),
    FieldId::new(Slot::A, FieldKind::Amount),
    FieldId::new(Slot::B, FieldKind::Price),
    FieldId::new(Slot::B, FieldKind::Amount),
];

/// The single field currently being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusCursor {
    active: FieldId,
}

impl Default for FocusCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusCursor {
    /// Cursor on (A, price)
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: FIELD_PROGRESSION[0],
        }
    }

    /// Currently active field
    #[must_use]
    pub const fn active(&self) -> FieldId {
        self.active
    }

    /// Returns true if `id` is the active field
    #[must_use]
    pub fn is_active(&self, id: FieldId) -> bool {
        self.active == id
    }

    /// Moves the cursor to `id`
    pub fn set_active(&mut self, id: FieldId) {
        self.active = id;
    }

    /// Moves to the successor in [`FIELD_PROGRESSION`], wrapping at the end
    pub fn advance(&mut self) {
        let idx = self.position();
        self.active = FIELD_PROGRESSION[(idx + 1) % FIELD_PROGRESSION.len()];
    }

    /// Moves to the predecessor in [`FIELD_PROGRESSION`], wrapping at the start
    pub fn retreat(&mut self) {
        let len = FIELD_PROGRESSION.len();
        let idx = self.position();
        self.active = FIELD_PROGRESSION[(idx + len - 1) % len];
    }

    fn position(&self) -> usize {
        FIELD_PROGRESSION
            .iter()
            .position(|f| *f == self.active)
            .unwrap_or(0)
    }
}
