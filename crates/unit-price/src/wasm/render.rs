//! Render sync: pushes a [`ViewModel`] into the page
//!
//! Probar: Visual feedback - the DOM always reflects the latest state
//!
//! The same write sequence drives both the mock DOM and, behind the `wasm`
//! feature, the real document. [`DomSink`] is the seam between them.

use super::dom::{
    card_id, unit_price_id, MockDom, ACTIVE_CLASS, NEUTRAL_CLASS, RESULT_BANNER_ID,
    RESULT_TEXT_ID, WINNER_CLASS,
};
use crate::core::ViewModel;

/// Minimal DOM write surface needed to render the comparator
pub trait DomSink {
    /// Replaces an element's text
    fn set_text(&mut self, id: &str, text: &str);

    /// Adds or removes a class
    fn set_class(&mut self, id: &str, class: &str, on: bool);
}

impl DomSink for MockDom {
    fn set_text(&mut self, id: &str, text: &str) {
        self.set_element_text(id, text);
    }

    fn set_class(&mut self, id: &str, class: &str, on: bool) {
        self.toggle_class(id, class, on);
    }
}

/// Writes views into a [`DomSink`]
#[derive(Debug, Default, Clone, Copy)]
pub struct RenderSync;

impl RenderSync {
    /// Creates a render sync
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Applies every part of `view` to `sink`
    pub fn apply<S: DomSink + ?Sized>(&self, view: &ViewModel, sink: &mut S) {
        for field in &view.fields {
            let id = field.id.element_id();
            sink.set_text(&id, &field.text);
            sink.set_class(&id, ACTIVE_CLASS, field.active);
        }

        for slot in &view.slots {
            sink.set_text(&unit_price_id(slot.slot), &slot.unit_price);
            sink.set_class(&card_id(slot.slot), WINNER_CLASS, slot.winner);
        }

        sink.set_class(RESULT_BANNER_ID, NEUTRAL_CLASS, view.neutral);
        sink.set_text(RESULT_TEXT_ID, &view.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AppState, FieldId, FieldKind, Slot};

    fn render(state: &AppState) -> MockDom {
        let mut dom = MockDom::comparator();
        RenderSync::new().apply(&state.view(), &mut dom);
        dom
    }

    fn typed(symbols: &str) -> AppState {
        let mut state = AppState::new();
        for s in symbols.split_whitespace() {
            state.press_symbol(s);
        }
        state
    }

    // ===== Initial render =====

    #[test]
    fn test_initial_render() {
        let dom = render(&AppState::new());
        assert_eq!(dom.get_element_text("display-price-a"), Some("0"));
        assert_eq!(dom.get_element_text("unit-price-a"), Some("-- ¥/unit"));
        assert_eq!(dom.get_element_text("unit-price-b"), Some("-- ¥/unit"));
        assert_eq!(
            dom.get_element_text(RESULT_TEXT_ID),
            Some("Enter numbers to compare")
        );
        assert!(dom.has_class(RESULT_BANNER_ID, NEUTRAL_CLASS));
        assert_eq!(dom.ids_with_class(ACTIVE_CLASS), vec!["display-price-a"]);
        assert!(dom.ids_with_class(WINNER_CLASS).is_empty());
    }

    // ===== Active field =====

    #[test]
    fn test_exactly_one_active_field() {
        let mut state = AppState::new();
        state.tap_field(FieldId::new(Slot::B, FieldKind::Price));
        let dom = render(&state);
        assert_eq!(dom.ids_with_class(ACTIVE_CLASS), vec!["display-price-b"]);
    }

    // ===== Verdict =====

    #[test]
    fn test_winner_render() {
        let dom = render(&typed("1 00 0 NEXT 4 NEXT 9 00 NEXT 3"));
        assert_eq!(dom.get_element_text("display-price-a"), Some("1,000"));
        assert_eq!(dom.get_element_text("unit-price-a"), Some("250 ¥/unit"));
        assert_eq!(dom.get_element_text("unit-price-b"), Some("300 ¥/unit"));
        assert_eq!(
            dom.get_element_text(RESULT_TEXT_ID),
            Some("A is cheaper by ¥50 per unit!")
        );
        assert_eq!(dom.ids_with_class(WINNER_CLASS), vec!["card-a"]);
        assert!(!dom.has_class(RESULT_BANNER_ID, NEUTRAL_CLASS));
    }

    #[test]
    fn test_rerender_clears_stale_classes() {
        let mut dom = render(&typed("1 00 0 NEXT 4 NEXT 9 00 NEXT 3"));
        let mut state = typed("1 00 0 NEXT 4 NEXT 9 00 NEXT 3");
        state.press_symbol("AC");
        RenderSync::new().apply(&state.view(), &mut dom);
        assert!(dom.ids_with_class(WINNER_CLASS).is_empty());
        assert!(dom.has_class(RESULT_BANNER_ID, NEUTRAL_CLASS));
        assert_eq!(dom.get_element_text("display-amount-b"), Some("0"));
    }

    #[test]
    fn test_tie_render() {
        let dom = render(&typed("1 0 NEXT 2 NEXT 1 0 NEXT 2"));
        assert_eq!(
            dom.get_element_text(RESULT_TEXT_ID),
            Some("Unit prices are identical")
        );
        assert!(dom.ids_with_class(WINNER_CLASS).is_empty());
        assert!(dom.has_class(RESULT_BANNER_ID, NEUTRAL_CLASS));
    }

    #[test]
    fn test_trailing_point_render() {
        let dom = render(&typed("1 2 3 4 ."));
        assert_eq!(dom.get_element_text("display-price-a"), Some("1,234."));
    }
}
