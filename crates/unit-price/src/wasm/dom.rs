//! Mock DOM for WASM Testing
//!
//! Lets the render sync and the keypad wiring be tested without a browser.
//!
//! Probar: Visual feedback - Visual management through observable DOM state

use std::collections::HashMap;

use crate::core::{FieldId, FieldKind, Slot};

/// Id of a product card
#[must_use]
pub fn card_id(slot: Slot) -> String {
    format!("card-{}", slot.key())
}

/// Id of a product's unit-price line
#[must_use]
pub fn unit_price_id(slot: Slot) -> String {
    format!("unit-price-{}", slot.key())
}

/// Id of the verdict banner
pub const RESULT_BANNER_ID: &str = "result-banner";

/// Id of the verdict text inside the banner
pub const RESULT_TEXT_ID: &str = "result-text";

/// Id of the keypad container
pub const NUMPAD_ID: &str = "numpad";

/// Class marking the focused field
pub const ACTIVE_CLASS: &str = "active";

/// Class marking the cheaper product card
pub const WINNER_CLASS: &str = "winner";

/// Class marking a banner without a verdict
pub const NEUTRAL_CLASS: &str = "neutral";

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        if self.text_content != text {
            self.text_content = text.to_string();
        }
    }

    /// Adds a class
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes a class
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Adds or removes a class
    pub fn toggle_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// DOM events that can be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click event on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Key down event on the document
    KeyDown {
        /// `KeyboardEvent.key`
        key: String,
        /// Whether Shift was held
        shift: bool,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a key down event
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
            shift: false,
        }
    }

    /// Creates a key down event with Shift held
    #[must_use]
    pub fn key_down_shifted(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
            shift: true,
        }
    }
}

/// Mock DOM: a flat id -> element registry plus an event log
///
/// The event log grows with every dispatched event and is only emptied by
/// [`clear_event_history`](Self::clear_event_history). Long-lived drivers
/// clear it on reset.
#[derive(Debug, Default)]
pub struct MockDom {
    elements: HashMap<String, DomElement>,
    event_history: Vec<DomEvent>,
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the comparator page: two product cards and the verdict banner
    ///
    /// The keypad is added separately with
    /// [`MockDomKeypadExt::add_keypad`](super::keypad::MockDomKeypadExt::add_keypad).
    #[must_use]
    pub fn comparator() -> Self {
        let mut dom = Self::new();

        for slot in Slot::ALL {
            dom.register_element(
                DomElement::new("section")
                    .with_id(&card_id(slot))
                    .with_class("card"),
            );
            for field in FieldKind::ALL {
                let id = FieldId::new(slot, field);
                dom.register_element(
                    DomElement::new("div")
                        .with_id(&id.element_id())
                        .with_class("display")
                        .with_attr("data-product", slot.key())
                        .with_attr("data-field", field.key())
                        .with_text("0"),
                );
            }
            dom.register_element(
                DomElement::new("div")
                    .with_id(&unit_price_id(slot))
                    .with_class("unit-price"),
            );
        }

        dom.register_element(
            DomElement::new("div")
                .with_id(RESULT_BANNER_ID)
                .with_class("result-banner")
                .with_class(NEUTRAL_CLASS),
        );
        dom.register_element(
            DomElement::new("p")
                .with_id(RESULT_TEXT_ID)
                .with_class("result-text"),
        );

        dom
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Number of registered elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if nothing is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Appends an event to the unbounded log
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Adds or removes a class on an element by ID
    pub fn toggle_class(&mut self, id: &str, class: &str, on: bool) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.toggle_class(class, on);
        }
    }

    /// Checks a class on an element by ID
    #[must_use]
    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.elements.get(id).is_some_and(|e| e.has_class(class))
    }

    /// Ids of all elements carrying `class`, sorted
    #[must_use]
    pub fn ids_with_class(&self, class: &str) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .elements
            .values()
            .filter(|e| e.has_class(class))
            .map(|e| e.id.as_str())
            .collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== DomElement tests =====

    #[test]
    fn test_dom_element_new() {
        let elem = DomElement::new("span");
        assert_eq!(elem.tag, "span");
        assert!(elem.id.is_empty());
        assert!(elem.text_content.is_empty());
    }

    #[test]
    fn test_dom_element_default() {
        assert_eq!(DomElement::default().tag, "div");
    }

    #[test]
    fn test_dom_element_builders() {
        let elem = DomElement::new("button")
            .with_id("key-7")
            .with_text("7")
            .with_class("key")
            .with_attr("data-key", "7");
        assert_eq!(elem.id, "key-7");
        assert_eq!(elem.text_content, "7");
        assert!(elem.has_class("key"));
        assert_eq!(elem.get_attr("data-key"), Some("7"));
        assert_eq!(elem.get_attr("missing"), None);
    }

    #[test]
    fn test_dom_element_classes() {
        let mut elem = DomElement::new("div");
        elem.add_class("active");
        elem.add_class("active");
        assert_eq!(elem.classes.len(), 1);
        elem.toggle_class("active", false);
        assert!(!elem.has_class("active"));
        elem.toggle_class("winner", true);
        assert!(elem.has_class("winner"));
        elem.remove_class("winner");
        assert!(elem.classes.is_empty());
    }

    // ===== DomEvent tests =====

    #[test]
    fn test_dom_event_constructors() {
        assert_eq!(
            DomEvent::click("card-a"),
            DomEvent::Click {
                element_id: "card-a".into()
            }
        );
        assert_eq!(
            DomEvent::key_down_shifted("Tab"),
            DomEvent::KeyDown {
                key: "Tab".into(),
                shift: true
            }
        );
        assert!(matches!(
            DomEvent::key_down("1"),
            DomEvent::KeyDown { shift: false, .. }
        ));
    }

    // ===== MockDom tests =====

    #[test]
    fn test_comparator_structure() {
        let dom = MockDom::comparator();
        for id in [
            "display-price-a",
            "display-amount-a",
            "unit-price-a",
            "card-a",
            "display-price-b",
            "display-amount-b",
            "unit-price-b",
            "card-b",
            RESULT_BANNER_ID,
            RESULT_TEXT_ID,
        ] {
            assert!(dom.get_element(id).is_some(), "missing #{id}");
        }
        assert_eq!(dom.len(), 10);
        assert_eq!(dom.get_element_text("display-price-b"), Some("0"));
        assert!(dom.has_class(RESULT_BANNER_ID, NEUTRAL_CLASS));
    }

    #[test]
    fn test_field_attributes() {
        let dom = MockDom::comparator();
        let elem = dom.get_element("display-amount-b").unwrap();
        assert_eq!(elem.get_attr("data-product"), Some("b"));
        assert_eq!(elem.get_attr("data-field"), Some("amount"));
    }

    #[test]
    fn test_text_and_class_by_id() {
        let mut dom = MockDom::comparator();
        dom.set_element_text(RESULT_TEXT_ID, "hello");
        assert_eq!(dom.get_element_text(RESULT_TEXT_ID), Some("hello"));

        dom.toggle_class("card-a", WINNER_CLASS, true);
        assert!(dom.has_class("card-a", WINNER_CLASS));
        assert_eq!(dom.ids_with_class(WINNER_CLASS), vec!["card-a"]);

        // unknown ids are ignored
        dom.set_element_text("nope", "x");
        dom.toggle_class("nope", "x", true);
        assert!(!dom.has_class("nope", "x"));
        assert!(dom.get_element_text("nope").is_none());
    }

    #[test]
    fn test_event_history() {
        let mut dom = MockDom::new();
        assert!(dom.is_empty());
        dom.dispatch_event(DomEvent::click("key-1"));
        dom.dispatch_event(DomEvent::key_down("2"));
        assert_eq!(dom.event_history().len(), 2);
        dom.clear_event_history();
        assert!(dom.event_history().is_empty());
    }

    #[test]
    fn test_get_element_mut() {
        let mut dom = MockDom::comparator();
        dom.get_element_mut("card-b").unwrap().add_class("flash");
        assert!(dom.has_class("card-b", "flash"));
    }

    #[test]
    fn test_id_helpers() {
        assert_eq!(card_id(Slot::B), "card-b");
        assert_eq!(unit_price_id(Slot::A), "unit-price-a");
    }
}
