//! Browser WASM bindings for the comparator
//!
//! Probar: Direct observation - Go and see the real browser behavior
//!
//! Page scripts forward clicks (`element.id`, or `dataset.key` for keypad
//! buttons) and `keydown` events here; every call re-renders the document.

use wasm_bindgen::prelude::*;
use web_sys::{console, Document};

use super::comparator::WasmComparator;
use super::render::DomSink;

/// Writes into the live document, skipping ids that are not on the page
#[derive(Debug)]
struct DocumentSink {
    document: Document,
}

impl DomSink for DocumentSink {
    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.document.get_element_by_id(id) {
            if elem.text_content().as_deref() != Some(text) {
                elem.set_text_content(Some(text));
            }
        }
    }

    fn set_class(&mut self, id: &str, class: &str, on: bool) {
        if let Some(elem) = self.document.get_element_by_id(id) {
            if let Err(e) = elem.class_list().toggle_with_force(class, on) {
                console::warn_2(&"class toggle failed:".into(), &e);
            }
        }
    }
}

/// Browser Comparator - the main WASM entry point
#[derive(Debug, Default)]
#[wasm_bindgen]
pub struct BrowserComparator {
    inner: WasmComparator,
}

#[wasm_bindgen]
impl BrowserComparator {
    /// Create a comparator and render the initial state
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        let this = Self::default();
        this.render();
        this
    }

    /// Handle a click on a field display or keypad button by element id
    pub fn click(&mut self, element_id: &str) {
        self.inner.handle_click(element_id);
        self.render();
    }

    /// Handle a keypad button by its `data-key` symbol
    pub fn press(&mut self, symbol: &str) {
        self.inner.handle_symbol(symbol);
        self.render();
    }

    /// Handle a keyboard `keydown`
    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self, key: &str, shift: bool) {
        self.inner.handle_key(key, shift);
        self.render();
    }

    /// Current verdict text
    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.inner.view().message
    }

    /// Current view as JSON
    #[wasm_bindgen(js_name = viewJson)]
    pub fn view_json(&self) -> String {
        serde_json::to_string(&self.inner.view()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Push the current state into the document
    pub fn render(&self) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        self.inner.render(&mut DocumentSink { document });
    }
}

/// Initialize the comparator module in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"Unit price comparator WASM initialized".into());
}
