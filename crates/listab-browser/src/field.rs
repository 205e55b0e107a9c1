//! `TextField` implementation for `<textarea>` elements.
//!
//! The DOM reports selection offsets in UTF-16 code units; the core works in
//! chars. Conversion happens here on every read and write.

use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlTextAreaElement};

use listab_core::text::{char_to_utf16, utf16_to_char};
use listab_core::{Selection, TextField};

/// A text area viewed as a `TextField`.
#[derive(Debug, Clone)]
pub struct TextAreaField {
    element: HtmlTextAreaElement,
}

impl TextAreaField {
    pub fn new(element: HtmlTextAreaElement) -> Self {
        Self { element }
    }

    /// Narrow an event target to a text area, if it is one.
    pub fn from_event_target(target: Option<EventTarget>) -> Option<Self> {
        target?.dyn_into::<HtmlTextAreaElement>().ok().map(Self::new)
    }
}

impl TextField for TextAreaField {
    fn value(&self) -> String {
        self.element.value()
    }

    fn set_value(&mut self, value: &str) {
        self.element.set_value(value);
    }

    fn selection(&self) -> Selection {
        let value = self.element.value();
        let read = |offset: Result<Option<u32>, _>| {
            utf16_to_char(&value, offset.ok().flatten().unwrap_or(0) as usize)
        };
        let start = read(self.element.selection_start());
        let end = read(self.element.selection_end());

        let backward = self
            .element
            .selection_direction()
            .ok()
            .flatten()
            .is_some_and(|d| d == "backward");
        if backward {
            Selection::new(end, start)
        } else {
            Selection::new(start, end)
        }
    }

    fn set_selection(&mut self, selection: Selection) {
        let value = self.element.value();
        let start = char_to_utf16(&value, selection.start()) as u32;
        let end = char_to_utf16(&value, selection.end()) as u32;
        let direction = if selection.is_backwards() {
            "backward"
        } else {
            "forward"
        };

        if let Err(e) = self
            .element
            .set_selection_range_with_direction(start, end, direction)
        {
            tracing::warn!("setting text area selection failed: {:?}", e);
        }
    }
}
