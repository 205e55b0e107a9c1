//! Pure helpers for hosts that manage their own key events.
//!
//! Offsets crossing this boundary are UTF-16 code units, as JavaScript
//! strings count them.

use wasm_bindgen::prelude::*;

use listab_browser::text::{char_to_utf16, utf16_to_char};
use listab_browser::{
    KeyInput, KeydownResult, ListKind, PageMatcher, PlainField, TextField, handle_keydown,
};

/// Result of a Tab/Shift+Tab on a list line.
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsTabEdit {
    value: String,
    caret: usize,
    width: usize,
    unindent: bool,
}

#[wasm_bindgen]
impl JsTabEdit {
    /// The new field value.
    #[wasm_bindgen(getter)]
    pub fn value(&self) -> String {
        self.value.clone()
    }

    /// The new collapsed caret, in UTF-16 units.
    #[wasm_bindgen(getter)]
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Spaces added or removed.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> usize {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn unindent(&self) -> bool {
        self.unindent
    }
}

/// Apply Tab (or Shift+Tab with `shift`) to `value` with the caret at `caret`.
///
/// Returns `undefined` when the caret's line is not a list item.
#[wasm_bindgen(js_name = applyTab)]
pub fn apply_tab(value: &str, caret: usize, shift: bool) -> Option<JsTabEdit> {
    let mut field = PlainField::new(value, utf16_to_char(value, caret));
    let input = if shift {
        KeyInput::shift_tab()
    } else {
        KeyInput::tab()
    };

    let width = match handle_keydown(Some(&mut field), &input) {
        KeydownResult::Indented { width, .. } | KeydownResult::Unindented { width, .. } => width,
        KeydownResult::PassThrough | KeydownResult::Suppressed => return None,
    };

    Some(JsTabEdit {
        caret: char_to_utf16(field.as_str(), field.caret()),
        value: field.as_str().to_string(),
        width,
        unindent: shift,
    })
}

/// `"unordered"`, `"ordered"`, or `undefined` for a non-list line.
#[wasm_bindgen(js_name = classifyLine)]
pub fn classify_line(line: &str) -> Option<String> {
    ListKind::classify(line).map(|kind| {
        match kind {
            ListKind::Unordered => "unordered",
            ListKind::Ordered => "ordered",
        }
        .to_string()
    })
}

/// Whether `path` is one of the default target pages.
#[wasm_bindgen(js_name = isTargetPage)]
pub fn is_target_page(path: &str) -> bool {
    PageMatcher::default().is_target_page(path)
}

#[wasm_bindgen(js_name = isPullRequestConversationPage)]
pub fn is_pull_request_conversation_page(path: &str) -> bool {
    listab_browser::is_pull_request_conversation_page(path)
}
