//! Text-entry field abstraction.
//!
//! The `TextField` trait is the capability the key coordinator needs from a
//! multi-line editable surface: read and replace the value, read and set the
//! selection. The browser implementation wraps an `HtmlTextAreaElement`;
//! `PlainField` is an in-memory implementation for native use and tests.

use crate::text::len_chars;
use crate::types::{Selection, TextEdit};

/// A multi-line editable text surface.
///
/// All offsets are in chars. Implementations backed by UTF-16 storage
/// convert at this boundary.
pub trait TextField {
    /// The full current value.
    fn value(&self) -> String;

    /// Replace the full value.
    fn set_value(&mut self, value: &str);

    /// The current selection.
    fn selection(&self) -> Selection;

    /// Set the selection. Both endpoints are clamped to the value length.
    fn set_selection(&mut self, selection: Selection);

    /// The caret: the start of any selection.
    fn caret(&self) -> usize {
        self.selection().start()
    }

    /// Write an edit back: new value, selection collapsed to the new caret.
    fn apply(&mut self, edit: &TextEdit) {
        self.set_value(&edit.text);
        self.set_selection(edit.selection());
    }
}

/// In-memory text field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlainField {
    value: String,
    selection: Selection,
}

impl PlainField {
    /// Create a field holding `value` with the caret at `caret`.
    pub fn new(value: impl Into<String>, caret: usize) -> Self {
        let mut field = Self {
            value: value.into(),
            selection: Selection::default(),
        };
        field.set_selection(Selection::collapsed(caret));
        field
    }

    /// Create a field with an explicit selection.
    pub fn with_selection(value: impl Into<String>, selection: Selection) -> Self {
        let mut field = Self::new(value, 0);
        field.set_selection(selection);
        field
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl TextField for PlainField {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        // Matches how a browser text area treats a programmatic value change.
        let end = len_chars(&self.value);
        self.selection = Selection::collapsed(end);
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_selection(&mut self, selection: Selection) {
        let len = len_chars(&self.value);
        self.selection = Selection::new(selection.anchor.min(len), selection.head.min(len));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caret_is_selection_start() {
        let field = PlainField::with_selection("- one two", Selection::new(8, 2));
        assert_eq!(field.caret(), 2);
    }

    #[test]
    fn test_selection_clamped() {
        let field = PlainField::new("abc", 10);
        assert_eq!(field.selection(), Selection::collapsed(3));
    }

    #[test]
    fn test_apply_collapses_selection() {
        let mut field = PlainField::with_selection("- a", Selection::new(0, 3));
        field.apply(&TextEdit {
            text: "  - a".to_string(),
            caret: 4,
        });
        assert_eq!(field.as_str(), "  - a");
        assert_eq!(field.selection(), Selection::collapsed(4));
    }
}
