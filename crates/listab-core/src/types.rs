//! Selection and edit result types, in char offsets.

/// A field's selection. `head` is where the caret sits; it is before `anchor`
/// when the user selected backwards.
#[derive(Clone, Debug, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub anchor: usize,
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// A bare caret at `offset`.
    pub fn collapsed(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn start(&self) -> usize {
        self.anchor.min(self.head)
    }

    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }

    pub fn is_backwards(&self) -> bool {
        self.head < self.anchor
    }
}

/// New buffer contents and caret produced by an indent or unindent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEdit {
    /// Full replacement text for the field.
    pub text: String,
    /// Char offset of the collapsed caret after the edit.
    pub caret: usize,
}

impl TextEdit {
    /// The collapsed selection to write back after applying this edit.
    pub fn selection(&self) -> Selection {
        Selection::collapsed(self.caret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_bounds() {
        // Forward selection
        let sel = Selection::new(5, 10);
        assert_eq!(sel.start(), 5);
        assert_eq!(sel.end(), 10);
        assert!(!sel.is_backwards());

        // Backward selection
        let sel = Selection::new(10, 5);
        assert_eq!(sel.start(), 5);
        assert_eq!(sel.end(), 10);
        assert!(sel.is_backwards());
    }

    #[test]
    fn test_edit_selection_is_collapsed() {
        let edit = TextEdit {
            text: "  - item".to_string(),
            caret: 4,
        };
        let sel = edit.selection();
        assert_eq!(sel, Selection::new(4, 4));
    }
}
