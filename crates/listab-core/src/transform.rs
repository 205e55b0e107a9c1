//! Indent and unindent of a single list line.
//!
//! Both transforms rebuild the whole buffer, touching only the leading
//! characters of one line, so the line count never changes. The returned
//! caret is kept within the edited line of the new buffer.

use crate::list::ListKind;
use crate::position::Position;
use crate::text::{line_char_range, skip_chars};
use crate::types::TextEdit;

/// Prepend one level of padding to line `line_number` (1-based).
///
/// The caret advances by the padding width.
pub fn indent(text: &str, caret: usize, line_number: usize, kind: ListKind) -> TextEdit {
    let width = kind.padding_width();
    let text = rewrite_line(text, line_number, width, |out, line| {
        out.extend(std::iter::repeat_n(' ', width));
        out.push_str(line);
    });
    let caret = clamp_to_line(&text, line_number, caret + width);

    tracing::debug!(line_number, width, caret, "indented list line");
    TextEdit { text, caret }
}

/// Strip up to one level of leading indentation from the caret's line.
///
/// The caret moves back by the number of chars removed.
pub fn unindent(text: &str, caret: usize, position: &Position, kind: ListKind) -> TextEdit {
    let width = kind.removal_width(&position.line_string);
    let text = rewrite_line(text, position.line_number, 0, |out, line| {
        out.push_str(skip_chars(line, width));
    });
    let caret = clamp_to_line(&text, position.line_number, caret.saturating_sub(width));

    tracing::debug!(line_number = position.line_number, width, caret, "unindented list line");
    TextEdit { text, caret }
}

/// Rejoin `text` line by line, letting `edit` write the target line.
fn rewrite_line(
    text: &str,
    line_number: usize,
    extra: usize,
    mut edit: impl FnMut(&mut String, &str),
) -> String {
    let mut out = String::with_capacity(text.len() + extra);
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if i + 1 == line_number {
            edit(&mut out, line);
        } else {
            out.push_str(line);
        }
    }
    out
}

fn clamp_to_line(text: &str, line_number: usize, caret: usize) -> usize {
    match line_char_range(text, line_number) {
        Some(range) => caret.clamp(range.start, range.end),
        None => caret.min(crate::text::len_chars(text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::resolve_position;
    use crate::text::line_count;

    #[test]
    fn test_indent_unordered() {
        let edit = indent("- item", 2, 1, ListKind::Unordered);
        assert_eq!(edit.text, "  - item");
        assert_eq!(edit.caret, 4);
    }

    #[test]
    fn test_indent_ordered() {
        let edit = indent("1. item", 3, 1, ListKind::Ordered);
        assert_eq!(edit.text, "   1. item");
        assert_eq!(edit.caret, 6);
    }

    #[test]
    fn test_indent_only_target_line() {
        let text = "- a\n- b\n- c";
        let edit = indent(text, 6, 2, ListKind::Unordered);
        assert_eq!(edit.text, "- a\n  - b\n- c");
        assert_eq!(edit.caret, 8);
        assert_eq!(line_count(&edit.text), 3);
    }

    #[test]
    fn test_unindent_capped() {
        let text = "    - item";
        let pos = resolve_position(text, 6);
        let edit = unindent(text, 6, &pos, ListKind::Unordered);
        assert_eq!(edit.text, "  - item");
        assert_eq!(edit.caret, 4);
    }

    #[test]
    fn test_unindent_at_margin_is_identity() {
        let text = "1. item";
        let pos = resolve_position(text, 2);
        let edit = unindent(text, 2, &pos, ListKind::Ordered);
        assert_eq!(edit.text, text);
        assert_eq!(edit.caret, 2);
    }

    #[test]
    fn test_unindent_partial_level() {
        let text = "intro\n - item";
        let pos = resolve_position(text, 10);
        let edit = unindent(text, 10, &pos, ListKind::Unordered);
        assert_eq!(edit.text, "intro\n- item");
        assert_eq!(edit.caret, 9);
    }

    #[test]
    fn test_unindent_caret_inside_removed_indent() {
        // Caret at the very start of the line: it stays on that line
        // instead of sliding into the previous one.
        let text = "a\n    - b";
        let pos = resolve_position(text, 2);
        let edit = unindent(text, 2, &pos, ListKind::Unordered);
        assert_eq!(edit.text, "a\n  - b");
        assert_eq!(edit.caret, 2);
    }

    #[test]
    fn test_indent_multibyte_line() {
        let text = "é\n- ü";
        let edit = indent(text, 4, 2, ListKind::Unordered);
        assert_eq!(edit.text, "é\n  - ü");
        assert_eq!(edit.caret, 6);
    }

    #[test]
    fn test_indent_line_out_of_range_clamps_to_buffer() {
        let edit = indent("- a", 3, 5, ListKind::Unordered);
        assert_eq!(edit.text, "- a");
        assert_eq!(edit.caret, 3);
    }
}
