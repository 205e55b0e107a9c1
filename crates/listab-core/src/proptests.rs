//! Property tests for the classifier and the transforms.

use proptest::prelude::*;

use crate::list::{ListKind, is_ordered_list_line, is_unordered_list_line};
use crate::position::resolve_position;
use crate::text::{len_chars, line_char_range, line_count};
use crate::transform::{indent, unindent};

/// A buffer with one list line of `kind` inserted at `at`, plus the caret
/// somewhere after that line's marker.
fn buffer_with_list_line(
    kind: ListKind,
) -> impl Strategy<Value = (String, usize, usize)> {
    let item = match kind {
        ListKind::Unordered => " {0,6}[-*] [a-z ]{0,10}",
        ListKind::Ordered => " {0,6}[0-9]{1,3}\\. [a-z ]{0,10}",
    };
    (
        prop::collection::vec("[a-z .]{0,12}", 0..5),
        item,
        any::<prop::sample::Index>(),
        any::<prop::sample::Index>(),
    )
        .prop_map(|(mut lines, item, at, caret_pick)| {
            let at = at.index(lines.len() + 1);
            lines.insert(at, item);
            let text = lines.join("\n");
            let line_number = at + 1;
            let range = line_char_range(&text, line_number).unwrap();
            // Keep the caret at or after the marker so no clamping applies.
            let marker_start = range.start + len_chars(&lines[at]) - len_chars(lines[at].trim_start());
            let caret = marker_start + caret_pick.index(range.end - marker_start + 1);
            (text, line_number, caret)
        })
}

proptest! {
    #[test]
    fn unordered_pattern_is_recognized(line in " {0,8}[-*][ a-z0-9.*-]{0,12}") {
        prop_assert!(is_unordered_list_line(&line));
        prop_assert_eq!(ListKind::classify(&line), Some(ListKind::Unordered));
    }

    #[test]
    fn ordered_pattern_is_recognized(line in " {0,8}[0-9]{1,4}\\.[ a-z0-9.]{0,12}") {
        prop_assert!(is_ordered_list_line(&line));
    }

    #[test]
    fn non_list_lines_match_neither(line in " {0,4}[a-zA-Z][ a-z0-9.*-]{0,12}") {
        prop_assert!(!is_unordered_list_line(&line));
        prop_assert!(!is_ordered_list_line(&line));
        prop_assert_eq!(ListKind::classify(&line), None);
    }

    #[test]
    fn resolve_position_is_idempotent(text in "[a-z\\- \n]{0,40}", caret in 0usize..50) {
        prop_assert_eq!(resolve_position(&text, caret), resolve_position(&text, caret));
    }

    #[test]
    fn indent_moves_caret_and_keeps_line_count(
        (text, line_number, caret) in buffer_with_list_line(ListKind::Ordered),
    ) {
        let edit = indent(&text, caret, line_number, ListKind::Ordered);
        prop_assert_eq!(edit.caret, caret + 3);
        prop_assert_eq!(line_count(&edit.text), line_count(&text));
        prop_assert!(edit.caret <= len_chars(&edit.text));
    }

    #[test]
    fn unindent_moves_caret_back_by_removal(
        (text, line_number, caret) in buffer_with_list_line(ListKind::Unordered),
    ) {
        let position = resolve_position(&text, caret);
        prop_assert_eq!(position.line_number, line_number);
        let width = ListKind::Unordered.removal_width(&position.line_string);
        let edit = unindent(&text, caret, &position, ListKind::Unordered);
        prop_assert_eq!(edit.caret, caret - width);
        prop_assert_eq!(line_count(&edit.text), line_count(&text));
        prop_assert_eq!(len_chars(&edit.text), len_chars(&text) - width);
    }

    #[test]
    fn indent_then_unindent_restores_unordered_line(
        (text, line_number, caret) in buffer_with_list_line(ListKind::Unordered),
    ) {
        let indented = indent(&text, caret, line_number, ListKind::Unordered);
        let position = resolve_position(&indented.text, indented.caret);
        let restored = unindent(&indented.text, indented.caret, &position, ListKind::Unordered);
        prop_assert_eq!(restored.text, text);
        prop_assert_eq!(restored.caret, caret);
    }
}
