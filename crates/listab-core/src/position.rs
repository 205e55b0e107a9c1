//! Caret position resolution.

use smol_str::SmolStr;

use crate::text::char_to_byte;

/// Where the caret sits, in line terms.
///
/// Derived fresh on every key event; never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// 1-based index of the line containing the caret.
    pub line_number: usize,
    /// The complete text of that line, not truncated at the caret.
    pub line_string: SmolStr,
}

/// Resolve the line containing `caret` (a char offset) in `text`.
///
/// The line number comes from the prefix up to the caret; the line text is
/// taken from the full buffer. A caret past the end is treated as sitting at
/// the end.
pub fn resolve_position(text: &str, caret: usize) -> Position {
    let prefix = &text[..char_to_byte(text, caret)];
    let line_number = prefix.matches('\n').count() + 1;
    let line_string = text.split('\n').nth(line_number - 1).unwrap_or_default();

    Position {
        line_number,
        line_string: SmolStr::new(line_string),
    }
}
