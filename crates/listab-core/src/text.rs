//! Offset helpers for plain `&str` buffers.
//!
//! All offsets used by this crate are in Unicode scalar values (chars), not
//! bytes or UTF-16. The browser reports selection offsets in UTF-16 code
//! units, so the conversions live here where they can be tested natively.

use std::ops::Range;

/// Total length in chars.
pub fn len_chars(text: &str) -> usize {
    text.chars().count()
}

/// Convert a char offset to a byte offset, clamping past-the-end offsets.
pub fn char_to_byte(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map_or(text.len(), |(byte, _)| byte)
}

/// Everything after the first `count` chars of `line`.
///
/// Returns an empty slice when `count` is past the end of the line.
pub fn skip_chars(line: &str, count: usize) -> &str {
    &line[char_to_byte(line, count)..]
}

/// Char range of the 1-based `line_number`, excluding its newline.
///
/// Returns `None` if the buffer has fewer lines.
pub fn line_char_range(text: &str, line_number: usize) -> Option<Range<usize>> {
    let mut start = 0;
    for (i, line) in text.split('\n').enumerate() {
        let len = len_chars(line);
        if i + 1 == line_number {
            return Some(start..start + len);
        }
        start += len + 1;
    }
    None
}

/// Number of `\n`-separated lines, counting a trailing empty line.
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// Convert a UTF-16 code unit offset to a char offset.
///
/// An offset that falls inside a surrogate pair rounds up to the next char
/// boundary.
pub fn utf16_to_char(text: &str, utf16_offset: usize) -> usize {
    let mut units = 0;
    for (chars, c) in text.chars().enumerate() {
        if units >= utf16_offset {
            return chars;
        }
        units += c.len_utf16();
    }
    len_chars(text)
}

/// Convert a char offset to a UTF-16 code unit offset.
pub fn char_to_utf16(text: &str, char_offset: usize) -> usize {
    text.chars().take(char_offset).map(char::len_utf16).sum()
}
