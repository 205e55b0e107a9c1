//! List-line classification.
//!
//! A list line is one that starts, after optional ASCII spaces, with an
//! unordered marker (`-` or `*`) or an ordered marker (one or more ASCII
//! digits followed by `.`). Tabs do not count as indentation.

/// Which kind of list item a line is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// `- item` or `* item`.
    Unordered,
    /// `1. item`.
    Ordered,
}

impl ListKind {
    /// Classify a line. Unordered wins if both patterns would match.
    pub fn classify(line: &str) -> Option<Self> {
        if is_unordered_list_line(line) {
            Some(Self::Unordered)
        } else if is_ordered_list_line(line) {
            Some(Self::Ordered)
        } else {
            None
        }
    }

    /// Spaces inserted per indent level.
    pub const fn padding_width(self) -> usize {
        match self {
            Self::Unordered => 2,
            Self::Ordered => 3,
        }
    }

    /// How many leading chars a single unindent strips from `line`.
    ///
    /// This is the offset of the first marker char, capped at the padding
    /// width, so deeply indented lines lose one level while a marker near the
    /// margin is never cut. Zero when the line has no marker char at all.
    pub fn removal_width(self, line: &str) -> usize {
        let marker = match self {
            Self::Unordered => line.chars().position(|c| matches!(c, '-' | '*')),
            Self::Ordered => line.chars().position(|c| c.is_ascii_digit()),
        };
        marker.map_or(0, |offset| offset.min(self.padding_width()))
    }
}

/// `^ *[-*]`
pub fn is_unordered_list_line(line: &str) -> bool {
    matches!(
        line.trim_start_matches(' ').chars().next(),
        Some('-' | '*')
    )
}

/// `^ *[0-9]+\.`
pub fn is_ordered_list_line(line: &str) -> bool {
    let rest = line.trim_start_matches(' ').as_bytes();
    let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
    digits > 0 && rest.get(digits) == Some(&b'.')
}
