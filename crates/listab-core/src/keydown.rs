//! Tab / Shift+Tab key handling for list lines.
//!
//! Platform-agnostic: the browser layer turns a `KeyboardEvent` into a
//! `KeyInput`, narrows the event target to a `TextField`, and calls
//! `handle_keydown`. The returned `KeydownResult` says whether to call
//! `preventDefault`.

use smol_str::SmolStr;

use crate::field::TextField;
use crate::list::ListKind;
use crate::position::resolve_position;
use crate::transform::{indent, unindent};

/// Keys the coordinator distinguishes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Tab,
    /// Any other key, by its physical key code.
    Other(SmolStr),
}

impl Key {
    /// Parse a DOM `KeyboardEvent.code` value.
    pub fn from_code(code: &str) -> Self {
        match code {
            "Tab" => Self::Tab,
            other => Self::Other(SmolStr::new(other)),
        }
    }
}

/// One keydown, reduced to what the coordinator looks at.
///
/// Shift is the only modifier that matters: it picks unindent over indent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub shift: bool,
    /// Auto-repeat from a held key.
    pub repeat: bool,
}

impl KeyInput {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            shift: false,
            repeat: false,
        }
    }

    pub fn tab() -> Self {
        Self::new(Key::Tab)
    }

    pub fn shift_tab() -> Self {
        Self {
            shift: true,
            ..Self::tab()
        }
    }

    pub fn repeated(mut self) -> Self {
        self.repeat = true;
        self
    }
}

/// Result of handling a keydown event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeydownResult {
    /// Not ours, let the platform handle it.
    PassThrough,
    /// Tab on a text field with nothing to do: prevent default, change nothing.
    Suppressed,
    /// The caret's line was indented by `width` spaces.
    Indented { kind: ListKind, width: usize },
    /// `width` leading chars were removed from the caret's line.
    Unindented { kind: ListKind, width: usize },
}

impl KeydownResult {
    /// Whether the platform's default action must be cancelled.
    pub fn prevents_default(&self) -> bool {
        !matches!(self, Self::PassThrough)
    }

    /// Whether the field was modified.
    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Indented { .. } | Self::Unindented { .. })
    }
}

/// Handle a keydown whose target is `field`.
///
/// `field` is `None` when the event target is not a text-entry field. Every
/// rejected case leaves the value and caret untouched.
pub fn handle_keydown<F: TextField + ?Sized>(
    field: Option<&mut F>,
    input: &KeyInput,
) -> KeydownResult {
    if input.key != Key::Tab {
        return KeydownResult::PassThrough;
    }
    let Some(field) = field else {
        return KeydownResult::PassThrough;
    };
    if input.repeat {
        tracing::trace!("ignoring auto-repeated tab");
        return KeydownResult::Suppressed;
    }

    let text = field.value();
    let caret = field.caret();
    let position = resolve_position(&text, caret);
    let Some(kind) = ListKind::classify(&position.line_string) else {
        tracing::trace!(line_number = position.line_number, "tab outside a list line");
        return KeydownResult::Suppressed;
    };

    if input.shift {
        let width = kind.removal_width(&position.line_string);
        let edit = unindent(&text, caret, &position, kind);
        field.apply(&edit);
        KeydownResult::Unindented { kind, width }
    } else {
        let width = kind.padding_width();
        let edit = indent(&text, caret, position.line_number, kind);
        field.apply(&edit);
        KeydownResult::Indented { kind, width }
    }
}
