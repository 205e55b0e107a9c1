//! listab-core: Tab/Shift+Tab list indentation for plain-text fields.
//!
//! Pure Rust, no browser dependencies. This crate provides:
//! - list-line classification (`ListKind`)
//! - caret position resolution (`resolve_position`)
//! - the indent/unindent transforms
//! - `TextField` abstraction and `handle_keydown`, the per-event coordinator
//! - page qualification by URL path (`PageMatcher`)
//! - `AttachRegistry` for idempotent listener binding
//! - `EnhancerConfig` and the error types

pub mod config;
pub mod error;
pub mod field;
pub mod keydown;
pub mod list;
pub mod page;
pub mod position;
pub mod registry;
pub mod text;
pub mod transform;
pub mod types;

pub use config::{EnhancerConfig, FieldStyle};
pub use error::{ConfigError, Error, Result};
pub use field::{PlainField, TextField};
pub use keydown::{Key, KeyInput, KeydownResult, handle_keydown};
pub use list::{ListKind, is_ordered_list_line, is_unordered_list_line};
pub use page::{PageMatcher, PageTarget, SegmentRule, is_pull_request_conversation_page};
pub use position::{Position, resolve_position};
pub use registry::AttachRegistry;
pub use smol_str::SmolStr;
pub use transform::{indent, unindent};
pub use types::{Selection, TextEdit};

#[cfg(test)]
mod proptests;
