//! Browser DOM layer for listab.
//!
//! Binds the core Tab/Shift+Tab list handling to `<textarea>` elements. It
//! assumes a `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `field`: `TextField` over `HtmlTextAreaElement`, UTF-16 offset conversion
//! - `binding`: keydown listeners, one per element
//! - `observer`: `MutationObserver`-backed element-appeared source
//! - `style`: inline font overrides
//! - `enhancer`: ties the above together behind a page check
//!
//! # Re-exports
//!
//! This crate re-exports `listab-core` for convenience, so consumers only
//! need to depend on `listab-browser`.

// Re-export core crate
pub use listab_core;
pub use listab_core::*;

pub mod binding;
pub mod enhancer;
pub mod field;
pub mod observer;
pub mod style;

pub use binding::{KeydownBindings, key_input, keydown_listener};
pub use enhancer::{Enhancer, current_path};
pub use field::TextAreaField;
pub use observer::{Appeared, ElementWatcher};
pub use style::apply_overrides;
