//! Keydown listener bindings for text areas.
//!
//! Each bound element carries a `data-listab-id` attribute naming its entry
//! in an `AttachRegistry`, so binding the same element again is a no-op and
//! dropping the entry removes the listener.

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlTextAreaElement, KeyboardEvent};

use listab_core::{AttachRegistry, Key, KeyInput, handle_keydown};

use crate::field::TextAreaField;

/// Attribute carrying an element's registry key.
pub const BINDING_ID_ATTR: &str = "data-listab-id";

struct Binding {
    element: HtmlTextAreaElement,
    _listener: EventListener,
}

/// At most one keydown listener per text area.
#[derive(Default)]
pub struct KeydownBindings {
    registry: AttachRegistry<u32, Binding>,
    next_id: u32,
}

impl KeydownBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `element` unless it already is. Returns true if a listener was added.
    pub fn ensure(&mut self, element: &HtmlTextAreaElement) -> bool {
        let id = self.key_for(element);
        let added = self.registry.ensure(id, || Binding {
            element: element.clone(),
            _listener: keydown_listener(element),
        });
        if added {
            tracing::debug!(id, "bound keydown listener");
        }
        added
    }

    /// Drop bindings whose element has left the document.
    pub fn prune_disconnected(&mut self) -> usize {
        let dropped = self.registry.retain(|_, b| b.element.is_connected());
        if dropped > 0 {
            tracing::debug!(dropped, "released listeners of removed text areas");
        }
        dropped
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// The element's existing key, or a fresh one stamped onto it.
    ///
    /// A cloned element copies the attribute of its original, so a key only
    /// counts if it maps back to this very element.
    fn key_for(&mut self, element: &HtmlTextAreaElement) -> u32 {
        let existing = element
            .get_attribute(BINDING_ID_ATTR)
            .and_then(|v| v.parse::<u32>().ok());
        if let Some(id) = existing {
            if self
                .registry
                .get(&id)
                .is_none_or(|b| &b.element == element)
            {
                // Ids stamped by an earlier set of bindings must not be handed out again.
                self.next_id = self.next_id.max(id.wrapping_add(1));
                return id;
            }
        }

        let mut id = self.next_id;
        while self.registry.contains(&id) {
            id = id.wrapping_add(1);
        }
        self.next_id = id.wrapping_add(1);
        if let Err(e) = element.set_attribute(BINDING_ID_ATTR, &id.to_string()) {
            tracing::warn!("stamping binding id failed: {:?}", e);
        }
        id
    }
}

/// Attach the list-indent keydown handler to `element`.
///
/// The listener must not be passive, or `preventDefault` is ignored and Tab
/// would still move focus.
pub fn keydown_listener(element: &HtmlTextAreaElement) -> EventListener {
    EventListener::new_with_options(
        element,
        "keydown",
        EventListenerOptions::enable_prevent_default(),
        on_keydown,
    )
}

fn on_keydown(event: &Event) {
    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
        return;
    };

    let input = key_input(event);
    let mut field = TextAreaField::from_event_target(event.target());
    let result = handle_keydown(field.as_mut(), &input);

    if result.prevents_default() {
        event.prevent_default();
    }
    if result.is_edit() {
        tracing::debug!(?result, "handled tab in text area");
    }
}

/// Reduce a DOM keyboard event to a core `KeyInput`.
pub fn key_input(event: &KeyboardEvent) -> KeyInput {
    KeyInput {
        key: Key::from_code(&event.code()),
        shift: event.shift_key(),
        repeat: event.repeat(),
    }
}
