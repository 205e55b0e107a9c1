//! Wires the element watcher, page matcher, bindings and style overrides.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, HtmlTextAreaElement};

use listab_core::{EnhancerConfig, Error, PageMatcher, Result};

use crate::binding::KeydownBindings;
use crate::observer::{Appeared, ElementWatcher, TEXT_AREA_SELECTOR, push_text_areas};
use crate::style::apply_overrides;

struct EnhancerState {
    config: EnhancerConfig,
    matcher: PageMatcher,
    bindings: KeydownBindings,
    document: Document,
    /// Whether the last check found a target page.
    on_target: bool,
}

impl EnhancerState {
    fn is_target_page(&self) -> bool {
        match current_path() {
            Some(path) => {
                let target = self.matcher.is_target_page(&path);
                if !target {
                    tracing::trace!(path = %path, "not a target page, leaving text areas alone");
                }
                target
            }
            None => false,
        }
    }

    fn bind(&mut self, text_areas: &[HtmlTextAreaElement]) {
        for text_area in text_areas {
            self.bindings.ensure(text_area);
            apply_overrides(text_area, &self.config.style);
        }
    }

    /// Every text area currently in the document.
    fn all_text_areas(&self) -> Vec<HtmlTextAreaElement> {
        let mut text_areas = Vec::new();
        match self.document.query_selector_all(TEXT_AREA_SELECTOR) {
            Ok(node_list) => push_text_areas(&node_list, &mut text_areas),
            Err(e) => tracing::warn!("scanning document for text areas failed: {:?}", e),
        }
        text_areas
    }

    fn on_appeared(&mut self, appeared: Appeared) {
        if appeared.removed_nodes {
            self.bindings.prune_disconnected();
        }

        let was_target = self.on_target;
        self.on_target = self.is_target_page();
        if !self.on_target {
            return;
        }

        if was_target {
            self.bind(&appeared.text_areas);
        } else {
            // Client-side navigation onto a target page: text areas inserted
            // while off-target were skipped.
            tracing::debug!("entered a target page, rescanning document");
            let text_areas = self.all_text_areas();
            self.bind(&text_areas);
        }
    }
}

/// A running enhancement. Dropping it disconnects the observer and removes
/// every keydown listener it added.
pub struct Enhancer {
    state: Rc<RefCell<EnhancerState>>,
    _watcher: ElementWatcher,
}

impl Enhancer {
    /// Validate `config`, bind the text areas already on the page, and start
    /// watching for new ones.
    pub fn start(config: EnhancerConfig) -> Result<Self> {
        config.validate()?;
        let document = document()?;

        let mut state = EnhancerState {
            matcher: config.matcher(),
            config,
            bindings: KeydownBindings::new(),
            document: document.clone(),
            on_target: false,
        };
        state.on_target = state.is_target_page();
        if state.on_target {
            let existing = state.all_text_areas();
            state.bind(&existing);
        }
        let state = Rc::new(RefCell::new(state));

        let weak = Rc::downgrade(&state);
        let watcher = ElementWatcher::observe(&document, move |appeared| {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().on_appeared(appeared);
            }
        })?;

        tracing::info!(
            bound = state.borrow().bindings.len(),
            "list indentation enhancer started"
        );
        Ok(Self {
            state,
            _watcher: watcher,
        })
    }

    /// Number of text areas currently carrying a keydown listener.
    pub fn bound_count(&self) -> usize {
        self.state.borrow().bindings.len()
    }
}

fn document() -> Result<Document> {
    web_sys::window()
        .ok_or(Error::Environment { what: "window" })?
        .document()
        .ok_or(Error::Environment { what: "document" })
}

/// `location.pathname` of the current page.
pub fn current_path() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}
