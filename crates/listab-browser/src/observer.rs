//! Element-appeared source backed by `MutationObserver`.
//!
//! Watches a root node's subtree and reports, per mutation batch, the text
//! areas among the inserted nodes (the inserted node itself or its
//! descendants). Only added nodes are scanned, never the whole document.
//! Batches without text areas are reported too, since the page may have
//! navigated in between.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, HtmlTextAreaElement, MutationObserver, MutationObserverInit, MutationRecord, Node,
    NodeList,
};

use listab_core::{Error, Result};

pub const TEXT_AREA_SELECTOR: &str = "textarea";

/// What one batch of mutation records brought in.
#[derive(Debug, Default)]
pub struct Appeared {
    /// Text areas found in added subtrees, in document order per record.
    pub text_areas: Vec<HtmlTextAreaElement>,
    /// Whether any node was removed, so stale bindings may need pruning.
    pub removed_nodes: bool,
}

type Callback = Closure<dyn FnMut(js_sys::Array, MutationObserver)>;

/// Owns a live `MutationObserver`. Disconnects on drop.
pub struct ElementWatcher {
    observer: MutationObserver,
    _callback: Callback,
}

impl ElementWatcher {
    /// Start observing `root` (`childList` + `subtree`).
    pub fn observe(root: &Node, mut on_appeared: impl FnMut(Appeared) + 'static) -> Result<Self> {
        let callback: Callback = Closure::new(move |records: js_sys::Array, _: MutationObserver| {
            on_appeared(collect(&records));
        });

        let observer = MutationObserver::new(callback.as_ref().unchecked_ref())
            .map_err(js_error("creating mutation observer"))?;

        let init = MutationObserverInit::new();
        init.set_child_list(true);
        init.set_subtree(true);
        observer
            .observe_with_options(root, &init)
            .map_err(js_error("starting mutation observer"))?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ElementWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn collect(records: &js_sys::Array) -> Appeared {
    let mut appeared = Appeared::default();
    for record in records.iter() {
        let Ok(record) = record.dyn_into::<MutationRecord>() else {
            continue;
        };

        if record.removed_nodes().length() > 0 {
            appeared.removed_nodes = true;
        }

        let added = record.added_nodes();
        for i in 0..added.length() {
            if let Some(node) = added.item(i) {
                text_areas_in(&node, &mut appeared.text_areas);
            }
        }
    }
    appeared
}

/// Push `node` if it is a text area, else any text areas below it.
pub fn text_areas_in(node: &Node, out: &mut Vec<HtmlTextAreaElement>) {
    if let Some(text_area) = node.dyn_ref::<HtmlTextAreaElement>() {
        out.push(text_area.clone());
        return;
    }
    // Text nodes and comments cannot contain elements.
    if let Some(element) = node.dyn_ref::<Element>() {
        if let Ok(node_list) = element.query_selector_all(TEXT_AREA_SELECTOR) {
            push_text_areas(&node_list, out);
        }
    }
}

/// Push every text area in a `querySelectorAll` result.
pub fn push_text_areas(node_list: &NodeList, out: &mut Vec<HtmlTextAreaElement>) {
    for i in 0..node_list.length() {
        if let Some(text_area) = node_list
            .item(i)
            .and_then(|n| n.dyn_into::<HtmlTextAreaElement>().ok())
        {
            out.push(text_area);
        }
    }
}

pub(crate) fn js_error(context: &'static str) -> impl FnOnce(JsValue) -> Error {
    move |e| Error::Browser {
        context,
        message: format!("{e:?}"),
    }
}
