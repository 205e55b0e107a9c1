//! WASM bindings for listab.
//!
//! Loads as a content script on the collaboration site: call `start()` once
//! after initialization and every matching `<textarea>` gets Tab/Shift+Tab
//! list indentation and the monospaced font overrides.

mod edit;
mod enhancer;

pub use edit::*;
pub use enhancer::*;

use wasm_bindgen::prelude::*;

/// Initialize panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use tracing::Level;
    use tracing::subscriber::set_global_default;
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    // A host page may already have installed a subscriber.
    let _ = set_global_default(Registry::default().with(wasm_layer));
}
