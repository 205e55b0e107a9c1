//! Page-level start/stop of the enhancer.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use listab_browser::{Enhancer, EnhancerConfig};

thread_local! {
    static ENHANCER: RefCell<Option<Enhancer>> = const { RefCell::new(None) };
}

#[wasm_bindgen(typescript_custom_section)]
const TS_CONFIG: &'static str = r#"
export interface SegmentRule {
    index: number;
    value: string;
}

export interface PageTarget {
    segments: SegmentRule[];
}

export interface FieldStyle {
    fontFamily?: string;
    fontVariantLigatures?: string;
}

export interface EnhancerConfig {
    targets?: PageTarget[];
    style?: FieldStyle;
}
"#;

/// Start enhancing text areas.
///
/// `config` is an optional `EnhancerConfig` object; omitted fields take their
/// defaults. Calling `start` again replaces the running instance.
#[wasm_bindgen]
pub fn start(config: JsValue) -> Result<(), JsError> {
    let config: EnhancerConfig = if config.is_undefined() || config.is_null() {
        EnhancerConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsError::new(&format!("Invalid config: {}", e)))?
    };

    // Release the old listeners before binding again.
    let previous = ENHANCER.with_borrow_mut(Option::take);
    drop(previous);

    let enhancer = Enhancer::start(config).map_err(|e| JsError::new(&e.to_string()))?;
    ENHANCER.with_borrow_mut(|slot| *slot = Some(enhancer));
    Ok(())
}

/// Stop enhancing: disconnects the observer and removes all listeners.
///
/// Returns whether an instance was running.
#[wasm_bindgen]
pub fn stop() -> bool {
    let previous = ENHANCER.with_borrow_mut(Option::take);
    let was_running = previous.is_some();
    drop(previous);
    if was_running {
        tracing::info!("list indentation enhancer stopped");
    }
    was_running
}

/// Number of text areas currently bound, or 0 when stopped.
#[wasm_bindgen(js_name = boundCount)]
pub fn bound_count() -> usize {
    ENHANCER.with_borrow(|slot| slot.as_ref().map_or(0, Enhancer::bound_count))
}
