//! Inline font overrides for bound text areas.

use web_sys::HtmlElement;

use listab_core::FieldStyle;

/// Force each `FieldStyle` property onto `element` with `important` priority.
pub fn apply_overrides(element: &HtmlElement, style: &FieldStyle) {
    let declaration = element.style();
    for (property, value) in style.properties() {
        if let Err(e) = declaration.set_property_with_priority(property, value, "important") {
            tracing::warn!(property, "setting style override failed: {:?}", e);
        }
    }
}
