//! Projection engine: serializes a [`LayoutState`] into one atomic script
//! for the content surface.
//!
//! The script sets the safe-area custom properties on the document root
//! and dispatches a `safeAreaChanged` event carrying the same fields, so
//! content can integrate CSS-driven or event-driven. Property names and
//! value formats are a compatibility surface — content is written against
//! them — and must not change.
//!
//! Coalescing already happened upstream in the aggregator; this component
//! executes every call it receives, in call order, fire-and-forget.

use tracing::debug;

use edgewise_core::LayoutState;

use crate::surface::ContentSurface;

/// Build the injection script for one snapshot.
///
/// Style values are logical-unit numbers suffixed with `px`, at native
/// float precision. The `--keyboard-visible` flag is the string `'1'` or
/// `'0'`; the event detail carries unitless numbers and a real boolean.
pub fn projection_script(state: &LayoutState, bottom_gutter: f64) -> String {
    let insets = state.insets();
    let keyboard = state.keyboard();
    let computed_bottom = state.effective_bottom();
    let padding = state.content_bottom_padding(bottom_gutter);
    let visible_flag = if keyboard.is_visible() { "1" } else { "0" };

    let detail = serde_json::json!({
        "top": insets.top,
        "right": insets.right,
        "bottom": insets.bottom,
        "left": insets.left,
        "keyboardHeight": keyboard.height(),
        "keyboardVisible": keyboard.is_visible(),
    });

    let mut js = String::from("(function() {\n  var style = document.documentElement.style;\n");
    push_px(&mut js, "--safe-area-inset-top", insets.top);
    push_px(&mut js, "--safe-area-inset-right", insets.right);
    push_px(&mut js, "--safe-area-inset-bottom", insets.bottom);
    push_px(&mut js, "--safe-area-inset-left", insets.left);
    push_px(&mut js, "--safe-area-top", insets.top);
    push_px(&mut js, "--safe-area-right", insets.right);
    push_px(&mut js, "--safe-area-bottom", insets.bottom);
    push_px(&mut js, "--safe-area-left", insets.left);
    push_px(&mut js, "--safe-area-bottom-computed", computed_bottom);
    push_px(&mut js, "--safe-area-bottom-min", state.min_bottom_reserve());
    push_px(&mut js, "--content-bottom-padding", padding);
    push_px(&mut js, "--keyboard-height", keyboard.height());
    js.push_str(&format!(
        "  style.setProperty('--keyboard-visible', '{visible_flag}');\n"
    ));
    js.push_str("  window.dispatchEvent(new CustomEvent('safeAreaChanged', { detail: ");
    js.push_str(&detail.to_string());
    js.push_str(" }));\n})();");
    js
}

fn push_px(js: &mut String, name: &str, value: f64) {
    js.push_str(&format!("  style.setProperty('{name}', '{value}px');\n"));
}

/// Executes projections on a content surface.
pub struct Projector {
    bottom_gutter: f64,
}

impl Projector {
    pub fn new(bottom_gutter: f64) -> Self {
        Self { bottom_gutter }
    }

    /// Inject one snapshot. A surface that cannot execute (torn down,
    /// navigating) is a dropped no-op — the recovery schedule re-asserts
    /// later.
    pub fn project<S: ContentSurface>(&self, surface: &S, state: &LayoutState) {
        let script = projection_script(state, self.bottom_gutter);
        if let Err(e) = surface.evaluate(&script) {
            debug!(error = %e, "projection dropped");
        }
    }
}
