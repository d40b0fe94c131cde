// Utility helpers shared across components.

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;

/// Format a model-space distance for display: metres with two decimals once
/// the magnitude reaches one metre, bare millimetres below that.
pub fn format_distance(mm: f64) -> String {
    if mm.abs() >= 1000.0 {
        format!("{:.2}m", mm / 1000.0)
    } else {
        format!("{:.0}mm", mm)
    }
}

pub fn clog(msg: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
}
