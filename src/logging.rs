//! yew_form_fields/src/logging.rs
//!
//! Structured console output.
//!
//! Plain records go through the `log` macros; the demo crates install
//! `console_log` as the backend at start-up. [`log_object`] covers the one
//! thing a `log` record can't carry: a serializable value sent as a real JS
//! object so the console can expand it.

use gloo_utils::format::JsValueSerdeExt;
use log::Level;
use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::console;

/// Log `label` followed by `value` as an expandable object.
///
/// Respects `log::max_level()`. Logs the serialization error text instead
/// if `value` cannot be converted.
pub fn log_object<T: Serialize>(level: Level, label: &str, value: &T) {
    if level > log::max_level() {
        return;
    }
    let label = JsValue::from_str(label);
    let object = JsValue::from_serde(value).unwrap_or_else(|e| JsValue::from_str(&e.to_string()));
    match level {
        Level::Error => console::error_2(&label, &object),
        Level::Warn => console::warn_2(&label, &object),
        Level::Info => console::info_2(&label, &object),
        Level::Debug | Level::Trace => console::debug_2(&label, &object),
    }
}
