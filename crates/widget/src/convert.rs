//! Conversion helpers between pillbox entries and JavaScript values.

use pillbox_core::Entry;
use wasm_bindgen::prelude::*;

/// Converts entries to a JavaScript array of `{ value, valid }` objects.
pub fn entries_to_js(entries: &[Entry]) -> JsValue {
    let arr = js_sys::Array::new_with_length(entries.len() as u32);
    for (i, entry) in entries.iter().enumerate() {
        arr.set(i as u32, entry_to_js(entry));
    }
    arr.into()
}

/// Converts one entry to a `{ value, valid }` object.
pub fn entry_to_js(entry: &Entry) -> JsValue {
    let obj = js_sys::Object::new();
    js_sys::Reflect::set(
        &obj,
        &JsValue::from_str("value"),
        &JsValue::from_str(entry.value()),
    )
    .ok();
    js_sys::Reflect::set(
        &obj,
        &JsValue::from_str("valid"),
        &JsValue::from_bool(entry.is_valid()),
    )
    .ok();
    obj.into()
}
