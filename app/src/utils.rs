//! Small JS interop helpers
//!
//! The map widget is driven through `Reflect` calls on opaque `JsValue`
//! handles, so the Leaflet API surface never leaks past these helpers.

use wasm_bindgen::{JsCast, JsValue};

/// Set a property on a JS object, ignoring failures.
pub fn js_set(target: &JsValue, key: &str, value: &JsValue) {
    let _ = js_sys::Reflect::set(target, &JsValue::from_str(key), value);
}

fn method(target: &JsValue, name: &str) -> Option<js_sys::Function> {
    js_sys::Reflect::get(target, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()
}

/// Call a zero-argument method on a JS object by name.
pub fn js_call0(target: &JsValue, name: &str) -> Option<JsValue> {
    method(target, name)?.call0(target).ok()
}

/// Call a one-argument method on a JS object by name.
pub fn js_call1(target: &JsValue, name: &str, arg: &JsValue) -> Option<JsValue> {
    method(target, name)?.call1(target, arg).ok()
}

/// Call a two-argument method on a JS object by name.
pub fn js_call2(target: &JsValue, name: &str, arg1: &JsValue, arg2: &JsValue) -> Option<JsValue> {
    method(target, name)?.call2(target, arg1, arg2).ok()
}
