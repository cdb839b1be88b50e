// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot `setTimeout` callbacks.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use vitrine_core::time::Duration;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "setTimeout")]
    fn set_timeout_raw(callback: &JsValue, delay_ms: i32) -> i32;
}

/// Runs `f` once after `delay`.
///
/// There is no cancellation: callers that may be superseded check a token
/// when the callback runs (see `SubmitAffordance::reset`).
pub fn set_timeout(delay: Duration, f: impl FnOnce() + 'static) {
    let callback = Closure::once_into_js(f);
    set_timeout_raw(&callback, delay.as_timeout_millis());
}
