// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lazy image fallback, load-time cleanup, and console output.

use alloc::format;

use js_sys::{Object, Reflect};
use vitrine_core::config::PageConfig;
use vitrine_core::polish::{BANNER, LazyImageStrategy, LoadTimings, NavigationMarks};
use vitrine_core::time::Duration;
use vitrine_web::dom::{query, query_all, set_class};
use vitrine_web::set_timeout;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, HtmlImageElement, HtmlScriptElement, Window, console};

use crate::listen;

/// Returns `true` if `HTMLImageElement.prototype` has a `loading` property.
fn native_lazy_loading(window: &Window) -> bool {
    Reflect::get(window, &JsValue::from_str("HTMLImageElement"))
        .and_then(|class| Reflect::get(&class, &JsValue::from_str("prototype")))
        .and_then(|proto| Reflect::has(&proto, &JsValue::from_str("loading")))
        .unwrap_or(false)
}

/// Hands lazy images to the native loader, or loads the polyfill.
pub(crate) fn init_lazy_images(
    window: &Window,
    document: &Document,
    config: &PageConfig,
) -> Result<(), JsValue> {
    match LazyImageStrategy::detect(native_lazy_loading(window)) {
        LazyImageStrategy::Native => {
            for el in query_all(document, config.selectors.lazy_images) {
                if let Some(img) = el.dyn_ref::<HtmlImageElement>() {
                    img.set_src(&img.src());
                }
            }
        }
        LazyImageStrategy::Polyfill(url) => {
            let Some(body) = document.body() else {
                return Ok(());
            };
            let script: HtmlScriptElement = document.create_element("script")?.unchecked_into();
            script.set_src(url);
            body.append_child(&script)?;
        }
    }
    Ok(())
}

/// Marks the body loaded and fades out the preloader once the window has
/// loaded; then logs load metrics.
pub(crate) fn init_load(window: &Window, document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let complete = document.ready_state() == "complete";
    let document = document.clone();
    let (window_handle, selectors, classes) = (window.clone(), config.selectors, config.classes);
    let hide_after = config.preloader.hide_after;

    let on_load = move || {
        if let Some(body) = document.body() {
            set_class(&body, classes.loaded, true);
        }
        if let Some(preloader) =
            query(&document, selectors.preloader).and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let _ = preloader.style().set_property("opacity", "0");
            set_timeout(hide_after, move || {
                let _ = preloader.style().set_property("display", "none");
            });
        }
        // `loadEventEnd` is only set after the load handlers return.
        let window = window_handle.clone();
        set_timeout(Duration::ZERO, move || {
            log_load_timings(&window);
        });
    };

    if complete {
        on_load();
        Ok(())
    } else {
        listen(window, "load", move |_| on_load())
    }
}

fn log_load_timings(window: &Window) {
    let Some(performance) = window.performance() else {
        return;
    };
    let timing = performance.timing();
    let marks = NavigationMarks {
        navigation_start: timing.navigation_start(),
        request_start: timing.request_start(),
        response_end: timing.response_end(),
        dom_loading: timing.dom_loading(),
        dom_complete: timing.dom_complete(),
        load_event_end: timing.load_event_end(),
    };
    let table = Object::new();
    for (label, ms) in LoadTimings::from_marks(&marks).rows() {
        let _ = Reflect::set(
            &table,
            &JsValue::from_str(label),
            &JsValue::from_str(&format!("{ms}ms")),
        );
    }
    console::log_1(&JsValue::from_str("\u{26A1} Performance Metrics:"));
    console::table_1(&table);
}

/// Prints the styled welcome message.
pub(crate) fn print_banner() {
    console::log_3(
        &JsValue::from_str(BANNER.message),
        &JsValue::from_str(BANNER.headline_style),
        &JsValue::from_str(BANNER.body_style),
    );
}
