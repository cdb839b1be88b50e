// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactive behavior of the portfolio page.
//!
//! The module runs once when the document is interactive. It looks up every
//! element role named in [`PageConfig::portfolio`] and wires the matching
//! `vitrine_core` component to it. Roles that are missing from the markup are
//! skipped; nothing here reports errors to the visitor.
//!
//! Build with: `wasm-pack build --target web vitrine_site`
//! Then load the generated module from the page.
//!
//! [`PageConfig::portfolio`]: vitrine_core::config::PageConfig::portfolio

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

mod animate;
mod effects;
mod navigation;
mod polish;
mod scrolling;
mod theme;

use alloc::boxed::Box;
use alloc::vec::Vec;

use vitrine_core::config::PageConfig;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, EventTarget, Window};

/// Entry point: initializes the page now, or once the DOM is parsed.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    if document.ready_state() == "loading" {
        let (w, d) = (window.clone(), document.clone());
        listen(&document, "DOMContentLoaded", move |_| {
            let _ = init(&w, &d);
        })
    } else {
        init(&window, &document)
    }
}

/// Wires every component. The theme goes first to keep the unthemed flash
/// short.
fn init(window: &Window, document: &Document) -> Result<(), JsValue> {
    let config = PageConfig::portfolio();

    theme::init(window, document, &config)?;
    navigation::init_mobile_nav(document, &config)?;
    navigation::init_anchors(window, document, &config)?;

    let mut observers = Vec::new();
    observers.extend(animate::init_reveal(window, document, &config)?);
    observers.extend(animate::init_counters(window, document, &config)?);
    scrolling::init(window, document, &config, observers)?;

    effects::init_contact_form(document, &config)?;
    effects::init_typing(document, &config);

    polish::init_lazy_images(window, document, &config)?;
    polish::init_load(window, document, &config)?;
    polish::print_banner();
    Ok(())
}

/// Registers `handler` for `event` on `target` for the lifetime of the page.
pub(crate) fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}
