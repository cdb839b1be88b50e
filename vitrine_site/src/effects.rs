// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hero typing effect and the contact form's submit affordance.

use alloc::rc::Rc;
use core::cell::RefCell;

use vitrine_core::config::PageConfig;
use vitrine_core::form::{ButtonState, SubmitAffordance};
use vitrine_core::typing::{TypingConfig, TypingEffect};
use vitrine_web::dom::query;
use vitrine_web::set_timeout;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlButtonElement};

use crate::listen;

/// Clears the hero title and types it back one character at a time.
pub(crate) fn init_typing(document: &Document, config: &PageConfig) {
    let Some(title) = query(document, config.selectors.typed_title) else {
        return;
    };
    let text = title.text_content().unwrap_or_default();
    title.set_text_content(Some(""));
    type_next(title, TypingEffect::new(text), config.typing);
}

fn type_next(el: Element, mut effect: TypingEffect, config: TypingConfig) {
    let Some(delay) = effect.next_delay(&config) else {
        return;
    };
    set_timeout(delay, move || {
        if let Some(prefix) = effect.type_next() {
            el.set_text_content(Some(prefix));
        }
        type_next(el, effect, config);
    });
}

fn show(button: &HtmlButtonElement, state: ButtonState) {
    button.set_text_content(Some(state.label));
    button.set_disabled(state.disabled);
}

/// Marks the submit button busy for a while after each submit. The
/// submission itself proceeds natively.
pub(crate) fn init_contact_form(document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let Some(form) = query(document, config.selectors.contact_form) else {
        return Ok(());
    };
    let button_selector = config.selectors.submit_button;
    let affordance = Rc::new(RefCell::new(SubmitAffordance::new(config.submit)));
    let f = form.clone();
    listen(&form, "submit", move |_| {
        let Some(button) = f
            .query_selector(button_selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
        else {
            return;
        };
        let (busy, token) = affordance.borrow_mut().on_submit();
        show(&button, busy);

        let reset_after = affordance.borrow().config().reset_after;
        let affordance = Rc::clone(&affordance);
        set_timeout(reset_after, move || {
            if let Some(idle) = affordance.borrow_mut().reset(token) {
                show(&button, idle);
            }
        });
    })
}
