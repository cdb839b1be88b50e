// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme toggle and system color-scheme tracking.

use alloc::rc::Rc;
use core::cell::RefCell;

use vitrine_core::config::PageConfig;
use vitrine_core::theme::{DARK_SCHEME_QUERY, ThemeController};
use vitrine_web::dom::{RootThemeSurface, query};
use vitrine_web::{BrowserStore, with_tracer};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Document, MediaQueryListEvent, Window};

use crate::listen;

pub(crate) fn init(window: &Window, document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let Some(root) = document.document_element() else {
        return Ok(());
    };
    let media = window.match_media(DARK_SCHEME_QUERY).ok().flatten();
    let prefers_dark = media.as_ref().is_some_and(|m| m.matches());

    let controller = Rc::new(RefCell::new(ThemeController::new(
        BrowserStore::open(),
        RootThemeSurface::new(root),
    )));
    with_tracer(|t| controller.borrow_mut().init(prefers_dark, t));

    if let Some(toggle) = query(document, config.selectors.theme_toggle) {
        let controller = Rc::clone(&controller);
        listen(&toggle, "click", move |_| {
            with_tracer(|t| controller.borrow_mut().toggle(t));
        })?;
    }

    if let Some(media) = media {
        listen(&media, "change", move |event| {
            let Some(change) = event.dyn_ref::<MediaQueryListEvent>() else {
                return;
            };
            with_tracer(|t| controller.borrow_mut().on_system_change(change.matches(), t));
        })?;
    }
    Ok(())
}
