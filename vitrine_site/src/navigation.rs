// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mobile menu and in-page anchor scrolling.

use alloc::rc::Rc;
use core::cell::RefCell;

use vitrine_core::config::PageConfig;
use vitrine_core::nav::{AnchorAction, ClickTarget, MobileNav, resolve_anchor};
use vitrine_web::dom::{
    ClassNavPresenter, offset_height, offset_top, query, query_all, query_all_within,
    smooth_scroll_to,
};
use vitrine_web::with_tracer;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Node, Window};

use crate::listen;

pub(crate) fn init_mobile_nav(document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let s = &config.selectors;
    let (Some(toggle), Some(menu)) = (query(document, s.mobile_toggle), query(document, s.nav_menu))
    else {
        return Ok(());
    };
    let menu_links = query_all_within(&menu, s.nav_link);
    let nav = Rc::new(RefCell::new(MobileNav::new(ClassNavPresenter::new(
        toggle.clone(),
        menu,
        config.classes.active,
    ))));

    {
        let nav = Rc::clone(&nav);
        listen(&toggle, "click", move |_| {
            with_tracer(|t| nav.borrow_mut().toggle(t));
        })?;
    }

    for link in menu_links {
        let nav = Rc::clone(&nav);
        listen(&link, "click", move |_| {
            with_tracer(|t| nav.borrow_mut().close(t));
        })?;
    }

    listen(document, "click", move |event| {
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        let place = {
            let nav = nav.borrow();
            let presenter = nav.presenter();
            if presenter.toggle().contains(target.as_ref()) {
                ClickTarget::Toggle
            } else if presenter.menu().contains(target.as_ref()) {
                ClickTarget::Menu
            } else {
                ClickTarget::Outside
            }
        };
        with_tracer(|t| nav.borrow_mut().on_document_click(place, t));
    })
}

pub(crate) fn init_anchors(
    window: &Window,
    document: &Document,
    config: &PageConfig,
) -> Result<(), JsValue> {
    let s = config.selectors;

    for anchor in query_all(document, s.anchors) {
        let (window, document, el) = (window.clone(), document.clone(), anchor.clone());
        listen(&anchor, "click", move |event| {
            let href = el.get_attribute("href").unwrap_or_default();
            let navbar_height = query(&document, s.navbar_height).map_or(0.0, |n| offset_height(&n));
            let action = resolve_anchor(&href, navbar_height, |id| {
                document.get_element_by_id(id).and_then(|target| offset_top(&target))
            });
            if let AnchorAction::ScrollTo(top) = action {
                event.prevent_default();
                smooth_scroll_to(&window, top);
            }
        })?;
    }

    for empty in query_all(document, s.empty_anchors) {
        listen(&empty, "click", |event| event.prevent_default())?;
    }

    if let Some(button) = query(document, s.scroll_top) {
        let window = window.clone();
        listen(&button, "click", move |_| smooth_scroll_to(&window, 0.0))?;
    }
    Ok(())
}
