// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navbar elevation, scroll-to-top visibility, and active section links.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use vitrine_core::config::PageConfig;
use vitrine_core::scroll::{ScrollCoalescer, ScrollPresenter as _, ScrollTracker};
use vitrine_web::dom::{ClassScrollPresenter, hrefs, measure_sections, query, query_all, scroll_offset};
use vitrine_web::{VisibilityObserver, request_frame, with_tracer};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

use crate::listen;

struct ScrollState {
    tracker: ScrollTracker,
    presenter: ClassScrollPresenter,
    sections: Vec<Element>,
    coalescer: ScrollCoalescer,
    /// Observers without native notifications are polled here.
    observers: Vec<Rc<VisibilityObserver>>,
}

impl ScrollState {
    fn run(&mut self, window: &Window, offset: f64) {
        // Layout may have changed since the last scroll.
        let sections = measure_sections(&self.sections);
        let decision = with_tracer(|t| self.tracker.on_scroll(offset, &sections, t));
        self.presenter.apply(&decision);
        for observer in &self.observers {
            observer.poll(window);
        }
    }
}

/// Runs the tracker once now, then once per animation frame in which the
/// page scrolled.
pub(crate) fn init(
    window: &Window,
    document: &Document,
    config: &PageConfig,
    observers: Vec<Rc<VisibilityObserver>>,
) -> Result<(), JsValue> {
    let s = &config.selectors;
    let links = query_all(document, s.nav_link);
    let state = Rc::new(RefCell::new(ScrollState {
        tracker: ScrollTracker::new(config.scroll, hrefs(&links)),
        presenter: ClassScrollPresenter::new(
            query(document, s.navbar),
            query(document, s.scroll_top),
            links,
            config.classes,
        ),
        sections: query_all(document, s.sections),
        coalescer: ScrollCoalescer::new(),
        observers,
    }));

    state.borrow_mut().run(window, scroll_offset(window));

    let w = window.clone();
    listen(window, "scroll", move |_| {
        if !state.borrow_mut().coalescer.push(scroll_offset(&w)) {
            return;
        }
        let (state, w) = (Rc::clone(&state), w.clone());
        request_frame(move || {
            let mut st = state.borrow_mut();
            if let Some(offset) = st.coalescer.take() {
                st.run(&w, offset);
            }
        });
    })
}
