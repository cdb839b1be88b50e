// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-triggered reveal transitions and stat counters.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use vitrine_core::config::PageConfig;
use vitrine_core::counter::{Counter, CounterFrame};
use vitrine_core::observe::{GroupId, WatchId};
use vitrine_web::dom::{query_all, set_class};
use vitrine_web::{FrameLoop, VisibilityObserver, with_tracer};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

/// Adds the reveal class to content blocks the first time they scroll into
/// view.
pub(crate) fn init_reveal(
    window: &Window,
    document: &Document,
    config: &PageConfig,
) -> Result<Option<Rc<VisibilityObserver>>, JsValue> {
    let targets = query_all(document, config.selectors.reveal);
    if targets.is_empty() {
        return Ok(None);
    }
    let class = config.classes.revealed;
    let observer = VisibilityObserver::new(window, GroupId::REVEAL, config.reveal, move |el, _| {
        set_class(el, class, true);
    })?;
    for el in targets {
        observer.watch(el);
    }
    Ok(Some(Rc::new(observer)))
}

struct CounterSlot {
    id: WatchId,
    el: Element,
    counter: Counter,
}

fn show(slot: &CounterSlot, frame: CounterFrame) {
    slot.el
        .set_text_content(Some(&frame.text(slot.counter.suffix())));
}

/// Counts stat values up from zero once they are half visible.
///
/// Elements whose text has no leading integer are not watched.
pub(crate) fn init_counters(
    window: &Window,
    document: &Document,
    config: &PageConfig,
) -> Result<Option<Rc<VisibilityObserver>>, JsValue> {
    let candidates = query_all(document, config.selectors.counters);
    if candidates.is_empty() {
        return Ok(None);
    }
    let slots: Rc<RefCell<Vec<CounterSlot>>> = Rc::new(RefCell::new(Vec::new()));

    // One loop steps every running counter and idles when none is left.
    let frames = {
        let slots = Rc::clone(&slots);
        FrameLoop::new(move || {
            let mut running = false;
            for slot in slots.borrow_mut().iter_mut() {
                if let Some(frame) = with_tracer(|t| slot.counter.advance(t)) {
                    show(slot, frame);
                    running |= !frame.finished;
                }
            }
            running
        })
    };

    let fire_slots = Rc::clone(&slots);
    let observer = VisibilityObserver::new(
        window,
        GroupId::COUNTER,
        config.counter_watch,
        move |_, id| {
            let mut slots = fire_slots.borrow_mut();
            let Some(slot) = slots.iter_mut().find(|s| s.id == id) else {
                return;
            };
            let Some(frame) = with_tracer(|t| slot.counter.start(t)) else {
                return;
            };
            show(slot, frame);
            if !frame.finished {
                frames.start();
            }
        },
    )?;

    for el in candidates {
        let text = el.text_content().unwrap_or_default();
        let Some(counter) = Counter::from_text(&text, config.counter) else {
            continue;
        };
        let id = observer.watch(el.clone());
        slots.borrow_mut().push(CounterSlot { id, el, counter });
    }
    Ok(Some(Rc::new(observer)))
}
