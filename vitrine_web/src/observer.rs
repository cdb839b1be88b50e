// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`WatchGroup`]s bound to live elements.
//!
//! [`VisibilityObserver`] registers elements with a `WatchGroup` and feeds it
//! from the browser's `IntersectionObserver`. Fired elements are unobserved
//! and handed to the callback exactly once. When the browser has no
//! `IntersectionObserver`, the same group is fed by measuring element
//! rectangles: call [`VisibilityObserver::poll`] after scrolling.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use js_sys::Array;
use kurbo::Rect;
use vitrine_core::observe::{GroupId, IntersectionSample, WatchConfig, WatchGroup, WatchId};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use crate::dom::{client_rect, viewport_rect};
use crate::with_tracer;

type FireCallback = Box<dyn FnMut(&Element, WatchId)>;
type EntriesClosure = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct ObserverState {
    group: WatchGroup,
    watched: Vec<(WatchId, Element)>,
}

impl ObserverState {
    fn id_of(&self, target: &Element) -> Option<WatchId> {
        self.watched
            .iter()
            .find(|(_, el)| el == target)
            .map(|(id, _)| *id)
    }

    fn element(&self, id: WatchId) -> Option<&Element> {
        self.watched
            .iter()
            .find(|(watched, _)| *watched == id)
            .map(|(_, el)| el)
    }

    /// Runs `step` on the group and pairs the fired ids with their elements.
    fn fire_with(
        &mut self,
        step: impl FnOnce(&mut WatchGroup) -> Vec<WatchId>,
    ) -> Vec<(WatchId, Element)> {
        step(&mut self.group)
            .into_iter()
            .filter_map(|id| self.element(id).map(|el| (id, el.clone())))
            .collect()
    }
}

/// Returns `true` if the browser provides `IntersectionObserver`.
#[must_use]
pub fn supports_intersection_observer(window: &Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// A [`WatchGroup`] whose elements are live DOM nodes.
pub struct VisibilityObserver {
    state: Rc<RefCell<ObserverState>>,
    on_fire: Rc<RefCell<FireCallback>>,
    /// `None` when the browser lacks `IntersectionObserver`.
    native: Option<(IntersectionObserver, EntriesClosure)>,
}

impl core::fmt::Debug for VisibilityObserver {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("VisibilityObserver")
            .field("group", &state.group.id())
            .field("watched", &state.watched.len())
            .field("pending", &state.group.pending_count())
            .field("native", &self.native.is_some())
            .finish_non_exhaustive()
    }
}

impl VisibilityObserver {
    /// Creates an observer for one watch group.
    ///
    /// `on_fire` runs once per element, right after the element is
    /// unobserved.
    ///
    /// # Errors
    ///
    /// Returns the browser's exception if `IntersectionObserver` exists but
    /// rejects the options.
    pub fn new(
        window: &Window,
        group: GroupId,
        config: WatchConfig,
        on_fire: impl FnMut(&Element, WatchId) + 'static,
    ) -> Result<Self, JsValue> {
        let state = Rc::new(RefCell::new(ObserverState {
            group: WatchGroup::new(group, config),
            watched: Vec::new(),
        }));
        let on_fire: Rc<RefCell<FireCallback>> = Rc::new(RefCell::new(Box::new(on_fire)));

        let native = if supports_intersection_observer(window) {
            let closure_state = Rc::clone(&state);
            let closure_fire = Rc::clone(&on_fire);
            let closure = Closure::wrap(Box::new(
                move |entries: Array, observer: IntersectionObserver| {
                    let fired = {
                        let mut st = closure_state.borrow_mut();
                        let samples: Vec<IntersectionSample> = entries
                            .iter()
                            .filter_map(|value| {
                                let entry = value.dyn_into::<IntersectionObserverEntry>().ok()?;
                                Some(IntersectionSample {
                                    id: st.id_of(&entry.target())?,
                                    is_intersecting: entry.is_intersecting(),
                                    ratio: entry.intersection_ratio(),
                                })
                            })
                            .collect();
                        st.fire_with(|group| with_tracer(|t| group.notify(&samples, t)))
                    };
                    for (id, el) in &fired {
                        observer.unobserve(el);
                        (closure_fire.borrow_mut())(el, *id);
                    }
                },
            )
                as Box<dyn FnMut(Array, IntersectionObserver)>);

            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(config.threshold));
            init.set_root_margin(&config.root_margin_css());
            let observer =
                IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)?;
            Some((observer, closure))
        } else {
            None
        };

        Ok(Self {
            state,
            on_fire,
            native,
        })
    }

    /// Starts watching `el`.
    pub fn watch(&self, el: Element) -> WatchId {
        let id = {
            let mut st = self.state.borrow_mut();
            let id = st.group.watch().id();
            st.watched.push((id, el.clone()));
            id
        };
        if let Some((observer, _)) = &self.native {
            observer.observe(&el);
        }
        id
    }

    /// Returns `true` if the browser delivers intersection notifications.
    #[must_use]
    pub fn is_native(&self) -> bool {
        self.native.is_some()
    }

    /// Returns the number of elements that have not fired yet.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.state.borrow().group.pending_count()
    }

    /// Measures pending elements against the viewport and fires those that
    /// qualify. A no-op when notifications are native or nothing is pending.
    pub fn poll(&self, window: &Window) {
        if self.native.is_some() || self.pending_count() == 0 {
            return;
        }
        let viewport = viewport_rect(window);
        let fired = {
            let mut st = self.state.borrow_mut();
            let rects: Vec<(WatchId, Rect)> = st
                .watched
                .iter()
                .filter(|(id, _)| st.group.is_pending(*id))
                .map(|(id, el)| (*id, client_rect(el)))
                .collect();
            st.fire_with(|group| with_tracer(|t| group.evaluate(viewport, rects, t)))
        };
        for (id, el) in &fired {
            (self.on_fire.borrow_mut())(el, *id);
        }
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        if let Some((observer, _)) = &self.native {
            observer.disconnect();
        }
    }
}
