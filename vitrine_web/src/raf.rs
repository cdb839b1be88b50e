// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `requestAnimationFrame` scheduling.
//!
//! Two shapes are provided:
//!
//! - [`request_frame`] runs a closure once on the next frame. The scroll
//!   coalescer uses it: a burst of scroll events asks for one frame.
//! - [`FrameLoop`] re-registers itself every frame for as long as its callback
//!   returns `true`, then goes idle until [`start`](FrameLoop::start) is called
//!   again. Counter animations share one loop.
//!
//! Both step by frame count, not by the frame timestamp, so the timestamp
//! argument of the browser callback is not bound.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

// Direct global bindings instead of `web_sys::Window` methods: avoids fetching
// (and checking) the Window object on every frame.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(id: i32);
}

/// Runs `f` once on the next animation frame.
pub fn request_frame(f: impl FnOnce() + 'static) {
    let callback = Closure::once_into_js(f);
    request_animation_frame(&callback);
}

/// A self-stopping `requestAnimationFrame` loop.
///
/// Create with [`FrameLoop::new`], then call [`start`](Self::start). The loop
/// re-registers each frame until its callback returns `false`,
/// [`stop`](Self::stop) is called, or the `FrameLoop` is dropped.
pub struct FrameLoop {
    inner: Rc<FrameInner>,
}

type FrameClosure = Closure<dyn FnMut()>;

struct FrameInner {
    /// The JS closure registered with `requestAnimationFrame`.
    ///
    /// Kept in its own `RefCell` so it can be set once in `start()` and
    /// referenced from inside itself without conflicting with `callback`.
    closure: RefCell<Option<FrameClosure>>,

    /// The frame callback. Returns whether another frame is wanted.
    callback: RefCell<Box<dyn FnMut() -> bool>>,

    running: Cell<bool>,

    /// ID of the most recent `requestAnimationFrame` call, for cancellation.
    raf_id: Cell<i32>,
}

impl FrameLoop {
    /// Creates a loop that is **not yet running**.
    pub fn new(callback: impl FnMut() -> bool + 'static) -> Self {
        Self {
            inner: Rc::new(FrameInner {
                closure: RefCell::new(None),
                callback: RefCell::new(Box::new(callback)),
                running: Cell::new(false),
                raf_id: Cell::new(0),
            }),
        }
    }

    /// Starts the loop. If already running, this is a no-op.
    ///
    /// Must not be called from inside the loop's own callback.
    pub fn start(&self) {
        if self.inner.running.get() {
            return;
        }
        self.inner.running.set(true);

        let inner = Rc::clone(&self.inner);
        let closure = Closure::wrap(Box::new(move || {
            if !inner.running.get() {
                return;
            }

            // The borrow is scoped so it doesn't overlap with `closure`.
            let more = inner.callback.borrow_mut()();
            if !more {
                inner.running.set(false);
                return;
            }

            if let Some(ref closure) = *inner.closure.borrow() {
                let id = request_animation_frame(closure.as_ref().unchecked_ref());
                inner.raf_id.set(id);
            }
        }) as Box<dyn FnMut()>);

        let id = request_animation_frame(closure.as_ref().unchecked_ref());
        self.inner.raf_id.set(id);
        *self.inner.closure.borrow_mut() = Some(closure);
    }

    /// Stops the loop and cancels the pending frame.
    pub fn stop(&self) {
        if !self.inner.running.get() {
            return;
        }
        self.inner.running.set(false);
        cancel_animation_frame(self.inner.raf_id.get());
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
        // Break the closure → inner cycle.
        self.inner.closure.borrow_mut().take();
    }
}

impl core::fmt::Debug for FrameLoop {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameLoop")
            .field("running", &self.inner.running.get())
            .finish_non_exhaustive()
    }
}
