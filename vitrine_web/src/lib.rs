// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser backend for vitrine.
//!
//! This crate binds the `vitrine_core` components to browser APIs:
//!
//! - [`FrameLoop`] and [`request_frame`]: `requestAnimationFrame` scheduling
//! - [`set_timeout`]: one-shot timers
//! - [`BrowserStore`]: `localStorage` with an in-memory fallback
//! - [`VisibilityObserver`]: `IntersectionObserver` feeding a watch group
//! - [`dom`]: queries, measurements, and class/attribute presenters
//! - [`ConsoleSink`]: trace events on the browser console

#![no_std]

extern crate alloc;

mod console;
pub mod dom;
mod observer;
mod raf;
mod storage;
mod timer;

pub use console::ConsoleSink;
pub use observer::{VisibilityObserver, supports_intersection_observer};
pub use raf::{FrameLoop, request_frame};
pub use storage::BrowserStore;
pub use timer::set_timeout;

use vitrine_core::trace::Tracer;

/// Runs `f` with the backend's tracer.
///
/// With the `trace` feature the tracer writes to a [`ConsoleSink`]; without it
/// every event is dropped at compile time.
pub fn with_tracer<R>(f: impl FnOnce(&mut Tracer<'_>) -> R) -> R {
    #[cfg(feature = "trace")]
    {
        let mut sink = ConsoleSink;
        f(&mut Tracer::new(&mut sink))
    }
    #[cfg(not(feature = "trace"))]
    {
        f(&mut Tracer::none())
    }
}
