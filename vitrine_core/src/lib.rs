// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decision logic for a scroll-reactive portfolio page.
//!
//! `vitrine_core` holds everything about the page's interactive behavior that
//! does not need a browser: which theme applies, when an element has been seen,
//! which navigation link is current, what a counter displays next. It is
//! `no_std` compatible (with `alloc`) and knows nothing about DOM types, so
//! every rule is testable on the host.
//!
//! # Architecture
//!
//! The browser backend turns platform notifications into calls on the
//! components below and applies their results through small presenter traits:
//!
//! ```text
//!   scroll event ──► ScrollCoalescer ──► ScrollTracker::on_scroll() ──► ScrollPresenter::apply()
//!
//!   intersection batch ──► WatchGroup::notify() ──► fired ids ──┬─► reveal class
//!                                                             └─► Counter::start()
//!                                                                     │
//!   animation frame ──► Counter::advance() ◄──────────────────────────┘
//!
//!   toggle click / system change ──► ThemeController ──► ThemeSurface::apply_theme()
//! ```
//!
//! Components never read each other's state. The only shared medium is the
//! page itself.
//!
//! **[`theme`]**: Persisted theme preference with system fallback.
//!
//! **[`observe`]**: One-shot visibility watch groups (pending → fired).
//!
//! **[`scroll`]**: Navbar elevation, scroll-to-top visibility, sticky active
//! section link, and frame coalescing of scroll bursts.
//!
//! **[`counter`]**: Count-up animation started once per stat element.
//!
//! **[`nav`]**, **[`typing`]**, **[`form`]**, **[`polish`]**: Mobile menu and
//! anchor scrolling, hero typing effect, submit button affordance, and
//! page-load niceties.
//!
//! **[`config`]**: The DOM contract (selectors and classes) and presets.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types, with
//! a zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod config;
pub mod counter;
pub mod form;
pub mod nav;
pub mod observe;
pub mod polish;
pub mod scroll;
pub mod theme;
pub mod time;
pub mod trace;
pub mod typing;
