// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for page components.
//!
//! This module provides a [`TraceSink`] trait with one method per event kind
//! that components emit as they make decisions. All method bodies default to
//! no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing. When **on**, each
//! method performs a single `Option` branch before dispatching.
//!
//! Nothing here is an error channel: components fail silently by contract and
//! the events only describe state changes that did happen.

use crate::counter::CounterPhase;
use crate::observe::{GroupId, WatchId};
use crate::theme::Theme;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Why a theme was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemeSource {
    /// Read back from the preference store.
    Stored,
    /// Derived from the system color-scheme signal.
    System,
    /// Chosen explicitly (toggle click).
    User,
}

/// Mobile navigation transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavAction {
    /// The menu was opened.
    Opened,
    /// The menu was closed by its toggle, a link, or an outside click.
    Closed,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted whenever a theme is written to the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeEvent {
    /// The applied theme.
    pub theme: Theme,
    /// Where it came from.
    pub source: ThemeSource,
    /// Whether it was written to the preference store.
    pub persisted: bool,
}

/// Emitted when a watched element fires its one-shot transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealEvent {
    /// Watch group that owned the element.
    pub group: GroupId,
    /// The element's handle (now disposed).
    pub id: WatchId,
    /// Elements of this group still pending after this one fired.
    pub remaining: usize,
}

/// Emitted when the highlighted navigation link changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveLinkEvent {
    /// Index of the newly active link.
    pub link: usize,
    /// Previously active link, if any.
    pub previous: Option<usize>,
    /// Scroll offset that produced the change.
    pub offset: f64,
}

/// Emitted when a counter starts or finishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterEvent {
    /// Parsed target value.
    pub target: u32,
    /// New phase of the counter.
    pub phase: CounterPhase,
    /// Steps taken so far.
    pub steps: u32,
}

/// Emitted on mobile navigation transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEvent {
    /// What happened.
    pub action: NavAction,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from page components.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a theme is applied.
    fn on_theme(&mut self, e: &ThemeEvent) {
        _ = e;
    }

    /// Called when a watched element fires.
    fn on_reveal(&mut self, e: &RevealEvent) {
        _ = e;
    }

    /// Called when the active navigation link changes.
    fn on_active_link(&mut self, e: &ActiveLinkEvent) {
        _ = e;
    }

    /// Called when a counter starts or finishes.
    fn on_counter(&mut self, e: &CounterEvent) {
        _ = e;
    }

    /// Called on mobile navigation transitions.
    fn on_nav(&mut self, e: &NavEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`ThemeEvent`].
    #[inline]
    pub fn theme(&mut self, e: &ThemeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_theme(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RevealEvent`].
    #[inline]
    pub fn reveal(&mut self, e: &RevealEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_reveal(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`ActiveLinkEvent`].
    #[inline]
    pub fn active_link(&mut self, e: &ActiveLinkEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_active_link(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`CounterEvent`].
    #[inline]
    pub fn counter(&mut self, e: &CounterEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_counter(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`NavEvent`].
    #[inline]
    pub fn nav(&mut self, e: &NavEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_nav(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
