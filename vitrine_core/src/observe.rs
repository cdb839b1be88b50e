// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot visibility watching.
//!
//! A [`WatchGroup`] tracks a set of elements under one [`WatchConfig`]
//! (visibility threshold plus root margin). Each element is registered with
//! [`WatchGroup::watch`], which returns a [`Subscription`], and moves through a
//! two-state machine:
//!
//! ```text
//!   Pending ──(intersecting, ratio ≥ threshold)──► Fired (terminal)
//! ```
//!
//! The group disposes a subscription itself the moment it fires, so an element
//! never fires twice no matter how often it re-enters the viewport. Any number
//! of groups with different configurations can run side by side; the page uses
//! one for reveal transitions and a stricter one for counters.
//!
//! The group does not measure anything. Samples come from the browser's
//! `IntersectionObserver` through [`WatchGroup::notify`], or, where that
//! primitive is missing, from element rectangles through
//! [`WatchGroup::evaluate`], which applies the same rules via
//! [`intersection_ratio`].

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Insets, Rect};

use crate::trace::{RevealEvent, Tracer};

/// Identifies a watch group in diagnostics.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub u8);

impl GroupId {
    /// Group for reveal transitions on content blocks.
    pub const REVEAL: Self = Self(0);
    /// Group for counter animations.
    pub const COUNTER: Self = Self(1);
}

impl fmt::Debug for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GroupId({})", self.0)
    }
}

/// A handle to an element registered in a [`WatchGroup`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchId {
    pub(crate) idx: u32,
    pub(crate) group: GroupId,
}

impl WatchId {
    /// Returns the slot index (registration order within the group).
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.idx
    }

    /// Returns the owning group.
    #[inline]
    #[must_use]
    pub const fn group(self) -> GroupId {
        self.group
    }
}

impl fmt::Debug for WatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WatchId({}@group{})", self.idx, self.group.0)
    }
}

/// Per-element watch state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WatchState {
    /// Waiting for the element to become visible enough.
    Pending,
    /// The one-shot transition ran; the element is no longer watched.
    Fired,
}

/// Trigger rule for a watch group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WatchConfig {
    /// Minimum visible fraction of the element (0.0–1.0).
    pub threshold: f64,
    /// Adjustment to the viewport edges before intersecting, using CSS
    /// `rootMargin` semantics: positive values grow the viewport, negative
    /// values shrink it. `x0`/`y0`/`x1`/`y1` are left/top/right/bottom.
    pub root_margin: Insets,
}

impl WatchConfig {
    /// Reveal transitions: 10% visible, bottom edge pulled in by 50px.
    #[must_use]
    pub const fn reveal() -> Self {
        Self {
            threshold: 0.1,
            root_margin: Insets {
                x0: 0.0,
                y0: 0.0,
                x1: 0.0,
                y1: -50.0,
            },
        }
    }

    /// Counter animations: 50% visible, no margin.
    #[must_use]
    pub const fn counter() -> Self {
        Self {
            threshold: 0.5,
            root_margin: Insets {
                x0: 0.0,
                y0: 0.0,
                x1: 0.0,
                y1: 0.0,
            },
        }
    }

    /// Formats the root margin as a CSS `rootMargin` value
    /// (`top right bottom left`).
    #[must_use]
    pub fn root_margin_css(&self) -> String {
        let m = self.root_margin;
        format!("{}px {}px {}px {}px", m.y0, m.x1, m.y1, m.x0)
    }

    /// Returns `true` if a measured rectangle satisfies this rule.
    ///
    /// Only measurements taken by [`WatchGroup::evaluate`] go through the
    /// ratio check. Browser notifications are already gated on the threshold
    /// and fire on `is_intersecting` alone.
    #[must_use]
    pub fn triggers(&self, is_intersecting: bool, ratio: f64) -> bool {
        is_intersecting && ratio >= self.threshold
    }
}

/// One element's visibility as reported by an intersection notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    /// The element.
    pub id: WatchId,
    /// Whether the element touches the (margin-adjusted) viewport.
    pub is_intersecting: bool,
    /// Visible fraction of the element's area.
    pub ratio: f64,
}

/// Visibility of a rectangle within a viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visibility {
    /// Whether the rectangles overlap or share an edge.
    pub is_intersecting: bool,
    /// Overlap area divided by target area.
    pub ratio: f64,
}

/// Computes how much of `target` lies within `viewport` grown by `margin`.
///
/// Mirrors `IntersectionObserver`: edge-adjacent rectangles count as
/// intersecting with ratio zero, and a zero-area target that touches the root
/// counts as fully visible.
#[must_use]
pub fn intersection_ratio(target: Rect, viewport: Rect, margin: Insets) -> Visibility {
    let root = viewport + margin;
    let is_intersecting = target.x0 <= root.x1
        && target.x1 >= root.x0
        && target.y0 <= root.y1
        && target.y1 >= root.y0;
    if !is_intersecting {
        return Visibility {
            is_intersecting,
            ratio: 0.0,
        };
    }
    let area = target.area();
    let ratio = if area > 0.0 {
        (target.intersect(root).area() / area).clamp(0.0, 1.0)
    } else {
        1.0
    };
    Visibility {
        is_intersecting,
        ratio,
    }
}

/// Proof of registration in a [`WatchGroup`].
///
/// The group disposes the subscription when the element fires; callers only
/// need [`WatchGroup::cancel`] to stop watching early.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Subscription {
    id: WatchId,
}

impl Subscription {
    /// Returns the watched element's handle.
    #[must_use]
    pub const fn id(&self) -> WatchId {
        self.id
    }
}

/// A set of elements watched under one [`WatchConfig`].
#[derive(Clone, Debug)]
pub struct WatchGroup {
    group: GroupId,
    config: WatchConfig,
    /// `None` marks a cancelled registration.
    slots: Vec<Option<WatchState>>,
    pending: usize,
}

impl WatchGroup {
    /// Creates an empty group.
    #[must_use]
    pub fn new(group: GroupId, config: WatchConfig) -> Self {
        Self {
            group,
            config,
            slots: Vec::new(),
            pending: 0,
        }
    }

    /// Returns the group identifier.
    #[must_use]
    pub fn id(&self) -> GroupId {
        self.group
    }

    /// Returns the trigger rule.
    #[must_use]
    pub fn config(&self) -> &WatchConfig {
        &self.config
    }

    /// Registers a new element in the `Pending` state.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` elements are registered.
    pub fn watch(&mut self) -> Subscription {
        let idx = u32::try_from(self.slots.len()).expect("watch group slot overflow");
        self.slots.push(Some(WatchState::Pending));
        self.pending += 1;
        Subscription {
            id: WatchId {
                idx,
                group: self.group,
            },
        }
    }

    /// Stops watching an element that has not fired yet.
    ///
    /// Returns `false` if the element had already fired.
    pub fn cancel(&mut self, subscription: Subscription) -> bool {
        self.transition(subscription.id, None)
    }

    /// Returns the state of an element, or `None` if it was cancelled or does
    /// not belong to this group.
    #[must_use]
    pub fn state(&self, id: WatchId) -> Option<WatchState> {
        if id.group != self.group {
            return None;
        }
        self.slots.get(id.idx as usize).copied().flatten()
    }

    /// Returns `true` if the element is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self, id: WatchId) -> bool {
        self.state(id) == Some(WatchState::Pending)
    }

    /// Returns the number of elements still waiting to fire.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending
    }

    /// Processes one batch of intersection samples.
    ///
    /// An intersecting sample fires its element whatever the reported ratio;
    /// an entry can arrive intersecting yet just under the threshold, and an
    /// element taller than the viewport never reaches it at all.
    ///
    /// Returns the elements that fired in this batch, in sample order. Samples
    /// for unknown, cancelled, or already fired elements are ignored, and an
    /// empty batch is a no-op.
    pub fn notify(&mut self, samples: &[IntersectionSample], tracer: &mut Tracer<'_>) -> Vec<WatchId> {
        let mut fired = Vec::new();
        for sample in samples {
            if !sample.is_intersecting {
                continue;
            }
            if self.fire(sample.id) {
                tracer.reveal(&RevealEvent {
                    group: self.group,
                    id: sample.id,
                    remaining: self.pending,
                });
                fired.push(sample.id);
            }
        }
        fired
    }

    /// Measures element rectangles against a viewport and processes the
    /// result as one batch.
    ///
    /// Only pending elements are measured; the rest are skipped. A measured
    /// element counts as intersecting once it meets
    /// [`WatchConfig::triggers`].
    pub fn evaluate<I>(&mut self, viewport: Rect, rects: I, tracer: &mut Tracer<'_>) -> Vec<WatchId>
    where
        I: IntoIterator<Item = (WatchId, Rect)>,
    {
        let margin = self.config.root_margin;
        let samples: Vec<IntersectionSample> = rects
            .into_iter()
            .filter(|(id, _)| self.is_pending(*id))
            .map(|(id, rect)| {
                let v = intersection_ratio(rect, viewport, margin);
                IntersectionSample {
                    id,
                    is_intersecting: self.config.triggers(v.is_intersecting, v.ratio),
                    ratio: v.ratio,
                }
            })
            .collect();
        self.notify(&samples, tracer)
    }

    fn fire(&mut self, id: WatchId) -> bool {
        self.transition(id, Some(WatchState::Fired))
    }

    /// Moves a pending slot to `next`; anything else is left alone.
    fn transition(&mut self, id: WatchId, next: Option<WatchState>) -> bool {
        if !self.is_pending(id) {
            return false;
        }
        self.slots[id.idx as usize] = next;
        self.pending -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seen(id: WatchId, ratio: f64) -> IntersectionSample {
        IntersectionSample {
            id,
            is_intersecting: ratio > 0.0,
            ratio,
        }
    }

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1000.0, 800.0);

    #[test]
    fn fires_once_across_repeated_entries() {
        let mut g = WatchGroup::new(GroupId::REVEAL, WatchConfig::reveal());
        let a = g.watch().id();
        let mut tracer = Tracer::none();

        assert_eq!(g.notify(&[seen(a, 0.5)], &mut tracer), [a]);
        assert_eq!(g.state(a), Some(WatchState::Fired));

        // Leaves and re-enters the viewport several times.
        for ratio in [0.0, 0.8, 0.0, 1.0] {
            assert!(
                g.notify(&[seen(a, ratio)], &mut tracer).is_empty(),
                "fired element must stay silent"
            );
        }
        assert_eq!(g.pending_count(), 0);
    }

    #[test]
    fn intersecting_entry_fires_under_threshold() {
        // The browser can report an entry as intersecting with a ratio a hair
        // under the threshold; it may never send another one.
        let mut g = WatchGroup::new(GroupId::COUNTER, WatchConfig::counter());
        let a = g.watch().id();
        let sample = IntersectionSample {
            id: a,
            is_intersecting: true,
            ratio: 0.4999,
        };
        assert_eq!(g.notify(&[sample], &mut Tracer::none()), [a]);
        assert_eq!(g.pending_count(), 0);
    }

    #[test]
    fn polled_rect_below_threshold_stays_pending() {
        let mut g = WatchGroup::new(GroupId::COUNTER, WatchConfig::counter());
        let a = g.watch().id();
        let mut tracer = Tracer::none();
        // 100px element with 40px showing above the viewport bottom.
        let rects = [(a, Rect::new(0.0, 760.0, 100.0, 860.0))];
        assert!(g.evaluate(VIEWPORT, rects, &mut tracer).is_empty());
        assert!(g.is_pending(a));

        let scrolled = Rect::new(0.0, 100.0, 1000.0, 900.0);
        assert_eq!(g.evaluate(scrolled, rects, &mut tracer), [a]);
    }

    #[test]
    fn not_intersecting_never_fires() {
        let mut g = WatchGroup::new(GroupId::REVEAL, WatchConfig::reveal());
        let a = g.watch().id();
        let sample = IntersectionSample {
            id: a,
            is_intersecting: false,
            ratio: 1.0,
        };
        assert!(g.notify(&[sample], &mut Tracer::none()).is_empty());
    }

    #[test]
    fn batches_may_be_empty_or_mixed() {
        let mut g = WatchGroup::new(GroupId::REVEAL, WatchConfig::reveal());
        let a = g.watch().id();
        let b = g.watch().id();
        let c = g.watch().id();
        let mut tracer = Tracer::none();

        assert!(g.notify(&[], &mut tracer).is_empty());
        let fired = g.notify(&[seen(c, 0.2), seen(a, 0.0), seen(b, 1.0)], &mut tracer);
        assert_eq!(fired, [c, b], "sample order, non-intersecting skipped");
        assert_eq!(g.pending_count(), 1);
    }

    #[test]
    fn groups_are_independent() {
        let mut reveal = WatchGroup::new(GroupId::REVEAL, WatchConfig::reveal());
        let mut counters = WatchGroup::new(GroupId::COUNTER, WatchConfig::counter());
        let r = reveal.watch().id();
        let c = counters.watch().id();
        let mut tracer = Tracer::none();

        // Same slot index, different groups.
        assert_eq!(r.index(), c.index());
        assert!(counters.notify(&[seen(r, 1.0)], &mut tracer).is_empty());
        assert!(reveal.is_pending(r));
        assert_eq!(reveal.notify(&[seen(r, 0.2)], &mut tracer), [r]);
        assert!(counters.notify(&[seen(c, 0.0)], &mut tracer).is_empty());
        assert!(counters.is_pending(c));
    }

    #[test]
    fn cancel_only_pending() {
        let mut g = WatchGroup::new(GroupId::REVEAL, WatchConfig::reveal());
        let a = g.watch();
        let a_id = a.id();
        let b = g.watch();
        let b_id = b.id();
        let mut tracer = Tracer::none();

        assert!(g.cancel(a));
        assert_eq!(g.state(a_id), None);
        assert!(g.notify(&[seen(a_id, 1.0)], &mut tracer).is_empty());

        g.notify(&[seen(b_id, 1.0)], &mut tracer);
        assert!(!g.cancel(b), "already fired");
        assert_eq!(g.pending_count(), 0);
    }

    #[test]
    fn root_margin_css_order() {
        assert_eq!(WatchConfig::reveal().root_margin_css(), "0px 0px -50px 0px");
        assert_eq!(WatchConfig::counter().root_margin_css(), "0px 0px 0px 0px");
    }

    #[test]
    fn ratio_fully_inside_and_outside() {
        let inside = Rect::new(10.0, 10.0, 110.0, 110.0);
        let v = intersection_ratio(inside, VIEWPORT, Insets::ZERO);
        assert!(v.is_intersecting);
        assert!((v.ratio - 1.0).abs() < 1e-9);

        let below = Rect::new(0.0, 900.0, 100.0, 1000.0);
        let v = intersection_ratio(below, VIEWPORT, Insets::ZERO);
        assert!(!v.is_intersecting);
        assert!(v.ratio.abs() < 1e-9);
    }

    #[test]
    fn bottom_margin_delays_trigger() {
        // 100px tall element with its top 60px above the viewport bottom.
        let el = Rect::new(0.0, 740.0, 100.0, 840.0);
        let plain = intersection_ratio(el, VIEWPORT, Insets::ZERO);
        assert!((plain.ratio - 0.6).abs() < 1e-9);

        let cfg = WatchConfig::reveal();
        let shrunk = intersection_ratio(el, VIEWPORT, cfg.root_margin);
        assert!((shrunk.ratio - 0.1).abs() < 1e-9, "50px shaved off the bottom");
        assert!(cfg.triggers(shrunk.is_intersecting, shrunk.ratio));
    }

    #[test]
    fn edge_adjacent_counts_as_intersecting() {
        let el = Rect::new(0.0, 800.0, 100.0, 900.0);
        let v = intersection_ratio(el, VIEWPORT, Insets::ZERO);
        assert!(v.is_intersecting);
        assert!(v.ratio.abs() < 1e-9);
    }

    #[test]
    fn evaluate_skips_fired_and_applies_margin() {
        let mut g = WatchGroup::new(GroupId::REVEAL, WatchConfig::reveal());
        let a = g.watch().id();
        let b = g.watch().id();
        let mut tracer = Tracer::none();
        let rects = [
            (a, Rect::new(0.0, 100.0, 100.0, 200.0)),
            // Only the shaved-off strip is on screen.
            (b, Rect::new(0.0, 760.0, 100.0, 860.0)),
        ];
        assert_eq!(g.evaluate(VIEWPORT, rects, &mut tracer), [a]);

        let scrolled = Rect::new(0.0, 200.0, 1000.0, 1000.0);
        assert_eq!(g.evaluate(scrolled, rects, &mut tracer), [b]);
        assert!(g.evaluate(scrolled, rects, &mut tracer).is_empty());
    }
}
