// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-driven navbar, scroll-to-top and active-section decisions.
//!
//! [`ScrollTracker::on_scroll`] turns a vertical offset into a
//! [`ScrollDecision`]:
//!
//! - **Elevation**: the navbar is elevated iff `offset > elevate_after`.
//! - **Scroll-to-top**: the control is visible iff `offset > scroll_top_after`.
//! - **Active link**: the probe line `offset + probe_offset` selects the
//!   sections whose half-open range `[top, top + height)` contains it. The last
//!   such section in document order wins, and the link whose `href` is
//!   `#<section id>` becomes active. When no section contains the probe the
//!   previous choice is kept, so the highlight is sticky above the first
//!   section and in gaps between sections.
//!
//! All three decisions are idempotent: applying the same decision twice leaves
//! the page unchanged, which lets the backend skip throttling entirely or
//! coalesce bursts with [`ScrollCoalescer`].

use alloc::string::String;
use alloc::vec::Vec;

use crate::trace::{ActiveLinkEvent, Tracer};

/// Thresholds for the scroll decisions, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollConfig {
    /// Offset above which the navbar is elevated.
    pub elevate_after: f64,
    /// Offset above which the scroll-to-top control is shown.
    pub scroll_top_after: f64,
    /// Distance below the viewport top of the line that picks the active
    /// section.
    pub probe_offset: f64,
}

impl ScrollConfig {
    /// Defaults for the portfolio page.
    #[must_use]
    pub const fn portfolio() -> Self {
        Self {
            elevate_after: 10.0,
            scroll_top_after: 300.0,
            probe_offset: 100.0,
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self::portfolio()
    }
}

/// Layout of one identified page section.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    /// The section's `id` attribute.
    pub id: String,
    /// Offset of the section's top edge from the document top.
    pub top: f64,
    /// Rendered height.
    pub height: f64,
}

impl Section {
    /// Creates a section record.
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Returns `true` if `y` lies in `[top, top + height)`.
    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// The outcome of one scroll notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollDecision {
    /// The sampled offset.
    pub offset: f64,
    /// Whether the navbar carries its elevation class.
    pub elevated: bool,
    /// Whether the scroll-to-top control carries its visibility class.
    pub scroll_top_visible: bool,
    /// The single link that carries the active class, if any.
    pub active_link: Option<usize>,
}

/// Applies [`ScrollDecision`]s to the page.
///
/// Implementations must be idempotent: the tracker hands over the full
/// desired state each time, not a diff.
pub trait ScrollPresenter {
    /// Brings the navbar, scroll-to-top control and navigation links in line
    /// with `decision`.
    fn apply(&mut self, decision: &ScrollDecision);
}

/// Derives scroll decisions and remembers the sticky active link.
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    config: ScrollConfig,
    /// `href` attribute of every navigation link, in document order.
    links: Vec<String>,
    active: Option<usize>,
}

impl ScrollTracker {
    /// Creates a tracker for the given navigation link targets.
    pub fn new<I, S>(config: ScrollConfig, link_hrefs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            config,
            links: link_hrefs.into_iter().map(Into::into).collect(),
            active: None,
        }
    }

    /// Returns the thresholds in use.
    #[must_use]
    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Returns the currently active link, if any.
    #[must_use]
    pub fn active_link(&self) -> Option<usize> {
        self.active
    }

    /// Returns the index of the first link targeting `section_id`.
    #[must_use]
    pub fn link_for(&self, section_id: &str) -> Option<usize> {
        self.links
            .iter()
            .position(|href| href.strip_prefix('#') == Some(section_id))
    }

    /// Returns the section selected by the probe line at `offset`: the last
    /// one in document order whose range contains it.
    #[must_use]
    pub fn current_section<'s>(&self, offset: f64, sections: &'s [Section]) -> Option<&'s Section> {
        let probe = offset + self.config.probe_offset;
        sections.iter().rev().find(|s| s.contains(probe))
    }

    /// Handles one scroll notification.
    ///
    /// `sections` must be in document order and reflect the current layout;
    /// the tracker re-scans every section on each call.
    pub fn on_scroll(
        &mut self,
        offset: f64,
        sections: &[Section],
        tracer: &mut Tracer<'_>,
    ) -> ScrollDecision {
        if let Some(section) = self.current_section(offset, sections) {
            let next = self.link_for(&section.id);
            if next != self.active {
                if let Some(link) = next {
                    tracer.active_link(&ActiveLinkEvent {
                        link,
                        previous: self.active,
                        offset,
                    });
                }
                self.active = next;
            }
        }

        ScrollDecision {
            offset,
            elevated: offset > self.config.elevate_after,
            scroll_top_visible: offset > self.config.scroll_top_after,
            active_link: self.active,
        }
    }
}

/// Folds bursts of scroll notifications into one evaluation per frame.
///
/// The first [`push`](Self::push) of a burst asks the caller to schedule a
/// frame; later pushes only update the pending offset. The frame callback
/// [`take`](Self::take)s the latest offset and re-arms the coalescer.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollCoalescer {
    pending: Option<f64>,
}

impl ScrollCoalescer {
    /// Creates an idle coalescer.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Records a scroll offset. Returns `true` if a frame must be scheduled.
    pub fn push(&mut self, offset: f64) -> bool {
        self.pending.replace(offset).is_none()
    }

    /// Returns the latest offset of the burst, if one is pending.
    pub fn take(&mut self) -> Option<f64> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn page() -> Vec<Section> {
        vec![
            Section::new("home", 0.0, 600.0),
            Section::new("about", 600.0, 800.0),
            Section::new("projects", 1400.0, 1000.0),
            // Gap between 2400 and 2600.
            Section::new("contact", 2600.0, 500.0),
        ]
    }

    fn tracker() -> ScrollTracker {
        ScrollTracker::new(
            ScrollConfig::portfolio(),
            ["#home", "#about", "#projects", "#blog", "#contact"],
        )
    }

    #[test]
    fn initial_load_at_top() {
        let mut t = tracker();
        let d = t.on_scroll(0.0, &page(), &mut Tracer::none());
        assert!(!d.elevated);
        assert!(!d.scroll_top_visible);
        assert_eq!(d.active_link, Some(0), "probe at 100 sits in #home");
    }

    #[test]
    fn elevation_and_scroll_top_thresholds() {
        let mut t = tracker();
        let sections = page();
        let mut tracer = Tracer::none();
        for (offset, elevated, visible) in [
            (10.0, false, false),
            (10.5, true, false),
            (300.0, true, false),
            (301.0, true, true),
            (0.0, false, false),
        ] {
            let d = t.on_scroll(offset, &sections, &mut tracer);
            assert_eq!(d.elevated, elevated, "elevation at {offset}");
            assert_eq!(d.scroll_top_visible, visible, "scroll-top at {offset}");
        }
    }

    #[test]
    fn section_ranges_are_half_open() {
        let mut t = tracker();
        let sections = page();
        let mut tracer = Tracer::none();
        // Probe exactly at 600 belongs to #about, not #home.
        assert_eq!(t.on_scroll(500.0, &sections, &mut tracer).active_link, Some(1));
        assert_eq!(t.on_scroll(499.0, &sections, &mut tracer).active_link, Some(0));
        assert_eq!(t.on_scroll(1300.0, &sections, &mut tracer).active_link, Some(2));
    }

    #[test]
    fn gaps_keep_previous_link() {
        let mut t = tracker();
        let sections = page();
        let mut tracer = Tracer::none();
        t.on_scroll(2000.0, &sections, &mut tracer);
        assert_eq!(t.active_link(), Some(2));
        // Probe at 2450 falls in the gap.
        assert_eq!(t.on_scroll(2350.0, &sections, &mut tracer).active_link, Some(2));
        assert_eq!(t.on_scroll(2550.0, &sections, &mut tracer).active_link, Some(4));
    }

    #[test]
    fn nothing_active_above_first_section() {
        let sections = vec![Section::new("about", 400.0, 400.0)];
        let mut t = ScrollTracker::new(ScrollConfig::portfolio(), ["#about"]);
        let d = t.on_scroll(0.0, &sections, &mut Tracer::none());
        assert_eq!(d.active_link, None);
    }

    #[test]
    fn last_containing_section_wins() {
        let sections = vec![
            Section::new("outer", 0.0, 2000.0),
            Section::new("inner", 500.0, 200.0),
        ];
        let mut t = ScrollTracker::new(ScrollConfig::portfolio(), ["#outer", "#inner"]);
        let mut tracer = Tracer::none();
        assert_eq!(t.on_scroll(450.0, &sections, &mut tracer).active_link, Some(1));
        assert_eq!(t.on_scroll(700.0, &sections, &mut tracer).active_link, Some(0));
    }

    #[test]
    fn section_without_link_clears_highlight() {
        let sections = vec![
            Section::new("home", 0.0, 500.0),
            Section::new("unlisted", 500.0, 500.0),
        ];
        let mut t = ScrollTracker::new(ScrollConfig::portfolio(), ["#home"]);
        let mut tracer = Tracer::none();
        assert_eq!(t.on_scroll(0.0, &sections, &mut tracer).active_link, Some(0));
        assert_eq!(t.on_scroll(600.0, &sections, &mut tracer).active_link, None);
    }

    #[test]
    fn links_match_by_fragment_text() {
        let t = ScrollTracker::new(
            ScrollConfig::portfolio(),
            ["about", "/#about", "#about", "#"],
        );
        assert_eq!(t.link_for("about"), Some(2));
        assert_eq!(t.link_for(""), Some(3));
        assert_eq!(t.link_for("blog"), None);
    }

    #[test]
    fn at_most_one_link_active() {
        let mut t = tracker();
        let sections = page();
        let mut tracer = Tracer::none();
        let mut offset = 0.0;
        while offset < 3200.0 {
            let d = t.on_scroll(offset, &sections, &mut tracer);
            if let Some(link) = d.active_link {
                let probe = offset + 100.0;
                let expected = sections.iter().rev().find(|s| s.contains(probe));
                if let Some(section) = expected {
                    assert_eq!(t.link_for(&section.id), Some(link));
                }
            }
            offset += 37.0;
        }
    }

    #[test]
    fn coalescer_schedules_once_per_burst() {
        let mut c = ScrollCoalescer::new();
        assert!(c.push(10.0));
        assert!(!c.push(20.0));
        assert!(!c.push(35.0));
        assert_eq!(c.take(), Some(35.0));
        assert_eq!(c.take(), None);
        assert!(c.push(40.0), "re-armed after take");
    }
}
