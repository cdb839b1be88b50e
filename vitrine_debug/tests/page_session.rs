// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives every page component through a simulated visit and checks the
//! journal it leaves behind.

use vitrine_core::config::PageConfig;
use vitrine_core::counter::Counter;
use vitrine_core::nav::{ClickTarget, MobileNav, NavPresenter};
use vitrine_core::observe::{GroupId, IntersectionSample, WatchGroup, WatchId};
use vitrine_core::scroll::{ScrollCoalescer, ScrollDecision, ScrollPresenter, ScrollTracker, Section};
use vitrine_core::theme::{
    MemoryStore, PreferenceStore as _, THEME_KEY, Theme, ThemeController, ThemeSurface,
};
use vitrine_core::trace::Tracer;
use vitrine_debug::journal::{JournalSink, parse};

#[derive(Debug, Default)]
struct Root {
    data_theme: Option<&'static str>,
}

impl ThemeSurface for Root {
    fn apply_theme(&mut self, theme: Theme) {
        self.data_theme = Some(theme.as_str());
    }
}

#[derive(Debug, Default)]
struct Chrome {
    last: Option<ScrollDecision>,
}

impl ScrollPresenter for Chrome {
    fn apply(&mut self, decision: &ScrollDecision) {
        self.last = Some(*decision);
    }
}

#[derive(Debug, Default)]
struct Menu {
    open: bool,
}

impl NavPresenter for Menu {
    fn set_open(&mut self, open: bool) {
        self.open = open;
    }
}

fn sections() -> Vec<Section> {
    vec![
        Section::new("home", 0.0, 700.0),
        Section::new("about", 700.0, 900.0),
        Section::new("projects", 1600.0, 1200.0),
        Section::new("contact", 2800.0, 600.0),
    ]
}

fn seen(id: WatchId, ratio: f64) -> IntersectionSample {
    IntersectionSample {
        id,
        is_intersecting: ratio > 0.0,
        ratio,
    }
}

#[test]
fn visit_produces_expected_journal() {
    let config = PageConfig::portfolio();
    let mut journal = JournalSink::new(Vec::new());
    {
        let mut tracer = Tracer::new(&mut journal);

        // Page load with a light system scheme and no stored choice.
        let mut theme = ThemeController::new(MemoryStore::new(), Root::default());
        assert_eq!(theme.init(false, &mut tracer), Theme::Light);
        assert_eq!(theme.surface().data_theme, Some("light"));

        let mut tracker = ScrollTracker::new(
            config.scroll,
            ["#home", "#about", "#projects", "#contact"],
        );
        let mut chrome = Chrome::default();
        let decision = tracker.on_scroll(0.0, &sections(), &mut tracer);
        chrome.apply(&decision);
        let initial = chrome.last.unwrap();
        assert_eq!(initial.active_link, Some(0));
        assert!(!initial.elevated);
        assert!(!initial.scroll_top_visible);

        let mut reveal = WatchGroup::new(GroupId::REVEAL, config.reveal);
        let blocks: Vec<_> = (0..3).map(|_| reveal.watch().id()).collect();
        let mut stats = WatchGroup::new(GroupId::COUNTER, config.counter_watch);
        let stat = stats.watch().id();
        let mut counter = Counter::from_text("150+", config.counter).unwrap();

        // The visitor opens the mobile menu and picks a link.
        let mut nav = MobileNav::new(Menu::default());
        nav.toggle(&mut tracer);
        nav.on_document_click(ClickTarget::Menu, &mut tracer);
        assert!(nav.presenter().open);
        nav.close(&mut tracer);
        assert!(!nav.presenter().open);

        // A burst of scroll events folds into one evaluation.
        let mut coalescer = ScrollCoalescer::new();
        assert!(coalescer.push(500.0));
        assert!(!coalescer.push(650.0));
        assert!(!coalescer.push(720.0));
        let offset = coalescer.take().unwrap();
        chrome.apply(&tracker.on_scroll(offset, &sections(), &mut tracer));
        let scrolled = chrome.last.unwrap();
        assert_eq!(scrolled.active_link, Some(1));
        assert!(scrolled.elevated);
        assert!(scrolled.scroll_top_visible);

        // Two blocks and the stat come into view.
        let fired = reveal.notify(&[seen(blocks[0], 0.4), seen(blocks[1], 0.0)], &mut tracer);
        assert_eq!(fired, [blocks[0]]);
        let fired = reveal.notify(&[seen(blocks[1], 0.3), seen(blocks[0], 1.0)], &mut tracer);
        assert_eq!(fired, [blocks[1]]);

        assert!(stats.notify(&[seen(stat, 0.0)], &mut tracer).is_empty());
        assert_eq!(stats.notify(&[seen(stat, 0.6)], &mut tracer), [stat]);
        let mut frame = counter.start(&mut tracer).unwrap();
        while !frame.finished {
            frame = counter.advance(&mut tracer).unwrap();
        }
        assert_eq!(frame.text(counter.suffix()), "150+");
        // Scrolling away and back does not restart the counter.
        assert!(stats.notify(&[seen(stat, 1.0)], &mut tracer).is_empty());
        assert!(counter.start(&mut tracer).is_none());

        // Explicit dark choice beats later system changes.
        theme.toggle(&mut tracer);
        assert!(!theme.on_system_change(false, &mut tracer));
        assert_eq!(theme.surface().data_theme, Some("dark"));
        assert_eq!(theme.store().get(THEME_KEY).as_deref(), Some("dark"));
    }

    let text = String::from_utf8(journal.into_inner()).unwrap();
    let entries = parse(&text).unwrap();
    let kinds: Vec<&str> = entries
        .iter()
        .map(|e| e["kind"].as_str().unwrap())
        .collect();
    assert_eq!(
        kinds,
        [
            "theme",
            "active_link",
            "nav",
            "nav",
            "active_link",
            "reveal",
            "reveal",
            "reveal",
            "counter",
            "counter",
            "theme",
        ]
    );

    assert_eq!(entries[0]["source"], "System");
    assert_eq!(entries[0]["persisted"], false);
    assert_eq!(entries[4]["previous"], 0);
    assert_eq!(entries[4]["link"], 1);
    assert_eq!(entries[6]["remaining"], 1);
    assert_eq!(entries[7]["group"], 1, "counter group fires separately");
    assert_eq!(entries[8]["phase"], "Running");
    assert_eq!(entries[9]["phase"], "Finished");
    assert_eq!(entries[10]["theme"], "dark");
    assert_eq!(entries[10]["persisted"], true);
}
