// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mobile navigation menu and in-page anchor scrolling.

use crate::trace::{NavAction, NavEvent, Tracer};

/// Anchors that always scroll back to the top of the page.
pub const TOP_ANCHORS: [&str; 2] = ["#", "#home-content"];

/// Applies the mobile menu's open state to the page.
pub trait NavPresenter {
    /// Shows or hides the menu (and marks its toggle).
    fn set_open(&mut self, open: bool);
}

/// Where a click on the page landed, relative to the mobile menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClickTarget {
    /// On the toggle control or inside it.
    Toggle,
    /// Inside the menu.
    Menu,
    /// Anywhere else.
    Outside,
}

/// Open/closed state of the mobile navigation menu.
#[derive(Debug)]
pub struct MobileNav<P> {
    presenter: P,
    open: bool,
}

impl<P: NavPresenter> MobileNav<P> {
    /// Creates a closed menu.
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            open: false,
        }
    }

    /// Returns `true` while the menu is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the presenter.
    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Flips the menu (toggle control click).
    pub fn toggle(&mut self, tracer: &mut Tracer<'_>) -> bool {
        self.set(!self.open, tracer);
        self.open
    }

    /// Closes the menu (navigation link click).
    pub fn close(&mut self, tracer: &mut Tracer<'_>) {
        self.set(false, tracer);
    }

    /// Handles a click anywhere in the document: clicks outside both the
    /// toggle and the menu close it.
    pub fn on_document_click(&mut self, target: ClickTarget, tracer: &mut Tracer<'_>) {
        if target == ClickTarget::Outside {
            self.close(tracer);
        }
    }

    fn set(&mut self, open: bool, tracer: &mut Tracer<'_>) {
        // Closing an already closed menu still re-applies the classes.
        self.presenter.set_open(open);
        if open != self.open {
            tracer.nav(&NavEvent {
                action: if open {
                    NavAction::Opened
                } else {
                    NavAction::Closed
                },
            });
        }
        self.open = open;
    }
}

/// What a click on an in-page anchor should do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnchorAction {
    /// Cancel navigation and smooth-scroll to this document offset.
    ScrollTo(f64),
    /// Leave the click to the browser.
    Native,
}

/// Resolves a click on an `href="#…"` anchor.
///
/// `offset_of` returns the document offset of the element with the given id,
/// or `None` if it does not exist. The target is scrolled to just below the
/// fixed navbar of height `navbar_height`.
pub fn resolve_anchor<F>(href: &str, navbar_height: f64, offset_of: F) -> AnchorAction
where
    F: FnOnce(&str) -> Option<f64>,
{
    if TOP_ANCHORS.contains(&href) {
        return AnchorAction::ScrollTo(0.0);
    }
    let Some(id) = href.strip_prefix('#') else {
        return AnchorAction::Native;
    };
    match offset_of(id) {
        Some(top) => AnchorAction::ScrollTo(top - navbar_height),
        None => AnchorAction::Native,
    }
}
