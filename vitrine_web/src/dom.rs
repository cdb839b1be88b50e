// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM queries, measurements, and the presenters behind the core seams.
//!
//! Presenters only toggle classes and attributes on elements they were handed
//! at construction. Every write is a leaf operation whose failure is ignored:
//! the page simply keeps its previous look.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;
use vitrine_core::config::Classes;
use vitrine_core::nav::NavPresenter;
use vitrine_core::scroll::{ScrollDecision, ScrollPresenter, Section};
use vitrine_core::theme::{THEME_ATTRIBUTE, Theme, ThemeSurface};
use wasm_bindgen::JsCast as _;
use web_sys::{
    Document, Element, HtmlElement, NodeList, ScrollBehavior, ScrollToOptions, Window,
};

/// Returns the first element matching `selector`, or `None` if there is none
/// or the selector is invalid.
#[must_use]
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// Returns every element matching `selector` in document order.
#[must_use]
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

/// Returns every descendant of `root` matching `selector` in document order.
#[must_use]
pub fn query_all_within(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Adds or removes `class` so that its presence equals `on`.
pub fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

/// Returns the window's vertical scroll offset.
#[must_use]
pub fn scroll_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Smooth-scrolls the window to the document offset `top`.
pub fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Returns the element's layout offset from its offset parent, or `None` for
/// non-HTML elements.
#[must_use]
pub fn offset_top(el: &Element) -> Option<f64> {
    el.dyn_ref::<HtmlElement>()
        .map(|h| f64::from(h.offset_top()))
}

/// Returns the rendered height of the element, or zero.
#[must_use]
pub fn offset_height(el: &Element) -> f64 {
    el.dyn_ref::<HtmlElement>()
        .map_or(0.0, |h| f64::from(h.offset_height()))
}

/// Reads the current layout of identified sections.
///
/// Elements without an `id` are skipped.
#[must_use]
pub fn measure_sections(elements: &[Element]) -> Vec<Section> {
    elements
        .iter()
        .filter_map(|el| {
            let id = el.id();
            if id.is_empty() {
                return None;
            }
            let top = offset_top(el)?;
            Some(Section::new(id, top, offset_height(el)))
        })
        .collect()
}

/// Returns the element's border box in viewport coordinates.
#[must_use]
pub fn client_rect(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.right(), r.bottom())
}

/// Returns the viewport in its own coordinates.
#[must_use]
pub fn viewport_rect(window: &Window) -> Rect {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Rect::new(0.0, 0.0, width, height)
}

/// Returns the `href` attribute of each element (empty when missing).
#[must_use]
pub fn hrefs(elements: &[Element]) -> Vec<String> {
    elements
        .iter()
        .map(|el| el.get_attribute("href").unwrap_or_default())
        .collect()
}

/// Applies [`ScrollDecision`]s to the navbar, scroll-to-top control, and
/// navigation links.
pub struct ClassScrollPresenter {
    navbar: Option<Element>,
    scroll_top: Option<Element>,
    links: Vec<Element>,
    classes: Classes,
}

impl core::fmt::Debug for ClassScrollPresenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ClassScrollPresenter")
            .field("navbar", &self.navbar.is_some())
            .field("scroll_top", &self.scroll_top.is_some())
            .field("links", &self.links.len())
            .field("classes", &self.classes)
            .finish()
    }
}

impl ClassScrollPresenter {
    /// Creates a presenter. `links` must be in the same order as the hrefs
    /// given to the tracker.
    #[must_use]
    pub fn new(
        navbar: Option<Element>,
        scroll_top: Option<Element>,
        links: Vec<Element>,
        classes: Classes,
    ) -> Self {
        Self {
            navbar,
            scroll_top,
            links,
            classes,
        }
    }
}

impl ScrollPresenter for ClassScrollPresenter {
    fn apply(&mut self, decision: &ScrollDecision) {
        if let Some(navbar) = &self.navbar {
            set_class(navbar, self.classes.elevated, decision.elevated);
        }
        if let Some(button) = &self.scroll_top {
            set_class(button, self.classes.visible, decision.scroll_top_visible);
        }
        for (i, link) in self.links.iter().enumerate() {
            set_class(link, self.classes.active, decision.active_link == Some(i));
        }
    }
}

/// Marks the mobile toggle and menu as open or closed.
pub struct ClassNavPresenter {
    toggle: Element,
    menu: Element,
    class: &'static str,
}

impl core::fmt::Debug for ClassNavPresenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ClassNavPresenter")
            .field("class", &self.class)
            .finish_non_exhaustive()
    }
}

impl ClassNavPresenter {
    /// Creates a presenter toggling `class` on both elements.
    #[must_use]
    pub fn new(toggle: Element, menu: Element, class: &'static str) -> Self {
        Self {
            toggle,
            menu,
            class,
        }
    }

    /// Returns the toggle control.
    #[must_use]
    pub fn toggle(&self) -> &Element {
        &self.toggle
    }

    /// Returns the menu.
    #[must_use]
    pub fn menu(&self) -> &Element {
        &self.menu
    }
}

impl NavPresenter for ClassNavPresenter {
    fn set_open(&mut self, open: bool) {
        set_class(&self.toggle, self.class, open);
        set_class(&self.menu, self.class, open);
    }
}

/// Writes the theme name to the document root's `data-theme` attribute.
pub struct RootThemeSurface {
    root: Element,
}

impl core::fmt::Debug for RootThemeSurface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RootThemeSurface")
            .field("theme", &self.root.get_attribute(THEME_ATTRIBUTE))
            .finish()
    }
}

impl RootThemeSurface {
    /// Wraps the document's root element.
    #[must_use]
    pub fn new(root: Element) -> Self {
        Self { root }
    }
}

impl ThemeSurface for RootThemeSurface {
    fn apply_theme(&mut self, theme: Theme) {
        let _ = self.root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
    }
}
