// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page configuration: the DOM contract plus every component's tuning.
//!
//! The page markup is an external collaborator. [`Selectors`] names how each
//! role is found and [`Classes`] names the presentation hooks the styling
//! reacts to. [`PageConfig::portfolio`] bundles both with the component
//! presets.

use crate::counter::CounterConfig;
use crate::form::SubmitConfig;
use crate::observe::WatchConfig;
use crate::polish::PreloaderConfig;
use crate::scroll::ScrollConfig;
use crate::typing::TypingConfig;

/// CSS selectors for each element role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selectors {
    /// Theme toggle control.
    pub theme_toggle: &'static str,
    /// Mobile navigation toggle.
    pub mobile_toggle: &'static str,
    /// Mobile navigation menu.
    pub nav_menu: &'static str,
    /// Navigation links (inside and outside the menu).
    pub nav_link: &'static str,
    /// Navbar that gets elevated on scroll.
    pub navbar: &'static str,
    /// Element whose height offsets anchor scrolling.
    pub navbar_height: &'static str,
    /// Scroll-to-top control.
    pub scroll_top: &'static str,
    /// Identified page sections.
    pub sections: &'static str,
    /// In-page anchors.
    pub anchors: &'static str,
    /// Anchors with an empty fragment.
    pub empty_anchors: &'static str,
    /// Contact form.
    pub contact_form: &'static str,
    /// Submit button inside the contact form.
    pub submit_button: &'static str,
    /// Hero title that gets the typing effect.
    pub typed_title: &'static str,
    /// Lazily loaded images.
    pub lazy_images: &'static str,
    /// Numeric stat elements.
    pub counters: &'static str,
    /// Optional preloader overlay.
    pub preloader: &'static str,
    /// Blocks that fade in when scrolled into view.
    pub reveal: &'static str,
}

/// Presentation classes toggled on page elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classes {
    /// Navbar elevated.
    pub elevated: &'static str,
    /// Scroll-to-top control shown.
    pub visible: &'static str,
    /// Active navigation link; also the open mobile toggle and menu.
    pub active: &'static str,
    /// Revealed content block.
    pub revealed: &'static str,
    /// Body after the window load event.
    pub loaded: &'static str,
}

/// Everything the page controller needs to know about the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageConfig {
    /// Element roles.
    pub selectors: Selectors,
    /// Presentation classes.
    pub classes: Classes,
    /// Scroll thresholds.
    pub scroll: ScrollConfig,
    /// Reveal trigger.
    pub reveal: WatchConfig,
    /// Counter trigger.
    pub counter_watch: WatchConfig,
    /// Counter timing.
    pub counter: CounterConfig,
    /// Typing timing.
    pub typing: TypingConfig,
    /// Submit affordance.
    pub submit: SubmitConfig,
    /// Preloader timing.
    pub preloader: PreloaderConfig,
}

impl PageConfig {
    /// The portfolio page.
    #[must_use]
    pub const fn portfolio() -> Self {
        Self {
            selectors: Selectors {
                theme_toggle: "#theme-toggle",
                mobile_toggle: "#mobile-toggle",
                nav_menu: "#nav-menu",
                nav_link: ".nav-link",
                navbar: "#navbar",
                navbar_height: ".navbar",
                scroll_top: "#scroll-top",
                sections: "section[id]",
                anchors: "a[href^=\"#\"]",
                empty_anchors: "a[href=\"#\"]",
                contact_form: ".contact-form",
                submit_button: "button[type=\"submit\"]",
                typed_title: ".gradient-text",
                lazy_images: "img[loading=\"lazy\"]",
                counters: ".stat-value",
                preloader: ".preloader",
                reveal: ".section-header, .hero-content, .about-content, .skill-category, \
                         .timeline-item, .experience-card, .project-card, .blog-card, \
                         .contact-card, .video-card",
            },
            classes: Classes {
                elevated: "scrolled",
                visible: "visible",
                active: "active",
                revealed: "fade-in",
                loaded: "loaded",
            },
            scroll: ScrollConfig::portfolio(),
            reveal: WatchConfig::reveal(),
            counter_watch: WatchConfig::counter(),
            counter: CounterConfig::portfolio(),
            typing: TypingConfig::portfolio(),
            submit: SubmitConfig::portfolio(),
            preloader: PreloaderConfig::portfolio(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::portfolio()
    }
}
