// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page-load niceties: lazy-image fallback, preloader removal, console
//! branding and load metrics.

use crate::time::Duration;

/// Polyfill loaded when the browser has no native lazy image loading.
pub const LAZY_POLYFILL_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/lazysizes/5.3.2/lazysizes.min.js";

/// How lazily loaded images are handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LazyImageStrategy {
    /// The browser honors `loading="lazy"`; sources are re-assigned so the
    /// native loader picks them up.
    Native,
    /// Inject the polyfill script from this URL.
    Polyfill(&'static str),
}

impl LazyImageStrategy {
    /// Chooses a strategy from the native-support probe.
    #[must_use]
    pub const fn detect(native_supported: bool) -> Self {
        if native_supported {
            Self::Native
        } else {
            Self::Polyfill(LAZY_POLYFILL_URL)
        }
    }
}

/// Preloader fade-out timing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreloaderConfig {
    /// Delay between starting the fade and removing the element from layout.
    pub hide_after: Duration,
}

impl PreloaderConfig {
    /// Defaults for the portfolio page.
    #[must_use]
    pub const fn portfolio() -> Self {
        Self {
            hide_after: Duration::from_millis(500),
        }
    }
}

impl Default for PreloaderConfig {
    fn default() -> Self {
        Self::portfolio()
    }
}

/// Styled console welcome message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Banner {
    /// Format string with two `%c` style slots.
    pub message: &'static str,
    /// Style of the headline.
    pub headline_style: &'static str,
    /// Style of the body.
    pub body_style: &'static str,
}

/// The portfolio's console greeting.
pub const BANNER: Banner = Banner {
    message: "%c\u{1F468}\u{200D}\u{1F4BB} Welcome to Jainish Shah's Portfolio! %c\n\n\
              Interested in the code? Check it out on GitHub:\n\
              https://github.com/jainishshah17",
    headline_style: "font-size: 16px; font-weight: bold; color: #6366f1;",
    body_style: "font-size: 12px; color: #6c757d;",
};

/// Raw navigation timing marks, in milliseconds since the epoch.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavigationMarks {
    /// `navigationStart`.
    pub navigation_start: f64,
    /// `requestStart`.
    pub request_start: f64,
    /// `responseEnd`.
    pub response_end: f64,
    /// `domLoading`.
    pub dom_loading: f64,
    /// `domComplete`.
    pub dom_complete: f64,
    /// `loadEventEnd`.
    pub load_event_end: f64,
}

/// Load metrics derived from [`NavigationMarks`], in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadTimings {
    /// Navigation start to end of the load event.
    pub page_load: f64,
    /// Request start to response end.
    pub connect: f64,
    /// DOM loading to DOM complete.
    pub render: f64,
}

impl LoadTimings {
    /// Derives the metrics.
    ///
    /// Marks that have not happened yet read as zero in the browser, so the
    /// differences can be negative early in the load; they are reported
    /// unchanged.
    #[must_use]
    pub fn from_marks(m: &NavigationMarks) -> Self {
        Self {
            page_load: m.load_event_end - m.navigation_start,
            connect: m.response_end - m.request_start,
            render: m.dom_complete - m.dom_loading,
        }
    }

    /// Returns `(label, value)` rows in display order.
    #[must_use]
    pub fn rows(&self) -> [(&'static str, f64); 3] {
        [
            ("Page Load Time", self.page_load),
            ("Connect Time", self.connect),
            ("Render Time", self.render),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_follows_probe() {
        assert_eq!(LazyImageStrategy::detect(true), LazyImageStrategy::Native);
        assert_eq!(
            LazyImageStrategy::detect(false),
            LazyImageStrategy::Polyfill(LAZY_POLYFILL_URL)
        );
    }

    #[test]
    fn timings_from_marks() {
        let marks = NavigationMarks {
            navigation_start: 1000.0,
            request_start: 1010.0,
            response_end: 1060.0,
            dom_loading: 1070.0,
            dom_complete: 1400.0,
            load_event_end: 1450.0,
        };
        let t = LoadTimings::from_marks(&marks);
        assert_eq!(t.rows()[0], ("Page Load Time", 450.0));
        assert_eq!(t.rows()[1], ("Connect Time", 50.0));
        assert_eq!(t.rows()[2], ("Render Time", 330.0));
    }

    #[test]
    fn banner_has_two_style_slots() {
        assert_eq!(BANNER.message.matches("%c").count(), 2);
    }
}
