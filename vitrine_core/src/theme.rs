// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme preference: persisted choice, system fallback, explicit override.
//!
//! The effective [`Theme`] comes from the [`PreferenceStore`] when the user has
//! ever chosen one, and from the system color-scheme signal otherwise. Once a
//! choice is persisted, system changes are ignored for as long as it stays in
//! the store.
//!
//! [`ThemeController`] owns the store and the [`ThemeSurface`] (the document
//! root in the browser) and keeps them in step: every applied theme is
//! immediately written to the surface, and explicit choices are persisted.

use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::trace::{ThemeEvent, ThemeSource, Tracer};

/// Storage key under which the explicit choice is persisted.
pub const THEME_KEY: &str = "theme";

/// Media query whose match state is the system dark-mode signal.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Root attribute that carries the active theme name for CSS.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// One of the two page color themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    /// Light background, dark text.
    #[default]
    Light,
    /// Dark background, light text.
    Dark,
}

impl Theme {
    /// Returns the persisted / attribute value for this theme.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a persisted value. Anything other than `"light"` or `"dark"` is
    /// treated as no value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Returns the other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Maps the system dark-mode signal to a theme.
    #[must_use]
    pub const fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

/// Synchronous string key-value storage.
///
/// Implementations must not fail: a backend that cannot read reports `None`,
/// and one that cannot write drops the value (or keeps it in memory).
pub trait PreferenceStore {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    fn set(&mut self, key: &str, value: &str);
}

/// Session-scoped [`PreferenceStore`] held in memory.
///
/// Used directly in tests and as the fallback when browser storage is
/// unavailable.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.into(), value.into());
    }
}

/// The presentation target of the active theme (the document root).
pub trait ThemeSurface {
    /// Makes `theme` visible to styling.
    fn apply_theme(&mut self, theme: Theme);
}

/// Keeps a [`ThemeSurface`] in step with the persisted preference and the
/// system color-scheme signal.
#[derive(Debug)]
pub struct ThemeController<S, F> {
    store: S,
    surface: F,
    current: Theme,
}

impl<S: PreferenceStore, F: ThemeSurface> ThemeController<S, F> {
    /// Creates a controller. Nothing is applied until [`init`](Self::init).
    pub fn new(store: S, surface: F) -> Self {
        Self {
            store,
            surface,
            current: Theme::Light,
        }
    }

    /// Returns the persisted explicit choice, if one exists and parses.
    #[must_use]
    pub fn stored(&self) -> Option<Theme> {
        self.store.get(THEME_KEY).as_deref().and_then(Theme::parse)
    }

    /// Returns the persisted theme, else the system signal.
    #[must_use]
    pub fn preferred_theme(&self, system_prefers_dark: bool) -> Theme {
        self.stored()
            .unwrap_or_else(|| Theme::from_system(system_prefers_dark))
    }

    /// Applies the preferred theme at page load.
    ///
    /// The initial theme is not persisted: an unset preference stays unset so
    /// later system changes keep flowing through.
    pub fn init(&mut self, system_prefers_dark: bool, tracer: &mut Tracer<'_>) -> Theme {
        let (theme, source) = match self.stored() {
            Some(theme) => (theme, ThemeSource::Stored),
            None => (Theme::from_system(system_prefers_dark), ThemeSource::System),
        };
        self.apply(theme, source, false, tracer);
        theme
    }

    /// Applies `theme` and persists it as an explicit choice.
    pub fn set_theme(&mut self, theme: Theme, tracer: &mut Tracer<'_>) {
        self.apply(theme, ThemeSource::User, true, tracer);
    }

    /// Switches to the other theme and persists the result.
    pub fn toggle(&mut self, tracer: &mut Tracer<'_>) -> Theme {
        let next = self.current.toggled();
        self.set_theme(next, tracer);
        next
    }

    /// Handles a system color-scheme change.
    ///
    /// Returns `true` if the active theme followed the system; `false` when a
    /// valid explicit choice is persisted and the change was ignored. A stored
    /// value that does not parse counts as no choice.
    pub fn on_system_change(&mut self, prefers_dark: bool, tracer: &mut Tracer<'_>) -> bool {
        if self.stored().is_some() {
            return false;
        }
        self.apply(
            Theme::from_system(prefers_dark),
            ThemeSource::System,
            false,
            tracer,
        );
        true
    }

    /// Returns the theme most recently applied to the surface.
    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Returns the backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the presentation surface.
    #[must_use]
    pub fn surface(&self) -> &F {
        &self.surface
    }

    fn apply(&mut self, theme: Theme, source: ThemeSource, persist: bool, tracer: &mut Tracer<'_>) {
        self.current = theme;
        self.surface.apply_theme(theme);
        if persist {
            self.store.set(THEME_KEY, theme.as_str());
        }
        tracer.theme(&ThemeEvent {
            theme,
            source,
            persisted: persist,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[derive(Debug, Default)]
    struct RecordingSurface {
        applied: Vec<Theme>,
    }

    impl ThemeSurface for RecordingSurface {
        fn apply_theme(&mut self, theme: Theme) {
            self.applied.push(theme);
        }
    }

    fn controller() -> ThemeController<MemoryStore, RecordingSurface> {
        ThemeController::new(MemoryStore::new(), RecordingSurface::default())
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("Dark"), None);
        assert_eq!(Theme::parse(""), None);
    }

    #[test]
    fn preferred_theme_falls_back_to_system() {
        let mut c = controller();
        assert_eq!(c.preferred_theme(true), Theme::Dark);
        assert_eq!(c.preferred_theme(false), Theme::Light);

        c.set_theme(Theme::Light, &mut Tracer::none());
        assert_eq!(c.preferred_theme(true), Theme::Light, "stored choice wins");
    }

    #[test]
    fn garbage_in_store_is_ignored() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "sepia");
        let mut c = ThemeController::new(store, RecordingSurface::default());
        assert_eq!(c.init(true, &mut Tracer::none()), Theme::Dark);
    }

    #[test]
    fn garbage_in_store_keeps_following_system() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "sepia");
        let mut c = ThemeController::new(store, RecordingSurface::default());
        let mut tracer = Tracer::none();
        assert_eq!(c.init(false, &mut tracer), Theme::Light);
        assert_eq!(c.stored(), None);

        assert!(c.on_system_change(true, &mut tracer), "no valid choice persisted");
        assert_eq!(c.current(), Theme::Dark);
        assert_eq!(c.surface().applied.last(), Some(&Theme::Dark));
    }

    #[test]
    fn toggle_twice_from_unset_light_system() {
        let mut c = controller();
        let mut tracer = Tracer::none();
        assert_eq!(c.init(false, &mut tracer), Theme::Light);
        assert_eq!(c.toggle(&mut tracer), Theme::Dark);
        assert_eq!(c.toggle(&mut tracer), Theme::Light);

        assert_eq!(
            c.surface().applied,
            [Theme::Light, Theme::Dark, Theme::Light],
            "surface sees every applied theme in order"
        );
        assert_eq!(c.store().get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn surface_matches_persisted_value_after_each_toggle() {
        let mut c = controller();
        let mut tracer = Tracer::none();
        c.init(true, &mut tracer);
        for _ in 0..5 {
            c.toggle(&mut tracer);
            let persisted = c.store().get(THEME_KEY);
            let last = c.surface().applied.last().copied();
            assert_eq!(persisted.as_deref(), last.map(Theme::as_str));
        }
    }

    #[test]
    fn system_changes_followed_until_explicit_choice() {
        let mut c = controller();
        let mut tracer = Tracer::none();
        c.init(false, &mut tracer);
        assert!(c.store().get(THEME_KEY).is_none(), "init does not persist");

        assert!(c.on_system_change(true, &mut tracer));
        assert_eq!(c.current(), Theme::Dark);
        assert!(c.on_system_change(false, &mut tracer));
        assert_eq!(c.current(), Theme::Light);

        c.toggle(&mut tracer);
        assert_eq!(c.current(), Theme::Dark);
        assert!(!c.on_system_change(false, &mut tracer));
        assert_eq!(c.current(), Theme::Dark, "explicit choice sticks");
    }

    #[test]
    fn stored_choice_applied_at_init() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "dark");
        let mut c = ThemeController::new(store, RecordingSurface::default());
        assert_eq!(c.init(false, &mut Tracer::none()), Theme::Dark);
        assert_eq!(c.surface().applied, [Theme::Dark]);
    }
}
