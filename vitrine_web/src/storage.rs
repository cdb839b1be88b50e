// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `localStorage`-backed preference store.

use alloc::string::String;

use vitrine_core::theme::{MemoryStore, PreferenceStore};
use web_sys::Storage;

/// [`PreferenceStore`] over `window.localStorage`.
///
/// Storage can be missing (sandboxed iframes, some private modes) or throw on
/// access. Reads that fail count as "no value"; writes that fail land in an
/// embedded [`MemoryStore`] so the choice still holds for the session.
pub struct BrowserStore {
    local: Option<Storage>,
    fallback: MemoryStore,
}

impl core::fmt::Debug for BrowserStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BrowserStore")
            .field("local", &self.local.is_some())
            .field("fallback", &self.fallback)
            .finish()
    }
}

impl BrowserStore {
    /// Opens the window's local storage, or a memory-only store if there is
    /// none.
    #[must_use]
    pub fn open() -> Self {
        let local = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self {
            local,
            fallback: MemoryStore::new(),
        }
    }

    /// Returns `true` if values reach the browser's storage.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.local.is_some()
    }
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        // A session-only write shadows whatever storage held at load.
        if let Some(value) = self.fallback.get(key) {
            return Some(value);
        }
        self.local.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        let written = self
            .local
            .as_ref()
            .is_some_and(|s| s.set_item(key, value).is_ok());
        if !written || self.fallback.get(key).is_some() {
            self.fallback.set(key, value);
        }
    }
}
