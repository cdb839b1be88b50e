// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typewriter effect for the hero title.
//!
//! The title text is captured and cleared, then re-typed one character at a
//! time: the first character appears after `start_delay`, each following one
//! `char_interval` later.

use alloc::string::String;

use crate::time::Duration;

/// Timing of the typing effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingConfig {
    /// Delay before the first character.
    pub start_delay: Duration,
    /// Delay between characters.
    pub char_interval: Duration,
}

impl TypingConfig {
    /// Defaults for the portfolio page.
    #[must_use]
    pub const fn portfolio() -> Self {
        Self {
            start_delay: Duration::from_millis(500),
            char_interval: Duration::from_millis(100),
        }
    }
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self::portfolio()
    }
}

/// Yields successively longer prefixes of the captured text.
#[derive(Clone, Debug)]
pub struct TypingEffect {
    text: String,
    /// Byte offset of the end of the typed prefix.
    cursor: usize,
}

impl TypingEffect {
    /// Captures `text` for re-typing.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cursor: 0,
        }
    }

    /// Returns the full captured text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns what is typed so far.
    #[must_use]
    pub fn typed(&self) -> &str {
        &self.text[..self.cursor]
    }

    /// Returns `true` once every character is typed.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.cursor >= self.text.len()
    }

    /// Types the next character and returns the new prefix, or `None` when
    /// the text is complete.
    pub fn type_next(&mut self) -> Option<&str> {
        let next = self.text[self.cursor..].chars().next()?;
        self.cursor += next.len_utf8();
        Some(self.typed())
    }

    /// Returns the delay before the next character, or `None` when done.
    #[must_use]
    pub fn next_delay(&self, config: &TypingConfig) -> Option<Duration> {
        if self.is_done() {
            None
        } else if self.cursor == 0 {
            Some(config.start_delay)
        } else {
            Some(config.char_interval)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString as _;
    use alloc::vec::Vec;

    #[test]
    fn types_one_char_at_a_time() {
        let mut t = TypingEffect::new("Hi!");
        let mut seen = Vec::new();
        while let Some(prefix) = t.type_next() {
            seen.push(prefix.to_string());
        }
        assert_eq!(seen, ["H", "Hi", "Hi!"]);
        assert!(t.is_done());
        assert_eq!(t.type_next(), None);
    }

    #[test]
    fn multibyte_characters_stay_whole() {
        let mut t = TypingEffect::new("né✓");
        assert_eq!(t.type_next(), Some("n"));
        assert_eq!(t.type_next(), Some("né"));
        assert_eq!(t.type_next(), Some("né✓"));
    }

    #[test]
    fn delays_follow_schedule() {
        let cfg = TypingConfig::portfolio();
        let mut t = TypingEffect::new("ab");
        assert_eq!(t.next_delay(&cfg), Some(Duration::from_millis(500)));
        t.type_next();
        assert_eq!(t.next_delay(&cfg), Some(Duration::from_millis(100)));
        t.type_next();
        assert_eq!(t.next_delay(&cfg), None);
    }

    #[test]
    fn empty_text_is_done() {
        let t = TypingEffect::new("");
        assert!(t.is_done());
        assert_eq!(t.next_delay(&TypingConfig::portfolio()), None);
    }
}
