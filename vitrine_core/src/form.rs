// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contact-form submit button affordance.
//!
//! Submission itself belongs to an external form service. On submit the button
//! only switches to a busy label and is disabled; after a fixed window it is
//! restored, whatever happened to the request.

use crate::time::Duration;

/// Labels and timing of the submit affordance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitConfig {
    /// Label while the form is being sent.
    pub busy_label: &'static str,
    /// Label restored afterwards.
    pub idle_label: &'static str,
    /// How long the button stays busy.
    pub reset_after: Duration,
}

impl SubmitConfig {
    /// Defaults for the portfolio page.
    #[must_use]
    pub const fn portfolio() -> Self {
        Self {
            busy_label: "Sending...",
            idle_label: "Send Message",
            reset_after: Duration::from_millis(3000),
        }
    }
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self::portfolio()
    }
}

/// Desired state of the submit button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonState {
    /// Button text.
    pub label: &'static str,
    /// Whether the button is disabled.
    pub disabled: bool,
}

/// Busy/idle state machine of the submit button.
#[derive(Clone, Copy, Debug)]
pub struct SubmitAffordance {
    config: SubmitConfig,
    /// Incremented on every submit so that only the newest reset applies.
    generation: u32,
    busy: bool,
}

impl SubmitAffordance {
    /// Creates an idle affordance.
    #[must_use]
    pub const fn new(config: SubmitConfig) -> Self {
        Self {
            config,
            generation: 0,
            busy: false,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SubmitConfig {
        &self.config
    }

    /// Returns `true` while the busy window is open.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Handles a submit. Returns the busy state and a token to pass to
    /// [`reset`](Self::reset) after [`SubmitConfig::reset_after`].
    pub fn on_submit(&mut self) -> (ButtonState, u32) {
        self.busy = true;
        self.generation = self.generation.wrapping_add(1);
        (
            ButtonState {
                label: self.config.busy_label,
                disabled: true,
            },
            self.generation,
        )
    }

    /// Closes the busy window opened by submit `token`.
    ///
    /// Returns `None` if a later submit reopened the window.
    pub fn reset(&mut self, token: u32) -> Option<ButtonState> {
        if !self.busy || token != self.generation {
            return None;
        }
        self.busy = false;
        Some(ButtonState {
            label: self.config.idle_label,
            disabled: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_then_reset() {
        let mut s = SubmitAffordance::new(SubmitConfig::portfolio());
        let (busy, token) = s.on_submit();
        assert_eq!(busy.label, "Sending...");
        assert!(busy.disabled);
        assert!(s.is_busy());

        let idle = s.reset(token).unwrap();
        assert_eq!(idle.label, "Send Message");
        assert!(!idle.disabled);
        assert_eq!(s.reset(token), None, "reset is one-shot");
    }

    #[test]
    fn stale_reset_ignored() {
        let mut s = SubmitAffordance::new(SubmitConfig::portfolio());
        let (_, first) = s.on_submit();
        let (_, second) = s.on_submit();
        assert_eq!(s.reset(first), None);
        assert!(s.is_busy());
        assert!(s.reset(second).is_some());
    }

    #[test]
    fn default_window_is_three_seconds() {
        assert_eq!(SubmitConfig::default().reset_after.as_millis(), 3000);
    }
}
