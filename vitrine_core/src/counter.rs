// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stepped count-up animation for numeric stat elements.
//!
//! A counter reads its target from the element's initial text (`"150+"`
//! yields 150) and counts from zero. Every step adds a fixed increment,
//!
//! ```text
//! increment = target / (duration / step_interval)
//! ```
//!
//! and displays the rounded-up running value with the suffix. Once the running
//! value reaches the target the display snaps to the exact target and the
//! animation finishes. The backend drives [`Counter::advance`] from display
//! frames; it schedules the next frame only while the last step reported
//! `finished == false`, so the loop ends on its own.

use alloc::format;
use alloc::string::String;

use crate::time::Duration;
use crate::trace::{CounterEvent, Tracer};

/// Timing and formatting of counter animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterConfig {
    /// Nominal time from zero to target.
    pub duration: Duration,
    /// Nominal time between steps; one step runs per display frame.
    pub step_interval: Duration,
    /// Text appended to every displayed value.
    pub suffix: &'static str,
}

impl CounterConfig {
    /// Defaults for the portfolio page: two seconds at ~60 steps per second.
    #[must_use]
    pub const fn portfolio() -> Self {
        Self {
            duration: Duration::from_millis(2000),
            step_interval: Duration::from_millis(16),
            suffix: "+",
        }
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self::portfolio()
    }
}

/// Parses the leading integer of `text` the way `parseInt(text, 10)` does.
///
/// Leading whitespace and a `+` sign are skipped and parsing stops at the
/// first non-digit. Returns `None` when no digit follows, for negative values,
/// and for values that do not fit in a `u32`.
#[must_use]
pub fn parse_leading_int(text: &str) -> Option<u32> {
    let rest = text.trim_start();
    let rest = rest.strip_prefix('+').unwrap_or(rest);
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].parse().ok()
}

/// Lifecycle of a [`Counter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CounterPhase {
    /// Waiting to be started.
    Idle,
    /// Stepping toward the target.
    Running,
    /// Displaying the exact target; never restarts.
    Finished,
}

/// One displayed step of a counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    /// Displayed integer (rounded up while running, exact when finished).
    pub value: u32,
    /// Whether this is the terminal frame.
    pub finished: bool,
}

impl CounterFrame {
    /// Formats the frame for display.
    #[must_use]
    pub fn text(&self, suffix: &str) -> String {
        format!("{}{suffix}", self.value)
    }
}

/// The running state of one count-up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u32,
    increment: f64,
    current: f64,
    steps: u32,
    finished: bool,
}

impl CounterAnimation {
    /// Creates an animation toward `target`.
    ///
    /// A configuration with fewer than one step per duration (including a
    /// zero step interval) reaches the target on the first step.
    #[must_use]
    pub fn new(target: u32, config: &CounterConfig) -> Self {
        let target_f = f64::from(target);
        let frames = config.duration.as_millis_f64() / config.step_interval.as_millis_f64();
        let increment = if frames.is_finite() && frames >= 1.0 {
            target_f / frames
        } else {
            target_f
        };
        Self {
            target,
            increment,
            current: 0.0,
            steps: 0,
            finished: false,
        }
    }

    /// Returns the target value.
    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Returns the number of steps taken.
    #[must_use]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Returns `true` once the terminal frame has been produced.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances one step. After the terminal frame, keeps returning it.
    pub fn step(&mut self) -> CounterFrame {
        if self.finished {
            return CounterFrame {
                value: self.target,
                finished: true,
            };
        }
        self.steps += 1;
        self.current += self.increment;
        if self.current < f64::from(self.target) {
            CounterFrame {
                value: ceil_to_u32(self.current).min(self.target),
                finished: false,
            }
        } else {
            self.finished = true;
            CounterFrame {
                value: self.target,
                finished: true,
            }
        }
    }
}

/// Rounds a non-negative value up to the next integer.
fn ceil_to_u32(x: f64) -> u32 {
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "callers pass values in [0, u32::MAX]"
    )]
    let floor = x as u32;
    if f64::from(floor) < x {
        floor.saturating_add(1)
    } else {
        floor
    }
}

/// A counter element's one-shot animation.
///
/// [`start`](Self::start) succeeds once; afterwards the counter can only be
/// advanced to completion.
#[derive(Clone, Debug)]
pub struct Counter {
    config: CounterConfig,
    phase: CounterPhase,
    animation: CounterAnimation,
}

impl Counter {
    /// Creates a counter from the element's initial text.
    ///
    /// Returns `None` when the text has no leading integer; such elements are
    /// left untouched.
    #[must_use]
    pub fn from_text(text: &str, config: CounterConfig) -> Option<Self> {
        parse_leading_int(text).map(|target| Self::new(target, config))
    }

    /// Creates an idle counter toward `target`.
    #[must_use]
    pub fn new(target: u32, config: CounterConfig) -> Self {
        Self {
            config,
            phase: CounterPhase::Idle,
            animation: CounterAnimation::new(target, &config),
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    /// Returns the target value.
    #[must_use]
    pub fn target(&self) -> u32 {
        self.animation.target()
    }

    /// Returns the display suffix.
    #[must_use]
    pub fn suffix(&self) -> &'static str {
        self.config.suffix
    }

    /// Starts the animation and runs its first step synchronously.
    ///
    /// Returns `None` if the counter was already started.
    pub fn start(&mut self, tracer: &mut Tracer<'_>) -> Option<CounterFrame> {
        if self.phase != CounterPhase::Idle {
            return None;
        }
        self.phase = CounterPhase::Running;
        self.emit(tracer);
        self.advance(tracer)
    }

    /// Runs the next step.
    ///
    /// Returns `None` unless the counter is running.
    pub fn advance(&mut self, tracer: &mut Tracer<'_>) -> Option<CounterFrame> {
        if self.phase != CounterPhase::Running {
            return None;
        }
        let frame = self.animation.step();
        if frame.finished {
            self.phase = CounterPhase::Finished;
            self.emit(tracer);
        }
        Some(frame)
    }

    fn emit(&self, tracer: &mut Tracer<'_>) {
        tracer.counter(&CounterEvent {
            target: self.animation.target(),
            phase: self.phase,
            steps: self.animation.steps(),
        });
    }
}
