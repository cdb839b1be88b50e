// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page-clock durations.
//!
//! [`Duration`] counts microsecond ticks. Component configurations are written
//! in milliseconds with [`Duration::from_millis`]; timers that take an integer
//! millisecond delay read them back with [`Duration::as_timeout_millis`].

use core::fmt;

/// A span of page-clock time, in microseconds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration(pub u64);

impl Duration {
    /// Zero duration.
    pub const ZERO: Self = Self(0);

    /// Creates a duration from whole milliseconds.
    #[inline]
    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms * 1000)
    }

    /// Returns the raw tick value.
    #[inline]
    #[must_use]
    pub const fn ticks(self) -> u64 {
        self.0
    }

    /// Returns the duration in whole milliseconds, truncating.
    #[inline]
    #[must_use]
    pub const fn as_millis(self) -> u64 {
        self.0 / 1000
    }

    /// Returns the duration in fractional milliseconds.
    #[inline]
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "page-scale durations are far below 2^52 µs"
    )]
    pub const fn as_millis_f64(self) -> f64 {
        self.0 as f64 / 1000.0
    }

    /// Returns the delay as the `i32` millisecond count `setTimeout` expects,
    /// saturating at `i32::MAX`.
    #[inline]
    #[must_use]
    pub fn as_timeout_millis(self) -> i32 {
        i32::try_from(self.as_millis()).unwrap_or(i32::MAX)
    }
}

impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duration({}µs)", self.0)
    }
}
