// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console trace output.

use alloc::format;

use vitrine_core::trace::{
    ActiveLinkEvent, CounterEvent, NavEvent, RevealEvent, ThemeEvent, TraceSink,
};
use web_sys::console;

/// Writes one `console.debug` line per trace event.
///
/// Only receives events when the `trace` feature is enabled; otherwise the
/// [`Tracer`](vitrine_core::trace::Tracer) drops them before dispatch.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl TraceSink for ConsoleSink {
    fn on_theme(&mut self, e: &ThemeEvent) {
        console::debug_1(
            &format!(
                "[vitrine:theme] {} source={:?} persisted={}",
                e.theme.as_str(),
                e.source,
                e.persisted
            )
            .into(),
        );
    }

    fn on_reveal(&mut self, e: &RevealEvent) {
        console::debug_1(
            &format!(
                "[vitrine:reveal] group={} slot={} remaining={}",
                e.group.0,
                e.id.index(),
                e.remaining
            )
            .into(),
        );
    }

    fn on_active_link(&mut self, e: &ActiveLinkEvent) {
        console::debug_1(
            &format!(
                "[vitrine:scroll] link {:?} -> {} at {}px",
                e.previous, e.link, e.offset
            )
            .into(),
        );
    }

    fn on_counter(&mut self, e: &CounterEvent) {
        console::debug_1(
            &format!(
                "[vitrine:counter] target={} {:?} after {} steps",
                e.target, e.phase, e.steps
            )
            .into(),
        );
    }

    fn on_nav(&mut self, e: &NavEvent) {
        console::debug_1(&format!("[vitrine:nav] {:?}", e.action).into());
    }
}
