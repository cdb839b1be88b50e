// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use vitrine_core::counter::CounterPhase;
use vitrine_core::trace::{
    ActiveLinkEvent, CounterEvent, NavAction, NavEvent, RevealEvent, ThemeEvent, ThemeSource,
    TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the destination.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn source_name(source: ThemeSource) -> &'static str {
    match source {
        ThemeSource::Stored => "stored",
        ThemeSource::System => "system",
        ThemeSource::User => "user",
    }
}

fn phase_name(phase: CounterPhase) -> &'static str {
    match phase {
        CounterPhase::Idle => "idle",
        CounterPhase::Running => "running",
        CounterPhase::Finished => "finished",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_theme(&mut self, e: &ThemeEvent) {
        let saved = if e.persisted { " (saved)" } else { "" };
        let _ = writeln!(
            self.writer,
            "[theme] {} from {}{saved}",
            e.theme.as_str(),
            source_name(e.source),
        );
    }

    fn on_reveal(&mut self, e: &RevealEvent) {
        let _ = writeln!(
            self.writer,
            "[reveal] group={} slot={} remaining={}",
            e.group.0,
            e.id.index(),
            e.remaining,
        );
    }

    fn on_active_link(&mut self, e: &ActiveLinkEvent) {
        let previous = e
            .previous
            .map_or_else(|| "-".to_owned(), |p| p.to_string());
        let _ = writeln!(
            self.writer,
            "[scroll] active link {previous} -> {} at {:.1}px",
            e.link, e.offset,
        );
    }

    fn on_counter(&mut self, e: &CounterEvent) {
        let _ = writeln!(
            self.writer,
            "[counter] target={} {} steps={}",
            e.target,
            phase_name(e.phase),
            e.steps,
        );
    }

    fn on_nav(&mut self, e: &NavEvent) {
        let action = match e.action {
            NavAction::Opened => "open",
            NavAction::Closed => "closed",
        };
        let _ = writeln!(self.writer, "[nav] {action}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::theme::Theme;

    #[test]
    fn pretty_print_theme() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_theme(&ThemeEvent {
            theme: Theme::Dark,
            source: ThemeSource::User,
            persisted: true,
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "[theme] dark from user (saved)\n");
    }

    #[test]
    fn pretty_print_first_active_link() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_active_link(&ActiveLinkEvent {
            link: 2,
            previous: None,
            offset: 1234.0,
        });
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(output.contains("- -> 2"), "got: {output}");
        assert!(output.contains("1234.0px"), "got: {output}");
    }
}
