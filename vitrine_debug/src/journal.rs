// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON Lines event journal.
//!
//! [`JournalSink`] writes one JSON object per trace event, each on its own
//! line, so a journal can be appended to, streamed, and diffed. Every object
//! carries a `"kind"` field naming the event. [`parse`] reads a journal back.

use std::io::{self, Write};

use serde_json::{Value, json};

use vitrine_core::trace::{
    ActiveLinkEvent, CounterEvent, NavEvent, RevealEvent, ThemeEvent, TraceSink,
};

/// Writes trace events as JSON Lines.
pub struct JournalSink<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> std::fmt::Debug for JournalSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JournalSink")
            .field("written", &self.written)
            .finish_non_exhaustive()
    }
}

impl<W: Write> JournalSink<W> {
    /// Creates a journal writing to `writer`.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Returns the number of events written successfully.
    #[must_use]
    pub fn written(&self) -> usize {
        self.written
    }

    /// Consumes the sink and returns the destination.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn record(&mut self, entry: &Value) {
        if serde_json::to_writer(&mut self.writer, entry).is_ok()
            && self.writer.write_all(b"\n").is_ok()
        {
            self.written += 1;
        }
    }
}

impl<W: Write> TraceSink for JournalSink<W> {
    fn on_theme(&mut self, e: &ThemeEvent) {
        self.record(&json!({
            "kind": "theme",
            "theme": e.theme.as_str(),
            "source": format!("{:?}", e.source),
            "persisted": e.persisted,
        }));
    }

    fn on_reveal(&mut self, e: &RevealEvent) {
        self.record(&json!({
            "kind": "reveal",
            "group": e.group.0,
            "slot": e.id.index(),
            "remaining": e.remaining,
        }));
    }

    fn on_active_link(&mut self, e: &ActiveLinkEvent) {
        self.record(&json!({
            "kind": "active_link",
            "link": e.link,
            "previous": e.previous,
            "offset": e.offset,
        }));
    }

    fn on_counter(&mut self, e: &CounterEvent) {
        self.record(&json!({
            "kind": "counter",
            "target": e.target,
            "phase": format!("{:?}", e.phase),
            "steps": e.steps,
        }));
    }

    fn on_nav(&mut self, e: &NavEvent) {
        self.record(&json!({
            "kind": "nav",
            "action": format!("{:?}", e.action),
        }));
    }
}

/// Parses a JSON Lines journal. Blank lines are skipped.
///
/// # Errors
///
/// Returns an [`io::Error`] of kind `InvalidData` for the first line that is
/// not valid JSON.
pub fn parse(journal: &str) -> io::Result<Vec<Value>> {
    journal
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).map_err(io::Error::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::counter::CounterPhase;
    use vitrine_core::trace::NavAction;

    #[test]
    fn one_line_per_event() {
        let mut sink = JournalSink::new(Vec::new());
        sink.on_nav(&NavEvent {
            action: NavAction::Opened,
        });
        sink.on_counter(&CounterEvent {
            target: 150,
            phase: CounterPhase::Finished,
            steps: 125,
        });
        assert_eq!(sink.written(), 2);

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text.lines().count(), 2);
        let entries = parse(&text).unwrap();
        assert_eq!(entries[0]["kind"], "nav");
        assert_eq!(entries[0]["action"], "Opened");
        assert_eq!(entries[1]["target"], 150);
        assert_eq!(entries[1]["phase"], "Finished");
    }

    #[test]
    fn missing_previous_link_is_null() {
        let mut sink = JournalSink::new(Vec::new());
        sink.on_active_link(&ActiveLinkEvent {
            link: 0,
            previous: None,
            offset: 0.0,
        });
        let entries = parse(std::str::from_utf8(&sink.into_inner()).unwrap()).unwrap();
        assert!(entries[0]["previous"].is_null());
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = parse("{\"kind\":\"nav\"}\nnot json\n").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(parse("\n\n").unwrap().is_empty());
    }
}
