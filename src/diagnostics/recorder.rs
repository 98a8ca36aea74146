// SPDX-License-Identifier: MPL-2.0
//! Diagnostic recorder owned by the controller.

use super::buffer::{BufferCapacity, CircularBuffer};
use super::events::{DiagnosticEvent, DiagnosticEventKind};
use crate::error::Result;
use std::time::Instant;

/// Records pipeline events into a bounded buffer and mirrors them to the
/// `log` facade at debug level.
#[derive(Debug, Clone)]
pub struct Recorder {
    buffer: CircularBuffer<DiagnosticEvent>,
    started_at: Instant,
    next_sequence: u64,
}

impl Recorder {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            buffer: CircularBuffer::new(capacity),
            started_at: Instant::now(),
            next_sequence: 0,
        }
    }

    pub fn record(&mut self, kind: DiagnosticEventKind) {
        log::debug!("diagnostic #{}: {:?}", self.next_sequence, kind);
        #[allow(clippy::cast_possible_truncation)] // u64 milliseconds span ~584 million years
        let timestamp_ms = self.started_at.elapsed().as_millis() as u64;
        self.buffer.push(DiagnosticEvent {
            sequence: self.next_sequence,
            timestamp_ms,
            kind,
        });
        self.next_sequence += 1;
    }

    /// Recorded events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Event kinds only, oldest first. Convenient for assertions.
    #[must_use]
    pub fn kinds(&self) -> Vec<DiagnosticEventKind> {
        self.buffer.iter().map(|event| event.kind.clone()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Exports the retained events as a pretty-printed JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        let events: Vec<&DiagnosticEvent> = self.buffer.iter().collect();
        Ok(serde_json::to_string_pretty(&events)?)
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Outcome;

    #[test]
    fn sequence_keeps_counting_after_eviction() {
        let mut recorder = Recorder::new(BufferCapacity::new(0));
        let capacity = recorder.buffer.capacity();
        for _ in 0..capacity + 2 {
            recorder.record(DiagnosticEventKind::SettingsApplied { url_changed: false });
        }

        assert_eq!(recorder.len(), capacity);
        let first = recorder.events().next().expect("non-empty");
        assert_eq!(first.sequence, 2);
    }

    #[test]
    fn exports_json_array() {
        let mut recorder = Recorder::default();
        recorder.record(DiagnosticEventKind::StaleCallbackIgnored {
            source: "old.png".into(),
            outcome: Outcome::Failed,
        });

        let json = recorder.to_json().expect("export");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(parsed[0]["type"], "stale_callback_ignored");
        assert_eq!(parsed[0]["source"], "old.png");
    }

    #[test]
    fn clear_keeps_sequence() {
        let mut recorder = Recorder::default();
        recorder.record(DiagnosticEventKind::SettingsApplied { url_changed: true });
        recorder.clear();
        assert!(recorder.is_empty());
        recorder.record(DiagnosticEventKind::SettingsApplied { url_changed: true });
        assert_eq!(recorder.events().next().map(|e| e.sequence), Some(1));
    }
}
