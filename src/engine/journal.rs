use crate::engine::types::{Gesture, Outcome};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Structured journal entry for one played round.
#[derive(Debug, Clone, Serialize)]
pub struct RoundJournalEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub match_id: Uuid,
    pub round: u32,
    pub player: Gesture,
    pub computer: Gesture,
    pub outcome: Outcome,
    /// Samples that classified as a real move during the round's window.
    pub samples_classified: u32,
}

/// Journal writer for structured round logging.
///
/// Journal failures never terminate a match; the controller logs and moves
/// on.
pub trait MatchJournalWriter: Send {
    fn write_entry(&mut self, entry: RoundJournalEntry) -> Result<(), crate::error::EngineError>;
    fn flush(&mut self) -> Result<(), crate::error::EngineError>;
}

/// In-memory journal writer (for testing and development).
pub struct InMemoryJournalWriter {
    entries: Vec<RoundJournalEntry>,
    max_entries: usize,
}

impl InMemoryJournalWriter {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::with_capacity(max_entries.min(1000)),
            max_entries,
        }
    }

    pub fn entries(&self) -> &[RoundJournalEntry] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl MatchJournalWriter for InMemoryJournalWriter {
    fn write_entry(&mut self, entry: RoundJournalEntry) -> Result<(), crate::error::EngineError> {
        self.entries.push(entry);
        if self.entries.len() > self.max_entries {
            self.entries.remove(0);
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), crate::error::EngineError> {
        // In-memory writer doesn't need to flush
        Ok(())
    }
}

/// Writes one JSON object per line to any `io::Write` destination.
pub struct JsonLinesJournalWriter<W: std::io::Write + Send> {
    out: W,
}

impl<W: std::io::Write + Send> JsonLinesJournalWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: std::io::Write + Send> MatchJournalWriter for JsonLinesJournalWriter<W> {
    fn write_entry(&mut self, entry: RoundJournalEntry) -> Result<(), crate::error::EngineError> {
        let line = serde_json::to_string(&entry)
            .map_err(|e| crate::error::EngineError::JournalError(e.to_string()))?;
        writeln!(self.out, "{line}")
            .map_err(|e| crate::error::EngineError::JournalError(e.to_string()))
    }

    fn flush(&mut self) -> Result<(), crate::error::EngineError> {
        self.out
            .flush()
            .map_err(|e| crate::error::EngineError::JournalError(e.to_string()))
    }
}
