use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed on-disk and display format of note timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A timestamped free-text entry. Never mutated once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
    pub content: String,
}

impl Note {
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    #[error("note content is empty")]
    Empty,
}

/// Append-only, insertion-ordered sequence of notes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteLog {
    notes: Vec<Note>,
}

impl NoteLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_notes(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    /// Append a note stamped with the current local time.
    pub fn add_note(&mut self, content: &str) -> Result<&Note, NoteError> {
        let now = Local::now().naive_local();
        self.add_note_at(content, now.with_nanosecond(0).unwrap_or(now))
    }

    /// Append a note with an explicit timestamp.
    /// Empty or whitespace-only content is rejected and the log is unchanged.
    pub fn add_note_at(
        &mut self,
        content: &str,
        timestamp: NaiveDateTime,
    ) -> Result<&Note, NoteError> {
        if content.trim().is_empty() {
            return Err(NoteError::Empty);
        }
        self.notes.push(Note {
            timestamp,
            content: content.to_string(),
        });
        log::debug!("note appended (#{})", self.notes.len());
        Ok(&self.notes[self.notes.len() - 1])
    }

    /// Notes in insertion order.
    pub fn list_notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn into_notes(self) -> Vec<Note> {
        self.notes
    }
}

mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
