//! Where entries are saved.

use super::{EntryData, JournalEntry, NewEntry};
use crate::dates::LocalDate;
use crate::errors::StoreError;
use tracing::debug;
use uuid::Uuid;

/// Data access for journal entries.
///
/// Implementations decide how entries are kept. The entry form only needs to
/// create today's entry, update it, and find it again.
pub trait EntryStore {
    /// Stores a new entry and returns it with its assigned id.
    fn create(&mut self, entry: NewEntry) -> Result<JournalEntry, StoreError>;

    /// Replaces the editable fields of the entry with `id`.
    fn update(&mut self, id: &str, data: EntryData) -> Result<JournalEntry, StoreError>;

    /// The entry saved for `today`, if any.
    fn todays_entry(&self, today: &LocalDate) -> Option<JournalEntry>;
}

/// Keeps entries in memory for the lifetime of the value.
///
/// Holds at most one entry per date and assigns UUID v4 ids.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Vec<JournalEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EntryStore for MemoryStore {
    fn create(&mut self, entry: NewEntry) -> Result<JournalEntry, StoreError> {
        if self.entries.iter().any(|existing| existing.date == entry.date) {
            return Err(StoreError::DuplicateDate(entry.date.to_string()));
        }

        let stored = JournalEntry {
            id: Uuid::new_v4().to_string(),
            date: entry.date,
            data: entry.data,
        };
        debug!("Stored entry {} for {}", stored.id, stored.date);
        self.entries.push(stored.clone());
        Ok(stored)
    }

    fn update(&mut self, id: &str, data: EntryData) -> Result<JournalEntry, StoreError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        entry.data = data;
        debug!("Updated entry {}", id);
        Ok(entry.clone())
    }

    fn todays_entry(&self, today: &LocalDate) -> Option<JournalEntry> {
        self.entries.iter().find(|entry| entry.date == *today).cloned()
    }
}
