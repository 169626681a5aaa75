//! Log operations for the Garden.

use std::collections::BTreeSet;

use log::debug;

use super::Garden;
use crate::{
    error::{GardenError, Result, ResultExt},
    models::{IndexedEntry, LogEntry},
    params::{AppendEntry, UpdateEntry},
};

impl Garden {
    /// Appends an entry to the end of the log.
    ///
    /// Duplicate entries and reused batch keys are accepted.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::InvalidInput` if `plant` or `batch_key` is empty.
    pub fn append(&mut self, entry: LogEntry) -> Result<IndexedEntry> {
        validate_entry(&entry)?;
        let index = self.log.len();
        let id = self.push_entry(entry.clone());
        debug!("Appended log entry {index} (id {id}) for batch {}", entry.batch_key);
        Ok(IndexedEntry { index, id, entry })
    }

    /// Builds an entry from form parameters and appends it.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::InvalidInput` for out-of-range metrics or an
    /// empty plant name.
    pub fn append_params(&mut self, params: AppendEntry) -> Result<IndexedEntry> {
        let entry = params.into_entry()?;
        self.append(entry)
    }

    /// The entry currently at `index`.
    pub fn get(&self, index: usize) -> Option<&LogEntry> {
        self.log.get(index).map(|stored| &stored.entry)
    }

    /// Replaces the entry at `index` wholesale, returning the new pairing.
    ///
    /// The index is checked against the log as it is now, not as it was when
    /// the caller listed it.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::IndexOutOfRange` if no entry is at `index`, or
    /// `GardenError::InvalidInput` if the new entry lacks a plant or batch key.
    pub fn update(&mut self, index: usize, entry: LogEntry) -> Result<IndexedEntry> {
        self.check_index(index)?;
        validate_entry(&entry)?;
        let stored = &mut self.log[index];
        stored.entry = entry;
        debug!("Updated log entry {index} (id {})", stored.id);
        Ok(IndexedEntry {
            index,
            id: stored.id,
            entry: stored.entry.clone(),
        })
    }

    /// Applies a partial update to the entry at `params.index`.
    ///
    /// # Errors
    ///
    /// Same as [`Garden::update`], plus `GardenError::InvalidInput` for
    /// out-of-range metrics.
    pub fn update_params(&mut self, params: &UpdateEntry) -> Result<IndexedEntry> {
        let current = self.get(params.index).ok_or(GardenError::IndexOutOfRange {
            index: params.index,
            len: self.log.len(),
        })?;
        let updated = params.apply_to(current)?;
        self.update(params.index, updated)
    }

    /// Replaces the entry at `index` with one parsed from hand-edited JSON.
    ///
    /// Nothing changes unless the JSON parses into a complete entry.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::MalformedDocument` if the JSON is invalid, plus
    /// the errors of [`Garden::update`].
    pub fn update_from_json(&mut self, index: usize, json: &str) -> Result<IndexedEntry> {
        self.check_index(index)?;
        let entry: LogEntry =
            serde_json::from_str(json).with_context_lazy(|| format!("log entry {index}"))?;
        self.update(index, entry)
    }

    /// Removes the entry at `index`; later entries shift down by one.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::IndexOutOfRange` if no entry is at `index`.
    pub fn remove(&mut self, index: usize) -> Result<IndexedEntry> {
        self.check_index(index)?;
        let stored = self.log.remove(index);
        debug!("Removed log entry {index} (id {})", stored.id);
        Ok(IndexedEntry {
            index,
            id: stored.id,
            entry: stored.entry,
        })
    }

    /// Current position of the entry with the given session id.
    pub fn index_of(&self, id: u64) -> Option<usize> {
        self.log.iter().position(|stored| stored.id == id)
    }

    /// Replaces the entry with the given session id, wherever it now is.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::EntryNotFound` if the id is unknown.
    pub fn update_by_id(&mut self, id: u64, entry: LogEntry) -> Result<IndexedEntry> {
        let index = self.index_of(id).ok_or(GardenError::EntryNotFound { id })?;
        self.update(index, entry)
    }

    /// Removes the entry with the given session id, wherever it now is.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::EntryNotFound` if the id is unknown.
    pub fn remove_by_id(&mut self, id: u64) -> Result<IndexedEntry> {
        let index = self.index_of(id).ok_or(GardenError::EntryNotFound { id })?;
        self.remove(index)
    }

    /// Entries newest-first, each paired with its true position in the log.
    pub fn list_reversed(&self) -> Vec<IndexedEntry> {
        let mut entries = self.indexed_entries();
        entries.reverse();
        entries
    }

    /// Sorted distinct non-empty batch keys.
    pub fn distinct_batch_keys(&self) -> Vec<String> {
        self.distinct(|entry| &entry.batch_key)
    }

    /// Sorted distinct plant names appearing in the log.
    pub fn distinct_plants(&self) -> Vec<String> {
        self.distinct(|entry| &entry.plant)
    }

    /// Sorted distinct non-empty sections appearing in the log.
    pub fn distinct_sections(&self) -> Vec<String> {
        self.distinct(|entry| &entry.section)
    }

    fn distinct<F>(&self, field: F) -> Vec<String>
    where
        F: Fn(&LogEntry) -> &String,
    {
        self.entries()
            .map(field)
            .filter(|value| !value.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .cloned()
            .collect()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.log.len() {
            Ok(())
        } else {
            Err(GardenError::IndexOutOfRange {
                index,
                len: self.log.len(),
            })
        }
    }
}

fn validate_entry(entry: &LogEntry) -> Result<()> {
    if entry.plant.trim().is_empty() {
        return Err(GardenError::invalid_input("plant").with_reason("Plant must not be empty"));
    }
    if entry.batch_key.trim().is_empty() {
        return Err(
            GardenError::invalid_input("batch_key").with_reason("Batch key must not be empty")
        );
    }
    Ok(())
}
