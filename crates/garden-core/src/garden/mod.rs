//! The in-memory garden and every operation that mutates it.
//!
//! [`Garden`] is the single state object of a session. It is created empty or
//! from an imported document, changed only through the operations below, and
//! exported back to a document at the end.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  View handlers  │    │   Store ops     │    │     Models      │
//! │ (view_handlers) │───▶│ (inventory_ops, │───▶│ (Inventory, Log │
//! │                 │    │  log_ops, ...)  │    │  Layout)        │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   Derived output        State mutations        Plain data
//! ```
//!
//! ## Submodules
//!
//! - [`inventory_ops`]: add, list and remove plants by category
//! - [`log_ops`]: append, update, remove and list log entries by position
//! - [`layout_ops`]: create, resize and edit section grids
//! - [`view_handlers`]: derived views wrapped for display
//!
//! ## Log positions
//!
//! Log entries are addressed by their position in the log. Removing an entry
//! shifts every later entry down by one, so a position is only meaningful
//! against the log it was read from. Listings pair each entry with its current
//! position ([`IndexedEntry`]) and with a session-local id that never changes,
//! which [`Garden::index_of`] maps back to the current position.
//!
//! # Examples
//!
//! ```rust
//! use garden_core::{Garden, models::{Action, LogEntry}};
//! use jiff::civil::date;
//!
//! let mut garden = Garden::new();
//! garden.append(LogEntry::new(date(2024, 5, 1), "Tomato", Action::Sown))?;
//! garden.append(LogEntry::new(date(2024, 5, 2), "Basil", Action::Sown))?;
//!
//! let newest_first = garden.list_reversed();
//! assert_eq!(newest_first[0].entry.plant, "Basil");
//! assert_eq!(newest_first[0].index, 1);
//! # Ok::<(), garden_core::GardenError>(())
//! ```

use crate::models::{IndexedEntry, Inventory, Layout, LogEntry, StoredEntry};

pub mod inventory_ops;
pub mod layout_ops;
pub mod log_ops;
pub mod view_handlers;

#[cfg(test)]
mod tests;

/// The complete state of one garden session.
#[derive(Debug, Clone, Default)]
pub struct Garden {
    pub(crate) inventory: Inventory,
    pub(crate) log: Vec<StoredEntry>,
    pub(crate) layout: Layout,
    next_id: u64,
}

impl Garden {
    /// Creates an empty garden.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a garden from previously exported parts, assigning fresh ids
    /// to the log entries in order.
    pub fn from_parts(inventory: Inventory, entries: Vec<LogEntry>, layout: Layout) -> Self {
        let mut garden = Self {
            inventory,
            layout,
            ..Self::default()
        };
        for entry in entries {
            garden.push_entry(entry);
        }
        garden
    }

    /// Splits the garden into its persisted parts.
    pub fn to_parts(&self) -> (Inventory, Vec<LogEntry>, Layout) {
        (
            self.inventory.clone(),
            self.entries().cloned().collect(),
            self.layout.clone(),
        )
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Log entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> + '_ {
        self.log.iter().map(|stored| &stored.entry)
    }

    /// Log entries in insertion order, paired with position and id.
    pub fn indexed_entries(&self) -> Vec<IndexedEntry> {
        self.log
            .iter()
            .enumerate()
            .map(|(index, stored)| IndexedEntry {
                index,
                id: stored.id,
                entry: stored.entry.clone(),
            })
            .collect()
    }

    /// Number of log entries.
    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Whether the garden holds no data at all.
    pub fn is_blank(&self) -> bool {
        self.log.is_empty() && self.inventory.is_empty() && self.layout.is_empty()
    }

    /// Appends without validation, returning the new entry's id.
    pub(crate) fn push_entry(&mut self, entry: LogEntry) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.log.push(StoredEntry { id, entry });
        id
    }
}
