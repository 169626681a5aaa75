//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{IndexedEntry, LogEntry};

/// Wrapper for displaying a newly logged entry.
///
/// # Examples
///
/// ```rust
/// use garden_core::{
///     display::CreateResult,
///     models::{Action, IndexedEntry, LogEntry},
/// };
/// use jiff::civil::date;
///
/// let entry = LogEntry::new(date(2024, 5, 1), "Tomato", Action::Sown);
/// let result = CreateResult::new(IndexedEntry { index: 3, id: 4, entry });
/// assert!(result.to_string().starts_with("Logged entry 3 for batch Tomato-Set-2024-05-01"));
/// ```
#[derive(Debug)]
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<IndexedEntry> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Logged entry {} for batch {}",
            self.resource.index, self.resource.entry.batch_key
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper for displaying an updated entry and what changed.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl UpdateResult<IndexedEntry> {
    /// Records the field-level differences between `before` and the updated
    /// entry.
    pub fn from_diff(before: &LogEntry, resource: IndexedEntry) -> Self {
        let changes = entry_changes(before, &resource.entry);
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<IndexedEntry> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated entry {}", self.resource.index)?;

        if self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "No changes made.")?;
        } else {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper for displaying a removed entry.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<IndexedEntry> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entry = &self.resource.entry;
        writeln!(
            f,
            "Deleted entry {} ({} {} on {})",
            self.resource.index, entry.plant, entry.action, entry.date
        )
    }
}

/// Human-readable list of the fields that differ between two entries.
pub fn entry_changes(before: &LogEntry, after: &LogEntry) -> Vec<String> {
    let mut changes = Vec::new();
    if before.date != after.date {
        changes.push(format!("Date: {} -> {}", before.date, after.date));
    }
    if before.section != after.section {
        changes.push(format!("Section: '{}' -> '{}'", before.section, after.section));
    }
    if before.plant != after.plant {
        changes.push(format!("Plant: {} -> {}", before.plant, after.plant));
    }
    if before.batch_key != after.batch_key {
        changes.push(format!("Batch: {} -> {}", before.batch_key, after.batch_key));
    }
    if before.action != after.action {
        changes.push(format!("Action: {} -> {}", before.action, after.action));
    }
    if before.metrics != after.metrics {
        changes.push(format!("Metrics: {} -> {}", before.metrics, after.metrics));
    }
    if before.notes != after.notes {
        changes.push("Notes updated".to_string());
    }
    if before.next_visit != after.next_visit {
        let show = |date: Option<jiff::civil::Date>| date.map_or("none".to_string(), |d| d.to_string());
        changes.push(format!(
            "Next visit: {} -> {}",
            show(before.next_visit),
            show(after.next_visit)
        ));
    }
    changes
}
