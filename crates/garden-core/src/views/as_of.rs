//! Point-in-time reconstruction of batch state.

use std::collections::HashMap;

use jiff::civil::Date;
use serde::Serialize;

use crate::models::{Cell, LogEntry, MetricSummary};

/// The latest entry of `batch_key` dated on or before `as_of`.
///
/// When several entries share that latest date, the one logged last wins.
/// Returns `None` if the batch has no entry on or before `as_of`.
pub fn latest_as_of<'a, I>(entries: I, batch_key: &str, as_of: Date) -> Option<&'a LogEntry>
where
    I: IntoIterator<Item = &'a LogEntry>,
{
    entries
        .into_iter()
        .filter(|entry| entry.batch_key == batch_key && entry.date <= as_of)
        .fold(None, |best: Option<&LogEntry>, entry| match best {
            Some(best) if best.date > entry.date => Some(best),
            _ => Some(entry),
        })
}

/// The latest entry on or before `as_of` for every batch, in one pass.
pub fn latest_by_batch<'a, I>(entries: I, as_of: Date) -> HashMap<&'a str, &'a LogEntry>
where
    I: IntoIterator<Item = &'a LogEntry>,
{
    let mut latest: HashMap<&str, &LogEntry> = HashMap::new();
    for entry in entries.into_iter().filter(|entry| entry.date <= as_of) {
        let slot = latest.entry(entry.batch_key.as_str()).or_insert(entry);
        if entry.date >= slot.date {
            *slot = entry;
        }
    }
    latest
}

/// The state of one batch as of a reference date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchState {
    pub batch_key: String,
    pub entry: LogEntry,
}

impl BatchState {
    /// One-line description: action, date, metrics, then notes.
    pub fn label(&self) -> String {
        let entry = &self.entry;
        let mut label = format!("{}: {} on {}", self.batch_key, entry.action, entry.date);
        if let Some(height) = entry.metrics.height() {
            label.push_str(&format!(" | {height} cm"));
        }
        if let Some(moisture) = entry.metrics.moisture() {
            label.push_str(&format!(" | {moisture}% moisture"));
        }
        if !entry.notes.trim().is_empty() {
            label.push_str(&format!(" | {}", entry.notes.trim()));
        }
        label
    }
}

/// Aggregated state of one layout cell as of a reference date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellSnapshot {
    pub as_of: Date,
    /// Batches with an entry on or before `as_of`, in cell order
    pub batches: Vec<BatchState>,
    /// Averages over the contributing batches' latest entries
    pub summary: MetricSummary,
}

impl CellSnapshot {
    /// Builds the snapshot of `cell` from a precomputed
    /// [`latest_by_batch`] map.
    pub fn from_latest(cell: &Cell, latest: &HashMap<&str, &LogEntry>, as_of: Date) -> Self {
        let batches: Vec<BatchState> = cell
            .keys()
            .iter()
            .filter_map(|key| {
                latest.get(key.as_str()).map(|entry| BatchState {
                    batch_key: key.clone(),
                    entry: (*entry).clone(),
                })
            })
            .collect();
        let summary = MetricSummary::from_entries(batches.iter().map(|state| &state.entry));
        Self {
            as_of,
            batches,
            summary,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Composite label of every contributing batch, one per line.
    pub fn label(&self) -> String {
        self.batches
            .iter()
            .map(BatchState::label)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Snapshot of a single cell as of `as_of`.
pub fn cell_snapshot<'a, I>(entries: I, cell: &Cell, as_of: Date) -> CellSnapshot
where
    I: IntoIterator<Item = &'a LogEntry>,
{
    CellSnapshot::from_latest(cell, &latest_by_batch(entries, as_of), as_of)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::{Action, Metrics};

    fn entry(batch: &str, day: i8, action: Action, height: Option<f64>) -> LogEntry {
        let mut entry = LogEntry::new(date(2024, 5, day), "Tomato", action);
        entry.batch_key = batch.to_string();
        entry.metrics = Metrics::new(height, None);
        entry
    }

    #[test]
    fn test_latest_as_of_picks_last_on_or_before() {
        let log = vec![
            entry("T1", 1, Action::Sown, Some(2.0)),
            entry("T1", 10, Action::Measured, Some(15.0)),
            entry("T1", 20, Action::Harvested, None),
        ];
        let found = latest_as_of(&log, "T1", date(2024, 5, 15)).map(|e| e.action.clone());
        assert_eq!(found, Some(Action::Measured));
        let found = latest_as_of(&log, "T1", date(2024, 5, 10)).map(|e| e.action.clone());
        assert_eq!(found, Some(Action::Measured));
    }

    #[test]
    fn test_latest_as_of_before_first_entry() {
        let log = vec![entry("T1", 10, Action::Sown, None)];
        assert!(latest_as_of(&log, "T1", date(2024, 5, 9)).is_none());
        assert!(latest_as_of(&log, "T2", date(2024, 6, 1)).is_none());
    }

    #[test]
    fn test_same_day_tie_prefers_later_insertion() {
        let log = vec![
            entry("T1", 5, Action::Watered, None),
            entry("T1", 5, Action::Fertilized, None),
        ];
        let found = latest_as_of(&log, "T1", date(2024, 5, 5)).map(|e| e.action.clone());
        assert_eq!(found, Some(Action::Fertilized));

        let latest = latest_by_batch(&log, date(2024, 5, 5));
        assert_eq!(latest["T1"].action, Action::Fertilized);
    }

    #[test]
    fn test_out_of_order_log() {
        let log = vec![
            entry("T1", 10, Action::Measured, None),
            entry("T1", 1, Action::Sown, None),
        ];
        let latest = latest_by_batch(&log, date(2024, 5, 31));
        assert_eq!(latest["T1"].action, Action::Measured);
    }

    #[test]
    fn test_cell_snapshot_averages_contributing_batches() {
        let log = vec![
            entry("T1", 1, Action::Sown, Some(2.0)),
            entry("T1", 10, Action::Measured, Some(15.0)),
            entry("B1", 3, Action::Measured, Some(5.0)),
            entry("Late", 25, Action::Sown, Some(100.0)),
        ];
        let cell = Cell::from_keys(["T1", "B1", "Late", "Unknown"]);

        let snapshot = cell_snapshot(&log, &cell, date(2024, 5, 12));
        assert_eq!(snapshot.batches.len(), 2);
        assert_eq!(snapshot.batches[0].batch_key, "T1");
        assert_eq!(snapshot.batches[1].batch_key, "B1");
        assert_eq!(snapshot.summary.avg_height_cm, 10.0);
        assert_eq!(snapshot.summary.height_samples, 2);
        assert!(!snapshot.summary.has_moisture());
    }

    #[test]
    fn test_cell_snapshot_before_everything_is_empty() {
        let log = vec![entry("T1", 10, Action::Sown, Some(3.0))];
        let cell = Cell::from_keys(["T1"]);
        let snapshot = cell_snapshot(&log, &cell, date(2024, 5, 1));
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.summary.avg_height_cm, 0.0);
        assert_eq!(snapshot.label(), "");
    }

    #[test]
    fn test_label_contents() {
        let mut measured = entry("T1", 10, Action::Measured, Some(15.0));
        measured.metrics.moisture_pct = Some(40.0);
        measured.notes = "first truss".to_string();
        let cell = Cell::from_keys(["T1"]);

        let snapshot = cell_snapshot(&vec![measured], &cell, date(2024, 5, 10));
        assert_eq!(
            snapshot.label(),
            "T1: Measured on 2024-05-10 | 15 cm | 40% moisture | first truss"
        );
    }
}
