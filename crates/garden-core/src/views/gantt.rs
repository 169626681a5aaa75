//! Gantt-style reconstruction of how long each logged state lasted.

use jiff::civil::Date;
use serde::Serialize;

use super::timeline::group_by_batch;
use crate::models::LogEntry;

/// The half-open interval `[start, end)` during which an entry described its
/// batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GanttBar {
    pub batch_key: String,
    pub start: Date,
    pub end: Date,
    pub entry: LogEntry,
}

impl GanttBar {
    /// Length of the interval in days.
    pub fn days(&self) -> i32 {
        self.start.until(self.end).map_or(0, |span| span.get_days())
    }
}

/// Builds the bars for every batch in `entries`.
///
/// Within a batch, each entry's bar runs from its own date to the date of the
/// next entry, and the last entry's bar lasts one day. Bars of a batch are
/// therefore contiguous and never overlap. Two entries on the same day give
/// the first an empty bar. Output is ordered by batch key, then by date.
pub fn gantt<'a, I>(entries: I) -> Vec<GanttBar>
where
    I: IntoIterator<Item = &'a LogEntry>,
{
    let mut bars = Vec::new();
    for (batch_key, group) in group_by_batch(entries) {
        for (position, entry) in group.iter().enumerate() {
            let end = match group.get(position + 1) {
                Some(next) => next.date,
                None => entry.date.tomorrow().unwrap_or(entry.date),
            };
            bars.push(GanttBar {
                batch_key: batch_key.to_string(),
                start: entry.date,
                end,
                entry: (*entry).clone(),
            });
        }
    }
    bars
}
