//! Per-batch timelines and overviews.

use std::collections::BTreeMap;

use crate::models::{BatchOverview, LogEntry, LogFilter};

/// All entries of one batch, oldest first.
pub fn batch_timeline<'a, I>(entries: I, batch_key: &str) -> Vec<LogEntry>
where
    I: IntoIterator<Item = &'a LogEntry>,
{
    LogFilter::for_batch(batch_key).apply(entries)
}

/// Entries grouped by batch key, each group sorted by date.
///
/// Entries of a batch sharing a date keep their log order.
pub fn group_by_batch<'a, I>(entries: I) -> BTreeMap<&'a str, Vec<&'a LogEntry>>
where
    I: IntoIterator<Item = &'a LogEntry>,
{
    let mut batches: BTreeMap<&str, Vec<&LogEntry>> = BTreeMap::new();
    for entry in entries {
        batches.entry(entry.batch_key.as_str()).or_default().push(entry);
    }
    for group in batches.values_mut() {
        group.sort_by_key(|entry| entry.date);
    }
    batches
}

/// One overview row per batch, sorted by batch key.
pub fn batch_overview<'a, I>(entries: I) -> Vec<BatchOverview>
where
    I: IntoIterator<Item = &'a LogEntry>,
{
    group_by_batch(entries)
        .into_iter()
        .filter_map(|(batch_key, group)| {
            let first = group.first()?;
            let last = group.last()?;
            Some(BatchOverview {
                batch_key: batch_key.to_string(),
                plant: last.plant.clone(),
                section: last.section.clone(),
                first_date: first.date,
                last_date: last.date,
                entries: group.len(),
                latest_action: last.action.clone(),
            })
        })
        .collect()
}
