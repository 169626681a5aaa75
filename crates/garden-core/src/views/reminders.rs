//! Follow-up visits that are due.

use jiff::civil::Date;
use serde::Serialize;

use super::as_of::latest_by_batch;
use crate::models::{Action, LogEntry};

/// A batch whose latest entry asked for a visit on or before today.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reminder {
    pub batch_key: String,
    pub plant: String,
    pub section: String,
    pub due: Date,
    pub last_action: Action,
    pub last_date: Date,
    /// Days past the due date; zero when due today
    pub overdue_days: i32,
}

/// Reminders for every batch whose latest entry on or before `today` has a
/// `next_visit` on or before `today`, most overdue first.
pub fn reminders<'a, I>(entries: I, today: Date) -> Vec<Reminder>
where
    I: IntoIterator<Item = &'a LogEntry>,
{
    let mut due: Vec<Reminder> = latest_by_batch(entries, today)
        .into_iter()
        .filter_map(|(batch_key, entry)| {
            let next_visit = entry.next_visit.filter(|visit| *visit <= today)?;
            Some(Reminder {
                batch_key: batch_key.to_string(),
                plant: entry.plant.clone(),
                section: entry.section.clone(),
                due: next_visit,
                last_action: entry.action.clone(),
                last_date: entry.date,
                overdue_days: next_visit.until(today).map_or(0, |span| span.get_days()),
            })
        })
        .collect();
    due.sort_by(|a, b| a.due.cmp(&b.due).then_with(|| a.batch_key.cmp(&b.batch_key)));
    due
}
