//! Filter types for querying the log.

use std::collections::BTreeSet;

use jiff::civil::Date;

use super::LogEntry;

/// Value that, when present in a selection, disables filtering on that
/// dimension.
pub const ALL_SENTINEL: &str = "All";

/// Inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: Date,
    pub end: Date,
}

impl DateRange {
    pub fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// The range covering every representable date.
    pub fn all() -> Self {
        Self {
            start: Date::MIN,
            end: Date::MAX,
        }
    }

    /// Range from optional bounds; a missing bound is open.
    pub fn from_bounds(start: Option<Date>, end: Option<Date>) -> Self {
        Self {
            start: start.unwrap_or(Date::MIN),
            end: end.unwrap_or(Date::MAX),
        }
    }

    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self::all()
    }
}

/// Inclusion set for one filter dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// No filtering on this dimension
    #[default]
    All,

    /// Only values in the set are kept
    Only(BTreeSet<String>),
}

impl Selection {
    /// Builds a selection from user-picked values.
    ///
    /// An empty pick, or one that contains the `"All"` sentinel, selects
    /// everything.
    ///
    /// ```rust
    /// use garden_core::models::Selection;
    ///
    /// assert_eq!(Selection::from_values(Vec::<String>::new()), Selection::All);
    /// assert_eq!(Selection::from_values(["All", "Tomato"]), Selection::All);
    /// assert!(Selection::from_values(["Tomato"]).matches("Tomato"));
    /// assert!(!Selection::from_values(["Tomato"]).matches("Basil"));
    /// ```
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() || values.contains(ALL_SENTINEL) {
            Selection::All
        } else {
            Selection::Only(values)
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(values) => values.contains(value),
        }
    }
}

/// Filter options for querying log entries.
///
/// Every dimension must match for an entry to be kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFilter {
    /// Inclusive date range
    pub range: DateRange,

    /// Batch keys to keep
    pub batch_keys: Selection,

    /// Plant names to keep
    pub plants: Selection,

    /// Sections to keep
    pub sections: Selection,
}

impl LogFilter {
    /// Filter keeping only the given batch.
    ///
    /// The key is matched literally, so a batch named `"All"` selects only
    /// itself.
    pub fn for_batch(batch_key: impl Into<String>) -> Self {
        Self {
            batch_keys: Selection::Only(BTreeSet::from([batch_key.into()])),
            ..Default::default()
        }
    }

    pub fn matches(&self, entry: &LogEntry) -> bool {
        self.range.contains(entry.date)
            && self.batch_keys.matches(&entry.batch_key)
            && self.plants.matches(&entry.plant)
            && self.sections.matches(&entry.section)
    }

    /// Entries satisfying the filter, ordered by date.
    ///
    /// Entries sharing a date keep their original relative order, so applying
    /// the same filter to its own output returns it unchanged.
    pub fn apply<'a, I>(&self, entries: I) -> Vec<LogEntry>
    where
        I: IntoIterator<Item = &'a LogEntry>,
    {
        let mut kept: Vec<LogEntry> = entries
            .into_iter()
            .filter(|entry| self.matches(entry))
            .cloned()
            .collect();
        kept.sort_by_key(|entry| entry.date);
        kept
    }
}

impl From<&crate::params::FilterParams> for LogFilter {
    /// Convert filter parameters into a [`LogFilter`].
    ///
    /// ```rust
    /// use garden_core::{models::LogFilter, params::FilterParams};
    ///
    /// let params = FilterParams {
    ///     plants: vec!["Tomato".to_string()],
    ///     ..Default::default()
    /// };
    /// let filter: LogFilter = (&params).into();
    /// assert!(filter.plants.matches("Tomato"));
    /// assert!(filter.sections.matches("anywhere"));
    /// ```
    fn from(params: &crate::params::FilterParams) -> Self {
        Self {
            range: DateRange::from_bounds(params.from, params.to),
            batch_keys: Selection::from_values(params.batch_keys.iter().cloned()),
            plants: Selection::from_values(params.plants.iter().cloned()),
            sections: Selection::from_values(params.sections.iter().cloned()),
        }
    }
}
