//! Log entry model definition and related functionality.

use jiff::{civil::Date, ToSpan};
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{
    coerce::{lenient_date, lenient_f64, null_as_default},
    Action,
};

/// Days between an entry and its suggested follow-up visit.
pub const DEFAULT_VISIT_INTERVAL_DAYS: i32 = 3;

/// Optional measurements taken during a visit.
///
/// A value of `0.0` is stored as given but counts as "no measurement" in every
/// derived view, see [`Metrics::height`] and [`Metrics::moisture`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Metrics {
    /// Plant height in centimetres
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_f64"
    )]
    pub height_cm: Option<f64>,

    /// Soil moisture as a percentage
    #[serde(
        rename = "moisture_%",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_f64"
    )]
    pub moisture_pct: Option<f64>,
}

impl Metrics {
    pub fn new(height_cm: Option<f64>, moisture_pct: Option<f64>) -> Self {
        Self {
            height_cm,
            moisture_pct,
        }
    }

    /// Height if an actual measurement was taken (present and non-zero).
    pub fn height(&self) -> Option<f64> {
        self.height_cm.filter(|v| *v != 0.0)
    }

    /// Moisture if an actual measurement was taken (present and non-zero).
    pub fn moisture(&self) -> Option<f64> {
        self.moisture_pct.filter(|v| *v != 0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.height().is_none() && self.moisture().is_none()
    }
}

/// One care event for a planting batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct LogEntry {
    /// Day the action happened
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub date: Date,

    /// Garden section the batch lives in
    #[serde(default, deserialize_with = "null_as_default")]
    pub section: String,

    /// Plant name, not required to exist in the inventory
    pub plant: String,

    /// Identifier grouping entries into one planting batch
    pub batch_key: String,

    /// What was done
    #[serde(default, deserialize_with = "null_as_default")]
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub action: Action,

    /// Optional measurements
    #[serde(default, deserialize_with = "null_as_default")]
    pub metrics: Metrics,

    /// Free-form notes
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,

    /// Advisory reminder for the next visit
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_date"
    )]
    #[cfg_attr(feature = "schema", schemars(with = "Option<String>"))]
    pub next_visit: Option<Date>,
}

impl LogEntry {
    /// Creates an entry with the default batch key, no metrics and the
    /// default follow-up visit.
    pub fn new(date: Date, plant: impl Into<String>, action: Action) -> Self {
        let plant = plant.into();
        Self {
            batch_key: default_batch_key(&plant, date),
            date,
            section: String::new(),
            plant,
            action,
            metrics: Metrics::default(),
            notes: String::new(),
            next_visit: Some(default_next_visit(date)),
        }
    }
}

/// Batch key used when the user does not pick one: `{plant}-Set-{date}`.
///
/// ```rust
/// use garden_core::models::default_batch_key;
///
/// let key = default_batch_key("Tomato", jiff::civil::date(2024, 5, 1));
/// assert_eq!(key, "Tomato-Set-2024-05-01");
/// ```
pub fn default_batch_key(plant: &str, date: Date) -> String {
    format!("{plant}-Set-{date}")
}

/// Suggested follow-up visit for an entry made on `date`.
pub fn default_next_visit(date: Date) -> Date {
    date.checked_add(DEFAULT_VISIT_INTERVAL_DAYS.days())
        .unwrap_or(date)
}

/// A log entry as held by the garden, carrying a session-local stable id.
///
/// The id is never persisted; it is reassigned whenever a document is loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredEntry {
    pub id: u64,
    pub entry: LogEntry,
}

/// A log entry paired with its current position in the log.
///
/// Produced by listings so that follow-up edits and deletes address the
/// record that was actually shown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexedEntry {
    /// Position in the log at the time of listing
    pub index: usize,
    /// Session-local stable id
    pub id: u64,
    pub entry: LogEntry,
}
