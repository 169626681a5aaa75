//! Summary types computed over sets of log entries.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{Action, LogEntry};

/// Average measurements over a set of entries.
///
/// Only entries that actually carry a measurement (present and non-zero) count
/// towards each average. With no measurements the average is `0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    /// Number of entries considered
    pub entries: usize,
    /// Mean height over entries with a height measurement
    pub avg_height_cm: f64,
    /// Number of height measurements
    pub height_samples: usize,
    /// Mean moisture over entries with a moisture measurement
    pub avg_moisture_pct: f64,
    /// Number of moisture measurements
    pub moisture_samples: usize,
}

impl MetricSummary {
    /// Summarize the given entries.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a LogEntry>,
    {
        let mut summary = Self::default();
        let mut height_total = 0.0;
        let mut moisture_total = 0.0;

        for entry in entries {
            summary.entries += 1;
            if let Some(height) = entry.metrics.height() {
                height_total += height;
                summary.height_samples += 1;
            }
            if let Some(moisture) = entry.metrics.moisture() {
                moisture_total += moisture;
                summary.moisture_samples += 1;
            }
        }

        summary.avg_height_cm = mean(height_total, summary.height_samples);
        summary.avg_moisture_pct = mean(moisture_total, summary.moisture_samples);
        summary
    }

    pub fn has_height(&self) -> bool {
        self.height_samples > 0
    }

    pub fn has_moisture(&self) -> bool {
        self.moisture_samples > 0
    }
}

fn mean(total: f64, samples: usize) -> f64 {
    if samples == 0 {
        0.0
    } else {
        total / samples as f64
    }
}

/// Overview of one planting batch across the whole log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchOverview {
    /// Batch key
    pub batch_key: String,
    /// Plant of the most recent entry
    pub plant: String,
    /// Section of the most recent entry
    pub section: String,
    /// Date of the earliest entry
    pub first_date: Date,
    /// Date of the most recent entry
    pub last_date: Date,
    /// Number of entries in the batch
    pub entries: usize,
    /// Action of the most recent entry
    pub latest_action: Action,
}
