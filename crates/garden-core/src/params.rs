//! Parameter structures for garden operations
//!
//! These structures are shared across interfaces (the CLI today) without
//! framework-specific derives. Interface layers define their own argument
//! types (for example with clap) and convert into these with `From`, which
//! keeps the core free of CLI concerns:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │     Garden      │
//! │  (clap derives) │───▶│ (minimal deps)  │───▶│   operations    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! JSON schema generation is available behind the `schema` feature.

use jiff::civil::Date;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{GardenError, Result},
    models::{default_batch_key, default_next_visit, Action, Category, LogEntry, Metrics},
};

/// Parameters for adding a plant to the inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddPlant {
    /// Category to file the plant under
    pub category: Category,
    /// Plant name; an empty name is ignored
    pub name: String,
}

/// Parameters for appending a log entry.
///
/// Missing optional values fall back to the entry form defaults: batch key
/// `{plant}-Set-{date}` and a follow-up visit three days later.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AppendEntry {
    /// Day the action happened
    #[cfg_attr(feature = "schema", schemars(with = "String"))]
    pub date: Date,
    /// Garden section
    #[serde(default)]
    pub section: String,
    /// Plant name (required)
    pub plant: String,
    /// Batch key; defaults to `{plant}-Set-{date}`
    pub batch_key: Option<String>,
    /// Action name; the six well-known actions match case-insensitively
    pub action: String,
    /// Height in centimetres (>= 0)
    pub height_cm: Option<f64>,
    /// Soil moisture in percent (0 to 100)
    pub moisture_pct: Option<f64>,
    /// Free-form notes
    pub notes: Option<String>,
    /// Follow-up visit; defaults to three days after `date`
    #[cfg_attr(feature = "schema", schemars(with = "Option<String>"))]
    pub next_visit: Option<Date>,
}

impl AppendEntry {
    /// Validate the parameters and build the log entry they describe.
    ///
    /// # Errors
    ///
    /// * `GardenError::InvalidInput` - When a metric is outside its range
    ///
    /// Empty plant names and batch keys are rejected later by the log
    /// itself, so entries built by other means get the same treatment.
    pub fn into_entry(self) -> Result<LogEntry> {
        validate_metrics(self.height_cm, self.moisture_pct)?;

        let batch_key = match self.batch_key {
            Some(key) if !key.trim().is_empty() => key.trim().to_string(),
            _ => default_batch_key(self.plant.trim(), self.date),
        };

        Ok(LogEntry {
            date: self.date,
            section: self.section.trim().to_string(),
            plant: self.plant.trim().to_string(),
            batch_key,
            action: Action::from_input(&self.action),
            metrics: Metrics::new(self.height_cm, self.moisture_pct),
            notes: self.notes.unwrap_or_default(),
            next_visit: Some(self.next_visit.unwrap_or_else(|| default_next_visit(self.date))),
        })
    }
}

/// Parameters for updating an existing log entry.
///
/// Only the given fields change; the merged entry then replaces the stored
/// one wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateEntry {
    /// Position of the entry in the log (required)
    pub index: usize,
    #[cfg_attr(feature = "schema", schemars(with = "Option<String>"))]
    pub date: Option<Date>,
    pub section: Option<String>,
    pub plant: Option<String>,
    pub batch_key: Option<String>,
    pub action: Option<String>,
    pub height_cm: Option<f64>,
    pub moisture_pct: Option<f64>,
    pub notes: Option<String>,
    #[cfg_attr(feature = "schema", schemars(with = "Option<String>"))]
    pub next_visit: Option<Date>,
}

impl UpdateEntry {
    /// Overlay the requested changes on `current`, returning the new entry.
    ///
    /// # Errors
    ///
    /// * `GardenError::InvalidInput` - When a metric is outside its range
    ///
    /// # Examples
    ///
    /// ```rust
    /// use garden_core::{models::{Action, LogEntry}, params::UpdateEntry};
    /// use jiff::civil::date;
    ///
    /// let current = LogEntry::new(date(2024, 5, 1), "Tomato", Action::Sown);
    /// let params = UpdateEntry {
    ///     action: Some("watered".to_string()),
    ///     height_cm: Some(3.5),
    ///     ..Default::default()
    /// };
    /// let updated = params.apply_to(&current)?;
    /// assert_eq!(updated.action, Action::Watered);
    /// assert_eq!(updated.metrics.height_cm, Some(3.5));
    /// assert_eq!(updated.batch_key, current.batch_key);
    /// # Ok::<(), garden_core::GardenError>(())
    /// ```
    pub fn apply_to(&self, current: &LogEntry) -> Result<LogEntry> {
        validate_metrics(self.height_cm, self.moisture_pct)?;

        let mut updated = current.clone();
        if let Some(date) = self.date {
            updated.date = date;
        }
        if let Some(section) = &self.section {
            updated.section = section.trim().to_string();
        }
        if let Some(plant) = &self.plant {
            updated.plant = plant.trim().to_string();
        }
        if let Some(batch_key) = &self.batch_key {
            updated.batch_key = batch_key.trim().to_string();
        }
        if let Some(action) = &self.action {
            updated.action = Action::from_input(action);
        }
        if let Some(height) = self.height_cm {
            updated.metrics.height_cm = Some(height);
        }
        if let Some(moisture) = self.moisture_pct {
            updated.metrics.moisture_pct = Some(moisture);
        }
        if let Some(notes) = &self.notes {
            updated.notes = notes.clone();
        }
        if let Some(next_visit) = self.next_visit {
            updated.next_visit = Some(next_visit);
        }
        Ok(updated)
    }

    /// Whether the update would change anything at all.
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.section.is_none()
            && self.plant.is_none()
            && self.batch_key.is_none()
            && self.action.is_none()
            && self.height_cm.is_none()
            && self.moisture_pct.is_none()
            && self.notes.is_none()
            && self.next_visit.is_none()
    }
}

/// Parameters for filtering the log in reports.
///
/// Empty lists, or lists containing `"All"`, do not filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct FilterParams {
    /// First day to include
    #[cfg_attr(feature = "schema", schemars(with = "Option<String>"))]
    pub from: Option<Date>,
    /// Last day to include
    #[cfg_attr(feature = "schema", schemars(with = "Option<String>"))]
    pub to: Option<Date>,
    #[serde(default)]
    pub batch_keys: Vec<String>,
    #[serde(default)]
    pub plants: Vec<String>,
    #[serde(default)]
    pub sections: Vec<String>,
}

/// Parameters addressing one cell of a layout section (0-indexed).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CellRef {
    pub section: String,
    pub row: usize,
    pub col: usize,
}

fn validate_metrics(height_cm: Option<f64>, moisture_pct: Option<f64>) -> Result<()> {
    if let Some(height) = height_cm {
        if !height.is_finite() || height < 0.0 {
            return Err(GardenError::invalid_input("height_cm")
                .with_reason(format!("Height must be a non-negative number, got {height}")));
        }
    }
    if let Some(moisture) = moisture_pct {
        if !(0.0..=100.0).contains(&moisture) {
            return Err(GardenError::invalid_input("moisture_%")
                .with_reason(format!("Moisture must be between 0 and 100, got {moisture}")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn append_params() -> AppendEntry {
        AppendEntry {
            date: date(2024, 5, 1),
            section: "Indoor".to_string(),
            plant: "Tomato".to_string(),
            action: "Sown".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_append_entry_defaults() {
        let entry = append_params().into_entry().unwrap();
        assert_eq!(entry.batch_key, "Tomato-Set-2024-05-01");
        assert_eq!(entry.next_visit, Some(date(2024, 5, 4)));
        assert_eq!(entry.action, Action::Sown);
        assert_eq!(entry.metrics, Metrics::default());
        assert_eq!(entry.notes, "");
    }

    #[test]
    fn test_append_entry_blank_batch_key_uses_default() {
        let mut params = append_params();
        params.batch_key = Some("   ".to_string());
        let entry = params.into_entry().unwrap();
        assert_eq!(entry.batch_key, "Tomato-Set-2024-05-01");
    }

    #[test]
    fn test_append_entry_keeps_explicit_values() {
        let mut params = append_params();
        params.batch_key = Some("tomatoes-spring".to_string());
        params.action = "pinched suckers".to_string();
        params.next_visit = Some(date(2024, 5, 20));
        params.height_cm = Some(4.0);
        let entry = params.into_entry().unwrap();
        assert_eq!(entry.batch_key, "tomatoes-spring");
        assert_eq!(entry.action, Action::Other("pinched suckers".to_string()));
        assert_eq!(entry.next_visit, Some(date(2024, 5, 20)));
        assert_eq!(entry.metrics.height_cm, Some(4.0));
    }

    #[test]
    fn test_append_entry_rejects_out_of_range_metrics() {
        let mut params = append_params();
        params.moisture_pct = Some(140.0);
        match params.into_entry().unwrap_err() {
            GardenError::InvalidInput { field, reason } => {
                assert_eq!(field, "moisture_%");
                assert!(reason.contains("between 0 and 100"));
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }

        let mut params = append_params();
        params.height_cm = Some(-1.0);
        assert!(params.into_entry().is_err());
    }

    #[test]
    fn test_update_entry_overlays_only_given_fields() {
        let current = append_params().into_entry().unwrap();
        let params = UpdateEntry {
            index: 0,
            notes: Some("first true leaves".to_string()),
            moisture_pct: Some(55.0),
            ..Default::default()
        };
        let updated = params.apply_to(&current).unwrap();
        assert_eq!(updated.notes, "first true leaves");
        assert_eq!(updated.metrics.moisture_pct, Some(55.0));
        assert_eq!(updated.date, current.date);
        assert_eq!(updated.batch_key, current.batch_key);
        assert_eq!(updated.action, current.action);
    }

    #[test]
    fn test_update_entry_is_empty() {
        assert!(UpdateEntry::default().is_empty());
        let params = UpdateEntry {
            plant: Some("Basil".to_string()),
            ..Default::default()
        };
        assert!(!params.is_empty());
    }
}
