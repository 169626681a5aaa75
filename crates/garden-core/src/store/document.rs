//! The persisted JSON document.

use std::collections::{BTreeMap, BTreeSet};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Session;
use crate::{
    display::BatchPalette,
    error::{GardenError, Result, ResultExt},
    garden::Garden,
    models::{coerce::null_as_default, Inventory, Layout, LogEntry},
};

/// Whole-garden export with fixed top-level keys.
///
/// Every key is optional on import; a missing or `null` key yields an empty
/// value. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct GardenDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub inventory: Inventory,
    #[serde(default, deserialize_with = "null_as_default")]
    pub logs: Vec<LogEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub layout: Layout,
    /// Display colors of the batches, keyed by batch key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_colors: Option<BTreeMap<String, String>>,
}

impl GardenDocument {
    /// Snapshot of `garden`, with colors for exactly the batches referenced by
    /// the log or the layout.
    pub fn export(garden: &Garden, palette: &mut BatchPalette) -> Self {
        let (inventory, logs, layout) = garden.to_parts();

        let mut referenced: BTreeSet<&str> = logs.iter().map(|e| e.batch_key.as_str()).collect();
        for (_, section) in layout.iter() {
            referenced.extend(section.batch_keys());
        }
        palette.retain_keys(&referenced);
        palette.assign_all(referenced);

        Self {
            batch_colors: Some(palette.as_map().clone()),
            inventory,
            logs,
            layout,
        }
    }

    /// Parses a document.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::MalformedDocument` if the text is not JSON, the
    /// top level is not an object, or a known key has the wrong shape.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).with_context("Invalid JSON")?;
        if !value.is_object() {
            return Err(GardenError::malformed(format!(
                "top level must be a JSON object, found {}",
                kind_of(&value)
            )));
        }
        serde_json::from_value(value).with_context("Invalid garden document")
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::Serialization` if encoding fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Turns the document into a live session, assigning fresh entry ids.
    pub fn into_session(self) -> Session {
        Session {
            garden: Garden::from_parts(self.inventory, self.logs, self.layout),
            palette: BatchPalette::from_map(self.batch_colors.unwrap_or_default()),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
