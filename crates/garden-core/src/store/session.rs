//! One working session: the garden plus its display palette.

use log::info;

use super::GardenDocument;
use crate::{display::BatchPalette, error::Result, garden::Garden};

/// The garden and the colors handed out for it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub garden: Garden,
    pub palette: BatchPalette,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole state with the parsed document.
    ///
    /// The document is parsed completely before anything changes, so a
    /// failed import leaves the session as it was.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::MalformedDocument` for invalid JSON or shape.
    pub fn import_json(&mut self, json: &str) -> Result<()> {
        let imported = GardenDocument::from_json(json)?.into_session();
        info!(
            "Imported {} log entries, {} plants and {} sections",
            imported.garden.len(),
            imported.garden.inventory().len(),
            imported.garden.layout().len()
        );
        *self = imported;
        Ok(())
    }

    /// The whole state as a document.
    pub fn export_document(&mut self) -> GardenDocument {
        GardenDocument::export(&self.garden, &mut self.palette)
    }

    /// The whole state as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::Serialization` if encoding fails.
    pub fn export_json(&mut self) -> Result<String> {
        self.export_document().to_json_pretty()
    }
}
