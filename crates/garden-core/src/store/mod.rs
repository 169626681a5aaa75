//! Persistence of the garden as a single JSON document.
//!
//! A command-line session loads the document, applies one operation and
//! saves it back. [`StoreBuilder`] resolves where the document lives,
//! [`DocumentStore`] reads and writes it, and [`GardenDocument`] is its
//! on-disk shape:
//!
//! ```json
//! {
//!   "inventory": {"vegetables": [], "fruits": [], "greens": [], "flowers": []},
//!   "logs": [{"date": "2024-05-01", "plant": "Tomato", "batch_key": "...", "...": "..."}],
//!   "layout": {"Backyard": {"rows": 3, "cols": 3, "grid": [[[]]]}},
//!   "batch_colors": {"Tomato-Set-2024-05-01": "#a3c4e9"}
//! }
//! ```

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::error::{GardenError, Result};

mod builder;
mod document;
mod session;


pub use builder::StoreBuilder;
pub use document::GardenDocument;
pub use session::Session;

/// Reads and writes the garden document at a fixed path.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the session, starting empty if the file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::FileSystem` if the file cannot be read, or
    /// `GardenError::MalformedDocument` if it does not parse.
    pub fn load(&self) -> Result<Session> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No garden at {}, starting empty", self.path.display());
                return Ok(Session::new());
            }
            Err(e) => return Err(GardenError::file_system(&self.path, e)),
        };
        let session = GardenDocument::from_json(&json)?.into_session();
        debug!(
            "Loaded {} log entries from {}",
            session.garden.len(),
            self.path.display()
        );
        Ok(session)
    }

    /// Saves the session, replacing the file in one step.
    ///
    /// The document is written to a sibling file first and then renamed over
    /// the target, so an interrupted save never leaves a truncated document.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::FileSystem` if writing fails, or
    /// `GardenError::Serialization` if encoding fails.
    pub fn save(&self, session: &mut Session) -> Result<()> {
        let json = session.export_json()?;
        let staging = self.staging_path();
        fs::write(&staging, json).map_err(|e| GardenError::file_system(&staging, e))?;
        fs::rename(&staging, &self.path).map_err(|e| GardenError::file_system(&self.path, e))?;
        info!("Saved {} log entries to {}", session.garden.len(), self.path.display());
        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
