//! Builder for resolving and preparing the data file.

use std::path::{Path, PathBuf};

use super::DocumentStore;
use crate::error::{GardenError, Result};

/// Builder for [`DocumentStore`] instances.
#[derive(Debug, Clone, Default)]
pub struct StoreBuilder {
    data_path: Option<PathBuf>,
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self { data_path: None }
    }

    /// Sets a custom data file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/garden/garden.json` or
    /// `~/.local/share/garden/garden.json`
    pub fn with_data_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.data_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Resolves the path and creates its parent directories.
    ///
    /// The data file itself is not created until the first save.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::XdgDirectory` if no default location can be
    /// determined, or `GardenError::FileSystem` if the parent directory
    /// cannot be created.
    pub fn build(self) -> Result<DocumentStore> {
        let path = match self.data_path {
            Some(path) => path,
            None => Self::default_data_path()?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| GardenError::file_system(parent, e))?;
        }

        Ok(DocumentStore::new(path))
    }

    fn default_data_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("garden")
            .place_data_file("garden.json")
            .map_err(|e| GardenError::XdgDirectory(e.to_string()))
    }
}
