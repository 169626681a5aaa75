//! Layout operations for the Garden.

use log::{debug, warn};

use super::Garden;
use crate::{
    error::{GardenError, Result},
    models::{Cell, Section, DEFAULT_COLS, DEFAULT_ROWS, MAX_GRID_SIDE},
    params::CellRef,
};

impl Garden {
    /// Creates an empty `rows x cols` section unless one with that name exists.
    ///
    /// Returns whether a section was created.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::InvalidInput` if `name` is empty or a dimension
    /// is outside `1..=MAX_GRID_SIDE`.
    pub fn ensure_section(&mut self, name: &str, rows: usize, cols: usize) -> Result<bool> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GardenError::invalid_input("section")
                .with_reason("Section name must not be empty"));
        }
        check_dimensions(rows, cols)?;
        if self.layout.contains(name) {
            return Ok(false);
        }
        self.layout.insert(name, Section::empty(rows, cols));
        debug!("Created section {name} ({rows}x{cols})");
        Ok(true)
    }

    /// [`Garden::ensure_section`] with the default 3x3 grid.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::InvalidInput` if `name` is empty.
    pub fn ensure_default_section(&mut self, name: &str) -> Result<bool> {
        self.ensure_section(name, DEFAULT_ROWS, DEFAULT_COLS)
    }

    /// Replaces a section's grid with an empty `rows x cols` grid.
    ///
    /// This is destructive: every batch assignment in the section is
    /// discarded, even when the dimensions do not change.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::InvalidInput` if a dimension is outside
    /// `1..=MAX_GRID_SIDE`, or `GardenError::SectionNotFound` if the section
    /// does not exist.
    pub fn resize(&mut self, name: &str, rows: usize, cols: usize) -> Result<()> {
        check_dimensions(rows, cols)?;
        let section = self.section_mut(name)?;
        let discarded = section.batch_keys().count();
        *section = Section::empty(rows, cols);
        if discarded > 0 {
            warn!("Resizing {name} discarded {discarded} batch assignments");
        }
        debug!("Resized section {name} to {rows}x{cols}");
        Ok(())
    }

    /// Removes a section, returning it.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::SectionNotFound` if the section does not exist.
    pub fn remove_section(&mut self, name: &str) -> Result<Section> {
        let removed = self
            .layout
            .remove(name)
            .ok_or_else(|| GardenError::SectionNotFound {
                name: name.to_string(),
            })?;
        debug!("Removed section {name}");
        Ok(removed)
    }

    /// The named section.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::SectionNotFound` if the section does not exist.
    pub fn section(&self, name: &str) -> Result<&Section> {
        self.layout
            .get(name)
            .ok_or_else(|| GardenError::SectionNotFound {
                name: name.to_string(),
            })
    }

    /// Checks that a cell reference points inside an existing section.
    ///
    /// Callers holding coordinates from user input use this before
    /// [`Garden::set_cell`] or [`Garden::get_cell`], which treat a bad
    /// coordinate as a bug.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::SectionNotFound` or `GardenError::CellOutOfRange`.
    pub fn check_cell(&self, cell: &CellRef) -> Result<()> {
        let section = self.section(&cell.section)?;
        if section.contains(cell.row, cell.col) {
            Ok(())
        } else {
            Err(GardenError::CellOutOfRange {
                section: cell.section.clone(),
                row: cell.row,
                col: cell.col,
                rows: section.rows(),
                cols: section.cols(),
            })
        }
    }

    /// The batch keys planted in a cell.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::SectionNotFound` if the section does not exist.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the section grid.
    pub fn get_cell(&self, cell: &CellRef) -> Result<&Cell> {
        Ok(self.section(&cell.section)?.cell(cell.row, cell.col))
    }

    /// Replaces the batch keys planted in a cell.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::SectionNotFound` if the section does not exist.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the section grid.
    pub fn set_cell<I, S>(&mut self, cell: &CellRef, batch_keys: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let new_cell = Cell::from_keys(batch_keys);
        self.warn_unknown_keys(new_cell.keys());
        let section = self.section_mut(&cell.section)?;
        *section.cell_mut(cell.row, cell.col) = new_cell;
        debug!("Set cell ({}, {}) of {}", cell.row, cell.col, cell.section);
        Ok(())
    }

    /// Adds one batch key to a cell; returns false if it was already there.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::SectionNotFound` if the section does not exist.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the section grid.
    pub fn assign(&mut self, cell: &CellRef, batch_key: &str) -> Result<bool> {
        self.warn_unknown_keys(&[batch_key.to_string()]);
        let section = self.section_mut(&cell.section)?;
        Ok(section.cell_mut(cell.row, cell.col).insert(batch_key))
    }

    /// Removes one batch key from a cell; returns whether it was there.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::SectionNotFound` if the section does not exist.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the section grid.
    pub fn unassign(&mut self, cell: &CellRef, batch_key: &str) -> Result<bool> {
        let section = self.section_mut(&cell.section)?;
        Ok(section.cell_mut(cell.row, cell.col).remove(batch_key))
    }

    fn section_mut(&mut self, name: &str) -> Result<&mut Section> {
        self.layout
            .get_mut(name)
            .ok_or_else(|| GardenError::SectionNotFound {
                name: name.to_string(),
            })
    }

    fn warn_unknown_keys(&self, keys: &[String]) {
        for key in keys {
            if !self.entries().any(|entry| &entry.batch_key == key) {
                warn!("Batch {key} has no log entries yet");
            }
        }
    }
}

fn check_dimensions(rows: usize, cols: usize) -> Result<()> {
    for (field, value) in [("rows", rows), ("cols", cols)] {
        if !(1..=MAX_GRID_SIDE).contains(&value) {
            return Err(GardenError::invalid_input(field)
                .with_reason(format!("must be between 1 and {MAX_GRID_SIDE}, got {value}")));
        }
    }
    Ok(())
}
