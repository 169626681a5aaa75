//! Garden layout: named sections laid out as grids of cells.

use std::collections::BTreeMap;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// Rows of a section created without explicit dimensions.
pub const DEFAULT_ROWS: usize = 3;
/// Columns of a section created without explicit dimensions.
pub const DEFAULT_COLS: usize = 3;
/// Largest number of rows or columns a section may have.
pub const MAX_GRID_SIDE: usize = 10;

/// One grid position, holding the batch keys planted there.
///
/// Keys are unique within a cell and keep their first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(transparent)]
pub struct Cell(Vec<String>);

impl Cell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cell from keys, dropping empty strings and duplicates.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cell = Self::new();
        for key in keys {
            cell.insert(key);
        }
        cell
    }

    /// Adds a batch key; returns false if it was empty or already present.
    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        if key.is_empty() || self.contains(&key) {
            return false;
        }
        self.0.push(key);
        true
    }

    /// Removes a batch key; returns whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|k| k != key);
        before != self.0.len()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|k| k == key)
    }

    pub fn keys(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCell {
    // Older documents stored a single plant name per cell, "" meaning empty.
    Legacy(Option<String>),
    Keys(Vec<String>),
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawCell::deserialize(deserializer)? {
            RawCell::Legacy(None) => Cell::new(),
            RawCell::Legacy(Some(key)) => Cell::from_keys([key]),
            RawCell::Keys(keys) => Cell::from_keys(keys),
        })
    }
}

#[derive(Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
struct RawSection {
    rows: usize,
    cols: usize,
    #[serde(default)]
    grid: Option<Vec<Vec<Cell>>>,
}

/// A named `rows x cols` grid of cells.
///
/// The grid always has exactly `rows` rows of `cols` cells. The only way to
/// change the dimensions is to replace the section with [`Section::empty`],
/// which discards every assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(try_from = "RawSection")]
pub struct Section {
    rows: usize,
    cols: usize,
    grid: Vec<Vec<Cell>>,
}

impl TryFrom<RawSection> for Section {
    type Error = String;

    fn try_from(raw: RawSection) -> Result<Self, Self::Error> {
        if raw.rows > MAX_GRID_SIDE || raw.cols > MAX_GRID_SIDE {
            return Err(format!(
                "section is {}x{} but grids are at most {MAX_GRID_SIDE}x{MAX_GRID_SIDE}",
                raw.rows, raw.cols
            ));
        }
        let Some(grid) = raw.grid else {
            return Ok(Section::empty(raw.rows, raw.cols));
        };
        if grid.len() != raw.rows {
            return Err(format!(
                "grid has {} rows but the section declares {}",
                grid.len(),
                raw.rows
            ));
        }
        if let Some((r, row)) = grid.iter().enumerate().find(|(_, row)| row.len() != raw.cols) {
            return Err(format!(
                "grid row {r} has {} cells but the section declares {} columns",
                row.len(),
                raw.cols
            ));
        }
        Ok(Section {
            rows: raw.rows,
            cols: raw.cols,
            grid,
        })
    }
}

impl Section {
    /// A grid of `rows x cols` empty cells.
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            grid: vec![vec![Cell::new(); cols]; rows],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `(row, col)` lies inside the grid.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// The cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        assert!(
            self.contains(row, col),
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        &self.grid[row][col]
    }

    /// Mutable access to the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the grid.
    pub fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        assert!(
            self.contains(row, col),
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        &mut self.grid[row][col]
    }

    /// Rows of cells, top to bottom.
    pub fn grid(&self) -> &[Vec<Cell>] {
        &self.grid
    }

    /// Every batch key referenced anywhere in the grid, with duplicates.
    pub fn batch_keys(&self) -> impl Iterator<Item = &str> {
        self.grid
            .iter()
            .flatten()
            .flat_map(|cell| cell.keys().iter().map(String::as_str))
    }

    pub fn is_empty(&self) -> bool {
        self.grid.iter().flatten().all(Cell::is_empty)
    }
}

/// All sections of the garden, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(transparent)]
pub struct Layout {
    sections: BTreeMap<String, Section>,
}

impl Layout {
    pub fn get(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.get_mut(name)
    }

    pub(crate) fn insert(&mut self, name: impl Into<String>, section: Section) -> Option<Section> {
        self.sections.insert(name.into(), section)
    }

    pub(crate) fn remove(&mut self, name: &str) -> Option<Section> {
        self.sections.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Section names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(name, section)| (name.as_str(), section))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
