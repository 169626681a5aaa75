//! Handlers that return display wrappers for the Garden.

use jiff::civil::Date;

use super::Garden;
use crate::{
    display::{
        BatchOverviews, BatchPalette, BatchTimeline, CellView, CreateResult, DeleteResult,
        FilteredReport, GanttChart, LogEntries, Reminders, SectionView, UpdateResult,
    },
    error::{GardenError, Result},
    models::{IndexedEntry, LogEntry, LogFilter, MetricSummary},
    params::{AppendEntry, FilterParams, UpdateEntry},
    views,
};

impl Garden {
    /// Handle logging a new entry from form parameters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use garden_core::{params::AppendEntry, Garden};
    /// use jiff::civil::date;
    ///
    /// let mut garden = Garden::new();
    /// let params = AppendEntry {
    ///     date: date(2024, 5, 1),
    ///     plant: "Tomato".to_string(),
    ///     action: "sown".to_string(),
    ///     height_cm: Some(2.0),
    ///     ..AppendEntry::default()
    /// };
    /// let created = garden.log_entry(params)?;
    /// assert_eq!(created.resource.entry.batch_key, "Tomato-Set-2024-05-01");
    /// # Ok::<(), garden_core::GardenError>(())
    /// ```
    pub fn log_entry(&mut self, params: AppendEntry) -> Result<CreateResult<IndexedEntry>> {
        self.append_params(params).map(CreateResult::new)
    }

    /// Handle a partial update, reporting which fields changed.
    pub fn edit_entry(&mut self, params: &UpdateEntry) -> Result<UpdateResult<IndexedEntry>> {
        let before = self.current(params.index)?;
        let updated = self.update_params(params)?;
        Ok(UpdateResult::from_diff(&before, updated))
    }

    /// Handle replacing an entry with hand-edited JSON.
    pub fn edit_entry_json(
        &mut self,
        index: usize,
        json: &str,
    ) -> Result<UpdateResult<IndexedEntry>> {
        let before = self.current(index)?;
        let updated = self.update_from_json(index, json)?;
        Ok(UpdateResult::from_diff(&before, updated))
    }

    /// Handle deleting the entry at `index`.
    pub fn delete_entry(&mut self, index: usize) -> Result<DeleteResult<IndexedEntry>> {
        self.remove(index).map(DeleteResult::new)
    }

    /// The log newest-first, each entry labelled with its true position.
    pub fn log_listing(&self) -> LogEntries {
        LogEntries(self.list_reversed())
    }

    /// Timeline of one batch.
    pub fn timeline(&self, batch_key: &str, palette: &mut BatchPalette) -> BatchTimeline {
        BatchTimeline {
            batch_key: batch_key.to_string(),
            color: palette.color_for(batch_key).to_string(),
            entries: views::batch_timeline(self.entries(), batch_key),
        }
    }

    /// Entries matching the filter, oldest first, with metric averages.
    pub fn report(&self, params: &FilterParams) -> FilteredReport {
        let entries = LogFilter::from(params).apply(self.entries());
        FilteredReport {
            summary: MetricSummary::from_entries(&entries),
            entries,
        }
    }

    /// Gantt bars of the entries matching the filter.
    pub fn gantt_chart(&self, params: &FilterParams, palette: &mut BatchPalette) -> GanttChart {
        let entries = LogFilter::from(params).apply(self.entries());
        let bars = views::gantt(&entries);
        let colors = palette.subset(bars.iter().map(|bar| bar.batch_key.as_str()));
        GanttChart { bars, colors }
    }

    /// A section's non-empty cells, aggregated as of `as_of`.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::SectionNotFound` if the section does not exist.
    pub fn section_view(
        &self,
        name: &str,
        as_of: Date,
        palette: &mut BatchPalette,
    ) -> Result<SectionView> {
        let section = self.section(name)?;
        let latest = views::latest_by_batch(self.entries(), as_of);

        let mut cells = Vec::new();
        for (row, grid_row) in section.grid().iter().enumerate() {
            for (col, cell) in grid_row.iter().enumerate() {
                if cell.is_empty() {
                    continue;
                }
                let batches = cell
                    .keys()
                    .iter()
                    .map(|key| (key.clone(), palette.color_for(key).to_string()))
                    .collect();
                cells.push(CellView {
                    row,
                    col,
                    batches,
                    snapshot: views::CellSnapshot::from_latest(cell, &latest, as_of),
                });
            }
        }

        Ok(SectionView {
            name: name.to_string(),
            rows: section.rows(),
            cols: section.cols(),
            as_of,
            cells,
        })
    }

    /// One overview line per batch.
    pub fn batches(&self, palette: &mut BatchPalette) -> BatchOverviews {
        let batches = views::batch_overview(self.entries());
        let colors = palette.subset(batches.iter().map(|batch| batch.batch_key.as_str()));
        BatchOverviews { batches, colors }
    }

    /// Batches whose follow-up visit is due on or before `today`.
    pub fn due_reminders(&self, today: Date) -> Reminders {
        Reminders(views::reminders(self.entries(), today))
    }

    fn current(&self, index: usize) -> Result<LogEntry> {
        self.get(index)
            .cloned()
            .ok_or(GardenError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }
}
