//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper formats its items as markdown and prints a short
//! "No ... found." line when there is nothing to show.

use std::{collections::BTreeMap, fmt, ops::Index};

use jiff::civil::Date;

use crate::{
    models::{BatchOverview, IndexedEntry, LogEntry, MetricSummary},
    views::{CellSnapshot, GanttBar, Reminder},
};

/// Newtype wrapper for displaying log entries with their positions.
///
/// # Examples
///
/// ```rust
/// use garden_core::{
///     display::LogEntries,
///     models::{Action, IndexedEntry, LogEntry},
/// };
/// use jiff::civil::date;
///
/// let entry = LogEntry::new(date(2024, 5, 1), "Tomato", Action::Sown);
/// let entries = LogEntries(vec![IndexedEntry { index: 0, id: 1, entry }]);
/// assert!(entries.to_string().contains("[0] 2024-05-01 Tomato (Sown)"));
///
/// assert_eq!(LogEntries(vec![]).to_string(), "No log entries found.\n");
/// ```
pub struct LogEntries(pub Vec<IndexedEntry>);

impl LogEntries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&IndexedEntry> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IndexedEntry> {
        self.0.iter()
    }
}

impl Index<usize> for LogEntries {
    type Output = IndexedEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for LogEntries {
    type Item = IndexedEntry;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a LogEntries {
    type Item = &'a IndexedEntry;
    type IntoIter = std::slice::Iter<'a, IndexedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for LogEntries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No log entries found.")
        } else {
            for entry in &self.0 {
                write!(f, "{entry}")?;
            }
            Ok(())
        }
    }
}

/// All entries of one batch, oldest first.
pub struct BatchTimeline {
    pub batch_key: String,
    pub color: String,
    pub entries: Vec<LogEntry>,
}

impl fmt::Display for BatchTimeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return writeln!(f, "No log entries found for batch '{}'.", self.batch_key);
        }
        writeln!(f, "## Timeline: {} `{}`", self.batch_key, self.color)?;
        writeln!(f)?;
        for entry in &self.entries {
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

/// Filtered entries together with their metric averages.
pub struct FilteredReport {
    pub entries: Vec<LogEntry>,
    pub summary: MetricSummary,
}

impl fmt::Display for FilteredReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return writeln!(f, "No log entries found.");
        }
        writeln!(f, "## Summary")?;
        writeln!(f)?;
        write!(f, "{}", self.summary)?;
        writeln!(f)?;
        writeln!(f, "## Entries")?;
        writeln!(f)?;
        for entry in &self.entries {
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

/// Gantt bars rendered as a markdown table.
pub struct GanttChart {
    pub bars: Vec<GanttBar>,
    pub colors: BTreeMap<String, String>,
}

impl GanttChart {
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }
}

impl fmt::Display for GanttChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bars.is_empty() {
            return writeln!(f, "No log entries found.");
        }
        writeln!(f, "| Batch | Color | Action | Start | End | Days |")?;
        writeln!(f, "|:-|:-|:-|:-|:-|-:|")?;
        for bar in &self.bars {
            let color = self.colors.get(&bar.batch_key).map_or("", String::as_str);
            writeln!(
                f,
                "| {} | {} | {} | {} | {} | {} |",
                bar.batch_key,
                color,
                bar.entry.action,
                bar.start,
                bar.end,
                bar.days()
            )?;
        }
        Ok(())
    }
}

/// One cell of a [`SectionView`].
pub struct CellView {
    /// Zero-based row
    pub row: usize,
    /// Zero-based column
    pub col: usize,
    /// Assigned batch keys with their colors, in cell order
    pub batches: Vec<(String, String)>,
    pub snapshot: CellSnapshot,
}

/// A section grid with every non-empty cell aggregated as of a date.
///
/// Cells are shown with one-based coordinates.
pub struct SectionView {
    pub name: String,
    pub rows: usize,
    pub cols: usize,
    pub as_of: Date,
    /// Non-empty cells in row-major order
    pub cells: Vec<CellView>,
}

impl fmt::Display for SectionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} as of {}", self.name, self.as_of)?;
        writeln!(f)?;
        writeln!(f, "- **Grid**: {}x{}", self.rows, self.cols)?;
        writeln!(f)?;
        if self.cells.is_empty() {
            return writeln!(f, "No batches assigned.");
        }
        for cell in &self.cells {
            writeln!(f, "### Row {}, Col {}", cell.row + 1, cell.col + 1)?;
            writeln!(f)?;
            for (batch_key, color) in &cell.batches {
                writeln!(f, "- {batch_key} `{color}`")?;
            }
            writeln!(f)?;
            if cell.snapshot.is_empty() {
                writeln!(f, "Nothing logged yet.")?;
            } else {
                for line in cell.snapshot.label().lines() {
                    writeln!(f, "> {line}")?;
                }
                writeln!(f)?;
                let summary = &cell.snapshot.summary;
                if summary.has_height() {
                    writeln!(f, "- **Average height**: {:.1} cm", summary.avg_height_cm)?;
                }
                if summary.has_moisture() {
                    writeln!(f, "- **Average moisture**: {:.1}%", summary.avg_moisture_pct)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// One line per batch with its color.
pub struct BatchOverviews {
    pub batches: Vec<BatchOverview>,
    pub colors: BTreeMap<String, String>,
}

impl BatchOverviews {
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.batches.len()
    }
}

impl fmt::Display for BatchOverviews {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.batches.is_empty() {
            return writeln!(f, "No batches found.");
        }
        for batch in &self.batches {
            match self.colors.get(&batch.batch_key) {
                Some(color) => writeln!(f, "- {batch} `{color}`")?,
                None => writeln!(f, "- {batch}")?,
            }
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying due reminders.
pub struct Reminders(pub Vec<Reminder>);

impl Reminders {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Reminder> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Reminders {
    type Item = &'a Reminder;
    type IntoIter = std::slice::Iter<'a, Reminder>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Reminders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No reminders due.")
        } else {
            for reminder in &self.0 {
                writeln!(f, "- {reminder}")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::{
        models::{Action, Cell, Metrics},
        views::{cell_snapshot, gantt},
    };

    fn measured(day: i8, height: f64) -> LogEntry {
        let mut entry = LogEntry::new(date(2024, 5, day), "Tomato", Action::Measured);
        entry.batch_key = "T1".to_string();
        entry.metrics = Metrics::new(Some(height), None);
        entry
    }

    #[test]
    fn test_log_entries_display() {
        let entries = LogEntries(vec![
            IndexedEntry {
                index: 1,
                id: 2,
                entry: measured(2, 4.0),
            },
            IndexedEntry {
                index: 0,
                id: 1,
                entry: measured(1, 2.0),
            },
        ]);
        let output = entries.to_string();
        let newer = output.find("[1] 2024-05-02").unwrap();
        let older = output.find("[0] 2024-05-01").unwrap();
        assert!(newer < older);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, 2);
    }

    #[test]
    fn test_filtered_report_display() {
        let entries = vec![measured(1, 2.0), measured(10, 15.0)];
        let report = FilteredReport {
            summary: MetricSummary::from_entries(&entries),
            entries,
        };
        let output = report.to_string();
        assert!(output.contains("- **Average height**: 8.5 cm (2 measurements)"));
        assert!(output.contains("## Entries"));

        let empty = FilteredReport {
            entries: vec![],
            summary: MetricSummary::default(),
        };
        assert_eq!(empty.to_string(), "No log entries found.\n");
    }

    #[test]
    fn test_gantt_chart_table() {
        let entries = vec![measured(1, 2.0), measured(10, 15.0)];
        let chart = GanttChart {
            bars: gantt(&entries),
            colors: BTreeMap::from([("T1".to_string(), "#abcdef".to_string())]),
        };
        let output = chart.to_string();
        assert!(output.starts_with("| Batch | Color |"));
        assert!(output.contains("| T1 | #abcdef | Measured | 2024-05-01 | 2024-05-10 | 9 |"));
        assert!(output.contains("| 2024-05-10 | 2024-05-11 | 1 |"));
    }

    #[test]
    fn test_section_view_display() {
        let entries = vec![measured(1, 2.0), measured(10, 15.0)];
        let cell = Cell::from_keys(["T1"]);
        let view = SectionView {
            name: "Backyard".to_string(),
            rows: 2,
            cols: 2,
            as_of: date(2024, 5, 5),
            cells: vec![CellView {
                row: 1,
                col: 0,
                batches: vec![("T1".to_string(), "#abcdef".to_string())],
                snapshot: cell_snapshot(&entries, &cell, date(2024, 5, 5)),
            }],
        };
        let output = view.to_string();
        assert!(output.contains("## Backyard as of 2024-05-05"));
        assert!(output.contains("### Row 2, Col 1"));
        assert!(output.contains("- T1 `#abcdef`"));
        assert!(output.contains("> T1: Measured on 2024-05-01 | 2 cm"));
        assert!(output.contains("- **Average height**: 2.0 cm"));
    }

    #[test]
    fn test_empty_collections() {
        assert_eq!(Reminders(vec![]).to_string(), "No reminders due.\n");
        let overviews = BatchOverviews {
            batches: vec![],
            colors: BTreeMap::new(),
        };
        assert_eq!(overviews.to_string(), "No batches found.\n");
    }
}
