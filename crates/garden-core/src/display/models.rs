//! Display implementations for domain models.
//!
//! Models render as markdown fragments; collection wrappers in
//! [`super::collections`] put headers and empty-state messages around them.

use std::fmt;

use crate::{
    models::{
        Action, BatchOverview, Category, IndexedEntry, Inventory, Layout, LogEntry, MetricSummary,
        Metrics, Section,
    },
    views::Reminder,
};

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.height(), self.moisture()) {
            (Some(height), Some(moisture)) => write!(f, "{height} cm, {moisture}% moisture"),
            (Some(height), None) => write!(f, "{height} cm"),
            (None, Some(moisture)) => write!(f, "{moisture}% moisture"),
            (None, None) => f.write_str("-"),
        }
    }
}

impl LogEntry {
    fn fmt_details(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "- **Batch**: {}", self.batch_key)?;
        if !self.section.is_empty() {
            writeln!(f, "- **Section**: {}", self.section)?;
        }
        if !self.metrics.is_empty() {
            writeln!(f, "- **Metrics**: {}", self.metrics)?;
        }
        if let Some(next_visit) = self.next_visit {
            writeln!(f, "- **Next visit**: {next_visit}")?;
        }
        if !self.notes.trim().is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.notes.trim())?;
        }
        writeln!(f)
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} {} ({})", self.date, self.plant, self.action)?;
        self.fmt_details(f)
    }
}

impl fmt::Display for IndexedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entry = &self.entry;
        writeln!(
            f,
            "### [{}] {} {} ({})",
            self.index, entry.date, entry.plant, entry.action
        )?;
        entry.fmt_details(f)
    }
}

impl fmt::Display for MetricSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **Entries**: {}", self.entries)?;
        if self.has_height() {
            writeln!(
                f,
                "- **Average height**: {:.1} cm ({} measurements)",
                self.avg_height_cm, self.height_samples
            )?;
        } else {
            writeln!(f, "- **Average height**: no measurements")?;
        }
        if self.has_moisture() {
            writeln!(
                f,
                "- **Average moisture**: {:.1}% ({} measurements)",
                self.avg_moisture_pct, self.moisture_samples
            )
        } else {
            writeln!(f, "- **Average moisture**: no measurements")
        }
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No plants found.");
        }
        for category in Category::ALL {
            let plants = self.list(category);
            if plants.is_empty() {
                continue;
            }
            writeln!(f, "## {} ({})", heading(category), plants.len())?;
            writeln!(f)?;
            for plant in plants {
                writeln!(f, "- {plant}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn heading(category: Category) -> &'static str {
    match category {
        Category::Vegetable => "Vegetables",
        Category::Fruit => "Fruits",
        Category::Green => "Greens",
        Category::Flower => "Flowers",
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let assigned = self.batch_keys().count();
        write!(f, "{}x{} grid", self.rows(), self.cols())?;
        match assigned {
            0 => write!(f, ", empty"),
            1 => write!(f, ", 1 batch assignment"),
            n => write!(f, ", {n} batch assignments"),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No sections found.");
        }
        for (name, section) in self.iter() {
            writeln!(f, "- **{name}**: {section}")?;
        }
        Ok(())
    }
}

impl fmt::Display for BatchOverview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "**{}** {} {} to {}, {} entries, latest: {}",
            self.batch_key, self.plant, self.first_date, self.last_date, self.entries,
            self.latest_action
        )?;
        if !self.section.is_empty() {
            write!(f, " in {}", self.section)?;
        }
        Ok(())
    }
}

impl fmt::Display for Reminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "**{}** ({}) due {}", self.batch_key, self.plant, self.due)?;
        if self.overdue_days > 0 {
            write!(f, ", {} days overdue", self.overdue_days)?;
        }
        write!(f, "; last {} on {}", self.last_action, self.last_date)?;
        if !self.section.is_empty() {
            write!(f, " in {}", self.section)?;
        }
        Ok(())
    }
}
