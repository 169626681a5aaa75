//! Display wrappers, result types and batch colors.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds the wrappers that give collections, derived views and
//! operation results their markdown form. The CLI hands the resulting text to
//! its terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Models, Views  │    │ Wrappers, Result│    │    Markdown     │
//! │ (LogEntry, ...) │───▶│ Types, Palette  │───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: wrappers for lists and derived views
//! - [`results`]: create, update and delete results for log entries
//! - [`status`]: one-line operation status messages
//! - [`colors`]: deterministic batch colors and the session palette
//! - [`models`]: Display implementations for domain models
//!
//! # Examples
//!
//! ```rust
//! use garden_core::display::{BatchPalette, OperationStatus};
//!
//! let mut palette = BatchPalette::new();
//! let color = palette.color_for("Tomato-Set-2024-05-01").to_string();
//! assert_eq!(palette.get("Tomato-Set-2024-05-01"), Some(color.as_str()));
//!
//! let status = OperationStatus::success("Saved");
//! assert_eq!(status.to_string(), "Success: Saved\n");
//! ```

pub mod collections;
pub mod colors;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{
    BatchOverviews, BatchTimeline, CellView, FilteredReport, GanttChart, LogEntries, Reminders,
    SectionView,
};
pub use colors::{batch_color, BatchPalette};
pub use results::{entry_changes, CreateResult, DeleteResult, UpdateResult};
pub use status::{OperationStatus, StatusKind};
