//! Core library for the garden tracker.
//!
//! This crate holds everything except the command line: the plant inventory,
//! the care log grouped into planting batches, the section layout, the derived
//! views (timelines, Gantt intervals, as-of cell aggregation, reminders) and
//! whole-garden JSON import and export.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): plain data, serializable to the garden
//!   document
//! - **Derived Views** ([`views`]): pure functions over log entries
//! - **Display Wrappers** ([`display`]): markdown formatting, result types and
//!   batch colors
//! - **Terminal Rendering**: done by the CLI's terminal renderer
//!
//! # Quick Start
//!
//! ```rust
//! use garden_core::{params::AppendEntry, Session};
//! use jiff::civil::date;
//!
//! let mut session = Session::new();
//! session.garden.log_entry(AppendEntry {
//!     date: date(2024, 5, 1),
//!     plant: "Tomato".to_string(),
//!     action: "Sown".to_string(),
//!     height_cm: Some(2.0),
//!     ..AppendEntry::default()
//! })?;
//!
//! let json = session.export_json()?;
//! let mut restored = Session::new();
//! restored.import_json(&json)?;
//! assert_eq!(restored.garden.len(), 1);
//! # Ok::<(), garden_core::GardenError>(())
//! ```

pub mod display;
pub mod error;
pub mod garden;
pub mod models;
pub mod params;
pub mod store;
pub mod views;

// Re-export commonly used types
pub use display::{
    BatchPalette, CreateResult, DeleteResult, LogEntries, OperationStatus, UpdateResult,
};
pub use error::{GardenError, Result};
pub use garden::Garden;
pub use models::{
    Action, Category, Cell, IndexedEntry, Inventory, Layout, LogEntry, LogFilter, Metrics,
    MetricSummary, Section,
};
pub use params::{AddPlant, AppendEntry, CellRef, FilterParams, UpdateEntry};
pub use store::{DocumentStore, GardenDocument, Session, StoreBuilder};
