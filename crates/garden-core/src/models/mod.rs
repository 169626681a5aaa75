//! Data models for the garden tracker.
//!
//! This module contains the domain models: the plant [`Inventory`], care
//! [`LogEntry`] records grouped into batches by their `batch_key`, and the
//! [`Layout`] of garden [`Section`]s. Display implementations live in
//! [`crate::display::models`] so that the models stay free of presentation
//! concerns.
//!
//! A batch is never stored. It is the set of entries sharing a `batch_key`,
//! and its state at a date D is its last entry dated on or before D (see
//! [`crate::views`]).
//!
//! # Examples
//!
//! ```rust
//! use garden_core::models::{Action, LogEntry, Metrics};
//! use jiff::civil::date;
//!
//! let mut entry = LogEntry::new(date(2024, 5, 1), "Tomato", Action::Sown);
//! entry.metrics = Metrics::new(Some(2.0), None);
//!
//! assert_eq!(entry.batch_key, "Tomato-Set-2024-05-01");
//! assert_eq!(entry.next_visit, Some(date(2024, 5, 4)));
//! assert_eq!(entry.metrics.height(), Some(2.0));
//! ```

pub mod action;
pub(crate) mod coerce;
pub mod entry;
pub mod filters;
pub mod inventory;
pub mod layout;
pub mod summary;


pub use action::Action;
pub use entry::{
    default_batch_key, default_next_visit, IndexedEntry, LogEntry, Metrics, StoredEntry,
    DEFAULT_VISIT_INTERVAL_DAYS,
};
pub use filters::{DateRange, LogFilter, Selection, ALL_SENTINEL};
pub use inventory::{Category, Inventory};
pub use layout::{Cell, Layout, Section, DEFAULT_COLS, DEFAULT_ROWS, MAX_GRID_SIDE};
pub use summary::{BatchOverview, MetricSummary};
