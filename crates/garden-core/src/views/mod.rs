//! Derived, read-only views over the log.
//!
//! Every function here is pure: it takes log entries (and, for cells, a
//! [`Cell`](crate::models::Cell)) and computes a result without touching the
//! garden. [`Garden`](crate::Garden) wraps them for display in its view
//! handlers.

pub mod as_of;
pub mod gantt;
pub mod reminders;
pub mod timeline;

pub use as_of::{cell_snapshot, latest_as_of, latest_by_batch, BatchState, CellSnapshot};
pub use gantt::{gantt, GanttBar};
pub use reminders::{reminders, Reminder};
pub use timeline::{batch_overview, batch_timeline, group_by_batch};
