//! Domain types for the shiftgrid schedule editor.
//!
//! # Module Organization
//!
//! - [`day`] - Day offsets within a week (Saturday..Friday)
//! - [`employee`] - Employees, ids, and the ordered roster
//! - [`export`] - Export request options
//! - [`shift`] - Shift keys and derived cell categories
//! - [`week`] - Week anchors and per-day calendar dates
//!
//! All public types are re-exported here and at the crate root:
//!
//! ```
//! use sg_core::{DayIndex, Roster, ShiftKey, WeekAnchor};
//! ```

pub mod day;
pub mod employee;
pub mod export;
pub mod shift;
pub mod week;

pub use day::DayIndex;
pub use employee::{Employee, EmployeeId, Roster};
pub use export::{DateRange, ExportFormat, ExportOptions};
pub use shift::{ShiftCategory, ShiftKey};
pub use week::WeekAnchor;
