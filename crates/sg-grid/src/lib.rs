//! Grid state for the shiftgrid schedule editor.
//!
//! This crate owns everything that changes while a schedule is being edited:
//!
//! - [`ShiftStore`] - committed shift text keyed by employee and day
//! - [`CellEditSession`] - the single in-progress cell edit (draft vs committed)
//! - [`next_focus`] - pure keyboard navigation over the grid
//! - [`GridSession`] - one editing session tying roster, week, store, and focus together
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use sg_core::{Roster, WeekAnchor};
//! use sg_grid::{GridSession, NavCommand};
//!
//! let anchor = WeekAnchor::containing(NaiveDate::from_ymd_opt(2024, 1, 13).unwrap()).unwrap();
//! let mut session = GridSession::new(Roster::default(), anchor);
//!
//! session.navigate(NavCommand::Enter);
//! session.set_draft("7AM-3PM");
//! session.navigate(NavCommand::Advance);
//!
//! assert_eq!(session.store().get("1", sg_core::DayIndex::FIRST), "7AM-3PM");
//! assert_eq!(session.focus().day.get(), 1);
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod error;
pub mod grid;
pub mod navigator;
pub mod session;
pub mod store;

pub use error::GridError;
pub use grid::GridSession;
pub use navigator::{CellFocus, GridBounds, NavCommand, next_focus};
pub use session::{CellEditSession, CellView, CommitOutcome, EditState};
pub use store::ShiftStore;
