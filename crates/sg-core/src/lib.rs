//! Core types, errors, and utilities for the shiftgrid schedule editor.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - Error types for configuration loading and validation
//! - Configuration structures ([`Config`] and its sections)
//! - Domain types ([`Employee`], [`Roster`], [`DayIndex`], [`WeekAnchor`],
//!   [`ShiftKey`], [`ShiftCategory`], [`ExportOptions`])
//! - The `FxHashMap` alias used for id and name lookups

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod hash;
pub mod types;

pub use config::{ColorScheme, Config, EditConfig, ExportConfig, ImportConfig, TuiConfig};
pub use error::{ConfigError, InvalidDayIndex, WeekOutOfRange};
pub use hash::{FxHashMap, fx_hash_map, fx_hash_map_with_capacity};
pub use types::{
    DateRange, DayIndex, Employee, EmployeeId, ExportFormat, ExportOptions, Roster,
    ShiftCategory, ShiftKey, WeekAnchor,
};
