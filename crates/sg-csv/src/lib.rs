//! CSV import and export for the shiftgrid schedule editor.
//!
//! - [`import`] - parsing, validation, staging, and the asynchronous
//!   [`ImportFlow`] state machine that feeds a [`sg_grid::GridSession`]
//! - [`export`] - serializing the visible week to a CSV [`ExportArtifact`]
//!
//! Both directions share one dialect: comma separated, one row per line,
//! double-quoted cells with `""` escapes. Exported files import back unchanged.

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod error;
pub mod export;
pub mod import;

pub use error::{ExportError, ImportError, ValidationCause, ValidationError};
pub use export::{ExportArtifact, export_week};
pub use import::{
    ImportFlow, ImportRow, ImportState, ImportSummary, ImportTicket, StagedImport, parse_csv,
    stage_import, validate_rows,
};
