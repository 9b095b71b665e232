//! Export request options.
//!
//! These mirror the options an export request can carry. Only CSV output of
//! the current week is functionally defined; the export pipeline rejects the
//! other combinations instead of guessing a serialization.

use serde::{Deserialize, Serialize};

/// Requested output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Comma-separated values (`.csv`).
    #[default]
    Csv,
    /// Excel workbook (`.xlsx`).
    Excel,
    /// PDF document (`.pdf`).
    Pdf,
}

impl ExportFormat {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Excel => "Excel",
            Self::Pdf => "PDF",
        }
    }

    /// Cycles to the next format (for option pickers).
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Csv => Self::Excel,
            Self::Excel => Self::Pdf,
            Self::Pdf => Self::Csv,
        }
    }
}

/// Which weeks an export should cover.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateRange {
    /// Only the visible week.
    #[default]
    Current,
    /// Every week.
    All,
    /// A caller-chosen range.
    Custom,
}

impl DateRange {
    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Current => "Current week",
            Self::All => "All weeks",
            Self::Custom => "Custom range",
        }
    }

    /// Cycles to the next range (for option pickers).
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Current => Self::All,
            Self::All => Self::Custom,
            Self::Custom => Self::Current,
        }
    }
}

/// Options accepted by an export request.
///
/// # Examples
///
/// ```
/// use sg_core::{DateRange, ExportFormat, ExportOptions};
///
/// let options = ExportOptions::default();
/// assert_eq!(options.format, ExportFormat::Csv);
/// assert!(options.include_header);
/// assert!(!options.include_audit);
/// assert_eq!(options.date_range, DateRange::Current);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Output format.
    pub format: ExportFormat,

    /// Whether the header row is written.
    pub include_header: bool,

    /// Whether change history is appended.
    pub include_audit: bool,

    /// Weeks to cover.
    pub date_range: DateRange,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_header: true,
            include_audit: false,
            date_range: DateRange::Current,
        }
    }
}
