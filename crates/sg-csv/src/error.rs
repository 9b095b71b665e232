//! Error types for the sg-csv crate.
//!
//! Import problems are reported as a list of [`ValidationError`]s so a
//! rejected file can show every issue at once. None of these errors end the
//! editing session; the import flow returns to file selection.

use std::fmt;

/// Category of an import validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ValidationCause {
    /// The file name does not have an accepted extension.
    UnsupportedExtension,
    /// Fewer than a header row and one data row.
    TooFewRows,
    /// The header row has fewer than eight columns.
    TooFewColumns,
    /// A required employee name is absent from column 0 of the data rows.
    MissingEmployee,
    /// The file could not be read as UTF-8 text.
    ReadFailed,
}

/// One reason an import was rejected.
///
/// # Examples
///
/// ```
/// use sg_csv::{ValidationCause, ValidationError};
///
/// let error = ValidationError::missing_employee("Frank Gmelin");
/// assert_eq!(error.cause, ValidationCause::MissingEmployee);
/// assert!(error.message.contains("Frank Gmelin"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Category.
    pub cause: ValidationCause,
    /// Human-readable description.
    pub message: String,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(cause: ValidationCause, message: impl Into<String>) -> Self {
        Self {
            cause,
            message: message.into(),
        }
    }

    /// The file name lacks an accepted extension.
    pub fn unsupported_extension(file_name: &str, extensions: &[String]) -> Self {
        Self::new(
            ValidationCause::UnsupportedExtension,
            format!(
                "'{file_name}' is not a CSV file (expected {})",
                extensions.join(", ")
            ),
        )
    }

    /// Fewer than two non-blank rows.
    pub fn too_few_rows() -> Self {
        Self::new(
            ValidationCause::TooFewRows,
            "CSV must have at least a header row and one data row",
        )
    }

    /// Header row narrower than name plus seven days.
    pub fn too_few_columns(found: usize) -> Self {
        Self::new(
            ValidationCause::TooFewColumns,
            format!("CSV must have at least 8 columns (Name + 7 days), found {found}"),
        )
    }

    /// A required employee has no row.
    pub fn missing_employee(name: &str) -> Self {
        Self::new(
            ValidationCause::MissingEmployee,
            format!("Missing required employee: {name}"),
        )
    }

    /// The file could not be read.
    pub fn read_failed(reason: impl fmt::Display) -> Self {
        Self::new(
            ValidationCause::ReadFailed,
            format!("Could not read file: {reason}"),
        )
    }
}

/// Errors from the import pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ImportError {
    /// The file failed validation; the store was not touched.
    #[error("import rejected: {}", join_messages(.0))]
    Rejected(Vec<ValidationError>),

    /// Confirm was requested without a validated preview.
    #[error("no validated import to confirm")]
    NotStaged,

    /// A file is still being read.
    #[error("an import file is still being read")]
    Busy,
}

impl ImportError {
    /// The validation errors of a rejected import (empty for other variants).
    #[must_use]
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Rejected(errors) => errors,
            Self::NotStaged | Self::Busy => &[],
        }
    }

    /// Returns `true` if retrying with another file can succeed.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors from the export pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ExportError {
    /// An option value with no defined output.
    #[error("unsupported export option {option} = {value}")]
    Unsupported {
        /// Option name.
        option: &'static str,
        /// Requested value.
        value: String,
    },
}

impl ExportError {
    /// Creates a new [`ExportError::Unsupported`] error.
    #[inline]
    pub fn unsupported(option: &'static str, value: impl Into<String>) -> Self {
        Self::Unsupported {
            option,
            value: value.into(),
        }
    }
}
