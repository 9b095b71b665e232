//! Error types for the sg-core crate.
//!
//! This module provides the [`ConfigError`] type for configuration-related errors
//! that can occur across the workspace, [`InvalidDayIndex`] for out-of-range
//! day offsets, and [`WeekOutOfRange`] for weeks past the calendar's limits.

use chrono::NaiveDate;

use crate::types::EmployeeId;

/// Errors that can occur during configuration loading and validation.
///
/// This error type covers roster validation, option validation, and file
/// reading or parsing failures.
///
/// # Examples
///
/// ```
/// use sg_core::{ConfigError, EmployeeId};
///
/// let error = ConfigError::DuplicateEmployeeId(EmployeeId::from("7"));
/// assert!(error.to_string().contains("'7'"));
/// ```
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A configuration option has an invalid value.
    #[error("invalid configuration option '{option}': {reason}")]
    InvalidOption {
        /// The name of the invalid option.
        option: String,
        /// Explanation of why the option is invalid.
        reason: String,
    },

    /// Two roster entries share an employee id.
    #[error("duplicate employee id '{0}' in roster")]
    DuplicateEmployeeId(EmployeeId),

    /// Two roster entries share a display name.
    ///
    /// Import matches rows to employees by name, so names must be unique.
    #[error("duplicate employee name '{0}' in roster")]
    DuplicateEmployeeName(String),

    /// An I/O error occurred while reading configuration.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    /// Creates a new [`ConfigError::InvalidOption`] error.
    #[must_use]
    pub fn invalid_option(option: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            option: option.into(),
            reason: reason.into(),
        }
    }
}

/// A day offset outside `0..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("day index {0} is out of range (expected 0..=6)")]
pub struct InvalidDayIndex(pub u8);

/// A week that would start or end outside the representable calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("no schedule week can be built around {0}")]
pub struct WeekOutOfRange(pub NaiveDate);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_option_display() {
        let error = ConfigError::invalid_option("edit.max_cell_chars", "must be positive");
        let msg = error.to_string();
        assert!(msg.contains("edit.max_cell_chars"));
        assert!(msg.contains("must be positive"));
    }

    #[test]
    fn test_duplicate_name_display() {
        let error = ConfigError::DuplicateEmployeeName("Lisa Chen".to_owned());
        assert_eq!(
            error.to_string(),
            "duplicate employee name 'Lisa Chen' in roster"
        );
    }

    #[test]
    fn test_invalid_day_index_display() {
        assert_eq!(
            InvalidDayIndex(9).to_string(),
            "day index 9 is out of range (expected 0..=6)"
        );
    }

    #[test]
    fn test_week_out_of_range_names_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 13).unwrap();
        assert!(WeekOutOfRange(date).to_string().contains("2024-01-13"));
    }
}
