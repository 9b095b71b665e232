//! Error types for the sg-grid crate.

use sg_core::{EmployeeId, WeekOutOfRange};

/// Errors raised by grid mutations.
///
/// Store writes and week changes can fail. Focus moves and edit sessions
/// have no error states.
///
/// # Examples
///
/// ```
/// use sg_grid::GridError;
///
/// let error = GridError::unknown_employee("42");
/// assert_eq!(error.to_string(), "unknown employee '42'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum GridError {
    /// The employee id is not part of the store's roster.
    #[error("unknown employee '{0}'")]
    UnknownEmployee(EmployeeId),

    /// The requested week runs past the calendar's limits.
    #[error(transparent)]
    WeekOutOfRange(#[from] WeekOutOfRange),
}

impl GridError {
    /// Creates a new [`GridError::UnknownEmployee`] error.
    #[inline]
    pub fn unknown_employee(id: impl Into<EmployeeId>) -> Self {
        Self::UnknownEmployee(id.into())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_week_out_of_range_is_transparent() {
        let error = GridError::from(WeekOutOfRange(NaiveDate::MAX));
        assert_eq!(
            error.to_string(),
            WeekOutOfRange(NaiveDate::MAX).to_string()
        );
    }
}
