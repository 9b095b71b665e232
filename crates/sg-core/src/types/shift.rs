//! Shift keys and derived cell categories.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::day::DayIndex;
use super::employee::EmployeeId;

/// Identity of one grid cell: an employee on a day of the visible week.
///
/// # Examples
///
/// ```
/// use sg_core::{DayIndex, ShiftKey};
///
/// let key = ShiftKey::new("1", DayIndex::FIRST);
/// assert_eq!(key.to_string(), "1-0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShiftKey {
    /// The employee this cell belongs to.
    pub employee_id: EmployeeId,

    /// The day offset within the week.
    pub day: DayIndex,
}

impl ShiftKey {
    /// Creates a key.
    #[must_use]
    pub fn new(employee_id: impl Into<EmployeeId>, day: DayIndex) -> Self {
        Self {
            employee_id: employee_id.into(),
            day,
        }
    }
}

impl fmt::Display for ShiftKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.employee_id, self.day.get())
    }
}

/// Display category of a cell, derived from its text.
///
/// Never stored; always recomputed from whichever text is current
/// (the draft while editing, the committed value otherwise).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftCategory {
    /// The day-off marker (`OFF`, any case, surrounding whitespace ignored).
    Off,
    /// Any other non-blank text.
    Shift,
    /// Empty or whitespace-only: unscheduled.
    #[default]
    Empty,
}

impl ShiftCategory {
    /// The day-off marker, as written on export and in the input hint.
    pub const OFF_MARKER: &'static str = "OFF";

    /// Classifies shift text.
    ///
    /// # Examples
    ///
    /// ```
    /// use sg_core::ShiftCategory;
    ///
    /// assert_eq!(ShiftCategory::classify(" off "), ShiftCategory::Off);
    /// assert_eq!(ShiftCategory::classify("7AM-3PM"), ShiftCategory::Shift);
    /// assert_eq!(ShiftCategory::classify("   "), ShiftCategory::Empty);
    /// ```
    #[must_use]
    pub fn classify(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            Self::Empty
        } else if trimmed.eq_ignore_ascii_case(Self::OFF_MARKER) {
            Self::Off
        } else {
            Self::Shift
        }
    }

    /// Human-readable label for legends.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Off => "OFF shifts",
            Self::Shift => "Active shifts",
            Self::Empty => "Empty",
        }
    }
}
