//! Day offsets within a schedule week.
//!
//! A schedule week runs Saturday through Friday. [`DayIndex`] is the offset
//! of a day from the week's Saturday anchor.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InvalidDayIndex;

/// Full day names, indexed by [`DayIndex`].
const DAY_NAMES: [&str; DayIndex::COUNT] = [
    "Saturday",
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
];

/// Offset of a day from the week anchor: 0 = Saturday … 6 = Friday.
///
/// The inner value is private so a `DayIndex` is always in range.
///
/// # Examples
///
/// ```
/// use sg_core::DayIndex;
///
/// let day = DayIndex::new(2).unwrap();
/// assert_eq!(day.name(), "Monday");
/// assert!(DayIndex::new(7).is_none());
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayIndex(u8);

impl DayIndex {
    /// Number of days in a schedule week.
    pub const COUNT: usize = 7;

    /// The first day of the week (Saturday).
    pub const FIRST: Self = Self(0);

    /// The last day of the week (Friday).
    pub const LAST: Self = Self(6);

    /// Every day of the week, Saturday first.
    pub const ALL: [Self; Self::COUNT] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
    ];

    /// Creates a day index, returning `None` when `value > 6`.
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::LAST.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the raw offset.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the offset as a `usize`, for indexing per-day arrays.
    #[inline]
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// The previous day, clamped at Saturday.
    #[inline]
    #[must_use]
    pub const fn saturating_prev(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    /// The next day, clamped at Friday.
    #[inline]
    #[must_use]
    pub const fn saturating_next(self) -> Self {
        if self.0 >= Self::LAST.0 {
            Self::LAST
        } else {
            Self(self.0 + 1)
        }
    }

    /// Full English day name.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        DAY_NAMES[self.0 as usize]
    }

    /// Three-letter day name for narrow columns.
    #[must_use]
    pub fn short_name(self) -> &'static str {
        let name = self.name();
        name.get(..3).unwrap_or(name)
    }
}

impl TryFrom<u8> for DayIndex {
    type Error = InvalidDayIndex;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidDayIndex(value))
    }
}

impl From<DayIndex> for u8 {
    #[inline]
    fn from(day: DayIndex) -> Self {
        day.0
    }
}

impl fmt::Display for DayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_index_bounds() {
        assert_eq!(DayIndex::new(0), Some(DayIndex::FIRST));
        assert_eq!(DayIndex::new(6), Some(DayIndex::LAST));
        assert_eq!(DayIndex::new(7), None);
        assert_eq!(DayIndex::try_from(200), Err(InvalidDayIndex(200)));
    }

    #[test]
    fn test_day_names_start_on_saturday() {
        let names: Vec<_> = DayIndex::ALL.iter().map(|d| d.name()).collect();
        assert_eq!(
            names,
            [
                "Saturday",
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday"
            ]
        );
    }

    #[test]
    fn test_short_names() {
        assert_eq!(DayIndex::FIRST.short_name(), "Sat");
        assert_eq!(DayIndex::LAST.short_name(), "Fri");
    }

    #[test]
    fn test_saturating_steps_clamp() {
        assert_eq!(DayIndex::FIRST.saturating_prev(), DayIndex::FIRST);
        assert_eq!(DayIndex::LAST.saturating_next(), DayIndex::LAST);
        assert_eq!(DayIndex::ALL[3].saturating_next(), DayIndex::ALL[4]);
        assert_eq!(DayIndex::ALL[3].saturating_prev(), DayIndex::ALL[2]);
    }

    #[test]
    fn test_day_index_serde() {
        assert_eq!(serde_json::to_string(&DayIndex::ALL[4]).unwrap(), "4");
        let day: DayIndex = serde_json::from_str("6").unwrap();
        assert_eq!(day, DayIndex::LAST);
        assert!(serde_json::from_str::<DayIndex>("7").is_err());
    }
}
