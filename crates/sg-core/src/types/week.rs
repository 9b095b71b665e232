//! Week anchors and per-day calendar dates.
//!
//! A schedule week starts on Saturday. [`WeekAnchor`] holds that Saturday and
//! the six dates after it, and derives the column headers and range label of
//! the visible week. Weeks that would leave chrono's calendar are refused with
//! [`WeekOutOfRange`].

use std::fmt;

use chrono::{Datelike, Days, NaiveDate};

use super::day::DayIndex;
use crate::error::WeekOutOfRange;

/// The Saturday that starts the visible week, with the six days after it.
///
/// Every constructor checks that the whole week exists in the calendar, so
/// date lookups on an anchor never fail.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use sg_core::{DayIndex, WeekAnchor};
///
/// // Wednesday, 17 January 2024
/// let wednesday = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
/// let anchor = WeekAnchor::containing(wednesday).unwrap();
///
/// assert_eq!(anchor.date(), NaiveDate::from_ymd_opt(2024, 1, 13).unwrap());
/// assert_eq!(anchor.column_label(DayIndex::FIRST), "Saturday 01/13");
/// assert_eq!(anchor.label(), "Jan 13 — Jan 19, 2024");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeekAnchor {
    dates: [NaiveDate; DayIndex::COUNT],
}

impl WeekAnchor {
    fn from_saturday(saturday: NaiveDate) -> Result<Self, WeekOutOfRange> {
        let mut dates = [saturday; DayIndex::COUNT];
        for (offset, date) in (0u64..).zip(dates.iter_mut()).skip(1) {
            *date = saturday
                .checked_add_days(Days::new(offset))
                .ok_or(WeekOutOfRange(saturday))?;
        }
        Ok(Self { dates })
    }

    /// The anchor of the week containing `date`.
    ///
    /// # Errors
    ///
    /// Returns [`WeekOutOfRange`] if that week runs past the calendar's limits.
    pub fn containing(date: NaiveDate) -> Result<Self, WeekOutOfRange> {
        date.checked_sub_days(Days::new(days_since_saturday(date)))
            .ok_or(WeekOutOfRange(date))
            .and_then(Self::from_saturday)
    }

    /// The anchor Saturday.
    #[inline]
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.dates[0]
    }

    /// Calendar date of a day in this week.
    #[inline]
    #[must_use]
    pub const fn date_for(self, day: DayIndex) -> NaiveDate {
        self.dates[day.as_usize()]
    }

    /// The seven dates of this week, Saturday first.
    #[inline]
    #[must_use]
    pub const fn dates(self) -> [NaiveDate; DayIndex::COUNT] {
        self.dates
    }

    /// The Friday that ends this week.
    #[must_use]
    pub const fn end(self) -> NaiveDate {
        self.date_for(DayIndex::LAST)
    }

    /// The week before this one.
    ///
    /// # Errors
    ///
    /// Returns [`WeekOutOfRange`] at the start of the calendar.
    pub fn previous(self) -> Result<Self, WeekOutOfRange> {
        let saturday = self.date();
        saturday
            .checked_sub_days(Days::new(7))
            .ok_or(WeekOutOfRange(saturday))
            .and_then(Self::from_saturday)
    }

    /// The week after this one.
    ///
    /// # Errors
    ///
    /// Returns [`WeekOutOfRange`] at the end of the calendar.
    pub fn next(self) -> Result<Self, WeekOutOfRange> {
        let saturday = self.date();
        saturday
            .checked_add_days(Days::new(7))
            .ok_or(WeekOutOfRange(saturday))
            .and_then(Self::from_saturday)
    }

    /// `MM/DD` of a day in this week.
    #[must_use]
    pub fn short_date(self, day: DayIndex) -> String {
        self.date_for(day).format("%m/%d").to_string()
    }

    /// Column header for a day: `"<DayName> <MM/DD>"`.
    #[must_use]
    pub fn column_label(self, day: DayIndex) -> String {
        format!("{} {}", day.name(), self.short_date(day))
    }

    /// Range label for the toolbar, e.g. `"Jan 13 — Jan 19, 2024"`.
    #[must_use]
    pub fn label(self) -> String {
        format!(
            "{} — {}",
            self.date().format("%b %d"),
            self.end().format("%b %d, %Y")
        )
    }
}

/// Days elapsed since the most recent Saturday (0 on a Saturday).
fn days_since_saturday(date: NaiveDate) -> u64 {
    // Monday = 0 .. Saturday = 5, Sunday = 6
    u64::from((date.weekday().num_days_from_monday() + 2) % 7)
}

impl fmt::Display for WeekAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date().format("%Y-%m-%d"))
    }
}
