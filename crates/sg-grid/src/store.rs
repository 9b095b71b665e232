//! Committed shift text for one editing session.
//!
//! The store is created for a [`Roster`] and only ever holds entries for that
//! roster's employees. Absent entries read as the empty string.

use sg_core::{
    DayIndex, EmployeeId, FxHashMap, Roster, ShiftCategory, ShiftKey, fx_hash_map_with_capacity,
};
use tracing::debug;

use crate::error::GridError;

type WeekShifts = [Option<String>; DayIndex::COUNT];

/// Mapping from [`ShiftKey`] to committed shift text.
///
/// Internally one seven-slot row per roster employee, so an unknown employee
/// is simply a missing row.
///
/// # Examples
///
/// ```
/// use sg_core::{DayIndex, Roster};
/// use sg_grid::ShiftStore;
///
/// let mut store = ShiftStore::new(&Roster::default());
/// assert_eq!(store.get("1", DayIndex::FIRST), "");
///
/// store.set("1", DayIndex::FIRST, "OFF").unwrap();
/// assert_eq!(store.get("1", DayIndex::FIRST), "OFF");
/// assert!(store.set("99", DayIndex::FIRST, "OFF").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftStore {
    shifts: FxHashMap<EmployeeId, WeekShifts>,
}

impl ShiftStore {
    /// Creates an empty store for the roster's employees.
    #[must_use]
    pub fn new(roster: &Roster) -> Self {
        let mut shifts = fx_hash_map_with_capacity(roster.len());
        for employee in roster {
            shifts.insert(employee.employee_id.clone(), WeekShifts::default());
        }
        Self { shifts }
    }

    /// Returns `true` if the employee belongs to this store's roster.
    #[inline]
    #[must_use]
    pub fn contains_employee(&self, employee_id: &str) -> bool {
        self.shifts.contains_key(employee_id)
    }

    /// Committed text for a cell, or `""` when nothing is stored.
    #[must_use]
    pub fn get(&self, employee_id: &str, day: DayIndex) -> &str {
        self.shifts
            .get(employee_id)
            .and_then(|week| week[day.as_usize()].as_deref())
            .unwrap_or("")
    }

    /// Committed text for a [`ShiftKey`].
    #[inline]
    #[must_use]
    pub fn get_key(&self, key: &ShiftKey) -> &str {
        self.get(key.employee_id.as_str(), key.day)
    }

    /// Upserts a cell and returns the previous value.
    ///
    /// No length limit is applied here; input limits belong to the edit
    /// session.
    pub fn set(
        &mut self,
        employee_id: &str,
        day: DayIndex,
        text: impl Into<String>,
    ) -> Result<Option<String>, GridError> {
        let week = self
            .shifts
            .get_mut(employee_id)
            .ok_or_else(|| GridError::unknown_employee(employee_id))?;
        Ok(week[day.as_usize()].replace(text.into()))
    }

    /// Applies a batch of writes, skipping unknown employees.
    ///
    /// Keys not in the batch keep their values. Returns the number of entries
    /// applied.
    pub fn bulk_replace<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = (ShiftKey, String)>,
    {
        let mut applied = 0;
        for (key, text) in entries {
            match self.set(key.employee_id.as_str(), key.day, text) {
                Ok(_) => applied += 1,
                Err(error) => debug!(key = %key, %error, "Skipping bulk entry"),
            }
        }
        applied
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shifts
            .values()
            .map(|week| week.iter().filter(|slot| slot.is_some()).count())
            .sum()
    }

    /// Returns `true` if no cell has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates stored entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (ShiftKey, &str)> + '_ {
        self.shifts.iter().flat_map(|(id, week)| {
            DayIndex::ALL.into_iter().filter_map(move |day| {
                week[day.as_usize()]
                    .as_deref()
                    .map(|text| (ShiftKey::new(id.clone(), day), text))
            })
        })
    }

    /// Category of the committed text of a cell.
    #[must_use]
    pub fn category(&self, employee_id: &str, day: DayIndex) -> ShiftCategory {
        ShiftCategory::classify(self.get(employee_id, day))
    }
}
