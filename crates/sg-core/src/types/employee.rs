//! Employees and the ordered roster.
//!
//! The roster is fixed for a session: it defines which rows the grid shows,
//! in which order, and which names an import may refer to.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::hash::{FxHashMap, fx_hash_map_with_capacity};

/// An opaque employee identifier.
///
/// Newtype over `String` so an id is never confused with a display name,
/// which is also a `String` and is what CSV rows carry.
///
/// # Examples
///
/// ```
/// use sg_core::EmployeeId;
///
/// let id = EmployeeId::from("1");
/// assert_eq!(id.as_str(), "1");
/// assert_eq!(id.to_string(), "1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Creates an id from any string-like value.
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EmployeeId {
    #[inline]
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for EmployeeId {
    #[inline]
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for EmployeeId {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmployeeId {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A schedulable employee.
///
/// # Examples
///
/// ```
/// use sg_core::Employee;
///
/// let employee = Employee::new("1", "Frank Gmelin", 1);
/// assert_eq!(employee.initials(), "FG");
/// assert!(employee.is_static);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier.
    pub employee_id: EmployeeId,

    /// Display name; CSV rows are matched against this exactly.
    pub name: String,

    /// Sort key for the grid row sequence.
    pub order: i32,

    /// Whether the row is pinned in the roster.
    #[serde(rename = "static", default = "default_static")]
    pub is_static: bool,
}

const fn default_static() -> bool {
    true
}

impl Employee {
    /// Creates a static employee.
    #[must_use]
    pub fn new(employee_id: impl Into<EmployeeId>, name: impl Into<String>, order: i32) -> Self {
        Self {
            employee_id: employee_id.into(),
            name: name.into(),
            order,
            is_static: true,
        }
    }

    /// Upper-case initials of each word in the name, as shown in the row badge.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// The fixed, ordered set of employees shown in the grid.
///
/// Construction validates that ids and names are unique and sorts by
/// [`Employee::order`] (stable, so equal orders keep their input sequence).
///
/// # Examples
///
/// ```
/// use sg_core::{Employee, Roster};
///
/// let roster = Roster::new(vec![
///     Employee::new("2", "Patrica Garden", 2),
///     Employee::new("1", "Frank Gmelin", 1),
/// ])
/// .unwrap();
///
/// assert_eq!(roster.get(0).map(|e| e.name.as_str()), Some("Frank Gmelin"));
/// assert_eq!(roster.index_of("2"), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    employees: Vec<Employee>,
    by_id: FxHashMap<EmployeeId, usize>,
    by_name: FxHashMap<String, usize>,
}

impl Roster {
    /// Builds a roster, rejecting duplicate ids or names.
    pub fn new(mut employees: Vec<Employee>) -> Result<Self, ConfigError> {
        employees.sort_by_key(|e| e.order);

        let mut by_id = fx_hash_map_with_capacity(employees.len());
        let mut by_name = fx_hash_map_with_capacity(employees.len());

        for (index, employee) in employees.iter().enumerate() {
            if by_id.insert(employee.employee_id.clone(), index).is_some() {
                return Err(ConfigError::DuplicateEmployeeId(
                    employee.employee_id.clone(),
                ));
            }
            if by_name.insert(employee.name.clone(), index).is_some() {
                return Err(ConfigError::DuplicateEmployeeName(employee.name.clone()));
            }
        }

        Ok(Self {
            employees,
            by_id,
            by_name,
        })
    }

    /// The roster used when no configuration overrides it.
    #[must_use]
    pub fn default_employees() -> Vec<Employee> {
        vec![
            Employee::new("1", "Frank Gmelin", 1),
            Employee::new("2", "Patrica Garden", 2),
            Employee::new("3", "Dawn Mitchell", 3),
            Employee::new("4", "Sarah Johnson", 4),
            Employee::new("5", "Mike Rodriguez", 5),
            Employee::new("6", "Lisa Chen", 6),
        ]
    }

    /// Number of employees (grid rows).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns `true` if the roster has no employees.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Employee at a row index.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Employee> {
        self.employees.get(index)
    }

    /// Iterates employees in row order.
    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.employees.iter()
    }

    /// Looks up an employee by id.
    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&Employee> {
        self.by_id.get(id).and_then(|&i| self.employees.get(i))
    }

    /// Looks up an employee by exact display name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Employee> {
        self.by_name.get(name).and_then(|&i| self.employees.get(i))
    }

    /// Row index of an employee id.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Returns `true` if the id belongs to this roster.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }
}

impl Default for Roster {
    fn default() -> Self {
        let employees = Self::default_employees();
        let by_id = employees
            .iter()
            .enumerate()
            .map(|(i, e)| (e.employee_id.clone(), i))
            .collect();
        let by_name = employees
            .iter()
            .enumerate()
            .map(|(i, e)| (e.name.clone(), i))
            .collect();
        Self {
            employees,
            by_id,
            by_name,
        }
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_sorts_by_order() {
        let roster = Roster::new(vec![
            Employee::new("b", "Second", 20),
            Employee::new("a", "First", 10),
            Employee::new("c", "Third", 30),
        ])
        .unwrap();

        let names: Vec<_> = roster.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["First", "Second", "Third"]);
        assert_eq!(roster.index_of("c"), Some(2));
    }

    #[test]
    fn test_roster_rejects_duplicate_id() {
        let err = Roster::new(vec![
            Employee::new("1", "Frank Gmelin", 1),
            Employee::new("1", "Someone Else", 2),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateEmployeeId(id) if id.as_str() == "1"));
    }

    #[test]
    fn test_roster_rejects_duplicate_name() {
        let err = Roster::new(vec![
            Employee::new("1", "Lisa Chen", 1),
            Employee::new("2", "Lisa Chen", 2),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateEmployeeName(_)));
    }

    #[test]
    fn test_roster_name_lookup_is_exact() {
        let roster = Roster::default();
        assert!(roster.by_name("Frank Gmelin").is_some());
        assert!(roster.by_name("frank gmelin").is_none());
        assert!(roster.by_name("Frank Gmelin ").is_none());
    }

    #[test]
    fn test_default_roster_matches_validated_roster() {
        let validated = Roster::new(Roster::default_employees()).unwrap();
        assert_eq!(validated, Roster::default());
        assert_eq!(validated.len(), 6);
    }

    #[test]
    fn test_initials() {
        assert_eq!(Employee::new("5", "Mike Rodriguez", 5).initials(), "MR");
        assert_eq!(Employee::new("9", "cher", 9).initials(), "C");
    }

    #[test]
    fn test_employee_serde_uses_static_key() {
        let json = r#"{"employee_id":"7","name":"Ana Ruiz","order":7,"static":false}"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.employee_id.as_str(), "7");
        assert!(!employee.is_static);

        let missing_static: Employee =
            serde_json::from_str(r#"{"employee_id":"8","name":"Bo Li","order":8}"#).unwrap();
        assert!(missing_static.is_static);
    }
}
