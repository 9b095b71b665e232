//! The in-progress cell edit.
//!
//! At most one cell is edited at a time. While editing, the draft lives here
//! and the store still holds the committed value; the two only meet on
//! [`CellEditSession::commit`].

use std::mem;

use sg_core::{EditConfig, Employee, ShiftCategory, ShiftKey, WeekAnchor};
use tracing::{debug, warn};

use crate::store::ShiftStore;

/// Edit state of the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    /// No cell is being edited.
    #[default]
    Idle,
    /// One cell is being edited.
    Editing {
        /// The cell under edit.
        key: ShiftKey,
        /// Uncommitted text.
        draft: String,
        /// Committed value when the edit started.
        original: String,
    },
}

/// Result of committing a draft to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitOutcome {
    /// The committed cell.
    pub key: ShiftKey,
    /// Value before the commit (`None` if the cell was never written).
    pub previous: Option<String>,
    /// Value written.
    pub value: String,
}

impl CommitOutcome {
    /// Returns `true` if the committed value differs from the previous one.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.previous.as_deref().unwrap_or("") != self.value
    }
}

/// Draft handling for a single cell at a time.
///
/// # Examples
///
/// ```
/// use sg_core::{DayIndex, Roster, ShiftKey};
/// use sg_grid::{CellEditSession, ShiftStore};
///
/// let mut store = ShiftStore::new(&Roster::default());
/// let mut edit = CellEditSession::default();
///
/// edit.start_edit(ShiftKey::new("1", DayIndex::FIRST), &mut store);
/// edit.set_draft("OFF");
/// assert_eq!(store.get("1", DayIndex::FIRST), "");
///
/// edit.commit(&mut store);
/// assert_eq!(store.get("1", DayIndex::FIRST), "OFF");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellEditSession {
    state: EditState,
    max_chars: usize,
}

impl Default for CellEditSession {
    fn default() -> Self {
        Self::new(EditConfig::default().max_cell_chars)
    }
}

impl CellEditSession {
    /// Creates an idle session with an input cap in characters.
    #[must_use]
    pub fn new(max_chars: usize) -> Self {
        Self {
            state: EditState::Idle,
            max_chars,
        }
    }

    /// Current state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> &EditState {
        &self.state
    }

    /// Input cap in characters.
    #[inline]
    #[must_use]
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Returns `true` while a cell is being edited.
    #[inline]
    #[must_use]
    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing { .. })
    }

    /// The cell under edit.
    #[must_use]
    pub fn editing_key(&self) -> Option<&ShiftKey> {
        match &self.state {
            EditState::Editing { key, .. } => Some(key),
            EditState::Idle => None,
        }
    }

    /// The current draft.
    #[must_use]
    pub fn draft(&self) -> Option<&str> {
        match &self.state {
            EditState::Editing { draft, .. } => Some(draft),
            EditState::Idle => None,
        }
    }

    /// Returns `true` if the draft differs from the value captured at start.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        match &self.state {
            EditState::Editing {
                draft, original, ..
            } => draft != original,
            EditState::Idle => false,
        }
    }

    /// Starts editing `key` with its committed value as the draft.
    ///
    /// Re-starting the cell already under edit does nothing. Starting a
    /// different cell commits the current one first and returns that outcome.
    /// Keys for employees outside the store's roster are ignored.
    pub fn start_edit(&mut self, key: ShiftKey, store: &mut ShiftStore) -> Option<CommitOutcome> {
        if self.editing_key() == Some(&key) {
            return None;
        }

        let outcome = self.commit(store);

        if !store.contains_employee(key.employee_id.as_str()) {
            warn!(key = %key, "Ignoring edit for unknown employee");
            return outcome;
        }

        let original = store.get_key(&key).to_owned();
        debug!(key = %key, "Editing cell");
        self.state = EditState::Editing {
            key,
            draft: original.clone(),
            original,
        };
        outcome
    }

    /// Replaces the draft, truncated to the input cap.
    pub fn set_draft(&mut self, text: &str) {
        let max = self.max_chars;
        if let EditState::Editing { draft, .. } = &mut self.state {
            *draft = text.chars().take(max).collect();
        }
    }

    /// Appends a character unless the draft is at the input cap.
    ///
    /// Returns `true` if the character was accepted.
    pub fn insert_char(&mut self, c: char) -> bool {
        let max = self.max_chars;
        match &mut self.state {
            EditState::Editing { draft, .. } if draft.chars().count() < max => {
                draft.push(c);
                true
            }
            _ => false,
        }
    }

    /// Removes the last character of the draft.
    ///
    /// Returns `true` if a character was removed.
    pub fn backspace(&mut self) -> bool {
        match &mut self.state {
            EditState::Editing { draft, .. } => draft.pop().is_some(),
            EditState::Idle => false,
        }
    }

    /// Writes the draft to the store and returns to idle.
    pub fn commit(&mut self, store: &mut ShiftStore) -> Option<CommitOutcome> {
        let EditState::Editing { key, draft, .. } = mem::take(&mut self.state) else {
            return None;
        };

        match store.set(key.employee_id.as_str(), key.day, draft.clone()) {
            Ok(previous) => Some(CommitOutcome {
                key,
                previous,
                value: draft,
            }),
            Err(error) => {
                warn!(key = %key, %error, "Dropping draft");
                None
            }
        }
    }

    /// Discards the draft and returns to idle, leaving the store unchanged.
    ///
    /// Returns the key whose edit was cancelled.
    pub fn cancel(&mut self) -> Option<ShiftKey> {
        match mem::take(&mut self.state) {
            EditState::Editing { key, .. } => {
                debug!(key = %key, "Edit cancelled");
                Some(key)
            }
            EditState::Idle => None,
        }
    }

    /// Derives what a cell should display right now.
    ///
    /// Computed fresh on every call from the store and the current draft.
    #[must_use]
    pub fn view(&self, key: &ShiftKey, store: &ShiftStore) -> CellView {
        let committed = store.get_key(key).to_owned();
        let (draft, dirty) = match &self.state {
            EditState::Editing {
                key: editing,
                draft,
                original,
            } if editing == key => (Some(draft.clone()), draft != original),
            _ => (None, false),
        };
        let category = ShiftCategory::classify(draft.as_deref().unwrap_or(&committed));

        CellView {
            key: key.clone(),
            committed,
            draft,
            category,
            dirty,
        }
    }
}

/// Display state of one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    /// The cell.
    pub key: ShiftKey,
    /// Value in the store.
    pub committed: String,
    /// Draft, if this cell is under edit.
    pub draft: Option<String>,
    /// Category of the draft while editing, otherwise of the committed value.
    pub category: ShiftCategory,
    /// Whether the draft has unsaved changes.
    pub dirty: bool,
}

impl CellView {
    /// Returns `true` if this cell is under edit.
    #[inline]
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// The text to show: the draft while editing, otherwise the committed value.
    #[must_use]
    pub fn text(&self) -> &str {
        self.draft.as_deref().unwrap_or(&self.committed)
    }

    /// Hover text: `"<employee> - <Day> <MM/DD>[: <value>]"`.
    #[must_use]
    pub fn tooltip(&self, employee: &Employee, anchor: WeekAnchor) -> String {
        let mut tooltip = format!(
            "{} - {}",
            employee.name,
            anchor.column_label(self.key.day)
        );
        let value = self.text();
        if !value.is_empty() {
            tooltip.push_str(": ");
            tooltip.push_str(value);
        }
        tooltip
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sg_core::{DayIndex, Roster};

    use super::*;

    fn key(id: &str, day: u8) -> ShiftKey {
        ShiftKey::new(id, DayIndex::new(day).unwrap())
    }

    #[test]
    fn test_start_edit_captures_committed_value() {
        let mut store = ShiftStore::new(&Roster::default());
        store.set("1", DayIndex::FIRST, "OFF").unwrap();
        let mut edit = CellEditSession::default();

        assert!(edit.start_edit(key("1", 0), &mut store).is_none());
        assert_eq!(edit.draft(), Some("OFF"));
        assert!(!edit.is_dirty());
    }

    #[test]
    fn test_restart_same_key_is_noop() {
        let mut store = ShiftStore::new(&Roster::default());
        let mut edit = CellEditSession::default();
        edit.start_edit(key("1", 0), &mut store);
        edit.set_draft("typed");

        assert!(edit.start_edit(key("1", 0), &mut store).is_none());
        assert_eq!(edit.draft(), Some("typed"));
        assert_eq!(store.get("1", DayIndex::FIRST), "");
    }

    #[test]
    fn test_switching_cells_commits_previous() {
        let mut store = ShiftStore::new(&Roster::default());
        let mut edit = CellEditSession::default();
        edit.start_edit(key("1", 0), &mut store);
        edit.set_draft("7AM-3PM");

        let outcome = edit.start_edit(key("2", 0), &mut store).unwrap();
        assert_eq!(outcome.key, key("1", 0));
        assert_eq!(outcome.value, "7AM-3PM");
        assert!(outcome.changed());
        assert_eq!(store.get("1", DayIndex::FIRST), "7AM-3PM");
        assert_eq!(edit.editing_key(), Some(&key("2", 0)));
    }

    #[test]
    fn test_cancel_leaves_store_unchanged() {
        let mut store = ShiftStore::new(&Roster::default());
        store.set("3", DayIndex::LAST, "9AM-5PM").unwrap();
        let mut edit = CellEditSession::default();

        edit.start_edit(key("3", 6), &mut store);
        edit.set_draft("");
        edit.insert_char('x');
        assert!(edit.is_dirty());

        assert_eq!(edit.cancel(), Some(key("3", 6)));
        assert!(!edit.is_editing());
        assert_eq!(store.get("3", DayIndex::LAST), "9AM-5PM");
        assert_eq!(edit.view(&key("3", 6), &store).text(), "9AM-5PM");
    }

    #[test]
    fn test_input_cap_counts_chars() {
        let mut store = ShiftStore::new(&Roster::default());
        let mut edit = CellEditSession::new(3);
        edit.start_edit(key("1", 0), &mut store);

        assert!(edit.insert_char('é'));
        assert!(edit.insert_char('é'));
        assert!(edit.insert_char('é'));
        assert!(!edit.insert_char('é'));
        assert_eq!(edit.draft(), Some("ééé"));

        edit.set_draft("abcdef");
        assert_eq!(edit.draft(), Some("abc"));
        assert!(edit.backspace());
        assert_eq!(edit.draft(), Some("ab"));
    }

    #[test]
    fn test_default_cap_is_fifty() {
        let mut store = ShiftStore::new(&Roster::default());
        let mut edit = CellEditSession::default();
        edit.start_edit(key("1", 0), &mut store);
        edit.set_draft(&"y".repeat(80));
        assert_eq!(edit.draft().map(|d| d.chars().count()), Some(50));
    }

    #[test]
    fn test_idle_mutations_are_ignored() {
        let mut store = ShiftStore::new(&Roster::default());
        let mut edit = CellEditSession::default();
        edit.set_draft("nothing");
        assert!(!edit.insert_char('a'));
        assert!(!edit.backspace());
        assert!(edit.commit(&mut store).is_none());
        assert!(edit.cancel().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_unknown_employee_edit_is_ignored() {
        let mut store = ShiftStore::new(&Roster::default());
        let mut edit = CellEditSession::default();
        assert!(edit.start_edit(key("ghost", 0), &mut store).is_none());
        assert!(!edit.is_editing());
    }

    #[test]
    fn test_view_category_follows_draft() {
        let mut store = ShiftStore::new(&Roster::default());
        store.set("1", DayIndex::FIRST, "7AM-3PM").unwrap();
        let mut edit = CellEditSession::default();
        edit.start_edit(key("1", 0), &mut store);
        edit.set_draft("off");

        let view = edit.view(&key("1", 0), &store);
        assert_eq!(view.committed, "7AM-3PM");
        assert_eq!(view.draft.as_deref(), Some("off"));
        assert_eq!(view.category, ShiftCategory::Off);
        assert!(view.dirty);

        let other = edit.view(&key("2", 0), &store);
        assert_eq!(other.category, ShiftCategory::Empty);
        assert!(!other.is_editing());
    }

    #[test]
    fn test_tooltip_format() {
        let mut store = ShiftStore::new(&Roster::default());
        let edit = CellEditSession::default();
        let anchor = WeekAnchor::containing(NaiveDate::from_ymd_opt(2024, 1, 13).unwrap()).unwrap();
        let frank = Employee::new("1", "Frank Gmelin", 1);

        let empty = edit.view(&key("1", 0), &store);
        assert_eq!(empty.tooltip(&frank, anchor), "Frank Gmelin - Saturday 01/13");

        store.set("1", DayIndex::new(1).unwrap(), "7AM-3PM").unwrap();
        let filled = edit.view(&key("1", 1), &store);
        assert_eq!(
            filled.tooltip(&frank, anchor),
            "Frank Gmelin - Sunday 01/14: 7AM-3PM"
        );
    }
}
