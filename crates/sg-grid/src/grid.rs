//! One schedule editing session.
//!
//! [`GridSession`] owns the roster, the visible week, the shift store, the
//! edit session, and the keyboard focus. Every user-facing grid operation goes
//! through it so the navigation and edit rules are applied in one place.

use chrono::NaiveDate;
use sg_core::{EditConfig, Employee, Roster, ShiftKey, WeekAnchor};
use tracing::{debug, info};

use crate::error::GridError;
use crate::navigator::{CellFocus, GridBounds, NavCommand, next_focus};
use crate::session::{CellEditSession, CellView, CommitOutcome};
use crate::store::ShiftStore;

/// Roster, week, store, edit session, and focus of one editing session.
#[derive(Debug, Clone)]
pub struct GridSession {
    roster: Roster,
    anchor: WeekAnchor,
    store: ShiftStore,
    edit: CellEditSession,
    focus: CellFocus,
}

impl GridSession {
    /// Creates a session with an empty store, focused on the first cell.
    #[must_use]
    pub fn new(roster: Roster, anchor: WeekAnchor) -> Self {
        Self::with_edit_config(roster, anchor, EditConfig::default())
    }

    /// Creates a session with custom edit limits.
    #[must_use]
    pub fn with_edit_config(roster: Roster, anchor: WeekAnchor, config: EditConfig) -> Self {
        let store = ShiftStore::new(&roster);
        Self {
            roster,
            anchor,
            store,
            edit: CellEditSession::new(config.max_cell_chars),
            focus: CellFocus::default(),
        }
    }

    /// The roster shown as grid rows.
    #[inline]
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The visible week.
    #[inline]
    #[must_use]
    pub fn anchor(&self) -> WeekAnchor {
        self.anchor
    }

    /// Committed shifts.
    #[inline]
    #[must_use]
    pub fn store(&self) -> &ShiftStore {
        &self.store
    }

    /// The edit session.
    #[inline]
    #[must_use]
    pub fn edit(&self) -> &CellEditSession {
        &self.edit
    }

    /// The focused cell.
    #[inline]
    #[must_use]
    pub fn focus(&self) -> CellFocus {
        self.focus
    }

    /// Grid size.
    #[inline]
    #[must_use]
    pub fn bounds(&self) -> GridBounds {
        GridBounds::new(self.roster.len())
    }

    /// Returns `true` while a cell is being edited.
    #[inline]
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.edit.is_editing()
    }

    /// Employee on the focused row.
    #[must_use]
    pub fn focused_employee(&self) -> Option<&Employee> {
        self.roster.get(self.focus.employee_index)
    }

    /// Key of the focused cell, or `None` on an empty roster.
    #[must_use]
    pub fn focused_key(&self) -> Option<ShiftKey> {
        self.key_at(self.focus)
    }

    fn key_at(&self, focus: CellFocus) -> Option<ShiftKey> {
        self.roster
            .get(focus.employee_index)
            .map(|employee| ShiftKey::new(employee.employee_id.clone(), focus.day))
    }

    /// Applies a navigation command.
    ///
    /// While editing, only `Advance` (commit, then move right) and `Enter`
    /// (confirm) are honored; other commands are ignored. While idle, `Enter`
    /// starts editing the focused cell.
    pub fn navigate(&mut self, command: NavCommand) -> Option<CommitOutcome> {
        if self.edit.is_editing() {
            return match command {
                NavCommand::Advance => {
                    let outcome = self.confirm();
                    self.focus = next_focus(self.focus, command, self.bounds());
                    outcome
                }
                NavCommand::Enter => self.confirm(),
                _ => None,
            };
        }

        if command == NavCommand::Enter {
            return self.start_edit();
        }
        self.focus = next_focus(self.focus, command, self.bounds());
        None
    }

    /// Focuses a cell and starts editing it.
    ///
    /// Activating the cell already under edit keeps its draft; activating
    /// another cell commits the current edit first.
    pub fn activate(&mut self, focus: CellFocus) -> Option<CommitOutcome> {
        if !self.bounds().contains(focus) {
            return None;
        }
        self.focus = focus;
        self.start_edit()
    }

    /// Starts editing the focused cell.
    pub fn start_edit(&mut self) -> Option<CommitOutcome> {
        let key = self.focused_key()?;
        let outcome = self.edit.start_edit(key, &mut self.store);
        log_commit(outcome.as_ref());
        outcome
    }

    /// Appends a character to the draft.
    pub fn input_char(&mut self, c: char) -> bool {
        self.edit.insert_char(c)
    }

    /// Deletes the last draft character.
    pub fn backspace(&mut self) -> bool {
        self.edit.backspace()
    }

    /// Replaces the draft.
    pub fn set_draft(&mut self, text: &str) {
        self.edit.set_draft(text);
    }

    /// Commits the draft.
    pub fn confirm(&mut self) -> Option<CommitOutcome> {
        let outcome = self.edit.commit(&mut self.store);
        log_commit(outcome.as_ref());
        outcome
    }

    /// Discards the draft.
    pub fn cancel(&mut self) -> Option<ShiftKey> {
        self.edit.cancel()
    }

    /// Focus left the cell: commits like [`GridSession::confirm`].
    pub fn blur(&mut self) -> Option<CommitOutcome> {
        self.confirm()
    }

    /// Shows the previous week. A pending edit is committed first.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::WeekOutOfRange`] at the start of the calendar. The
    /// week and any pending edit are left untouched.
    pub fn previous_week(&mut self) -> Result<Option<CommitOutcome>, GridError> {
        let anchor = self.anchor.previous()?;
        Ok(self.change_week(anchor))
    }

    /// Shows the next week. A pending edit is committed first.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::WeekOutOfRange`] at the end of the calendar.
    pub fn next_week(&mut self) -> Result<Option<CommitOutcome>, GridError> {
        let anchor = self.anchor.next()?;
        Ok(self.change_week(anchor))
    }

    /// Shows the week containing `today`. A pending edit is committed first.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::WeekOutOfRange`] if that week cannot be built.
    pub fn current_week(&mut self, today: NaiveDate) -> Result<Option<CommitOutcome>, GridError> {
        let anchor = WeekAnchor::containing(today)?;
        Ok(self.change_week(anchor))
    }

    /// Starts the following week. The store is not touched.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::WeekOutOfRange`] at the end of the calendar.
    pub fn new_week(&mut self) -> Result<Option<CommitOutcome>, GridError> {
        let outcome = self.next_week()?;
        info!(week = %self.anchor, "Started new week");
        Ok(outcome)
    }

    fn change_week(&mut self, anchor: WeekAnchor) -> Option<CommitOutcome> {
        let outcome = self.blur();
        if anchor != self.anchor {
            debug!(from = %self.anchor, to = %anchor, "Changing week");
            self.anchor = anchor;
        }
        outcome
    }

    /// Display state of a cell, or `None` outside the grid.
    #[must_use]
    pub fn cell_view(&self, focus: CellFocus) -> Option<CellView> {
        self.key_at(focus).map(|key| self.edit.view(&key, &self.store))
    }

    /// Merges imported entries into the store.
    ///
    /// A pending edit is committed first. Returns the number of entries applied.
    pub fn apply_import<I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = (ShiftKey, String)>,
    {
        self.blur();
        let applied = self.store.bulk_replace(entries);
        info!(applied, total = self.store.len(), "Import applied");
        applied
    }
}

fn log_commit(outcome: Option<&CommitOutcome>) {
    if let Some(outcome) = outcome.filter(|o| o.changed()) {
        info!(
            key = %outcome.key,
            previous = outcome.previous.as_deref().unwrap_or(""),
            value = %outcome.value,
            "Shift updated"
        );
    }
}
