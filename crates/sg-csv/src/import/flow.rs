//! The import dialog as a state machine around an asynchronous file read.
//!
//! The read itself happens outside this type. [`ImportFlow::select_file`]
//! hands out an [`ImportTicket`]; whoever performs the read reports back
//! through [`ImportFlow::complete_read`] with that ticket. Completions for a
//! ticket that is no longer current are dropped, so a slow read for an
//! abandoned file never reaches the store.

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use sg_core::ImportConfig;
use sg_grid::GridSession;
use tracing::debug;

use super::{ImportSummary, StagedImport, has_supported_extension, stage_import};
use crate::error::{ImportError, ValidationError};

/// Identifies one in-flight file read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImportTicket(u64);

impl ImportTicket {
    /// Raw ticket number.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Where the import dialog is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportState {
    /// Waiting for a file, showing errors from the last attempt.
    AwaitingFile {
        /// Problems with the previous file (empty on first open).
        errors: Vec<ValidationError>,
    },
    /// A file is being read.
    Reading {
        /// File being read.
        path: Utf8PathBuf,
        /// Ticket of the read.
        ticket: ImportTicket,
    },
    /// A validated file awaits confirmation.
    Preview(StagedImport),
}

impl Default for ImportState {
    fn default() -> Self {
        Self::AwaitingFile { errors: Vec::new() }
    }
}

/// Import dialog state plus the ticket counter.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use sg_core::{ImportConfig, Roster, WeekAnchor};
/// use sg_csv::{ImportFlow, ImportState};
/// use sg_grid::GridSession;
///
/// let config = ImportConfig { required_employees: vec![], ..Default::default() };
/// let mut flow = ImportFlow::new(config);
/// let ticket = flow.select_file("week.csv".into()).unwrap();
///
/// let text = "Name,Sat,Sun,Mon,Tue,Wed,Thu,Fri\nLisa Chen,OFF".to_owned();
/// flow.complete_read(ticket, Ok(text));
/// assert!(matches!(flow.state(), ImportState::Preview(_)));
///
/// let anchor = WeekAnchor::containing(NaiveDate::from_ymd_opt(2024, 1, 13).unwrap()).unwrap();
/// let mut grid = GridSession::new(Roster::default(), anchor);
/// let summary = flow.confirm(&mut grid).unwrap();
/// assert_eq!(summary.matched_rows, 1);
/// ```
#[derive(Debug, Clone)]
pub struct ImportFlow {
    config: ImportConfig,
    state: ImportState,
    last_ticket: u64,
}

impl ImportFlow {
    /// Creates a flow awaiting a file.
    #[must_use]
    pub fn new(config: ImportConfig) -> Self {
        Self {
            config,
            state: ImportState::default(),
            last_ticket: 0,
        }
    }

    /// Current state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> &ImportState {
        &self.state
    }

    /// Validation settings.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Errors to show while awaiting a file.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        match &self.state {
            ImportState::AwaitingFile { errors } => errors,
            ImportState::Reading { .. } | ImportState::Preview(_) => &[],
        }
    }

    /// Returns `true` while a read is outstanding.
    #[must_use]
    pub fn is_reading(&self) -> bool {
        matches!(self.state, ImportState::Reading { .. })
    }

    /// The preview, if a file has been validated.
    #[must_use]
    pub fn preview(&self) -> Option<&StagedImport> {
        match &self.state {
            ImportState::Preview(staged) => Some(staged),
            _ => None,
        }
    }

    /// Chooses a file to import.
    ///
    /// Returns the ticket the caller must pass to [`ImportFlow::complete_read`]
    /// once the file has been read, or `None` if the extension was rejected
    /// (the error is then in [`ImportFlow::errors`]). Choosing a file while
    /// another is being read supersedes that read.
    pub fn select_file(&mut self, path: Utf8PathBuf) -> Option<ImportTicket> {
        let file_name = file_name_of(&path);
        if !has_supported_extension(file_name, &self.config.extensions) {
            debug!(path = %path, "Rejected import file extension");
            self.state = ImportState::AwaitingFile {
                errors: vec![ValidationError::unsupported_extension(
                    file_name,
                    &self.config.extensions,
                )],
            };
            return None;
        }

        self.last_ticket += 1;
        let ticket = ImportTicket(self.last_ticket);
        debug!(path = %path, ticket = ticket.get(), "Reading import file");
        self.state = ImportState::Reading { path, ticket };
        Some(ticket)
    }

    /// Delivers the result of a file read.
    ///
    /// Returns `false` if the ticket is stale and the result was dropped.
    pub fn complete_read(&mut self, ticket: ImportTicket, result: io::Result<String>) -> bool {
        let path = match &self.state {
            ImportState::Reading {
                path,
                ticket: current,
            } if *current == ticket => path.clone(),
            _ => {
                debug!(ticket = ticket.get(), "Dropping stale import read");
                return false;
            }
        };

        self.state = match result {
            Err(error) => ImportState::AwaitingFile {
                errors: vec![ValidationError::read_failed(error)],
            },
            Ok(text) => match stage_import(file_name_of(&path), &text, &self.config) {
                Ok(staged) => ImportState::Preview(staged),
                Err(error) => ImportState::AwaitingFile {
                    errors: error.validation_errors().to_vec(),
                },
            },
        };
        true
    }

    /// Leaves the preview and returns to file selection.
    pub fn back(&mut self) {
        if self.preview().is_some() {
            self.state = ImportState::default();
        }
    }

    /// Resets the flow, discarding any preview or outstanding read.
    pub fn cancel(&mut self) {
        self.state = ImportState::default();
    }

    /// Commits the preview into the session and resets the flow.
    pub fn confirm(&mut self, grid: &mut GridSession) -> Result<ImportSummary, ImportError> {
        match std::mem::take(&mut self.state) {
            ImportState::Preview(staged) => Ok(staged.commit(grid)),
            state @ ImportState::Reading { .. } => {
                self.state = state;
                Err(ImportError::Busy)
            }
            state @ ImportState::AwaitingFile { .. } => {
                self.state = state;
                Err(ImportError::NotStaged)
            }
        }
    }
}

fn file_name_of(path: &Utf8Path) -> &str {
    path.file_name().unwrap_or(path.as_str())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sg_core::{DayIndex, Roster, WeekAnchor};

    use super::*;
    use crate::error::ValidationCause;

    const VALID: &str = "Name,Sat,Sun,Mon,Tue,Wed,Thu,Fri\n\
        Frank Gmelin,OFF\nPatrica Garden,OFF\nDawn Waddel,OFF";

    fn grid() -> GridSession {
        let anchor = WeekAnchor::containing(NaiveDate::from_ymd_opt(2024, 1, 13).unwrap()).unwrap();
        GridSession::new(Roster::default(), anchor)
    }

    #[test]
    fn test_bad_extension_stays_awaiting() {
        let mut flow = ImportFlow::new(ImportConfig::default());
        assert!(flow.select_file("shifts.xlsx".into()).is_none());
        assert_eq!(flow.errors()[0].cause, ValidationCause::UnsupportedExtension);
        assert!(!flow.is_reading());
    }

    #[test]
    fn test_stale_ticket_is_dropped() {
        let mut flow = ImportFlow::new(ImportConfig::default());
        let first = flow.select_file("old.csv".into()).unwrap();
        let second = flow.select_file("new.csv".into()).unwrap();
        assert!(second > first);

        assert!(!flow.complete_read(first, Ok(VALID.to_owned())));
        assert!(flow.is_reading());

        assert!(flow.complete_read(second, Ok(VALID.to_owned())));
        assert_eq!(flow.preview().map(StagedImport::file_name), Some("new.csv"));
    }

    #[test]
    fn test_read_after_cancel_is_dropped() {
        let mut flow = ImportFlow::new(ImportConfig::default());
        let ticket = flow.select_file("a.csv".into()).unwrap();
        flow.cancel();
        assert!(!flow.complete_read(ticket, Ok(VALID.to_owned())));
        assert_eq!(flow.state(), &ImportState::default());
    }

    #[test]
    fn test_read_failure_returns_to_awaiting() {
        let mut flow = ImportFlow::new(ImportConfig::default());
        let ticket = flow.select_file("a.csv".into()).unwrap();
        let error = io::Error::new(
            io::ErrorKind::InvalidData,
            "stream did not contain valid UTF-8",
        );
        flow.complete_read(ticket, Err(error));
        assert_eq!(flow.errors()[0].cause, ValidationCause::ReadFailed);
        assert!(flow.errors()[0].message.contains("UTF-8"));
    }

    #[test]
    fn test_rejected_file_keeps_store_untouched() {
        let mut flow = ImportFlow::new(ImportConfig::default());
        let mut grid = grid();
        let ticket = flow.select_file("a.csv".into()).unwrap();
        flow.complete_read(ticket, Ok("Name,Sat\nLisa Chen,OFF".to_owned()));

        assert_eq!(flow.errors().len(), 4);
        assert_eq!(flow.confirm(&mut grid), Err(ImportError::NotStaged));
        assert!(grid.store().is_empty());
    }

    #[test]
    fn test_confirm_while_reading_is_busy() {
        let mut flow = ImportFlow::new(ImportConfig::default());
        let mut grid = grid();
        flow.select_file("a.csv".into());
        assert_eq!(flow.confirm(&mut grid), Err(ImportError::Busy));
        assert!(flow.is_reading());
    }

    #[test]
    fn test_back_then_confirm_commits_nothing() {
        let mut flow = ImportFlow::new(ImportConfig::default());
        let mut grid = grid();
        let ticket = flow.select_file("a.csv".into()).unwrap();
        flow.complete_read(ticket, Ok(VALID.to_owned()));
        flow.back();
        assert!(flow.preview().is_none());
        assert!(flow.confirm(&mut grid).is_err());
        assert!(grid.store().is_empty());
    }

    #[test]
    fn test_confirm_commits_and_resets() {
        let mut flow = ImportFlow::new(ImportConfig::default());
        let mut grid = grid();
        let ticket = flow.select_file("dir/a.csv".into()).unwrap();
        flow.complete_read(ticket, Ok(VALID.to_owned()));

        let summary = flow.confirm(&mut grid).unwrap();
        assert_eq!(summary.file_name, "a.csv");
        assert_eq!(summary.matched_rows, 2);
        assert_eq!(summary.ignored, ["Dawn Waddel"]);
        assert_eq!(grid.store().get("1", DayIndex::FIRST), "OFF");
        assert_eq!(flow.state(), &ImportState::default());
    }
}
