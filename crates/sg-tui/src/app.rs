//! Application state and key handling.
//!
//! [`App`] owns the grid session and the dialog states. Key events are
//! translated into [`Action`]s by [`App::handle_key`] and applied by
//! [`App::update`]. File reads for imports are not performed here: a selected
//! file is parked in [`App::take_pending_read`] for the event loop to read on
//! a background task, and the result comes back through
//! [`App::handle_import_loaded`].
//!
//! ```text
//! App
//!  ├── grid: GridSession      (roster, week, store, edit session, focus)
//!  ├── grid_view: GridViewState (scroll position of the table)
//!  ├── import: ImportFlow     (+ path being typed)
//!  ├── export: ExportDialog
//!  ├── mode: AppMode
//!  └── status: Option<StatusMessage>
//! ```

use std::io;
use std::time::Instant;

use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use sg_core::{Config, ExportOptions, WeekAnchor};
use sg_csv::{ExportArtifact, ImportFlow, ImportState, ImportSummary, ImportTicket, export_week};
use sg_grid::{CommitOutcome, GridError, GridSession, NavCommand};
use tracing::{debug, info, warn};

use crate::action::Action;
use crate::error::TuiError;

/// The current mode of the application UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Grid navigation and editing.
    #[default]
    Normal,

    /// Help panel is displayed.
    Help,

    /// Import dialog is displayed.
    Import,

    /// Export dialog is displayed.
    Export,
}

impl AppMode {
    /// Short label for the status bar badge.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "GRID",
            Self::Help => "HELP",
            Self::Import => "IMPORT",
            Self::Export => "EXPORT",
        }
    }
}

/// A row of the export dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportField {
    /// Output format.
    #[default]
    Format,
    /// Header row toggle.
    Header,
    /// Audit data toggle.
    Audit,
    /// Weeks to cover.
    Range,
}

impl ExportField {
    /// Dialog rows in display order.
    pub const ALL: [Self; 4] = [Self::Format, Self::Header, Self::Audit, Self::Range];

    /// Row label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Format => "Format",
            Self::Header => "Include header",
            Self::Audit => "Include audit",
            Self::Range => "Date range",
        }
    }

    /// The row below, wrapping.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Format => Self::Header,
            Self::Header => Self::Audit,
            Self::Audit => Self::Range,
            Self::Range => Self::Format,
        }
    }

    /// The row above, wrapping.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Format => Self::Range,
            Self::Header => Self::Format,
            Self::Audit => Self::Header,
            Self::Range => Self::Audit,
        }
    }
}

/// State of the export dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportDialog {
    /// Options as currently chosen.
    pub options: ExportOptions,
    /// Selected row.
    pub field: ExportField,
}

impl ExportDialog {
    /// Opens the dialog with preselected options.
    #[must_use]
    pub fn new(options: ExportOptions) -> Self {
        Self {
            options,
            field: ExportField::default(),
        }
    }

    /// Changes the value of the selected row.
    pub fn cycle(&mut self) {
        match self.field {
            ExportField::Format => self.options.format = self.options.format.next(),
            ExportField::Header => self.options.include_header = !self.options.include_header,
            ExportField::Audit => self.options.include_audit = !self.options.include_audit,
            ExportField::Range => self.options.date_range = self.options.date_range.next(),
        }
    }

    /// Display value of a row.
    #[must_use]
    pub fn value(&self, field: ExportField) -> &'static str {
        let yes_no = |flag: bool| if flag { "yes" } else { "no" };
        match field {
            ExportField::Format => self.options.format.label(),
            ExportField::Header => yes_no(self.options.include_header),
            ExportField::Audit => yes_no(self.options.include_audit),
            ExportField::Range => self.options.date_range.label(),
        }
    }
}

/// Status message to display.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// The message text.
    pub text: String,

    /// When the message was created.
    pub timestamp: Instant,

    /// Whether this is an error message.
    pub is_error: bool,
}

impl StatusMessage {
    /// Creates a new info message.
    #[must_use]
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: Instant::now(),
            is_error: false,
        }
    }

    /// Creates a new error message.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: Instant::now(),
            is_error: true,
        }
    }

    /// Returns `true` once the message is older than five seconds.
    #[must_use]
    pub fn should_hide(&self) -> bool {
        self.timestamp.elapsed().as_secs() > 5
    }
}

/// Scroll state of the schedule table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridViewState {
    /// First roster row drawn.
    pub scroll_offset: usize,

    /// Number of roster rows that fit, recorded by the last render.
    pub visible_height: usize,
}

impl GridViewState {
    /// Scrolls the least amount that brings `row` into view.
    pub fn ensure_visible(&mut self, row: usize) {
        if row < self.scroll_offset {
            self.scroll_offset = row;
        } else if self.visible_height > 0 && row >= self.scroll_offset + self.visible_height {
            self.scroll_offset = row.saturating_sub(self.visible_height - 1);
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    /// Application configuration.
    pub config: Config,

    /// Roster, week, shift values, edit state, and focus.
    pub grid: GridSession,

    /// Scroll position of the schedule table.
    pub grid_view: GridViewState,

    /// Import dialog state.
    pub import: ImportFlow,

    /// Path typed into the import dialog.
    pub import_path: String,

    /// Export dialog state.
    pub export: ExportDialog,

    /// Current UI mode.
    pub mode: AppMode,

    /// Current status message.
    pub status: Option<StatusMessage>,

    /// Whether the application should quit.
    pub should_quit: bool,

    /// Terminal size.
    pub terminal_size: Rect,

    pending_read: Option<(ImportTicket, Utf8PathBuf)>,
}

impl App {
    /// Creates the application showing `anchor`'s week.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured roster is invalid.
    pub fn new(config: Config, anchor: WeekAnchor) -> Result<Self, TuiError> {
        let roster = config.roster()?;
        let grid = GridSession::with_edit_config(roster, anchor, config.edit);
        let import = ImportFlow::new(config.import.clone());
        let export = ExportDialog::new(config.export.options);

        Ok(Self {
            config,
            grid,
            grid_view: GridViewState::default(),
            import,
            import_path: String::new(),
            export,
            mode: AppMode::Normal,
            status: None,
            should_quit: false,
            terminal_size: Rect::default(),
            pending_read: None,
        })
    }

    /// Updates the terminal size.
    pub fn set_terminal_size(&mut self, size: Rect) {
        self.terminal_size = size;
    }

    /// Takes the file read the event loop should start, if any.
    pub fn take_pending_read(&mut self) -> Option<(ImportTicket, Utf8PathBuf)> {
        self.pending_read.take()
    }

    /// Called on each tick; expires old status messages.
    pub fn tick(&mut self) {
        if self.status.as_ref().is_some_and(StatusMessage::should_hide) {
            self.status = None;
        }
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Translates a key press into an action.
    ///
    /// The import path field is edited in place; every other state change
    /// goes through the returned action.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match self.mode {
            AppMode::Normal if self.grid.is_editing() => Self::handle_editing_key(key),
            AppMode::Normal => Self::handle_normal_key(key),
            AppMode::Help => Self::handle_help_key(key),
            AppMode::Import => self.handle_import_key(key),
            AppMode::Export => Self::handle_export_key(key),
        }
    }

    fn handle_normal_key(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => Action::Navigate(NavCommand::Up),
            KeyCode::Down => Action::Navigate(NavCommand::Down),
            KeyCode::Left => Action::Navigate(NavCommand::Left),
            KeyCode::Right => Action::Navigate(NavCommand::Right),
            KeyCode::Tab => Action::Navigate(NavCommand::Advance),
            KeyCode::Enter => Action::Navigate(NavCommand::Enter),
            KeyCode::Char('e') | KeyCode::F(2) => Action::ActivateCell,
            KeyCode::Char('[') => Action::PreviousWeek,
            KeyCode::Char(']') => Action::NextWeek,
            KeyCode::Char('t') => Action::CurrentWeek,
            KeyCode::Char('n') => Action::NewWeek,
            KeyCode::Char('i') => Action::OpenImport,
            KeyCode::Char('x') => Action::OpenExport,
            KeyCode::Char('?') => Action::ToggleHelp,
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        }
    }

    fn handle_editing_key(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::CancelEdit,
            KeyCode::Enter => Action::ConfirmEdit,
            KeyCode::Tab => Action::Navigate(NavCommand::Advance),
            KeyCode::Backspace => Action::Backspace,
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Action::InputChar(c)
            }
            _ => Action::None,
        }
    }

    fn handle_help_key(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?' | 'q') => Action::ToggleHelp,
            _ => Action::None,
        }
    }

    fn handle_import_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Esc {
            return Action::CloseImport;
        }
        match self.import.state() {
            // A new path while reading supersedes the read in flight
            ImportState::AwaitingFile { .. } | ImportState::Reading { .. } => match key.code {
                KeyCode::Enter => {
                    let path = self.import_path.trim();
                    if path.is_empty() {
                        Action::None
                    } else {
                        Action::SelectImportFile(Utf8PathBuf::from(path))
                    }
                }
                KeyCode::Backspace => {
                    self.import_path.pop();
                    Action::Render
                }
                KeyCode::Char(c) => {
                    self.import_path.push(c);
                    Action::Render
                }
                _ => Action::None,
            },
            ImportState::Preview(_) => match key.code {
                KeyCode::Enter | KeyCode::Char('y') => Action::ConfirmImport,
                KeyCode::Backspace | KeyCode::Char('b') => Action::ImportBack,
                _ => Action::None,
            },
        }
    }

    fn handle_export_key(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::CloseExport,
            KeyCode::Enter => Action::RunExport,
            KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => Action::NextExportField,
            KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => Action::PreviousExportField,
            KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right => Action::CycleExportOption,
            _ => Action::None,
        }
    }

    /// Translates a bracketed paste into an action.
    ///
    /// Pasted text goes to the cell draft while editing, or to the path field
    /// of the import dialog. Control characters such as a trailing newline
    /// are dropped. Pastes anywhere else are ignored.
    pub fn handle_paste(&mut self, text: &str) -> Action {
        let text: String = text.chars().filter(|c| !c.is_control()).collect();
        match self.mode {
            AppMode::Normal if self.grid.is_editing() => Action::Paste(text),
            AppMode::Import if !matches!(self.import.state(), ImportState::Preview(_)) => {
                self.import_path.push_str(&text);
                Action::Render
            }
            _ => Action::None,
        }
    }

    /// Delivers a finished import read.
    pub fn handle_import_loaded(
        &mut self,
        ticket: ImportTicket,
        result: io::Result<String>,
    ) -> Action {
        if self.import.complete_read(ticket, result) {
            Action::Render
        } else {
            Action::None
        }
    }

    // =========================================================================
    // Update
    // =========================================================================

    /// Applies an action to the application state.
    #[allow(clippy::match_same_arms)]
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,

            Action::Navigate(command) => {
                self.grid.navigate(command);
            }
            Action::ActivateCell => {
                self.grid.start_edit();
            }
            Action::InputChar(c) => {
                if self.grid.is_editing() && !self.grid.input_char(c) {
                    self.status = Some(StatusMessage::error(format!(
                        "Shift text is limited to {} characters",
                        self.grid.edit().max_chars()
                    )));
                }
            }
            Action::Backspace => {
                self.grid.backspace();
            }
            Action::Paste(text) => self.paste_into_draft(&text),
            Action::ConfirmEdit => {
                self.grid.confirm();
            }
            Action::CancelEdit => {
                self.grid.cancel();
            }

            Action::PreviousWeek => {
                let result = self.grid.previous_week();
                self.show_week("Showing", result);
            }
            Action::NextWeek => {
                let result = self.grid.next_week();
                self.show_week("Showing", result);
            }
            Action::CurrentWeek => {
                let result = self.grid.current_week(today());
                self.show_week("Showing", result);
            }
            Action::NewWeek => {
                let result = self.grid.new_week();
                self.show_week("Started", result);
            }

            Action::OpenImport => {
                self.grid.blur();
                self.import.cancel();
                self.import_path.clear();
                self.mode = AppMode::Import;
            }
            Action::SelectImportFile(path) => {
                self.pending_read = self
                    .import
                    .select_file(path.clone())
                    .map(|ticket| (ticket, path));
            }
            Action::ImportBack => self.import.back(),
            Action::ConfirmImport => match self.import.confirm(&mut self.grid) {
                Ok(summary) => {
                    self.status = Some(StatusMessage::info(summary_text(&summary)));
                    self.mode = AppMode::Normal;
                }
                Err(e) => {
                    warn!(error = %e, "Import confirm refused");
                    self.status = Some(StatusMessage::error(e.to_string()));
                }
            },
            Action::CloseImport => {
                self.import.cancel();
                self.pending_read = None;
                self.mode = AppMode::Normal;
            }

            Action::OpenExport => {
                self.grid.blur();
                self.export = ExportDialog::new(self.config.export.options);
                self.mode = AppMode::Export;
            }
            Action::NextExportField => self.export.field = self.export.field.next(),
            Action::PreviousExportField => self.export.field = self.export.field.previous(),
            Action::CycleExportOption => self.export.cycle(),
            Action::RunExport => self.run_export(),
            Action::CloseExport => self.mode = AppMode::Normal,

            Action::ToggleHelp => {
                self.mode = if self.mode == AppMode::Help {
                    AppMode::Normal
                } else {
                    AppMode::Help
                };
            }
            Action::Tick => self.tick(),
            Action::Render | Action::None => {}
        }

        self.grid_view.ensure_visible(self.grid.focus().employee_index);
    }

    fn paste_into_draft(&mut self, text: &str) {
        let Some(draft) = self.grid.edit().draft() else {
            return;
        };
        let combined = format!("{draft}{text}");
        let max = self.grid.edit().max_chars();
        if combined.chars().count() > max {
            self.status = Some(StatusMessage::error(format!(
                "Pasted text cut to the {max}-character limit"
            )));
        }
        self.grid.set_draft(&combined);
    }

    fn show_week(&mut self, verb: &str, result: Result<Option<CommitOutcome>, GridError>) {
        if let Err(e) = result {
            warn!(error = %e, "Week change refused");
            self.status = Some(StatusMessage::error(e.to_string()));
            return;
        }
        let label = self.grid.anchor().label();
        debug!(week = %self.grid.anchor(), "Week changed");
        self.status = Some(StatusMessage::info(format!("{verb} week {label}")));
    }

    fn run_export(&mut self) {
        let result = export_week(
            self.grid.roster(),
            self.grid.anchor(),
            self.grid.store(),
            &self.export.options,
        );
        let artifact = match result {
            Ok(artifact) => artifact,
            Err(e) => {
                self.status = Some(StatusMessage::error(e.to_string()));
                return;
            }
        };

        match write_artifact(&self.config.export.output_dir, &artifact) {
            Ok(path) => {
                info!(path = %path, "Exported schedule");
                self.status = Some(StatusMessage::info(format!("Exported to {path}")));
                self.mode = AppMode::Normal;
            }
            Err(e) => {
                warn!(error = %e, "Export failed");
                self.status = Some(StatusMessage::error(e.to_string()));
            }
        }
    }
}

/// Writes an exported document into `dir` under its suggested name.
///
/// An empty `dir` means the working directory. Missing directories are
/// created.
///
/// # Errors
///
/// Returns [`TuiError::ExportWrite`] if the directory or file cannot be written.
pub fn write_artifact(dir: &Utf8Path, artifact: &ExportArtifact) -> Result<Utf8PathBuf, TuiError> {
    if !dir.as_str().is_empty() {
        std::fs::create_dir_all(dir).map_err(|e| TuiError::export_write(dir, e))?;
    }
    let path = dir.join(&artifact.file_name);
    std::fs::write(&path, &artifact.content).map_err(|e| TuiError::export_write(&path, e))?;
    Ok(path)
}

fn summary_text(summary: &ImportSummary) -> String {
    let text = format!(
        "Imported {}: {} employees, {} cells",
        summary.file_name, summary.matched_rows, summary.cells_applied
    );
    match summary.ignored.len() {
        0 => text,
        ignored => format!("{text}, {ignored} rows not in roster"),
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use sg_core::{DayIndex, ExportFormat};

    use super::*;

    const SAMPLE: &str = "Name,Sat,Sun,Mon,Tue,Wed,Thu,Fri\n\
        Frank Gmelin,OFF,7AM-3PM,7AM-3PM,OFF,9AM-5PM,9AM-5PM,OFF\n\
        Patrica Garden,9AM-5PM,OFF,OFF,7AM-3PM,7AM-3PM,OFF,OFF\n\
        Dawn Waddel,OFF,OFF,OFF,OFF,OFF,OFF,OFF";

    fn app() -> App {
        app_with(Config::default())
    }

    fn app_with(config: Config) -> App {
        let anchor = WeekAnchor::containing(NaiveDate::from_ymd_opt(2024, 1, 13).unwrap()).unwrap();
        App::new(config, anchor).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        let action = app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
        app.update(action);
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn day(n: u8) -> DayIndex {
        DayIndex::new(n).unwrap()
    }

    #[test]
    fn test_app_mode_default() {
        assert_eq!(AppMode::default(), AppMode::Normal);
    }

    #[test]
    fn test_edit_and_confirm_cell() {
        let mut app = app();
        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, "7AM-3PM");
        press(&mut app, KeyCode::Enter);

        assert!(!app.grid.is_editing());
        assert_eq!(app.grid.store().get("1", day(0)), "7AM-3PM");
    }

    #[test]
    fn test_escape_discards_draft() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "OFF");
        press(&mut app, KeyCode::Esc);

        assert!(!app.grid.is_editing());
        assert_eq!(app.grid.store().get("1", day(0)), "");
    }

    #[test]
    fn test_tab_commits_and_moves_right() {
        let mut app = app();
        press(&mut app, KeyCode::F(2));
        type_text(&mut app, "OFF");
        press(&mut app, KeyCode::Tab);

        assert_eq!(app.grid.store().get("1", day(0)), "OFF");
        assert_eq!(app.grid.focus().day, day(1));
        assert!(!app.grid.is_editing());
    }

    #[test]
    fn test_command_keys_are_text_while_editing() {
        let mut app = app();
        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, "q]n");
        press(&mut app, KeyCode::Enter);

        assert!(!app.should_quit);
        assert_eq!(app.grid.store().get("1", day(0)), "q]n");
        assert_eq!(app.grid.anchor().to_string(), "2024-01-13");
    }

    #[test]
    fn test_ctrl_c_quits_while_editing() {
        let mut app = app();
        press(&mut app, KeyCode::Char('e'));
        let action = app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(action, Action::Quit);
    }

    #[test]
    fn test_cell_limit_reports_error() {
        let mut config = Config::default();
        config.edit.max_cell_chars = 3;
        let mut app = app_with(config);

        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, "OFFX");

        assert_eq!(app.grid.edit().draft(), Some("OFF"));
        assert!(app.status.as_ref().is_some_and(|s| s.is_error));
    }

    #[test]
    fn test_week_keys_commit_pending_edit() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "9AM-5PM");
        app.update(Action::NextWeek);

        assert_eq!(app.grid.anchor().to_string(), "2024-01-20");
        assert_eq!(app.grid.store().get("2", day(0)), "9AM-5PM");

        press(&mut app, KeyCode::Char('['));
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.grid.anchor().to_string(), "2024-01-06");
    }

    #[test]
    fn test_new_week_reports_status() {
        let mut app = app();
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.grid.anchor().to_string(), "2024-01-20");
        let status = app.status.as_ref().unwrap();
        assert!(status.text.starts_with("Started week"));
    }

    #[test]
    fn test_help_toggle() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.mode, AppMode::Help);
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.mode, AppMode::Normal);
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_import_flow_through_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(app.mode, AppMode::Import);

        type_text(&mut app, "week.csv");
        press(&mut app, KeyCode::Enter);
        let (ticket, path) = app.take_pending_read().unwrap();
        assert_eq!(path, "week.csv");

        let action = app.handle_import_loaded(ticket, Ok(SAMPLE.to_owned()));
        assert_eq!(action, Action::Render);
        assert!(app.import.preview().is_some());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.grid.store().get("1", day(1)), "7AM-3PM");
        assert_eq!(app.grid.store().get("2", day(0)), "9AM-5PM");
        let status = app.status.as_ref().unwrap();
        assert!(status.text.contains("1 rows not in roster"));
    }

    #[test]
    fn test_rejected_import_shows_errors_and_keeps_dialog() {
        let mut app = app();
        press(&mut app, KeyCode::Char('i'));
        app.update(Action::SelectImportFile("week.csv".into()));
        let (ticket, _) = app.take_pending_read().unwrap();
        app.handle_import_loaded(ticket, Ok("Name,Sat\nLisa Chen,OFF".to_owned()));

        assert_eq!(app.mode, AppMode::Import);
        assert_eq!(app.import.errors().len(), 4);
        press(&mut app, KeyCode::Char('y'));
        assert!(app.grid.store().is_empty());
    }

    #[test]
    fn test_bad_extension_starts_no_read() {
        let mut app = app();
        press(&mut app, KeyCode::Char('i'));
        app.update(Action::SelectImportFile("week.xlsx".into()));
        assert!(app.take_pending_read().is_none());
        assert_eq!(app.import.errors().len(), 1);
    }

    #[test]
    fn test_read_after_close_is_ignored() {
        let mut app = app();
        press(&mut app, KeyCode::Char('i'));
        app.update(Action::SelectImportFile("week.csv".into()));
        let (ticket, _) = app.take_pending_read().unwrap();
        press(&mut app, KeyCode::Esc);

        let action = app.handle_import_loaded(ticket, Ok(SAMPLE.to_owned()));
        assert_eq!(action, Action::None);
        assert!(app.grid.store().is_empty());
    }

    #[test]
    fn test_new_path_while_reading_supersedes_read() {
        let mut app = app();
        press(&mut app, KeyCode::Char('i'));
        type_text(&mut app, "old.csv");
        press(&mut app, KeyCode::Enter);
        let (stale, _) = app.take_pending_read().unwrap();
        assert!(matches!(app.import.state(), ImportState::Reading { .. }));

        for _ in 0.."old.csv".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "week.csv");
        assert_eq!(app.import_path, "week.csv");
        press(&mut app, KeyCode::Enter);
        let (ticket, path) = app.take_pending_read().unwrap();
        assert_eq!(path, "week.csv");

        assert_eq!(app.handle_import_loaded(stale, Ok(String::new())), Action::None);
        assert_eq!(app.handle_import_loaded(ticket, Ok(SAMPLE.to_owned())), Action::Render);
        assert_eq!(app.import.preview().unwrap().file_name(), "week.csv");
    }

    #[test]
    fn test_paste_while_editing_respects_cell_limit() {
        let mut config = Config::default();
        config.edit.max_cell_chars = 10;
        let mut app = app_with(config);

        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, "7AM");
        let action = app.handle_paste("-3PM\n");
        assert_eq!(action, Action::Paste("-3PM".to_owned()));
        app.update(action);
        assert_eq!(app.grid.edit().draft(), Some("7AM-3PM"));
        assert!(app.status.is_none());

        let action = app.handle_paste(" then close");
        app.update(action);
        assert_eq!(app.grid.edit().draft(), Some("7AM-3PM th"));
        assert!(app.status.as_ref().is_some_and(|s| s.is_error));
    }

    #[test]
    fn test_paste_into_import_path() {
        let mut app = app();
        press(&mut app, KeyCode::Char('i'));
        type_text(&mut app, "data/");
        let action = app.handle_paste("week.csv\n");
        assert_eq!(action, Action::Render);
        assert_eq!(app.import_path, "data/week.csv");

        press(&mut app, KeyCode::Enter);
        let (_, path) = app.take_pending_read().unwrap();
        assert_eq!(path, "data/week.csv");
    }

    #[test]
    fn test_paste_ignored_outside_inputs() {
        let mut app = app();
        assert_eq!(app.handle_paste("OFF"), Action::None);
        assert!(app.grid.store().is_empty());

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.handle_paste("OFF"), Action::None);
    }

    #[test]
    fn test_week_past_calendar_end_reports_error() {
        let last = WeekAnchor::containing(NaiveDate::MAX)
            .or_else(|_| WeekAnchor::containing(NaiveDate::MAX - chrono::Days::new(7)))
            .unwrap();
        let mut app = App::new(Config::default(), last).unwrap();

        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.grid.anchor(), last);
        assert!(app.status.as_ref().is_some_and(|s| s.is_error));

        press(&mut app, KeyCode::Char('['));
        assert!(app.grid.anchor() < last);
        assert!(app.status.as_ref().is_some_and(|s| !s.is_error));
    }

    #[test]
    fn test_grid_view_scrolls_minimally() {
        let mut view = GridViewState {
            scroll_offset: 0,
            visible_height: 5,
        };
        view.ensure_visible(4);
        assert_eq!(view.scroll_offset, 0);
        view.ensure_visible(9);
        assert_eq!(view.scroll_offset, 5);
        view.ensure_visible(6);
        assert_eq!(view.scroll_offset, 5);
        view.ensure_visible(2);
        assert_eq!(view.scroll_offset, 2);
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.export.output_dir = Utf8PathBuf::from_path_buf(dir.path().join("out")).unwrap();
        let mut app = app_with(config);

        press(&mut app, KeyCode::Char('e'));
        type_text(&mut app, "OFF");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.mode, AppMode::Export);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, AppMode::Normal);
        let path = dir.path().join("out").join("schedule-2024-01-13.csv");
        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.starts_with("\"Name\",\"Saturday 01/13\""));
        assert!(written.contains("\"Frank Gmelin\",\"OFF\""));
    }

    #[test]
    fn test_unsupported_export_option_keeps_dialog_open() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.export.output_dir = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        let mut app = app_with(config);

        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.export.options.format, ExportFormat::Excel);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, AppMode::Export);
        assert!(app.status.as_ref().is_some_and(|s| s.is_error));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_export_dialog_fields_wrap() {
        let mut dialog = ExportDialog::default();
        for _ in ExportField::ALL {
            dialog.field = dialog.field.next();
        }
        assert_eq!(dialog.field, ExportField::Format);
        assert_eq!(dialog.field.previous(), ExportField::Range);

        dialog.field = ExportField::Header;
        assert_eq!(dialog.value(ExportField::Header), "yes");
        dialog.cycle();
        assert_eq!(dialog.value(ExportField::Header), "no");
    }

    #[test]
    fn test_summary_text() {
        let summary = ImportSummary {
            file_name: "a.csv".to_owned(),
            matched_rows: 2,
            cells_applied: 14,
            ignored: Vec::new(),
        };
        assert_eq!(summary_text(&summary), "Imported a.csv: 2 employees, 14 cells");
    }
}
