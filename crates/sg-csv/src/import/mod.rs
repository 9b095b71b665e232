//! CSV import: parse, validate, preview, commit.
//!
//! Import is a two-step operation. [`stage_import`] parses and validates the
//! file text and produces a [`StagedImport`] preview without touching any
//! state. [`StagedImport::commit`] then merges the matched rows into a
//! [`GridSession`]. [`ImportFlow`] wraps both steps around an asynchronous
//! file read.
//!
//! Validation is asymmetric: required employees missing from the
//! file are errors, while rows naming employees outside the roster are
//! skipped and only reported in the [`ImportSummary`].

mod flow;
mod parse;

pub use flow::{ImportFlow, ImportState, ImportTicket};
pub use parse::{ImportRow, parse_csv, parse_line};

use sg_core::{DayIndex, ImportConfig, Roster, ShiftKey};
use sg_grid::GridSession;
use tracing::{debug, info};

use crate::error::{ImportError, ValidationError};

/// Columns a header row must have: name plus seven days.
pub const MIN_COLUMNS: usize = 1 + DayIndex::COUNT;

/// Returns `true` if `file_name` ends with one of the extensions, ignoring
/// ASCII case.
///
/// # Examples
///
/// ```
/// use sg_csv::import::has_supported_extension;
///
/// let exts = vec![".csv".to_owned()];
/// assert!(has_supported_extension("week.CSV", &exts));
/// assert!(!has_supported_extension("week.xlsx", &exts));
/// ```
#[must_use]
pub fn has_supported_extension(file_name: &str, extensions: &[String]) -> bool {
    extensions.iter().any(|ext| {
        file_name
            .len()
            .checked_sub(ext.len())
            .and_then(|start| file_name.get(start..))
            .is_some_and(|tail| tail.eq_ignore_ascii_case(ext))
    })
}

/// Checks parsed rows for shape and required employees.
///
/// Structural errors come first, then one error per missing required name in
/// configured order. An empty result means the rows are importable.
#[must_use]
pub fn validate_rows(rows: &[ImportRow], config: &ImportConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if rows.len() < 2 {
        errors.push(ValidationError::too_few_rows());
    }
    if let Some(header) = rows.first().filter(|h| h.len() < MIN_COLUMNS) {
        errors.push(ValidationError::too_few_columns(header.len()));
    }

    let data = rows.get(1..).unwrap_or_default();
    for required in &config.required_employees {
        let present = data
            .iter()
            .any(|row| row.first().is_some_and(|name| name == required));
        if !present {
            errors.push(ValidationError::missing_employee(required));
        }
    }

    errors
}

/// Parses and validates file text into a preview.
///
/// Nothing is mutated; a rejected file returns every problem found.
pub fn stage_import(
    file_name: &str,
    text: &str,
    config: &ImportConfig,
) -> Result<StagedImport, ImportError> {
    if !has_supported_extension(file_name, &config.extensions) {
        return Err(ImportError::Rejected(vec![
            ValidationError::unsupported_extension(file_name, &config.extensions),
        ]));
    }

    let mut rows = parse_csv(text);
    let errors = validate_rows(&rows, config);
    if !errors.is_empty() {
        debug!(file = file_name, errors = errors.len(), "Import rejected");
        return Err(ImportError::Rejected(errors));
    }

    let data = rows.split_off(1);
    let header = rows.pop().unwrap_or_default();
    debug!(file = file_name, rows = data.len(), "Import staged");
    Ok(StagedImport {
        file_name: file_name.to_owned(),
        header,
        rows: data,
    })
}

/// A validated file awaiting confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedImport {
    file_name: String,
    header: ImportRow,
    rows: Vec<ImportRow>,
}

impl StagedImport {
    /// Name of the source file.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Header row as read.
    #[must_use]
    pub fn header(&self) -> &ImportRow {
        &self.header
    }

    /// Data rows as read.
    #[must_use]
    pub fn rows(&self) -> &[ImportRow] {
        &self.rows
    }

    /// Store writes for rows matching a roster name, plus the unmatched names.
    ///
    /// Columns 1 to 7 map to days 0 to 6. Short rows fill with `""` and extra
    /// columns are dropped.
    #[must_use]
    pub fn entries(&self, roster: &Roster) -> (Vec<(ShiftKey, String)>, Vec<String>) {
        let mut entries = Vec::with_capacity(self.rows.len() * DayIndex::COUNT);
        let mut ignored = Vec::new();

        for row in &self.rows {
            let name = row.first().map_or("", String::as_str);
            let Some(employee) = roster.by_name(name) else {
                ignored.push(name.to_owned());
                continue;
            };
            for day in DayIndex::ALL {
                let text = row.get(day.as_usize() + 1).cloned().unwrap_or_default();
                entries.push((ShiftKey::new(employee.employee_id.clone(), day), text));
            }
        }

        (entries, ignored)
    }

    /// Merges the matched rows into the session's store.
    pub fn commit(self, grid: &mut GridSession) -> ImportSummary {
        let (entries, ignored) = self.entries(grid.roster());
        let matched_rows = self.rows.len() - ignored.len();
        let cells_applied = grid.apply_import(entries);

        for name in &ignored {
            debug!(name = name.as_str(), "Ignoring row for employee not in roster");
        }
        info!(
            file = self.file_name.as_str(),
            matched_rows,
            ignored = ignored.len(),
            "Import committed"
        );

        ImportSummary {
            file_name: self.file_name,
            matched_rows,
            cells_applied,
            ignored,
        }
    }
}

/// What a committed import changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Name of the source file.
    pub file_name: String,
    /// Data rows matched to roster employees.
    pub matched_rows: usize,
    /// Cells written to the store.
    pub cells_applied: usize,
    /// Names of rows that matched no roster employee.
    pub ignored: Vec<String>,
}
