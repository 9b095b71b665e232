//! CSV export of the visible week.
//!
//! Export is a pure read of roster, week, and store. Writing the resulting
//! [`ExportArtifact`] somewhere is the caller's job.

use sg_core::{DateRange, DayIndex, ExportFormat, ExportOptions, Roster, WeekAnchor};
use sg_grid::ShiftStore;
use tracing::debug;

use crate::error::ExportError;

/// Media type of exported files.
pub const CSV_MEDIA_TYPE: &str = "text/csv";

/// An exported document ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Suggested file name, `schedule-<YYYY-MM-DD>.csv`.
    pub file_name: String,
    /// MIME type of `content`.
    pub media_type: &'static str,
    /// File body.
    pub content: String,
}

/// Serializes one week of the schedule.
///
/// Rows follow roster order. Every cell is double-quoted with embedded quotes
/// doubled; rows are separated by `\n` with no trailing newline.
///
/// Only CSV output of the current week without audit data is defined; any
/// other option value is rejected rather than approximated.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use sg_core::{DayIndex, Employee, ExportOptions, Roster, WeekAnchor};
/// use sg_csv::export_week;
/// use sg_grid::ShiftStore;
///
/// let roster = Roster::new(vec![Employee::new("1", "Frank Gmelin", 1)]).unwrap();
/// let mut store = ShiftStore::new(&roster);
/// store.set("1", DayIndex::FIRST, "OFF").unwrap();
/// let anchor = WeekAnchor::containing(NaiveDate::from_ymd_opt(2024, 1, 13).unwrap()).unwrap();
///
/// let options = ExportOptions { include_header: false, ..ExportOptions::default() };
/// let artifact = export_week(&roster, anchor, &store, &options).unwrap();
///
/// assert_eq!(artifact.file_name, "schedule-2024-01-13.csv");
/// assert_eq!(artifact.content, r#""Frank Gmelin","OFF","","","","","","""#);
/// ```
pub fn export_week(
    roster: &Roster,
    anchor: WeekAnchor,
    store: &ShiftStore,
    options: &ExportOptions,
) -> Result<ExportArtifact, ExportError> {
    check_options(options)?;

    let mut rows: Vec<String> = Vec::with_capacity(roster.len() + 1);
    if options.include_header {
        let header = std::iter::once("Name".to_owned())
            .chain(DayIndex::ALL.into_iter().map(|day| anchor.column_label(day)));
        rows.push(join_row(header));
    }
    for employee in roster {
        let id = employee.employee_id.as_str();
        let cells = std::iter::once(employee.name.clone())
            .chain(DayIndex::ALL.into_iter().map(|day| store.get(id, day).to_owned()));
        rows.push(join_row(cells));
    }

    debug!(week = %anchor, rows = rows.len(), "Exported week");
    Ok(ExportArtifact {
        file_name: format!("schedule-{anchor}.csv"),
        media_type: CSV_MEDIA_TYPE,
        content: rows.join("\n"),
    })
}

fn check_options(options: &ExportOptions) -> Result<(), ExportError> {
    if options.format != ExportFormat::Csv {
        return Err(ExportError::unsupported("format", options.format.label()));
    }
    if options.include_audit {
        return Err(ExportError::unsupported("include_audit", "true"));
    }
    if options.date_range != DateRange::Current {
        return Err(ExportError::unsupported(
            "date_range",
            options.date_range.label(),
        ));
    }
    Ok(())
}

fn join_row(cells: impl Iterator<Item = String>) -> String {
    cells.map(|cell| quote(&cell)).collect::<Vec<_>>().join(",")
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}
