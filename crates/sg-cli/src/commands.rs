//! Subcommand implementations.
//!
//! The work of `check` and `export` is done by pure functions returning the
//! text to print, so the binary's entry point only routes and writes.

use camino::Utf8Path;
use chrono::NaiveDate;
use color_eyre::eyre::{Result, WrapErr, eyre};
use sg_core::{Config, ExportFormat, ImportConfig, WeekAnchor};
use sg_csv::{
    ExportArtifact, ImportError, StagedImport, ValidationError, export_week, stage_import,
};
use sg_grid::GridSession;
use tracing::{debug, info};

/// Outcome of validating an import file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Whether the file would be accepted.
    pub accepted: bool,
    /// Lines to print.
    pub lines: Vec<String>,
}

/// Resolves the week to show: the one containing `date`, or today's.
pub fn resolve_week(date: Option<NaiveDate>) -> Result<WeekAnchor> {
    let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
    WeekAnchor::containing(date).wrap_err("Invalid --week date")
}

/// Loads the configuration file, or the defaults if none was given.
pub fn load_config(path: Option<&Utf8Path>) -> Result<Config> {
    match path {
        Some(path) => {
            Config::load(path).wrap_err_with(|| format!("Failed to load configuration {path}"))
        }
        None => Ok(Config::default()),
    }
}

/// Reads a file as strict UTF-8 and stages it for import.
fn stage_file(path: &Utf8Path, config: &ImportConfig) -> Result<StagedImport, ImportError> {
    let file_name = path.file_name().unwrap_or(path.as_str());
    let text = std::fs::read_to_string(path)
        .map_err(|e| ImportError::Rejected(vec![ValidationError::read_failed(e)]))?;
    stage_import(file_name, &text, config)
}

/// Validates an import file without changing anything.
pub fn check_file(config: &Config, path: &Utf8Path) -> Result<CheckReport> {
    let roster = config.roster()?;
    debug!(path = %path, "Checking import file");

    match stage_file(path, &config.import) {
        Ok(staged) => {
            let (_, ignored) = staged.entries(&roster);
            let matched = staged.rows().len() - ignored.len();
            let mut lines = vec![format!(
                "{}: OK, {} rows, {matched} match the roster",
                staged.file_name(),
                staged.rows().len()
            )];
            lines.extend(ignored.iter().map(|name| format!("  skipped: {name}")));
            Ok(CheckReport {
                accepted: true,
                lines,
            })
        }
        Err(error) => {
            let errors = error.validation_errors();
            let mut lines = vec![format!("{path}: rejected, {} problems", errors.len())];
            lines.extend(errors.iter().map(|e| format!("  {}", e.message)));
            Ok(CheckReport {
                accepted: false,
                lines,
            })
        }
    }
}

/// Options of the `export` subcommand.
#[derive(Debug, Clone, Default)]
pub struct ExportRequest<'a> {
    /// Any date in the week to export.
    pub week: Option<NaiveDate>,
    /// Import file to seed the week from.
    pub from: Option<&'a Utf8Path>,
    /// Omit the header row.
    pub no_header: bool,
    /// Output format, overriding the configuration.
    pub format: Option<ExportFormat>,
}

/// Builds the export document for a week, optionally seeded from an import file.
pub fn export_text(config: &Config, request: &ExportRequest<'_>) -> Result<ExportArtifact> {
    let anchor = resolve_week(request.week)?;
    let mut grid = GridSession::with_edit_config(config.roster()?, anchor, config.edit);

    if let Some(from) = request.from {
        let staged = stage_file(from, &config.import).map_err(|e| eyre!("{from}: {e}"))?;
        let summary = staged.commit(&mut grid);
        info!(
            file = summary.file_name.as_str(),
            cells = summary.cells_applied,
            "Seeded week from import"
        );
    }

    let mut options = config.export.options;
    if request.no_header {
        options.include_header = false;
    }
    if let Some(format) = request.format {
        options.format = format;
    }

    Ok(export_week(grid.roster(), anchor, grid.store(), &options)?)
}

#[cfg(test)]
mod tests {
    use camino::Utf8PathBuf;

    use super::*;

    const SAMPLE: &str = "Name,Sat,Sun,Mon,Tue,Wed,Thu,Fri\n\
        Frank Gmelin,OFF,7AM-3PM,7AM-3PM,OFF,9AM-5PM,9AM-5PM,OFF\n\
        Patrica Garden,9AM-5PM,OFF,OFF,7AM-3PM,7AM-3PM,OFF,OFF\n\
        Dawn Waddel,OFF,OFF,OFF,OFF,OFF,OFF,OFF";

    fn write(dir: &tempfile::TempDir, name: &str, text: &str) -> Utf8PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, text).unwrap();
        Utf8PathBuf::from_path_buf(path).unwrap()
    }

    fn saturday() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2024, 1, 13)
    }

    #[test]
    fn test_resolve_week_snaps_to_saturday() {
        let anchor = resolve_week(NaiveDate::from_ymd_opt(2024, 1, 17)).unwrap();
        assert_eq!(anchor.to_string(), "2024-01-13");
    }

    #[test]
    fn test_resolve_week_at_calendar_edges_does_not_panic() {
        for date in [NaiveDate::MIN, NaiveDate::MAX] {
            match resolve_week(Some(date)) {
                Ok(week) => assert!(week.date() <= date && date <= week.end()),
                Err(error) => assert!(format!("{error:#}").starts_with("Invalid --week date")),
            }
        }
    }

    #[test]
    fn test_load_config_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "config.json", r#"{"edit": {"max_cell_chars": 12}}"#);
        let config = load_config(Some(path.as_path())).unwrap();
        assert_eq!(config.edit.max_cell_chars, 12);
    }

    #[test]
    fn test_check_accepts_sample() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "week.csv", SAMPLE);

        let report = check_file(&Config::default(), &path).unwrap();
        assert!(report.accepted);
        assert_eq!(report.lines[0], "week.csv: OK, 3 rows, 2 match the roster");
        assert_eq!(report.lines[1], "  skipped: Dawn Waddel");
    }

    #[test]
    fn test_check_rejects_missing_required() {
        let dir = tempfile::tempdir().unwrap();
        let text: String = SAMPLE
            .lines()
            .filter(|l| !l.starts_with("Patrica"))
            .collect::<Vec<_>>()
            .join("\n");
        let path = write(&dir, "week.csv", &text);

        let report = check_file(&Config::default(), &path).unwrap();
        assert!(!report.accepted);
        assert_eq!(report.lines.len(), 2);
        assert!(report.lines[1].contains("Patrica Garden"));
    }

    #[test]
    fn test_check_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("week.csv");
        std::fs::write(&path, [0x4e, 0x61, 0xff, 0xfe]).unwrap();
        let path = Utf8PathBuf::from_path_buf(path).unwrap();

        let report = check_file(&Config::default(), &path).unwrap();
        assert!(!report.accepted);
    }

    #[test]
    fn test_export_seeded_from_import() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "week.csv", SAMPLE);
        let request = ExportRequest {
            week: saturday(),
            from: Some(path.as_path()),
            no_header: true,
            format: None,
        };

        let artifact = export_text(&Config::default(), &request).unwrap();
        assert_eq!(artifact.file_name, "schedule-2024-01-13.csv");
        let first = artifact.content.lines().next().unwrap();
        assert_eq!(
            first,
            r#""Frank Gmelin","OFF","7AM-3PM","7AM-3PM","OFF","9AM-5PM","9AM-5PM","OFF""#
        );
        assert_eq!(artifact.content.lines().count(), 6);
    }

    #[test]
    fn test_export_empty_week_has_header() {
        let request = ExportRequest {
            week: saturday(),
            ..ExportRequest::default()
        };
        let artifact = export_text(&Config::default(), &request).unwrap();
        assert!(artifact.content.starts_with(r#""Name","Saturday 01/13""#));
    }

    #[test]
    fn test_export_rejects_pdf() {
        let request = ExportRequest {
            week: saturday(),
            format: Some(ExportFormat::Pdf),
            ..ExportRequest::default()
        };
        let error = export_text(&Config::default(), &request).unwrap_err();
        assert!(error.to_string().contains("format"));
    }
}
