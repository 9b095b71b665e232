//! CLI entry point for the shiftgrid schedule editor.
//!
//! # Usage
//!
//! ```bash
//! shiftgrid [OPTIONS] <COMMAND>
//!
//! # Edit the current week interactively
//! shiftgrid tui
//!
//! # Open a given week and start importing a file
//! shiftgrid tui --week 2024-01-13 --import week.csv
//!
//! # Validate an import file
//! shiftgrid check week.csv
//!
//! # Convert an import file into the export format
//! shiftgrid export --week 2024-01-13 --from week.csv --output out.csv
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

mod commands;

use std::io::Write;
use std::sync::Mutex;

use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use sg_core::ExportFormat;
use tracing::info;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::ExportRequest;

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Weekly shift schedule editor with CSV import and export.
#[derive(Parser)]
#[command(name = "shiftgrid", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    command: Commands,

    /// JSON configuration file.
    #[arg(short, long, global = true, env = "SHIFTGRID_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    /// Write logs to this file instead of stderr.
    #[arg(long, global = true, env = "SHIFTGRID_LOG_FILE")]
    log_file: Option<Utf8PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Edit a week of the schedule in the terminal.
    Tui {
        /// Any date in the week to open (defaults to today).
        #[arg(short, long)]
        week: Option<NaiveDate>,

        /// CSV file to start importing.
        #[arg(short, long)]
        import: Option<Utf8PathBuf>,
    },

    /// Validate an import file and report problems.
    Check {
        /// CSV file to validate.
        file: Utf8PathBuf,
    },

    /// Export a week as CSV.
    Export {
        /// Any date in the week to export (defaults to today).
        #[arg(short, long)]
        week: Option<NaiveDate>,

        /// CSV file to fill the week from before exporting.
        #[arg(short, long)]
        from: Option<Utf8PathBuf>,

        /// Omit the header row.
        #[arg(long)]
        no_header: bool,

        /// Output format.
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Output file (defaults to stdout).
        #[arg(short, long)]
        output: Option<Utf8PathBuf>,
    },
}

/// Export format accepted on the command line.
#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Comma-separated values.
    Csv,
    /// Excel workbook.
    Excel,
    /// PDF document.
    Pdf,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => Self::Csv,
            FormatArg::Excel => Self::Excel,
            FormatArg::Pdf => Self::Pdf,
        }
    }
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` wins if set. Otherwise the level is `debug` with `--verbose`
/// and `info` without. While the terminal UI owns the screen, nothing is
/// logged unless a log file or `RUST_LOG` is given.
fn init_tracing(
    verbose: bool,
    no_color: bool,
    log_file: Option<&Utf8Path>,
    interactive: bool,
) -> color_eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = match (interactive && log_file.is_none(), verbose) {
            (true, _) => "off",
            (false, true) => "debug",
            (false, false) => "info",
        };
        EnvFilter::new(level)
    });

    let (writer, use_ansi) = match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None => (
            BoxMakeWriter::new(std::io::stderr),
            !no_color && std::env::var("NO_COLOR").is_err(),
        ),
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(use_ansi)
                .with_writer(writer),
        )
        .with(filter)
        .init();
    Ok(())
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

/// Runs the interactive editor until the user quits or SIGTERM arrives.
async fn run_tui(
    cli: &Cli,
    week: Option<NaiveDate>,
    import: Option<Utf8PathBuf>,
) -> color_eyre::Result<()> {
    let config = commands::load_config(cli.config.as_deref())?;
    let anchor = commands::resolve_week(week)?;
    info!(week = %anchor, "Starting TUI");

    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigterm = signal(SignalKind::terminate())?;

        tokio::select! {
            result = sg_tui::run(config, anchor, import) => {
                result.map_err(|e| color_eyre::eyre::eyre!("TUI error: {}", e))?;
            }
            _ = sigterm.recv() => {
                info!("Received SIGTERM, shutting down");
            }
        }
    }

    #[cfg(not(unix))]
    {
        sg_tui::run(config, anchor, import)
            .await
            .map_err(|e| color_eyre::eyre::eyre!("TUI error: {}", e))?;
    }

    Ok(())
}

/// Validates a file and prints the report; rejected files are an error.
fn run_check(cli: &Cli, file: &Utf8Path) -> color_eyre::Result<()> {
    let config = commands::load_config(cli.config.as_deref())?;
    let report = commands::check_file(&config, file)?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    for line in &report.lines {
        writeln!(handle, "{line}")?;
    }

    if report.accepted {
        Ok(())
    } else {
        Err(color_eyre::eyre::eyre!("{file} would be rejected"))
    }
}

/// Exports a week to a file or stdout.
fn run_export(
    cli: &Cli,
    request: &ExportRequest<'_>,
    output: Option<&Utf8Path>,
) -> color_eyre::Result<()> {
    let config = commands::load_config(cli.config.as_deref())?;
    let artifact = commands::export_text(&config, request)?;

    if let Some(path) = output {
        std::fs::write(path, &artifact.content)?;
        info!(path = %path, "Export written");
    } else {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", artifact.content)?;
    }
    Ok(())
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let interactive = matches!(cli.command, Commands::Tui { .. });
    init_tracing(cli.verbose, cli.no_color, cli.log_file.as_deref(), interactive)?;

    match &cli.command {
        Commands::Tui { week, import } => run_tui(&cli, *week, import.clone()).await,
        Commands::Check { file } => run_check(&cli, file),
        Commands::Export {
            week,
            from,
            no_header,
            format,
            output,
        } => {
            let request = ExportRequest {
                week: *week,
                from: from.as_deref(),
                no_header: *no_header,
                format: format.map(ExportFormat::from),
            };
            run_export(&cli, &request, output.as_deref())
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_export_flags() {
        let cli = Cli::try_parse_from([
            "shiftgrid",
            "export",
            "--week",
            "2024-01-17",
            "--from",
            "week.csv",
            "--no-header",
            "--format",
            "csv",
        ])
        .unwrap();

        let Commands::Export {
            week,
            from,
            no_header,
            format,
            output,
        } = cli.command
        else {
            panic!("expected export");
        };
        assert_eq!(week, NaiveDate::from_ymd_opt(2024, 1, 17));
        assert_eq!(from.as_deref(), Some(Utf8Path::new("week.csv")));
        assert!(no_header);
        assert!(matches!(format, Some(FormatArg::Csv)));
        assert!(output.is_none());
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli =
            Cli::try_parse_from(["shiftgrid", "check", "a.csv", "--config", "c.json"]).unwrap();
        assert_eq!(cli.config.as_deref(), Some(Utf8Path::new("c.json")));
    }

    #[test]
    fn test_bad_week_is_rejected() {
        assert!(Cli::try_parse_from(["shiftgrid", "tui", "--week", "13/01/2024"]).is_err());
    }
}
