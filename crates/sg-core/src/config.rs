//! Configuration structures for the shiftgrid schedule editor.
//!
//! This module provides configuration types for all components of the application:
//!
//! - [`ImportConfig`] - Accepted file extensions and required employees
//! - [`EditConfig`] - Cell input limits
//! - [`ExportConfig`] - Output directory and default export options
//! - [`TuiConfig`] - Terminal UI settings (tick rate, colors)
//! - [`Config`] - Root configuration combining all settings plus the roster
//!
//! All configuration types implement [`Default`], and every section is
//! `#[serde(default)]` so a partial JSON file only overrides what it names.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::types::{Employee, ExportOptions, Roster};

/// Color scheme for the TUI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ColorScheme {
    /// Automatically detect based on terminal settings.
    #[default]
    Auto,
    /// Light color scheme (dark text on light background).
    Light,
    /// Dark color scheme (light text on dark background).
    Dark,
}

/// Configuration for CSV import validation.
///
/// # Examples
///
/// ```
/// use sg_core::ImportConfig;
///
/// let config = ImportConfig::default();
/// assert_eq!(config.extensions, vec![".csv"]);
/// assert_eq!(config.required_employees.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// File name extensions accepted for import (with leading dot).
    pub extensions: Vec<String>,

    /// Names that must appear in column 0 of some data row.
    pub required_employees: Vec<String>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            extensions: vec![".csv".to_owned()],
            required_employees: vec![
                "Frank Gmelin".to_owned(),
                "Patrica Garden".to_owned(),
                "Dawn Waddel".to_owned(),
            ],
        }
    }
}

/// Configuration for cell editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EditConfig {
    /// Maximum characters accepted by the cell input.
    pub max_cell_chars: usize,
}

impl Default for EditConfig {
    fn default() -> Self {
        Self { max_cell_chars: 50 }
    }
}

/// Configuration for export.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory exported files are written to. Empty means the working directory.
    pub output_dir: Utf8PathBuf,

    /// Options preselected in the export dialog.
    pub options: ExportOptions,
}

/// Configuration for the terminal user interface.
///
/// # Examples
///
/// ```
/// use sg_core::{TuiConfig, ColorScheme};
///
/// let config = TuiConfig::default();
/// assert_eq!(config.tick_rate_ms, 250);
/// assert_eq!(config.color_scheme, ColorScheme::Auto);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// UI refresh rate in milliseconds.
    pub tick_rate_ms: u64,

    /// Render frames per second.
    pub frame_rate: u64,

    /// Color scheme for the interface.
    pub color_scheme: ColorScheme,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            frame_rate: 30,
            color_scheme: ColorScheme::Auto,
        }
    }
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use sg_core::Config;
///
/// let config = Config::default();
/// assert_eq!(config.roster().unwrap().len(), 6);
///
/// let json = serde_json::to_string_pretty(&config).unwrap();
/// let parsed: Config = serde_json::from_str(&json).unwrap();
/// assert_eq!(parsed, config);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Employees shown in the grid.
    pub roster: Vec<Employee>,

    /// Import validation settings.
    pub import: ImportConfig,

    /// Cell editing settings.
    pub edit: EditConfig,

    /// Export settings.
    pub export: ExportConfig,

    /// Terminal UI settings.
    pub tui: TuiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster: Roster::default_employees(),
            import: ImportConfig::default(),
            edit: EditConfig::default(),
            export: ExportConfig::default(),
            tui: TuiConfig::default(),
        }
    }
}

impl Config {
    /// Loads and validates a JSON configuration file.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        debug!(path = %path, "Loading configuration");
        let content = std::fs::read_to_string(path.as_std_path())?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks option values and roster uniqueness.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.import.extensions.is_empty() {
            return Err(ConfigError::invalid_option(
                "import.extensions",
                "at least one extension is required",
            ));
        }
        if let Some(ext) = self.import.extensions.iter().find(|e| !e.starts_with('.')) {
            return Err(ConfigError::invalid_option(
                "import.extensions",
                format!("'{ext}' must start with '.'"),
            ));
        }
        if self.edit.max_cell_chars == 0 {
            return Err(ConfigError::invalid_option(
                "edit.max_cell_chars",
                "must be positive",
            ));
        }
        if self.tui.tick_rate_ms == 0 || self.tui.frame_rate == 0 {
            return Err(ConfigError::invalid_option(
                "tui",
                "tick_rate_ms and frame_rate must be positive",
            ));
        }
        self.roster().map(|_| ())
    }

    /// Builds the validated roster.
    pub fn roster(&self) -> Result<Roster, ConfigError> {
        Roster::new(self.roster.clone())
    }
}
