//! TUI-specific error types.
//!
//! This module provides the [`TuiError`] type for handling errors
//! that can occur during TUI operations.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur in the TUI.
///
/// Import and export validation problems are not errors here: they are shown
/// in the status bar or the import dialog and the session continues.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TuiError {
    /// Terminal initialization or operation failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Event channel was closed unexpectedly.
    #[error("event channel closed unexpectedly")]
    ChannelClosed,

    /// Configuration could not be turned into a session.
    #[error("configuration error: {0}")]
    Config(#[from] sg_core::ConfigError),

    /// An exported file could not be written.
    #[error("failed to write {path}: {source}")]
    ExportWrite {
        /// Target file.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl TuiError {
    /// Creates a new [`TuiError::ExportWrite`] error.
    #[must_use]
    pub fn export_write(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::ExportWrite {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if this error is recoverable.
    ///
    /// Non-recoverable errors typically require restarting the TUI.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::ExportWrite { .. })
    }
}
