//! User actions for the TUI.
//!
//! This module defines the [`Action`] enum representing all user-initiated
//! actions that can be performed in the TUI. Actions are the result of
//! processing input events and are used to update application state.
//!
//! # Action Flow
//!
//! ```text
//! Key Event → App::handle_key → Action → App::update
//! ```

use camino::Utf8PathBuf;
use sg_grid::NavCommand;

/// User-initiated actions in the TUI.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum Action {
    // =========================================================================
    // Grid Navigation
    // =========================================================================
    /// Apply a navigation command to the grid.
    Navigate(NavCommand),

    /// Start editing the focused cell.
    ActivateCell,

    // =========================================================================
    // Cell Editing
    // =========================================================================
    /// Append a character to the draft.
    InputChar(char),

    /// Remove the last character of the draft.
    Backspace,

    /// Append pasted text to the draft.
    Paste(String),

    /// Commit the draft.
    ConfirmEdit,

    /// Discard the draft.
    CancelEdit,

    // =========================================================================
    // Week
    // =========================================================================
    /// Show the week before the current one.
    PreviousWeek,

    /// Show the week after the current one.
    NextWeek,

    /// Jump to the week containing today.
    CurrentWeek,

    /// Start a new week after the current one.
    NewWeek,

    // =========================================================================
    // Import
    // =========================================================================
    /// Open the import dialog.
    OpenImport,

    /// Read and validate a file.
    SelectImportFile(Utf8PathBuf),

    /// Leave the preview and pick another file.
    ImportBack,

    /// Merge the previewed file into the schedule.
    ConfirmImport,

    /// Close the import dialog.
    CloseImport,

    // =========================================================================
    // Export
    // =========================================================================
    /// Open the export dialog.
    OpenExport,

    /// Move to the next option in the export dialog.
    NextExportField,

    /// Move to the previous option in the export dialog.
    PreviousExportField,

    /// Change the selected export option.
    CycleExportOption,

    /// Write the export file.
    RunExport,

    /// Close the export dialog.
    CloseExport,

    // =========================================================================
    // UI State
    // =========================================================================
    /// Toggle the help panel.
    ToggleHelp,

    // =========================================================================
    // Application Control
    // =========================================================================
    /// Quit the application.
    Quit,

    /// Render the UI.
    Render,

    /// Tick (periodic update).
    Tick,

    /// No operation.
    #[default]
    None,
}

impl Action {
    /// Returns `true` if this action requires a re-render.
    #[must_use]
    pub const fn needs_render(&self) -> bool {
        !matches!(self, Self::None | Self::Tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_needs_render() {
        assert!(Action::Navigate(NavCommand::Up).needs_render());
        assert!(Action::ToggleHelp.needs_render());
        assert!(!Action::None.needs_render());
        assert!(!Action::Tick.needs_render());
    }

    #[test]
    fn test_action_default() {
        assert_eq!(Action::default(), Action::None);
    }
}
