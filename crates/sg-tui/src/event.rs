//! Event types for the TUI event loop.
//!
//! This module provides the [`Event`] enum representing all events
//! that can be processed by the TUI application.
//!
//! # Event Sources
//!
//! - **Terminal**: key presses, pasted text, mouse events, window resizing
//! - **Import reads**: file contents read by a background task
//! - **Timer**: periodic tick and render events

use std::io;

use crossterm::event::{KeyEvent, MouseEvent};
use sg_csv::ImportTicket;

/// Events that can be processed by the TUI.
#[derive(Debug)]
#[non_exhaustive]
pub enum Event {
    /// A key press event from the terminal.
    Key(KeyEvent),

    /// Text pasted into the terminal while bracketed paste is enabled.
    Paste(String),

    /// A mouse event from the terminal.
    Mouse(MouseEvent),

    /// Terminal window was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    /// A background read of an import file finished.
    ///
    /// The ticket identifies which read this was; results for a superseded
    /// read are dropped by the import flow.
    ImportLoaded {
        /// Ticket handed out when the file was selected.
        ticket: ImportTicket,
        /// File text, or the read error.
        result: io::Result<String>,
    },

    /// Periodic tick for status expiry.
    Tick,

    /// Signal to render a new frame.
    Render,

    /// Focus gained by the terminal window.
    FocusGained,

    /// Focus lost by the terminal window.
    FocusLost,
}
