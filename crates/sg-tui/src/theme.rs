//! Theme and styling for the TUI.
//!
//! This module provides the [`Theme`] struct for managing colors and styles
//! throughout the terminal interface. It supports both dark and light color
//! schemes.
//!
//! # Example
//!
//! ```
//! use sg_core::ShiftCategory;
//! use sg_tui::Theme;
//!
//! let theme = Theme::dark();
//! let style = theme.category_style(ShiftCategory::Off);
//! ```

use ratatui::style::{Color, Modifier, Style};
use sg_core::{ColorScheme, ShiftCategory};

/// Theme configuration for the TUI.
///
/// Use [`Theme::dark()`] or [`Theme::light()`] to get predefined themes,
/// or [`Theme::from_scheme()`] to create a theme based on configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // =========================================================================
    // Cell Category Colors
    // =========================================================================
    /// Foreground color for working shifts.
    pub shift_fg: Color,

    /// Foreground color for `OFF` cells.
    pub off_fg: Color,

    /// Foreground color for empty cells.
    pub empty_fg: Color,

    // =========================================================================
    // Cell State Colors
    // =========================================================================
    /// Background of the focused cell.
    pub focused_bg: Color,

    /// Background of the cell under edit.
    pub editing_bg: Color,

    /// Marker color for unsaved drafts.
    pub dirty_fg: Color,

    // =========================================================================
    // Base Colors
    // =========================================================================
    /// Primary foreground color.
    pub fg: Color,

    /// Primary background color.
    pub bg: Color,

    /// Dimmed/secondary text color.
    pub dimmed_fg: Color,

    /// Accent color for highlights.
    pub accent: Color,

    /// Error/warning color.
    pub error_fg: Color,

    // =========================================================================
    // Border Styles
    // =========================================================================
    /// Style for normal borders.
    pub border_style: Style,

    /// Style for dialog borders.
    pub focused_border_style: Style,

    // =========================================================================
    // Component Styles
    // =========================================================================
    /// Style for the header bar.
    pub header_style: Style,

    /// Style for column headings in the grid.
    pub column_header_style: Style,

    /// Style for the status bar.
    pub status_bar_style: Style,
}

impl Theme {
    /// Creates a dark theme (light text on dark background).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            shift_fg: Color::Rgb(100, 220, 120),
            off_fg: Color::Rgb(255, 110, 110),
            empty_fg: Color::Rgb(110, 110, 110),

            focused_bg: Color::Rgb(60, 60, 80),
            editing_bg: Color::Rgb(40, 70, 120),
            dirty_fg: Color::Rgb(255, 200, 100),

            fg: Color::Rgb(220, 220, 220),
            bg: Color::Reset,
            dimmed_fg: Color::Rgb(128, 128, 128),
            accent: Color::Rgb(100, 150, 255),
            error_fg: Color::Rgb(255, 80, 80),

            border_style: Style::default().fg(Color::Rgb(80, 80, 100)),
            focused_border_style: Style::default().fg(Color::Rgb(100, 150, 255)),

            header_style: Style::default()
                .fg(Color::Rgb(100, 150, 255))
                .add_modifier(Modifier::BOLD),
            column_header_style: Style::default()
                .fg(Color::Rgb(200, 200, 220))
                .add_modifier(Modifier::BOLD),
            status_bar_style: Style::default()
                .fg(Color::Rgb(180, 180, 180))
                .bg(Color::Rgb(40, 40, 50)),
        }
    }

    /// Creates a light theme (dark text on light background).
    #[must_use]
    pub fn light() -> Self {
        Self {
            shift_fg: Color::Rgb(20, 130, 50),
            off_fg: Color::Rgb(190, 40, 40),
            empty_fg: Color::Rgb(150, 150, 150),

            focused_bg: Color::Rgb(200, 200, 220),
            editing_bg: Color::Rgb(180, 205, 240),
            dirty_fg: Color::Rgb(180, 110, 0),

            fg: Color::Rgb(30, 30, 30),
            bg: Color::Reset,
            dimmed_fg: Color::Rgb(100, 100, 100),
            accent: Color::Rgb(50, 100, 200),
            error_fg: Color::Rgb(180, 50, 50),

            border_style: Style::default().fg(Color::Rgb(150, 150, 170)),
            focused_border_style: Style::default().fg(Color::Rgb(50, 100, 200)),

            header_style: Style::default()
                .fg(Color::Rgb(50, 100, 200))
                .add_modifier(Modifier::BOLD),
            column_header_style: Style::default()
                .fg(Color::Rgb(40, 40, 60))
                .add_modifier(Modifier::BOLD),
            status_bar_style: Style::default()
                .fg(Color::Rgb(60, 60, 60))
                .bg(Color::Rgb(220, 220, 230)),
        }
    }

    /// Creates a theme from a [`ColorScheme`] configuration.
    ///
    /// If the scheme is [`ColorScheme::Auto`], defaults to dark theme.
    #[must_use]
    pub fn from_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark | ColorScheme::Auto | _ => Self::dark(),
        }
    }

    /// Returns the color for a cell category.
    #[must_use]
    pub const fn category_color(&self, category: ShiftCategory) -> Color {
        match category {
            ShiftCategory::Shift => self.shift_fg,
            ShiftCategory::Off => self.off_fg,
            ShiftCategory::Empty => self.empty_fg,
        }
    }

    /// Returns the style for a cell category.
    #[must_use]
    pub fn category_style(&self, category: ShiftCategory) -> Style {
        let style = Style::default().fg(self.category_color(category));
        if category == ShiftCategory::Off {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    /// Returns the legend swatch for a cell category.
    #[must_use]
    pub const fn category_swatch(category: ShiftCategory) -> &'static str {
        match category {
            ShiftCategory::Shift => "■",
            ShiftCategory::Off => "▣",
            ShiftCategory::Empty => "□",
        }
    }

    /// Returns a style with the base foreground color.
    #[must_use]
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Returns a style for dimmed/secondary text.
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed_fg)
    }

    /// Returns a style for accent/highlighted text.
    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Returns a style for error text.
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error_fg)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
