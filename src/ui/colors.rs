//! Color scheme for the favdir TUI.

use ratatui::style::Color;

/// Colors used by the panes, table and status bar.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    /// Primary text color
    pub text: Color,
    /// Dimmed/secondary text color, used for the table header
    pub text_dim: Color,
    /// Border color for unfocused panes
    pub border: Color,
    /// Border color for the focused pane
    pub border_focused: Color,
    /// Directory names
    pub dirs: Color,
    /// Background of the highlighted row
    pub selected_bg: Color,
    /// Accent color for titles
    pub accent: Color,
    /// Key shortcut color
    pub key_fg: Color,
    /// Hint text color
    pub hint_fg: Color,
    /// Status bar foreground color
    pub status_fg: Color,
    /// Status bar background color
    pub status_bg: Color,
    /// Error message color
    pub error_fg: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// High-contrast colors for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            text: Color::Rgb(230, 230, 230),
            text_dim: Color::Rgb(128, 128, 140),
            border: Color::Rgb(80, 80, 100),
            border_focused: Color::Rgb(100, 149, 237), // Cornflower blue
            dirs: Color::Rgb(100, 149, 237),
            selected_bg: Color::Rgb(50, 60, 90),
            accent: Color::Rgb(255, 215, 0), // Gold
            key_fg: Color::Rgb(255, 215, 0),
            hint_fg: Color::Rgb(128, 128, 140),
            status_fg: Color::Rgb(200, 200, 210),
            status_bg: Color::Rgb(30, 30, 40),
            error_fg: Color::Rgb(255, 99, 71), // Tomato
        }
    }
}
