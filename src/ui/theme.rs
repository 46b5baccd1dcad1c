//! Visual theme and styling.

use console::Style;

/// Report theme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Passing probes (green).
    pub success: Style,
    /// Failing probes (red bold).
    pub error: Style,
    /// Skipped probes and secondary text.
    pub dim: Style,
    /// Report title.
    pub highlight: Style,
    /// Category headers (magenta bold).
    pub header: Style,
    /// Captured traces (dim italic).
    pub trace: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the coloured theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().magenta(),
            trace: Style::new().dim().italic(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            trace: Style::new(),
        }
    }

    /// Pick the coloured or plain theme.
    pub fn for_colors(enabled: bool) -> Self {
        if enabled {
            // console re-checks the terminal unless styling is forced
            Self::force_styling(Self::new())
        } else {
            Self::plain()
        }
    }

    fn force_styling(theme: Self) -> Self {
        Self {
            success: theme.success.force_styling(true),
            error: theme.error.force_styling(true),
            dim: theme.dim.force_styling(true),
            highlight: theme.highlight.force_styling(true),
            header: theme.header.force_styling(true),
            trace: theme.trace.force_styling(true),
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
