use crossterm::style::Stylize;

/// Severity of a one-line status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    /// Wrap `text` in the ANSI color for this severity, or leave it alone when
    /// color is off.
    pub(crate) fn paint(self, text: &str, color: bool) -> String {
        if !color {
            return text.to_string();
        }
        match self {
            StatusKind::Info => text.green().to_string(),
            StatusKind::Error => text.red().to_string(),
        }
    }
}
