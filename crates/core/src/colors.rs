use crossterm::style::{Color, StyledContent, Stylize};

/// Terminal styling for the rendered command, or plain text when disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    enabled: bool,
}

impl Theme {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    #[must_use]
    pub fn colored() -> Self {
        Self::new(true)
    }

    #[must_use]
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Program name, flags, image and non-editable segments
    pub fn dim(&self, text: &str) -> String {
        self.paint(text, |s| s.with(Color::DarkGrey))
    }

    /// The selected parameter
    pub fn highlight(&self, text: &str) -> String {
        self.paint(text, |s| s.with(Color::Blue))
    }

    /// Parameters that differ from their default
    pub fn modified(&self, text: &str) -> String {
        self.paint(text, |s| s.with(Color::DarkYellow).dim())
    }

    pub fn cursor(&self, text: &str) -> String {
        self.paint(text, |s| s.reverse())
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, |s| s.with(Color::Red))
    }

    fn paint<F>(&self, text: &str, style: F) -> String
    where
        F: FnOnce(StyledContent<&str>) -> StyledContent<&str>,
    {
        if !self.enabled || text.is_empty() {
            return text.to_string();
        }

        style(text.stylize()).to_string()
    }
}
