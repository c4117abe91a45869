use ratatui::style::{Color, Modifier, Style};

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub muted: Color,

    // Semantic colors
    /// Highlights, headings, progress bar
    pub accent: Color,
    /// Second stop of gradient text and badges
    pub accent_alt: Color,
    /// Focused link
    pub focus: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::violet()
    }
}

impl Theme {
    pub fn text(&self) -> Style {
        Style::default().fg(self.fg0)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn heading(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn highlight(&self) -> Style {
        Style::default().fg(self.accent_alt).add_modifier(Modifier::BOLD)
    }

    /// Idle link or button
    pub fn link(&self) -> Style {
        Style::default().fg(self.fg1).bg(self.bg2)
    }

    pub fn focused_link(&self) -> Style {
        Style::default()
            .fg(self.bg0)
            .bg(self.focus)
            .add_modifier(Modifier::BOLD)
    }

    pub fn panel(&self) -> Style {
        Style::default().fg(self.fg0).bg(self.bg1)
    }
}
