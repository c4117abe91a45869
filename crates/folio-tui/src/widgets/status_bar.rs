use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Mode};

/// Widget for rendering the status line
pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let mode = if app.modal.is_open() {
            " PREVIEW "
        } else {
            match app.mode {
                Mode::Normal => " PAGE ",
                Mode::Help => " HELP ",
            }
        };

        let message = match (&app.status_message, app.focused()) {
            (Some(msg), _) => msg.clone(),
            (None, Some(link)) => format!("→ {}", link.label),
            (None, None) => app
                .nav
                .active
                .map(|s| s.anchor().to_string())
                .unwrap_or_default(),
        };

        let right = format!(
            " {} · {:>3.0}% · ? help ",
            app.nav.language.code(),
            app.nav.progress()
        );

        let line = Line::from(vec![
            Span::styled(mode, Style::default().fg(theme.bg0).bg(theme.accent)),
            Span::styled(format!(" {}", message), theme.text()),
        ]);
        frame.render_widget(Paragraph::new(line).style(theme.panel()), area);
        frame.render_widget(
            Paragraph::new(Line::styled(right, theme.dim()).right_aligned()),
            area,
        );
    }
}
