use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;
use crate::app::App;

/// Popup listing the key bindings
pub struct HelpWidget;

impl HelpWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let keys = &app.config.keymap;
        let popup = centered_rect(60, 70, area);

        let rows: [(String, &str); 14] = [
            (format!("{} / ↓", keys.scroll_down), "Scroll down"),
            (format!("{} / ↑", keys.scroll_up), "Scroll up"),
            (format!("{} / {}", keys.scroll_half_down, keys.scroll_half_up), "Half page down / up"),
            (format!("{} / {}", keys.jump_to_top, keys.jump_to_bottom), "Top / bottom"),
            (keys.jump_to_nav.join(" "), "Jump to navigation link"),
            (format!("{} / {}", keys.next_link, keys.prev_link), "Next / previous link"),
            (keys.activate.clone(), "Open focused link"),
            (keys.cycle_filter.clone(), "Cycle project filter"),
            (keys.toggle_language.clone(), "Switch language"),
            (keys.toggle_menu.clone(), "Navigation menu"),
            ("mouse".to_string(), "Wheel scrolls, click opens"),
            ("<Esc>".to_string(), "Close dialog"),
            (keys.help.clone(), "This help"),
            (format!("{} / <C-c>", keys.quit), "Quit"),
        ];

        let lines: Vec<Line> = rows
            .into_iter()
            .map(|(key, description)| {
                Line::from(vec![
                    Span::styled(format!("  {:<16}", key), theme.highlight()),
                    Span::styled(description, theme.text()),
                ])
            })
            .collect();

        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(lines).style(theme.panel()).block(
                Block::default()
                    .title(" Keys ")
                    .borders(Borders::ALL)
                    .border_style(theme.heading()),
            ),
            popup,
        );
    }
}
