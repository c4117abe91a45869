use folio_core::Certificate;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::{centered_rect, clip, image};
use crate::app::App;

/// Certificate preview drawn over the page
pub struct CertificateModalWidget;

impl CertificateModalWidget {
    /// Outer rect of the dialog; clicks outside it close the modal
    pub fn area(screen: Rect) -> Rect {
        centered_rect(80, 80, screen)
    }

    /// Cell area the certificate image is drawn into
    pub fn image_area(screen: Rect) -> Rect {
        Self::sections(Self::area(screen))[2]
    }

    fn sections(dialog: Rect) -> [Rect; 4] {
        let inner = Block::default().borders(Borders::ALL).inner(dialog);
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);
        [chunks[0], chunks[1], chunks[2], chunks[3]]
    }

    pub fn render(frame: &mut Frame, screen: Rect, certificate: &Certificate, app: &App) {
        let theme = &app.theme;
        let dialog = Self::area(screen);
        let [meta, description, picture, hint] = Self::sections(dialog);

        frame.render_widget(Clear, dialog);
        let block = Block::default()
            .title(format!(" {} {} ", certificate.badge, certificate.title))
            .borders(Borders::ALL)
            .border_style(theme.heading())
            .style(theme.panel());
        frame.render_widget(block, dialog);

        frame.render_widget(
            Paragraph::new(format!("{} • {}", certificate.issuer, certificate.date)).style(theme.dim()),
            meta,
        );
        frame.render_widget(
            Paragraph::new(certificate.description.as_str())
                .style(theme.text())
                .wrap(Wrap { trim: true }),
            description,
        );

        match app
            .assets
            .thumbnail(&certificate.image, picture.width, picture.height)
        {
            Some(thumb) => image::render(frame.buffer_mut(), picture, thumb),
            None => {
                let label = app.assets.placeholder(&certificate.image);
                let y = picture.y + picture.height / 2;
                if let Some(row) = clip(Rect::new(picture.x, y, picture.width, 1), picture) {
                    frame.render_widget(
                        Paragraph::new(Line::from(label).centered()).style(theme.dim()),
                        row,
                    );
                }
            }
        }

        frame.render_widget(
            Paragraph::new(Line::from("Esc / q close").right_aligned()).style(theme.dim()),
            hint,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_area_inside_dialog() {
        let screen = Rect::new(0, 0, 100, 40);
        let dialog = CertificateModalWidget::area(screen);
        let picture = CertificateModalWidget::image_area(screen);
        assert!(dialog.contains(picture.as_position()));
        assert!(picture.height >= 20);
        assert_eq!(picture.width, dialog.width - 2);
    }
}
