mod about;
mod certificates;
mod contact;
mod footer;
mod help;
mod hero;
pub mod image;
mod modal;
mod navbar;
mod page;
mod projects;
mod status_bar;

pub use about::AboutSection;
pub use certificates::CertificatesSection;
pub use contact::ContactSection;
pub use footer::FooterSection;
pub use help::HelpWidget;
pub use hero::HeroSection;
pub use modal::CertificateModalWidget;
pub use navbar::{NavHit, NavbarLayout, NavbarWidget, CTA_HREF, NAVBAR_HEIGHT};
pub use page::PageWidget;
pub use projects::ProjectsSection;
pub use status_bar::StatusBarWidget;

use folio_core::{ContentRegistry, ProjectFilter, Rgb, SectionId};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::page::{Document, DocumentBuilder, PageContext};

/// Lay out every section in document order
pub fn build_document(ctx: &PageContext, width: u16, focused: Option<usize>) -> Document {
    let mut doc = DocumentBuilder::new(width, focused, ctx.theme);
    HeroSection::build(&mut doc, ctx);
    AboutSection::build(&mut doc, ctx);
    CertificatesSection::build(&mut doc, ctx);
    ProjectsSection::build(&mut doc, ctx);
    ContactSection::build(&mut doc, ctx);
    FooterSection::build(&mut doc, ctx);
    doc.finish()
}

/// Number of staggered children a section reveals
pub fn child_count(section: SectionId, content: &ContentRegistry, filter: ProjectFilter) -> usize {
    match section {
        SectionId::Home => HeroSection::CHILDREN,
        SectionId::About => AboutSection::children(content),
        SectionId::Certificates => CertificatesSection::children(content),
        SectionId::Projects => ProjectsSection::children(content, filter),
        SectionId::Contact => ContactSection::CHILDREN,
        SectionId::Footer => FooterSection::CHILDREN,
    }
}

/// Small uppercase label above a section heading
pub(crate) fn section_tag(doc: &mut DocumentBuilder, tag: &str, style: Style) {
    doc.line(Line::from(vec![
        Span::styled("── ", style),
        Span::styled(tag.to_string(), style.add_modifier(Modifier::BOLD)),
    ]));
}

pub(crate) fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

fn to_rgb(color: Color) -> Option<Rgb> {
    match color {
        Color::Rgb(r, g, b) => Some(Rgb(r, g, b)),
        _ => None,
    }
}

/// Text whose characters fade from `from` to `to`
///
/// Falls back to solid `from` when either color is not true-color.
pub(crate) fn gradient_line(text: &str, from: Color, to: Color, modifier: Modifier) -> Line<'static> {
    let (Some(start), Some(end)) = (to_rgb(from), to_rgb(to)) else {
        return Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(from).add_modifier(modifier),
        ));
    };

    let count = text.chars().count();
    let spans = text
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            let t = if count > 1 { i as f64 / (count - 1) as f64 } else { 0.0 };
            let color = to_color(start.lerp(end, t));
            Span::styled(ch.to_string(), Style::default().fg(color).add_modifier(modifier))
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

/// Cut `text` to at most `width` display columns
pub(crate) fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.to_string().width();
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Helper to create a centered rect
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Part of `rect` inside `bounds`, or None when nothing is left to draw
pub(crate) fn clip(rect: Rect, bounds: Rect) -> Option<Rect> {
    let clipped = rect.intersection(bounds);
    (!clipped.is_empty()).then_some(clipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_line_endpoints() {
        let line = gradient_line("abc", Color::Rgb(0, 0, 0), Color::Rgb(200, 100, 0), Modifier::BOLD);
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[0].style.fg, Some(Color::Rgb(0, 0, 0)));
        assert_eq!(line.spans[2].style.fg, Some(Color::Rgb(200, 100, 0)));
    }

    #[test]
    fn test_gradient_line_indexed_colors() {
        let line = gradient_line("abc", Color::Magenta, Color::Rgb(1, 2, 3), Modifier::empty());
        assert_eq!(line.spans.len(), 1);
        assert_eq!(line.spans[0].style.fg, Some(Color::Magenta));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer label", 6), "a lon…");
    }
}
