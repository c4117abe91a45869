use folio_core::{ContentRegistry, SectionId};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::clip;
use crate::app::App;
use crate::nav::{Language, NavState};

/// Link row plus the progress bar
pub const NAVBAR_HEIGHT: u16 = 2;

const MENU_TOGGLE: &str = " ☰ ";
const CTA_LABEL: &str = "Contact";

/// Where the navigation bar's call to action leads
pub const CTA_HREF: &str = "#contact";

/// Clickable element of the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavHit {
    /// Index into the content's nav links
    Link(usize),
    Cta,
    Language,
    LanguageOption(Language),
    MenuToggle,
}

/// Where everything in the navigation bar sits for a given width
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavbarLayout {
    pub collapsed: bool,
    pub brand: Rect,
    pub items: Vec<(Rect, NavHit)>,
}

impl NavbarLayout {
    pub fn compute(area: Rect, content: &ContentRegistry, nav: &NavState) -> Self {
        let y = area.y;
        let right = area.x + area.width;
        let brand_width = (content.profile.brand.width() as u16).min(area.width.saturating_sub(2));
        let brand = Rect::new(area.x + 1, y, brand_width, 1);

        let cta_width = CTA_LABEL.width() as u16 + 2;
        let lang_width = 4;
        let mut items = Vec::new();

        // Right-hand cluster first, links fill the space left of it
        let cta_x = right.saturating_sub(cta_width + 1);
        let lang_x = cta_x.saturating_sub(lang_width + 1);

        let mut x = brand.x + brand.width + 3;
        let mut links = Vec::new();
        for (i, link) in content.nav_links.iter().enumerate() {
            let width = link.label.width() as u16 + 2;
            links.push((Rect::new(x, y, width, 1), NavHit::Link(i)));
            x += width + 1;
        }
        let fits = x <= lang_x;
        let collapsed = NavState::is_collapsed(area.width) || !fits;

        if collapsed {
            let toggle_width = MENU_TOGGLE.width() as u16;
            let toggle_x = right.saturating_sub(toggle_width + 1);
            let lang_x = toggle_x.saturating_sub(lang_width + 1);
            items.push((Rect::new(lang_x, y, lang_width, 1), NavHit::Language));
            items.push((Rect::new(toggle_x, y, toggle_width, 1), NavHit::MenuToggle));

            if nav.menu_open {
                let menu_width = area.width.min(30);
                let menu_x = right.saturating_sub(menu_width);
                let mut row = y + NAVBAR_HEIGHT;
                for (i, _) in content.nav_links.iter().enumerate() {
                    items.push((Rect::new(menu_x, row, menu_width, 1), NavHit::Link(i)));
                    row += 1;
                }
                items.push((Rect::new(menu_x, row, menu_width, 1), NavHit::Cta));
            }
        } else {
            items.extend(links);
            items.push((Rect::new(lang_x, y, lang_width, 1), NavHit::Language));
            items.push((Rect::new(cta_x, y, cta_width, 1), NavHit::Cta));
        }

        if nav.language_open {
            if let Some(&(lang, _)) = items.iter().find(|(_, hit)| *hit == NavHit::Language) {
                let width = 14;
                let x = (lang.x + lang.width).saturating_sub(width).max(area.x);
                for (i, language) in [Language::En, Language::Id].into_iter().enumerate() {
                    items.push((
                        Rect::new(x, y + NAVBAR_HEIGHT + i as u16, width, 1),
                        NavHit::LanguageOption(language),
                    ));
                }
            }
        }

        // Bar items stay on the bar row, dropdown rows within its columns
        let bar = Rect::new(area.x, y, area.width, area.height.min(1));
        let items = items
            .into_iter()
            .filter_map(|(rect, hit)| {
                let clipped = if rect.y == y {
                    clip(rect, bar)
                } else {
                    let left = rect.x.max(area.x);
                    let width = (rect.x + rect.width).min(right).saturating_sub(left);
                    (width > 0).then(|| Rect::new(left, rect.y, width, rect.height))
                };
                clipped.map(|rect| (rect, hit))
            })
            .collect();

        Self {
            collapsed,
            brand: brand.intersection(bar),
            items,
        }
    }

    /// Element under the terminal cell `col`, `row`
    pub fn hit(&self, col: u16, row: u16) -> Option<NavHit> {
        // Dropdown rows are pushed last and drawn on top
        self.items
            .iter()
            .rev()
            .find(|(rect, _)| row == rect.y && col >= rect.x && col < rect.x + rect.width)
            .map(|&(_, hit)| hit)
    }
}

/// Widget for rendering the navigation bar
pub struct NavbarWidget;

impl NavbarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let nav = &app.nav;
        let content = &app.content;
        let screen = frame.area();
        let Some(area) = clip(area, screen) else {
            return;
        };
        let layout = NavbarLayout::compute(area, content, nav);

        let bar_style = if nav.is_scrolled() {
            Style::default().bg(theme.bg1)
        } else {
            Style::default().bg(theme.bg0)
        };
        let top = Rect::new(area.x, area.y, area.width, 1);
        frame.render_widget(Paragraph::new("").style(bar_style), top);

        let brand_style = if nav.is_scrolled() {
            theme.heading()
        } else {
            theme.highlight()
        };
        if !layout.brand.is_empty() {
            frame.render_widget(
                Paragraph::new(super::truncate(&content.profile.brand, layout.brand.width as usize))
                    .style(brand_style),
                layout.brand,
            );
        }

        for &(rect, hit) in &layout.items {
            if rect.y != area.y {
                continue;
            }
            let (label, style) = match hit {
                NavHit::Link(i) => {
                    let Some(link) = content.nav_links.get(i) else {
                        continue;
                    };
                    let style = if is_active(&link.href, nav.active) {
                        theme.highlight().add_modifier(Modifier::UNDERLINED)
                    } else {
                        theme.text()
                    };
                    (format!(" {} ", link.label), style)
                }
                NavHit::Cta => (format!(" {} ", CTA_LABEL), theme.link()),
                NavHit::Language => (format!(" {} ", nav.language.code()), theme.dim()),
                NavHit::MenuToggle => {
                    let style = if nav.menu_open { theme.highlight() } else { theme.text() };
                    (MENU_TOGGLE.to_string(), style)
                }
                NavHit::LanguageOption(_) => continue,
            };
            frame.render_widget(Paragraph::new(label).style(style), rect);
        }

        if area.height > 1 {
            render_progress(frame, Rect::new(area.x, area.y + 1, area.width, 1), nav.progress(), app);
        }

        // Dropdowns overlay the page below the bar
        for &(rect, hit) in &layout.items {
            if rect.y == area.y {
                continue;
            }
            let Some(rect) = clip(rect, screen) else {
                continue;
            };
            let line = match hit {
                NavHit::Link(i) => {
                    let Some(link) = content.nav_links.get(i) else {
                        continue;
                    };
                    let style = if is_active(&link.href, nav.active) {
                        theme.highlight()
                    } else {
                        theme.text()
                    };
                    Line::from(Span::styled(format!("  {}", link.label), style))
                }
                NavHit::Cta => Line::from(Span::styled(
                    format!("  {} →", CTA_LABEL),
                    theme.heading(),
                )),
                NavHit::LanguageOption(language) => {
                    let marker = if language == nav.language { "●" } else { " " };
                    Line::from(Span::styled(
                        format!(" {} {} {}", marker, language.code(), language.name()),
                        theme.text(),
                    ))
                }
                _ => continue,
            };
            frame.render_widget(Clear, rect);
            frame.render_widget(Paragraph::new(line).style(theme.panel()), rect);
        }
    }
}

fn is_active(href: &str, active: Option<SectionId>) -> bool {
    active.is_some() && SectionId::from_anchor(href) == active
}

fn render_progress(frame: &mut Frame, area: Rect, progress: f64, app: &App) {
    let theme = &app.theme;
    let filled = ((area.width as f64) * progress / 100.0).round() as usize;
    let filled = filled.min(area.width as usize);
    let line = Line::from(vec![
        Span::styled("━".repeat(filled), Style::default().fg(theme.accent)),
        Span::styled(
            "─".repeat(area.width as usize - filled),
            Style::default().fg(theme.bg2),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(theme.bg0)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_layout_lists_links() {
        let content = ContentRegistry::builtin();
        let nav = NavState::new();
        let layout = NavbarLayout::compute(Rect::new(0, 0, 120, 2), &content, &nav);

        assert!(!layout.collapsed);
        let links = layout
            .items
            .iter()
            .filter(|(_, hit)| matches!(hit, NavHit::Link(_)))
            .count();
        assert_eq!(links, 5);

        let (about, _) = layout.items[1];
        assert_eq!(layout.hit(about.x, 0), Some(NavHit::Link(1)));
        assert_eq!(layout.hit(about.x, 1), None);
        assert_eq!(layout.hit(118, 0), Some(NavHit::Cta));
    }

    #[test]
    fn test_narrow_layout_collapses() {
        let content = ContentRegistry::builtin();
        let mut nav = NavState::new();
        let layout = NavbarLayout::compute(Rect::new(0, 0, 60, 2), &content, &nav);
        assert!(layout.collapsed);
        assert!(!layout.items.iter().any(|(_, hit)| matches!(hit, NavHit::Link(_))));
        assert_eq!(layout.hit(57, 0), Some(NavHit::MenuToggle));

        nav.toggle_menu();
        let layout = NavbarLayout::compute(Rect::new(0, 0, 60, 2), &content, &nav);
        assert_eq!(layout.hit(50, 2), Some(NavHit::Link(0)));
        assert_eq!(layout.hit(50, 7), Some(NavHit::Cta));
    }

    #[test]
    fn test_language_dropdown() {
        let content = ContentRegistry::builtin();
        let mut nav = NavState::new();
        nav.language_open = true;
        let layout = NavbarLayout::compute(Rect::new(0, 0, 120, 2), &content, &nav);
        assert!(layout
            .items
            .iter()
            .any(|&(rect, hit)| rect.y == 3 && hit == NavHit::LanguageOption(Language::Id)));
    }

    #[test]
    fn test_active_link() {
        assert!(is_active("#about", Some(SectionId::About)));
        assert!(!is_active("#about", Some(SectionId::Home)));
        assert!(!is_active("#nowhere", None));
    }
}
