use folio_core::{ContentRegistry, ProjectFilter, SectionId};
use ratatui::{
    style::Style,
    text::{Line, Span},
};

use super::section_tag;
use crate::page::{DocumentBuilder, LinkAction, PageContext};

/// Rows reserved for a project screenshot
pub const PROJECT_IMAGE_ROWS: u16 = 10;
pub const PROJECT_IMAGE_COLS: u16 = 44;

/// Filterable project cards
pub struct ProjectsSection;

impl ProjectsSection {
    /// Tag, description, filter bar, then the cards passing `filter`
    pub fn children(content: &ContentRegistry, filter: ProjectFilter) -> usize {
        3 + filter.apply(&content.projects).len()
    }

    pub fn build(doc: &mut DocumentBuilder, ctx: &PageContext) {
        let id = SectionId::Projects;
        let theme = ctx.theme;

        doc.begin_section(id);
        doc.blank(2);
        doc.child(ctx.child(id, 0), |doc| {
            section_tag(doc, "FEATURED WORK", theme.dim());
            doc.blank(1);
            doc.text("PROJECTS", theme.heading());
        });
        doc.blank(1);
        doc.child(ctx.child(id, 1), |doc| {
            doc.text(
                "A collection of my projects showcasing my skills and creativity.",
                theme.text(),
            );
        });
        doc.blank(1);
        doc.child(ctx.child(id, 2), |doc| {
            let buttons = ProjectFilter::ALL
                .iter()
                .map(|&filter| {
                    let label = if filter == ctx.filter {
                        format!("● {}", filter.label())
                    } else {
                        filter.label().to_string()
                    };
                    (label, LinkAction::SetFilter(filter))
                })
                .collect();
            doc.buttons(buttons);
        });
        doc.blank(2);

        let projects = ctx.filter.apply(&ctx.content.projects);
        if projects.is_empty() {
            doc.text("No projects in this category.", theme.dim());
            doc.blank(2);
        }

        for (i, project) in projects.into_iter().enumerate() {
            doc.child(ctx.child(id, 3 + i), |doc| {
                doc.image(&project.image, PROJECT_IMAGE_COLS, PROJECT_IMAGE_ROWS);
                doc.line(Line::styled(project.category.badge(), theme.dim()));
                doc.text(&project.title, theme.heading());
                doc.text(&project.description, theme.text());

                let mut tags = Vec::new();
                for tech in &project.tech {
                    if !tags.is_empty() {
                        tags.push(Span::raw(" "));
                    }
                    tags.push(Span::styled(
                        format!(" {} ", tech),
                        Style::default().fg(theme.accent_alt).bg(theme.bg1),
                    ));
                }
                doc.line(Line::from(tags));
                doc.blank(1);
                doc.button("View Project ↗", LinkAction::Href(project.link.clone()));
            });
            doc.blank(2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Document;
    use crate::reveal::RevealScheduler;
    use crate::theme::Theme;
    use folio_core::content::ProjectCategory;
    use std::time::{Duration, Instant};

    fn build(filter: ProjectFilter) -> Document {
        let content = ContentRegistry::builtin();
        let theme = Theme::default();
        let mut reveal = RevealScheduler::new();
        let start = Instant::now();
        reveal.observe(SectionId::Projects, 1.0, start);
        let ctx = PageContext {
            content: &content,
            theme: &theme,
            reveal: &reveal,
            now: start + Duration::from_secs(3),
            typed: "",
            filter,
            viewport_height: 24,
        };
        let mut doc = DocumentBuilder::new(100, None, &theme);
        ProjectsSection::build(&mut doc, &ctx);
        doc.finish()
    }

    #[test]
    fn test_filter_limits_cards() {
        let all = build(ProjectFilter::All);
        assert_eq!(all.images.len(), 4);

        let web = build(ProjectFilter::Category(ProjectCategory::Web));
        assert_eq!(web.images.len(), 2);
        assert!(web.images.iter().all(|slot| slot.visible));
        assert!(web
            .links
            .iter()
            .any(|l| l.action == LinkAction::Href("https://github.com/Iiboyy/School-Web".into())));
    }

    #[test]
    fn test_filter_buttons_first() {
        let doc = build(ProjectFilter::All);
        let filters: Vec<_> = doc.links.iter().take(3).map(|l| l.action.clone()).collect();
        assert_eq!(
            filters,
            ProjectFilter::ALL.iter().map(|&f| LinkAction::SetFilter(f)).collect::<Vec<_>>()
        );
        assert_eq!(doc.links[0].label, "● All Projects");
    }

    #[test]
    fn test_child_count_follows_filter() {
        let content = ContentRegistry::builtin();
        assert_eq!(ProjectsSection::children(&content, ProjectFilter::All), 7);
        assert_eq!(
            ProjectsSection::children(&content, ProjectFilter::Category(ProjectCategory::ThreeD)),
            5
        );
    }
}
