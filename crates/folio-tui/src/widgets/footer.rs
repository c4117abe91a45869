use folio_core::SectionId;
use ratatui::{
    style::Modifier,
    text::{Line, Span},
};

use super::gradient_line;
use crate::page::{DocumentBuilder, LinkAction, PageContext};

pub struct FooterSection;

impl FooterSection {
    pub const CHILDREN: usize = 6;

    pub fn build(doc: &mut DocumentBuilder, ctx: &PageContext) {
        let id = SectionId::Footer;
        let theme = ctx.theme;
        let content = ctx.content;
        let profile = &content.profile;

        doc.begin_section(id);
        doc.blank(1);
        doc.line(Line::styled(
            "─".repeat(doc.content_width() as usize),
            theme.dim(),
        ));
        doc.blank(1);

        doc.child(ctx.child(id, 0), |doc| {
            doc.line(gradient_line(&profile.brand, theme.accent, theme.focus, Modifier::BOLD));
            doc.text(&profile.tagline, theme.dim());
        });
        doc.blank(1);
        doc.child(ctx.child(id, 1), |doc| {
            doc.buttons(
                content
                    .social_links
                    .iter()
                    .map(|s| (s.name.clone(), LinkAction::Href(s.url.clone())))
                    .collect(),
            );
        });
        doc.blank(2);
        doc.child(ctx.child(id, 2), |doc| {
            doc.text("Quick Links", theme.heading());
            doc.buttons(
                content
                    .quick_links
                    .iter()
                    .map(|l| (l.label.clone(), LinkAction::Href(l.href.clone())))
                    .collect(),
            );
        });
        doc.blank(2);
        doc.child(ctx.child(id, 3), |doc| {
            doc.text("Contact", theme.heading());
            for item in &content.contact_items {
                doc.line(Line::from(vec![
                    Span::raw(format!("{} ", item.icon)),
                    Span::styled(item.text.clone(), theme.text()),
                ]));
            }
        });
        doc.blank(2);
        doc.child(ctx.child(id, 4), |doc| {
            doc.text(
                "Let's create something amazing. Get in touch and let's discuss your project.",
                theme.text(),
            );
            doc.button("Start Project", LinkAction::Href("#contact".into()));
        });
        doc.blank(2);
        doc.child(ctx.child(id, 5), |doc| {
            doc.text(&profile.copyright, theme.dim());
            doc.button("↑ Back to Top", LinkAction::Href("#home".into()));
        });
        doc.blank(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::RevealScheduler;
    use crate::theme::Theme;
    use folio_core::{ContentRegistry, ProjectFilter};
    use std::time::{Duration, Instant};

    #[test]
    fn test_footer_links_end_with_back_to_top() {
        let content = ContentRegistry::builtin();
        let theme = Theme::default();
        let mut reveal = RevealScheduler::new();
        let start = Instant::now();
        reveal.observe(SectionId::Footer, 0.5, start);
        let ctx = PageContext {
            content: &content,
            theme: &theme,
            reveal: &reveal,
            now: start + Duration::from_secs(3),
            typed: "",
            filter: ProjectFilter::All,
            viewport_height: 24,
        };

        let mut doc = DocumentBuilder::new(120, None, &theme);
        FooterSection::build(&mut doc, &ctx);
        let doc = doc.finish();

        // socials, quick links, start project, back to top
        assert_eq!(doc.links.len(), 2 + 5 + 2);
        let last = doc.links.last().unwrap();
        assert_eq!(last.label, "↑ Back to Top");
        assert_eq!(last.action, LinkAction::Href("#home".into()));
    }
}
