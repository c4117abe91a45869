use folio_core::SectionId;
use ratatui::style::Modifier;

use super::{gradient_line, section_tag};
use crate::page::{DocumentBuilder, LinkAction, PageContext};

pub struct ContactSection;

impl ContactSection {
    pub const CHILDREN: usize = 5;

    pub fn build(doc: &mut DocumentBuilder, ctx: &PageContext) {
        let id = SectionId::Contact;
        let theme = ctx.theme;
        let content = ctx.content;

        doc.begin_section(id);
        doc.blank(2);
        doc.child(ctx.child(id, 0), |doc| section_tag(doc, "CONTACT", theme.dim()));
        doc.blank(1);
        doc.child(ctx.child(id, 1), |doc| {
            doc.text("Let's talk about something interesting!", theme.heading());
        });
        doc.blank(2);

        doc.child(ctx.child(id, 2), |doc| {
            doc.text("Ready to Start Your Project?", theme.highlight());
            doc.blank(1);
            doc.text(
                "I'm always excited to hear about new opportunities and creative projects. \
                 Whether you need a website, 3D Design, or just want to chat about tech, \
                 I'd love to hear from you!",
                theme.text(),
            );
            doc.blank(1);
            doc.buttons(vec![
                (
                    content.contact_cta.label.clone(),
                    LinkAction::Href(content.contact_cta.href.clone()),
                ),
                (
                    content.email_cta.label.clone(),
                    LinkAction::Href(content.email_cta.href.clone()),
                ),
            ]);
        });
        doc.blank(2);

        doc.child(ctx.child(id, 3), |doc| {
            doc.text("Other Ways to Connect", theme.dim());
            doc.blank(1);
            doc.buttons(
                content
                    .social_links
                    .iter()
                    .map(|s| (s.name.clone(), LinkAction::Href(s.url.clone())))
                    .collect(),
            );
        });
        doc.blank(2);

        doc.child(ctx.child(id, 4), |doc| {
            doc.line(gradient_line(
                "Let's Build Something Amazing Together!",
                theme.accent,
                theme.focus,
                Modifier::BOLD,
            ));
            doc.text("We make a breakthrough", theme.dim());
        });
        doc.blank(3);
    }
}
