use folio_core::{ContentRegistry, SectionId};
use ratatui::text::{Line, Span};

use super::section_tag;
use crate::page::{DocumentBuilder, LinkAction, PageContext};

pub struct CertificatesSection;

impl CertificatesSection {
    pub fn children(content: &ContentRegistry) -> usize {
        2 + content.certificates.len()
    }

    pub fn build(doc: &mut DocumentBuilder, ctx: &PageContext) {
        let id = SectionId::Certificates;
        let theme = ctx.theme;

        doc.begin_section(id);
        doc.blank(2);
        doc.child(ctx.child(id, 0), |doc| {
            section_tag(doc, "ACHIEVEMENTS", theme.dim());
            doc.blank(1);
            doc.text("CERTIFICATES", theme.heading());
        });
        doc.blank(1);
        doc.child(ctx.child(id, 1), |doc| {
            doc.text(
                "Professional certifications that validate my expertise in design and development.",
                theme.text(),
            );
        });
        doc.blank(1);

        for (i, cert) in ctx.content.certificates.iter().enumerate() {
            doc.child(ctx.child(id, 2 + i), |doc| {
                doc.line(Line::from(vec![
                    Span::raw(format!("{} ", cert.badge)),
                    Span::styled(cert.title.clone(), theme.heading()),
                ]));
                doc.line(Line::styled(format!("{} • {}", cert.issuer, cert.date), theme.dim()));
                doc.text(&cert.description, theme.text());
                doc.blank(1);
                doc.button("View Certificate", LinkAction::OpenCertificate(cert.id));
            });
            doc.blank(2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::RevealScheduler;
    use crate::theme::Theme;
    use folio_core::ProjectFilter;
    use std::time::{Duration, Instant};

    fn build(reveal: &RevealScheduler, now: Instant) -> crate::page::Document {
        let content = ContentRegistry::builtin();
        let theme = Theme::default();
        let ctx = PageContext {
            content: &content,
            theme: &theme,
            reveal,
            now,
            typed: "",
            filter: ProjectFilter::All,
            viewport_height: 24,
        };
        let mut doc = DocumentBuilder::new(80, None, &theme);
        CertificatesSection::build(&mut doc, &ctx);
        doc.finish()
    }

    #[test]
    fn test_one_button_per_certificate() {
        let mut reveal = RevealScheduler::new();
        let start = Instant::now();
        reveal.observe(SectionId::Certificates, 1.0, start);
        let doc = build(&reveal, start + Duration::from_secs(2));

        let ids: Vec<_> = doc.links.iter().map(|l| l.action.clone()).collect();
        assert_eq!(
            ids,
            vec![
                LinkAction::OpenCertificate(1),
                LinkAction::OpenCertificate(2),
                LinkAction::OpenCertificate(3),
            ]
        );
    }

    #[test]
    fn test_unrevealed_rows_are_blank() {
        let reveal = RevealScheduler::new();
        let now = Instant::now();
        let hidden = build(&reveal, now);

        let mut shown = RevealScheduler::new();
        shown.observe(SectionId::Certificates, 1.0, now);
        let visible = build(&shown, now + Duration::from_secs(2));

        assert_eq!(hidden.height(), visible.height());
        assert!(hidden.links.is_empty());
        assert!(hidden
            .lines
            .iter()
            .all(|l| l.spans.iter().all(|s| s.content.trim().is_empty())));
    }
}
