use folio_core::SectionId;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::gradient_line;
use crate::page::{DocumentBuilder, LinkAction, PageContext};

/// Full-height landing section with the typewriter line
pub struct HeroSection;

impl HeroSection {
    pub const CHILDREN: usize = 5;

    pub fn build(doc: &mut DocumentBuilder, ctx: &PageContext) {
        let id = SectionId::Home;
        let profile = &ctx.content.profile;
        let theme = ctx.theme;

        doc.begin_section(id);
        let top = doc.row();
        // Roughly center the block in the first screen
        doc.blank(ctx.viewport_height.saturating_sub(12) / 2);

        doc.child(ctx.child(id, 0), |doc| {
            doc.line(Line::styled(profile.greeting.clone(), theme.dim()));
        });
        doc.blank(1);
        doc.child(ctx.child(id, 1), |doc| {
            doc.line(gradient_line(&profile.name, theme.accent, theme.focus, Modifier::BOLD));
        });
        doc.blank(1);
        doc.child(ctx.child(id, 2), |doc| {
            doc.line(Line::from(vec![
                Span::styled(ctx.typed.to_string(), theme.highlight()),
                Span::styled("|", Style::default().fg(theme.focus)),
            ]));
        });
        doc.blank(1);
        doc.child(ctx.child(id, 3), |doc| {
            doc.highlighted_text(
                &profile.description,
                &profile.highlights,
                theme.text(),
                theme.highlight(),
            );
        });
        doc.blank(1);
        doc.child(ctx.child(id, 4), |doc| {
            doc.button("ABOUT ME", LinkAction::Href("#about".into()));
        });

        let used = doc.row() - top;
        doc.blank(ctx.viewport_height.saturating_sub(used).max(2));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::RevealScheduler;
    use crate::theme::Theme;
    use folio_core::{ContentRegistry, ProjectFilter};
    use std::time::{Duration, Instant};

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_fills_first_screen_and_links_about() {
        let content = ContentRegistry::builtin();
        let theme = Theme::default();
        let mut reveal = RevealScheduler::new();
        let start = Instant::now();
        reveal.observe(SectionId::Home, 1.0, start);

        let ctx = PageContext {
            content: &content,
            theme: &theme,
            reveal: &reveal,
            now: start + Duration::from_secs(5),
            typed: "3D DES",
            filter: ProjectFilter::All,
            viewport_height: 30,
        };
        let mut doc = DocumentBuilder::new(80, None, &theme);
        HeroSection::build(&mut doc, &ctx);
        let doc = doc.finish();

        assert!(doc.height() >= 30);
        assert!(doc.lines.iter().any(|l| text(l).contains("3D DES|")));
        assert_eq!(doc.links[0].action, LinkAction::Href("#about".into()));
    }
}
