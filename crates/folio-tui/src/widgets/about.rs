use folio_core::{ContentRegistry, Rgb, SectionId, Skill};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use super::{section_tag, to_color, truncate};
use crate::page::{DocumentBuilder, PageContext};
use crate::theme::Theme;

const CODE_WINDOW_WIDTH: u16 = 56;

/// Title, skill bars and the code window
pub struct AboutSection;

impl AboutSection {
    /// Tag, title, one per skill, then the code window
    pub fn children(content: &ContentRegistry) -> usize {
        3 + content.skills.len()
    }

    pub fn build(doc: &mut DocumentBuilder, ctx: &PageContext) {
        let id = SectionId::About;
        let theme = ctx.theme;
        let profile = &ctx.content.profile;

        doc.begin_section(id);
        doc.blank(2);
        doc.child(ctx.child(id, 0), |doc| section_tag(doc, "ABOUT ME", theme.dim()));
        doc.blank(1);
        doc.child(ctx.child(id, 1), |doc| doc.text(&profile.about_title, theme.heading()));
        doc.blank(1);

        let bar_width = doc.content_width().min(60);
        for (i, skill) in ctx.content.skills.iter().enumerate() {
            let progress = ctx.child(id, 2 + i);
            doc.child(progress, |doc| {
                for line in skill_lines(skill, bar_width, progress, theme) {
                    doc.line(line);
                }
            });
            doc.blank(1);
        }

        let index = 2 + ctx.content.skills.len();
        let width = doc.content_width().min(CODE_WINDOW_WIDTH);
        doc.child(ctx.child(id, index), |doc| {
            for line in code_window(&profile.about_code, width, theme) {
                doc.line(line);
            }
        });
        doc.blank(2);
    }
}

/// Label row and bar row; the bar fills with `progress`
fn skill_lines(skill: &Skill, width: u16, progress: f64, theme: &Theme) -> [Line<'static>; 2] {
    let width = width as usize;
    let percent = format!("{}%", skill.percentage);
    let gap = width.saturating_sub(skill.name.width() + percent.width()).max(1);
    let label = Line::from(vec![
        Span::styled(skill.name.clone(), theme.text()),
        Span::raw(" ".repeat(gap)),
        Span::styled(percent, theme.dim()),
    ]);

    let from = Rgb::from_hex(&skill.colors[0]);
    let to = Rgb::from_hex(&skill.colors[1]);
    let filled = ((width as f64) * skill.percentage as f64 / 100.0 * progress.clamp(0.0, 1.0)).round() as usize;

    let mut spans: Vec<Span<'static>> = (0..filled)
        .map(|i| {
            let color = match (from, to) {
                (Some(a), Some(b)) => to_color(a.lerp(b, i as f64 / width.max(1) as f64)),
                _ => theme.accent,
            };
            Span::styled("█", Style::default().fg(color))
        })
        .collect();
    spans.push(Span::styled("░".repeat(width - filled.min(width)), theme.dim()));

    [label, Line::from(spans)]
}

/// Boxed code listing with window buttons in the title bar
fn code_window(code: &str, width: u16, theme: &Theme) -> Vec<Line<'static>> {
    let width = width.max(12) as usize;
    let inner = width - 4;
    let border = theme.dim();

    let title = "─ ● ● ● ";
    let mut lines = vec![Line::from(vec![
        Span::styled("╭", border),
        Span::styled(title, Style::default().fg(theme.focus)),
        Span::styled("─".repeat(width - 2 - title.width()), border),
        Span::styled("╮", border),
    ])];

    for row in code.lines() {
        let row = truncate(row, inner);
        let pad = inner - row.width();
        let mut spans = vec![Span::styled("│ ", border)];
        spans.extend(highlight_code(&row, theme));
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::styled(" │", border));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(vec![
        Span::styled("╰", border),
        Span::styled("─".repeat(width - 2), border),
        Span::styled("╯", border),
    ]));
    lines
}

/// Color string literals and the leading keyword of a code row
fn highlight_code(row: &str, theme: &Theme) -> Vec<Span<'static>> {
    let plain = Style::default().fg(theme.fg1);
    let string = Style::default().fg(theme.accent_alt);
    let keyword = Style::default().fg(theme.accent).add_modifier(Modifier::BOLD);

    let mut spans = Vec::new();
    let mut rest = row;
    if let Some(after) = rest.strip_prefix("const ") {
        spans.push(Span::styled("const ", keyword));
        rest = after;
    }
    for (i, part) in rest.split('"').enumerate() {
        if i > 0 {
            spans.push(Span::styled("\"", string));
        }
        if part.is_empty() {
            continue;
        }
        let style = if i % 2 == 1 { string } else { plain };
        spans.push(Span::styled(part.to_string(), style));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_skill_bar_fills_with_progress() {
        let theme = Theme::default();
        let skill = Skill {
            name: "HTML".into(),
            percentage: 90,
            colors: ["#8B5CF6".into(), "#A855F7".into()],
        };

        let [label, bar] = skill_lines(&skill, 20, 1.0, &theme);
        assert_eq!(text(&label).width(), 20);
        assert!(text(&label).ends_with("90%"));
        assert_eq!(text(&bar).matches('█').count(), 18);

        let [_, half] = skill_lines(&skill, 20, 0.5, &theme);
        assert_eq!(text(&half).matches('█').count(), 9);
    }

    #[test]
    fn test_code_window_is_boxed() {
        let theme = Theme::default();
        let lines = code_window("const a = \"b\";\nlet x = 1;", 30, &theme);
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| text(l).width() == 30));
        assert!(text(&lines[1]).contains("const a = \"b\";"));
    }
}
