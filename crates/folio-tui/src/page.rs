//! Laid-out page: every section rendered to styled lines at one width
//!
//! The document is rebuilt each frame from the content, the reveal state and
//! the typewriter, then drawn through a window at the current scroll offset.

use std::time::Instant;

use folio_core::{ContentRegistry, ProjectFilter, SectionId};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::reveal::RevealScheduler;
use crate::scroll::Viewport;
use crate::theme::Theme;

/// Columns kept free on both sides of the page
pub const MARGIN: u16 = 3;

/// What activating a page link does
#[derive(Debug, Clone, PartialEq)]
pub enum LinkAction {
    /// Fragment or external URL, routed through the scroll controller
    Href(String),
    OpenCertificate(u32),
    SetFilter(ProjectFilter),
}

/// Focusable link placed on the page
#[derive(Debug, Clone, PartialEq)]
pub struct PageLink {
    pub label: String,
    pub action: LinkAction,
    pub row: u16,
    pub col: u16,
    pub width: u16,
}

impl PageLink {
    pub fn contains(&self, row: u16, col: u16) -> bool {
        row == self.row && col >= self.col && col < self.col + self.width
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSpan {
    pub id: SectionId,
    pub top: u16,
    pub height: u16,
}

/// Area reserved for an image, drawn over the blank lines it occupies
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSlot {
    pub asset: String,
    pub row: u16,
    pub col: u16,
    pub width: u16,
    pub height: u16,
    /// False while the owning child has not appeared yet
    pub visible: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    pub lines: Vec<Line<'static>>,
    pub sections: Vec<SectionSpan>,
    pub links: Vec<PageLink>,
    pub images: Vec<ImageSlot>,
}

impl Document {
    pub fn height(&self) -> u16 {
        self.lines.len().min(u16::MAX as usize) as u16
    }

    /// Scroll viewport of this document seen through `height` rows
    pub fn viewport(&self, height: u16) -> Viewport {
        self.sections.iter().fold(
            Viewport::new(height as f64, self.height() as f64),
            |viewport, section| viewport.with_anchor(section.id.anchor(), section.top as f64),
        )
    }

    pub fn section(&self, id: SectionId) -> Option<&SectionSpan> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn section_at(&self, row: u16) -> Option<&SectionSpan> {
        self.sections
            .iter()
            .find(|s| row >= s.top && row < s.top.saturating_add(s.height))
    }

    /// Share of `section` inside the window `[offset, offset + height)`
    ///
    /// Sections taller than the window count as fully visible once they fill it.
    pub fn visible_fraction(&self, id: SectionId, offset: f64, height: u16) -> f64 {
        let Some(section) = self.section(id) else {
            return 0.0;
        };
        if section.height == 0 || height == 0 {
            return 0.0;
        }
        let top = section.top as f64;
        let bottom = top + section.height as f64;
        let overlap = (bottom.min(offset + height as f64) - top.max(offset)).max(0.0);
        overlap / (section.height.min(height) as f64)
    }

    pub fn link_at(&self, row: u16, col: u16) -> Option<usize> {
        self.links.iter().position(|link| link.contains(row, col))
    }
}

/// Inputs shared by all section builders
pub struct PageContext<'a> {
    pub content: &'a ContentRegistry,
    pub theme: &'a Theme,
    pub reveal: &'a RevealScheduler,
    pub now: Instant,
    /// Text currently shown by the typewriter
    pub typed: &'a str,
    pub filter: ProjectFilter,
    pub viewport_height: u16,
}

impl PageContext<'_> {
    pub fn child(&self, section: SectionId, index: usize) -> f64 {
        self.reveal.child_progress(section, index, self.now)
    }
}

pub struct DocumentBuilder {
    width: u16,
    focused: Option<usize>,
    link_style: Style,
    focused_style: Style,
    doc: Document,
    open_section: Option<(SectionId, u16)>,
    /// Entrance progress applied to lines pushed right now
    reveal: f64,
}

impl DocumentBuilder {
    pub fn new(width: u16, focused: Option<usize>, theme: &Theme) -> Self {
        Self {
            width,
            focused,
            link_style: theme.link(),
            focused_style: theme.focused_link(),
            doc: Document::default(),
            open_section: None,
            reveal: 1.0,
        }
    }

    /// Usable columns between the margins
    pub fn content_width(&self) -> u16 {
        self.width.saturating_sub(MARGIN * 2).max(10)
    }

    pub fn row(&self) -> u16 {
        self.doc.height()
    }

    pub fn begin_section(&mut self, id: SectionId) {
        self.end_section();
        self.open_section = Some((id, self.row()));
    }

    pub fn end_section(&mut self) {
        if let Some((id, top)) = self.open_section.take() {
            self.doc.sections.push(SectionSpan {
                id,
                top,
                height: self.row() - top,
            });
        }
    }

    /// Build one revealable child; hidden children keep their height
    pub fn child(&mut self, progress: f64, build: impl FnOnce(&mut Self)) {
        self.reveal = progress.clamp(0.0, 1.0);
        build(self);
        self.reveal = 1.0;
    }

    fn hidden(&self) -> bool {
        self.reveal <= 0.0
    }

    pub fn line(&mut self, line: Line<'static>) {
        let line = if self.hidden() {
            Line::default()
        } else if self.reveal < 1.0 {
            line.patch_style(Style::default().add_modifier(Modifier::DIM))
        } else {
            line
        };
        let indent = Span::raw(" ".repeat(MARGIN as usize));
        let mut spans = Vec::with_capacity(line.spans.len() + 1);
        spans.push(indent);
        spans.extend(line.spans);
        self.doc.lines.push(Line::from(spans));
    }

    pub fn blank(&mut self, rows: u16) {
        for _ in 0..rows {
            self.doc.lines.push(Line::default());
        }
    }

    /// Word-wrapped paragraph
    pub fn text(&mut self, text: &str, style: Style) {
        for row in wrap(text, self.content_width() as usize) {
            self.line(Line::from(Span::styled(row, style)));
        }
    }

    /// Word-wrapped paragraph with `highlights` drawn in `highlight`
    pub fn highlighted_text(&mut self, text: &str, highlights: &[String], style: Style, highlight: Style) {
        for row in wrap(text, self.content_width() as usize) {
            self.line(highlight_spans(&row, highlights, style, highlight));
        }
    }

    /// A row of buttons, wrapping onto further rows when they do not fit
    pub fn buttons(&mut self, buttons: Vec<(String, LinkAction)>) {
        let max = self.content_width();
        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut col = 0u16;

        for (label, action) in buttons {
            let text = format!(" {} ", label);
            let width = text.width().min(u16::MAX as usize) as u16;
            if col > 0 && col + width > max {
                self.line(Line::from(std::mem::take(&mut spans)));
                self.blank(1);
                col = 0;
            }
            if col > 0 {
                spans.push(Span::raw("  "));
                col += 2;
            }

            let index = self.doc.links.len();
            let style = if self.focused == Some(index) {
                self.focused_style
            } else {
                self.link_style
            };
            // Links of children that have not appeared are not focusable
            if !self.hidden() {
                self.doc.links.push(PageLink {
                    label,
                    action,
                    row: self.row(),
                    col: MARGIN + col,
                    width,
                });
            }
            spans.push(Span::styled(text, style));
            col += width;
        }

        if !spans.is_empty() {
            self.line(Line::from(spans));
        }
    }

    pub fn button(&mut self, label: impl Into<String>, action: LinkAction) {
        self.buttons(vec![(label.into(), action)]);
    }

    /// Reserve `height` rows for an image `width` columns wide
    pub fn image(&mut self, asset: &str, width: u16, height: u16) {
        self.doc.images.push(ImageSlot {
            asset: asset.to_string(),
            row: self.row(),
            col: MARGIN,
            width: width.min(self.content_width()),
            height,
            visible: !self.hidden(),
        });
        self.blank(height);
    }

    pub fn finish(mut self) -> Document {
        self.end_section();
        self.doc
    }
}

/// Greedy word wrap by display width; explicit newlines start new rows
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for paragraph in text.split('\n') {
        let mut row = String::new();
        let mut row_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            if row_width > 0 && row_width + 1 + word_width > width {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            if word_width > width {
                // Hard-split words that cannot fit on any row
                for ch in word.chars() {
                    let ch_width = ch.to_string().width();
                    if row_width + ch_width > width && row_width > 0 {
                        rows.push(std::mem::take(&mut row));
                        row_width = 0;
                    }
                    row.push(ch);
                    row_width += ch_width;
                }
                continue;
            }
            if row_width > 0 {
                row.push(' ');
                row_width += 1;
            }
            row.push_str(word);
            row_width += word_width;
        }
        rows.push(row);
    }
    rows
}

fn highlight_spans(row: &str, highlights: &[String], style: Style, highlight: Style) -> Line<'static> {
    let mut spans = Vec::new();
    let mut rest = row;

    while !rest.is_empty() {
        let next = highlights
            .iter()
            .filter(|h| !h.is_empty())
            .filter_map(|h| rest.find(h.as_str()).map(|at| (at, h.len())))
            .min_by_key(|&(at, _)| at);
        let Some((at, len)) = next else {
            spans.push(Span::styled(rest.to_string(), style));
            break;
        };
        if at > 0 {
            spans.push(Span::styled(rest[..at].to_string(), style));
        }
        spans.push(Span::styled(rest[at..at + len].to_string(), highlight));
        rest = &rest[at + len..];
    }
    Line::from(spans)
}
