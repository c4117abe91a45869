use folio_core::{GradientDescriptor, SectionId};
use ratatui::{buffer::Buffer, layout::Rect, style::Style, Frame};
use unicode_width::UnicodeWidthStr;

use super::{image, to_color};
use crate::app::App;
use crate::page::{Document, ImageSlot};

/// Widget drawing the scrolled page over its section gradients
pub struct PageWidget;

impl PageWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let offset = app.scroll.state().row();
        let gradients: Vec<(SectionId, GradientDescriptor)> = {
            let sampler = app.gradient.borrow();
            SectionId::ALL.iter().map(|&id| (id, sampler.sample(id))).collect()
        };
        let buf = frame.buffer_mut();
        let doc = &app.document;

        paint_background(buf, area, doc, offset, &gradients, app);

        for y in 0..area.height {
            let row = offset as usize + y as usize;
            if let Some(line) = doc.lines.get(row) {
                buf.set_line(area.x, area.y + y, line, area.width);
            }
        }

        for slot in doc.images.iter().filter(|slot| slot.visible) {
            render_slot(buf, area, offset, slot, app);
        }
    }
}

fn paint_background(
    buf: &mut Buffer,
    area: Rect,
    doc: &Document,
    offset: u16,
    gradients: &[(SectionId, GradientDescriptor)],
    app: &App,
) {
    let width = area.width.max(2) as f64 - 1.0;
    for y in 0..area.height {
        let row = offset.saturating_add(y);
        let section = doc.section_at(row);
        let gradient = section.and_then(|s| {
            gradients
                .iter()
                .find(|(id, _)| *id == s.id)
                .map(|(_, g)| (s, g))
        });

        for x in 0..area.width {
            let color = match gradient {
                Some((span, g)) => {
                    let v = (row - span.top) as f64 / (span.height.max(2) as f64 - 1.0);
                    to_color(g.color_at(x as f64 / width, v))
                }
                None => app.theme.bg0,
            };
            if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                cell.set_bg(color);
            }
        }
    }
}

/// Draw the visible rows of an image slot, or a placeholder while it loads
fn render_slot(buf: &mut Buffer, area: Rect, offset: u16, slot: &ImageSlot, app: &App) {
    let window = offset..offset.saturating_add(area.height);
    let thumb = app.assets.thumbnail(&slot.asset, slot.width, slot.height);

    for r in 0..slot.height {
        let row = slot.row + r;
        if !window.contains(&row) {
            continue;
        }
        let y = area.y + (row - offset);

        match thumb {
            Some(thumb) => {
                for c in 0..slot.width.min(area.width.saturating_sub(slot.col)) {
                    let Some((fg, bg)) = image::cell_colors(thumb, slot.width, slot.height, c, r)
                    else {
                        continue;
                    };
                    if let Some(cell) = buf.cell_mut((area.x + slot.col + c, y)) {
                        cell.set_symbol(image::HALF_BLOCK).set_fg(fg).set_bg(bg);
                    }
                }
            }
            None => {
                let style = Style::default().fg(app.theme.muted);
                let edge = r == 0 || r + 1 == slot.height;
                let text = if edge {
                    "╌".repeat(slot.width as usize)
                } else if r == slot.height / 2 {
                    let label = app.assets.placeholder(&slot.asset);
                    let pad = (slot.width as usize).saturating_sub(label.width()) / 2;
                    format!("{}{}", " ".repeat(pad), label)
                } else {
                    continue;
                };
                buf.set_stringn(
                    area.x + slot.col,
                    y,
                    text,
                    slot.width.min(area.width.saturating_sub(slot.col)) as usize,
                    style,
                );
            }
        }
    }
}
