//! Half-block image rendering
//!
//! Each terminal cell shows two vertical pixels: "▀" with the top pixel as
//! foreground and the bottom pixel as background.

use image::{imageops::FilterType, DynamicImage, RgbaImage};
use ratatui::{buffer::Buffer, layout::Rect, style::Color};

pub const HALF_BLOCK: &str = "▀";

/// Resize `image` to fit `cols` x `rows` cells, keeping its aspect ratio
pub fn fit(image: &DynamicImage, cols: u16, rows: u16) -> RgbaImage {
    let (img_w, img_h) = (image.width().max(1), image.height().max(1));
    let max_w = cols.max(1) as f64;
    let max_h = (rows.max(1) as f64) * 2.0;

    let scale = (max_w / img_w as f64).min(max_h / img_h as f64);
    let new_w = ((img_w as f64 * scale) as u32).max(1);
    let new_h = ((img_h as f64 * scale) as u32).max(1);

    image
        .resize_exact(new_w, new_h, FilterType::Triangle)
        .to_rgba8()
}

/// Colors of cell `col`, `row` of a `cols` x `rows` slot showing `thumb` centered
///
/// Returns None for cells outside the picture.
pub fn cell_colors(thumb: &RgbaImage, cols: u16, rows: u16, col: u16, row: u16) -> Option<(Color, Color)> {
    let cell_rows = thumb.height().div_ceil(2);
    let x_offset = (cols as u32).saturating_sub(thumb.width()) / 2;
    let y_offset = (rows as u32).saturating_sub(cell_rows) / 2;

    let x = (col as u32).checked_sub(x_offset)?;
    let cell_y = (row as u32).checked_sub(y_offset)?;
    if x >= thumb.width() || cell_y >= cell_rows {
        return None;
    }

    let top_y = cell_y * 2;
    let top = thumb.get_pixel(x, top_y);
    let bottom = if top_y + 1 < thumb.height() {
        thumb.get_pixel(x, top_y + 1)
    } else {
        top
    };
    Some((
        Color::Rgb(top[0], top[1], top[2]),
        Color::Rgb(bottom[0], bottom[1], bottom[2]),
    ))
}

/// Draw `thumb` centered in `area`
pub fn render(buf: &mut Buffer, area: Rect, thumb: &RgbaImage) {
    for row in 0..area.height {
        for col in 0..area.width {
            let Some((fg, bg)) = cell_colors(thumb, area.width, area.height, col, row) else {
                continue;
            };
            if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                cell.set_symbol(HALF_BLOCK).set_fg(fg).set_bg(bg);
            }
        }
    }
}
