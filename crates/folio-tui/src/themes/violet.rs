//! Violet theme, the portfolio's own purple-on-black palette

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        bg0: Color::Rgb(0x00, 0x00, 0x00),
        bg1: Color::Rgb(0x1a, 0x0b, 0x2e),
        bg2: Color::Rgb(0x2d, 0x1b, 0x69),
        fg0: Color::Rgb(0xf5, 0xf3, 0xff),
        fg1: Color::Rgb(0xd4, 0xd4, 0xd8),
        muted: Color::Rgb(0xa1, 0xa1, 0xaa),
        accent: Color::Rgb(0x8b, 0x5c, 0xf6),
        accent_alt: Color::Rgb(0xa8, 0x55, 0xf7),
        focus: Color::Rgb(0xec, 0x48, 0x99),
        error: Color::Rgb(0xef, 0x44, 0x44),
    }
}
