//! One Dark theme (Atom)

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        bg0: Color::Rgb(0x28, 0x2c, 0x34),
        bg1: Color::Rgb(0x31, 0x35, 0x3f),
        bg2: Color::Rgb(0x3e, 0x44, 0x51),
        fg0: Color::Rgb(0xab, 0xb2, 0xbf),
        fg1: Color::Rgb(0xc8, 0xcc, 0xd4),
        muted: Color::Rgb(0x5c, 0x63, 0x70),
        accent: Color::Rgb(0xc6, 0x78, 0xdd),     // purple
        accent_alt: Color::Rgb(0x61, 0xaf, 0xef), // blue
        focus: Color::Rgb(0xe5, 0xc0, 0x7b),      // yellow
        error: Color::Rgb(0xe0, 0x6c, 0x75),
    }
}
