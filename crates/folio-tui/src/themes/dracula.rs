//! Dracula theme
//! https://draculatheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        bg0: Color::Rgb(0x28, 0x2a, 0x36), // background
        bg1: Color::Rgb(0x34, 0x37, 0x46),
        bg2: Color::Rgb(0x44, 0x47, 0x5a), // current line
        fg0: Color::Rgb(0xf8, 0xf8, 0xf2), // foreground
        fg1: Color::Rgb(0xe0, 0xe0, 0xe0),
        muted: Color::Rgb(0x62, 0x72, 0xa4), // comment
        accent: Color::Rgb(0xbd, 0x93, 0xf9), // purple
        accent_alt: Color::Rgb(0xff, 0x79, 0xc6), // pink
        focus: Color::Rgb(0x50, 0xfa, 0x7b), // green
        error: Color::Rgb(0xff, 0x55, 0x55),
    }
}
