use ratatui::style::Color;

use crate::preferences::Theme;

pub const ACCENT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_PENDING: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);

/// Colours of the outer container, chosen purely by the theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub highlight: Color,
}

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(0xfa, 0xfa, 0xfa),
    text: Color::Rgb(0x1f, 0x29, 0x37),
    muted: Color::Rgb(0x6b, 0x72, 0x80),
    border: Color::Rgb(0xd1, 0xd5, 0xdb),
    highlight: Color::Rgb(0xe5, 0xe7, 0xeb),
};

pub const DARK: Palette = Palette {
    background: Color::Rgb(0x17, 0x17, 0x17),
    text: Color::Rgb(0xe5, 0xe5, 0xe5),
    muted: Color::Rgb(0x6b, 0x72, 0x80),
    border: Color::Rgb(0x40, 0x40, 0x40),
    highlight: Color::Rgb(0x26, 0x26, 0x26),
};

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => LIGHT,
        Theme::Dark => DARK,
    }
}
