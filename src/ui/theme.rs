//! Colour tokens for the lexicon screens.

use ratatui::style::Color;

pub const GOLD: Color = Color::Rgb(0xC4, 0xA4, 0x4F);
pub const CREAM: Color = Color::Rgb(0xF3, 0xE9, 0xD2);
pub const GREEN: Color = Color::Rgb(0x4F, 0xB8, 0x6B);
pub const OXBLOOD: Color = Color::Rgb(0xC0, 0x4A, 0x3F);
pub const MUTED: Color = Color::DarkGray;
