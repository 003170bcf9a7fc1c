#![allow(dead_code)]
use std::sync::Arc;

use vga_engine::{Font, Palette};

pub const BLANK: u32 = 0;
/// Every scanline 0xFF.
pub const FULL: u32 = 1;
/// Only the high bit of every scanline.
pub const LEFT_BAR: u32 = 2;
/// Only the low bit of every scanline.
pub const RIGHT_BAR: u32 = 3;

pub fn test_table() -> Vec<Vec<u32>> {
    vec![vec![0x00; 16], vec![0xFF; 16], vec![0x80; 16], vec![0x01; 16]]
}

pub fn test_font() -> Arc<Font> {
    Arc::new(Font::from_table("test", 8, 16, &test_table()).unwrap())
}

pub fn palette() -> Arc<Palette> {
    Arc::new(Palette::vga_editor())
}

pub fn rgba(palette: &Palette, index: u32) -> [u8; 4] {
    let (r, g, b) = palette.get_color(index).get_rgb();
    [r, g, b, 0xFF]
}
