use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{Color: r={:02X}, g={:02X}, b={:02X}}}", self.r, self.g, self.b)
    }
}

impl Color {
    pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::new(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub fn get_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// CSS style `#RRGGBB` with uppercase hex digits.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn from_hex(hex: &str) -> crate::Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(crate::EngineError::InvalidHexColor { value: hex.to_string() });
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| crate::EngineError::InvalidHexColor { value: hex.to_string() });
        Ok(Color::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from(value: (u8, u8, u8)) -> Self {
        Color::new(value.0, value.1, value.2)
    }
}

/// Indexed color table. Immutable once built; share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub title: String,
    colors: Vec<Color>,
}

impl Palette {
    pub fn from_slice(title: impl Into<String>, colors: &[Color]) -> Self {
        Self {
            title: title.into(),
            colors: colors.to_vec(),
        }
    }

    /// The 16 color table of the SPIVGA adapter. Index 1 is black as well.
    pub fn vga_editor() -> Self {
        Palette::from_slice("SPIVGA editor", &EDITOR_PALETTE)
    }

    /// Looks up a color. Indices without an entry render black.
    pub fn get_color(&self, color: u32) -> Color {
        match self.colors.get(color as usize) {
            Some(c) => *c,
            None => Color::BLACK,
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::vga_editor()
    }
}

pub const EDITOR_PALETTE: [Color; 16] = [
    Color::new(0x00, 0x00, 0x00),
    Color::new(0x00, 0x00, 0x00),
    Color::new(0x00, 0x00, 0x7F), // dark blue
    Color::new(0x00, 0x00, 0xFF), // blue
    Color::new(0x00, 0x7F, 0x00), // dark green
    Color::new(0x00, 0xFF, 0x00), // green
    Color::new(0x00, 0x7F, 0x7F), // dark cyan
    Color::new(0x00, 0xFF, 0xFF), // cyan
    Color::new(0x7F, 0x00, 0x00), // dark red
    Color::new(0xFF, 0x00, 0x00), // red
    Color::new(0x7F, 0x00, 0x7F), // dark magenta
    Color::new(0xFF, 0x00, 0xFF), // magenta
    Color::new(0x7F, 0x7F, 0x00), // brown
    Color::new(0xFF, 0xFF, 0x00), // yellow
    Color::new(0x7F, 0x7F, 0x7F), // gray
    Color::new(0xFF, 0xFF, 0xFF), // white
];
