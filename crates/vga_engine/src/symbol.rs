/// One grid cell: glyph index plus foreground and background palette index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Symbol {
    pub glyph: u32,
    pub foreground: u32,
    pub background: u32,
}

impl Symbol {
    pub const fn new(glyph: u32, foreground: u32, background: u32) -> Self {
        Symbol {
            glyph,
            foreground,
            background,
        }
    }

    pub fn with_glyph(self, glyph: u32) -> Self {
        Symbol { glyph, ..self }
    }

    pub fn with_foreground(self, foreground: u32) -> Self {
        Symbol { foreground, ..self }
    }

    pub fn with_background(self, background: u32) -> Self {
        Symbol { background, ..self }
    }

    /// Video memory word: glyph in the high byte, foreground and background nibbles below.
    ///
    /// Nothing is masked, so out of range colors bleed into the glyph byte the
    /// same way they do on the adapter.
    pub fn encoded(&self) -> u32 {
        self.glyph
            .wrapping_mul(256)
            .wrapping_add(self.foreground.wrapping_mul(16))
            .wrapping_add(self.background)
    }

    /// Empty symbols are left out of every export.
    pub fn is_empty(&self) -> bool {
        self.encoded() == 0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(Glyph: {}, fg {}, bg {})", self.glyph, self.foreground, self.background)
    }
}

impl From<(u32, u32, u32)> for Symbol {
    fn from(value: (u32, u32, u32)) -> Self {
        Symbol::new(value.0, value.1, value.2)
    }
}
