use std::{fmt::Display, path::Path};

use crate::{EngineError, Result, Size};

/// How a pixel column maps onto a bit of a glyph scanline.
///
/// Scanlines are `width` bit masks with the leftmost pixel in the high bit.
/// `Legacy` shifts by `width - x`: column 0 samples the bit above the mask and
/// the lowest bit is never shown. Existing SPIVGA font tables are drawn against
/// it. `MsbFirst` shifts by `width - 1 - x`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixelAddressing {
    #[default]
    Legacy,
    MsbFirst,
}

impl PixelAddressing {
    /// Shift count that moves the bit for column `x` to bit 0.
    pub fn shift(self, width: u32, x: u32) -> u32 {
        match self {
            PixelAddressing::Legacy => width.wrapping_sub(x),
            PixelAddressing::MsbFirst => width.wrapping_sub(x).wrapping_sub(1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    width: u32,
    height: u32,
    rows: Vec<u32>,
    addressing: PixelAddressing,
}

impl Display for Glyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = String::new();
        for y in 0..self.height as i32 {
            s.push_str(&format!("{y:2}"));
            for x in 0..self.width as i32 {
                s.push(if self.pixel_at(x, y) == 0 { '-' } else { '#' });
            }
            s.push('\n');
        }
        write!(f, "{s}---")
    }
}

impl Glyph {
    pub fn new(width: u32, height: u32, rows: Vec<u32>) -> Self {
        Glyph {
            width,
            height,
            rows,
            addressing: PixelAddressing::default(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rows(&self) -> &[u32] {
        &self.rows
    }

    pub fn addressing(&self) -> PixelAddressing {
        self.addressing
    }

    /// Returns 1 for ink and 0 for background.
    ///
    /// Coordinates outside the glyph box are a caller error and read as background.
    pub fn pixel_at(&self, x: i32, y: i32) -> u8 {
        if x < 0 || y < 0 || x as u32 >= self.width {
            return 0;
        }
        let Some(row) = self.rows.get(y as usize) else {
            return 0;
        };
        let shift = self.addressing.shift(self.width, x as u32);
        (row.wrapping_shr(shift) & 1) as u8
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub name: String,
    size: Size,
    glyphs: Vec<Glyph>,
}

impl Font {
    /// Builds a font from a scanline table: one entry per glyph, `char_height`
    /// packed `char_width` bit masks per entry.
    pub fn from_table(name: impl Into<String>, char_width: u32, char_height: u32, table: &[Vec<u32>]) -> Result<Self> {
        if char_width == 0 || char_height == 0 {
            return Err(EngineError::InvalidCellSize {
                size: Size::new(char_width as i32, char_height as i32),
            });
        }
        if table.is_empty() {
            return Err(EngineError::EmptyFont);
        }
        let mut glyphs = Vec::with_capacity(table.len());
        for (index, rows) in table.iter().enumerate() {
            if rows.len() != char_height as usize {
                return Err(EngineError::GlyphRowMismatch {
                    index,
                    expected: char_height as usize,
                    actual: rows.len(),
                });
            }
            glyphs.push(Glyph::new(char_width, char_height, rows.clone()));
        }
        Ok(Self {
            name: name.into(),
            size: Size::new(char_width as i32, char_height as i32),
            glyphs,
        })
    }

    /// Same table as [`Font::from_table`], written as a JSON array of scanline arrays.
    pub fn from_json(name: impl Into<String>, char_width: u32, char_height: u32, json: &str) -> Result<Self> {
        let table: Vec<Vec<u32>> = serde_json::from_str(json)?;
        Font::from_table(name, char_width, char_height, &table)
    }

    const PSF1_MAGIC: u16 = 0x0436;
    const PSF1_MODE512: u8 = 0x01;

    const PSF2_MAGIC: u32 = 0x864a_b572;
    // max version recognized so far
    const PSF2_MAXVERSION: u32 = 0x00;

    /// Loads PSF1, PSF2 or a raw 8 pixel wide dump of 256 glyphs.
    pub fn from_bytes(name: impl Into<String>, data: &[u8]) -> Result<Self> {
        if data.len() >= 4 && u16::from_le_bytes([data[0], data[1]]) == Font::PSF1_MAGIC {
            return Font::load_psf1(name, data);
        }
        if data.len() >= 32 && u32::from_le_bytes([data[0], data[1], data[2], data[3]]) == Font::PSF2_MAGIC {
            return Font::load_psf2(name, data);
        }
        Font::load_plain_font(name, data)
    }

    /// Loads a font file. `.json` files are scanline tables of `table_size` glyphs,
    /// everything else goes through [`Font::from_bytes`].
    pub fn load(path: &Path, table_size: Size) -> Result<Self> {
        let name = path.file_stem().map(|s| s.to_string_lossy().to_string()).unwrap_or_default();
        let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            let text = std::fs::read_to_string(path).map_err(|e| EngineError::read_file(path, e.to_string()))?;
            Font::from_json(name, table_size.width as u32, table_size.height as u32, &text)
        } else {
            let data = std::fs::read(path).map_err(|e| EngineError::read_file(path, e.to_string()))?;
            Font::from_bytes(name, &data)
        }
    }

    fn load_psf1(name: impl Into<String>, data: &[u8]) -> Result<Self> {
        let mode = data[2];
        let charsize = data[3] as usize;
        let length = if mode & Font::PSF1_MODE512 == Font::PSF1_MODE512 { 512 } else { 256 };
        let expected = 4 + length * charsize;
        if data.len() < expected {
            return Err(EngineError::FontLengthMismatch { expected, actual: data.len() });
        }
        let table = table_from_bytes(8, charsize, length, &data[4..expected]);
        Font::from_table(name, 8, charsize as u32, &table)
    }

    fn load_psf2(name: impl Into<String>, data: &[u8]) -> Result<Self> {
        let word = |o: usize| u32::from_le_bytes([data[o], data[o + 1], data[o + 2], data[o + 3]]);
        let version = word(4);
        if version > Font::PSF2_MAXVERSION {
            return Err(EngineError::UnsupportedPsfVersion { version });
        }
        let headersize = word(8) as usize;
        let length = word(16) as usize;
        let charsize = word(20) as usize;
        let height = word(24) as usize;
        let width = word(28) as usize;
        if width == 0 || width > 32 || height == 0 {
            return Err(EngineError::InvalidPsf {
                message: format!("unsupported glyph size {width}x{height}"),
            });
        }
        if charsize != width.div_ceil(8) * height {
            return Err(EngineError::InvalidPsf {
                message: format!("glyph size {charsize} doesn't match {width}x{height}"),
            });
        }
        let expected = headersize + length * charsize;
        if data.len() < expected {
            return Err(EngineError::FontLengthMismatch { expected, actual: data.len() });
        }
        let table = table_from_bytes(width, height, length, &data[headersize..expected]);
        Font::from_table(name, width as u32, height as u32, &table)
    }

    fn load_plain_font(name: impl Into<String>, data: &[u8]) -> Result<Self> {
        if data.is_empty() || data.len() % 256 != 0 {
            return Err(EngineError::UnknownFontFormat { size: data.len() });
        }
        let char_height = data.len() / 256;
        let table = table_from_bytes(8, char_height, 256, data);
        Font::from_table(name, 8, char_height as u32, &table)
    }

    /// Keeps the first `len` glyphs. A font never drops below one glyph.
    pub fn truncate(&mut self, len: usize) {
        if len < self.glyphs.len() {
            self.glyphs.truncate(len.max(1));
        }
    }

    /// Switches the bit addressing of every glyph.
    pub fn with_addressing(mut self, addressing: PixelAddressing) -> Self {
        for glyph in &mut self.glyphs {
            glyph.addressing = addressing;
        }
        self
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn char_width(&self) -> i32 {
        self.size.width
    }

    pub fn char_height(&self) -> i32 {
        self.size.height
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn glyph(&self, index: u32) -> Option<&Glyph> {
        self.glyphs.get(index as usize)
    }

    /// Glyph lookup used by all renderers: unknown indices draw glyph 0.
    pub fn glyph_or_fallback(&self, index: u32) -> &Glyph {
        match self.glyphs.get(index as usize) {
            Some(glyph) => glyph,
            None => {
                log::trace!("glyph {index} not in font '{}', using glyph 0", self.name);
                &self.glyphs[0]
            }
        }
    }
}

/// Splits byte aligned glyph bitmaps into right aligned scanline masks.
fn table_from_bytes(width: usize, height: usize, length: usize, data: &[u8]) -> Vec<Vec<u32>> {
    let bytes_per_row = width.div_ceil(8);
    let padding = bytes_per_row * 8 - width;
    data.chunks_exact(bytes_per_row * height)
        .take(length)
        .map(|glyph| {
            glyph
                .chunks_exact(bytes_per_row)
                .map(|row| row.iter().fold(0u64, |acc, b| (acc << 8) | u64::from(*b)) >> padding)
                .map(|row| row as u32)
                .collect()
        })
        .collect()
}
