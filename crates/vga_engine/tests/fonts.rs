use pretty_assertions::assert_eq;
use vga_engine::{EngineError, Font, Glyph, PixelAddressing, Size};

mod common;
use common::*;

#[test]
fn test_pixel_at_is_binary_and_pure() {
    let font = test_font();
    for index in 0..font.len() as u32 {
        let glyph = font.glyph(index).unwrap();
        for y in 0..16 {
            for x in 0..8 {
                let p = glyph.pixel_at(x, y);
                assert!(p == 0 || p == 1);
                assert_eq!(p, glyph.pixel_at(x, y));
            }
        }
    }
}

#[test]
fn test_legacy_addressing_shifts_one_column() {
    let font = test_font();
    let full = font.glyph(FULL).unwrap();
    assert_eq!(0, full.pixel_at(0, 0));
    for x in 1..8 {
        assert_eq!(1, full.pixel_at(x, 5));
    }

    let left = font.glyph(LEFT_BAR).unwrap();
    assert_eq!(0, left.pixel_at(0, 0));
    assert_eq!(1, left.pixel_at(1, 0));

    // the low bit is never sampled
    let right = font.glyph(RIGHT_BAR).unwrap();
    assert!((0..8).all(|x| right.pixel_at(x, 3) == 0));
}

#[test]
fn test_msb_first_addressing() {
    let font = Font::from_table("test", 8, 16, &test_table()).unwrap().with_addressing(PixelAddressing::MsbFirst);
    let left = font.glyph(LEFT_BAR).unwrap();
    assert_eq!(1, left.pixel_at(0, 0));
    assert_eq!(0, left.pixel_at(1, 0));
    let right = font.glyph(RIGHT_BAR).unwrap();
    assert_eq!(1, right.pixel_at(7, 15));
    assert!((0..8).all(|x| font.glyph(FULL).unwrap().pixel_at(x, 0) == 1));
}

#[test]
fn test_legacy_shift_wraps_at_32_bits() {
    let glyph = Glyph::new(32, 1, vec![0x0000_0001]);
    assert_eq!(1, glyph.pixel_at(0, 0));
    assert_eq!(0, glyph.pixel_at(31, 0));
}

#[test]
fn test_out_of_range_pixel_reads_background() {
    let font = test_font();
    let full = font.glyph(FULL).unwrap();
    assert_eq!(0, full.pixel_at(8, 0));
    assert_eq!(0, full.pixel_at(3, 16));
    assert_eq!(0, full.pixel_at(-1, 0));
}

#[test]
fn test_glyph_fallback() {
    let font = test_font();
    assert!(font.glyph(4).is_none());
    assert_eq!(font.glyph(0).unwrap(), font.glyph_or_fallback(4));
    assert_eq!(font.glyph(0).unwrap(), font.glyph_or_fallback(u32::MAX));
    assert_eq!(font.glyph(FULL).unwrap(), font.glyph_or_fallback(FULL));
}

#[test]
fn test_truncate() {
    let table: Vec<Vec<u32>> = (0..256).map(|i| vec![i as u32; 16]).collect();
    let mut font = Font::from_table("cp", 8, 16, &table).unwrap();
    font.truncate(255);
    assert_eq!(255, font.len());
    assert!(font.glyph(255).is_none());
    assert_eq!(&[0u32; 16], font.glyph_or_fallback(255).rows());

    font.truncate(0);
    assert_eq!(1, font.len());
}

#[test]
fn test_table_errors() {
    assert!(matches!(Font::from_table("empty", 8, 16, &[]), Err(EngineError::EmptyFont)));
    let table = vec![vec![0; 16], vec![0; 15]];
    match Font::from_table("short", 8, 16, &table) {
        Err(EngineError::GlyphRowMismatch { index, expected, actual }) => {
            assert_eq!((1, 16, 15), (index, expected, actual));
        }
        other => panic!("unexpected result {other:?}"),
    }
    assert!(matches!(Font::from_table("zero", 0, 16, &test_table()), Err(EngineError::InvalidCellSize { .. })));
}

#[test]
fn test_from_json() {
    let font = Font::from_json("json", 4, 2, "[[0, 0], [15, 8]]").unwrap();
    assert_eq!(Size::new(4, 2), font.size());
    assert_eq!(2, font.len());
    assert_eq!(&[15, 8], font.glyph(1).unwrap().rows());
    assert!(matches!(Font::from_json("json", 4, 2, "[[0, 0"), Err(EngineError::InvalidFontTable(_))));
}

#[test]
fn test_from_raw_bytes() {
    let mut data = vec![0u8; 256 * 16];
    data[16..32].fill(0xAA);
    let font = Font::from_bytes("raw", &data).unwrap();
    assert_eq!(Size::new(8, 16), font.size());
    assert_eq!(256, font.len());
    assert_eq!(&[0xAA; 16], font.glyph(1).unwrap().rows());

    assert!(matches!(Font::from_bytes("odd", &[0u8; 100]), Err(EngineError::UnknownFontFormat { size: 100 })));
}

#[test]
fn test_from_psf1() {
    let mut data = vec![0x36, 0x04, 0x00, 8];
    data.extend(std::iter::repeat(0u8).take(256 * 8));
    data[4 + 8] = 0x80;
    let font = Font::from_bytes("psf1", &data).unwrap();
    assert_eq!(Size::new(8, 8), font.size());
    assert_eq!(256, font.len());
    assert_eq!(0x80, font.glyph(1).unwrap().rows()[0]);

    data.truncate(100);
    assert!(matches!(Font::from_bytes("psf1", &data), Err(EngineError::FontLengthMismatch { .. })));
}

fn psf2(width: u32, height: u32, length: u32, glyphs: &[u8]) -> Vec<u8> {
    let charsize = width.div_ceil(8) * height;
    let mut data = Vec::new();
    for word in [0x864a_b572, 0, 32, 0, length, charsize, height, width] {
        data.extend(u32::to_le_bytes(word));
    }
    data.extend_from_slice(glyphs);
    data
}

#[test]
fn test_from_psf2_wide_glyphs() {
    // 10 pixel wide glyphs use two bytes per scanline, padded at the right.
    let glyphs = [0xFF, 0xC0, 0x80, 0x00];
    let font = Font::from_bytes("psf2", &psf2(10, 2, 1, &glyphs)).unwrap();
    assert_eq!(Size::new(10, 2), font.size());
    assert_eq!(&[0x3FF, 0x200], font.glyph(0).unwrap().rows());
}

#[test]
fn test_psf2_version_check() {
    let mut data = psf2(8, 1, 1, &[0]);
    data[4] = 1;
    assert!(matches!(Font::from_bytes("psf2", &data), Err(EngineError::UnsupportedPsfVersion { version: 1 })));
}

#[test]
fn test_load_json_file() {
    let path = std::env::temp_dir().join(format!("vga_engine_font_{}.json", std::process::id()));
    std::fs::write(&path, "[[1, 2, 3]]").unwrap();
    let font = Font::load(&path, Size::new(8, 3)).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(&[1, 2, 3], font.glyph(0).unwrap().rows());

    assert!(matches!(Font::load(&path, Size::new(8, 3)), Err(EngineError::ReadFile { .. })));
}

#[test]
fn test_glyph_display() {
    let glyph = Glyph::new(4, 2, vec![0b0110, 0b0001]);
    assert_eq!(" 0--##\n 1----\n---", glyph.to_string());
}
