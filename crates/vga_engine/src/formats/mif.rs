//! Memory initialization file dump of the video RAM.
//!
//! One 16 bit word per cell at `col + row * 128`; the word is
//! [`Symbol::encoded`](crate::Symbol::encoded). Zero words are left out, so a
//! reader must treat every missing address as zero. A cell painted with glyph
//! 0 on color 0/0 can't be told apart from one that was never painted.
use std::fmt::Write;

use crate::{Rectangle, SymbolGrid};

/// Words per video RAM row, independent of the grid width.
pub const ROW_STRIDE: i32 = 128;
pub const WORD_WIDTH: u32 = 16;
pub const DEPTH: u32 = 4096;

const MAX_WORD: u32 = 0xFFFF;

/// Dumps the cells of `area` in row major order.
pub fn to_mif(grid: &SymbolGrid, area: Rectangle) -> String {
    let mut result = String::new();
    result.push_str("bin2mif project\n");
    let _ = writeln!(result, "WIDTH = {WORD_WIDTH};");
    let _ = writeln!(result, "DEPTH = {DEPTH};");
    result.push('\n');
    result.push_str("ADDRESS_RADIX = HEX;\n");
    result.push_str("DATA_RADIX = HEX;\n");
    result.push_str("CONTENT BEGIN\n");

    for (pos, symbol) in grid.iter_area(area) {
        let data = symbol.encoded();
        if data == 0 {
            continue;
        }
        let addr = (pos.x + pos.y * ROW_STRIDE) as u32;
        if addr > MAX_WORD || data > MAX_WORD {
            log::warn!("cell {pos} ({symbol}) doesn't fit a 16 bit word: {addr:X} : {data:X}");
        }
        let _ = writeln!(result, "{addr:04X} : {data:04X};");
    }

    result.push_str("END\n");
    result
}
