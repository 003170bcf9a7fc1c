//! Command stream for the SPIVGA adapter.
//!
//! The adapter takes three byte frames `[command, value1, value2]` over SPI.
//! The stream clears the screen, then positions and writes every non empty
//! cell, so sending it reproduces the grid on the attached display.
use crate::{EngineError, Position, Result, SymbolGrid};

pub const CMD_CLEAR: u8 = 0x1;
pub const CMD_SET_POS: u8 = 0x2;
pub const CMD_CHAR: u8 = 0x4;
pub const CMD_NOOP: u8 = 0x8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpiCommand {
    Clear,
    SetPos { x: u8, y: u8 },
    /// Glyph plus color byte, foreground in the high nibble.
    Char { glyph: u8, color: u8 },
    Noop,
}

impl SpiCommand {
    pub fn to_frame(self) -> [u8; 3] {
        match self {
            SpiCommand::Clear => [CMD_CLEAR, 0, 0],
            SpiCommand::SetPos { x, y } => [CMD_SET_POS, x, y],
            SpiCommand::Char { glyph, color } => [CMD_CHAR, glyph, color],
            SpiCommand::Noop => [CMD_NOOP, 0, 0],
        }
    }
}

fn to_byte(field: &'static str, value: u32, pos: Position) -> Result<u8> {
    u8::try_from(value).map_err(|_| EngineError::SpiValueOutOfRange { field, value, pos })
}

pub fn commands(grid: &SymbolGrid) -> Result<Vec<SpiCommand>> {
    let mut result = vec![SpiCommand::Clear];
    for (pos, symbol) in grid.iter() {
        if symbol.is_empty() {
            continue;
        }
        let x = to_byte("column", pos.x as u32, pos)?;
        let y = to_byte("row", pos.y as u32, pos)?;
        let glyph = to_byte("glyph", symbol.glyph, pos)?;
        let color = to_byte("color", symbol.foreground.wrapping_shl(4).wrapping_add(symbol.background), pos)?;
        result.push(SpiCommand::SetPos { x, y });
        result.push(SpiCommand::Char { glyph, color });
    }
    Ok(result)
}

pub fn to_command_stream(grid: &SymbolGrid) -> Result<Vec<u8>> {
    Ok(commands(grid)?.into_iter().flat_map(SpiCommand::to_frame).collect())
}
