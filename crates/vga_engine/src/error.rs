//! Unified error types for vga_engine

use std::path::PathBuf;
use thiserror::Error;

use crate::{Position, Size};

/// Main error type for vga_engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read file '{path}': {message}")]
    ReadFile { path: PathBuf, message: String },

    // === Grid Errors ===
    #[error("Cell {pos} out of bounds for grid {size}")]
    OutOfBounds { pos: Position, size: Size },

    #[error("Invalid cell size {size}")]
    InvalidCellSize { size: Size },

    // === Font Errors ===
    #[error("Font contains no glyphs")]
    EmptyFont,

    #[error("Glyph {index} has {actual} scanlines, font height is {expected}")]
    GlyphRowMismatch { index: usize, expected: usize, actual: usize },

    #[error("Invalid PSF file: {message}")]
    InvalidPsf { message: String },

    #[error("Unsupported PSF version: {version}")]
    UnsupportedPsfVersion { version: u32 },

    #[error("Font data length mismatch: expected {expected}, got {actual}")]
    FontLengthMismatch { expected: usize, actual: usize },

    #[error("Unknown font format ({size} bytes). Raw fonts need 256 glyphs of 8 pixel width")]
    UnknownFontFormat { size: usize },

    #[error("Invalid font table: {0}")]
    InvalidFontTable(#[from] serde_json::Error),

    // === Palette Errors ===
    #[error("Invalid hex color: {value}")]
    InvalidHexColor { value: String },

    // === Export Errors ===
    #[error("{field} value {value} at cell {pos} does not fit into a SPI command byte")]
    SpiValueOutOfRange { field: &'static str, value: u32, pos: Position },

    #[error("Format '{}' does not support {operation}", name)]
    FormatNotSupported { name: String, operation: String },

    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),
}

/// Result type alias for vga_engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Create a read file error
    pub fn read_file(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::ReadFile {
            path: path.into(),
            message: msg.into(),
        }
    }
}
