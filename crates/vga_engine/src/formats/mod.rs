//! Export formats for the symbol grid.
//!
//! [`FileFormat`] is the registry the host picks from; each format lives in
//! its own module.
use std::path::Path;

use crate::{Font, Palette, Result, SymbolGrid};

pub mod image_format;
pub mod mif;
pub mod spi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// Memory initialization file for the adapter's video RAM (.mif)
    Mif,
    /// Raw SPI command frames that redraw the screen (.spi)
    Spi,
    /// Rendered image of the grid (.png)
    Png,
}

impl FileFormat {
    pub const ALL: &'static [FileFormat] = &[FileFormat::Mif, FileFormat::Spi, FileFormat::Png];

    pub fn extension(&self) -> &'static str {
        match self {
            FileFormat::Mif => "mif",
            FileFormat::Spi => "spi",
            FileFormat::Png => "png",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FileFormat::Mif => "Memory Initialization File",
            FileFormat::Spi => "SPIVGA command stream",
            FileFormat::Png => "PNG Image",
        }
    }

    pub fn from_extension(ext: &str) -> Option<FileFormat> {
        let ext = ext.to_ascii_lowercase();
        FileFormat::ALL.iter().copied().find(|format| format.extension() == ext)
    }

    pub fn from_path(path: &Path) -> Option<FileFormat> {
        path.extension().and_then(|ext| ext.to_str()).and_then(FileFormat::from_extension)
    }

    /// Exports the whole grid. Font and palette only matter for images.
    pub fn to_bytes(&self, grid: &SymbolGrid, font: &Font, palette: &Palette) -> Result<Vec<u8>> {
        match self {
            FileFormat::Mif => Ok(mif::to_mif(grid, grid.rectangle()).into_bytes()),
            FileFormat::Spi => spi::to_command_stream(grid),
            FileFormat::Png => image_format::to_png(grid, font, palette),
        }
    }
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
