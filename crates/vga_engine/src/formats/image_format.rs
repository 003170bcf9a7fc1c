//! PNG export of the rendered grid.
use crate::{render_grid, EngineError, Font, Palette, Result, SymbolGrid};

pub fn to_png(grid: &SymbolGrid, font: &Font, palette: &Palette) -> Result<Vec<u8>> {
    if grid.size().is_empty() {
        return Err(EngineError::FormatNotSupported {
            name: "PNG Image".to_string(),
            operation: "exporting an empty grid".to_string(),
        });
    }
    render_grid(grid, font, palette).to_png()
}
