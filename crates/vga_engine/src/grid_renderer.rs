use std::{cell::Cell, rc::Rc, sync::Arc};

use crate::{formats::mif, Color, Font, Palette, PixelBuffer, PointerHandler, Position, Rectangle, Size, Surface, Symbol, SymbolGrid};

/// Translucent green laid over the cell under the pointer.
pub const HOVER_COLOR: Color = Color::new(0x00, 0xFF, 0x00);
pub const HOVER_ALPHA: u8 = 127;

/// Template of a fresh canvas: glyph 0 with foreground 127. That color has no
/// palette entry, so strokes draw black until a color is picked.
pub const INITIAL_SYMBOL: Symbol = Symbol::new(0, 127, 0);

/// Shared slot for the symbol new strokes apply. Choosers write into it.
pub type SymbolTemplate = Rc<Cell<Symbol>>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerState {
    /// Cell currently under the pointer, `None` after the pointer left.
    pub hover: Option<Position>,
    pub button_down: bool,
    /// Cell that last got the hover overlay and still needs restoring.
    pub last_drawn: Position,
}

/// Draws one grid cell onto `surface`.
///
/// Every pixel of the cell box samples the cell's glyph: ink takes the
/// foreground color, everything else the background color. Cells outside the
/// grid draw as the empty symbol.
pub fn rasterize_cell<S: Surface + ?Sized>(surface: &mut S, grid: &SymbolGrid, font: &Font, palette: &Palette, cell: Position) {
    let symbol = grid.try_get_cell(cell).unwrap_or_default();
    let glyph = font.glyph_or_fallback(symbol.glyph);
    let fg = palette.get_color(symbol.foreground);
    let bg = palette.get_color(symbol.background);
    let origin = cell.cell_to_pixel(font.size());
    for y in 0..font.char_height() {
        for x in 0..font.char_width() {
            let color = if glyph.pixel_at(x, y) == 0 { &bg } else { &fg };
            surface.put_pixel(origin.x + x, origin.y + y, color);
        }
    }
}

/// Renders the whole grid into a new pixel buffer sized to fit it.
pub fn render_grid(grid: &SymbolGrid, font: &Font, palette: &Palette) -> PixelBuffer {
    let size = font.size();
    let mut buffer = PixelBuffer::new((grid.width() * size.width, grid.height() * size.height));
    for (pos, _) in grid.iter() {
        rasterize_cell(&mut buffer, grid, font, palette, pos);
    }
    buffer
}

/// The main canvas: shows the grid and paints the current symbol into it.
pub struct GridRenderer<S: Surface = PixelBuffer> {
    font: Arc<Font>,
    palette: Arc<Palette>,
    grid: SymbolGrid,
    surface: S,
    current_symbol: SymbolTemplate,
    pointer: PointerState,
    dirty: Vec<Position>,
    hover_color: Color,
    hover_alpha: u8,
}

impl<S: Surface> GridRenderer<S> {
    pub fn new(font: Arc<Font>, palette: Arc<Palette>, grid: SymbolGrid, surface: S) -> Self {
        Self {
            font,
            palette,
            grid,
            surface,
            current_symbol: Rc::new(Cell::new(INITIAL_SYMBOL)),
            pointer: PointerState::default(),
            dirty: Vec::new(),
            hover_color: HOVER_COLOR,
            hover_alpha: HOVER_ALPHA,
        }
    }

    pub fn font(&self) -> &Arc<Font> {
        &self.font
    }

    pub fn palette(&self) -> &Arc<Palette> {
        &self.palette
    }

    pub fn grid(&self) -> &SymbolGrid {
        &self.grid
    }

    /// Direct grid access. Changes made here show up on the next redraw.
    pub fn grid_mut(&mut self) -> &mut SymbolGrid {
        &mut self.grid
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn pointer_state(&self) -> PointerState {
        self.pointer
    }

    pub fn set_hover_style(&mut self, color: Color, alpha: u8) {
        self.hover_color = color;
        self.hover_alpha = alpha;
    }

    pub fn current_symbol(&self) -> Symbol {
        self.current_symbol.get()
    }

    pub fn set_current_symbol(&self, symbol: Symbol) {
        self.current_symbol.set(symbol);
    }

    /// Handle to the current symbol slot, for wiring chooser callbacks.
    pub fn current_symbol_handle(&self) -> SymbolTemplate {
        self.current_symbol.clone()
    }

    pub fn set_font_char(&self, glyph: u32) {
        self.current_symbol.set(self.current_symbol.get().with_glyph(glyph));
    }

    pub fn set_font_color(&self, color: u32) {
        self.current_symbol.set(self.current_symbol.get().with_foreground(color));
    }

    pub fn set_font_background(&self, color: u32) {
        self.current_symbol.set(self.current_symbol.get().with_background(color));
    }

    /// Cell containing the pixel `pos`.
    pub fn cell_at(&self, pos: Position) -> Position {
        pos.pixel_to_cell(self.font.size())
    }

    /// Grid cells that are backed by surface pixels.
    pub fn visible_cells(&self) -> Rectangle {
        let cells: Size = self.surface.size().cells(self.font.size());
        Rectangle::new(Position::default(), cells).intersect(&self.grid.rectangle())
    }

    /// Writes the current symbol into `cell`; the cell is redrawn on the next flush.
    pub fn paint_cell(&mut self, cell: impl Into<Position>) {
        let cell = cell.into();
        let symbol = self.current_symbol.get();
        log::debug!("paint {cell} with {symbol}");
        self.grid.set_cell(cell, symbol);
        if !self.dirty.contains(&cell) {
            self.dirty.push(cell);
        }
    }

    /// Redraws every cell painted since the last flush.
    pub fn flush(&mut self) {
        for cell in std::mem::take(&mut self.dirty) {
            self.redraw_symbol(cell);
        }
    }

    /// Restores the cell box that contains the pixel `pos` from the grid.
    pub fn redraw_cell(&mut self, pos: impl Into<Position>) {
        let cell = self.cell_at(pos.into());
        self.redraw_symbol(cell);
    }

    fn redraw_symbol(&mut self, cell: Position) {
        rasterize_cell(&mut self.surface, &self.grid, &self.font, &self.palette, cell);
    }

    fn draw_hover(&mut self, cell: Position) {
        let rect = Rectangle::new(cell.cell_to_pixel(self.font.size()), self.font.size());
        self.surface.blend_rect(rect, &self.hover_color, self.hover_alpha);
    }

    /// Clears the surface and draws every cell covering it, row by row.
    pub fn full_redraw(&mut self) {
        self.surface.clear();
        let size = self.font.size();
        let surface = self.surface.size();
        let cols = (surface.width + size.width - 1) / size.width;
        let rows = (surface.height + size.height - 1) / size.height;
        for y in 0..rows {
            for x in 0..cols {
                self.redraw_symbol(Position::new(x, y));
            }
        }
        self.dirty.clear();
    }

    /// MIF dump of all visible cells.
    pub fn export_dump(&self) -> String {
        mif::to_mif(&self.grid, self.visible_cells())
    }
}

impl<S: Surface> PointerHandler for GridRenderer<S> {
    /// Paints while the button is held, otherwise highlights the hovered cell.
    ///
    /// The previously highlighted cell is restored only after the new one got
    /// its overlay, so the cell under the pointer keeps showing the highlight
    /// until the pointer moves on or leaves.
    fn pointer_move(&mut self, pos: Position) {
        let cell = self.cell_at(pos);
        if self.pointer.hover != Some(cell) {
            self.pointer.hover = Some(cell);
            if self.pointer.button_down {
                self.paint_cell(cell);
            } else {
                self.draw_hover(cell);
            }
        }

        if cell != self.pointer.last_drawn {
            let previous = self.pointer.last_drawn;
            self.redraw_symbol(previous);
            self.pointer.last_drawn = cell;
        }
        self.flush();
    }

    fn pointer_down(&mut self, pos: Position) {
        self.pointer.button_down = true;
        let cell = match self.pointer.hover {
            Some(cell) => cell,
            None => self.cell_at(pos),
        };
        self.paint_cell(cell);
        self.flush();
    }

    fn pointer_up(&mut self) {
        self.pointer.button_down = false;
    }

    fn pointer_leave(&mut self) {
        self.pointer.button_down = false;
        let cell = self.pointer.hover.take().unwrap_or(self.pointer.last_drawn);
        self.redraw_symbol(cell);
        self.flush();
    }
}
