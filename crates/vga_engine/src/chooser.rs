use std::sync::Arc;

use crate::{Color, Font, Palette, PixelBuffer, PointerHandler, Position, Rectangle, Size, Surface, HOVER_ALPHA, HOVER_COLOR};

/// Cell layout and look of a chooser surface.
pub trait ChooserCells {
    fn cell_size(&self) -> Size;

    /// Draws the entry `index` into `rect`.
    fn draw_cell<S: Surface + ?Sized>(&self, surface: &mut S, rect: Rectangle, index: usize);

    /// Marks `rect` as the current selection.
    fn draw_selection<S: Surface + ?Sized>(&self, surface: &mut S, rect: Rectangle);
}

/// Glyph table: every glyph of the font, white on black.
pub struct FontCells {
    font: Arc<Font>,
}

impl FontCells {
    pub fn new(font: Arc<Font>) -> Self {
        Self { font }
    }
}

impl ChooserCells for FontCells {
    fn cell_size(&self) -> Size {
        self.font.size()
    }

    fn draw_cell<S: Surface + ?Sized>(&self, surface: &mut S, rect: Rectangle, index: usize) {
        let glyph = self.font.glyph_or_fallback(u32::try_from(index).unwrap_or(u32::MAX));
        for y in 0..rect.size.height {
            for x in 0..rect.size.width {
                let color = if glyph.pixel_at(x, y) == 0 { Color::BLACK } else { Color::WHITE };
                surface.put_pixel(rect.left() + x, rect.top() + y, &color);
            }
        }
    }

    fn draw_selection<S: Surface + ?Sized>(&self, surface: &mut S, rect: Rectangle) {
        surface.blend_rect(rect, &HOVER_COLOR, HOVER_ALPHA);
    }
}

/// 16x16 pixel swatches of the palette, black past its end.
pub struct ColorCells {
    palette: Arc<Palette>,
}

impl ColorCells {
    pub const SWATCH_SIZE: Size = Size::new(16, 16);

    pub fn new(palette: Arc<Palette>) -> Self {
        Self { palette }
    }
}

impl ChooserCells for ColorCells {
    fn cell_size(&self) -> Size {
        ColorCells::SWATCH_SIZE
    }

    fn draw_cell<S: Surface + ?Sized>(&self, surface: &mut S, rect: Rectangle, index: usize) {
        let color = self.palette.get_color(u32::try_from(index).unwrap_or(u32::MAX));
        surface.fill_rect(rect, &color);
    }

    fn draw_selection<S: Surface + ?Sized>(&self, surface: &mut S, rect: Rectangle) {
        surface.stroke_rect(rect, &Color::BLACK);
    }
}

pub type ChooseCallback = Box<dyn FnMut(usize)>;

/// Palette surface that turns clicks into a selected index.
///
/// Clicking a cell other than the current selection outlines it, restores the
/// previous one and reports `row * cells_per_row + col` to the registered
/// callback. The selection starts on cell (0, 0), so a first click there
/// reports nothing.
pub struct PaletteChooser<C: ChooserCells, S: Surface = PixelBuffer> {
    cells: C,
    surface: S,
    selected: Position,
    on_choose: Option<ChooseCallback>,
}

pub type FontChooser<S = PixelBuffer> = PaletteChooser<FontCells, S>;
pub type ColorChooser<S = PixelBuffer> = PaletteChooser<ColorCells, S>;

impl<S: Surface> PaletteChooser<FontCells, S> {
    pub fn font(font: Arc<Font>, surface: S) -> Self {
        PaletteChooser::new(FontCells::new(font), surface)
    }
}

impl<S: Surface> PaletteChooser<ColorCells, S> {
    pub fn colors(palette: Arc<Palette>, surface: S) -> Self {
        PaletteChooser::new(ColorCells::new(palette), surface)
    }
}

impl<C: ChooserCells, S: Surface> PaletteChooser<C, S> {
    pub fn new(cells: C, surface: S) -> Self {
        Self {
            cells,
            surface,
            selected: Position::default(),
            on_choose: None,
        }
    }

    /// Registers the selection callback, replacing any previous one.
    pub fn on_choose(&mut self, callback: impl FnMut(usize) + 'static) {
        self.on_choose = Some(Box::new(callback));
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn selected_cell(&self) -> Position {
        self.selected
    }

    pub fn cells_per_row(&self) -> i32 {
        (self.surface.size().width / self.cells.cell_size().width).max(1)
    }

    fn cell_rect(&self, cell: Position) -> Rectangle {
        let size = self.cells.cell_size();
        Rectangle::new(cell.cell_to_pixel(size), size)
    }

    fn contains_cell(&self, cell: Position) -> bool {
        let cell_height = self.cells.cell_size().height;
        let rows = (self.surface.size().height + cell_height - 1) / cell_height;
        (0..self.cells_per_row()).contains(&cell.x) && (0..rows).contains(&cell.y)
    }

    fn index_of(&self, cell: Position) -> Option<usize> {
        usize::try_from(cell.y * self.cells_per_row() + cell.x).ok()
    }

    fn draw_cell(&mut self, cell: Position) {
        let rect = self.cell_rect(cell);
        if let Some(index) = self.index_of(cell) {
            self.cells.draw_cell(&mut self.surface, rect, index);
        }
    }

    /// Selects the cell under `pos`. Returns the newly selected index, `None`
    /// if the cell was already selected or `pos` is outside the cell columns.
    pub fn select_at(&mut self, pos: Position) -> Option<usize> {
        let cell = pos.pixel_to_cell(self.cells.cell_size());
        if !self.contains_cell(cell) {
            log::warn!("click at {pos} is outside of the chooser");
            return None;
        }
        if cell == self.selected {
            return None;
        }
        let index = self.index_of(cell)?;

        let rect = self.cell_rect(cell);
        self.cells.draw_selection(&mut self.surface, rect);
        let previous = self.selected;
        self.draw_cell(previous);
        self.selected = cell;

        log::debug!("selected index {index}");
        if let Some(callback) = &mut self.on_choose {
            callback(index);
        }
        Some(index)
    }

    /// Clears the surface and draws every cell.
    pub fn render(&mut self) {
        self.surface.clear();
        let size = self.cells.cell_size();
        let surface = self.surface.size();
        let cols = (surface.width + size.width - 1) / size.width;
        let rows = (surface.height + size.height - 1) / size.height;
        for y in 0..rows {
            for x in 0..cols {
                self.draw_cell(Position::new(x, y));
            }
        }
    }
}

impl<C: ChooserCells, S: Surface> PointerHandler for PaletteChooser<C, S> {
    fn pointer_move(&mut self, _pos: Position) {}

    fn pointer_down(&mut self, pos: Position) {
        self.select_at(pos);
    }
}
