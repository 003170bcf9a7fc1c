use crate::{EngineError, Position, Rectangle, Result, Size, Symbol};

/// The video memory of the editor: a fixed `width` x `height` block of symbols.
///
/// Coordinates are (column, row). Writing or reading outside the grid is a
/// caller bug; the plain accessors log it and carry on, the `try_` variants
/// report it as [`EngineError::OutOfBounds`].
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolGrid {
    size: Size,
    cells: Vec<Symbol>,
}

impl SymbolGrid {
    pub fn new(size: impl Into<Size>) -> Self {
        let size = size.into();
        let size = Size::new(size.width.max(0), size.height.max(0));
        Self {
            size,
            cells: vec![Symbol::default(); (size.width * size.height) as usize],
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    pub fn rectangle(&self) -> Rectangle {
        Rectangle::new(Position::default(), self.size)
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if self.rectangle().is_inside(pos) {
            Some((pos.y * self.size.width + pos.x) as usize)
        } else {
            None
        }
    }

    pub fn try_set_cell(&mut self, pos: impl Into<Position>, symbol: Symbol) -> Result<()> {
        let pos = pos.into();
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = symbol;
                Ok(())
            }
            None => Err(EngineError::OutOfBounds { pos, size: self.size }),
        }
    }

    pub fn try_get_cell(&self, pos: impl Into<Position>) -> Result<Symbol> {
        let pos = pos.into();
        match self.index(pos) {
            Some(i) => Ok(self.cells[i]),
            None => Err(EngineError::OutOfBounds { pos, size: self.size }),
        }
    }

    /// Overwrites a cell. Writes outside the grid are dropped.
    pub fn set_cell(&mut self, pos: impl Into<Position>, symbol: Symbol) {
        if let Err(err) = self.try_set_cell(pos, symbol) {
            log::warn!("set_cell: {err}");
        }
    }

    /// Reads a cell. Cells outside the grid read as the empty symbol.
    pub fn get_cell(&self, pos: impl Into<Position>) -> Symbol {
        match self.try_get_cell(pos) {
            Ok(symbol) => symbol,
            Err(err) => {
                log::warn!("get_cell: {err}");
                Symbol::default()
            }
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Symbol::default());
    }

    /// All cells in row major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Symbol)> + '_ {
        let width = self.size.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, symbol)| (Position::new(i as i32 % width, i as i32 / width), *symbol))
    }

    /// Cells inside `area` (clipped to the grid) in row major order.
    pub fn iter_area(&self, area: Rectangle) -> impl Iterator<Item = (Position, Symbol)> + '_ {
        let area = area.intersect(&self.rectangle());
        area.y_range()
            .flat_map(move |y| area.x_range().map(move |x| Position::new(x, y)))
            .map(move |pos| (pos, self.cells[(pos.y * self.size.width + pos.x) as usize]))
    }
}
