use crate::Size;

/// A cell or pixel coordinate. Which one is meant is up to the caller.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(x: {}, y: {})", self.x, self.y)
    }
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub fn min(self, other: Self) -> Self {
        Position::new(self.x.min(other.x), self.y.min(other.y))
    }

    pub fn max(self, other: Self) -> Self {
        Position::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Maps a pixel coordinate to the cell that contains it.
    ///
    /// Rounds towards negative infinity so pixels left of or above the origin
    /// land in negative cells instead of collapsing onto cell 0.
    pub fn pixel_to_cell(self, cell_size: Size) -> Position {
        Position::new(self.x.div_euclid(cell_size.width), self.y.div_euclid(cell_size.height))
    }

    /// Top left pixel of this cell.
    pub fn cell_to_pixel(self, cell_size: Size) -> Position {
        Position::new(self.x * cell_size.width, self.y * cell_size.height)
    }
}

impl From<(i32, i32)> for Position {
    fn from(value: (i32, i32)) -> Self {
        Position { x: value.0, y: value.1 }
    }
}

impl From<(usize, usize)> for Position {
    fn from(value: (usize, usize)) -> Self {
        Position {
            x: value.0 as i32,
            y: value.1 as i32,
        }
    }
}

impl From<(u32, u32)> for Position {
    fn from(value: (u32, u32)) -> Self {
        Position {
            x: value.0 as i32,
            y: value.1 as i32,
        }
    }
}
