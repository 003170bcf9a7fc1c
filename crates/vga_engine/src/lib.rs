#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_lossless,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]
//! Core of the vga_draw text-mode editor.
//!
//! A [`SymbolGrid`] holds one (glyph, foreground, background) triple per cell.
//! [`GridRenderer`] rasterizes that grid through a bitmap [`Font`] and a 16 entry
//! [`Palette`] onto a [`Surface`], paints the current symbol under the pointer and
//! exports the grid as a memory initialization file (see [`formats`]).
mod error;
pub use error::*;

mod position;
pub use position::*;

mod palette_handling;
pub use palette_handling::*;

mod fonts;
pub use fonts::*;

mod symbol;
pub use symbol::*;

mod symbol_grid;
pub use symbol_grid::*;

mod surface;
pub use surface::*;

mod mouse_handling;
pub use mouse_handling::*;

mod grid_renderer;
pub use grid_renderer::*;

mod chooser;
pub use chooser::*;

mod editor;
pub use editor::*;

pub mod formats;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(width: {}, height: {})", self.width, self.height)
    }
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Size { width, height }
    }

    /// Number of whole `cell` sized blocks that fit into this size.
    pub fn cells(&self, cell: Size) -> Size {
        if cell.width <= 0 || cell.height <= 0 {
            return Size::default();
        }
        Size::new(self.width / cell.width, self.height / cell.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

impl From<(i32, i32)> for Size {
    fn from(value: (i32, i32)) -> Self {
        Size {
            width: value.0,
            height: value.1,
        }
    }
}

impl From<(usize, usize)> for Size {
    fn from(value: (usize, usize)) -> Self {
        Size {
            width: value.0 as i32,
            height: value.1 as i32,
        }
    }
}

impl From<(u32, u32)> for Size {
    fn from(value: (u32, u32)) -> Self {
        Size {
            width: value.0 as i32,
            height: value.1 as i32,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rectangle {
    pub start: Position,
    pub size: Size,
}

impl std::fmt::Display for Rectangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(x:{}, y:{}, width: {}, height: {})",
            self.start.x, self.start.y, self.size.width, self.size.height
        )
    }
}

impl Rectangle {
    pub fn new(start: Position, size: Size) -> Self {
        Self { start, size }
    }

    pub fn from(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            start: Position::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn bottom_right(&self) -> Position {
        Position {
            x: self.start.x + self.size.width,
            y: self.start.y + self.size.height,
        }
    }

    pub fn left(&self) -> i32 {
        self.start.x
    }

    pub fn right(&self) -> i32 {
        self.bottom_right().x
    }

    pub fn top(&self) -> i32 {
        self.start.y
    }

    pub fn bottom(&self) -> i32 {
        self.bottom_right().y
    }

    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    pub fn is_inside(&self, pos: impl Into<Position>) -> bool {
        let pos = pos.into();
        self.start.x <= pos.x && self.start.y <= pos.y && pos.x < self.right() && pos.y < self.bottom()
    }

    /// Overlapping area of both rectangles, empty if they don't overlap.
    pub fn intersect(&self, other: &Rectangle) -> Rectangle {
        let min = self.start.max(other.start);
        let max = self.bottom_right().min(other.bottom_right());
        if max.x <= min.x || max.y <= min.y {
            return Rectangle::new(min, Size::default());
        }
        Rectangle {
            start: min,
            size: Size::new(max.x - min.x, max.y - min.y),
        }
    }

    pub fn y_range(&self) -> std::ops::Range<i32> {
        self.start.y..self.bottom()
    }

    pub fn x_range(&self) -> std::ops::Range<i32> {
        self.start.x..self.right()
    }
}
