use crate::{Color, Position, Rectangle, Result, Size};

/// Drawing target the renderers paint on.
///
/// This is where a host toolkit attaches: implement it over a canvas, a
/// framebuffer or use [`PixelBuffer`]. All operations clip to the surface.
pub trait Surface {
    fn size(&self) -> Size;

    /// Resets every pixel to transparent black.
    fn clear(&mut self);

    fn put_pixel(&mut self, x: i32, y: i32, color: &Color);

    fn fill_rect(&mut self, rect: Rectangle, color: &Color);

    /// Composites `color` at `alpha` (0..=255) over the existing pixels.
    fn blend_rect(&mut self, rect: Rectangle, color: &Color, alpha: u8);

    /// One pixel wide outline along the inside of `rect`.
    fn stroke_rect(&mut self, rect: Rectangle, color: &Color) {
        if rect.is_empty() {
            return;
        }
        let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
        self.fill_rect(Rectangle::from(l, t, rect.size.width, 1), color);
        self.fill_rect(Rectangle::from(l, b - 1, rect.size.width, 1), color);
        self.fill_rect(Rectangle::from(l, t, 1, rect.size.height), color);
        self.fill_rect(Rectangle::from(r - 1, t, 1, rect.size.height), color);
    }
}

/// RGBA8 pixel surface.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    size: Size,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(size: impl Into<Size>) -> Self {
        let size = size.into();
        let size = Size::new(size.width.max(0), size.height.max(0));
        Self {
            size,
            pixels: vec![0; (size.width * size.height * 4) as usize],
        }
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.size.width || y >= self.size.height {
            return None;
        }
        Some(((y * self.size.width + x) * 4) as usize)
    }

    /// RGBA value at a pixel, `None` outside the surface.
    pub fn pixel(&self, pos: impl Into<Position>) -> Option<[u8; 4]> {
        let pos = pos.into();
        let o = self.offset(pos.x, pos.y)?;
        Some([self.pixels[o], self.pixels[o + 1], self.pixels[o + 2], self.pixels[o + 3]])
    }

    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }

    fn clip(&self, rect: Rectangle) -> Rectangle {
        rect.intersect(&Rectangle::new(Position::default(), self.size))
    }

    /// Encodes the surface as an RGBA PNG.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut result = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut result, self.size.width as u32, self.size.height as u32);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.pixels)?;
            writer.finish()?;
        }
        Ok(result)
    }
}

impl Surface for PixelBuffer {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.pixels.fill(0);
    }

    fn put_pixel(&mut self, x: i32, y: i32, color: &Color) {
        if let Some(o) = self.offset(x, y) {
            self.pixels[o..o + 4].copy_from_slice(&[color.r, color.g, color.b, 0xFF]);
        }
    }

    fn fill_rect(&mut self, rect: Rectangle, color: &Color) {
        let rect = self.clip(rect);
        for y in rect.y_range() {
            for x in rect.x_range() {
                self.put_pixel(x, y, color);
            }
        }
    }

    fn blend_rect(&mut self, rect: Rectangle, color: &Color, alpha: u8) {
        let rect = self.clip(rect);
        let a = alpha as u32;
        let blend = |src: u8, dst: u8| ((src as u32 * a + dst as u32 * (255 - a) + 127) / 255) as u8;
        for y in rect.y_range() {
            for x in rect.x_range() {
                let Some(o) = self.offset(x, y) else {
                    continue;
                };
                let dst = &mut self.pixels[o..o + 4];
                dst[0] = blend(color.r, dst[0]);
                dst[1] = blend(color.g, dst[1]);
                dst[2] = blend(color.b, dst[2]);
                dst[3] = blend(0xFF, dst[3]);
            }
        }
    }
}
