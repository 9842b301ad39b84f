use image::{Rgba, RgbaImage};

use crate::coords::Viewport;
use crate::error::ShieldError;
use crate::paint::Color;

/// Row-major pixel buffer, `(0, 0)` at the top-left.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Creates a canvas filled with `fill`.
    pub fn new(width: u32, height: u32, fill: Color) -> Result<Self, ShieldError> {
        if width == 0 || height == 0 {
            return Err(ShieldError::EmptyCanvas { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width as f32, self.height as f32)
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.index(x, y)).copied()
    }

    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    #[inline]
    pub(crate) fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// 8-bit RGBA copy of the canvas.
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            Rgba(self.pixels[self.index(x, y)].to_rgba8())
        })
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
