use super::Vec2;

/// Target surface size in pixels.
///
/// Maps integer pixel indices to the UV coordinate of the pixel center.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// UV of the center of pixel `(px, py)`.
    #[inline]
    pub fn pixel_center_uv(self, px: u32, py: u32) -> Vec2 {
        Vec2::new(
            (px as f32 + 0.5) / self.width,
            (py as f32 + 0.5) / self.height,
        )
    }
}
