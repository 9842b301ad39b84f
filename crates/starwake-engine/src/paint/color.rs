/// Linear straight-alpha RGBA color.
///
/// Invariant:
/// - `rgb` is NOT multiplied by `a`.
///
/// Channels are conventionally in `[0, 1]` but not clamped on construction;
/// effect outputs are clamped at composite time (see [`Color::over`]).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Creates a color from 8-bit channels (`0`–`255`).
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Same RGB, replaced alpha.
    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Clamps all channels to `[0, 1]`.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// Premultiplied `[r, g, b, a]` of the clamped color, for GPU upload.
    #[inline]
    pub fn premultiplied(self) -> [f32; 4] {
        let c = self.clamped();
        [c.r * c.a, c.g * c.a, c.b * c.a, c.a]
    }

    /// Source-over composite of `self` onto `dst`.
    ///
    /// Both inputs are clamped first; a fully transparent result has zero RGB.
    pub fn over(self, dst: Color) -> Color {
        let src = self.clamped();
        let dst = dst.clamped();

        let keep = dst.a * (1.0 - src.a);
        let a = src.a + keep;
        if a <= 0.0 {
            return Color::transparent();
        }

        Color {
            r: (src.r * src.a + dst.r * keep) / a,
            g: (src.g * src.a + dst.g * keep) / a,
            b: (src.b * src.a + dst.b * keep) / a,
            a,
        }
    }

    /// Quantizes the clamped color to 8-bit channels.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        let c = self.clamped();
        let q = |v: f32| (v * 255.0).round() as u8;
        [q(c.r), q(c.g), q(c.b), q(c.a)]
    }
}

/// Energy-level tint: green when fully charged, red when empty.
///
/// `fraction` is clamped to `[0, 1]`. Alpha is always 1.
pub fn charge_tint(fraction: f32) -> Color {
    let f = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
    Color::rgba(1.0 - f, f, 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    // ── over ──────────────────────────────────────────────────────────────

    #[test]
    fn over_opaque_source_replaces_destination() {
        let src = Color::rgba(1.0, 0.0, 0.0, 1.0);
        assert_eq!(src.over(Color::BLACK), src);
    }

    #[test]
    fn over_transparent_source_keeps_destination() {
        let dst = Color::rgba(0.2, 0.4, 0.6, 1.0);
        assert_eq!(Color::rgba(1.0, 1.0, 1.0, 0.0).over(dst), dst);
    }

    #[test]
    fn over_half_alpha_mixes_evenly() {
        let out = Color::rgba(1.0, 0.0, 0.0, 0.5).over(Color::rgba(0.0, 0.0, 1.0, 1.0));
        assert!(approx(out.r, 0.5));
        assert!(approx(out.g, 0.0));
        assert!(approx(out.b, 0.5));
        assert!(approx(out.a, 1.0));
    }

    #[test]
    fn over_clamps_alpha_above_one() {
        let out = Color::rgba(0.0, 1.0, 0.0, 1.4).over(Color::BLACK);
        assert_eq!(out, Color::rgba(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn over_white_at_quarter_alpha_lightens_black() {
        let out = Color::WHITE.with_alpha(0.25).over(Color::BLACK);
        assert!(approx(out.r, 0.25));
        assert!(approx(out.g, 0.25));
        assert!(approx(out.b, 0.25));
        assert!(approx(out.a, 1.0));
        assert_eq!(Color::WHITE.to_rgba8(), [255, 255, 255, 255]);
    }

    #[test]
    fn over_two_transparent_is_transparent() {
        let out = Color::rgba(1.0, 1.0, 1.0, 0.0).over(Color::transparent());
        assert_eq!(out, Color::transparent());
    }

    // ── conversions ───────────────────────────────────────────────────────

    #[test]
    fn premultiplied_scales_rgb_by_alpha() {
        assert_eq!(Color::rgba(1.0, 0.5, 0.0, 0.5).premultiplied(), [0.5, 0.25, 0.0, 0.5]);
    }

    #[test]
    fn rgba8_rounds_and_clamps() {
        assert_eq!(Color::rgba(1.0, 0.5, -1.0, 2.0).to_rgba8(), [255, 128, 0, 255]);
    }

    #[test]
    fn from_u8_round_trips_extremes() {
        assert_eq!(Color::from_u8(255, 0, 255, 0), Color::rgba(1.0, 0.0, 1.0, 0.0));
    }

    // ── charge_tint ───────────────────────────────────────────────────────

    #[test]
    fn charge_tint_full_is_green_and_empty_is_red() {
        assert_eq!(charge_tint(1.0), Color::rgba(0.0, 1.0, 0.0, 1.0));
        assert_eq!(charge_tint(0.0), Color::rgba(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn charge_tint_clamps_out_of_range() {
        assert_eq!(charge_tint(3.0), charge_tint(1.0));
        assert_eq!(charge_tint(-1.0), charge_tint(0.0));
        assert_eq!(charge_tint(f32::NAN), charge_tint(0.0));
    }
}
