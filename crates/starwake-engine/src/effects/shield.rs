//! Pulsating circular shield overlay.
//!
//! Alpha falls off linearly from 1 at the center to 0 at `radius`, then is
//! scaled by a slow pulse in `[0.75, 1.0]` with period `π` seconds. RGB is the
//! shield color, unchanged.
//!
//! The WGSL twin of this function lives in `render/shaders/shield.wgsl`; the
//! two must stay in sync.

use crate::coords::Vec2;
use crate::error::ShieldError;
use crate::paint::Color;

/// Angular speed of the pulse (radians of `sin` per second).
pub const PULSE_RATE: f32 = 2.0;
/// Half the peak-to-peak swing of the pulse multiplier.
pub const PULSE_DEPTH: f32 = 1.0 / 8.0;
/// Midpoint of the pulse multiplier.
pub const PULSE_BASE: f32 = 0.875;

/// Per-frame shield parameters.
///
/// Set by the caller between frames. Effects only ever read it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShieldParams {
    /// Shield center in UV.
    pub center: Vec2,
    /// Radius in UV units. Expected `> 0`.
    pub radius: f32,
    /// Base color; alpha is ignored by the effect.
    pub color: Color,
    /// Seconds since an arbitrary epoch.
    pub time: f32,
}

impl ShieldParams {
    #[inline]
    pub const fn new(center: Vec2, radius: f32, color: Color) -> Self {
        Self {
            center,
            radius,
            color,
            time: 0.0,
        }
    }

    #[inline]
    pub const fn with_time(self, time: f32) -> Self {
        Self { time, ..self }
    }

    /// True when the radius cannot produce a meaningful falloff.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.radius.is_finite() && self.radius > 0.0)
    }

    /// Checks the parameter block once per frame, outside the per-pixel path.
    pub fn validate(&self) -> Result<(), ShieldError> {
        if self.is_degenerate() {
            return Err(ShieldError::InvalidRadius { radius: self.radius });
        }
        if !self.center.is_finite() {
            return Err(ShieldError::NonFiniteCenter);
        }
        if !self.time.is_finite() {
            return Err(ShieldError::NonFiniteTime { time: self.time });
        }
        Ok(())
    }
}

/// Linear falloff `max(0, 1 - distance / radius)`.
///
/// No upper clamp. Callers guarantee `radius > 0`.
#[inline]
pub fn falloff(distance: f32, radius: f32) -> f32 {
    (1.0 - distance / radius).max(0.0)
}

/// Pulse multiplier `sin(2t) / 8 + 0.875`, in `[0.75, 1.0]`.
#[inline]
pub fn pulse(time: f32) -> f32 {
    (time * PULSE_RATE).sin() * PULSE_DEPTH + PULSE_BASE
}

/// Shield color at fragment `uv`.
///
/// A degenerate radius yields a fully transparent fragment.
// TODO: switch to squared-distance decay `(1 - d²/r²)²`, which fades to zero at
// the rim and drops the sqrt.
#[inline]
pub fn shield_fragment(uv: Vec2, params: &ShieldParams) -> Color {
    if params.is_degenerate() {
        return params.color.with_alpha(0.0);
    }
    let alpha = falloff(uv.distance(params.center), params.radius) * pulse(params.time);
    params.color.with_alpha(alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_4, PI};

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    fn red_shield() -> ShieldParams {
        ShieldParams::new(Vec2::new(0.5, 0.5), 0.25, Color::rgba(1.0, 0.0, 0.0, 1.0))
    }

    // ── falloff ───────────────────────────────────────────────────────────

    #[test]
    fn falloff_is_one_at_center() {
        assert_eq!(falloff(0.0, 0.25), 1.0);
    }

    #[test]
    fn falloff_is_zero_at_and_beyond_radius() {
        assert_eq!(falloff(0.25, 0.25), 0.0);
        assert_eq!(falloff(0.5, 0.25), 0.0);
        assert_eq!(falloff(100.0, 0.25), 0.0);
    }

    #[test]
    fn falloff_strictly_decreases_inside_radius() {
        let radius = 0.3;
        let mut prev = falloff(0.0, radius);
        for i in 1..=30 {
            let d = radius * i as f32 / 30.0;
            let next = falloff(d, radius);
            assert!(next < prev, "not decreasing at d = {d}");
            prev = next;
        }
        assert_eq!(prev, 0.0);
    }

    #[test]
    fn fragment_alpha_decreases_along_a_ray() {
        let params = red_shield().with_time(1.3);
        let mut prev = shield_fragment(params.center, &params).a;
        for i in 1..=25 {
            let step = params.radius * i as f32 / 25.0;
            let uv = params.center + Vec2::new(0.6, -0.8) * step;
            let next = shield_fragment(uv, &params).a;
            assert!(next < prev, "not decreasing at step {i}");
            prev = next;
        }
    }

    // ── pulse ─────────────────────────────────────────────────────────────

    #[test]
    fn pulse_stays_within_bounds() {
        for i in -2000..2000 {
            let p = pulse(i as f32 * 0.01);
            assert!((0.75 - 1e-6..=1.0 + 1e-6).contains(&p), "pulse {p} out of range");
        }
    }

    #[test]
    fn pulse_has_period_pi() {
        for i in 0..100 {
            let t = i as f32 * 0.07;
            assert!(approx(pulse(t), pulse(t + PI)), "t = {t}");
        }
    }

    #[test]
    fn pulse_peaks_at_quarter_pi() {
        assert!(approx(pulse(FRAC_PI_4), 1.0));
        assert!(approx(pulse(3.0 * FRAC_PI_4), 0.75));
    }

    // ── shield_fragment ───────────────────────────────────────────────────

    #[test]
    fn center_fragment_at_time_zero() {
        let out = shield_fragment(Vec2::new(0.5, 0.5), &red_shield());
        assert_eq!(out, Color::rgba(1.0, 0.0, 0.0, 0.875));
    }

    #[test]
    fn boundary_fragment_is_transparent() {
        let out = shield_fragment(Vec2::new(0.75, 0.5), &red_shield());
        assert_eq!(out.a, 0.0);
    }

    #[test]
    fn outside_fragment_is_transparent() {
        let out = shield_fragment(Vec2::new(1.0, 0.5), &red_shield());
        assert_eq!(out.a, 0.0);
    }

    #[test]
    fn center_fragment_at_pulse_peak() {
        let out = shield_fragment(Vec2::new(0.5, 0.5), &red_shield().with_time(FRAC_PI_4));
        assert!(approx(out.a, 1.0));
    }

    #[test]
    fn rgb_passes_through_unmodified() {
        let params = ShieldParams::new(Vec2::new(0.4, 0.6), 0.2, Color::rgba(0.13, 0.57, 0.91, 0.3))
            .with_time(1.7);
        for (x, y) in [(0.4, 0.6), (0.45, 0.62), (0.9, 0.1), (0.0, 0.0)] {
            let out = shield_fragment(Vec2::new(x, y), &params);
            assert_eq!((out.r, out.g, out.b), (0.13, 0.57, 0.91));
        }
    }

    #[test]
    fn zero_radius_is_transparent_and_finite() {
        let params = ShieldParams { radius: 0.0, ..red_shield() };
        let out = shield_fragment(Vec2::new(0.5, 0.5), &params);
        assert_eq!(out, Color::rgba(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn negative_radius_is_transparent() {
        let params = ShieldParams { radius: -0.25, ..red_shield() };
        assert_eq!(shield_fragment(Vec2::new(0.6, 0.5), &params).a, 0.0);
    }

    // ── validate ──────────────────────────────────────────────────────────

    #[test]
    fn validate_accepts_regular_params() {
        assert_eq!(red_shield().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_bad_inputs() {
        let zero = ShieldParams { radius: 0.0, ..red_shield() };
        assert_eq!(zero.validate(), Err(ShieldError::InvalidRadius { radius: 0.0 }));

        let nan_center = ShieldParams { center: Vec2::new(f32::NAN, 0.5), ..red_shield() };
        assert_eq!(nan_center.validate(), Err(ShieldError::NonFiniteCenter));

        let inf_time = red_shield().with_time(f32::INFINITY);
        assert!(matches!(inf_time.validate(), Err(ShieldError::NonFiniteTime { .. })));
    }
}
