use std::f32::consts::FRAC_PI_4;

use starwake_engine::coords::{Vec2, Viewport};
use starwake_engine::effects::{falloff, shield_fragment, ShieldParams};
use starwake_engine::paint::Color;
use starwake_engine::raster::{Canvas, ShieldPass};
use starwake_engine::time::FrameClock;

fn red_shield() -> ShieldParams {
    ShieldParams::new(Vec2::new(0.5, 0.5), 0.25, Color::rgba(1.0, 0.0, 0.0, 1.0))
}

#[test]
fn documented_scenarios() {
    let params = red_shield();

    let center = shield_fragment(Vec2::new(0.5, 0.5), &params);
    assert_eq!((center.r, center.g, center.b, center.a), (1.0, 0.0, 0.0, 0.875));

    assert_eq!(shield_fragment(Vec2::new(0.75, 0.5), &params).a, 0.0);
    assert_eq!(shield_fragment(Vec2::new(1.0, 0.5), &params).a, 0.0);

    let peak = shield_fragment(Vec2::new(0.5, 0.5), &params.with_time(FRAC_PI_4));
    assert!((peak.a - falloff(0.0, 0.25) * 1.0).abs() < 1e-6);
}

#[test]
fn fragments_outside_radius_are_transparent_on_a_full_canvas() {
    let params = red_shield().with_time(0.9);
    let (w, h) = (64, 48);
    let vp = Viewport::new(w as f32, h as f32);
    let out = ShieldPass::new().evaluate(vp, &params);

    for y in 0..h {
        for x in 0..w {
            let uv = vp.pixel_center_uv(x, y);
            let px = out[(y * w + x) as usize];
            assert_eq!((px.r, px.g, px.b), (1.0, 0.0, 0.0));
            if uv.distance(params.center) >= params.radius {
                assert_eq!(px.a, 0.0, "pixel ({x}, {y}) should be clear");
            } else {
                assert!(px.a <= 1.0);
                if uv.distance(params.center) < params.radius * 0.999 {
                    assert!(px.a > 0.0, "pixel ({x}, {y}) should be tinted");
                }
            }
        }
    }
}

#[test]
fn animated_frames_brighten_and_dim_with_the_pulse() {
    let mut clock = FrameClock::fixed(60.0);
    let mut canvas = Canvas::new(16, 16, Color::BLACK).unwrap();
    let pass = ShieldPass::with_workers(4).unwrap();

    let mut center_alphas = Vec::new();
    for _ in 0..189 {
        let ft = clock.tick();
        let params = red_shield().with_time(ft.elapsed);
        center_alphas.push(shield_fragment(params.center, &params).a);

        canvas.fill(Color::BLACK);
        pass.draw(&mut canvas, &params);
        assert_eq!(canvas.pixel(0, 0), Some(Color::BLACK));
    }

    let max = center_alphas.iter().copied().fold(f32::MIN, f32::max);
    let min = center_alphas.iter().copied().fold(f32::MAX, f32::min);
    assert!((max - 1.0).abs() < 1e-3);
    assert!((min - 0.75).abs() < 1e-3);
    assert!(center_alphas.iter().all(|a| (0.75 - 1e-6..=1.0 + 1e-6).contains(a)));
}
