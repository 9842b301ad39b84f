//! Preview configuration, loaded from an optional RON file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use starwake_engine::coords::Vec2;
use starwake_engine::effects::ShieldParams;
use starwake_engine::paint::{charge_tint, Color};
use starwake_engine::time::DEFAULT_TICKS_PER_SECOND;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub width: u32,
    pub height: u32,
    pub frames: u32,
    pub ticks_per_second: f32,
    pub directory: PathBuf,
}
impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            // One full pulse (π seconds) at 60 ticks per second.
            frames: 189,
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            directory: PathBuf::from("shield-frames"),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ShieldConfig {
    pub center: (f32, f32),
    pub radius: f32,
    pub color: (f32, f32, f32, f32),
}
impl Default for ShieldConfig {
    fn default() -> Self {
        Self {
            center: (0.5, 0.5),
            radius: 0.25,
            color: (0.35, 0.7, 1.0, 1.0),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PreviewConfig {
    pub output: OutputConfig,
    pub shield: ShieldConfig,
    pub background: (f32, f32, f32, f32),
    /// Reactor charge in `[0, 1]`; when set, tints the shield green..red.
    pub charge: Option<f32>,
    /// Raster threads; `0` uses every available core.
    pub workers: usize,
}
impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            shield: ShieldConfig::default(),
            background: (0.0, 0.0, 0.0, 1.0),
            charge: None,
            workers: 0,
        }
    }
}

impl PreviewConfig {
    pub fn from_ron_str(src: &str) -> Result<Self> {
        ron::from_str(src).context("parse RON")
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_ron_str(&data).with_context(|| format!("load config {}", path.display()))
    }

    /// Falls back to defaults when the file is missing or malformed.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<anyhow::Error>) {
        match Self::load_from_file(path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn background_color(&self) -> Color {
        let (r, g, b, a) = self.background;
        Color::rgba(r, g, b, a)
    }

    /// Shield parameters at time 0, with the charge tint applied.
    pub fn shield_params(&self) -> ShieldParams {
        let (cx, cy) = self.shield.center;
        let (r, g, b, a) = self.shield.color;
        let color = match self.charge {
            Some(charge) => charge_tint(charge).with_alpha(a),
            None => Color::rgba(r, g, b, a),
        };
        ShieldParams::new(Vec2::new(cx, cy), self.shield.radius, color)
    }

    /// Non-fatal configuration warnings.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        let out = &self.output;
        if out.width == 0 || out.height == 0 {
            w.push(format!("output size {}x{} is empty", out.width, out.height));
        }
        if u64::from(out.width) * u64::from(out.height) > 16_000_000 {
            w.push(format!("very large output: {}x{}", out.width, out.height));
        }
        if out.frames == 0 {
            w.push("output.frames is 0; nothing will be written".into());
        }
        if !(out.ticks_per_second.is_finite() && out.ticks_per_second > 0.0) {
            w.push(format!(
                "output.ticks_per_second {} invalid -> {DEFAULT_TICKS_PER_SECOND} used",
                out.ticks_per_second
            ));
        }
        if self.shield.radius.is_nan() || self.shield.radius <= 0.0 {
            w.push(format!("shield.radius {} must be > 0", self.shield.radius));
        } else if self.shield.radius > 1.0 {
            w.push(format!("shield.radius {} larger than the whole surface", self.shield.radius));
        }
        let (cx, cy) = self.shield.center;
        if !(0.0..=1.0).contains(&cx) || !(0.0..=1.0).contains(&cy) {
            w.push(format!("shield.center ({cx}, {cy}) outside the [0, 1] UV square"));
        }
        if let Some(charge) = self.charge {
            if !(0.0..=1.0).contains(&charge) {
                w.push(format!("charge {charge} outside 0..1 -> clamped"));
            }
        }
        w
    }
}
