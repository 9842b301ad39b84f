use std::sync::Arc;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::coords::Viewport;
use crate::effects::{shield_fragment, ShieldParams};
use crate::error::ShieldError;
use crate::paint::Color;

use super::Canvas;

/// Evaluates the shield effect over a canvas, one rayon task per row.
///
/// Rows read only the shared parameter block, so the result does not depend
/// on the worker count.
#[derive(Debug, Clone, Default)]
pub struct ShieldPass {
    /// `None` runs on rayon's global pool.
    pool: Option<Arc<ThreadPool>>,
}

impl ShieldPass {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pass with a dedicated pool of `workers` threads; `0` uses the global pool.
    pub fn with_workers(workers: usize) -> Result<Self, ShieldError> {
        if workers == 0 {
            return Ok(Self::new());
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("starwake-raster-{i}"))
            .build()
            .map_err(|e| ShieldError::ThreadPool { message: e.to_string() })?;
        Ok(Self { pool: Some(Arc::new(pool)) })
    }

    /// Composites the shield over `canvas`.
    pub fn draw(&self, canvas: &mut Canvas, params: &ShieldParams) {
        let viewport = canvas.viewport();
        let width = canvas.width() as usize;
        self.shade_rows(canvas.pixels_mut(), width, |x, y, dst| {
            *dst = shield_fragment(viewport.pixel_center_uv(x, y), params).over(*dst);
        });
    }

    /// Raw fragment results for every pixel of `viewport`, without compositing.
    ///
    /// The viewport size is truncated to whole pixels.
    pub fn evaluate(&self, viewport: Viewport, params: &ShieldParams) -> Vec<Color> {
        if !viewport.is_valid() {
            return Vec::new();
        }
        let (width, height) = (viewport.width as usize, viewport.height as usize);
        let mut out = vec![Color::transparent(); width * height];
        self.shade_rows(&mut out, width, |x, y, dst| {
            *dst = shield_fragment(viewport.pixel_center_uv(x, y), params);
        });
        out
    }

    fn shade_rows<F>(&self, pixels: &mut [Color], width: usize, shade: F)
    where
        F: Fn(u32, u32, &mut Color) + Sync,
    {
        if width == 0 || pixels.is_empty() {
            return;
        }
        match &self.pool {
            Some(pool) => pool.install(|| shade_par(pixels, width, &shade)),
            None => shade_par(pixels, width, &shade),
        }
    }
}

fn shade_par<F>(pixels: &mut [Color], width: usize, shade: &F)
where
    F: Fn(u32, u32, &mut Color) + Sync,
{
    pixels.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
        for (x, px) in row.iter_mut().enumerate() {
            shade(x as u32, y as u32, px);
        }
    });
}
