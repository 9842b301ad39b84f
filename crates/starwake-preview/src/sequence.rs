//! Offline frame rendering.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use starwake_engine::raster::{Canvas, ShieldPass};
use starwake_engine::time::FrameClock;

use crate::config::PreviewConfig;

/// `dir/frame_0007.png` for index 7.
pub fn frame_path(dir: &Path, index: u64) -> PathBuf {
    dir.join(format!("frame_{index:04}.png"))
}

/// Renders `config.output.frames` frames and returns how many were written.
pub fn render_sequence(config: &PreviewConfig) -> Result<u64> {
    let out = &config.output;
    let base = config.shield_params();
    base.validate().context("invalid shield parameters")?;

    fs::create_dir_all(&out.directory)
        .with_context(|| format!("create output directory {}", out.directory.display()))?;

    let background = config.background_color();
    let mut canvas = Canvas::new(out.width, out.height, background)?;
    let pass = ShieldPass::with_workers(config.workers)?;
    let mut clock = FrameClock::fixed(out.ticks_per_second);

    let mut written = 0;
    for _ in 0..out.frames {
        let ft = clock.tick();
        let params = base.with_time(ft.elapsed);

        canvas.fill(background);
        pass.draw(&mut canvas, &params);

        let path = frame_path(&out.directory, ft.frame_index);
        canvas
            .to_image()
            .save(&path)
            .with_context(|| format!("write {}", path.display()))?;
        log::debug!("frame {} t={:.3}s -> {}", ft.frame_index, ft.elapsed, path.display());
        written += 1;
    }

    Ok(written)
}
