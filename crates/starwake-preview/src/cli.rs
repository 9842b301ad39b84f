use std::path::PathBuf;

use clap::Parser;

use crate::config::PreviewConfig;

/// Render the pulsing shield effect to a PNG sequence.
#[derive(Debug, Parser)]
#[command(name = "starwake-preview", version)]
pub struct Args {
    /// RON config file; defaults are used when omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output directory for the frames.
    #[arg(long)]
    pub out: Option<PathBuf>,

    #[arg(long)]
    pub frames: Option<u32>,

    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long)]
    pub height: Option<u32>,

    /// Reactor charge in [0, 1]; tints the shield from red (empty) to green (full).
    #[arg(long)]
    pub charge: Option<f32>,

    /// Raster threads (0 = all cores).
    #[arg(long)]
    pub workers: Option<usize>,

    /// Log filter, e.g. "debug" or "starwake_engine=trace".
    #[arg(long)]
    pub log: Option<String>,
}

impl Args {
    /// Overrides config values with the flags that were given.
    pub fn apply(&self, cfg: &mut PreviewConfig) {
        if let Some(out) = &self.out {
            cfg.output.directory = out.clone();
        }
        if let Some(frames) = self.frames {
            cfg.output.frames = frames;
        }
        if let Some(width) = self.width {
            cfg.output.width = width;
        }
        if let Some(height) = self.height {
            cfg.output.height = height;
        }
        if let Some(charge) = self.charge {
            cfg.charge = Some(charge);
        }
        if let Some(workers) = self.workers {
            cfg.workers = workers;
        }
    }
}
