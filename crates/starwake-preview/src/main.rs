mod cli;
mod config;
mod sequence;

use anyhow::Result;
use clap::Parser;
use starwake_engine::logging::{init_logging, LoggingConfig};

use crate::cli::Args;
use crate::config::PreviewConfig;

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.log.clone().map(LoggingConfig::with_filter).unwrap_or_default());

    let mut config = match &args.config {
        Some(path) => {
            let (config, err) = PreviewConfig::load_or_default(path);
            if let Some(e) = err {
                log::warn!("{e:#}; using defaults");
            }
            config
        }
        None => PreviewConfig::default(),
    };
    args.apply(&mut config);

    for warning in config.validate() {
        log::warn!("config: {warning}");
    }

    log::info!(
        "rendering {} frames at {}x{} into {}",
        config.output.frames,
        config.output.width,
        config.output.height,
        config.output.directory.display()
    );
    let written = sequence::render_sequence(&config)?;
    log::info!("wrote {written} frames");

    Ok(())
}
