mod bounce;
mod cli;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use pane_engine::logging::{init_logging, LoggingConfig};
use pane_engine::{load_image, Display, Font};

use bounce::Bounce;
use cli::Cli;

const SYSTEM_FONTS: [&str; 5] = [
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        env_filter: cli.log.clone(),
        ..LoggingConfig::default()
    });

    let image = cli
        .image
        .as_deref()
        .map(load_image)
        .transpose()
        .context("failed to load --image")?;

    let font = match cli.font.as_deref() {
        Some(path) => Some(load_font(path)?),
        None => system_font(),
    };
    if font.is_none() {
        log::warn!("no usable font found; overlay text disabled");
    }

    let display = Display::new(cli.display_config(), Bounce::new(image, font))
        .context("failed to create display")?;
    log::info!(
        "running {:?} at {} fps ({:?} per tick)",
        display.config().mode,
        display.fps(),
        pane_engine::time::tick_interval(display.fps())
    );

    display.run().context("display loop failed")
}

fn load_font(path: &Path) -> Result<Font> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to read font {}", path.display()))?;
    Font::from_bytes(&bytes).with_context(|| format!("failed to parse font {}", path.display()))
}

fn system_font() -> Option<Font> {
    SYSTEM_FONTS
        .iter()
        .find_map(|p| load_font(Path::new(p)).ok())
}
