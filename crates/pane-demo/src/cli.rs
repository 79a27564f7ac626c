use std::path::PathBuf;

use clap::Parser;
use pane_engine::{DisplayConfig, WindowConfig};

#[derive(Parser, Debug, Clone)]
#[command(name = "pane-demo")]
#[command(about = "Bouncing boxes on a pane display", long_about = None)]
pub struct Cli {
    /// Window width in pixels (ignored with --fullscreen)
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Window height in pixels (ignored with --fullscreen)
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Borderless window covering the primary monitor
    #[arg(long, default_value = "false")]
    pub fullscreen: bool,

    /// Ticks per second
    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    #[arg(long, default_value = "pane demo")]
    pub title: String,

    /// Image drawn in the top-left corner
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// TrueType/OpenType font for the overlay text (defaults to a system font)
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Log filter in env_logger syntax, e.g. "pane_engine=debug"
    #[arg(long)]
    pub log: Option<String>,
}

impl Cli {
    pub fn display_config(&self) -> DisplayConfig {
        let size = (!self.fullscreen).then_some((self.width, self.height));
        let window = WindowConfig::from_parts(
            self.title.clone(),
            size.map(|(w, _)| w),
            size.map(|(_, h)| h),
        );
        DisplayConfig::new(window, self.fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pane_engine::WindowMode;

    #[test]
    fn fullscreen_flag_overrides_size() {
        let cli = Cli::parse_from(["pane-demo", "--fullscreen", "--width", "10"]);
        assert_eq!(cli.display_config().window.mode, WindowMode::FullscreenBorderless);
    }

    #[test]
    fn size_and_fps_reach_the_config() {
        let cli = Cli::parse_from(["pane-demo", "--width", "320", "--height", "200", "--fps", "30"]);
        let cfg = cli.display_config();
        assert_eq!(cfg.fps, 30);
        assert_eq!(cfg.window.mode, WindowMode::Windowed { width: 320, height: 200 });
    }
}
