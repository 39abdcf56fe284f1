//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use xpaper::fit::FitMode;

#[derive(Debug, Parser)]
#[command(name = "xpaper", about = "Wallpaper setter for X", version)]
pub struct Args {
    /// Path to the image to set as wallpaper.
    pub image: PathBuf,

    /// How the image is fitted to each screen.
    #[arg(short = 'o', long = "option", value_enum, default_value_t = Fit::Fill)]
    pub option: Fit,

    /// Paint a single screen by index instead of all screens.
    #[arg(long)]
    pub screen: Option<usize>,

    /// X display to connect to (defaults to $DISPLAY).
    #[arg(long)]
    pub display: Option<String>,
}

/// Fit modes exposed on the command line. Native-size painting exists
/// internally but is deliberately not offered here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Fit {
    Fill,
    Stretch,
}

impl From<Fit> for FitMode {
    fn from(fit: Fit) -> Self {
        match fit {
            Fit::Fill => FitMode::Fill,
            Fit::Stretch => FitMode::Stretch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_is_the_default() {
        let args = Args::parse_from(["xpaper", "bg.png"]);
        assert_eq!(args.option, Fit::Fill);
        assert_eq!(args.image, PathBuf::from("bg.png"));
        assert!(args.screen.is_none());
    }

    #[test]
    fn test_stretch_and_screen_flags() {
        let args = Args::parse_from(["xpaper", "bg.png", "-o", "stretch", "--screen", "1"]);
        assert_eq!(args.option, Fit::Stretch);
        assert_eq!(args.screen, Some(1));
    }

    #[test]
    fn test_image_is_required() {
        assert!(Args::try_parse_from(["xpaper"]).is_err());
    }

    #[test]
    fn test_native_mode_is_not_exposed() {
        assert!(Args::try_parse_from(["xpaper", "bg.png", "-o", "none"]).is_err());
    }
}
