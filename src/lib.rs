//! Wallpaper setter for X.
//!
//! Renders an image or a solid colour into a per-screen pixmap and installs
//! it as the root background. Usable as a library:
//!
//! ```no_run
//! use xpaper::fit::FitMode;
//! use xpaper::render::PaintSource;
//! use xpaper::session::Session;
//! use xpaper::surface::ImageSurface;
//!
//! # fn main() -> Result<(), xpaper::PaperError> {
//! let image = ImageSurface::open("wallpaper.png".as_ref())?;
//! let session = Session::connect(None)?;
//! xpaper::paint_all(&session, &PaintSource::Image { surface: &image, mode: FitMode::Fill })?;
//! # Ok(())
//! # }
//! ```

pub mod color;
pub mod error;
pub mod fit;
pub mod publish;
pub mod render;
pub mod session;
pub mod surface;

use tracing::{error, info};

pub use crate::error::PaperError;
use crate::render::PaintSource;
use crate::session::Session;

/// Paint and publish one screen.
pub fn paint_screen(
    session: &Session,
    index: usize,
    source: &PaintSource<'_>,
) -> Result<(), PaperError> {
    let pixmap = render::paint(session, index, source)?;
    publish::publish(session.conn(), session.screen(index)?, pixmap)?;
    info!("screen {}: wallpaper set", index);
    Ok(())
}

/// Paint every screen in setup order. Each screen publishes and flushes
/// independently; a failure aborts the remaining screens but leaves the ones
/// already published in place.
pub fn paint_all(session: &Session, source: &PaintSource<'_>) -> Result<(), PaperError> {
    for index in 0..session.screens().len() {
        if let Err(err) = paint_screen(session, index, source) {
            error!("screen {}: failed, {} screen(s) already set", index, index);
            return Err(err);
        }
    }
    Ok(())
}
