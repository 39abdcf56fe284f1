//! xpaper - wallpaper setter for X
//!
//! Decodes an image once, then for each screen computes a fit transform,
//! composites into a fresh pixmap, and installs that pixmap as the root
//! background through the conventional `_XROOTPMAP_ID` / `ESETROOT_PMAP_ID`
//! properties. One synchronous pass per invocation; the X connection is
//! released when the run finishes.

mod cli;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use xpaper::PaperError;
use xpaper::render::PaintSource;
use xpaper::session::Session;
use xpaper::surface::ImageSurface;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "xpaper=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = cli::Args::parse();
    run(&args)?;
    Ok(())
}

fn run(args: &cli::Args) -> Result<(), PaperError> {
    // Decode before touching the display so a bad file aborts with no screen
    // modified.
    let image = ImageSurface::open(&args.image)?;
    info!(
        "loaded {} ({}x{})",
        args.image.display(),
        image.width(),
        image.height()
    );

    let session = Session::connect(args.display.as_deref())?;
    let source = PaintSource::Image {
        surface: &image,
        mode: args.option.into(),
    };

    match args.screen {
        Some(index) => xpaper::paint_screen(&session, index, &source),
        None => xpaper::paint_all(&session, &source),
    }
    // Session drops here, releasing the connection after the last publish.
}
