//! Error types for the paint pipeline.
//!
//! Each failure the CLI can report maps to its own variant so the exit
//! message tells the user whether the image, the connection, or the
//! screen's visual table was at fault.

use std::path::PathBuf;

use thiserror::Error;
use x11rb::protocol::xproto::Visualid;

#[derive(Debug, Error)]
pub enum PaperError {
    #[error("failed to load image {path}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to connect to X server")]
    Connect(#[from] x11rb::errors::ConnectError),

    #[error("X11 connection failed")]
    Connection(#[from] x11rb::errors::ConnectionError),

    #[error("X11 request failed")]
    Reply(#[from] x11rb::errors::ReplyError),

    #[error("X11 id allocation failed")]
    Id(#[from] x11rb::errors::ReplyOrIdError),

    #[error("root visual 0x{visual:x} not found in the visual table of screen {screen}")]
    VisualNotFound { screen: usize, visual: Visualid },

    #[error("no screen {index} (display has {count})")]
    NoSuchScreen { index: usize, count: usize },

    #[error("invalid colour {0:?}: expected #RRGGBB")]
    InvalidColor(String),
}
