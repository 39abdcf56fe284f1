//! X11 session wrapper.
//!
//! The session is an explicit value threaded through paint and publish, not a
//! shared global. Dropping it closes the connection, so the connect/paint/
//! publish sequence releases the display exactly once even when a later
//! screen fails.

use tracing::{debug, info};
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{CloseDown, ConnectionExt, Screen};
use x11rb::rust_connection::RustConnection;

use crate::error::PaperError;

pub struct Session {
    conn: RustConnection,
    screens: Vec<Screen>,
}

impl Session {
    /// Connect to the display (`$DISPLAY` when `None`) and snapshot its
    /// screen list.
    pub fn connect(display: Option<&str>) -> Result<Self, PaperError> {
        let (conn, screen_num) = x11rb::connect(display)?;

        // Published pixmaps must outlive this client, otherwise the
        // background vanishes the moment we disconnect.
        conn.set_close_down_mode(CloseDown::RETAIN_PERMANENT)?;

        let screens = conn.setup().roots.clone();
        info!(
            "connected to X server, {} screen(s), default screen {}",
            screens.len(),
            screen_num
        );
        for (i, screen) in screens.iter().enumerate() {
            debug!(
                "screen {}: {}x{} depth {} root 0x{:x}",
                i, screen.width_in_pixels, screen.height_in_pixels, screen.root_depth, screen.root
            );
        }

        Ok(Self { conn, screens })
    }

    pub fn conn(&self) -> &RustConnection {
        &self.conn
    }

    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    /// Screen by index, surfacing out-of-range requests as a typed error.
    pub fn screen(&self, index: usize) -> Result<&Screen, PaperError> {
        self.screens.get(index).ok_or(PaperError::NoSuchScreen {
            index,
            count: self.screens.len(),
        })
    }
}
