//! Root Publisher
//!
//! Installs a painted pixmap as a screen's background: writes the handle
//! into the two conventional root-pixmap properties, points the root
//! window's background at it, clears the root so the change shows
//! immediately, and flushes. The previous pixmap is not freed here; by
//! convention whichever tool owns the old root pixmap cleans it up once the
//! properties are overwritten.

use tracing::debug;
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{
    AtomEnum, ChangeWindowAttributesAux, ConnectionExt, Pixmap, PropMode, Screen,
};
use x11rb::rust_connection::RustConnection;
use x11rb::wrapper::ConnectionExt as _;

use crate::error::PaperError;

/// Root properties recognized by pseudo-transparent apps and other
/// wallpaper tools.
const ROOT_PMAP_ATOM: &[u8] = b"_XROOTPMAP_ID";
const ESETROOT_PMAP_ATOM: &[u8] = b"ESETROOT_PMAP_ID";

/// Publish `pixmap` as the background of `screen` and flush so the change
/// is visible before returning. Atoms are interned per call.
pub fn publish(conn: &RustConnection, screen: &Screen, pixmap: Pixmap) -> Result<(), PaperError> {
    let xrootpmap = conn.intern_atom(false, ROOT_PMAP_ATOM)?.reply()?.atom;
    let esetroot = conn.intern_atom(false, ESETROOT_PMAP_ATOM)?.reply()?.atom;

    conn.change_property32(
        PropMode::REPLACE,
        screen.root,
        xrootpmap,
        AtomEnum::PIXMAP,
        &[pixmap],
    )?;
    conn.change_property32(
        PropMode::REPLACE,
        screen.root,
        esetroot,
        AtomEnum::PIXMAP,
        &[pixmap],
    )?;

    conn.change_window_attributes(
        screen.root,
        &ChangeWindowAttributesAux::new().background_pixmap(pixmap),
    )?;
    conn.clear_area(
        false,
        screen.root,
        0,
        0,
        screen.width_in_pixels,
        screen.height_in_pixels,
    )?;
    conn.flush()?;

    debug!(
        "published pixmap 0x{:x} on root 0x{:x}",
        pixmap, screen.root
    );
    Ok(())
}
