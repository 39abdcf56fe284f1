//! Compositor
//!
//! Allocates one pixmap per screen and paints the fitted image (or a flat
//! colour) into it. Image pixels are composited in software: every screen
//! pixel is mapped back through the inverse transform to a source pixel,
//! packed according to the root visual's channel masks, and uploaded with
//! chunked PutImage requests. Nothing here publishes; a failed paint
//! propagates before any root property is touched.

use tracing::debug;
use x11rb::connection::{Connection, RequestConnection};
use x11rb::protocol::xproto::{
    ChangeGCAux, ConnectionExt, CreateGCAux, Depth, Gcontext, ImageFormat, Pixmap, Rectangle,
    Setup, Visualid, Visualtype,
};
use x11rb::rust_connection::RustConnection;

use crate::color::Color;
use crate::error::PaperError;
use crate::fit::{self, FitMode, Transform};
use crate::session::Session;
use crate::surface::ImageSurface;

/// What gets painted. When the caller supplies both an image and a colour,
/// the image wins; this enum makes that choice before the compositor runs.
pub enum PaintSource<'a> {
    Image {
        surface: &'a ImageSurface,
        mode: FitMode,
    },
    Color(Color),
}

/// Find the visual the root window actually uses in the screen's depth
/// table. Painting through any other visual would scramble the channels, so
/// a miss is a hard error for that screen.
pub fn find_root_visual(depths: &[Depth], root_visual: Visualid) -> Option<&Visualtype> {
    depths
        .iter()
        .flat_map(|depth| depth.visuals.iter())
        .find(|visual| visual.visual_id == root_visual)
}

/// How pixels are laid out on the wire for one screen: channel masks from
/// the visual, bits-per-pixel and scanline padding from the server's pixmap
/// format table, byte order from the connection setup.
#[derive(Debug, Clone)]
pub struct PixelLayout {
    red_mask: u32,
    green_mask: u32,
    blue_mask: u32,
    bits_per_pixel: u8,
    scanline_pad: u8,
    lsb_first: bool,
}

impl PixelLayout {
    pub fn new(setup: &Setup, depth: u8, visual: &Visualtype) -> Self {
        let format = setup.pixmap_formats.iter().find(|f| f.depth == depth);
        Self {
            red_mask: visual.red_mask,
            green_mask: visual.green_mask,
            blue_mask: visual.blue_mask,
            bits_per_pixel: format.map(|f| f.bits_per_pixel).unwrap_or(32),
            scanline_pad: format.map(|f| f.scanline_pad).unwrap_or(32),
            lsb_first: setup.image_byte_order == x11rb::protocol::xproto::ImageOrder::LSB_FIRST,
        }
    }

    /// Pack an RGBA sample into the visual's channel layout. Alpha is
    /// dropped; the background has nothing behind it to blend with.
    pub fn pack(&self, rgba: [u8; 4]) -> u32 {
        let channel = |value: u8, mask: u32| -> u32 {
            if mask == 0 {
                return 0;
            }
            let width = mask.count_ones().min(8);
            (u32::from(value) >> (8 - width)) << mask.trailing_zeros()
        };
        channel(rgba[0], self.red_mask)
            | channel(rgba[1], self.green_mask)
            | channel(rgba[2], self.blue_mask)
    }

    pub fn bytes_per_pixel(&self) -> usize {
        usize::from(self.bits_per_pixel) / 8
    }

    /// Row stride in bytes, honouring the server's scanline padding.
    pub fn row_bytes(&self, width: u16) -> usize {
        let bits = usize::from(width) * usize::from(self.bits_per_pixel);
        let pad = usize::from(self.scanline_pad);
        (bits + pad - 1) / pad * (pad / 8)
    }

    fn write_pixel(&self, out: &mut Vec<u8>, value: u32) {
        let n = self.bytes_per_pixel();
        if self.lsb_first {
            out.extend_from_slice(&value.to_le_bytes()[..n]);
        } else {
            out.extend_from_slice(&value.to_be_bytes()[4 - n..]);
        }
    }
}

/// Render the fitted image into a ZPixmap byte buffer sized to the screen.
/// Screen pixels outside the transformed image stay black.
pub fn compose(
    surface: &ImageSurface,
    transform: &Transform,
    width: u16,
    height: u16,
    layout: &PixelLayout,
) -> Vec<u8> {
    let row_bytes = layout.row_bytes(width);
    let mut out = Vec::with_capacity(row_bytes * usize::from(height));
    let (image_w, image_h) = (f64::from(surface.width()), f64::from(surface.height()));

    for y in 0..height {
        for x in 0..width {
            let (sx, sy) = transform.source_of(f64::from(x), f64::from(y));
            let (sx, sy) = (sx.floor(), sy.floor());
            let value = if sx >= 0.0 && sx < image_w && sy >= 0.0 && sy < image_h {
                layout.pack(surface.pixel(sx as u32, sy as u32))
            } else {
                0
            };
            layout.write_pixel(&mut out, value);
        }
        out.resize((usize::from(y) + 1) * row_bytes, 0);
    }
    out
}

/// Server-side graphics context scoped to one paint. Freed on every exit
/// path, including mid-paint failures.
struct GcGuard<'a> {
    conn: &'a RustConnection,
    gc: Gcontext,
}

impl<'a> GcGuard<'a> {
    fn create(conn: &'a RustConnection, drawable: Pixmap) -> Result<Self, PaperError> {
        let gc = conn.generate_id()?;
        conn.create_gc(gc, drawable, &CreateGCAux::new())?;
        Ok(Self { conn, gc })
    }

    fn id(&self) -> Gcontext {
        self.gc
    }
}

impl Drop for GcGuard<'_> {
    fn drop(&mut self) {
        let _ = self.conn.free_gc(self.gc);
    }
}

/// Paint one screen's background into a fresh pixmap and return its handle.
pub fn paint(
    session: &Session,
    screen_index: usize,
    source: &PaintSource<'_>,
) -> Result<Pixmap, PaperError> {
    let screen = session.screen(screen_index)?;
    let conn = session.conn();

    let visual = find_root_visual(&screen.allowed_depths, screen.root_visual).ok_or(
        PaperError::VisualNotFound {
            screen: screen_index,
            visual: screen.root_visual,
        },
    )?;

    let (width, height) = (screen.width_in_pixels, screen.height_in_pixels);
    let pixmap = conn.generate_id()?;
    conn.create_pixmap(screen.root_depth, pixmap, screen.root, width, height)?;
    let gc = GcGuard::create(conn, pixmap)?;

    match source {
        PaintSource::Image { surface, mode } => {
            let transform = fit::compute(
                surface.width(),
                surface.height(),
                u32::from(width),
                u32::from(height),
                *mode,
            );
            debug!(
                "screen {}: {}x{} image onto {}x{} ({:?}): scale ({:.4}, {:.4}) offset ({:.1}, {:.1})",
                screen_index,
                surface.width(),
                surface.height(),
                width,
                height,
                mode,
                transform.sx,
                transform.sy,
                transform.tx,
                transform.ty,
            );
            let layout = PixelLayout::new(conn.setup(), screen.root_depth, visual);
            let rows = compose(surface, &transform, width, height, &layout);
            upload(conn, pixmap, gc.id(), width, height, screen.root_depth, &layout, &rows)?;
        }
        PaintSource::Color(color) => {
            let (r, g, b) = color.to_x11_rgb();
            let pixel = conn
                .alloc_color(screen.default_colormap, r, g, b)?
                .reply()?
                .pixel;
            conn.change_gc(gc.id(), &ChangeGCAux::new().foreground(pixel))?;
            conn.poly_fill_rectangle(
                pixmap,
                gc.id(),
                &[Rectangle {
                    x: 0,
                    y: 0,
                    width,
                    height,
                }],
            )?;
        }
    }

    Ok(pixmap)
}

/// Upload composed rows with PutImage, splitting into chunks that fit the
/// connection's maximum request length.
fn upload(
    conn: &RustConnection,
    pixmap: Pixmap,
    gc: Gcontext,
    width: u16,
    height: u16,
    depth: u8,
    layout: &PixelLayout,
    rows: &[u8],
) -> Result<(), PaperError> {
    let row_bytes = layout.row_bytes(width);
    // PutImage carries a 24-byte header before the pixel data.
    let budget = conn.maximum_request_bytes().saturating_sub(24);
    let rows_per_chunk = (budget / row_bytes.max(1)).max(1);

    let mut y = 0usize;
    while y < usize::from(height) {
        let chunk = rows_per_chunk.min(usize::from(height) - y);
        let data = &rows[y * row_bytes..(y + chunk) * row_bytes];
        conn.put_image(
            ImageFormat::Z_PIXMAP,
            pixmap,
            gc,
            width,
            chunk as u16,
            0,
            y as i16,
            0,
            depth,
            data,
        )?;
        y += chunk;
    }
    Ok(())
}
