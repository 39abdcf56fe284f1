//! Decoded image surfaces.
//!
//! One surface is decoded per invocation and reused for every screen.

use std::path::Path;

use crate::error::PaperError;

/// A decoded image: RGBA8, row-major.
#[derive(Debug)]
pub struct ImageSurface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl ImageSurface {
    /// Decode an image file. Format detection is delegated to the codec.
    pub fn open(path: &Path) -> Result<Self, PaperError> {
        let decoded = image::open(path).map_err(|source| PaperError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self {
            width,
            height,
            data: rgba.into_raw(),
        })
    }

    #[cfg(test)]
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Self {
        assert_eq!(data.len(), width as usize * height as usize * 4);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA bytes of the pixel at (x, y). Caller keeps coordinates in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_lookup_is_row_major() {
        let data = vec![
            1, 2, 3, 4, /* (0,0) */ 5, 6, 7, 8, /* (1,0) */
            9, 10, 11, 12, /* (0,1) */ 13, 14, 15, 16, /* (1,1) */
        ];
        let surface = ImageSurface::from_rgba(2, 2, data);
        assert_eq!(surface.pixel(0, 0), [1, 2, 3, 4]);
        assert_eq!(surface.pixel(1, 0), [5, 6, 7, 8]);
        assert_eq!(surface.pixel(0, 1), [9, 10, 11, 12]);
        assert_eq!(surface.pixel(1, 1), [13, 14, 15, 16]);
    }

    #[test]
    fn test_open_missing_file_is_image_load_error() {
        let err = ImageSurface::open(Path::new("/nonexistent/wallpaper.png")).unwrap_err();
        assert!(matches!(err, PaperError::ImageLoad { .. }));
    }
}
