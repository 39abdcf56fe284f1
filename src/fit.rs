//! Fit Calculator
//!
//! Pure coordinate math deciding how a source image of one size maps onto a
//! screen of another. The result is a scale pair plus an image-space crop
//! offset; the compositor consumes it by mapping each screen pixel back to a
//! source pixel.
//!
//! Rounding rule: both axes of the Fill crop offset use plain floating-point
//! division. Flooring happens exactly once, when a screen pixel is mapped to
//! an integer source pixel during sampling.

/// Policy reconciling the image's size with the screen's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitMode {
    /// Uniform scale covering the screen, overflow cropped symmetrically.
    Fill,
    /// Independent per-axis scale; corners map to corners.
    Stretch,
    /// Native size at the origin; uncovered area stays black.
    None,
}

/// Scale plus image-space translation produced by [`compute`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub sx: f64,
    pub sy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        sx: 1.0,
        sy: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// Map a screen pixel back to image-space coordinates.
    ///
    /// Forward mapping is scale first, then the image-space translation:
    /// image point `p` lands at `((p.x - tx) * sx, (p.y - ty) * sy)`.
    pub fn source_of(&self, x: f64, y: f64) -> (f64, f64) {
        (x / self.sx + self.tx, y / self.sy + self.ty)
    }
}

/// Compute the transform fitting an `image_w x image_h` source onto a
/// `screen_w x screen_h` target. Dimensions must be positive; that is the
/// caller's contract, not a runtime failure.
pub fn compute(image_w: u32, image_h: u32, screen_w: u32, screen_h: u32, mode: FitMode) -> Transform {
    let (iw, ih) = (f64::from(image_w), f64::from(image_h));
    let (sw, sh) = (f64::from(screen_w), f64::from(screen_h));

    match mode {
        FitMode::Fill => {
            let width_ratio = sw / iw;
            if width_ratio * ih >= sh {
                // Scaling by width covers the height; crop top/bottom evenly.
                Transform {
                    sx: width_ratio,
                    sy: width_ratio,
                    tx: 0.0,
                    ty: (ih - sh / width_ratio) / 2.0,
                }
            } else {
                // Scale by height and crop left/right evenly.
                let height_ratio = sh / ih;
                Transform {
                    sx: height_ratio,
                    sy: height_ratio,
                    tx: (iw - sw / height_ratio) / 2.0,
                    ty: 0.0,
                }
            }
        }
        FitMode::Stretch => Transform {
            sx: sw / iw,
            sy: sh / ih,
            tx: 0.0,
            ty: 0.0,
        },
        FitMode::None => Transform::IDENTITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_fill_width_dominant() {
        // 800x600 onto 1920x1080: width ratio 2.4 covers the height.
        let t = compute(800, 600, 1920, 1080, FitMode::Fill);
        assert!((t.sx - 2.4).abs() < EPS);
        assert!((t.sy - 2.4).abs() < EPS);
        assert!((t.tx - 0.0).abs() < EPS);
        // (600 - 1080 / 2.4) / 2 = 75 image-space rows cropped per side.
        assert!((t.ty - 75.0).abs() < EPS);
    }

    #[test]
    fn test_fill_height_dominant() {
        // Tall image on a wide screen: height ratio wins, crop left/right.
        let t = compute(1000, 2000, 1920, 1080, FitMode::Fill);
        let height_ratio = 1080.0 / 2000.0;
        assert!((t.sx - height_ratio).abs() < EPS);
        assert!((t.sy - height_ratio).abs() < EPS);
        assert!((t.ty - 0.0).abs() < EPS);
        let expected_tx = (1000.0 - 1920.0 / height_ratio) / 2.0;
        assert!((t.tx - expected_tx).abs() < EPS);
    }

    #[test]
    fn test_fill_is_uniform_and_covers() {
        for &(iw, ih, sw, sh) in &[
            (800u32, 600u32, 1920u32, 1080u32),
            (3840, 2160, 1024, 768),
            (500, 500, 1366, 768),
            (1920, 1080, 1920, 1080),
        ] {
            let t = compute(iw, ih, sw, sh, FitMode::Fill);
            assert!((t.sx - t.sy).abs() < EPS, "fill scale must be uniform");
            // Scaled image covers the screen on both axes.
            assert!(t.sx * f64::from(iw) >= f64::from(sw) - 1e-6);
            assert!(t.sy * f64::from(ih) >= f64::from(sh) - 1e-6);
            // Crop offsets are never negative.
            assert!(t.tx >= -EPS && t.ty >= -EPS);
            // At most one axis is cropped.
            assert!(t.tx.abs() < EPS || t.ty.abs() < EPS);
        }
    }

    #[test]
    fn test_fill_crop_is_symmetric() {
        let t = compute(800, 600, 1920, 1080, FitMode::Fill);
        // Rows below the visible window equal rows above it.
        let visible = 1080.0 / t.sy;
        let bottom = 600.0 - (t.ty + visible);
        assert!((bottom - t.ty).abs() < EPS);
    }

    #[test]
    fn test_stretch_maps_corners_exactly() {
        let t = compute(1920, 1080, 1024, 768, FitMode::Stretch);
        assert!((t.sx - 1024.0 / 1920.0).abs() < EPS);
        assert!((t.sy - 768.0 / 1080.0).abs() < EPS);
        assert_eq!((t.tx, t.ty), (0.0, 0.0));
        assert!((t.sx * 1920.0 - 1024.0).abs() < EPS);
        assert!((t.sy * 1080.0 - 768.0).abs() < EPS);
    }

    #[test]
    fn test_none_is_identity() {
        let t = compute(640, 480, 1920, 1080, FitMode::None);
        assert_eq!(t, Transform::IDENTITY);
    }

    #[test]
    fn test_inverse_mapping_round_trips() {
        let t = compute(800, 600, 1920, 1080, FitMode::Fill);
        // Screen origin maps to the top of the visible crop.
        let (x, y) = t.source_of(0.0, 0.0);
        assert!((x - 0.0).abs() < EPS);
        assert!((y - 75.0).abs() < EPS);
        // Screen bottom edge maps to the bottom of the visible crop.
        let (_, y) = t.source_of(0.0, 1080.0);
        assert!((y - 525.0).abs() < EPS);
    }

    #[test]
    fn test_compute_is_deterministic() {
        let a = compute(1234, 567, 2560, 1440, FitMode::Fill);
        let b = compute(1234, 567, 2560, 1440, FitMode::Fill);
        assert_eq!(a, b);
    }
}
