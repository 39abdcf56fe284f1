//! Solid background colours parsed from `#RRGGBB` hex strings.

use crate::error::PaperError;

/// An RGB colour with channels normalized to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Color {
    /// Parse a `#RRGGBB` string; the leading `#` is optional.
    pub fn from_hex(input: &str) -> Result<Self, PaperError> {
        let hex = input.strip_prefix('#').unwrap_or(input);
        if hex.len() != 6 {
            return Err(PaperError::InvalidColor(input.to_string()));
        }
        let channel = |offset: usize| -> Result<f64, PaperError> {
            u8::from_str_radix(&hex[offset..offset + 2], 16)
                .map(|v| f64::from(v) / 255.0)
                .map_err(|_| PaperError::InvalidColor(input.to_string()))
        };
        Ok(Self {
            red: channel(0)?,
            green: channel(2)?,
            blue: channel(4)?,
        })
    }

    /// Channels scaled to the 16-bit range AllocColor expects.
    pub fn to_x11_rgb(self) -> (u16, u16, u16) {
        let scale = |v: f64| (v * f64::from(u16::MAX)).round() as u16;
        (scale(self.red), scale(self.green), scale(self.blue))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_with_hash() {
        let c = Color::from_hex("#336699").unwrap();
        assert!((c.red - 0x33 as f64 / 255.0).abs() < 1e-9);
        assert!((c.green - 0x66 as f64 / 255.0).abs() < 1e-9);
        assert!((c.blue - 0x99 as f64 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_hex_without_hash() {
        assert_eq!(
            Color::from_hex("ffffff").unwrap(),
            Color {
                red: 1.0,
                green: 1.0,
                blue: 1.0
            }
        );
    }

    #[test]
    fn test_reject_bad_input() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#1234567").is_err());
        assert!(Color::from_hex("#33669g").is_err());
        assert!(Color::from_hex("").is_err());
    }

    #[test]
    fn test_x11_scaling_endpoints() {
        let black = Color::from_hex("#000000").unwrap();
        assert_eq!(black.to_x11_rgb(), (0, 0, 0));
        let white = Color::from_hex("#ffffff").unwrap();
        assert_eq!(white.to_x11_rgb(), (0xffff, 0xffff, 0xffff));
    }
}
