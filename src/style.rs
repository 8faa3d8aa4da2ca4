//! Color handling for page templates

use crate::error::{Result, TemplateError};

/// RGBA color representation with components in 0.0-1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new opaque RGB color (values should be 0.0-1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Create a new RGBA color (values should be 0.0-1.0)
    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Create an opaque color from 0-255 byte components
    pub fn rgb_bytes(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Black color
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// White color
    pub fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Gray color
    pub fn gray(level: f32) -> Self {
        let l = level.clamp(0.0, 1.0);
        Self::rgb(l, l, l)
    }

    /// Light gray
    pub fn light_gray() -> Self {
        Self::rgb_bytes(210, 210, 210)
    }

    /// Return the same color with a different alpha
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha.clamp(0.0, 1.0);
        self
    }

    /// Whether the color needs no transparency handling
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// Parse a hex color string: "#rgb", "#rrggbb" or "#rrggbbaa"
    ///
    /// The leading '#' is optional.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        // from_str_radix would accept a leading '+', so gate on digits only
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(TemplateError::ConfigError(format!(
                "invalid hex color: {hex:?}"
            )));
        }
        let byte = |s: &str| {
            u8::from_str_radix(s, 16)
                .map_err(|_| TemplateError::ConfigError(format!("invalid hex color: {hex:?}")))
        };

        match digits.len() {
            3 => {
                // Short form: each digit doubles ("f80" -> "ff8800")
                let r = byte(&digits[0..1])? * 17;
                let g = byte(&digits[1..2])? * 17;
                let b = byte(&digits[2..3])? * 17;
                Ok(Self::rgb_bytes(r, g, b))
            }
            6 => Ok(Self::rgb_bytes(
                byte(&digits[0..2])?,
                byte(&digits[2..4])?,
                byte(&digits[4..6])?,
            )),
            8 => {
                let color = Self::rgb_bytes(
                    byte(&digits[0..2])?,
                    byte(&digits[2..4])?,
                    byte(&digits[4..6])?,
                );
                Ok(color.with_alpha(byte(&digits[6..8])? as f32 / 255.0))
            }
            _ => Err(TemplateError::ConfigError(format!(
                "invalid hex color: {hex:?}"
            ))),
        }
    }

    /// Format as a hex string, including alpha only when not opaque
    pub fn to_hex(&self) -> String {
        let to_byte = |v: f32| (v * 255.0).round() as u8;
        if self.is_opaque() {
            format!(
                "#{:02x}{:02x}{:02x}",
                to_byte(self.r),
                to_byte(self.g),
                to_byte(self.b)
            )
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                to_byte(self.r),
                to_byte(self.g),
                to_byte(self.b),
                to_byte(self.a)
            )
        }
    }

    /// Create an opaque color from hue (degrees), saturation and lightness (0.0-1.0)
    pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let h = hue.rem_euclid(360.0);
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h {
            h if h < 60.0 => (c, x, 0.0),
            h if h < 120.0 => (x, c, 0.0),
            h if h < 180.0 => (0.0, c, x),
            h if h < 240.0 => (0.0, x, c),
            h if h < 300.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Self::rgb(r + m, g + m, b + m)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_clamping() {
        let c = Color::rgba(1.5, -0.2, 0.5, 2.0);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert_eq!(c.b, 0.5);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_hex_parsing() {
        let c = Color::from_hex("#d2d2d2").unwrap();
        assert!((c.r - 210.0 / 255.0).abs() < 1e-6);
        assert!(c.is_opaque());

        let short = Color::from_hex("fff").unwrap();
        assert_eq!(short, Color::white());

        let translucent = Color::from_hex("#00000080").unwrap();
        assert!((translucent.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_hex_rejects_garbage() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("zzzzzz").is_err());
        assert!(Color::from_hex("ééé").is_err());
        assert!(Color::from_hex("+12345").is_err());
        assert!(Color::from_hex("#+1+2+3").is_err());
    }

    #[test]
    fn test_hex_round_trip() {
        assert_eq!(Color::from_hex("#1a2b3c").unwrap().to_hex(), "#1a2b3c");
        assert_eq!(
            Color::from_hex("#1a2b3c80").unwrap().to_hex(),
            "#1a2b3c80"
        );
    }

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(Color::hsl(0.0, 1.0, 0.5), Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(Color::hsl(120.0, 1.0, 0.5), Color::rgb(0.0, 1.0, 0.0));
        assert_eq!(Color::hsl(240.0, 1.0, 0.5), Color::rgb(0.0, 0.0, 1.0));
        assert_eq!(Color::hsl(0.0, 0.0, 1.0), Color::white());
    }
}
