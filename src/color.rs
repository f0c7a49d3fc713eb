use palette::{FromColor, Hsl, Srgb};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ExtractError, Result};

/// Core color type used throughout the pipeline.
/// Wraps sRGB u8 components and provides the derived views tokens expose.
/// Orders by channel, which is the same as ordering by hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees `[0, 360)`, saturation and lightness in percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HslTriple {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

/// Result of a lenient hex parse. `parsed` is false when the input did not
/// match the 6-digit pattern and `color` was coerced to black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LossyHex {
    pub color: Color,
    pub parsed: bool,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string like `#ff8800`, `#FF8800` or `ff8800`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ExtractError::MalformedColor(hex.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ExtractError::MalformedColor(hex.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Like [`Color::from_hex`], but malformed input yields black instead of
    /// an error. The returned flag tells the two cases apart.
    pub fn from_hex_lossy(hex: &str) -> LossyHex {
        match Self::from_hex(hex) {
            Ok(color) => LossyHex {
                color,
                parsed: true,
            },
            Err(_) => {
                warn!(input = hex, "malformed hex color coerced to black");
                LossyHex {
                    color: Self::BLACK,
                    parsed: false,
                }
            }
        }
    }

    /// Serialize to lowercase hex `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to `palette::Srgb<u8>`.
    pub fn to_srgb_u8(self) -> Srgb<u8> {
        Srgb::new(self.r, self.g, self.b)
    }

    /// HSL with each component rounded to the nearest integer.
    pub fn to_hsl(self) -> HslTriple {
        let srgb: Srgb<f32> = self.to_srgb_u8().into_format();
        let hsl: Hsl = Hsl::from_color(srgb);
        // 359.5° and up rounds onto 360, which is the same hue as 0.
        let h = (hsl.hue.into_positive_degrees().round() as u16) % 360;
        HslTriple {
            h,
            s: (hsl.saturation.clamp(0.0, 1.0) * 100.0).round() as u8,
            l: (hsl.lightness.clamp(0.0, 1.0) * 100.0).round() as u8,
        }
    }

    /// Perceptual luma estimate in `[0, 255]`.
    pub fn brightness(self) -> f32 {
        (299.0 * self.r as f32 + 587.0 * self.g as f32 + 114.0 * self.b as f32) / 1000.0
    }

    /// True when the channel spread is under 30.
    pub fn is_gray(self) -> bool {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        max - min < 30
    }

}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
