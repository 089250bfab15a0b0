use palette::{Clamp, FromColor, Hsl, Oklch, Srgb};
use serde::{Deserialize, Serialize};

use crate::RampError;

/// Below this chroma a color is treated as achromatic and carries no hue.
pub const ACHROMATIC_CHROMA: f64 = 1e-4;

/// A color in the OKLCH perceptual model.
///
/// Lightness is on the unit interval (0 = black, 1 = white), chroma is
/// non-negative, hue is degrees in 0..360. The hue is `None` for
/// achromatic colors (chroma ~0), where a hue angle has no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OklchColor {
    pub l: f64,
    pub c: f64,
    pub h: Option<f64>,
}

impl OklchColor {
    pub fn new(l: f64, c: f64, h: Option<f64>) -> Self {
        Self { l, c, h }
    }

    /// Parse any common CSS notation (hex, rgb, hsl, oklch, named colors)
    /// into the OKLCH model.
    pub fn parse(input: &str) -> Result<Self, RampError> {
        let (r, g, b) = parse_srgb(input)?;
        Ok(Self::from_srgb(r, g, b))
    }

    pub fn from_srgb(r: f64, g: f64, b: f64) -> Self {
        let oklch: Oklch<f64> = Oklch::from_color(Srgb::new(r, g, b));
        let h = if oklch.chroma < ACHROMATIC_CHROMA {
            None
        } else {
            Some(oklch.hue.into_positive_degrees())
        };
        Self {
            l: oklch.l,
            c: oklch.chroma.max(0.0),
            h,
        }
    }

    /// CSS value string: `oklch(L C H)` with 6 decimal places for L and C
    /// and 4 for H. The hue term is omitted when the color is achromatic.
    pub fn css_value(&self) -> String {
        match self.h {
            Some(h) => format!("oklch({:.6} {:.6} {:.4})", self.l, self.c, h),
            None => format!("oklch({:.6} {:.6})", self.l, self.c),
        }
    }

    /// Gamut-clamped 8-bit sRGB, for on-screen swatches.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let oklch = Oklch::new(self.l, self.c, self.h.unwrap_or(0.0));
        let srgb: Srgb<f64> = Srgb::from_color(oklch).clamp();
        let srgb = srgb.into_format::<u8>();
        (srgb.red, srgb.green, srgb.blue)
    }
}

/// Display-only cylindrical (HSL) representation of a color.
/// Hue in degrees, saturation and lightness as unit fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HslColor {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl HslColor {
    pub fn from_srgb(r: f64, g: f64, b: f64) -> Self {
        let hsl: Hsl<palette::encoding::Srgb, f64> = Hsl::from_color(Srgb::new(r, g, b));
        Self {
            h: hsl.hue.into_positive_degrees(),
            s: hsl.saturation,
            l: hsl.lightness,
        }
    }

    pub fn css_value(&self) -> String {
        format!(
            "hsl({:.1} {:.1}% {:.1}%)",
            self.h,
            self.s * 100.0,
            self.l * 100.0
        )
    }
}

/// Parse a color string into sRGB components on the unit interval.
pub(crate) fn parse_srgb(input: &str) -> Result<(f64, f64, f64), RampError> {
    let parsed = csscolorparser::parse(input).map_err(|_| RampError::InvalidColor)?;
    let [r, g, b, _] = parsed.to_array();
    Ok((f64::from(r), f64::from(g), f64::from(b)))
}

/// Parse a color string into a `#rrggbb` hex string.
pub(crate) fn parse_hex(input: &str) -> Result<String, RampError> {
    let parsed = csscolorparser::parse(input).map_err(|_| RampError::InvalidColor)?;
    let [r, g, b, _] = parsed.to_rgba8();
    Ok(format!("#{r:02x}{g:02x}{b:02x}"))
}
