use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::RampError;
use crate::color::{self, HslColor, OklchColor};

/// Smallest step count the front ends offer.
pub const MIN_STEPS: usize = 1;
/// Largest step count the front ends offer.
pub const MAX_STEPS: usize = 5;

/// One generated swatch: the color plus a rounded lightness percent
/// used only for labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RampEntry {
    pub color: OklchColor,
    pub lightness: u8,
}

impl RampEntry {
    fn new(color: OklchColor) -> Self {
        let lightness = (color.l * 100.0).round() as u8;
        Self { color, lightness }
    }
}

/// The parsed base color with its display representations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseColor {
    pub oklch: OklchColor,
    pub hex: String,
    pub hsl: HslColor,
}

impl BaseColor {
    pub fn parse(input: &str) -> Result<Self, RampError> {
        let (r, g, b) = color::parse_srgb(input)?;
        Ok(Self {
            oklch: OklchColor::from_srgb(r, g, b),
            hex: color::parse_hex(input)?,
            hsl: HslColor::from_srgb(r, g, b),
        })
    }
}

/// A full tint/shade ramp: the base plus N tints and N shades.
///
/// `tints[0]` is closest to the base, lightness increasing with index.
/// `shades` reads dark to light: `shades[0]` is the darkest,
/// `shades[N-1]` is closest to the base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ramp {
    pub base: BaseColor,
    pub tints: Vec<RampEntry>,
    pub shades: Vec<RampEntry>,
}

impl Ramp {
    /// Generate a ramp from a base color in any common CSS notation.
    ///
    /// Every entry interpolates lightness toward white (tints) or black
    /// (shades) with chroma decaying at the same rate, so near-extreme
    /// entries never come out oversaturated. The interpolation factor
    /// `(i+1)/(steps+1)` stays strictly inside (0, 1): no entry ever
    /// equals pure white, pure black, or the base itself.
    pub fn generate(base_color: &str, steps: usize) -> Result<Self, RampError> {
        let base = BaseColor::parse(base_color)?;
        let OklchColor { l, c, h } = base.oklch;

        let scale = |toward_white: bool| -> Vec<RampEntry> {
            (0..steps)
                .map(|i| {
                    let factor = (i + 1) as f64 / (steps + 1) as f64;
                    let new_l = if toward_white {
                        l + (1.0 - l) * factor
                    } else {
                        l * (1.0 - factor)
                    };
                    RampEntry::new(OklchColor::new(new_l, c * (1.0 - factor), h))
                })
                .collect()
        };

        let tints = scale(true);
        let mut shades = scale(false);
        // Generated light-to-dark; flip so the row reads darkest first.
        shades.reverse();

        Ok(Self {
            base,
            tints,
            shades,
        })
    }

    pub fn steps(&self) -> usize {
        self.tints.len()
    }

    /// Serialize the ramp to pretty JSON.
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("serialize ramp to json")
    }

    /// Write the ramp as JSON to a file.
    pub fn save_json_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let json = self.to_json()?;
        fs::write(path.as_ref(), json).context("write ramp json file")?;
        Ok(())
    }
}
