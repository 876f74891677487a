//! Drawing constants for the icon.
//!
//! The built-in look lives in an embedded JSON table; a style file with the
//! same layout can replace it. Colors are CSS color strings.

use crate::error::IconError;
use crate::raster;
use image::Rgb;
use serde::Deserialize;
use std::{path::Path, str::FromStr};
use tracing::warn;

const DEFAULT_STYLE_JSON: &str = r##"
{
  "size": 1024,
  "background": { "top": "#007AFF", "bottom": "#5856D6" },
  "lens": {
    "fill": "#FFFFFF",
    "outline": "#F0F0F0",
    "aperture": "#007AFF",
    "aperture_width": 20
  },
  "viewfinder": { "color": "#FFFFFF", "length": 60, "width": 15, "margin": 80 }
}
"##;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StyleEntry {
    size: u32,
    background: BackgroundEntry,
    lens: LensEntry,
    viewfinder: ViewfinderEntry,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BackgroundEntry {
    top: String,
    bottom: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LensEntry {
    fill: String,
    outline: String,
    aperture: String,
    aperture_width: u32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ViewfinderEntry {
    color: String,
    length: u32,
    width: u32,
    margin: u32,
}

/// Resolved drawing constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconStyle {
    /// Side length of the square icon in pixels.
    pub size: u32,
    pub gradient_top: Rgb<u8>,
    pub gradient_bottom: Rgb<u8>,
    pub lens_fill: Rgb<u8>,
    pub lens_outline: Rgb<u8>,
    pub aperture_color: Rgb<u8>,
    pub aperture_width: u32,
    pub corner_color: Rgb<u8>,
    /// Arm length of each viewfinder bracket.
    pub corner_length: u32,
    pub corner_width: u32,
    /// Gap between the lens' outer circle and the bracket elbows.
    pub corner_margin: u32,
}

impl IconStyle {
    pub fn from_json(json: &str) -> Result<Self, IconError> {
        let entry: StyleEntry = serde_json::from_str(json)?;

        Ok(Self {
            size: raster::check_size(entry.size)?,
            gradient_top: parse_color(&entry.background.top)?,
            gradient_bottom: parse_color(&entry.background.bottom)?,
            lens_fill: parse_color(&entry.lens.fill)?,
            lens_outline: parse_color(&entry.lens.outline)?,
            aperture_color: parse_color(&entry.lens.aperture)?,
            aperture_width: entry.lens.aperture_width,
            corner_color: parse_color(&entry.viewfinder.color)?,
            corner_length: entry.viewfinder.length,
            corner_width: entry.viewfinder.width,
            corner_margin: entry.viewfinder.margin,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, IconError> {
        let json = std::fs::read_to_string(path).map_err(|source| IconError::StyleRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

impl Default for IconStyle {
    fn default() -> Self {
        Self::from_json(DEFAULT_STYLE_JSON).unwrap()
    }
}

/// Parse a CSS color into an opaque RGB pixel.
///
/// The canvas has no alpha channel, so any transparency in the input is
/// dropped here rather than silently ignored by the drawing code.
pub fn parse_color(color: &str) -> Result<Rgb<u8>, IconError> {
    let srgb = css_color::Srgb::from_str(color)
        .map_err(|_| IconError::InvalidColor(color.to_string()))?;

    if srgb.alpha < 1.0 {
        warn!(color, alpha = srgb.alpha, "alpha is discarded on the RGB canvas");
    }

    Ok(Rgb([
        unit_to_channel(srgb.red),
        unit_to_channel(srgb.green),
        unit_to_channel(srgb.blue),
    ]))
}

fn unit_to_channel(value: f32) -> u8 {
    (value * 255.).round().clamp(0., 255.) as u8
}
