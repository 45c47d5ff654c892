//! Color conversion from the app-level color picker to image pixels.
//!
//! The status bar reports the transparent color as an app-level [`Color`].
//! A floating selection needs it in the document's native encoding, which is
//! what [`color_for_image`] produces.

use crate::constants::{LUMA_WEIGHTS, MASK_INDEX};
use image::{LumaA, Rgba};
use serde::{Deserialize, Serialize};

/// Native pixel encoding of a sprite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PixelFormat {
    #[default]
    Rgb,
    Grayscale,
    Indexed,
}

/// A color as picked in the UI, independent of any image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// The transparent "mask" color
    #[default]
    Mask,
    Rgb { r: u8, g: u8, b: u8 },
    Gray(u8),
    /// An entry of the sprite palette
    Index(u8),
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// RGB components, resolving palette entries through `palette`.
    fn components(&self, palette: &Palette) -> (u8, u8, u8) {
        match *self {
            Color::Mask => (0, 0, 0),
            Color::Rgb { r, g, b } => (r, g, b),
            Color::Gray(v) => (v, v, v),
            Color::Index(i) => {
                let Rgba([r, g, b, _]) = palette.entry(i);
                (r, g, b)
            }
        }
    }
}

/// A color encoded for a specific [`PixelFormat`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaskColor {
    Rgba(Rgba<u8>),
    GrayA(LumaA<u8>),
    Index(u8),
}

impl MaskColor {
    /// Packed pixel value as stored in image memory.
    pub fn to_raw(&self) -> u32 {
        match *self {
            MaskColor::Rgba(Rgba([r, g, b, a])) => {
                r as u32 | (g as u32) << 8 | (b as u32) << 16 | (a as u32) << 24
            }
            MaskColor::GrayA(LumaA([v, a])) => v as u32 | (a as u32) << 8,
            MaskColor::Index(i) => i as u32,
        }
    }
}

/// Sprite palette used by indexed images.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<Rgba<u8>>,
}

impl Palette {
    pub fn new(entries: Vec<Rgba<u8>>) -> Self {
        Self { entries }
    }

    /// Palette with one opaque entry per RGB triple.
    pub fn from_rgb(colors: &[(u8, u8, u8)]) -> Self {
        Self::new(colors.iter().map(|&(r, g, b)| Rgba([r, g, b, 255])).collect())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry `index`, or transparent black when out of range.
    pub fn entry(&self, index: u8) -> Rgba<u8> {
        self.entries
            .get(index as usize)
            .copied()
            .unwrap_or(Rgba([0, 0, 0, 0]))
    }

    /// Closest entry to the given RGB color.
    ///
    /// Entry 0 is reserved for the mask and only returned when it is the
    /// palette's sole entry.
    pub fn find_best_fit(&self, r: u8, g: u8, b: u8) -> u8 {
        let first = if self.entries.len() > 1 { 1 } else { 0 };
        let distance = |c: &Rgba<u8>| {
            let dr = c.0[0] as i32 - r as i32;
            let dg = c.0[1] as i32 - g as i32;
            let db = c.0[2] as i32 - b as i32;
            dr * dr + dg * dg + db * db
        };

        self.entries
            .iter()
            .enumerate()
            .skip(first)
            .take(256 - first)
            .min_by_key(|(_, c)| distance(c))
            .map(|(i, _)| i as u8)
            .unwrap_or(MASK_INDEX)
    }
}

/// Luma of an RGB color, weighted like the editor's grayscale conversion.
fn luma(r: u8, g: u8, b: u8) -> u8 {
    let (wr, wg, wb) = LUMA_WEIGHTS;
    ((r as u32 * wr + g as u32 * wg + b as u32 * wb) / 100) as u8
}

/// Convert `color` into a pixel value for an image of `format`.
pub fn color_for_image(color: Color, format: PixelFormat, palette: &Palette) -> MaskColor {
    match format {
        PixelFormat::Rgb => match color {
            Color::Mask => MaskColor::Rgba(Rgba([0, 0, 0, 0])),
            other => {
                let (r, g, b) = other.components(palette);
                MaskColor::Rgba(Rgba([r, g, b, 255]))
            }
        },
        PixelFormat::Grayscale => match color {
            Color::Mask => MaskColor::GrayA(LumaA([0, 0])),
            Color::Gray(v) => MaskColor::GrayA(LumaA([v, 255])),
            other => {
                let (r, g, b) = other.components(palette);
                MaskColor::GrayA(LumaA([luma(r, g, b), 255]))
            }
        },
        PixelFormat::Indexed => match color {
            Color::Mask => MaskColor::Index(MASK_INDEX),
            Color::Index(i) => MaskColor::Index(i),
            other => {
                let (r, g, b) = other.components(palette);
                MaskColor::Index(palette.find_best_fit(r, g, b))
            }
        },
    }
}
