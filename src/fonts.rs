//! Font loading and text painting.
//!
//! [`TextPainter`] is the seam between layout/wrapping and a concrete
//! font backend: measurement and drawing must come from the same metrics
//! or previewed line breaks drift from exported ones. [`GlyphPainter`]
//! is the production implementation over `ab_glyph`.

use std::path::Path;

use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};

use crate::error::MemeError;
use crate::style::Rgb;

/// Candidate paths for the classic meme typeface. Checked in order when
/// no explicit font path is configured.
const FONT_SEARCH_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/msttcorefonts/Impact.ttf",
    "/usr/share/fonts/truetype/msttcorefonts/impact.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Impact.ttf",
];

/// Measurement and drawing backend for text layers.
///
/// `x_scale` squeezes glyph advances horizontally, reproducing the
/// canvas `fillText(text, x, y, maxWidth)` behavior where an overwide
/// line is compressed into its box instead of overflowing.
pub trait TextPainter {
    /// Advance width of `text` at `px` pixels per em.
    fn measure(&self, text: &str, px: f32) -> f32;

    /// Distance from the top of the line box to the baseline.
    fn ascent(&self, px: f32) -> f32;

    /// Paint `text` with its left edge at `x` and line-box top at `y`.
    fn draw(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        x: f32,
        y: f32,
        px: f32,
        x_scale: f32,
        color: Rgb,
    );
}

/// `ab_glyph`-backed painter over a single loaded typeface.
pub struct GlyphPainter {
    font: FontArc,
}

impl GlyphPainter {
    pub fn new(font: FontArc) -> Self {
        Self { font }
    }

    /// Load a TTF/OTF file from disk.
    pub fn from_path(path: &Path) -> Result<Self, MemeError> {
        let bytes = std::fs::read(path)
            .map_err(|e| MemeError::Font(format!("failed to read {}: {}", path.display(), e)))?;
        let font = FontArc::try_from_vec(bytes)
            .map_err(|e| MemeError::Font(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(Self::new(font))
    }

    /// Load the first available font from the system search list.
    pub fn from_system() -> Result<Self, MemeError> {
        for candidate in FONT_SEARCH_PATHS {
            let path = Path::new(candidate);
            if path.is_file() {
                return Self::from_path(path);
            }
        }
        Err(MemeError::Font(format!(
            "no usable font found; searched {:?} (pass an explicit font path)",
            FONT_SEARCH_PATHS
        )))
    }
}

impl TextPainter for GlyphPainter {
    fn measure(&self, text: &str, px: f32) -> f32 {
        let scaled = self.font.as_scaled(PxScale::from(px));
        let mut width = 0.0f32;
        let mut prev = None;
        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev_id) = prev {
                width += scaled.kern(prev_id, id);
            }
            width += scaled.h_advance(id);
            prev = Some(id);
        }
        width
    }

    fn ascent(&self, px: f32) -> f32 {
        self.font.as_scaled(PxScale::from(px)).ascent()
    }

    fn draw(
        &self,
        canvas: &mut RgbaImage,
        text: &str,
        x: f32,
        y: f32,
        px: f32,
        x_scale: f32,
        color: Rgb,
    ) {
        if text.is_empty() {
            return;
        }

        let scale = PxScale {
            x: px * x_scale,
            y: px,
        };
        let scaled = self.font.as_scaled(scale);
        let baseline = y + scaled.ascent();

        let mut caret = x;
        let mut prev = None;
        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev_id) = prev {
                caret += scaled.kern(prev_id, id);
            }

            let glyph = id.with_scale_and_position(scale, ab_glyph::point(caret, baseline));
            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                let (w, h) = (canvas.width() as i32, canvas.height() as i32);
                outlined.draw(|gx, gy, coverage| {
                    let px_x = gx as i32 + bounds.min.x as i32;
                    let px_y = gy as i32 + bounds.min.y as i32;
                    if px_x >= 0 && px_x < w && px_y >= 0 && px_y < h {
                        blend(canvas, px_x as u32, px_y as u32, color, coverage);
                    }
                });
            }

            caret += scaled.h_advance(id);
            prev = Some(id);
        }
    }
}

/// Alpha-blend `color` over the existing pixel at the given coverage.
/// Output alpha saturates so composited text stays opaque against an
/// opaque background.
fn blend(canvas: &mut RgbaImage, x: u32, y: u32, color: Rgb, coverage: f32) {
    let coverage = coverage.clamp(0.0, 1.0);
    if coverage <= 0.0 {
        return;
    }
    let Rgb(r, g, b) = color;
    let dst = canvas.get_pixel_mut(x, y);
    let mix = |src: u8, dst: u8| -> u8 {
        (src as f32 * coverage + dst as f32 * (1.0 - coverage)).round() as u8
    };
    let alpha = (255.0 * coverage + dst[3] as f32 * (1.0 - coverage)).round() as u8;
    *dst = Rgba([mix(r, dst[0]), mix(g, dst[1]), mix(b, dst[2]), alpha]);
}
