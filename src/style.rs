//! Text layer styling: colors, alignment, font sizing and the classic
//! meme defaults (white Impact-style fill with a black outline).

use serde::{Deserialize, Serialize};

/// Ratio of canvas width used for derived font sizes in the
/// generated/preview path.
pub const FONT_SCALE: f32 = 0.05;

/// Floor for derived font sizes, in pixels.
pub const MIN_FONT_PX: f32 = 20.0;

/// Stroke width as a fraction of the font size.
pub const STROKE_RATIO: f32 = 0.1;

/// Line height multiplier. Shared by the preview and export paths so a
/// downloaded meme matches what was previewed.
pub const LINE_HEIGHT: f32 = 1.2;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Default color of the text.
pub const DEFAULT_FILL: Rgb = Rgb(0xff, 0xff, 0xff);

/// Default outline color.
pub const DEFAULT_STROKE: Rgb = Rgb(0x00, 0x00, 0x00);

/// Horizontal alignment of text within its layer box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// How a layer's font size is resolved against the target canvas.
///
/// The interactive editor supplies a user-chosen absolute pixel value;
/// the generated/preview path derives the size from canvas width. Both
/// call sites share this one resolution rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSizeMode {
    /// Use the given pixel size as-is.
    Absolute(f32),
    /// `max(MIN_FONT_PX, canvas_width * ratio)`. Font scales with overall
    /// image width, not layer height, so multi-layer memes stay visually
    /// consistent.
    ScaledToCanvas(f32),
}

impl Default for FontSizeMode {
    fn default() -> Self {
        FontSizeMode::ScaledToCanvas(FONT_SCALE)
    }
}

impl FontSizeMode {
    /// Resolve to a concrete pixel size for the given canvas width.
    pub fn resolve(&self, canvas_width: u32) -> f32 {
        match *self {
            FontSizeMode::Absolute(px) => px,
            FontSizeMode::ScaledToCanvas(ratio) => {
                MIN_FONT_PX.max(canvas_width as f32 * ratio)
            }
        }
    }
}

/// Optional drop shadow behind a text layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub color: Rgb,
    /// Blur radius in pixels. Zero disables the shadow.
    pub blur: f32,
}

/// Visual style for one text layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerStyle {
    pub fill: Rgb,
    pub stroke: Rgb,
    /// Stroke width as a fraction of the resolved font size.
    pub stroke_ratio: f32,
    pub align: HAlign,
    /// Rotation in degrees, pivoting around the layer's own bounding-box
    /// center.
    pub rotation: f32,
    pub shadow: Option<Shadow>,
    pub font_size: FontSizeMode,
}

impl Default for LayerStyle {
    fn default() -> Self {
        Self {
            fill: DEFAULT_FILL,
            stroke: DEFAULT_STROKE,
            stroke_ratio: STROKE_RATIO,
            align: HAlign::Center,
            rotation: 0.0,
            shadow: None,
            font_size: FontSizeMode::default(),
        }
    }
}

/// Corner overlay identifying the free generation path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Watermark {
    pub text: String,
}

impl Default for Watermark {
    fn default() -> Self {
        Self {
            text: "fancymeme.com".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_font_size_has_floor() {
        let mode = FontSizeMode::ScaledToCanvas(FONT_SCALE);
        // 100px canvas would derive 5px; the floor wins
        assert_eq!(mode.resolve(100), MIN_FONT_PX);
        // 1080px canvas derives 54px
        assert_eq!(mode.resolve(1080), 54.0);
    }

    #[test]
    fn absolute_font_size_passes_through() {
        assert_eq!(FontSizeMode::Absolute(32.0).resolve(1080), 32.0);
    }

    #[test]
    fn default_style_is_classic_meme() {
        let style = LayerStyle::default();
        assert_eq!(style.fill, Rgb(255, 255, 255));
        assert_eq!(style.stroke, Rgb(0, 0, 0));
        assert_eq!(style.align, HAlign::Center);
        assert_eq!(style.rotation, 0.0);
        assert!(style.shadow.is_none());
    }
}
