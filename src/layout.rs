//! Layout resolution: export size presets, cover-crop geometry and
//! percentage-to-pixel conversion for text layers.
//!
//! The resolver is pure arithmetic. Given a template, a target size
//! preset and the source image dimensions it produces absolute pixel
//! geometry for the canvas, the drawn background rectangle and every
//! text layer.

use serde::{Deserialize, Serialize};

use crate::error::MemeError;
use crate::style::FontSizeMode;
use crate::template::TemplateDescriptor;

/// Named target aspect ratio for export.
///
/// `Original` keeps the source image's native dimensions with no
/// cropping; all other presets scale-to-cover and center-crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportSize {
    #[default]
    Original,
    Square,
    Landscape,
    Portrait,
    /// 2:1 banner for social link cards.
    #[serde(alias = "twitter")]
    SocialWide,
}

impl ExportSize {
    /// All presets, in menu order.
    pub fn all() -> &'static [ExportSize] {
        &[
            ExportSize::Original,
            ExportSize::Square,
            ExportSize::Landscape,
            ExportSize::Portrait,
            ExportSize::SocialWide,
        ]
    }

    /// Target pixel dimensions, or `None` for the native-size preset.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match self {
            ExportSize::Original => None,
            ExportSize::Square => Some((1080, 1080)),
            ExportSize::Landscape => Some((1920, 1080)),
            ExportSize::Portrait => Some((1080, 1920)),
            ExportSize::SocialWide => Some((1200, 600)),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportSize::Original => "Original",
            ExportSize::Square => "Square (1:1)",
            ExportSize::Landscape => "Landscape (16:9)",
            ExportSize::Portrait => "Portrait (9:16)",
            ExportSize::SocialWide => "Social (2:1)",
        }
    }
}

/// Absolute pixel geometry for one text layer, relative to the canvas
/// (already offset by any crop padding).
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLayer {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    /// Derived font size for the default scaled mode. A layer style with
    /// an absolute size overrides this at draw time.
    pub font_px: f32,
}

/// Canvas, background placement and per-layer geometry for one render.
///
/// Recomputed fresh per render call; never cached across renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedGeometry {
    pub canvas_w: u32,
    pub canvas_h: u32,
    /// Top-left of the drawn background. Negative when the source is
    /// cropped on that axis.
    pub draw_x: f32,
    pub draw_y: f32,
    pub draw_w: f32,
    pub draw_h: f32,
    pub layers: Vec<ResolvedLayer>,
}

/// Resolve pixel geometry for `template` at `size` given the source
/// image dimensions.
///
/// For a fixed-ratio preset the background is scaled to cover the full
/// canvas and center-cropped: overflow is cut, never letterboxed. The
/// relatively-wider source fits height and crops width; otherwise it
/// fits width and crops height.
pub fn resolve(
    template: &TemplateDescriptor,
    size: ExportSize,
    source_w: u32,
    source_h: u32,
) -> Result<ResolvedGeometry, MemeError> {
    if source_w == 0 || source_h == 0 {
        return Err(MemeError::InvalidGeometry(format!(
            "source image dimensions must be positive, got {}x{}",
            source_w, source_h
        )));
    }

    let (canvas_w, canvas_h, draw_x, draw_y, draw_w, draw_h) = match size.dimensions() {
        None => (
            source_w,
            source_h,
            0.0,
            0.0,
            source_w as f32,
            source_h as f32,
        ),
        Some((target_w, target_h)) => {
            let img_ratio = source_w as f32 / source_h as f32;
            let target_ratio = target_w as f32 / target_h as f32;

            if img_ratio > target_ratio {
                // Source relatively wider: fit height, crop width
                let draw_h = target_h as f32;
                let draw_w = source_w as f32 * (target_h as f32 / source_h as f32);
                let draw_x = (target_w as f32 - draw_w) / 2.0;
                (target_w, target_h, draw_x, 0.0, draw_w, draw_h)
            } else {
                // Source relatively taller or equal: fit width, crop height
                let draw_w = target_w as f32;
                let draw_h = source_h as f32 * (target_w as f32 / source_w as f32);
                let draw_y = (target_h as f32 - draw_h) / 2.0;
                (target_w, target_h, 0.0, draw_y, draw_w, draw_h)
            }
        }
    };

    let font_px = FontSizeMode::default().resolve(canvas_w);

    let layers = template
        .layers
        .iter()
        .enumerate()
        .map(|(i, spec)| ResolvedLayer {
            x: draw_x + spec.x_pct() / 100.0 * draw_w,
            y: draw_y + spec.y_pct(i) / 100.0 * draw_h,
            width: spec.width_pct() / 100.0 * draw_w,
            font_px,
        })
        .collect();

    Ok(ResolvedGeometry {
        canvas_w,
        canvas_h,
        draw_x,
        draw_y,
        draw_w,
        draw_h,
        layers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::TextLayerSpec;
    use pretty_assertions::assert_eq;

    fn template_with_layers(layers: Vec<TextLayerSpec>) -> TemplateDescriptor {
        TemplateDescriptor {
            id: "t".into(),
            name: "T".into(),
            image_url: "t.png".into(),
            layers,
        }
    }

    #[test]
    fn original_preset_passes_source_through() {
        let geo = resolve(&template_with_layers(vec![]), ExportSize::Original, 1280, 720)
            .unwrap();
        assert_eq!((geo.canvas_w, geo.canvas_h), (1280, 720));
        assert_eq!((geo.draw_x, geo.draw_y), (0.0, 0.0));
        assert_eq!((geo.draw_w, geo.draw_h), (1280.0, 720.0));
    }

    #[test]
    fn wider_source_fits_height_and_crops_width() {
        // 1280x720 (1.78) into 1080x1080 (1.0)
        let geo = resolve(&template_with_layers(vec![]), ExportSize::Square, 1280, 720)
            .unwrap();
        assert_eq!(geo.draw_h, 1080.0);
        assert_eq!(geo.draw_w, 1920.0);
        assert_eq!(geo.draw_x, -420.0);
        assert_eq!(geo.draw_y, 0.0);
    }

    #[test]
    fn taller_source_fits_width_and_crops_height() {
        // 720x1280 into 1920x1080
        let geo = resolve(
            &template_with_layers(vec![]),
            ExportSize::Landscape,
            720,
            1280,
        )
        .unwrap();
        assert_eq!(geo.draw_w, 1920.0);
        assert!(geo.draw_h > 1080.0);
        assert_eq!(geo.draw_x, 0.0);
        assert!(geo.draw_y < 0.0);
    }

    #[test]
    fn cover_crop_never_underfills() {
        for &(w, h) in &[(100u32, 100u32), (1280, 720), (720, 1280), (333, 777)] {
            for &size in ExportSize::all() {
                let geo = resolve(&template_with_layers(vec![]), size, w, h).unwrap();
                assert!(geo.draw_w >= geo.canvas_w as f32 - 0.5);
                assert!(geo.draw_h >= geo.canvas_h as f32 - 0.5);
            }
        }
    }

    #[test]
    fn full_width_layer_spans_drawn_area() {
        let layer = TextLayerSpec {
            x: Some(0.0),
            y: Some(0.0),
            width: Some(100.0),
            ..Default::default()
        };
        let geo = resolve(&template_with_layers(vec![layer]), ExportSize::Square, 1280, 720)
            .unwrap();
        let resolved = &geo.layers[0];
        assert_eq!(resolved.x, geo.draw_x);
        assert_eq!(resolved.y, geo.draw_y);
        assert_eq!(resolved.width, geo.draw_w);
    }

    #[test]
    fn layer_defaults_follow_index_convention() {
        let geo = resolve(
            &template_with_layers(vec![TextLayerSpec::default(), TextLayerSpec::default()]),
            ExportSize::Original,
            1000,
            1000,
        )
        .unwrap();
        assert_eq!(geo.layers[0].y, 100.0); // 10%
        assert_eq!(geo.layers[1].y, 850.0); // 85%
        assert_eq!(geo.layers[0].x, 50.0); // 5%
        assert_eq!(geo.layers[0].width, 900.0); // 90%
    }

    #[test]
    fn derived_font_scales_with_canvas_width() {
        let geo = resolve(&template_with_layers(vec![TextLayerSpec::default()]),
            ExportSize::Square, 1280, 720).unwrap();
        assert_eq!(geo.layers[0].font_px, 54.0); // 1080 * 0.05
    }

    #[test]
    fn zero_source_dimensions_fail_fast() {
        let err = resolve(&template_with_layers(vec![]), ExportSize::Original, 0, 720);
        assert!(matches!(err, Err(MemeError::InvalidGeometry(_))));
    }
}
