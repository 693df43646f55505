//! Template and text layer data model.
//!
//! A template is a background image reference plus an ordered set of
//! percentage-based text regions. Layer order is both z-order and the
//! reading order that generated captions map onto.

use serde::{Deserialize, Serialize};

/// Default horizontal position when a layer omits `x`, percent.
pub const DEFAULT_X: f32 = 5.0;

/// Default layer width when omitted, percent of canvas width.
pub const DEFAULT_WIDTH: f32 = 90.0;

/// Default `y` for the first layer (top caption), percent.
pub const DEFAULT_Y_TOP: f32 = 10.0;

/// Default `y` for every subsequent layer (bottom caption), percent.
pub const DEFAULT_Y_BOTTOM: f32 = 85.0;

/// One placeholder region on a template.
///
/// Positions and sizes are percentages of the drawn image area (0–100).
/// `height` is advisory only: text may overflow vertically and is never
/// clipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextLayerSpec {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    #[serde(default)]
    pub text: String,
}

impl TextLayerSpec {
    pub fn x_pct(&self) -> f32 {
        self.x.unwrap_or(DEFAULT_X)
    }

    /// Missing `y` follows the top-caption/bottom-caption convention:
    /// the first layer defaults near the top, all others near the bottom.
    /// Template data relies on this exact rule.
    pub fn y_pct(&self, layer_index: usize) -> f32 {
        self.y.unwrap_or(if layer_index == 0 {
            DEFAULT_Y_TOP
        } else {
            DEFAULT_Y_BOTTOM
        })
    }

    pub fn width_pct(&self) -> f32 {
        self.width.unwrap_or(DEFAULT_WIDTH)
    }
}

/// A background image plus its declared text regions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateDescriptor {
    pub id: String,
    pub name: String,
    /// Opaque image reference (path or URL); resolved by [`crate::fetch`].
    pub image_url: String,
    /// Insertion order = z-order and caption reading order. An empty list
    /// is valid (image-only render).
    #[serde(default)]
    pub layers: Vec<TextLayerSpec>,
}

impl TemplateDescriptor {
    /// Map machine-generated captions positionally onto the template's
    /// layers: caption *i* fills layer *i*. Layers without a caption
    /// render empty; excess captions are dropped.
    pub fn with_captions(&self, captions: &[String]) -> TemplateDescriptor {
        let layers = self
            .layers
            .iter()
            .enumerate()
            .map(|(i, layer)| TextLayerSpec {
                text: captions.get(i).cloned().unwrap_or_default(),
                ..layer.clone()
            })
            .collect();
        TemplateDescriptor {
            layers,
            ..self.clone()
        }
    }

    /// Build an ad-hoc template around a bare image: one layer per
    /// caption, positioned by the top/bottom default convention.
    pub fn from_image(image_url: &str, captions: &[String]) -> TemplateDescriptor {
        TemplateDescriptor {
            id: String::new(),
            name: String::new(),
            image_url: image_url.to_string(),
            layers: captions
                .iter()
                .map(|text| TextLayerSpec {
                    text: text.clone(),
                    ..TextLayerSpec::default()
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_fields_use_meme_conventions() {
        let layer = TextLayerSpec::default();
        assert_eq!(layer.x_pct(), 5.0);
        assert_eq!(layer.width_pct(), 90.0);
        assert_eq!(layer.y_pct(0), 10.0);
        assert_eq!(layer.y_pct(1), 85.0);
        assert_eq!(layer.y_pct(3), 85.0);
    }

    #[test]
    fn explicit_fields_win_over_defaults() {
        let layer = TextLayerSpec {
            x: Some(8.0),
            y: Some(75.0),
            width: Some(25.0),
            ..Default::default()
        };
        assert_eq!(layer.x_pct(), 8.0);
        assert_eq!(layer.y_pct(0), 75.0);
        assert_eq!(layer.width_pct(), 25.0);
    }

    #[test]
    fn captions_map_positionally() {
        let template = TemplateDescriptor {
            id: "t".into(),
            name: "T".into(),
            image_url: "t.png".into(),
            layers: vec![
                TextLayerSpec::default(),
                TextLayerSpec::default(),
                TextLayerSpec::default(),
            ],
        };
        let filled = template.with_captions(&["a".into(), "b".into()]);
        assert_eq!(filled.layers[0].text, "a");
        assert_eq!(filled.layers[1].text, "b");
        // fewer captions than layers: remainder renders empty
        assert_eq!(filled.layers[2].text, "");
    }

    #[test]
    fn from_image_positions_captions_top_then_bottom() {
        let t = TemplateDescriptor::from_image("x.png", &["top".into(), "bottom".into()]);
        assert_eq!(t.layers.len(), 2);
        assert_eq!(t.layers[0].y_pct(0), DEFAULT_Y_TOP);
        assert_eq!(t.layers[1].y_pct(1), DEFAULT_Y_BOTTOM);
    }
}
