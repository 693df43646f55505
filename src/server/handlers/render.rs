//! Render API handler: JSON request in, PNG bytes out.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::error::MemeError;
use crate::layout::ExportSize;
use crate::style::{LayerStyle, Watermark};
use crate::template::{TemplateDescriptor, TextLayerSpec};
use crate::{catalog, export, fetch, raster};

use super::super::state::AppState;

/// Request body for the render endpoint.
///
/// Either `template` (a catalog slug, captions mapped positionally onto
/// its layers) or `image` (path/URL with explicit or default text
/// areas) must be supplied.
#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    /// Catalog template slug.
    pub template: Option<String>,
    /// Background image path or URL (used when `template` is absent).
    pub image: Option<String>,
    /// Caption per layer, in reading order.
    #[serde(default)]
    pub captions: Vec<String>,
    /// Explicit text areas overriding the template/default layout.
    #[serde(default)]
    pub text_areas: Vec<TextLayerSpec>,
    #[serde(default)]
    pub size: ExportSize,
    /// Per-layer styles; layers without one use the classic default.
    #[serde(default)]
    pub styles: Vec<LayerStyle>,
    #[serde(default)]
    pub watermark: bool,
}

/// POST /api/render - Composite a meme and return it as PNG.
pub async fn render(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RenderRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let template = resolve_template(&request)?;

    let background = fetch::load_image(&template.image_url, &state.client)
        .await
        .map_err(to_http)?;

    info!(
        template = %template.id,
        layers = template.layers.len(),
        size = ?request.size,
        "rendering meme"
    );

    let watermark = request.watermark.then(Watermark::default);
    let bitmap = raster::compose(
        &background,
        &template,
        &request.styles,
        request.size,
        watermark.as_ref(),
        &state.painter,
    )
    .map_err(to_http)?;

    let png = export::encode_png(&bitmap).map_err(to_http)?;

    Ok((
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (
                header::CACHE_CONTROL,
                "no-store, must-revalidate".to_string(),
            ),
        ],
        png,
    ))
}

/// Build the effective template from the request fields.
fn resolve_template(request: &RenderRequest) -> Result<TemplateDescriptor, (StatusCode, String)> {
    let mut template = match (&request.template, &request.image) {
        (Some(slug), _) => catalog::by_id(slug)
            .ok_or((
                StatusCode::NOT_FOUND,
                format!("Template '{}' not found", slug),
            ))?
            .with_captions(&request.captions),
        (None, Some(image)) => {
            if request.text_areas.is_empty() {
                TemplateDescriptor::from_image(image, &request.captions)
            } else {
                TemplateDescriptor {
                    image_url: image.clone(),
                    layers: request.text_areas.clone(),
                    ..TemplateDescriptor::default()
                }
            }
        }
        (None, None) => {
            return Err((
                StatusCode::BAD_REQUEST,
                "either 'template' or 'image' is required".to_string(),
            ));
        }
    };

    // Explicit text areas also override a catalog template's layout.
    if request.template.is_some() && !request.text_areas.is_empty() {
        template.layers = request.text_areas.clone();
    }

    Ok(template)
}

fn to_http(err: MemeError) -> (StatusCode, String) {
    let status = match err {
        MemeError::ImageUnavailable(_) => StatusCode::BAD_GATEWAY,
        MemeError::InvalidGeometry(_) => StatusCode::BAD_REQUEST,
        MemeError::UnknownTemplate(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, err.to_string())
}
