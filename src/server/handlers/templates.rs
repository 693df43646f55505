//! Template catalog API handlers.

use axum::{extract::Path, http::StatusCode, Json};
use serde::Serialize;

use crate::catalog;
use crate::template::TemplateDescriptor;

/// Catalog entry summary returned by the list endpoint.
#[derive(Debug, Serialize)]
pub struct TemplateInfo {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub layer_count: usize,
}

/// GET /api/templates - List all built-in templates.
pub async fn list() -> Json<Vec<TemplateInfo>> {
    Json(
        catalog::list()
            .iter()
            .map(|t| TemplateInfo {
                id: t.id.clone(),
                name: t.name.clone(),
                image_url: t.image_url.clone(),
                layer_count: t.layers.len(),
            })
            .collect(),
    )
}

/// GET /api/templates/:id - Full descriptor for one template.
pub async fn get(
    Path(id): Path<String>,
) -> Result<Json<TemplateDescriptor>, (StatusCode, String)> {
    let template = catalog::by_id(&id).ok_or((
        StatusCode::NOT_FOUND,
        format!("Template '{}' not found", id),
    ))?;
    Ok(Json(template.clone()))
}
