//! Background image loading.
//!
//! The engine consumes already-decoded pixels; this module is the single
//! async boundary that turns an image reference (filesystem path or
//! http(s) URL) into an `RgbaImage`. Failures surface once as
//! [`MemeError::ImageUnavailable`]; retry policy, if any, belongs to the
//! caller.

use image::RgbaImage;

use crate::error::MemeError;

/// Load and decode an image from a path or URL.
pub async fn load_image(source: &str, client: &reqwest::Client) -> Result<RgbaImage, MemeError> {
    let bytes = if source.starts_with("http://") || source.starts_with("https://") {
        fetch_url(source, client).await?
    } else {
        tokio::fs::read(source)
            .await
            .map_err(|e| MemeError::ImageUnavailable(format!("failed to read {}: {}", source, e)))?
    };

    decode(&bytes, source)
}

async fn fetch_url(url: &str, client: &reqwest::Client) -> Result<Vec<u8>, MemeError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| MemeError::ImageUnavailable(format!("failed to fetch {}: {}", url, e)))?;

    if !response.status().is_success() {
        return Err(MemeError::ImageUnavailable(format!(
            "failed to fetch {}: HTTP {}",
            url,
            response.status()
        )));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| MemeError::ImageUnavailable(format!("failed to read body of {}: {}", url, e)))?;
    Ok(bytes.to_vec())
}

/// Decode image bytes to RGBA8.
pub fn decode(bytes: &[u8], source: &str) -> Result<RgbaImage, MemeError> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| MemeError::ImageUnavailable(format!("failed to decode {}: {}", source, e)))?;
    Ok(img.to_rgba8())
}
