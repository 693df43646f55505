//! Server state and configuration.

use std::path::PathBuf;

use crate::error::MemeError;
use crate::fonts::GlyphPainter;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
    /// Explicit font file; falls back to the system search list.
    pub font_path: Option<PathBuf>,
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
    /// Shared HTTP client for background image fetches.
    pub client: reqwest::Client,
    /// Loaded once at startup; renders are stateless per request.
    pub painter: GlyphPainter,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Result<Self, MemeError> {
        let painter = match &config.font_path {
            Some(path) => GlyphPainter::from_path(path)?,
            None => GlyphPainter::from_system()?,
        };
        let client = reqwest::Client::builder()
            .user_agent("memeforge/0.1")
            .build()
            .map_err(|e| MemeError::ImageUnavailable(format!("HTTP client error: {}", e)))?;
        Ok(Self {
            config,
            client,
            painter,
        })
    }
}
