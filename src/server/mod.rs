//! # HTTP Render Service
//!
//! Exposes the compositing engine over HTTP: the template catalog and a
//! render endpoint returning PNG bytes.
//!
//! ## Usage
//!
//! ```bash
//! memeforge serve --listen 0.0.0.0:8080
//! ```

mod handlers;
mod state;

pub use state::ServerConfig;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::error::MemeError;
use state::AppState;

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use memeforge::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), memeforge::error::MemeError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
///     font_path: None,
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), MemeError> {
    let app_state = Arc::new(AppState::new(config.clone())?);

    let app = Router::new()
        .route("/api/templates", get(handlers::templates::list))
        .route("/api/templates/:id", get(handlers::templates::get))
        .route("/api/render", post(handlers::render::render))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    println!("Memeforge render service starting...");
    println!("Listening on: {}", config.listen_addr);
    println!();
    println!(
        "POST a render request to http://{}/api/render",
        config.listen_addr
    );

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            MemeError::Io(std::io::Error::other(format!(
                "Failed to bind to {}: {}",
                config.listen_addr, e
            )))
        })?;

    axum::serve(listener, app)
        .await
        .map_err(|e| MemeError::Io(std::io::Error::other(format!("Server error: {}", e))))?;

    Ok(())
}
