//! HTTP handlers for the server.

pub mod render;
pub mod templates;
