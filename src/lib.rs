//! # Memeforge - Meme Compositing Engine
//!
//! Memeforge deterministically renders a template image plus a set of
//! positioned text layers into a final PNG-encodable bitmap, at multiple
//! target aspect ratios, with consistent text layout rules. It provides:
//!
//! - **Layout resolution**: percentage-based text regions to absolute
//!   pixels, with cover-crop export presets
//! - **Text wrapping**: greedy word wrap sharing metrics with drawing
//! - **Rasterization**: classic stroke-then-fill meme text, rotation,
//!   shadows and watermarking over the `image` crate
//! - **Serving**: a clap CLI and an axum HTTP render endpoint
//!
//! ## Quick Start
//!
//! ```no_run
//! use memeforge::{catalog, export, fonts::GlyphPainter, layout::ExportSize, raster};
//!
//! # fn main() -> Result<(), memeforge::MemeError> {
//! let painter = GlyphPainter::from_system()?;
//! let template = catalog::by_id("drake-hotline-bling")
//!     .unwrap()
//!     .with_captions(&["writing memes by hand".into(), "rendering them in rust".into()]);
//!
//! let background = image::open("drake.png")
//!     .map_err(|e| memeforge::MemeError::ImageUnavailable(e.to_string()))?
//!     .to_rgba8();
//!
//! let bitmap = raster::compose(
//!     &background,
//!     &template,
//!     &[],
//!     ExportSize::Square,
//!     None,
//!     &painter,
//! )?;
//! export::save_png(&bitmap, std::path::Path::new("meme.png"))?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`layout`] | Export presets and pixel geometry resolution |
//! | [`wrap`] | Greedy word wrapping |
//! | [`raster`] | Compositing and drawing |
//! | [`fonts`] | Text measurement/painting seam |
//! | [`template`] | Template and text layer data model |
//! | [`catalog`] | Built-in template registry |
//! | [`fetch`] | Background image loading |
//! | [`export`] | PNG encoding |
//! | [`server`] | HTTP render service |
//! | [`error`] | Error types |

pub mod catalog;
pub mod error;
pub mod export;
pub mod fetch;
pub mod fonts;
pub mod layout;
pub mod raster;
pub mod server;
pub mod style;
pub mod template;
pub mod wrap;

// Re-exports for convenience
pub use error::MemeError;
pub use layout::ExportSize;
pub use template::TemplateDescriptor;
