//! # Memeforge CLI
//!
//! Command-line interface for meme rendering.
//!
//! ## Usage
//!
//! ```bash
//! # List built-in templates
//! memeforge templates
//!
//! # Caption a catalog template. Catalog entries reference their image
//! # as a relative path (imgs/templates/<slug>.webp), so run from a
//! # directory holding that asset tree, or use --image instead.
//! memeforge render --template drake-hotline-bling \
//!     --text "manual image editing" --text "memeforge" -o meme.png
//!
//! # Caption an arbitrary image at a social export size
//! memeforge render --image photo.jpg --text "one does not simply" \
//!     --text "walk into mordor" --size square --watermark -o meme.png
//!
//! # Start the HTTP render service
//! memeforge serve --listen 0.0.0.0:8080
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use memeforge::{
    catalog, export,
    fonts::GlyphPainter,
    layout::ExportSize,
    raster,
    server::{self, ServerConfig},
    style::Watermark,
    template::TemplateDescriptor,
    MemeError,
};

/// Memeforge - meme compositing utility
#[derive(Parser, Debug)]
#[command(name = "memeforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// CLI mirror of [`ExportSize`] for `--size`.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SizeArg {
    Original,
    Square,
    Landscape,
    Portrait,
    SocialWide,
}

impl From<SizeArg> for ExportSize {
    fn from(arg: SizeArg) -> Self {
        match arg {
            SizeArg::Original => ExportSize::Original,
            SizeArg::Square => ExportSize::Square,
            SizeArg::Landscape => ExportSize::Landscape,
            SizeArg::Portrait => ExportSize::Portrait,
            SizeArg::SocialWide => ExportSize::SocialWide,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a meme to a PNG file
    Render {
        /// Catalog template slug (see `memeforge templates`)
        #[arg(long, conflicts_with = "image")]
        template: Option<String>,

        /// Background image path or URL
        #[arg(long)]
        image: Option<String>,

        /// Caption text, one per layer in reading order (repeatable)
        #[arg(long = "text")]
        texts: Vec<String>,

        /// Export size preset
        #[arg(long, value_enum, default_value = "original")]
        size: SizeArg,

        /// Draw the corner watermark
        #[arg(long)]
        watermark: bool,

        /// Font file (defaults to a system font search)
        #[arg(long)]
        font: Option<PathBuf>,

        /// Output file
        #[arg(short, long, default_value = "meme.png")]
        output: PathBuf,
    },

    /// List built-in templates
    Templates,

    /// Start the HTTP render service
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:8080")]
        listen: String,

        /// Font file (defaults to a system font search)
        #[arg(long)]
        font: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "memeforge=info,tower_http=info".into()),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), MemeError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            template,
            image,
            texts,
            size,
            watermark,
            font,
            output,
        } => {
            let descriptor = match (template, image) {
                (Some(slug), _) => catalog::by_id(&slug)
                    .ok_or_else(|| MemeError::UnknownTemplate(slug.clone()))?
                    .with_captions(&texts),
                (None, Some(image)) => TemplateDescriptor::from_image(&image, &texts),
                (None, None) => {
                    return Err(MemeError::ImageUnavailable(
                        "either --template or --image is required".to_string(),
                    ));
                }
            };

            let painter = match font {
                Some(path) => GlyphPainter::from_path(&path)?,
                None => GlyphPainter::from_system()?,
            };

            let client = reqwest::Client::builder()
                .user_agent("memeforge/0.1")
                .build()
                .map_err(|e| MemeError::ImageUnavailable(format!("HTTP client error: {}", e)))?;
            let background = memeforge::fetch::load_image(&descriptor.image_url, &client).await?;

            let watermark = watermark.then(Watermark::default);
            let bitmap = raster::compose(
                &background,
                &descriptor,
                &[],
                size.into(),
                watermark.as_ref(),
                &painter,
            )?;

            export::save_png(&bitmap, &output)?;
            println!(
                "Rendered {}x{} meme to {}",
                bitmap.width(),
                bitmap.height(),
                output.display()
            );
        }

        Commands::Templates => {
            println!("Available templates:");
            for t in catalog::list() {
                println!("  {:<24} {} ({} layers)", t.id, t.name, t.layers.len());
            }
        }

        Commands::Serve { listen, font } => {
            server::serve(ServerConfig {
                listen_addr: listen,
                font_path: font,
            })
            .await?;
        }
    }

    Ok(())
}
