//! Encode command: JSON world listing → listing texture PNG

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use image::{ImageFormat, RgbaImage};
use voyage_listing::{BYTES_PER_PIXEL, max_records};

use crate::manifest;

/// Arguments for the encode command
#[derive(Args)]
pub struct EncodeArgs {
    /// Path to the JSON world listing
    pub source: PathBuf,

    /// Output PNG path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Texture width in pixels
    #[arg(long, default_value_t = 1024)]
    pub width: u32,

    /// Texture height in pixels
    #[arg(long, default_value_t = 1024)]
    pub height: u32,

    /// Last-updated stamp, seconds since Unix epoch (defaults to now)
    #[arg(long)]
    pub timestamp: Option<u64>,
}

/// Execute the encode command
pub fn execute(args: EncodeArgs) -> Result<()> {
    let source = manifest::load_source(&args.source)?;
    println!(
        "Listing source: {} ({} worlds)",
        args.source.display(),
        source.worlds.len()
    );

    let last_updated = match args.timestamp {
        Some(stamp) => stamp,
        None => chrono::Utc::now().timestamp().max(0) as u64,
    };

    let listing = manifest::build_listing(&source, last_updated)?;

    let capacity = args.width as usize * args.height as usize * BYTES_PER_PIXEL;
    println!(
        "  Container: {}x{} ({} bytes, {} record slots)",
        args.width,
        args.height,
        capacity,
        max_records(capacity)
    );

    let buffer = voyage_listing::encode(&listing, capacity).context("Failed to encode listing")?;

    // Raw bytes become RGBA8 pixels as-is; PNG keeps them lossless
    let texture = RgbaImage::from_raw(args.width, args.height, buffer)
        .context("Encoded buffer does not match the texture dimensions")?;
    texture
        .save_with_format(&args.output, ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!(
        "Created: {} ({} records, updated at epoch {})",
        args.output.display(),
        listing.len(),
        last_updated
    );

    Ok(())
}
